use crate::config::SLIDER_STEP;
use std::ops::RangeInclusive;

/// Selected [start, end] interval in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimRange {
    pub start: f64,
    pub end: f64,
}

impl TrimRange {
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Fixed bounds of the loaded media. `max` is the probed duration
/// rounded to slider resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaBounds {
    pub min: f64,
    pub max: f64,
}

impl MediaBounds {
    pub fn from_duration(duration: f64) -> Self {
        Self {
            min: 0.0,
            max: snap(duration),
        }
    }

    pub fn full_range(&self) -> TrimRange {
        TrimRange {
            start: self.min,
            end: self.max,
        }
    }

    /// The start slider stops one second short of the end of the media.
    pub fn start_slider(&self) -> RangeInclusive<f64> {
        self.min..=self.max - 1.0
    }

    /// The end slider begins one second into the media.
    pub fn end_slider(&self) -> RangeInclusive<f64> {
        self.min + 1.0..=self.max
    }
}

/// Result of running a typed value through the range rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjusted {
    Accepted(f64),
    Clamped(f64),
}

impl Adjusted {
    pub fn value(&self) -> f64 {
        match *self {
            Adjusted::Accepted(v) | Adjusted::Clamped(v) => v,
        }
    }
}

/// Start text rule: accepted when `min <= value < end`.
///
/// A value at or past `end` jumps to the end of the media, not to just
/// before `end`. The range is left empty until the user fixes it, and the
/// encode is refused while it is.
pub fn adjust_start(value: f64, range: &TrimRange, bounds: &MediaBounds) -> Adjusted {
    if value < bounds.min {
        Adjusted::Clamped(bounds.min)
    } else if value < range.end {
        Adjusted::Accepted(value)
    } else {
        Adjusted::Clamped(bounds.max)
    }
}

/// End text rule: accepted when `start < value <= max`. A value at or
/// below `start` drops to the start of the media.
pub fn adjust_end(value: f64, range: &TrimRange, bounds: &MediaBounds) -> Adjusted {
    if value > bounds.max {
        Adjusted::Clamped(bounds.max)
    } else if value > range.start {
        Adjusted::Accepted(value)
    } else {
        Adjusted::Clamped(bounds.min)
    }
}

/// Round to slider resolution.
pub fn snap(value: f64) -> f64 {
    let steps_per_second = (1.0 / SLIDER_STEP).round();
    (value * steps_per_second).round() / steps_per_second
}

/// Text shown for a value written by the program rather than typed.
pub fn format_seconds(value: f64) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> MediaBounds {
        MediaBounds::from_duration(120.0)
    }

    #[test]
    fn test_bounds_round_duration() {
        let b = MediaBounds::from_duration(120.033);
        assert_eq!(b.min, 0.0);
        assert!((b.max - 120.0).abs() < 1e-9);
        assert_eq!(format_seconds(MediaBounds::from_duration(59.96).max), "60.0");
    }

    #[test]
    fn test_slider_ranges_keep_a_second_apart() {
        let b = bounds();
        assert_eq!(b.start_slider(), 0.0..=119.0);
        assert_eq!(b.end_slider(), 1.0..=120.0);
    }

    #[test]
    fn test_adjust_start() {
        let b = bounds();
        let r = TrimRange { start: 0.0, end: 40.0 };
        assert_eq!(adjust_start(12.5, &r, &b), Adjusted::Accepted(12.5));
        assert_eq!(adjust_start(0.0, &r, &b), Adjusted::Accepted(0.0));
        assert_eq!(adjust_start(-3.0, &r, &b), Adjusted::Clamped(0.0));
        assert_eq!(adjust_start(40.0, &r, &b), Adjusted::Clamped(120.0));
        assert_eq!(adjust_start(130.0, &r, &b), Adjusted::Clamped(120.0));
    }

    #[test]
    fn test_adjust_end() {
        let b = bounds();
        let r = TrimRange { start: 10.0, end: 120.0 };
        assert_eq!(adjust_end(30.0, &r, &b), Adjusted::Accepted(30.0));
        assert_eq!(adjust_end(120.0, &r, &b), Adjusted::Accepted(120.0));
        assert_eq!(adjust_end(150.0, &r, &b), Adjusted::Clamped(120.0));
        assert_eq!(adjust_end(10.0, &r, &b), Adjusted::Clamped(0.0));
        assert_eq!(adjust_end(2.0, &r, &b), Adjusted::Clamped(0.0));
    }

    #[test]
    fn test_snap() {
        assert!((snap(0.30000000000000004) - 0.3).abs() < 1e-12);
        assert_eq!(format_seconds(snap(12.349)), "12.3");
    }
}
