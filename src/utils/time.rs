/// Format seconds to HH:MM:SS.mmm format
pub fn format_time(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let total_millis = (seconds * 1000.0).round() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
    } else {
        format!("{:02}:{:02}.{:03}", minutes, secs, millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "00:00.000");
        assert_eq!(format_time(65.5), "01:05.500");
        assert_eq!(format_time(3661.123), "01:01:01.123");
        assert_eq!(format_time(30.0), "00:30.000");
    }

    #[test]
    fn test_format_time_rounds_float_noise() {
        assert_eq!(format_time(0.30000000000000004), "00:00.300");
        assert_eq!(format_time(119.9999), "02:00.000");
        assert_eq!(format_time(-1.0), "00:00.000");
    }
}
