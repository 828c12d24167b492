//! Editing state of the one open file and the table of how each UI event
//! updates it. Nothing in here touches the media or spawns processes; side
//! effects are handed back to the caller as [`Effect`]s.

mod range;
mod settings;
mod validate;

pub use range::*;
pub use settings::*;
pub use validate::*;

use crate::error::SmolError;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Start,
    End,
    Crf,
    Framerate,
    Width,
    Height,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::Start,
            Field::End,
            Field::Crf,
            Field::Framerate,
            Field::Width,
            Field::Height,
        ]
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Start | Field::End => FieldKind::Float,
            _ => FieldKind::Integer,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Start => "Start",
            Field::End => "End",
            Field::Crf => "CRF",
            Field::Framerate => "Framerate",
            Field::Width => "Width",
            Field::Height => "Height",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Displayed text of a field plus the last text that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingInput {
    pub text: String,
    pub accepted: String,
}

impl PendingInput {
    fn new(text: String) -> Self {
        Self {
            accepted: text.clone(),
            text,
        }
    }

    fn accept(&mut self, text: String) {
        self.accepted = text.clone();
        self.text = text;
    }

    fn revert(&mut self) {
        self.text = self.accepted.clone();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// New content of a text field after a keystroke.
    Edit(Field, String),
    StartSlider(f64),
    EndSlider(f64),
    SelectPreset(ResolutionPreset),
    Transcode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show the frame at this timestamp.
    RefreshPreview(f64),
    /// Start an encode of the range with these settings.
    Launch {
        range: TrimRange,
        settings: EncodeSettings,
    },
    /// Transcode was pressed but the current state cannot be encoded.
    Report(String),
}

pub struct Session {
    bounds: MediaBounds,
    range: TrimRange,
    settings: EncodeSettings,
    inputs: Vec<PendingInput>,
}

impl Session {
    pub fn new(duration: f64) -> Result<Self, SmolError> {
        let bounds = MediaBounds::from_duration(duration);
        if bounds.max.is_nan() || bounds.max <= 1.0 {
            return Err(SmolError::TooShort { duration });
        }

        let range = bounds.full_range();
        let settings = EncodeSettings::default();
        let inputs = Field::all()
            .iter()
            .map(|field| {
                PendingInput::new(match field {
                    Field::Start => format_seconds(range.start),
                    Field::End => format_seconds(range.end),
                    Field::Crf => settings.crf.to_string(),
                    Field::Framerate => settings.framerate.to_string(),
                    Field::Width => settings.width.to_string(),
                    Field::Height => settings.height.to_string(),
                })
            })
            .collect();

        Ok(Self {
            bounds,
            range,
            settings,
            inputs,
        })
    }

    pub fn bounds(&self) -> &MediaBounds {
        &self.bounds
    }

    pub fn range(&self) -> &TrimRange {
        &self.range
    }

    pub fn settings(&self) -> &EncodeSettings {
        &self.settings
    }

    pub fn input(&self, field: Field) -> &PendingInput {
        &self.inputs[field.index()]
    }

    pub fn text(&self, field: Field) -> &str {
        &self.input(field).text
    }

    /// Preset whose resolution equals the current width and height.
    pub fn preset(&self) -> Option<ResolutionPreset> {
        ResolutionPreset::matching(self.settings.width, self.settings.height)
    }

    fn input_mut(&mut self, field: Field) -> &mut PendingInput {
        &mut self.inputs[field.index()]
    }

    pub fn handle(&mut self, event: SessionEvent) -> Vec<Effect> {
        match event {
            SessionEvent::Edit(field, text) => self.edit(field, text),
            SessionEvent::StartSlider(value) => {
                let range = self.bounds.start_slider();
                let value = snap(value.clamp(*range.start(), *range.end()));
                self.range.start = value;
                self.input_mut(Field::Start).accept(format_seconds(value));
                vec![Effect::RefreshPreview(value)]
            }
            SessionEvent::EndSlider(value) => {
                let range = self.bounds.end_slider();
                let value = snap(value.clamp(*range.start(), *range.end()));
                self.range.end = value;
                self.input_mut(Field::End).accept(format_seconds(value));
                vec![Effect::RefreshPreview(value)]
            }
            SessionEvent::SelectPreset(preset) => {
                self.settings.apply_preset(preset);
                let (width, height) = preset.resolution();
                self.input_mut(Field::Width).accept(width.to_string());
                self.input_mut(Field::Height).accept(height.to_string());
                Vec::new()
            }
            SessionEvent::Transcode => match self.check_transcode() {
                Ok(()) => vec![Effect::Launch {
                    range: self.range,
                    settings: self.settings,
                }],
                Err(e) => vec![Effect::Report(e.to_string())],
            },
        }
    }

    fn edit(&mut self, field: Field, text: String) -> Vec<Effect> {
        match field.kind() {
            FieldKind::Float => match parse_float(&text) {
                Some(value) => self.edit_endpoint(field, value, text),
                None => self.reject(field, &text),
            },
            FieldKind::Integer => match parse_integer(&text) {
                Some(value) => self.edit_setting(field, value, text),
                None => self.reject(field, &text),
            },
        }
    }

    fn reject(&mut self, field: Field, text: &str) -> Vec<Effect> {
        debug!(field = field.name(), text, "rejected edit");
        self.input_mut(field).revert();
        Vec::new()
    }

    fn edit_endpoint(&mut self, field: Field, value: f64, text: String) -> Vec<Effect> {
        let adjusted = if field == Field::Start {
            adjust_start(value, &self.range, &self.bounds)
        } else {
            adjust_end(value, &self.range, &self.bounds)
        };

        let value = adjusted.value();
        if field == Field::Start {
            self.range.start = value;
        } else {
            self.range.end = value;
        }

        match adjusted {
            Adjusted::Accepted(_) => self.input_mut(field).accept(text),
            Adjusted::Clamped(_) => {
                debug!(field = field.name(), typed = %text, clamped = value, "clamped");
                self.input_mut(field).accept(format_seconds(value));
            }
        }
        vec![Effect::RefreshPreview(value)]
    }

    fn edit_setting(&mut self, field: Field, value: u32, text: String) -> Vec<Effect> {
        let slot = match field {
            Field::Crf => &mut self.settings.crf,
            Field::Framerate => &mut self.settings.framerate,
            Field::Width => &mut self.settings.width,
            Field::Height => &mut self.settings.height,
            Field::Start | Field::End => return Vec::new(),
        };
        *slot = value;
        self.input_mut(field).accept(text);
        Vec::new()
    }

    fn check_transcode(&self) -> Result<(), SmolError> {
        if self.range.is_empty() {
            return Err(SmolError::InvalidTrim {
                start: self.range.start,
                end: self.range.end,
            });
        }
        self.settings.check()
    }
}
