use crate::config::{DEFAULT_CRF, DEFAULT_FRAMERATE, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::SmolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSettings {
    pub crf: u32,
    pub framerate: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            crf: DEFAULT_CRF,
            framerate: DEFAULT_FRAMERATE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl EncodeSettings {
    pub fn apply_preset(&mut self, preset: ResolutionPreset) {
        let (width, height) = preset.resolution();
        self.width = width;
        self.height = height;
    }

    /// The text fields accept any run of digits, so zero can get this far.
    pub fn check(&self) -> Result<(), SmolError> {
        if self.framerate == 0 {
            return Err(SmolError::InvalidSettings("framerate must be above 0".into()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(SmolError::InvalidSettings(format!(
                "resolution {}x{} has a zero side",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPreset {
    Hd,
    FullHd,
    QuadHd,
}

impl ResolutionPreset {
    pub fn all() -> &'static [ResolutionPreset] {
        &[
            ResolutionPreset::Hd,
            ResolutionPreset::FullHd,
            ResolutionPreset::QuadHd,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResolutionPreset::Hd => "HD",
            ResolutionPreset::FullHd => "Full HD",
            ResolutionPreset::QuadHd => "Quad HD",
        }
    }

    pub fn resolution(&self) -> (u32, u32) {
        match self {
            ResolutionPreset::Hd => (1280, 720),
            ResolutionPreset::FullHd => (1920, 1080),
            ResolutionPreset::QuadHd => (2560, 1440),
        }
    }

    /// Preset matching an exact width and height, if any.
    pub fn matching(width: u32, height: u32) -> Option<ResolutionPreset> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.resolution() == (width, height))
    }
}
