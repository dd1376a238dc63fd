use crate::coordinates::Viewport;
use crate::layout::SelectionLayout;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_FRAME_RATE: f32 = 60.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse flight config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("at least one aircraft preset is required")]
    EmptyPresets,
    #[error("invalid preset {name:?}: {reason}")]
    InvalidPreset { name: String, reason: &'static str },
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("invalid frame rate {0}")]
    InvalidFrameRate(f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiclePreset {
    pub name: String,
    pub cruise_speed: f32,
    pub max_altitude: i32,
}

impl VehiclePreset {
    pub fn new(name: impl Into<String>, cruise_speed: f32, max_altitude: i32) -> Self {
        Self {
            name: name.into(),
            cruise_speed,
            max_altitude,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let reason = if self.name.trim().is_empty() {
            Some("name must not be blank")
        } else if !self.cruise_speed.is_finite() || self.cruise_speed < 0.0 {
            Some("cruise speed must be a finite, non-negative number")
        } else if self.max_altitude < 0 {
            Some("max altitude must not be negative")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ConfigError::InvalidPreset {
                name: self.name.clone(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

pub fn default_presets() -> Vec<VehiclePreset> {
    vec![
        VehiclePreset::new("Light Aircraft", 3.0, 5000),
        VehiclePreset::new("Mid-size Airliner", 5.0, 8000),
        VehiclePreset::new("Fighter Jet", 7.0, 12000),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub viewport: Viewport,
    pub frame_rate: f32,
    pub layout: SelectionLayout,
    pub presets: Vec<VehiclePreset>,
}

impl FlightConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.viewport.validate()?;
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(ConfigError::InvalidFrameRate(self.frame_rate));
        }
        if self.presets.is_empty() {
            return Err(ConfigError::EmptyPresets);
        }
        self.presets.iter().try_for_each(VehiclePreset::validate)
    }

    pub fn frame_seconds(&self) -> f32 {
        1.0 / self.frame_rate
    }
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            frame_rate: DEFAULT_FRAME_RATE,
            layout: SelectionLayout::default(),
            presets: default_presets(),
        }
    }
}
