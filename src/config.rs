// Startup configuration. Built from defaults; there is no runtime override.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::GridSize;

/// CSS colors for the four drawing roles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: String,
    pub foreground: String,
    pub grid: String,
    pub text: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "black".into(),
            foreground: "white".into(),
            grid: "gray".into(),
            text: "black".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: GridSize,
    /// Share of the viewport the surface may occupy on each axis.
    pub viewport_fill: f64,
    /// Label font size as a share of the cell size.
    pub font_scale: f64,
    pub palette: Palette,
    pub log_level: LevelFilter,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: GridSize::default(),
            viewport_fill: 0.8,
            font_scale: 0.8,
            palette: Palette::default(),
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive (got {width}x{height})")]
    ZeroDimension { width: u32, height: u32 },
    #[error("{name} must be in (0, 1] (got {value})")]
    InvalidRatio { name: &'static str, value: f64 },
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.size.width,
                height: self.size.height,
            });
        }
        for (name, value) in [
            ("viewport_fill", self.viewport_fill),
            ("font_scale", self.font_scale),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::InvalidRatio { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo() {
        let cfg = GridConfig::default();

        assert_eq!(cfg.size, GridSize::new(30, 20));
        assert_eq!(cfg.viewport_fill, 0.8);
        assert_eq!(cfg.palette.background, "black");
        assert_eq!(cfg.palette.grid, "gray");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_height() {
        let cfg = GridConfig {
            size: GridSize::new(30, 0),
            ..Default::default()
        };

        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ZeroDimension { width: 30, height: 0 })
        );
    }

    #[test]
    fn validate_rejects_out_of_range_ratios() {
        let cfg = GridConfig {
            viewport_fill: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRatio { name: "viewport_fill", .. })
        ));

        let cfg = GridConfig {
            font_scale: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRatio { name: "font_scale", .. })
        ));
    }

    #[test]
    fn config_serialises_for_startup_log() {
        let json = serde_json::to_string(&GridConfig::default()).expect("serialisable");

        assert!(json.contains("\"width\":30"));
        assert!(json.contains("\"background\":\"black\""));
    }
}
