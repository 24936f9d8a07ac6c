use crate::error::{ErrorCode, MotifMarkError, Result};
use serde::{Deserialize, Serialize};

/// Fixed geometry of a motif-mark layout, in canvas units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub label_x: f64,
    pub label_start_y: f64,
    pub label_step: f64,
    pub track_start_y: f64,
    pub track_step: f64,
    pub origin_x: f64,
    pub pixels_per_base: f64,
    pub exon_half_height: f64,
    pub tick_half_height: f64,
    pub legend_lift: f64,
    pub legend_title: String,
    pub legend_width: f64,
    pub legend_frame_row: f64,
    pub legend_row_step: f64,
    pub legend_text_x: f64,
    pub legend_swatch_x: f64,
    pub legend_swatch_size: f64,
    pub canvas_margin_x: f64,
    pub canvas_row_height: f64,
    pub canvas_margin_bottom: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            label_x: 50.0,
            label_start_y: 50.0,
            label_step: 150.0,
            track_start_y: 100.0,
            track_step: 150.0,
            origin_x: 100.0,
            pixels_per_base: 1.0,
            exon_half_height: 10.0,
            tick_half_height: 10.0,
            legend_lift: 40.0,
            legend_title: "MOTIF LEGEND".to_string(),
            legend_width: 300.0,
            legend_frame_row: 35.0,
            legend_row_step: 30.0,
            legend_text_x: 100.0,
            legend_swatch_x: 60.0,
            legend_swatch_size: 16.0,
            canvas_margin_x: 300.0,
            canvas_row_height: 250.0,
            canvas_margin_bottom: 20.0,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<()> {
        if !self.pixels_per_base.is_finite() || self.pixels_per_base <= 0.0 {
            return Err(MotifMarkError::new(
                ErrorCode::InvalidInput,
                format!(
                    "pixels_per_base must be a positive number, got {}",
                    self.pixels_per_base
                ),
            ));
        }
        let fields = [
            ("label_x", self.label_x),
            ("label_start_y", self.label_start_y),
            ("label_step", self.label_step),
            ("track_start_y", self.track_start_y),
            ("track_step", self.track_step),
            ("origin_x", self.origin_x),
            ("exon_half_height", self.exon_half_height),
            ("tick_half_height", self.tick_half_height),
            ("legend_lift", self.legend_lift),
            ("legend_width", self.legend_width),
            ("legend_frame_row", self.legend_frame_row),
            ("legend_row_step", self.legend_row_step),
            ("legend_text_x", self.legend_text_x),
            ("legend_swatch_x", self.legend_swatch_x),
            ("legend_swatch_size", self.legend_swatch_size),
            ("canvas_margin_x", self.canvas_margin_x),
            ("canvas_row_height", self.canvas_row_height),
            ("canvas_margin_bottom", self.canvas_margin_bottom),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MotifMarkError::new(
                ErrorCode::InvalidInput,
                format!("{name} must be finite, got {value}"),
            ));
        }
        let sizes = [
            ("exon_half_height", self.exon_half_height),
            ("tick_half_height", self.tick_half_height),
            ("legend_width", self.legend_width),
            ("legend_frame_row", self.legend_frame_row),
            ("legend_swatch_size", self.legend_swatch_size),
            ("canvas_margin_x", self.canvas_margin_x),
            ("canvas_row_height", self.canvas_row_height),
            ("canvas_margin_bottom", self.canvas_margin_bottom),
        ];
        if let Some((name, value)) = sizes.iter().find(|(_, v)| *v < 0.0) {
            return Err(MotifMarkError::new(
                ErrorCode::InvalidInput,
                format!("{name} must not be negative, got {value}"),
            ));
        }
        Ok(())
    }

    pub fn load_from_path(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            MotifMarkError::new(
                ErrorCode::Io,
                format!("Could not read settings file '{path}': {e}"),
            )
        })?;
        let settings: Self = serde_json::from_str(&text).map_err(|e| {
            MotifMarkError::new(
                ErrorCode::InvalidInput,
                format!("Could not parse settings JSON '{path}': {e}"),
            )
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to_path(&self, path: &str) -> Result<()> {
        let text = serde_json::to_string_pretty(self).map_err(|e| {
            MotifMarkError::new(
                ErrorCode::Internal,
                format!("Could not serialize settings: {e}"),
            )
        })?;
        std::fs::write(path, text).map_err(|e| {
            MotifMarkError::new(
                ErrorCode::Io,
                format!("Could not write settings file '{path}': {e}"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: LayoutSettings =
            serde_json::from_str(r#"{"pixels_per_base": 0.5, "track_step": 120}"#).unwrap();
        assert_eq!(settings.pixels_per_base, 0.5);
        assert_eq!(settings.track_step, 120.0);
        assert_eq!(settings.origin_x, 100.0);
        assert_eq!(settings.legend_title, "MOTIF LEGEND");
    }

    #[test]
    fn test_validate() {
        assert!(LayoutSettings::default().validate().is_ok());
        let settings = LayoutSettings {
            pixels_per_base: 0.0,
            ..Default::default()
        };
        assert_eq!(settings.validate().unwrap_err().code, ErrorCode::InvalidInput);
        let settings = LayoutSettings {
            origin_x: f64::NAN,
            ..Default::default()
        };
        assert!(settings.validate().unwrap_err().message.contains("origin_x"));
    }

    #[test]
    fn test_validate_rejects_negative_sizes() {
        for settings in [
            LayoutSettings {
                legend_swatch_size: -16.0,
                ..Default::default()
            },
            LayoutSettings {
                legend_width: -1.0,
                ..Default::default()
            },
            LayoutSettings {
                exon_half_height: -10.0,
                ..Default::default()
            },
        ] {
            let err = settings.validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
            assert!(err.message.contains("must not be negative"));
        }
        let settings = LayoutSettings {
            exon_half_height: 0.0,
            label_x: -5.0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let path = path.to_str().unwrap();
        let settings = LayoutSettings {
            label_step: 90.0,
            ..Default::default()
        };
        settings.save_to_path(path).unwrap();
        assert_eq!(LayoutSettings::load_from_path(path).unwrap(), settings);
        let err = LayoutSettings::load_from_path("/nonexistent/settings.json").unwrap_err();
        assert_eq!(err.code, ErrorCode::Io);
    }
}
