use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Clef, TimeSignature};
use crate::pitch::WrapPolicy;

/// Render configuration. Every field has a default, so a config file only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Surface width in pixels.
    pub width: f64,
    /// Surface width used when a symbol voice is drawn on a staff without a
    /// time signature.
    pub symbol_width: f64,
    pub height: f64,
    /// Width the voices are jointly justified against.
    pub justify_width: f64,
    pub clef: Clef,
    /// `None` draws no time signature.
    pub time_signature: Option<TimeSignature>,
    pub wrap_policy: WrapPolicy,
    /// Chord whose spec, when blank, means "nothing to draw".
    pub sentinel_chord: String,
    /// Draw the beautified key label in the top-left corner.
    pub show_key_caption: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 575.0,
            symbol_width: 600.0,
            height: 150.0,
            justify_width: 500.0,
            clef: Clef::Treble,
            time_signature: Some(TimeSignature::default()),
            wrap_policy: WrapPolicy::default(),
            sentinel_chord: "Augmented".to_string(),
            show_key_caption: false,
        }
    }
}

impl RenderConfig {
    /// Load from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Surface width for a render with or without a symbol voice.
    pub fn surface_width(&self, with_symbols: bool) -> f64 {
        if with_symbols && self.time_signature.is_none() {
            self.symbol_width
        } else {
            self.width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = RenderConfig::from_json(r#"{"wrap_policy": "threshold", "time_signature": null}"#).unwrap();
        assert_eq!(config.wrap_policy, WrapPolicy::Threshold);
        assert_eq!(config.time_signature, None);
        assert_eq!(config.justify_width, 500.0);
        assert_eq!(config.sentinel_chord, "Augmented");
    }

    #[test]
    fn surface_width_depends_on_time_signature_and_symbols() {
        let mut config = RenderConfig::default();
        assert_eq!(config.surface_width(false), 575.0);
        assert_eq!(config.surface_width(true), 575.0);
        config.time_signature = None;
        assert_eq!(config.surface_width(true), 600.0);
        assert_eq!(config.surface_width(false), 575.0);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(RenderConfig::from_json(r#"{"wrap_policy": "sometimes"}"#).is_err());
    }
}
