//! Particle field options, deserialized from host-supplied JSON

use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::error::ConfigError;

/// Default palette for colorful mode
pub const DEFAULT_PALETTE: [Rgba; 9] = [
    Rgba::rgb(0xFF, 0x5E, 0x5B), // coral red
    Rgba::rgb(0x39, 0xA0, 0xED), // bright blue
    Rgba::rgb(0x36, 0xF1, 0xCD), // turquoise
    Rgba::rgb(0x13, 0xCA, 0x91), // green
    Rgba::rgb(0xFF, 0xBE, 0x0B), // yellow
    Rgba::rgb(0xFB, 0x56, 0x07), // orange
    Rgba::rgb(0x83, 0x38, 0xEC), // purple
    Rgba::rgb(0x3A, 0x86, 0xFF), // royal blue
    Rgba::rgb(0xFF, 0x00, 0x6E), // pink
];

/// Options for a [`ParticleField`](super::ParticleField)
///
/// Every key is optional; missing keys take the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    /// Number of simulated nodes
    pub node_count: usize,
    /// Node color; theme-derived when absent
    pub node_color: Option<Rgba>,
    /// Connection line color; theme-derived when absent
    pub line_color: Option<Rgba>,
    /// Velocity multiplier
    pub speed: f32,
    /// Layer opacity, applied by the host to the whole canvas
    pub opacity: f32,
    /// Random palette color per node, gradient connection lines
    pub colorful: bool,
    pub color_palette: Vec<Rgba>,
    /// Pointer attraction and bursts
    pub interactive: bool,
    /// ~10% of nodes become hubs with orbiting satellites
    pub hub_nodes: bool,
    /// Transient particles on pointer move/click
    pub particle_bursts: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            node_count: 50,
            node_color: None,
            line_color: None,
            speed: 1.0,
            opacity: 0.25,
            colorful: false,
            color_palette: DEFAULT_PALETTE.to_vec(),
            interactive: true,
            hub_nodes: true,
            particle_bursts: true,
        }
    }
}

impl FieldConfig {
    /// Parse and validate a JSON options object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FieldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::InvalidOpacity(self.opacity));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if self.colorful && self.color_palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Whether pointer input can spawn bursts at all
    pub fn bursts_enabled(&self) -> bool {
        self.interactive && self.particle_bursts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = FieldConfig::from_json("{}").unwrap();
        assert_eq!(config, FieldConfig::default());
        assert_eq!(config.node_count, 50);
        assert_eq!(config.opacity, 0.25);
        assert_eq!(config.color_palette.len(), 9);
    }

    #[test]
    fn camel_case_keys_and_css_colors() {
        let config = FieldConfig::from_json(
            r##"{
                "nodeCount": 70,
                "nodeColor": "rgba(255, 0, 0, 0.5)",
                "lineColor": "#00ff00",
                "colorful": true,
                "colorPalette": ["#fff", "#000"],
                "interactive": false,
                "hubNodes": false,
                "particleBursts": false
            }"##,
        )
        .unwrap();
        assert_eq!(config.node_count, 70);
        assert_eq!(config.node_color, Some(Rgba::new(255, 0, 0, 0.5)));
        assert_eq!(config.line_color, Some(Rgba::rgb(0, 255, 0)));
        assert_eq!(config.color_palette, vec![Rgba::WHITE, Rgba::rgb(0, 0, 0)]);
        assert!(!config.interactive && !config.hub_nodes && !config.particle_bursts);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            FieldConfig::from_json(r#"{"opacity": 1.5}"#),
            Err(ConfigError::InvalidOpacity(_))
        ));
        assert!(matches!(
            FieldConfig::from_json(r#"{"speed": -1}"#),
            Err(ConfigError::InvalidSpeed(_))
        ));
        assert!(matches!(
            FieldConfig::from_json(r#"{"colorful": true, "colorPalette": []}"#),
            Err(ConfigError::EmptyPalette)
        ));
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let err = FieldConfig::from_json(r#"{"nodeColor": "chartreuse"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)), "got {:?}", err);
        assert!(err.to_string().contains("chartreuse"));
    }

    #[test]
    fn empty_palette_is_fine_without_colorful_mode() {
        assert!(FieldConfig::from_json(r#"{"colorPalette": []}"#).is_ok());
    }

    #[test]
    fn bursts_need_interactive_mode() {
        let config = FieldConfig {
            interactive: false,
            ..FieldConfig::default()
        };
        assert!(!config.bursts_enabled());
        assert!(FieldConfig::default().bursts_enabled());
    }
}
