/// Page-level configuration, passed from JavaScript as an optional JSON string.

use serde::{Deserialize, Serialize};
use spiral_core::{SceneConfig, SceneError};

/// Background image drawn onto the surface once it has loaded
pub const DEFAULT_TEXTURE_URL: &str = "https://webglfundamentals.org/webgl/resources/f-texture.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    #[serde(flatten)]
    pub scene: SceneConfig,
    pub texture_url: String,
    /// Element whose contents are replaced by fatal error messages
    pub canvas_holder_id: String,
    /// Control panel hidden when rendering is disabled
    pub controls_id: String,
    pub log_level: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            texture_url: DEFAULT_TEXTURE_URL.to_string(),
            canvas_holder_id: "canvas-holder".to_string(),
            controls_id: "block".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(input: Option<&str>) -> Result<Self, SceneError> {
        let config: Self = match input.map(str::trim) {
            None | Some("") => Self::default(),
            Some(json) => serde_json::from_str(json)
                .map_err(|e| SceneError::Config(e.to_string()))?,
        };
        config.scene.validate()?;
        Ok(config)
    }

    pub fn level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_uses_defaults() {
        assert_eq!(
            ViewerConfig::from_json(None).unwrap(),
            ViewerConfig::default()
        );
        assert_eq!(
            ViewerConfig::from_json(Some("  ")).unwrap(),
            ViewerConfig::default()
        );
    }

    #[test]
    fn scene_fields_are_flattened() {
        let config = ViewerConfig::from_json(Some(
            r#"{ "surface": { "resolution": 32 }, "texture_url": "tex.png", "use_trackball": true }"#,
        ))
        .unwrap();
        assert_eq!(config.scene.surface.resolution, 32);
        assert!(config.scene.use_trackball);
        assert_eq!(config.texture_url, "tex.png");
        assert_eq!(config.canvas_holder_id, "canvas-holder");
    }

    #[test]
    fn invalid_scene_is_rejected() {
        let json = r#"{ "camera": { "distance": 0 } }"#;
        let err = ViewerConfig::from_json(Some(json)).unwrap_err();
        assert!(matches!(err, SceneError::InvalidDistance(_)));
    }

    #[test]
    fn log_level_falls_back_to_info() {
        let mut config = ViewerConfig::default();
        assert_eq!(config.level(), tracing::Level::INFO);
        config.log_level = "debug".into();
        assert_eq!(config.level(), tracing::Level::DEBUG);
        config.log_level = "loud".into();
        assert_eq!(config.level(), tracing::Level::INFO);
    }
}
