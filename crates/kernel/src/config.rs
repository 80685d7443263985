use std::path::Path;

use cuberoll_camera::OrbitConfig;
use cuberoll_common::ConfigError;
use cuberoll_motion::CubeConfig;
use serde::{Deserialize, Serialize};

/// Errors from loading a scene configuration file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}

/// Full scene configuration. Every field has a default, so a file only
/// needs to name what it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub cube: CubeConfig,
    pub camera: OrbitConfig,
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cube.validate()?;
        self.camera.validate()
    }

    /// Load and validate a config file, picking the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let config = match ext.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str(&text)?,
            Some("json") => Self::from_json_str(&text)?,
            _ => return Err(LoadError::UnsupportedFormat(path.display().to_string())),
        };
        tracing::debug!(path = %path.display(), "loaded scene config");
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, LoadError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, LoadError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuberoll_camera::PitchPolicy;
    use std::io::Write;

    #[test]
    fn empty_yaml_is_all_defaults() {
        let config = SceneConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn partial_yaml_overrides_only_named_fields() {
        let text = "cube:\n  normal_speed: 3.0\ncamera:\n  pitch:\n    policy: free_orbit\n";
        let config = SceneConfig::from_yaml_str(text).unwrap();
        assert_eq!(config.cube.normal_speed, 3.0);
        assert_eq!(config.cube.fast_speed, CubeConfig::default().fast_speed);
        assert_eq!(config.camera.pitch, PitchPolicy::FreeOrbit);
    }

    #[test]
    fn custom_pitch_from_json() {
        let text = r#"{"camera": {"pitch": {"policy": "custom", "min": -0.5, "max": 0.5}}}"#;
        let config = SceneConfig::from_json_str(text).unwrap();
        assert_eq!(
            config.camera.pitch,
            PitchPolicy::Custom {
                min: -0.5,
                max: 0.5
            }
        );
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = SceneConfig::from_yaml_str("cube:\n  normal_speed: 0.0\n").unwrap_err();
        assert!(matches!(err, LoadError::Invalid(ConfigError::NotPositive { .. })));
    }

    #[test]
    fn yaml_round_trips_through_a_file() {
        let config = SceneConfig::default();
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(config.to_yaml().unwrap().as_bytes()).unwrap();
        let loaded = SceneConfig::load(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn json_file_loads() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"cube": {"size": 2.0}}"#).unwrap();
        let loaded = SceneConfig::load(file.path()).unwrap();
        assert_eq!(loaded.cube.size, 2.0);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(matches!(
            SceneConfig::load(file.path()),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SceneConfig::load(dir.path().join("nope.yaml")),
            Err(LoadError::Io(_))
        ));
    }
}
