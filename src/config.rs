/// Configuration system for git-quads
///
/// Loading priority: CLI args > config file > defaults. The predicate
/// vocabulary is deliberately not configurable; only the source
/// repository and the sink destination are.
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Source repository configuration
    #[serde(default)]
    pub source: SourceConfig,

    /// Quad sink configuration
    #[serde(default)]
    pub sink: SinkConfig,
}

/// Source repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the repository (or any path inside it)
    #[serde(default = "default_repo_path")]
    pub path: PathBuf,
}

/// Quad sink configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SinkConfig {
    /// N-Quads output file; stdout when unset
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_repo_path() -> PathBuf {
    PathBuf::from(".")
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_repo_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseFailed(format!("Invalid TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "source.path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source.path, PathBuf::from("."));
        assert!(config.sink.output.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[source]\npath = \"/repos/example\"\n\n[sink]\noutput = \"out.nq\"\n"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.source.path, PathBuf::from("/repos/example"));
        assert_eq!(config.sink.output, Some(PathBuf::from("out.nq")));
    }

    #[test]
    fn test_from_file_with_partial_sections() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sink]\noutput = \"history.nq\"\n").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.source.path, PathBuf::from("."));
        assert_eq!(config.sink.output, Some(PathBuf::from("history.nq")));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(Path::new("/nonexistent/git-quads.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = Config {
            source: SourceConfig {
                path: PathBuf::new(),
            },
            sink: SinkConfig::default(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
