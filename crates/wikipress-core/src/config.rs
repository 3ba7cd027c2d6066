//! Run configuration.
//!
//! The configuration file is YAML with three sections: where notes and
//! images are read from, where the converted site lives, and the ordered
//! list of operations applied to every note.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directories scanned for notes and images
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    /// Roots walked for notes (every non-image file)
    pub paths: Vec<PathBuf>,
    /// Roots walked for image assets
    #[serde(default)]
    pub images: Vec<PathBuf>,
}

/// Destination of the converted site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// URL prefix for internal note links
    pub base: String,
    /// Directory (relative to `filesystem`) receiving converted notes, also the permalink prefix
    pub path: String,
    /// Directory (relative to `filesystem`) receiving images, also the image URL prefix
    pub images: String,
    /// Root of the static site on disk
    pub filesystem: PathBuf,
}

impl OutputConfig {
    /// Prefix prepended to kebab-cased link targets.
    pub fn link_base(&self) -> String {
        format!("/{}", self.base)
    }

    /// Prefix prepended to image sources.
    pub fn image_base(&self) -> String {
        format!("/{}", self.images)
    }

    /// Directory converted notes are written to.
    pub fn document_dir(&self) -> PathBuf {
        self.filesystem.join(&self.path)
    }

    /// Directory referenced images are copied to.
    pub fn asset_dir(&self) -> PathBuf {
        self.filesystem.join(&self.images)
    }
}

/// One pipeline step: an operation name plus its options mapping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OperationConfig {
    pub name: String,
    #[serde(default)]
    pub options: serde_yaml::Mapping,
}

impl OperationConfig {
    /// Step without options
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: serde_yaml::Mapping::new(),
        }
    }

    /// Add one option value
    pub fn with_option(mut self, key: &str, value: impl Into<serde_yaml::Value>) -> Self {
        self.options
            .insert(serde_yaml::Value::String(key.to_string()), value.into());
        self
    }
}

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub sources: SourcesConfig,
    pub output: OutputConfig,
    pub pipeline: Vec<OperationConfig>,
}

impl Config {
    /// Parse a configuration document and expand `~`/`$VAR` in its filesystem paths.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let mut config: Config = serde_yaml::from_str(content)
            .map_err(|e| Error::config_error(format!("Invalid configuration: {}", e)))?;
        config.expand_paths()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config_error(format!(
                "Failed to load configuration from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml_str(&content)?;
        log::debug!(
            "Loaded configuration from {} ({} pipeline steps)",
            path.display(),
            config.pipeline.len()
        );
        Ok(config)
    }

    /// Validate the structure of the configuration.
    ///
    /// Operation names are checked later, when the pipeline is built.
    pub fn validate(&self) -> Result<()> {
        if self.sources.paths.is_empty() {
            return Err(Error::config_error(
                "At least one source path must be configured",
            ));
        }

        if self.pipeline.is_empty() {
            return Err(Error::config_error("Pipeline must contain at least one step"));
        }

        if let Some(pos) = self.pipeline.iter().position(|op| op.name.trim().is_empty()) {
            return Err(Error::config_error(format!(
                "Pipeline step {} has an empty operation name",
                pos + 1
            )));
        }

        Ok(())
    }

    fn expand_paths(&mut self) -> Result<()> {
        for path in self
            .sources
            .paths
            .iter_mut()
            .chain(self.sources.images.iter_mut())
        {
            *path = expand_path(path)?;
        }
        self.output.filesystem = expand_path(&self.output.filesystem)?;
        Ok(())
    }
}

/// Expand tilde and environment variables in a path.
fn expand_path(path: &Path) -> Result<PathBuf> {
    let path_str = path
        .to_str()
        .ok_or_else(|| Error::config_error("Path contains invalid UTF-8"))?;

    let expanded = shellexpand::full(path_str)
        .map_err(|e| Error::config_error(format!("Failed to expand path: {}", e)))?;

    Ok(PathBuf::from(expanded.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r##"
sources:
  paths: [notes]
  images: [attachments]
output:
  base: notes
  path: content/notes
  images: images/notes
  filesystem: site
pipeline:
  - name: link_convert
  - name: remove_after_string
    options:
      string: "# Registro ripassi"
"##;

    #[test]
    fn test_parse_sample() {
        let config = Config::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(config.sources.paths, vec![PathBuf::from("notes")]);
        assert_eq!(config.pipeline.len(), 2);
        assert!(config.pipeline[0].options.is_empty());
        assert_eq!(
            config.pipeline[1].options.get("string"),
            Some(&serde_yaml::Value::String("# Registro ripassi".to_string()))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_derived_paths() {
        let config = Config::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(config.output.link_base(), "/notes");
        assert_eq!(config.output.image_base(), "/images/notes");
        assert_eq!(
            config.output.document_dir(),
            PathBuf::from("site/content/notes")
        );
        assert_eq!(config.output.asset_dir(), PathBuf::from("site/images/notes"));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let bad = format!("{}\nextra: true\n", SAMPLE);
        let err = Config::from_yaml_str(&bad).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_validation() {
        let mut config = Config::from_yaml_str(SAMPLE).unwrap();
        config.pipeline.clear();
        assert!(config.validate().is_err());

        let mut config = Config::from_yaml_str(SAMPLE).unwrap();
        config.pipeline.push(OperationConfig::new("  "));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("step 3"));
    }

    #[test]
    fn test_tilde_expansion() {
        let yaml = SAMPLE.replace("filesystem: site", "filesystem: ~/site");
        let config = Config::from_yaml_str(&yaml).unwrap();
        assert!(
            !config.output.filesystem.to_string_lossy().contains('~'),
            "Path should not contain tilde: {}",
            config.output.filesystem.display()
        );
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, SAMPLE).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.output.base, "notes");

        let missing = Config::load(&temp.path().join("nope.yaml"));
        assert!(matches!(missing, Err(Error::FileNotFound { .. })));
    }
}
