//! Loading configuration trees from YAML or JSON.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::model::FacesConfig;
use crate::raw::RawFacesConfig;

/// Serialized formats a configuration tree can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match ext {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse a configuration tree from source text.
///
/// `source_name` only appears in error messages.
pub fn parse_faces_config(
    source: &str,
    format: SourceFormat,
    source_name: &str,
) -> Result<FacesConfig, ConfigError> {
    let parse_error = |message: String| ConfigError::Parse {
        source_name: source_name.to_string(),
        message,
    };

    let raw: RawFacesConfig = match format {
        SourceFormat::Yaml => serde_yaml::from_str(source).map_err(|e| parse_error(e.to_string()))?,
        SourceFormat::Json => serde_json::from_str(source).map_err(|e| parse_error(e.to_string()))?,
    };

    FacesConfig::try_from(raw)
}

/// Load a configuration tree from a `.yaml`, `.yml` or `.json` file.
pub fn load_faces_config(path: &Path) -> Result<FacesConfig, ConfigError> {
    let format = SourceFormat::from_path(path)?;

    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let config = parse_faces_config(&content, format, &path.display().to_string())?;
    tracing::debug!(
        "Loaded {} render-kits from {}",
        config.render_kits.len(),
        path.display()
    );

    Ok(config)
}
