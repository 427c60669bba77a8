//! Errors raised while loading or validating a configuration tree.

use std::path::PathBuf;

/// Errors that can occur when loading or validating render-kit configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("No render-kits defined")]
    NoRenderKits,

    #[error("No renderers for render-kit id \"{render_kit}\"")]
    NoRenderers { render_kit: String },

    #[error("Null renderer at index {index} in render-kit \"{render_kit}\"")]
    NullRenderer { render_kit: String, index: usize },

    #[error("Null attribute at index {index} of renderer {family}/{renderer_type}")]
    NullAttribute {
        family: String,
        renderer_type: String,
        index: usize,
    },

    #[error("Duplicate renderer {family}/{renderer_type} in render-kit \"{render_kit}\"")]
    DuplicateRenderer {
        render_kit: String,
        family: String,
        renderer_type: String,
    },
}
