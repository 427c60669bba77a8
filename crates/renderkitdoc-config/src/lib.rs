//! Render-kit configuration tree.
//!
//! This crate holds the read-only, in-memory description of one or more
//! render-kits: their renderers, each renderer's attributes and the localized
//! descriptions attached to both. Trees are loaded from YAML or JSON and are
//! validated on the way in, so documentation generation can rely on the
//! invariants described on [`RenderKit`].

pub mod error;
pub mod loader;
pub mod model;
mod raw;

pub use error::ConfigError;
pub use loader::{load_faces_config, parse_faces_config, SourceFormat};
pub use model::{Attribute, Description, FacesConfig, RenderKit, Renderer};
