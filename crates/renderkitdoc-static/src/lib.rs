//! Static HTML documentation generator for render-kits.
//!
//! Builds a frame-based document set from a render-kit configuration tree: a
//! navigation frame listing every renderer by component family, a summary
//! table, and one detail page per renderer.

pub mod assets;
pub mod builder;
pub mod detail;
pub mod frame;
pub mod grouper;
pub mod locale;
pub mod output;
pub mod summary;
pub mod templates;

pub use assets::{AssetSource, DirAssets, EmbeddedAssets};
pub use builder::{generate, BuildConfig, BuildError, BuildResult, DocBuilder, RunConfig};
pub use detail::{build_detail_pages, DetailPage};
pub use frame::build_frame;
pub use grouper::{group, FamilyGroup};
pub use locale::{first_wrapper_tag, select_localized, WrapperKind, WrapperTag};
pub use output::{OutputTracker, TouchedFile, TouchedKind};
pub use summary::{build_summary, first_sentence};
pub use templates::TemplateEngine;
