//! One-shot documentation generation.

use std::path::Path;

use anyhow::{Context, Result};
use renderkitdoc_config::load_faces_config;
use renderkitdoc_static::{BuildResult, DirAssets, DocBuilder};

use crate::config::{load_config, resolve, GenerateArgs, Settings};

/// Generate documentation once from resolved settings.
pub fn generate(settings: &Settings) -> Result<BuildResult> {
    let faces_config = load_faces_config(&settings.faces_config)?;

    let mut builder = DocBuilder::new(settings.build.clone());
    if let Some(assets_dir) = &settings.assets_dir {
        builder = builder.with_assets(DirAssets::new(assets_dir));
    }

    let result = builder
        .build(&faces_config)
        .with_context(|| format!("Failed to document {}", settings.faces_config.display()))?;

    // Every touched path is reported so editors and build tools can refresh them.
    for touched in &result.touched {
        tracing::info!("Refreshing: {}", touched.path.display());
    }

    tracing::info!(
        "Generated {} renderer pages in {} families in {}ms",
        result.renderers,
        result.families,
        result.duration_ms
    );

    Ok(result)
}

/// Run the generate command.
pub fn run(config_path: &Path, args: GenerateArgs) -> Result<()> {
    let settings = resolve(args, load_config(config_path)?)?;

    tracing::info!(
        "Generating RenderKitDoc for configuration tree: {}",
        settings.faces_config.display()
    );
    tracing::info!(
        "Output directory: {}",
        DocBuilder::new(settings.build.clone()).doc_dir().display()
    );

    generate(&settings)?;

    Ok(())
}
