//! Documentation run: resolves the render-kit, builds every document and
//! writes the document set.

use std::path::{Path, PathBuf};
use std::time::Instant;

use renderkitdoc_config::{ConfigError, FacesConfig};

use crate::assets::{AssetSource, EmbeddedAssets, STATIC_ASSETS};
use crate::detail::build_detail_pages;
use crate::frame::build_frame;
use crate::grouper::group;
use crate::output::{OutputTracker, TouchedFile};
use crate::summary::build_summary;
use crate::templates::TemplateEngine;

/// Navigation frame file name, in the top-level directory.
pub const FRAME_FILE_NAME: &str = "allrenderers-frame.html";

/// Summary file name, in the render-kit directory.
pub const SUMMARY_FILE_NAME: &str = "renderkit-summary.html";

/// Per-run settings that affect document content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Country code of the active locale, used to pick localized descriptions
    pub country_code: String,

    /// Version shown next to the render-kit title
    pub version: Option<String>,

    /// Footer line appended to renderer pages
    pub footer: Option<String>,
}

/// Configuration for a documentation run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output root; documents go to `<output_dir>/renderkitdoc`
    pub output_dir: PathBuf,

    /// Render-kit to document
    pub render_kit_id: String,

    /// Content settings
    pub run: RunConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("target"),
            render_kit_id: "HTML_BASIC".to_string(),
            run: RunConfig::default(),
        }
    }
}

/// Result of a documentation run.
#[derive(Debug)]
pub struct BuildResult {
    /// Render-kit id the documents were generated under
    pub render_kit_id: String,

    /// Number of component families
    pub families: usize,

    /// Number of renderer pages generated
    pub renderers: usize,

    /// Every path created, copied or written, in order
    pub touched: Vec<TouchedFile>,

    /// Total run time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during a documentation run.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Description of renderer {family}/{renderer_type} has no sentence terminator")]
    MissingSentence {
        family: String,
        renderer_type: String,
    },

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to load asset {name}: {message}")]
    AssetError { name: String, message: String },

    #[error("Failed to write {}: {message}", .path.display())]
    WriteError { path: PathBuf, message: String },
}

/// Render-kit documentation builder.
pub struct DocBuilder {
    config: BuildConfig,
    assets: Box<dyn AssetSource>,
    templates: TemplateEngine,
}

impl DocBuilder {
    /// Create a builder using the embedded static assets.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            assets: Box::new(EmbeddedAssets),
            templates: TemplateEngine::new(),
        }
    }

    /// Use a different source for the static assets.
    pub fn with_assets(mut self, assets: impl AssetSource + 'static) -> Self {
        self.assets = Box::new(assets);
        self
    }

    /// Top-level documentation directory for this configuration.
    pub fn doc_dir(&self) -> PathBuf {
        OutputTracker::new(&self.config.output_dir, &self.config.render_kit_id)
            .doc_dir()
            .to_path_buf()
    }

    /// Generate the document set for the configured render-kit.
    ///
    /// Fails on the first error; files written before it stay on disk.
    pub fn build(&self, faces_config: &FacesConfig) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let render_kit_id = self.config.render_kit_id.as_str();
        let run = &self.config.run;

        let render_kit = faces_config.resolve_render_kit(render_kit_id)?;
        render_kit.validate()?;
        let groups = group(render_kit)?;

        tracing::info!(
            "Documenting {} renderers in {} families for render-kit {}",
            groups.renderer_count(),
            groups.len(),
            render_kit_id
        );

        let mut output = OutputTracker::new(&self.config.output_dir, render_kit_id);
        output.ensure_dirs()?;

        for name in STATIC_ASSETS {
            output.copy_asset(self.assets.as_ref(), name)?;
        }

        let frame = build_frame(&self.templates, render_kit_id, &groups, run)?;
        output.write_doc(FRAME_FILE_NAME, &frame)?;

        let summary = build_summary(&self.templates, render_kit_id, render_kit, &groups, run)?;
        output.write_render_kit_doc(SUMMARY_FILE_NAME, &summary)?;

        let pages = build_detail_pages(&self.templates, render_kit_id, render_kit, run)?;
        for page in &pages {
            output.write_render_kit_doc(&page.file_name, &page.html)?;
        }

        Ok(BuildResult {
            render_kit_id: render_kit_id.to_string(),
            families: groups.len(),
            renderers: pages.len(),
            touched: output.into_touched(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Generate documentation with the embedded assets.
pub fn generate(
    faces_config: &FacesConfig,
    output_dir: &Path,
    render_kit_id: &str,
    run: RunConfig,
) -> Result<BuildResult, BuildError> {
    DocBuilder::new(BuildConfig {
        output_dir: output_dir.to_path_buf(),
        render_kit_id: render_kit_id.to_string(),
        run,
    })
    .build(faces_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::DirAssets;
    use crate::output::TouchedKind;
    use pretty_assertions::assert_eq;
    use renderkitdoc_config::{Attribute, Description, RenderKit, Renderer};
    use std::fs;
    use tempfile::tempdir;

    fn html_basic() -> FacesConfig {
        let mut kit = RenderKit::new("HTML_BASIC");
        kit.renderers = vec![Renderer::new("Button", "javax.faces.Button")];
        FacesConfig::new(vec![kit])
    }

    fn larger_kit() -> FacesConfig {
        let mut button = Renderer::new("javax.faces.Command", "javax.faces.Button");
        button.descriptions = vec![
            Description::new("Renders a button. Extra text."),
            Description::localized("us", r#"<span class="b">Button</span>"#),
        ];
        let mut value = Attribute::new("value", "java.lang.Object");
        value.descriptions = vec![Description::new("The value.")];
        let mut binding = Attribute::new("binding", "javax.el.ValueExpression");
        binding.ignored_by_renderer = true;
        button.attributes = vec![value, binding];

        let mut grid = Renderer::new("javax.faces.Panel", "javax.faces.Grid");
        grid.renders_children = true;

        let text = Renderer::new("javax.faces.Output", "javax.faces.Text");

        let mut kit = RenderKit::new("HTML_BASIC");
        kit.descriptions = vec![Description::new("Standard HTML.")];
        kit.renderers = vec![grid, button, text];
        FacesConfig::new(vec![kit])
    }

    fn config(output_dir: &Path) -> BuildConfig {
        BuildConfig {
            output_dir: output_dir.to_path_buf(),
            run: RunConfig {
                country_code: "US".to_string(),
                ..RunConfig::default()
            },
            ..BuildConfig::default()
        }
    }

    fn count(touched: &[TouchedFile], kind: TouchedKind) -> usize {
        touched.iter().filter(|t| t.kind == kind).count()
    }

    #[test]
    fn generates_single_renderer_kit() {
        let temp = tempdir().unwrap();

        let result = DocBuilder::new(config(temp.path()))
            .build(&html_basic())
            .unwrap();

        let doc_dir = temp.path().join("renderkitdoc");
        let kit_dir = doc_dir.join("HTML_BASIC");
        let paths: Vec<PathBuf> = result.touched.iter().map(|t| t.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                doc_dir.clone(),
                kit_dir.clone(),
                doc_dir.join("index.html"),
                doc_dir.join("stylesheet.css"),
                doc_dir.join("allrenderers-frame.html"),
                kit_dir.join("renderkit-summary.html"),
                kit_dir.join("Buttonjavax.faces.Button.html"),
            ]
        );
        assert_eq!(count(&result.touched, TouchedKind::Directory), 2);
        assert_eq!(count(&result.touched, TouchedKind::CopiedAsset), 2);
        assert_eq!(count(&result.touched, TouchedKind::GeneratedDocument), 3);
        assert_eq!(result.renderers, 1);
        assert_eq!(result.families, 1);

        let page = fs::read_to_string(kit_dir.join("Buttonjavax.faces.Button.html")).unwrap();
        assert!(page.contains("This renderer is not responsible for rendering its children."));
        assert!(page.contains("This renderer-type has no attributes"));

        let frame = fs::read_to_string(doc_dir.join("allrenderers-frame.html")).unwrap();
        assert!(frame.contains(r#"HREF="HTML_BASIC/Buttonjavax.faces.Button.html""#));
    }

    #[test]
    fn file_count_matches_renderers() {
        let temp = tempdir().unwrap();

        let result = DocBuilder::new(config(temp.path()))
            .build(&larger_kit())
            .unwrap();

        assert_eq!(count(&result.touched, TouchedKind::CopiedAsset), 2);
        assert_eq!(count(&result.touched, TouchedKind::GeneratedDocument), 2 + 3);
        assert_eq!(result.families, 3);

        let kit_dir = temp.path().join("renderkitdoc/HTML_BASIC");
        let page =
            fs::read_to_string(kit_dir.join("javax.faces.Commandjavax.faces.Button.html")).unwrap();
        assert!(page.contains("&nbsp;value"));
        assert!(!page.contains("&nbsp;binding"));
        assert!(page.contains("<td>undefined</td>"));

        let summary = fs::read_to_string(kit_dir.join("renderkit-summary.html")).unwrap();
        assert!(summary.contains("<TD>Renders a button.</TD>"));
        assert!(summary.contains("<P>Standard HTML.</P>"));

        let frame =
            fs::read_to_string(temp.path().join("renderkitdoc/allrenderers-frame.html")).unwrap();
        assert!(frame.contains(r#"<DD><span class="b"><A HREF="#));
    }

    #[test]
    fn reruns_are_idempotent() {
        let temp = tempdir().unwrap();
        let builder = DocBuilder::new(config(temp.path()));
        let faces_config = larger_kit();

        let first = builder.build(&faces_config).unwrap();
        let first_docs: Vec<(PathBuf, Vec<u8>)> = first
            .touched
            .iter()
            .filter(|t| t.kind != TouchedKind::Directory)
            .map(|t| (t.path.clone(), fs::read(&t.path).unwrap()))
            .collect();

        let second = builder.build(&faces_config).unwrap();
        let third = builder.build(&faces_config).unwrap();

        // Directories only show up on the run that created them.
        assert_eq!(count(&second.touched, TouchedKind::Directory), 0);
        assert_eq!(second.touched, third.touched);
        assert_eq!(
            second.touched.iter().map(|t| &t.path).collect::<Vec<_>>(),
            first_docs.iter().map(|(p, _)| p).collect::<Vec<_>>()
        );
        for (path, bytes) in first_docs {
            assert_eq!(fs::read(&path).unwrap(), bytes, "{} changed", path.display());
        }
    }

    #[test]
    fn falls_back_to_first_render_kit() {
        let temp = tempdir().unwrap();
        let config = BuildConfig {
            render_kit_id: "MISSING".to_string(),
            ..config(temp.path())
        };

        let result = DocBuilder::new(config).build(&html_basic()).unwrap();

        assert_eq!(result.render_kit_id, "MISSING");
        assert!(temp
            .path()
            .join("renderkitdoc/MISSING/Buttonjavax.faces.Button.html")
            .exists());
    }

    #[test]
    fn errors_without_render_kits() {
        let temp = tempdir().unwrap();

        let result = DocBuilder::new(config(temp.path())).build(&FacesConfig::default());

        assert!(matches!(
            result,
            Err(BuildError::Config(ConfigError::NoRenderKits))
        ));
        assert!(!temp.path().join("renderkitdoc").exists());
    }

    #[test]
    fn missing_sentence_aborts_after_frame() {
        let temp = tempdir().unwrap();
        let mut faces_config = html_basic();
        faces_config.render_kits[0].renderers[0].descriptions =
            vec![Description::new("No terminator")];

        let result = DocBuilder::new(config(temp.path())).build(&faces_config);

        assert!(matches!(result, Err(BuildError::MissingSentence { .. })));
        assert!(temp.path().join("renderkitdoc/allrenderers-frame.html").exists());
        assert!(!temp
            .path()
            .join("renderkitdoc/HTML_BASIC/renderkit-summary.html")
            .exists());
    }

    #[test]
    fn copies_assets_from_directory() {
        let temp = tempdir().unwrap();
        let assets = temp.path().join("assets");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("index.html"), "<frameset/>").unwrap();
        fs::write(assets.join("stylesheet.css"), "body {}").unwrap();
        let out = temp.path().join("out");

        DocBuilder::new(config(&out))
            .with_assets(DirAssets::new(&assets))
            .build(&html_basic())
            .unwrap();

        assert_eq!(
            fs::read_to_string(out.join("renderkitdoc/stylesheet.css")).unwrap(),
            "body {}"
        );
    }

    #[test]
    fn missing_asset_aborts_run() {
        let temp = tempdir().unwrap();

        let result = DocBuilder::new(config(temp.path()))
            .with_assets(DirAssets::new(temp.path().join("nowhere")))
            .build(&html_basic());

        assert!(matches!(result, Err(BuildError::AssetError { .. })));
    }

    #[test]
    fn generate_uses_embedded_assets() {
        let temp = tempdir().unwrap();

        let result = generate(&html_basic(), temp.path(), "HTML_BASIC", RunConfig::default()).unwrap();

        assert_eq!(result.touched.len(), 7);
        assert!(temp.path().join("renderkitdoc/index.html").exists());
    }
}
