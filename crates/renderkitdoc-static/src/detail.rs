//! Per-renderer detail pages.

use renderkitdoc_config::{RenderKit, Renderer};

use crate::builder::{BuildError, RunConfig};
use crate::templates::{AttributeRow, RendererContext, TemplateEngine, RENDERER_TEMPLATE_NAME};

/// Default value shown for attributes that declare none.
pub const UNDEFINED_DEFAULT: &str = "undefined";

/// A generated renderer page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPage {
    /// File name within the render-kit directory
    pub file_name: String,
    /// Page HTML
    pub html: String,
}

/// File name of a renderer's detail page.
pub fn detail_file_name(renderer: &Renderer) -> String {
    format!("{}{}.html", renderer.component_family, renderer.renderer_type)
}

fn renderer_context(render_kit_id: &str, renderer: &Renderer, run: &RunConfig) -> RendererContext {
    let attributes = renderer
        .attributes
        .iter()
        .filter(|attribute| !attribute.ignored_by_renderer)
        .map(|attribute| AttributeRow {
            name: attribute.attribute_name.clone(),
            pass_through: attribute.pass_through,
            class: attribute.attribute_class.clone(),
            description: attribute
                .description("")
                .map(|d| d.text.clone())
                .unwrap_or_default(),
            default_value: attribute
                .default_value
                .clone()
                .unwrap_or_else(|| UNDEFINED_DEFAULT.to_string()),
        })
        .collect();

    RendererContext {
        render_kit_id: render_kit_id.to_string(),
        component_family: renderer.component_family.clone(),
        renderer_type: renderer.renderer_type.clone(),
        description: renderer
            .default_description()
            .map(|d| d.text.clone())
            .unwrap_or_default(),
        renders_children: renderer.renders_children,
        has_attributes: !renderer.attributes.is_empty(),
        attributes,
        footer: run.footer.clone(),
    }
}

/// Build one detail page per renderer, in declaration order.
pub fn build_detail_pages(
    engine: &TemplateEngine,
    render_kit_id: &str,
    render_kit: &RenderKit,
    run: &RunConfig,
) -> Result<Vec<DetailPage>, BuildError> {
    render_kit
        .renderers
        .iter()
        .map(|renderer| -> Result<DetailPage, BuildError> {
            let context = renderer_context(render_kit_id, renderer, run);
            let html = engine
                .render(RENDERER_TEMPLATE_NAME, &context)
                .map_err(|e| BuildError::TemplateError(e.to_string()))?;

            Ok(DetailPage {
                file_name: detail_file_name(renderer),
                html,
            })
        })
        .collect()
}
