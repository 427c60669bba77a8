//! Navigation frame listing every renderer by component family.

use crate::builder::{BuildError, RunConfig};
use crate::grouper::FamilyGroup;
use crate::locale::{first_wrapper_tag, select_localized};
use crate::templates::{FrameContext, FrameEntry, FrameFamily, TemplateEngine, FRAME_TEMPLATE_NAME};

/// Build the `allrenderers-frame.html` document.
///
/// Each renderer links to its detail page in the `rendererFrame` frame. When
/// the locale-matched description opens with a `div` or `span`, the link is
/// wrapped in that tag.
pub fn build_frame(
    engine: &TemplateEngine,
    render_kit_id: &str,
    groups: &FamilyGroup<'_>,
    run: &RunConfig,
) -> Result<String, BuildError> {
    let families = groups
        .iter()
        .map(|(family, renderers)| FrameFamily {
            family: family.to_string(),
            entries: renderers
                .iter()
                .map(|renderer| {
                    let wrapper = select_localized(renderer, &run.country_code)
                        .and_then(|description| first_wrapper_tag(&description.text));

                    let (open, close) = match wrapper {
                        Some(tag) => (tag.raw.to_string(), tag.close().to_string()),
                        None => (String::new(), String::new()),
                    };

                    FrameEntry {
                        href: format!(
                            "{}/{}{}.html",
                            render_kit_id, family, renderer.renderer_type
                        ),
                        renderer_type: renderer.renderer_type.clone(),
                        open,
                        close,
                    }
                })
                .collect(),
        })
        .collect();

    let context = FrameContext {
        render_kit_id: render_kit_id.to_string(),
        version: run.version.clone(),
        families,
    };

    engine
        .render(FRAME_TEMPLATE_NAME, &context)
        .map_err(|e| BuildError::TemplateError(e.to_string()))
}
