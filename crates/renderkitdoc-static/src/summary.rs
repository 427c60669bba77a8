//! Render-kit summary table.

use renderkitdoc_config::{RenderKit, Renderer};

use crate::builder::{BuildError, RunConfig};
use crate::grouper::FamilyGroup;
use crate::templates::{
    SummaryContext, SummaryFamily, SummaryRow, TemplateEngine, SUMMARY_TEMPLATE_NAME,
};

/// Text up to and including the first `.`, or `None` if there is no `.`.
pub fn first_sentence(text: &str) -> Option<&str> {
    text.find('.').map(|end| &text[..=end])
}

/// Summary cell text for a renderer.
///
/// A missing or blank default description yields an empty cell; a
/// description without a sentence terminator is an error.
fn renderer_summary(renderer: &Renderer) -> Result<String, BuildError> {
    let Some(description) = renderer.default_description() else {
        return Ok(String::new());
    };
    if description.text.trim().is_empty() {
        return Ok(String::new());
    }

    first_sentence(&description.text)
        .map(str::to_string)
        .ok_or_else(|| BuildError::MissingSentence {
            family: renderer.component_family.clone(),
            renderer_type: renderer.renderer_type.clone(),
        })
}

/// Build the `renderkit-summary.html` document.
///
/// Links are relative to the render-kit directory the summary is written to.
pub fn build_summary(
    engine: &TemplateEngine,
    render_kit_id: &str,
    render_kit: &RenderKit,
    groups: &FamilyGroup<'_>,
    run: &RunConfig,
) -> Result<String, BuildError> {
    let mut families = Vec::with_capacity(groups.len());
    for (family, renderers) in groups.iter() {
        let rows = renderers
            .iter()
            .map(|renderer| -> Result<SummaryRow, BuildError> {
                Ok(SummaryRow {
                    href: format!("{}{}.html", family, renderer.renderer_type),
                    renderer_type: renderer.renderer_type.clone(),
                    summary: renderer_summary(renderer)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        families.push(SummaryFamily {
            family: family.to_string(),
            rowspan: rows.len(),
            rows,
        });
    }

    let context = SummaryContext {
        render_kit_id: render_kit_id.to_string(),
        version: run.version.clone(),
        description: render_kit
            .default_description()
            .map(|d| d.text.clone())
            .unwrap_or_default(),
        families,
    };

    engine
        .render(SUMMARY_TEMPLATE_NAME, &context)
        .map_err(|e| BuildError::TemplateError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouper::group;
    use pretty_assertions::assert_eq;
    use renderkitdoc_config::Description;

    fn renderer(family: &str, ty: &str, description: Option<&str>) -> Renderer {
        let mut renderer = Renderer::new(family, ty);
        renderer.descriptions = description.map(Description::new).into_iter().collect();
        renderer
    }

    fn build(kit: &RenderKit, run: &RunConfig) -> Result<String, BuildError> {
        let groups = group(kit).unwrap();
        build_summary(&TemplateEngine::new(), "HTML_BASIC", kit, &groups, run)
    }

    #[test]
    fn extracts_first_sentence() {
        assert_eq!(
            first_sentence("Renders a button. Extra text."),
            Some("Renders a button.")
        );
        assert_eq!(first_sentence("No terminator"), None);
        assert_eq!(first_sentence("."), Some("."));
    }

    #[test]
    fn summarizes_each_renderer() {
        let mut kit = RenderKit::new("HTML_BASIC");
        kit.descriptions = vec![Description::new("The standard HTML render-kit.")];
        kit.renderers = vec![
            renderer("Output", "Text", Some("Renders text. With more detail.")),
            renderer("Command", "Button", Some("Renders a button. Extra text.")),
            renderer("Output", "Label", None),
        ];

        let html = build(&kit, &RunConfig::default()).unwrap();

        assert!(html.contains("<P>The standard HTML render-kit.</P>"));
        assert!(html.contains("<TD rowspan=\"1\">Command</TD>"));
        assert!(html.contains("<TD rowspan=\"2\">Output</TD>"));
        assert!(html.contains(
            "<TD><A HREF=\"CommandButton.html\" TARGET=\"rendererFrame\">Button</A></TD>\n    <TD>Renders a button.</TD>"
        ));
        assert!(html.contains("<TD>Renders text.</TD>"));
        assert!(!html.contains("With more detail"));
        assert!(html.contains(
            "<TD><A HREF=\"OutputLabel.html\" TARGET=\"rendererFrame\">Label</A></TD>\n    <TD></TD>"
        ));
    }

    #[test]
    fn orders_families_alphabetically() {
        let mut kit = RenderKit::new("HTML_BASIC");
        kit.renderers = vec![
            renderer("Output", "Text", None),
            renderer("Command", "Button", None),
        ];

        let html = build(&kit, &RunConfig::default()).unwrap();

        assert!(html.find(">Command</TD>").unwrap() < html.find(">Output</TD>").unwrap());
    }

    #[test]
    fn errors_on_description_without_sentence() {
        let mut kit = RenderKit::new("HTML_BASIC");
        kit.renderers = vec![renderer("Command", "Button", Some("Renders a button"))];

        let result = build(&kit, &RunConfig::default());

        assert!(matches!(
            result,
            Err(BuildError::MissingSentence { ref renderer_type, .. }) if renderer_type == "Button"
        ));
    }

    #[test]
    fn blank_description_renders_empty_cell() {
        let mut kit = RenderKit::new("HTML_BASIC");
        kit.renderers = vec![renderer("Command", "Button", Some("  "))];

        let html = build(&kit, &RunConfig::default()).unwrap();

        assert!(html.contains("<TD></TD>"));
    }

    #[test]
    fn includes_version_in_heading() {
        let mut kit = RenderKit::new("HTML_BASIC");
        kit.renderers = vec![renderer("Command", "Button", None)];
        let run = RunConfig {
            version: Some("4.0".to_string()),
            ..RunConfig::default()
        };

        let html = build(&kit, &run).unwrap();

        assert!(html.contains("<H2>HTML_BASIC RenderKit (4.0)</H2>"));
    }
}
