//! Locale-matched description selection and wrapper tag extraction.
//!
//! Description authors may wrap an inline snippet in a `div` or `span` to
//! style it. The navigation frame reuses that wrapper around the generated
//! link so the styling carries through without parsing the full markup.

use renderkitdoc_config::{Description, Renderer};

/// Kind of wrapper tag found in a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    Div,
    Span,
}

impl WrapperKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Div => "<div",
            Self::Span => "<span",
        }
    }

    /// The closing tag matching this kind.
    pub fn close(self) -> &'static str {
        match self {
            Self::Div => "</div>",
            Self::Span => "</span>",
        }
    }
}

/// The first opening wrapper tag found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperTag<'a> {
    /// Tag kind
    pub kind: WrapperKind,
    /// Opening tag text, from `<` up to and including `>`
    pub raw: &'a str,
    /// Byte offset of the tag in the scanned text
    pub start: usize,
}

impl WrapperTag<'_> {
    /// The closing tag matching this wrapper.
    pub fn close(&self) -> &'static str {
        self.kind.close()
    }
}

/// Pick the renderer description matching the active locale.
///
/// Returns the first description, in stored order, whose language tag is a
/// case-insensitive substring of `country_code`. Descriptions without a
/// language tag never match; an empty tag matches any locale.
pub fn select_localized<'a>(renderer: &'a Renderer, country_code: &str) -> Option<&'a Description> {
    let country = country_code.to_lowercase();

    renderer.descriptions.iter().find(|description| {
        description
            .lang
            .as_deref()
            .is_some_and(|lang| country.contains(&lang.to_lowercase()))
    })
}

/// Find the first literal `<...>` opening tag starting with `kind`'s prefix.
fn find_tag(text: &str, kind: WrapperKind) -> Option<WrapperTag<'_>> {
    let start = text.find(kind.prefix())?;
    let end = start + text[start..].find('>')?;

    Some(WrapperTag {
        kind,
        raw: &text[start..=end],
        start,
    })
}

/// Extract the first `div` or `span` opening tag from `text`.
///
/// Matching is case-sensitive on the literal prefixes `<div` and `<span`. A
/// candidate without a closing `>` is ignored. When both kinds are present the
/// earlier one wins; equal offsets go to the span.
pub fn first_wrapper_tag(text: &str) -> Option<WrapperTag<'_>> {
    let div = find_tag(text, WrapperKind::Div);
    let span = find_tag(text, WrapperKind::Span);

    match (div, span) {
        (Some(div), Some(span)) => {
            if span.start <= div.start {
                Some(span)
            } else {
                Some(div)
            }
        }
        (div, span) => div.or(span),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn renderer(descriptions: Vec<Description>) -> Renderer {
        let mut renderer = Renderer::new("javax.faces.Command", "javax.faces.Button");
        renderer.descriptions = descriptions;
        renderer
    }

    #[test]
    fn extracts_div_wrapper() {
        let tag = first_wrapper_tag(r#"<div class="x">A</div>"#).unwrap();

        assert_eq!(tag.kind, WrapperKind::Div);
        assert_eq!(tag.raw, r#"<div class="x">"#);
        assert_eq!(tag.start, 0);
        assert_eq!(tag.close(), "</div>");
    }

    #[test]
    fn extracts_span_wrapper() {
        let tag = first_wrapper_tag("<span>A</span>").unwrap();

        assert_eq!(tag.kind, WrapperKind::Span);
        assert_eq!(tag.raw, "<span>");
        assert_eq!(tag.close(), "</span>");
    }

    #[test]
    fn plain_text_has_no_wrapper() {
        assert_eq!(first_wrapper_tag("Renders a button."), None);
    }

    #[test]
    fn earliest_tag_wins() {
        let tag = first_wrapper_tag("z<span><div>").unwrap();
        assert_eq!(tag.kind, WrapperKind::Span);
        assert_eq!(tag.start, 1);

        let tag = first_wrapper_tag(r#"Text <div style="a"> then <span>"#).unwrap();
        assert_eq!(tag.kind, WrapperKind::Div);
        assert_eq!(tag.raw, r#"<div style="a">"#);
    }

    #[test]
    fn ignores_unclosed_candidate() {
        assert_eq!(first_wrapper_tag("<div class=\"x\""), None);

        // The unclosed span is dropped, so the later div is used.
        let tag = first_wrapper_tag("<div>A</div> <span").unwrap();
        assert_eq!(tag.kind, WrapperKind::Div);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(first_wrapper_tag("<DIV>A</DIV>"), None);
    }

    #[test]
    fn selects_description_matching_country() {
        let renderer = renderer(vec![
            Description::new("Default."),
            Description::localized("DE", "Deutsch."),
            Description::localized("us", "English."),
        ]);

        assert_eq!(select_localized(&renderer, "US").unwrap().text, "English.");
        assert_eq!(select_localized(&renderer, "de").unwrap().text, "Deutsch.");
        assert_eq!(select_localized(&renderer, "FR"), None);
    }

    #[test]
    fn empty_tag_matches_any_country() {
        let renderer = renderer(vec![
            Description::localized("", "First."),
            Description::localized("us", "English."),
        ]);

        assert_eq!(select_localized(&renderer, "US").unwrap().text, "First.");
    }

    #[test]
    fn no_descriptions_selects_nothing() {
        assert_eq!(select_localized(&renderer(vec![]), "US"), None);
    }
}
