//! Configuration tree types.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ConfigError;

/// A localized description.
///
/// A description without a language tag, or with an empty one, is the default
/// description of its owner.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Description {
    /// Language tag (`None` or empty = default)
    #[serde(default)]
    pub lang: Option<String>,

    /// Free text body, possibly containing raw markup
    #[serde(default)]
    pub text: String,
}

impl Description {
    /// Create a default (unlocalized) description.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            lang: None,
            text: text.into(),
        }
    }

    /// Create a description for the given language tag.
    pub fn localized(lang: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            lang: Some(lang.into()),
            text: text.into(),
        }
    }

    /// The language tag, with the default description reported as `""`.
    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or("")
    }
}

/// Find the first description for `lang` in stored order.
fn find_description<'a>(descriptions: &'a [Description], lang: &str) -> Option<&'a Description> {
    descriptions.iter().find(|d| d.lang() == lang)
}

/// A named, typed value accepted by a renderer.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Attribute {
    /// Attribute name
    pub attribute_name: String,

    /// Declared type name
    pub attribute_class: String,

    /// Default value, if any
    #[serde(default)]
    pub default_value: Option<String>,

    /// Suppresses the attribute from the generated documentation
    #[serde(default)]
    pub ignored_by_renderer: bool,

    /// Conveyed straight to the rendered markup
    #[serde(default)]
    pub pass_through: bool,

    /// Localized descriptions
    #[serde(default)]
    pub descriptions: Vec<Description>,
}

impl Attribute {
    /// Create an attribute with no default value, flags or descriptions.
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            attribute_name: name.into(),
            attribute_class: class.into(),
            default_value: None,
            ignored_by_renderer: false,
            pass_through: false,
            descriptions: Vec::new(),
        }
    }

    /// Description for the given language tag (`""` for the default one).
    pub fn description(&self, lang: &str) -> Option<&Description> {
        find_description(&self.descriptions, lang)
    }
}

/// Describes how one kind of UI component is drawn.
///
/// `(component_family, renderer_type)` is unique within a [`RenderKit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    /// Component family
    pub component_family: String,

    /// Renderer type
    pub renderer_type: String,

    /// Whether the renderer renders its own children
    pub renders_children: bool,

    /// Attributes in declaration order
    pub attributes: Vec<Attribute>,

    /// Localized descriptions in stored order
    pub descriptions: Vec<Description>,
}

impl Renderer {
    /// Create a renderer with no attributes or descriptions.
    pub fn new(family: impl Into<String>, renderer_type: impl Into<String>) -> Self {
        Self {
            component_family: family.into(),
            renderer_type: renderer_type.into(),
            renders_children: false,
            attributes: Vec::new(),
            descriptions: Vec::new(),
        }
    }

    /// Description for the given language tag (`""` for the default one).
    pub fn description(&self, lang: &str) -> Option<&Description> {
        find_description(&self.descriptions, lang)
    }

    /// The default (unlocalized) description.
    pub fn default_description(&self) -> Option<&Description> {
        self.description("")
    }
}

/// A named collection of renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderKit {
    /// Render-kit identifier
    pub id: String,

    /// Renderers in declaration order
    pub renderers: Vec<Renderer>,

    /// Render-kit level descriptions
    pub descriptions: Vec<Description>,
}

impl RenderKit {
    /// Create an empty render-kit.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            renderers: Vec::new(),
            descriptions: Vec::new(),
        }
    }

    /// The default (unlocalized) description.
    pub fn default_description(&self) -> Option<&Description> {
        find_description(&self.descriptions, "")
    }

    /// Look up a renderer by its unique key.
    pub fn renderer(&self, family: &str, renderer_type: &str) -> Option<&Renderer> {
        self.renderers
            .iter()
            .find(|r| r.component_family == family && r.renderer_type == renderer_type)
    }

    /// Check the render-kit invariants: at least one renderer, and no two
    /// renderers sharing a `(component_family, renderer_type)` pair.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.renderers.is_empty() {
            return Err(ConfigError::NoRenderers {
                render_kit: self.id.clone(),
            });
        }

        let mut seen = HashSet::new();
        for renderer in &self.renderers {
            let key = (
                renderer.component_family.as_str(),
                renderer.renderer_type.as_str(),
            );
            if !seen.insert(key) {
                return Err(ConfigError::DuplicateRenderer {
                    render_kit: self.id.clone(),
                    family: renderer.component_family.clone(),
                    renderer_type: renderer.renderer_type.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Root of a configuration tree: every render-kit defined, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacesConfig {
    /// Render-kits in definition order
    pub render_kits: Vec<RenderKit>,
}

impl FacesConfig {
    /// Create a configuration tree from render-kits.
    pub fn new(render_kits: Vec<RenderKit>) -> Self {
        Self { render_kits }
    }

    /// Look up a render-kit by identifier.
    pub fn render_kit(&self, id: &str) -> Option<&RenderKit> {
        self.render_kits.iter().find(|kit| kit.id == id)
    }

    /// Look up a render-kit, falling back to the first one defined.
    pub fn resolve_render_kit(&self, id: &str) -> Result<&RenderKit, ConfigError> {
        if let Some(kit) = self.render_kit(id) {
            return Ok(kit);
        }

        let first = self.render_kits.first().ok_or(ConfigError::NoRenderKits)?;
        tracing::warn!(
            "No render-kit with id \"{}\", using \"{}\" instead",
            id,
            first.id
        );
        Ok(first)
    }
}
