//! Serialized shape of a configuration tree.
//!
//! The serialized form tolerates nulls where a faces-config tree
//! can hold them; conversion into the model rejects the ones that break
//! render-kit invariants.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::{Attribute, Description, FacesConfig, RenderKit, Renderer};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct RawFacesConfig {
    #[serde(default)]
    render_kits: Option<Vec<RawRenderKit>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawRenderKit {
    render_kit_id: String,
    #[serde(default)]
    descriptions: Vec<Description>,
    #[serde(default)]
    renderers: Option<Vec<Option<RawRenderer>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawRenderer {
    component_family: String,
    renderer_type: String,
    #[serde(default)]
    renders_children: bool,
    #[serde(default)]
    attributes: Option<Vec<Option<Attribute>>>,
    #[serde(default)]
    descriptions: Vec<Description>,
}

impl TryFrom<RawFacesConfig> for FacesConfig {
    type Error = ConfigError;

    fn try_from(raw: RawFacesConfig) -> Result<Self, Self::Error> {
        let render_kits = raw
            .render_kits
            .unwrap_or_default()
            .into_iter()
            .map(RenderKit::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FacesConfig::new(render_kits))
    }
}

impl TryFrom<RawRenderKit> for RenderKit {
    type Error = ConfigError;

    fn try_from(raw: RawRenderKit) -> Result<Self, Self::Error> {
        let Some(entries) = raw.renderers else {
            return Err(ConfigError::NoRenderers {
                render_kit: raw.render_kit_id,
            });
        };

        let mut renderers = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let Some(renderer) = entry else {
                return Err(ConfigError::NullRenderer {
                    render_kit: raw.render_kit_id,
                    index,
                });
            };
            renderers.push(Renderer::try_from(renderer)?);
        }

        let kit = RenderKit {
            id: raw.render_kit_id,
            renderers,
            descriptions: raw.descriptions,
        };
        kit.validate()?;

        Ok(kit)
    }
}

impl TryFrom<RawRenderer> for Renderer {
    type Error = ConfigError;

    fn try_from(raw: RawRenderer) -> Result<Self, Self::Error> {
        // An explicit null list means no attributes; a null entry inside one does not.
        let entries = raw.attributes.unwrap_or_default();

        let mut attributes = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match entry {
                Some(attribute) => attributes.push(attribute),
                None => {
                    return Err(ConfigError::NullAttribute {
                        family: raw.component_family,
                        renderer_type: raw.renderer_type,
                        index,
                    })
                }
            }
        }

        Ok(Renderer {
            component_family: raw.component_family,
            renderer_type: raw.renderer_type,
            renders_children: raw.renders_children,
            attributes,
            descriptions: raw.descriptions,
        })
    }
}
