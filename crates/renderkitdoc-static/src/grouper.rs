//! Grouping renderers by component family.

use std::collections::BTreeMap;

use renderkitdoc_config::{ConfigError, RenderKit, Renderer};

/// Renderers of one render-kit indexed by component family.
///
/// Families iterate in lexicographic order; renderers within a family keep
/// their declaration order.
#[derive(Debug, Clone, Default)]
pub struct FamilyGroup<'a> {
    families: BTreeMap<&'a str, Vec<&'a Renderer>>,
}

impl<'a> FamilyGroup<'a> {
    /// Iterate families and their renderers.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a Renderer])> + '_ {
        self.families
            .iter()
            .map(|(family, renderers)| (*family, renderers.as_slice()))
    }

    /// Renderers of a single family.
    pub fn get(&self, family: &str) -> Option<&[&'a Renderer]> {
        self.families.get(family).map(Vec::as_slice)
    }

    /// Number of families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Total number of renderers across all families.
    pub fn renderer_count(&self) -> usize {
        self.families.values().map(Vec::len).sum()
    }
}

/// Partition a render-kit's renderers by component family.
pub fn group(render_kit: &RenderKit) -> Result<FamilyGroup<'_>, ConfigError> {
    if render_kit.renderers.is_empty() {
        return Err(ConfigError::NoRenderers {
            render_kit: render_kit.id.clone(),
        });
    }

    let mut families: BTreeMap<&str, Vec<&Renderer>> = BTreeMap::new();
    for renderer in &render_kit.renderers {
        families
            .entry(renderer.component_family.as_str())
            .or_default()
            .push(renderer);
    }

    Ok(FamilyGroup { families })
}
