//! Initialize renderkitdoc in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(dir: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing renderkitdoc...");

    let config_path = dir.join("renderkitdoc.toml");
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(&config_path, DEFAULT_CONFIG).context("Failed to write renderkitdoc.toml")?;
    tracing::info!("Created {}", config_path.display());

    let faces_config_path = dir.join("faces-config.yaml");
    if !faces_config_path.exists() || yes {
        fs::write(&faces_config_path, DEFAULT_FACES_CONFIG)
            .context("Failed to write faces-config.yaml")?;
        tracing::info!("Created {}", faces_config_path.display());
    }

    tracing::info!("Run 'renderkitdoc generate' to build the documentation.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# renderkitdoc configuration

[generate]
# Configuration tree to document (.yaml, .yml or .json)
faces_config = "faces-config.yaml"

# Render-kit to document; the first render-kit is used if it is missing
render_kit_id = "HTML_BASIC"

# Output root; documents are written to <output>/renderkitdoc
output = "target"

# Version shown next to the render-kit title
# version = "4.0"

# Locale used to pick localized descriptions (defaults to LANG)
# locale = "en_US"

# Directory with index.html and stylesheet.css overrides
# assets_dir = "src/main/renderkitdoc"

# Footer line appended to every renderer page
# footer = "Copyright (c) 2024 My Project."
"#;

const DEFAULT_FACES_CONFIG: &str = r#"render-kits:
  - render-kit-id: HTML_BASIC
    descriptions:
      - text: The standard HTML render-kit.
    renderers:
      - component-family: javax.faces.Command
        renderer-type: javax.faces.Button
        descriptions:
          - text: Renders an HTML "input" element of type "submit". Or of type "reset".
        attributes:
          - attribute-name: value
            attribute-class: java.lang.Object
            descriptions:
              - text: The current value of this component.
          - attribute-name: onclick
            attribute-class: java.lang.String
            pass-through: true
            descriptions:
              - text: Javascript code executed when a pointer button is clicked over this element.
"#;
