//! Static assets copied verbatim next to the generated documents.

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use crate::builder::BuildError;

/// Frameset page tying the navigation frame and the renderer frame together.
pub const INDEX_ASSET: &str = "index.html";

/// Stylesheet shared by every generated document.
pub const STYLESHEET_ASSET: &str = "stylesheet.css";

/// Assets copied on every run, in copy order.
pub const STATIC_ASSETS: [&str; 2] = [INDEX_ASSET, STYLESHEET_ASSET];

/// Source of static asset bytes by logical name.
pub trait AssetSource {
    /// Load the asset named `name`.
    fn load(&self, name: &str) -> Result<Cow<'static, [u8]>, BuildError>;
}

/// Assets compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn load(&self, name: &str) -> Result<Cow<'static, [u8]>, BuildError> {
        match name {
            INDEX_ASSET => Ok(Cow::Borrowed(DEFAULT_INDEX.as_bytes())),
            STYLESHEET_ASSET => Ok(Cow::Borrowed(DEFAULT_CSS.as_bytes())),
            _ => Err(BuildError::AssetError {
                name: name.to_string(),
                message: "no such embedded asset".to_string(),
            }),
        }
    }
}

/// Assets read from a directory at generation time.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssets {
    fn load(&self, name: &str) -> Result<Cow<'static, [u8]>, BuildError> {
        let path = self.root.join(name);

        fs::read(&path)
            .map(Cow::Owned)
            .map_err(|e| BuildError::AssetError {
                name: name.to_string(),
                message: format!("{}: {}", path.display(), e),
            })
    }
}

const DEFAULT_INDEX: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.0 Frameset//EN" "http://www.w3.org/TR/REC-html40/frameset.dtd">
<HTML>
<HEAD>
<TITLE>
RenderKit Documentation
</TITLE>
</HEAD>
<FRAMESET cols="20%,80%">
<FRAME src="allrenderers-frame.html" name="allRenderersFrame">
<FRAME src="HTML_BASIC/renderkit-summary.html" name="rendererFrame">
</FRAMESET>
<NOFRAMES>
<H2>
Frame Alert</H2>

<P>
This document is designed to be viewed using the frames feature. If you see this message, you are using a non-frame-capable web client.
<BR>
Link to <A HREF="HTML_BASIC/renderkit-summary.html">Non-frame version.</A>
</NOFRAMES>
</HTML>
"#;

const DEFAULT_CSS: &str = r#"/* RenderKit documentation style sheet */

/* Page background color */
body { background-color: #FFFFFF; font-family: Arial, Helvetica, sans-serif }

/* Table colors */
.TableHeadingColor     { background: #CCCCFF } /* Dark mauve */
.TableSubHeadingColor  { background: #EEEEFF } /* Light mauve */
.TableRowColor         { background: #FFFFFF } /* White */

/* Font used in left-hand frame lists */
.FrameTitleFont   { font-size: 100%; font-family: Helvetica, Arial, sans-serif }
.FrameHeadingFont { font-size:  90%; font-family: Helvetica, Arial, sans-serif }
.FrameItemFont    { font-size:  90%; font-family: Helvetica, Arial, sans-serif }

/* Navigation bar fonts and colors */
.NavBarCell1    { background-color:#EEEEFF; } /* Light mauve */
.NavBarCell1Rev { background-color:#00008B; } /* Dark Blue */
.NavBarFont1    { font-family: Arial, Helvetica, sans-serif; color:#000000; }
.NavBarFont1Rev { font-family: Arial, Helvetica, sans-serif; color:#FFFFFF; }

.NavBarCell2    { font-family: Arial, Helvetica, sans-serif; background-color:#FFFFFF; }
.NavBarCell3    { font-family: Arial, Helvetica, sans-serif; background-color:#FFFFFF; }
"#;
