//! Templates for the generated documents.
//!
//! Description bodies are authored markup, so auto-escaping is disabled for
//! every template.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

pub const FRAME_TEMPLATE_NAME: &str = "allrenderers-frame.html";
pub const SUMMARY_TEMPLATE_NAME: &str = "renderkit-summary.html";
pub const RENDERER_TEMPLATE_NAME: &str = "renderer.html";

/// A renderer link in the navigation frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameEntry {
    /// Link target, relative to the frame document
    pub href: String,
    /// Renderer type, used as the link label
    pub renderer_type: String,
    /// Opening wrapper tag, empty when unwrapped
    pub open: String,
    /// Closing wrapper tag, empty when unwrapped
    pub close: String,
}

/// A component family in the navigation frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameFamily {
    pub family: String,
    pub entries: Vec<FrameEntry>,
}

/// Context for the navigation frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameContext {
    pub render_kit_id: String,
    pub version: Option<String>,
    pub families: Vec<FrameFamily>,
}

/// A renderer row in the summary table.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub href: String,
    pub renderer_type: String,
    /// First sentence of the default description
    pub summary: String,
}

/// A component family row-group in the summary table.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryFamily {
    pub family: String,
    pub rowspan: usize,
    pub rows: Vec<SummaryRow>,
}

/// Context for the render-kit summary.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryContext {
    pub render_kit_id: String,
    pub version: Option<String>,
    pub description: String,
    pub families: Vec<SummaryFamily>,
}

/// An attribute row on a renderer page.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeRow {
    pub name: String,
    pub pass_through: bool,
    pub class: String,
    pub description: String,
    pub default_value: String,
}

/// Context for a renderer detail page.
#[derive(Debug, Clone, Serialize)]
pub struct RendererContext {
    pub render_kit_id: String,
    pub component_family: String,
    pub renderer_type: String,
    pub description: String,
    pub renders_children: bool,
    pub has_attributes: bool,
    pub attributes: Vec<AttributeRow>,
    pub footer: Option<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the document templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        env.add_template(FRAME_TEMPLATE_NAME, FRAME_TEMPLATE)
            .expect("Failed to add frame template");

        env.add_template(SUMMARY_TEMPLATE_NAME, SUMMARY_TEMPLATE)
            .expect("Failed to add summary template");

        env.add_template(RENDERER_TEMPLATE_NAME, RENDERER_TEMPLATE)
            .expect("Failed to add renderer template");

        Self { env }
    }

    /// Render a document using the named template.
    pub fn render<S: Serialize>(&self, template: &str, context: &S) -> Result<String, minijinja::Error> {
        self.env.get_template(template)?.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const FRAME_TEMPLATE: &str = r##"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.0 Transitional//EN" "http://www.w3.org/TR/REC-html40/loose.dtd">
<HTML>
<HEAD>
<TITLE>
All Renderers
</TITLE>
<LINK REL ="stylesheet" TYPE="text/css" HREF="stylesheet.css" TITLE="Style">
</HEAD>
<BODY BGCOLOR="white">
<FONT size="+1" CLASS="FrameHeadingFont">
<B>{{ render_kit_id }} RenderKit{% if version %} ({{ version }}){% endif %}</B></FONT>
<BR>

<DL CLASS="FrameItemFont">

{% for group in families %}
  <DT>{{ group.family }}</DT>
  {% for entry in group.entries %}
  <DD>{{ entry.open }}<A HREF="{{ entry.href }}" TARGET="rendererFrame">{{ entry.renderer_type }}</A>{{ entry.close }}</DD>
  {% endfor %}
{% endfor %}
</DL>

</BODY>
</HTML>
"##;

const SUMMARY_TEMPLATE: &str = r##"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.0 Transitional//EN" "http://www.w3.org/TR/REC-html40/loose.dtd">
<HTML>
<HEAD>
<TITLE>
{{ render_kit_id }} RenderKit Summary
</TITLE>
<LINK REL ="stylesheet" TYPE="text/css" HREF="../stylesheet.css" TITLE="Style">
</HEAD>
<BODY BGCOLOR="white">
<H2>{{ render_kit_id }} RenderKit{% if version %} ({{ version }}){% endif %}</H2>
<BR>

<P>{{ description }}</P>
<P />
<TABLE BORDER="1" CELLPADDING="3" CELLSPACING="0" WIDTH="100%">
<TR BGCOLOR="#CCCCFF" CLASS="TableHeadingColor">
<TD COLSPAN="3"><FONT SIZE="+2">
<B>Renderer Summary</B></FONT></TD>
</TR>
<TR>
<TH>component-family</TH>
<TH>renderer-type</TH>
<TH>description</TH>
</TR>
{% for group in families %}
  <TR>
    <TD rowspan="{{ group.rowspan }}">{{ group.family }}</TD>
  {% for row in group.rows %}
    <TD><A HREF="{{ row.href }}" TARGET="rendererFrame">{{ row.renderer_type }}</A></TD>
    <TD>{{ row.summary }}</TD>
    {% if not loop.last %}
  </TR>
  <TR>
    {% endif %}
  {% endfor %}
  </TR>
{% endfor %}
</TABLE>

</BODY>
</HTML>
"##;

const RENDERER_TEMPLATE: &str = r##"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.0 Transitional//EN" "http://www.w3.org/TR/REC-html40/loose.dtd">
<html>
<head>
<title>
component-family: {{ component_family }} renderer-type: {{ renderer_type }}
</title>
<link REL ="stylesheet" TYPE="text/css" HREF="../stylesheet.css" TITLE="Style">
<script>
function asd()
{
  parent.document.title="component-family: {{ component_family }} renderer-type: {{ renderer_type }}";
}
</script>
</head>
<body BGCOLOR="white" onload="asd();">

<H2><font size="-1">{{ render_kit_id }} render-kit</font>
<br />
<font size="-1">component-family:</font> {{ component_family }} <font size="-1">renderer-type:</font> {{ renderer_type }}
</H2>
<HR />
<P>{{ description }}</P>
{% if renders_children %}
<P>This renderer is responsible for rendering its children.</P>
{% else %}
<P>This renderer is not responsible for rendering its children.</P>
{% endif %}
{% if has_attributes %}
<HR />
<a NAME="attributes"><!-- --></a>

<h3>Note:</h3>

<p>Attributes with a <code>ignored-by-renderer</code> value of
<code>true</code> are not interpreted by the renderer and are not listed
below.  Attributes with a <code>pass-through</code> value of <code>true</code>
are conveyed straight to the rendered markup, without checking for validity.</p>

<table BORDER="1" CELLPADDING="3" CELLSPACING="0" WIDTH="100%">
<tr BGCOLOR="#CCCCFF" CLASS="TableHeadingColor">
<td COLSPAN="5"><font SIZE="+2">
<b>Attributes</b></font></td>
</tr>
<tr BGCOLOR="#CCCCFF" CLASS="TableHeadingColor">
<th><b>attribute-name</b></th>
<th><b>pass-through</b></th>
<th><b>attribute-class</b></th>
<th><b>description</b></th>
<th><b>default-value</b></th>
</tr>
{% for attribute in attributes %}
<tr BGCOLOR="white" CLASS="TableRowColor">
<td ALIGN="right" VALIGN="top" WIDTH="1%"><code>
&nbsp;{{ attribute.name }}
</code></td>
<td ALIGN="right" VALIGN="top">{{ attribute.pass_through }}</td>
<td><code>{{ attribute.class }}</code></td>
<td>{{ attribute.description }}</td>
<td>{{ attribute.default_value }}</td>
</tr>
{% endfor %}
</table>
{% else %}
<p>This renderer-type has no attributes</p>
{% endif %}
<hr>
{% if footer %}
{{ footer }}
{% endif %}
</body>
</html>
"##;
