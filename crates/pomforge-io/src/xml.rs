//! XML rendering of descriptor trees.
//!
//! Output is deterministic: attributes are written in key order, children in
//! insertion order, and elements without text or children self-close.

use std::borrow::Cow;

use pomforge_core::Node;

/// Renders a [`Node`] tree as an indented XML document.
#[derive(Debug, Clone)]
pub struct XmlRenderer {
    indent: usize,
    declaration: bool,
}

impl Default for XmlRenderer {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
        }
    }
}

impl XmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spaces per nesting level.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    /// Whether to emit the `<?xml ...?>` declaration.
    pub fn declaration(mut self, enabled: bool) -> Self {
        self.declaration = enabled;
        self
    }

    pub fn render(&self, root: &Node) -> String {
        let mut out = String::new();
        if self.declaration {
            out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        }
        self.write_node(&mut out, root, 0);
        out
    }

    fn write_node(&self, out: &mut String, node: &Node, depth: usize) {
        let pad = " ".repeat(depth * self.indent);
        out.push_str(&pad);
        out.push('<');
        out.push_str(node.name());
        for (key, value) in node.attributes() {
            out.push_str(&format!(" {}=\"{}\"", key, escape(value, true)));
        }

        if node.children().is_empty() {
            match node.text() {
                None => out.push_str("/>\n"),
                Some(text) => {
                    out.push('>');
                    out.push_str(&escape(text, false));
                    out.push_str(&format!("</{}>\n", node.name()));
                }
            }
            return;
        }

        out.push('>');
        if let Some(text) = node.text() {
            out.push_str(&escape(text, false));
        }
        out.push('\n');
        for child in node.children() {
            self.write_node(out, child, depth + 1);
        }
        out.push_str(&pad);
        out.push_str(&format!("</{}>\n", node.name()));
    }
}

/// Render with the default settings.
pub fn render(root: &Node) -> String {
    XmlRenderer::new().render(root)
}

/// Characters XML 1.0 cannot carry, even as references.
fn is_forbidden(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}'
    )
}

/// Escape markup characters and drop characters XML 1.0 forbids.
fn escape(raw: &str, attribute: bool) -> Cow<'_, str> {
    let needs_escape = raw.chars().any(|c| {
        matches!(c, '&' | '<' | '>') || (attribute && matches!(c, '"' | '\'')) || is_forbidden(c)
    });
    if !needs_escape {
        return Cow::Borrowed(raw);
    }

    let mut escaped = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            '\'' if attribute => escaped.push_str("&apos;"),
            c if is_forbidden(c) => {}
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
