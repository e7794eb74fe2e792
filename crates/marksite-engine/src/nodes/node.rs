use indexmap::IndexMap;

use crate::error::MarkupError;

use super::VoidTag;

/// HTML attributes in insertion order.
///
/// Rendering follows insertion order; equality does not.
pub type Attributes = IndexMap<String, String>;

const INDENT: &str = "  ";

/// A node in the HTML tree.
///
/// Each variant carries only the fields that make sense for it, so a leaf
/// with children or a void element with text cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A tagged element wrapping other nodes, e.g. `<p>`, `<ul>`, `<div>`.
    Element {
        tag: String,
        attributes: Attributes,
        children: Vec<Node>,
    },
    /// Text content. With a tag it renders as `<tag>value</tag>`, without one
    /// it renders as the bare value.
    Text {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    /// A self-closing element such as `<img>` or `<br>`.
    Void { tag: VoidTag, attributes: Attributes },
}

impl Node {
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element {
            tag: tag.into(),
            attributes: Attributes::new(),
            children,
        }
    }

    /// Raw text with no surrounding tag.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Text wrapped in `tag`, e.g. `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Text {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Builds a void node from a tag name.
    ///
    /// Fails with [`MarkupError::MissingTag`] for an empty name and
    /// [`MarkupError::UnknownVoidTag`] for anything outside [`VoidTag::ALL`].
    pub fn void(tag: &str) -> Result<Self, MarkupError> {
        Ok(Self::void_tag(tag.parse()?))
    }

    pub fn void_tag(tag: VoidTag) -> Self {
        Node::Void {
            tag,
            attributes: Attributes::new(),
        }
    }

    /// Appends (or replaces) one attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(name.into(), value.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes_mut().extend(attributes);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag.as_str()),
            Node::Text { tag, .. } => tag.as_deref(),
            Node::Void { tag, .. } => Some(tag.as_str()),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Element { attributes, .. }
            | Node::Text { attributes, .. }
            | Node::Void { attributes, .. } => attributes,
        }
    }

    /// Child nodes; empty for text and void nodes.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } | Node::Void { .. } => &[],
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            Node::Element { attributes, .. }
            | Node::Text { attributes, .. }
            | Node::Void { attributes, .. } => attributes,
        }
    }

    /// Renders canonical HTML with no added whitespace.
    pub fn render(&self) -> Result<String, MarkupError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    /// Renders indented HTML, one tag or text value per line, two spaces per
    /// nesting level. Intended for diagnostics only.
    pub fn pretty_print(&self) -> Result<String, MarkupError> {
        let mut lines = Vec::new();
        self.write_pretty(0, &mut lines)?;
        Ok(lines.join("\n"))
    }

    fn write_html(&self, out: &mut String) -> Result<(), MarkupError> {
        match self {
            Node::Element {
                tag,
                attributes,
                children,
            } => {
                check_element(tag, children)?;
                out.push_str(&open_tag(tag, attributes));
                for child in children {
                    child.write_html(out)?;
                }
                out.push_str(&close_tag(tag));
            }
            Node::Text {
                tag: None, value, ..
            } => {
                if value.is_empty() {
                    return Err(MarkupError::MissingValue);
                }
                out.push_str(value);
            }
            Node::Text {
                tag: Some(tag),
                value,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(MarkupError::MissingTag);
                }
                out.push_str(&open_tag(tag, attributes));
                out.push_str(value);
                out.push_str(&close_tag(tag));
            }
            Node::Void { tag, attributes } => {
                out.push_str(&open_tag(tag.as_str(), attributes));
            }
        }
        Ok(())
    }

    fn write_pretty(&self, depth: usize, lines: &mut Vec<String>) -> Result<(), MarkupError> {
        let indent = INDENT.repeat(depth);
        match self {
            Node::Element {
                tag,
                attributes,
                children,
            } => {
                check_element(tag, children)?;
                lines.push(format!("{indent}{}", open_tag(tag, attributes)));
                for child in children {
                    child.write_pretty(depth + 1, lines)?;
                }
                lines.push(format!("{indent}{}", close_tag(tag)));
            }
            Node::Text {
                tag: None, value, ..
            } => {
                if value.is_empty() {
                    return Err(MarkupError::MissingValue);
                }
                push_value_lines(&indent, value, lines);
            }
            Node::Text {
                tag: Some(tag),
                value,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(MarkupError::MissingTag);
                }
                lines.push(format!("{indent}{}", open_tag(tag, attributes)));
                push_value_lines(&format!("{indent}{INDENT}"), value, lines);
                lines.push(format!("{indent}{}", close_tag(tag)));
            }
            Node::Void { tag, attributes } => {
                lines.push(format!("{indent}{}", open_tag(tag.as_str(), attributes)));
            }
        }
        Ok(())
    }
}

fn check_element(tag: &str, children: &[Node]) -> Result<(), MarkupError> {
    if tag.is_empty() {
        return Err(MarkupError::MissingTag);
    }
    if children.is_empty() {
        return Err(MarkupError::EmptyElement {
            tag: tag.to_string(),
        });
    }
    Ok(())
}

fn open_tag(tag: &str, attributes: &Attributes) -> String {
    let mut out = format!("<{tag}");
    for (name, value) in attributes {
        out.push_str(&format!(" {name}=\"{value}\""));
    }
    out.push('>');
    out
}

fn close_tag(tag: &str) -> String {
    format!("</{tag}>")
}

fn push_value_lines(indent: &str, value: &str, lines: &mut Vec<String>) {
    for line in value.lines() {
        lines.push(format!("{indent}{}", line.trim_end()));
    }
}
