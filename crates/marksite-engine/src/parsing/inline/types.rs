use std::fmt;
use std::str::FromStr;

use crate::error::MarkupError;
use crate::nodes::{Node, VoidTag};

/// The kind of an inline text token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
    LineBreak,
}

impl TextKind {
    pub const ALL: [TextKind; 7] = [
        TextKind::Plain,
        TextKind::Bold,
        TextKind::Italic,
        TextKind::Code,
        TextKind::Link,
        TextKind::Image,
        TextKind::LineBreak,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextKind::Plain => "plain",
            TextKind::Bold => "bold",
            TextKind::Italic => "italic",
            TextKind::Code => "code",
            TextKind::Link => "link",
            TextKind::Image => "image",
            TextKind::LineBreak => "line_break",
        }
    }

    /// Links and images are the only kinds that point somewhere.
    pub fn has_destination(self) -> bool {
        matches!(self, TextKind::Link | TextKind::Image)
    }
}

impl FromStr for TextKind {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| MarkupError::InvalidTextTokenKind(s.to_string()))
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified run of inline text.
///
/// `destination` is present exactly when the kind is [`TextKind::Link`] or
/// [`TextKind::Image`]. For images `content` holds the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextToken {
    content: String,
    kind: TextKind,
    destination: Option<String>,
}

impl TextToken {
    /// Builds a token, checking that a destination comes with links and
    /// images and with nothing else.
    pub fn try_new(
        content: impl Into<String>,
        kind: TextKind,
        destination: Option<String>,
    ) -> Result<Self, MarkupError> {
        if kind.has_destination() != destination.is_some() {
            return Err(MarkupError::InvalidTextTokenKind(kind.to_string()));
        }
        Ok(Self {
            content: content.into(),
            kind,
            destination,
        })
    }

    /// Tokens of kinds that never carry a destination.
    pub(crate) fn span(kind: TextKind, content: impl Into<String>) -> Self {
        debug_assert!(!kind.has_destination());
        Self {
            content: content.into(),
            kind,
            destination: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::span(TextKind::Plain, content)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::span(TextKind::Bold, content)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::span(TextKind::Italic, content)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::span(TextKind::Code, content)
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            kind: TextKind::Link,
            destination: Some(href.into()),
        }
    }

    pub fn image(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: TextKind::Image,
            destination: Some(src.into()),
        }
    }

    pub fn line_break() -> Self {
        Self::span(TextKind::LineBreak, "\n")
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }

    pub fn kind(&self) -> TextKind {
        self.kind
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::Plain
    }
}

impl From<TextToken> for Node {
    fn from(token: TextToken) -> Self {
        let destination = token.destination.unwrap_or_default();
        match token.kind {
            TextKind::Plain => Node::text(token.content),
            TextKind::Bold => Node::leaf("b", token.content),
            TextKind::Italic => Node::leaf("i", token.content),
            TextKind::Code => Node::leaf("code", token.content),
            TextKind::Link => Node::leaf("a", token.content).with_attribute("href", destination),
            TextKind::Image => Node::void_tag(VoidTag::Img)
                .with_attribute("src", destination)
                .with_attribute("alt", token.content),
            TextKind::LineBreak => Node::void_tag(VoidTag::Br),
        }
    }
}
