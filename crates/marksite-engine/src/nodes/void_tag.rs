use std::fmt;
use std::str::FromStr;

use crate::error::MarkupError;

/// The closed set of self-closing HTML elements.
///
/// A void node can only be built from one of these, so a `<p>` without a
/// closing tag is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoidTag {
    Area,
    Base,
    Br,
    Col,
    Embed,
    Hr,
    Img,
    Input,
    Link,
    Meta,
    Param,
    Source,
    Track,
    Wbr,
}

impl VoidTag {
    pub const ALL: [VoidTag; 14] = [
        VoidTag::Area,
        VoidTag::Base,
        VoidTag::Br,
        VoidTag::Col,
        VoidTag::Embed,
        VoidTag::Hr,
        VoidTag::Img,
        VoidTag::Input,
        VoidTag::Link,
        VoidTag::Meta,
        VoidTag::Param,
        VoidTag::Source,
        VoidTag::Track,
        VoidTag::Wbr,
    ];

    /// The lowercase tag name as written in HTML.
    pub fn as_str(self) -> &'static str {
        match self {
            VoidTag::Area => "area",
            VoidTag::Base => "base",
            VoidTag::Br => "br",
            VoidTag::Col => "col",
            VoidTag::Embed => "embed",
            VoidTag::Hr => "hr",
            VoidTag::Img => "img",
            VoidTag::Input => "input",
            VoidTag::Link => "link",
            VoidTag::Meta => "meta",
            VoidTag::Param => "param",
            VoidTag::Source => "source",
            VoidTag::Track => "track",
            VoidTag::Wbr => "wbr",
        }
    }
}

impl FromStr for VoidTag {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(MarkupError::MissingTag);
        }
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| MarkupError::UnknownVoidTag(s.to_string()))
    }
}

impl fmt::Display for VoidTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
