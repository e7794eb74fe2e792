use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::types::TextToken;

/// A `[text](destination)` style construct found in plain text.
pub trait Media {
    fn pattern() -> &'static Regex;

    /// Whether a match starting at byte `start` of `text` really is this
    /// construct.
    fn accepts(_text: &str, _start: usize) -> bool {
        true
    }

    fn token(text: &str, destination: &str) -> TextToken;
}

/// `![alt](src)`
pub struct Image;

impl Media for Image {
    fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
        })
    }

    fn token(alt: &str, src: &str) -> TextToken {
        TextToken::image(alt, src)
    }
}

/// `[text](href)` or `[text](href "title")`. The title is dropped.
pub struct Link;

impl Link {
    pub const IMAGE_BANG: char = '!';
}

impl Media for Link {
    fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r#"\[([^\[\]]*)\]\(([^\(\)]*?)(?:\s+"[^"]*")?\)"#)
                .expect("Invalid link regex")
        })
    }

    // The regex crate has no lookbehind, so `![..](..)` is filtered here.
    fn accepts(text: &str, start: usize) -> bool {
        !text[..start].ends_with(Self::IMAGE_BANG)
    }

    fn token(text: &str, href: &str) -> TextToken {
        TextToken::link(text, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_pattern_captures_alt_and_src() {
        let caps = Image::pattern()
            .captures("Text ![alt text](https://example.png)")
            .unwrap();
        assert_eq!(&caps[1], "alt text");
        assert_eq!(&caps[2], "https://example.png");
    }

    #[test]
    fn empty_image_parts_are_allowed() {
        let caps = Image::pattern().captures("Empty ![]()").unwrap();
        assert_eq!(&caps[1], "");
        assert_eq!(&caps[2], "");
    }

    #[test]
    fn link_rejects_image_syntax() {
        let text = "see ![alt](x.png)";
        let m = Link::pattern().find(text).unwrap();
        assert!(!Link::accepts(text, m.start()));
    }

    #[test]
    fn link_accepts_plain_brackets() {
        let text = "see [docs](/docs)";
        let m = Link::pattern().find(text).unwrap();
        assert!(Link::accepts(text, m.start()));
    }

    #[test]
    fn link_title_is_not_part_of_href() {
        let caps = Link::pattern()
            .captures(r#"see [link](https://example.com "title")"#)
            .unwrap();
        assert_eq!(&caps[1], "link");
        assert_eq!(&caps[2], "https://example.com");
    }

    #[test]
    fn link_without_title_keeps_spaces_in_href() {
        let caps = Link::pattern().captures("[x](a b)").unwrap();
        assert_eq!(&caps[2], "a b");
    }
}
