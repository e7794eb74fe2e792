//! Block to node mapping and document assembly.

use crate::error::MarkupError;
use crate::nodes::{Attributes, Node};
use crate::parsing::{
    Block,
    blocks::{
        BlockType,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    },
    inline::{TextToken, tokenize},
    parse_blocks,
};

/// Wrapper tag used when the caller has no preference.
pub const DEFAULT_WRAPPER_TAG: &str = "div";

/// Parses markdown into one element wrapping a node per block.
///
/// The first failing block aborts the whole build. Markdown with no blocks
/// yields a wrapper with no children, which fails to render.
pub fn build_document(
    markdown: &str,
    wrapper_tag: &str,
    wrapper_attributes: Option<Attributes>,
) -> Result<Node, MarkupError> {
    let children = parse_blocks(markdown)?
        .into_iter()
        .map(build_block)
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("built <{wrapper_tag}> with {} blocks", children.len());

    let root = Node::element(wrapper_tag, children);
    Ok(match wrapper_attributes {
        Some(attributes) => root.with_attributes(attributes),
        None => root,
    })
}

/// Builds and renders in one step.
pub fn markdown_to_html(markdown: &str, wrapper_tag: &str) -> Result<String, MarkupError> {
    build_document(markdown, wrapper_tag, None)?.render()
}

/// Builds the node for one classified block.
///
/// A heading or code block whose text does not parse as one fails with
/// [`MarkupError::MalformedBlock`].
pub fn build_block(block: Block<'_>) -> Result<Node, MarkupError> {
    let text = block.text;
    match block.block_type {
        BlockType::Heading => {
            let (level, content) =
                Heading::parse(text).ok_or(MarkupError::MalformedBlock(block.block_type))?;
            inline_node(&format!("h{level}"), content)
        }
        BlockType::Code => {
            let code =
                CodeFence::inner(text).ok_or(MarkupError::MalformedBlock(block.block_type))?;
            Ok(Node::element("pre", vec![TextToken::code(code).into()]))
        }
        BlockType::Quote => {
            let lines: Vec<&str> = text.split('\n').map(BlockQuote::strip_prefix).collect();
            // Only bare `>` lines: one break per line.
            if lines.iter().all(|line| line.is_empty()) {
                let breaks = lines
                    .iter()
                    .map(|_| Node::from(TextToken::line_break()))
                    .collect();
                return Ok(Node::element("blockquote", breaks));
            }
            inline_node("blockquote", &lines.join("\n"))
        }
        BlockType::UnorderedList => {
            let lines: Vec<&str> = text.split('\n').collect();
            let marker = UnorderedList::marker(&lines).unwrap_or(UnorderedList::MARKERS[0]);
            let items = lines
                .iter()
                .map(|line| list_item(line.strip_prefix(marker).unwrap_or(line)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::element("ul", items))
        }
        BlockType::OrderedList => {
            let items = text
                .split('\n')
                .enumerate()
                .map(|(i, line)| {
                    list_item(line.strip_prefix(&OrderedList::marker(i)).unwrap_or(line))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::element("ol", items))
        }
        BlockType::Paragraph => inline_node("p", text),
    }
}

/// Tokenizes `text` under `tag`.
///
/// A single plain token becomes a tagged text node; a single typed token is
/// returned on its own; anything else becomes an element of mapped children.
fn inline_node(tag: &str, text: &str) -> Result<Node, MarkupError> {
    let mut tokens = tokenize(text)?;
    if tokens.len() == 1 {
        let token = tokens.remove(0);
        return Ok(if token.is_plain() {
            Node::leaf(tag, token.into_content())
        } else {
            token.into()
        });
    }
    Ok(Node::element(tag, tokens.into_iter().map(Node::from).collect()))
}

/// List items always keep their `li`, even around a single typed token.
fn list_item(text: &str) -> Result<Node, MarkupError> {
    let mut tokens = tokenize(text)?;
    if tokens.len() == 1 && tokens[0].is_plain() {
        return Ok(Node::leaf("li", tokens.remove(0).into_content()));
    }
    Ok(Node::element("li", tokens.into_iter().map(Node::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::VoidTag;
    use crate::parsing::blocks::classify_block;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn block(text: &str) -> Result<Node, MarkupError> {
        build_block(Block {
            block_type: classify_block(text),
            text,
        })
    }

    #[test]
    fn heading_and_paragraph_document() {
        let doc = build_document("# Title\n\nHello **world**", "div", None).unwrap();
        assert_eq!(
            doc,
            Node::element(
                "div",
                vec![
                    Node::leaf("h1", "Title"),
                    Node::element("p", vec![Node::text("Hello "), Node::leaf("b", "world")]),
                ]
            )
        );
        assert_eq!(
            doc.render().unwrap(),
            "<div><h1>Title</h1><p>Hello <b>world</b></p></div>"
        );
    }

    #[test]
    fn image_only_block_is_a_bare_img() {
        let doc = build_document("# T\n\n![alt](x.png)", "div", None).unwrap();
        let img = &doc.children()[1];
        assert_eq!(
            img,
            &Node::void_tag(VoidTag::Img)
                .with_attribute("src", "x.png")
                .with_attribute("alt", "alt")
        );
        assert_eq!(img.render().unwrap(), r#"<img src="x.png" alt="alt">"#);
    }

    #[test]
    fn link_only_block_is_a_bare_anchor() {
        assert_eq!(
            block("[goto](http://tolkien.com)").unwrap(),
            Node::leaf("a", "goto").with_attribute("href", "http://tolkien.com")
        );
    }

    #[rstest]
    #[case("# One", "<h1>One</h1>")]
    #[case("### Three", "<h3>Three</h3>")]
    #[case("###### Six", "<h6>Six</h6>")]
    #[case("## With *style*", "<h2>With <i>style</i></h2>")]
    #[case("# Test\n123", "<h1>Test<br>123</h1>")]
    #[case("####### Seven", "<p>####### Seven</p>")]
    fn headings(#[case] text: &str, #[case] html: &str) {
        assert_eq!(block(text).unwrap().render().unwrap(), html);
    }

    #[test]
    fn code_block_keeps_contents_verbatim() {
        let node = block("```python\nprint('**not bold**')\n```").unwrap();
        assert_eq!(
            node,
            Node::element(
                "pre",
                vec![Node::leaf("code", "python\nprint('**not bold**')\n")]
            )
        );
        assert_eq!(
            node.render().unwrap(),
            "<pre><code>python\nprint('**not bold**')\n</code></pre>"
        );
    }

    #[test]
    fn single_line_quote_is_a_leaf() {
        assert_eq!(
            block("> Unit testing is next to Godliness.").unwrap(),
            Node::leaf("blockquote", "Unit testing is next to Godliness.")
        );
    }

    #[test]
    fn multi_line_quote_breaks_between_lines() {
        assert_eq!(
            block("> first\n>\n> *second*").unwrap().render().unwrap(),
            "<blockquote>first<br><br><i>second</i></blockquote>"
        );
    }

    #[rstest]
    #[case(">", "<blockquote><br></blockquote>")]
    #[case(">\n>", "<blockquote><br><br></blockquote>")]
    fn bare_quote_lines_are_breaks(#[case] text: &str, #[case] html: &str) {
        assert_eq!(block(text).unwrap().render().unwrap(), html);
    }

    #[test]
    fn bare_quote_does_not_abort_document() {
        assert_eq!(
            markdown_to_html("# T\n\n>", "div").unwrap(),
            "<div><h1>T</h1><blockquote><br></blockquote></div>"
        );
    }

    #[rstest]
    #[case(BlockType::Heading, "no hashes here")]
    #[case(BlockType::Code, "``````")]
    fn mismatched_block_type_is_malformed(#[case] block_type: BlockType, #[case] text: &str) {
        assert_eq!(
            build_block(Block { block_type, text }),
            Err(MarkupError::MalformedBlock(block_type))
        );
    }

    #[rstest]
    #[case("* a\n* b", "<ul><li>a</li><li>b</li></ul>")]
    #[case("- a\n- **b**", "<ul><li>a</li><li><b>b</b></li></ul>")]
    #[case("1. a\n2. b\n3. c", "<ol><li>a</li><li>b</li><li>c</li></ol>")]
    #[case(
        "1. see [docs](/docs) now",
        r#"<ol><li>see <a href="/docs">docs</a> now</li></ol>"#
    )]
    fn lists(#[case] text: &str, #[case] html: &str) {
        assert_eq!(block(text).unwrap().render().unwrap(), html);
    }

    #[test]
    fn list_item_with_single_typed_token_keeps_li() {
        assert_eq!(
            block("* `code`").unwrap(),
            Node::element("ul", vec![Node::element("li", vec![Node::leaf("code", "code")])])
        );
    }

    #[test]
    fn ordered_list_item_strips_multi_digit_marker() {
        let text = (1..=10)
            .map(|n| format!("{n}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        let node = block(&text).unwrap();
        assert_eq!(node.children().len(), 10);
        assert_eq!(node.children()[9], Node::leaf("li", "item"));
    }

    #[test]
    fn paragraph_with_line_break() {
        assert_eq!(
            block("one\ntwo").unwrap(),
            Node::element(
                "p",
                vec![
                    Node::text("one"),
                    Node::void_tag(VoidTag::Br),
                    Node::text("two"),
                ]
            )
        );
    }

    #[test]
    fn wrapper_attributes_are_applied() {
        let mut attributes = Attributes::new();
        attributes.insert("class".to_string(), "content".to_string());
        let doc = build_document("words", "article", Some(attributes)).unwrap();
        assert_eq!(
            doc.render().unwrap(),
            r#"<article class="content"><p>words</p></article>"#
        );
    }

    #[test]
    fn malformed_block_aborts_document() {
        assert_eq!(
            build_document("# Fine\n\nThis *is invalid markdown", "div", None),
            Err(MarkupError::UnclosedDelimiter("*".to_string()))
        );
    }

    #[test]
    fn empty_list_item_aborts_document() {
        assert_eq!(
            build_document("* a\n* \n* c", "div", None),
            Err(MarkupError::EmptyInput)
        );
    }

    #[test]
    fn blank_only_markdown_renders_empty_element_error() {
        let doc = build_document("\n\n\n", "div", None).unwrap();
        assert_eq!(
            doc.render(),
            Err(MarkupError::EmptyElement {
                tag: "div".to_string()
            })
        );
    }

    #[test]
    fn markdown_to_html_renders() {
        assert_eq!(
            markdown_to_html("plain", DEFAULT_WRAPPER_TAG).unwrap(),
            "<div><p>plain</p></div>"
        );
    }
}
