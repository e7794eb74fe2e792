use marksite_engine::{
    MarkupError, Node, VoidTag, build_document, markdown_to_html, parse_blocks, render_page,
};
use pretty_assertions::assert_eq;

const MUSINGS: &str = "# Musings on Unit Testing\n\nUnit testing your code is a *great* way to build confidence and make friends. Here are some tips.\n\n## Useful tips\n\n1. Talk about unit testing when you are at a party\n2. To impress a date, mention your project's test coverage\n\n## The kids like it too\n\nTry these **kid-friendly** activities:\n\n- write a program to distribute chores among siblings and require each sibling to write a share of the unit tests\n- every day is 'take a child to work' day if you make your child watch you as you write your unit tests\n\n## Random code example\n\n```python\nprint('Hello, world!')\n```\n\n## Conclusion\n\nI leave you with some inspiring quotes:\n\n> Unit testing is next to Godliness. -- unknown author\n\n> On the 6th day, God unit tested. -- unknown author";

#[test]
fn full_document_tree() {
    let doc = build_document(MUSINGS, "div", None).unwrap();
    let expected = Node::element(
        "div",
        vec![
            Node::leaf("h1", "Musings on Unit Testing"),
            Node::element(
                "p",
                vec![
                    Node::text("Unit testing your code is a "),
                    Node::leaf("i", "great"),
                    Node::text(" way to build confidence and make friends. Here are some tips."),
                ],
            ),
            Node::leaf("h2", "Useful tips"),
            Node::element(
                "ol",
                vec![
                    Node::leaf("li", "Talk about unit testing when you are at a party"),
                    Node::leaf("li", "To impress a date, mention your project's test coverage"),
                ],
            ),
            Node::leaf("h2", "The kids like it too"),
            Node::element(
                "p",
                vec![
                    Node::text("Try these "),
                    Node::leaf("b", "kid-friendly"),
                    Node::text(" activities:"),
                ],
            ),
            Node::element(
                "ul",
                vec![
                    Node::leaf(
                        "li",
                        "write a program to distribute chores among siblings and require each sibling to write a share of the unit tests",
                    ),
                    Node::leaf(
                        "li",
                        "every day is 'take a child to work' day if you make your child watch you as you write your unit tests",
                    ),
                ],
            ),
            Node::leaf("h2", "Random code example"),
            Node::element(
                "pre",
                vec![Node::leaf("code", "python\nprint('Hello, world!')\n")],
            ),
            Node::leaf("h2", "Conclusion"),
            Node::leaf("p", "I leave you with some inspiring quotes:"),
            Node::leaf(
                "blockquote",
                "Unit testing is next to Godliness. -- unknown author",
            ),
            Node::leaf("blockquote", "On the 6th day, God unit tested. -- unknown author"),
        ],
    );
    assert_eq!(doc, expected);
    assert_eq!(doc.children().len(), parse_blocks(MUSINGS).unwrap().len());
}

#[test]
fn full_document_pretty_print() {
    let doc = build_document("# Notes\n\n* one\n* **two**", "article", None).unwrap();
    insta::assert_snapshot!(doc.pretty_print().unwrap(), @r"
    <article>
      <h1>
        Notes
      </h1>
      <ul>
        <li>
          one
        </li>
        <li>
          <b>
            two
          </b>
        </li>
      </ul>
    </article>
    ");
}

#[test]
fn indented_image_block_is_trimmed() {
    let markdown = "# Tolkien Fan Club\n\n                    ![JRR Tolkien sitting](/images/tolkien.png)\n            ";
    let doc = build_document(markdown, "div", None).unwrap();
    assert_eq!(
        doc.children()[1],
        Node::void_tag(VoidTag::Img)
            .with_attribute("src", "/images/tolkien.png")
            .with_attribute("alt", "JRR Tolkien sitting")
    );
}

#[test]
fn rendered_html() {
    insta::assert_snapshot!(
        markdown_to_html("# Title\n\nHello **world**\n\n> quoted `code`", "div").unwrap(),
        @"<div><h1>Title</h1><p>Hello <b>world</b></p><blockquote>quoted <code>code</code></blockquote></div>"
    );
}

#[test]
fn unclosed_code_span_fails_the_document() {
    assert_eq!(
        markdown_to_html("# Title\n\nsome `code", "div"),
        Err(MarkupError::UnclosedDelimiter("`".to_string()))
    );
}

#[test]
fn empty_markdown_fails() {
    assert_eq!(markdown_to_html("", "div"), Err(MarkupError::EmptyInput));
}

#[test]
fn page_from_markdown() {
    let template = "<title>{{ Title }}</title>\n<main>{{ Content }}</main>";
    let page = render_page(
        "# Tolkien Fan Club\n\n![JRR Tolkien sitting](/images/tolkien.png)",
        template,
        "div",
        "/fans/",
    )
    .unwrap();
    insta::assert_snapshot!(page, @r#"
    <title>Tolkien Fan Club</title>
    <main><div><h1>Tolkien Fan Club</h1><img src="/fans/images/tolkien.png" alt="JRR Tolkien sitting"></div></main>
    "#);
}

#[test]
fn link_title_leaves_a_clean_href() {
    insta::assert_snapshot!(
        markdown_to_html(r#"see [link](https://example.com "title")"#, "div").unwrap(),
        @r#"<div><p>see <a href="https://example.com">link</a></p></div>"#
    );
}
