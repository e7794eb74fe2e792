//! # Page Assembly
//!
//! Pure helpers that turn one markdown document into a finished HTML page:
//! title extraction, template substitution and base path rewriting. Reading
//! and writing files is left to the caller.

use crate::builder::build_document;
use crate::error::MarkupError;
use crate::parsing::blocks::{kinds::Heading, segment_blocks};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Returns the text of the first level one heading, trimmed.
///
/// Deeper headings never count. Fails with [`MarkupError::MissingTitle`] when
/// no block starts with `# `.
pub fn extract_title(markdown: &str) -> Result<String, MarkupError> {
    segment_blocks(markdown)?
        .into_iter()
        .find_map(|block| block.strip_prefix(Heading::TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(MarkupError::MissingTitle)
}

pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Points root-relative `href` and `src` attributes at `base_path`.
///
/// A base path of `/` leaves the HTML untouched.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    if base_path == "/" {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

/// Renders one markdown document into a complete page.
pub fn render_page(
    markdown: &str,
    template: &str,
    wrapper_tag: &str,
    base_path: &str,
) -> Result<String, MarkupError> {
    let title = extract_title(markdown)?;
    let content = build_document(markdown, wrapper_tag, None)?.render()?;
    let page = fill_template(template, &title, &content);
    Ok(rewrite_base_path(&page, base_path))
}
