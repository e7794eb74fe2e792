//! `marksite render` command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use marksite_engine::{DEFAULT_WRAPPER_TAG, build_document};

#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    input: PathBuf,

    /// Element wrapping the rendered blocks.
    #[arg(short, long, default_value = DEFAULT_WRAPPER_TAG)]
    wrapper_tag: String,

    /// Indent the output, one tag or text line per line.
    #[arg(short, long)]
    pretty: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<()> {
        let markdown = std::fs::read_to_string(&self.input)
            .with_context(|| format!("reading {}", self.input.display()))?;
        let html = render_markdown(&markdown, &self.wrapper_tag, self.pretty)
            .with_context(|| format!("rendering {}", self.input.display()))?;
        println!("{html}");
        Ok(())
    }
}

fn render_markdown(markdown: &str, wrapper_tag: &str, pretty: bool) -> Result<String> {
    let doc = build_document(markdown, wrapper_tag, None)?;
    let html = if pretty {
        doc.pretty_print()?
    } else {
        doc.render()?
    };
    Ok(html)
}
