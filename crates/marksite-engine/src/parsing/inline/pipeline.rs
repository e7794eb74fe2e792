use crate::error::MarkupError;

use super::{
    cursor::Cursor,
    kinds::{Delimiter, Image, LineBreak, Link, Media},
    types::TextToken,
};

/// One pass over the token list. Only plain tokens are re-split; typed
/// tokens pass through untouched.
pub type Stage = fn(Vec<TextToken>) -> Result<Vec<TextToken>, MarkupError>;

/// The inline stages in the order they run.
///
/// Emphasis is carved out before images, links and line breaks, so a link
/// inside italics is still found in the plain pieces around it. Text already
/// typed bold is never rescanned for italics.
pub const STAGES: [(&str, Stage); 6] = [
    ("bold", split_bold),
    ("italic", split_italic),
    ("code", split_code),
    ("image", split_media::<Image>),
    ("link", split_media::<Link>),
    ("line_break", split_line_breaks),
];

/// Tokenizes one block's text into inline tokens.
///
/// Fails with [`MarkupError::EmptyInput`] for `""` and
/// [`MarkupError::UnclosedDelimiter`] when a `**`, `*` or `` ` `` span is
/// never closed.
pub fn tokenize(text: &str) -> Result<Vec<TextToken>, MarkupError> {
    if text.is_empty() {
        return Err(MarkupError::EmptyInput);
    }

    STAGES
        .iter()
        .try_fold(vec![TextToken::plain(text)], |tokens, (name, stage)| {
            log::trace!("inline stage {name}: {} tokens in", tokens.len());
            stage(tokens)
        })
}

fn split_bold(tokens: Vec<TextToken>) -> Result<Vec<TextToken>, MarkupError> {
    split_delimiter(tokens, Delimiter::BOLD)
}

fn split_italic(tokens: Vec<TextToken>) -> Result<Vec<TextToken>, MarkupError> {
    split_delimiter(tokens, Delimiter::ITALIC)
}

fn split_code(tokens: Vec<TextToken>) -> Result<Vec<TextToken>, MarkupError> {
    split_delimiter(tokens, Delimiter::CODE)
}

/// Applies `split` to every non-empty plain token, keeping everything else.
fn split_plain<F>(tokens: Vec<TextToken>, mut split: F) -> Result<Vec<TextToken>, MarkupError>
where
    F: FnMut(&str, &mut Vec<TextToken>) -> Result<(), MarkupError>,
{
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.is_plain() && !token.content().is_empty() {
            split(token.content(), &mut out)?;
        } else {
            out.push(token);
        }
    }
    Ok(out)
}

/// Splits plain tokens on a symmetric delimiter.
///
/// Empty plain runs are dropped; an empty delimited pair still yields an
/// empty typed token. Whitespace is kept as is.
pub fn split_delimiter(
    tokens: Vec<TextToken>,
    delimiter: Delimiter,
) -> Result<Vec<TextToken>, MarkupError> {
    split_plain(tokens, |text, out| split_on_delimiter(text, delimiter, out))
}

fn split_on_delimiter(
    text: &str,
    delimiter: Delimiter,
    out: &mut Vec<TextToken>,
) -> Result<(), MarkupError> {
    let mut cur = Cursor::new(text);
    let mut start = cur.pos();
    let mut open = false;

    while !cur.eof() {
        if !cur.starts_with(delimiter.marker) {
            cur.bump();
            continue;
        }

        let segment = cur.since(start);
        if open {
            out.push(TextToken::span(delimiter.kind, segment));
        } else if !segment.is_empty() {
            out.push(TextToken::plain(segment));
        }
        open = !open;
        cur.bump_n(delimiter.marker.len());
        start = cur.pos();
    }

    if open {
        return Err(MarkupError::UnclosedDelimiter(delimiter.marker.to_string()));
    }
    let rest = cur.since(start);
    if !rest.is_empty() {
        out.push(TextToken::plain(rest));
    }
    Ok(())
}

/// Splits plain tokens around every image or link occurrence.
pub fn split_media<M: Media>(tokens: Vec<TextToken>) -> Result<Vec<TextToken>, MarkupError> {
    split_plain(tokens, |text, out| {
        split_on_media::<M>(text, out);
        Ok(())
    })
}

fn split_on_media<M: Media>(text: &str, out: &mut Vec<TextToken>) {
    let mut last = 0;
    for caps in M::pattern().captures_iter(text) {
        let Some(found) = caps.get(0) else {
            continue;
        };
        if !M::accepts(text, found.start()) {
            continue;
        }
        if found.start() > last {
            out.push(TextToken::plain(&text[last..found.start()]));
        }
        out.push(M::token(&caps[1], &caps[2]));
        last = found.end();
    }
    if last < text.len() {
        out.push(TextToken::plain(&text[last..]));
    }
}

/// Turns every `\n` in plain tokens into a line break token.
pub fn split_line_breaks(tokens: Vec<TextToken>) -> Result<Vec<TextToken>, MarkupError> {
    split_plain(tokens, |text, out| {
        for (i, piece) in text.split(LineBreak::NEWLINE).enumerate() {
            if i > 0 {
                out.push(TextToken::line_break());
            }
            if !piece.is_empty() {
                out.push(TextToken::plain(piece));
            }
        }
        Ok(())
    })
}
