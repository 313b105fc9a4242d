//! Ready-made tokenizers for the diff flavors.
//!
//! Each function fits the `tokenize` hook of
//! [DiffOptions][crate::DiffOptions], so they can also be combined with
//! custom comparators or join functions.

use itertools::Itertools;

#[derive(Copy, Clone, Eq, PartialEq)]
enum Class {
    Word,
    Space,
    Other,
}

fn class(c: char) -> Class {
    if c.is_alphanumeric() || c == '_' {
        Class::Word
    } else if c.is_whitespace() {
        Class::Space
    } else {
        Class::Other
    }
}

/// Splits text at word boundaries.
///
/// Maximal runs of word characters, of whitespace and of punctuation each
/// become one token.
pub fn words(text: &str) -> Vec<String> {
    let runs = text.chars().chunk_by(|&c| class(c));
    runs.into_iter().map(|(_, run)| run.collect()).collect()
}

/// Splits text into lines, keeping each newline attached to its line.
pub fn lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_owned).collect()
}

/// Splits text into sentences at terminal punctuation followed by
/// whitespace; the whitespace run between two sentences is its own token.
pub fn sentences(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(['.', '!', '?']) {
        let end = pos + offset + 1;
        let rest = &text[end..];

        if rest.chars().next().map_or(true, char::is_whitespace) {
            tokens.push(text[start..end].to_owned());

            let space = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());

            if space > 0 {
                tokens.push(text[end..end + space].to_owned());
            }

            start = end + space;
            pos = start;
        } else {
            pos = end;
        }
    }

    if start < text.len() {
        tokens.push(text[start..].to_owned());
    }

    tokens
}

#[derive(Copy, Clone, Eq, PartialEq)]
enum CssClass {
    Delimiter,
    Space,
    Other,
}

fn css_class(c: char) -> CssClass {
    if matches!(c, '{' | '}' | ':' | ';' | ',') {
        CssClass::Delimiter
    } else if c.is_whitespace() {
        CssClass::Space
    } else {
        CssClass::Other
    }
}

/// Splits css-ish text.
///
/// Each of `{` `}` `:` `;` `,` is a single token; whitespace runs and the
/// stretches between delimiters group.
pub fn css(text: &str) -> Vec<String> {
    let runs = text.chars().chunk_by(|&c| css_class(c));

    runs.into_iter()
        .flat_map(|(class, run)| match class {
            CssClass::Delimiter => run.map(String::from).collect::<Vec<_>>(),
            _ => vec![run.collect()],
        })
        .collect()
}
