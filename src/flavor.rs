use crate::{diff, diff_slices, tokenize, Change, DiffOptions, Equality, Token};

/// Character-by-character diff.
pub fn diff_chars(old: &str, new: &str) -> Vec<Change> {
    diff(old, new, &DiffOptions::default())
}

/// Word diff that ignores whitespace differences between tokens.
///
/// A change consisting only of whitespace at a text boundary folds into the
/// neighboring run instead of surfacing as a spurious edit.
pub fn diff_words(old: &str, new: &str) -> Vec<Change> {
    let comparator = |left: &String, right: &String| left.trim() == right.trim();

    let options = DiffOptions {
        comparator: Some(&comparator),
        tokenize: Some(&tokenize::words),
        ..DiffOptions::default()
    };

    diff(old, new, &options)
}

/// Word diff where whitespace differences count.
pub fn diff_words_with_space(old: &str, new: &str) -> Vec<Change> {
    let options = DiffOptions {
        tokenize: Some(&tokenize::words),
        ..DiffOptions::default()
    };

    diff(old, new, &options)
}

/// Line-by-line diff.
pub fn diff_lines(old: &str, new: &str) -> Vec<Change> {
    let options = DiffOptions {
        tokenize: Some(&tokenize::lines),
        ..DiffOptions::default()
    };

    diff(old, new, &options)
}

/// Line diff that ignores leading and trailing whitespace within a line.
pub fn diff_trimmed_lines(old: &str, new: &str) -> Vec<Change> {
    let comparator = |left: &String, right: &String| left.trim() == right.trim();

    let options = DiffOptions {
        comparator: Some(&comparator),
        tokenize: Some(&tokenize::lines),
        ..DiffOptions::default()
    };

    diff(old, new, &options)
}

/// Sentence-by-sentence diff.
pub fn diff_sentences(old: &str, new: &str) -> Vec<Change> {
    let options = DiffOptions {
        tokenize: Some(&tokenize::sentences),
        ..DiffOptions::default()
    };

    diff(old, new, &options)
}

/// Diff targeted at css content.
pub fn diff_css(old: &str, new: &str) -> Vec<Change> {
    let options = DiffOptions {
        tokenize: Some(&tokenize::css),
        ..DiffOptions::default()
    };

    diff(old, new, &options)
}

/// Diffs two token slices under the default equality policy.
pub fn diff_arrays<T: Token>(old: &[T], new: &[T]) -> Vec<Change<Vec<T>>> {
    diff_slices(old, new, &Equality::default())
}
