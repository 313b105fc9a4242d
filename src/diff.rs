use crate::{build_values, merge_ignorable_trailer, reorder_removals, shortest_edit_script};
use crate::{Change, DiffOptions, Equality, Token};

/// Computes the shortest edit script transforming `old` into `new`.
///
/// Both inputs are cast, tokenized and filtered per `options`; the result
/// is an ordered list of classified runs covering both texts, deletions
/// listed before the insertion sharing their position.
///
/// # Example
///
/// ```rust
/// use text_edit_script::{diff, Change, DiffOptions, Tag};
///
/// let changes = diff("abc", "axc", &DiffOptions::default());
///
/// let script: Vec<_> = changes.iter().map(|c| (c.tag, c.value.as_str())).collect();
///
/// assert_eq!(script, [
///     (Tag::Common, "a"),
///     (Tag::Removed, "b"),
///     (Tag::Added, "x"),
///     (Tag::Common, "c"),
/// ]);
/// ```
pub fn diff(old: &str, new: &str, options: &DiffOptions) -> Vec<Change> {
    let old = options.cast(old);
    let new = options.cast(new);
    let old_tokens = options.tokens(&old);
    let new_tokens = options.tokens(&new);
    let eq = options.equality();

    let segments = shortest_edit_script(&old_tokens, &new_tokens, &eq);

    let mut changes = build_values(
        segments,
        &new_tokens,
        &old_tokens,
        &|tokens| options.join(tokens),
        options.use_longest_token,
    );

    reorder_removals(&mut changes);
    merge_ignorable_trailer(&mut changes, &eq);
    changes
}

/// Diffs two token slices directly.
///
/// The array mode: no tokenize or join hooks apply, runs materialize as
/// token vectors and no trailing merge takes place.
pub fn diff_slices<T: Token>(old: &[T], new: &[T], eq: &Equality<T>) -> Vec<Change<Vec<T>>> {
    let segments = shortest_edit_script(old, new, eq);
    let mut changes = build_values(segments, new, old, &|tokens: &[T]| tokens.to_vec(), false);
    reorder_removals(&mut changes);
    changes
}
