/// Classification of a [Change].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Tag {
    /// Tokens present in both sequences.
    Common,

    /// Tokens only present in the new sequence.
    Added,

    /// Tokens only present in the old sequence.
    Removed,
}

/// A maximal contiguous run of tokens sharing one classification.
///
/// The edit script is an ordered list of [Change]s. Concatenating the values
/// of every run that is not [Removed][Tag::Removed] reconstructs the new
/// text, and of every run that is not [Added][Tag::Added] the old text.
///
/// `V` is the materialized value: [String] for text diffs, `Vec<T>` for
/// slice diffs.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Change<V = String> {
    /// The materialized tokens this run spans.
    pub value: V,

    /// How many tokens this run spans.
    pub count: usize,

    /// This run's classification.
    pub tag: Tag,
}
