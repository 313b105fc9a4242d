use crate::{Equality, Tag, Token};
use derive_more::{Deref, DerefMut};
use std::collections::HashMap;

/// A count-only run recorded while the search walks the edit graph.
///
/// Values are deferred to [build_values][crate::build_values].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct Segment {
    pub(crate) count: usize,
    pub(crate) tag: Tag,
}

/// One candidate partial edit script, anchored to a diagonal.
///
/// `new_pos` is the index into the new-token slice of the last token this
/// path consumed; `-1` means nothing consumed yet. The position into the
/// old-token slice is derived as `new_pos - diagonal`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Path {
    pub(crate) new_pos: isize,
    pub(crate) segments: Vec<Segment>,
}

impl Path {
    pub(crate) fn seed() -> Self {
        Path {
            new_pos: -1,
            segments: Vec::new(),
        }
    }

    /// Appends one edit, merging it into an equal-tagged trailing segment.
    fn push(&mut self, tag: Tag) {
        match self.segments.last_mut() {
            Some(last) if last.tag == tag => last.count += 1,
            _ => self.segments.push(Segment { count: 1, tag }),
        }
    }
}

/// Best known [Path] per diagonal, sparse.
///
/// Keys are signed diagonals `new_pos - old_pos`. Within one iteration every
/// slot is read at most once before being overwritten; the insertion branch
/// takes its slot by move, only the deletion branch clones.
#[derive(Debug, Default, Deref, DerefMut)]
struct Candidates(HashMap<isize, Path>);

/// Finds a shortest edit script transforming `old` into `new`.
///
/// Greedy breadth-first search over increasing edit length, keeping one
/// furthest-reaching candidate per diagonal, after Myers' O(ND) family.
pub(crate) fn shortest_edit_script<T: Token>(
    old: &[T],
    new: &[T],
    eq: &Equality<T>,
) -> Vec<Segment> {
    let new_len = new.len() as isize;
    let old_len = old.len() as isize;

    let mut first = Path::seed();
    let old_pos = extract_common(&mut first, new, old, 0, eq);

    if first.new_pos + 1 >= new_len && old_pos + 1 >= old_len {
        // The sequences are equal under the policy.
        return vec![Segment {
            count: new.len(),
            tag: Tag::Common,
        }];
    }

    let mut best = Candidates::default();
    best.insert(0, first);

    // The worst case replaces every token.
    for edit_length in 1..=old_len + new_len {
        for diagonal in (-edit_length..=edit_length).step_by(2) {
            // This slot is not read again within this iteration, so the
            // insertion branch below may take it by move.
            let add_path = best.remove(&(diagonal - 1));
            let remove_path = best.get(&(diagonal + 1));
            let ref_old_pos = remove_path.map_or(0, |p| p.new_pos) - diagonal;

            let can_add = add_path.as_ref().is_some_and(|p| p.new_pos + 1 < new_len);
            let can_remove = remove_path.is_some() && 0 <= ref_old_pos && ref_old_pos < old_len;

            if !can_add && !can_remove {
                best.remove(&diagonal);
                continue;
            }

            // Branch from whichever predecessor reaches farther into the new
            // sequence. The deletion predecessor may still seed the next
            // diagonal this iteration and must be cloned; the insertion
            // predecessor was already moved out of the table.
            let mut base = if !can_add
                || (can_remove
                    && add_path.as_ref().map(|p| p.new_pos) < remove_path.map(|p| p.new_pos))
            {
                let mut path = remove_path.cloned().unwrap();
                path.push(Tag::Removed);
                path
            } else {
                let mut path = add_path.unwrap();
                path.new_pos += 1;
                path.push(Tag::Added);
                path
            };

            let old_pos = extract_common(&mut base, new, old, diagonal, eq);

            if base.new_pos + 1 >= new_len && old_pos + 1 >= old_len {
                return base.segments;
            }

            best.insert(diagonal, base);
        }
    }

    unreachable!("the search completes within old_len + new_len iterations")
}

/// Extends `path` along `diagonal` by consuming the longest run of matching
/// token pairs starting at its current position.
///
/// A nonzero run appends a single common segment. Returns the derived old
/// position; `path.new_pos` is updated in place.
pub(crate) fn extract_common<T: Token>(
    path: &mut Path,
    new: &[T],
    old: &[T],
    diagonal: isize,
    eq: &Equality<T>,
) -> isize {
    let new_len = new.len() as isize;
    let old_len = old.len() as isize;
    let mut new_pos = path.new_pos;
    let mut old_pos = new_pos - diagonal;
    let mut count = 0;

    while new_pos + 1 < new_len
        && old_pos + 1 < old_len
        && eq.equals(&new[(new_pos + 1) as usize], &old[(old_pos + 1) as usize])
    {
        new_pos += 1;
        old_pos += 1;
        count += 1;
    }

    if count > 0 {
        path.segments.push(Segment {
            count,
            tag: Tag::Common,
        });
    }

    path.new_pos = new_pos;
    old_pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use test_strategy::proptest;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn script(old: &str, new: &str) -> Vec<Segment> {
        shortest_edit_script(&chars(old), &chars(new), &Equality::exact())
    }

    fn edits(segments: &[Segment]) -> usize {
        segments
            .iter()
            .filter(|s| s.tag != Tag::Common)
            .map(|s| s.count)
            .sum()
    }

    fn fewest_possible_edits(old: &[char], new: &[char]) -> usize {
        let mut lcs = vec![vec![0usize; new.len() + 1]; old.len() + 1];

        for i in 1..=old.len() {
            for j in 1..=new.len() {
                lcs[i][j] = if old[i - 1] == new[j - 1] {
                    lcs[i - 1][j - 1] + 1
                } else {
                    lcs[i - 1][j].max(lcs[i][j - 1])
                };
            }
        }

        old.len() + new.len() - 2 * lcs[old.len()][new.len()]
    }

    #[test]
    fn the_snake_consumes_the_longest_matching_run() {
        let mut path = Path::seed();
        let old_pos = extract_common(&mut path, &chars("abcx"), &chars("abcy"), 0, &Equality::exact());

        assert_eq!(path.new_pos, 2);
        assert_eq!(old_pos, 2);
        assert_matches!(&path.segments[..], [Segment { count: 3, tag: Tag::Common }]);
    }

    #[test]
    fn the_snake_appends_nothing_without_a_match() {
        let mut path = Path::seed();
        let old_pos = extract_common(&mut path, &chars("x"), &chars("y"), 0, &Equality::exact());

        assert_eq!(path.new_pos, -1);
        assert_eq!(old_pos, -1);
        assert!(path.segments.is_empty());
    }

    #[test]
    fn the_snake_respects_the_equality_policy() {
        let mut path = Path::seed();
        let old_pos = extract_common(&mut path, &chars("AB"), &chars("ab"), 0, &Equality::default());

        assert_eq!(path.new_pos, 1);
        assert_eq!(old_pos, 1);
        assert_matches!(&path.segments[..], [Segment { count: 2, tag: Tag::Common }]);
    }

    #[test]
    fn unit_edits_merge_into_an_equal_tagged_trailing_segment() {
        let mut path = Path::seed();
        path.push(Tag::Added);
        path.push(Tag::Added);
        path.push(Tag::Removed);

        assert_matches!(
            &path.segments[..],
            [
                Segment { count: 2, tag: Tag::Added },
                Segment { count: 1, tag: Tag::Removed },
            ]
        );
    }

    #[test]
    fn equal_sequences_collapse_to_one_common_segment() {
        assert_matches!(&script("abc", "abc")[..], [Segment { count: 3, tag: Tag::Common }]);
    }

    #[test]
    fn the_classical_myers_example_needs_five_edits() {
        assert_eq!(edits(&script("ABCABBA", "CBABAC")), 5);
    }

    #[test]
    fn disjoint_sequences_are_replaced_wholesale() {
        assert_eq!(edits(&script("ab", "cd")), 4);
    }

    #[proptest]
    fn the_number_of_edits_is_minimal(
        #[strategy("[abc]{0,12}")] old: String,
        #[strategy("[abc]{0,12}")] new: String,
    ) {
        let segments = script(&old, &new);
        assert_eq!(edits(&segments), fewest_possible_edits(&chars(&old), &chars(&new)));
    }

    #[proptest]
    fn segment_counts_cover_both_sequences(
        #[strategy("[ab]{0,10}")] old: String,
        #[strategy("[ab]{0,10}")] new: String,
    ) {
        let segments = script(&old, &new);

        let new_total: usize = segments
            .iter()
            .filter(|s| s.tag != Tag::Removed)
            .map(|s| s.count)
            .sum();

        let old_total: usize = segments
            .iter()
            .filter(|s| s.tag != Tag::Added)
            .map(|s| s.count)
            .sum();

        assert_eq!(new_total, new.chars().count());
        assert_eq!(old_total, old.chars().count());
    }
}
