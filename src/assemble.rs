use crate::{Change, Equality, Segment, Tag, Token};

/// Materializes the winning path's count-only segments into [Change]s,
/// walking both token slices in lockstep.
///
/// Common and added runs join tokens from the new slice, removed runs from
/// the old one. With the longest-token heuristic a common run keeps, pair by
/// pair, whichever side's token is wider, recovering formatting the equality
/// policy normalized away.
pub(crate) fn build_values<T: Token, V>(
    segments: Vec<Segment>,
    new: &[T],
    old: &[T],
    join: &dyn Fn(&[T]) -> V,
    use_longest_token: bool,
) -> Vec<Change<V>> {
    let mut changes = Vec::with_capacity(segments.len());
    let mut new_pos = 0;
    let mut old_pos = 0;

    for Segment { count, tag } in segments {
        let value = match tag {
            Tag::Removed => {
                let value = join(&old[old_pos..old_pos + count]);
                old_pos += count;
                value
            }

            Tag::Added => {
                let value = join(&new[new_pos..new_pos + count]);
                new_pos += count;
                value
            }

            Tag::Common => {
                let value = if use_longest_token {
                    let widest: Vec<T> = new[new_pos..new_pos + count]
                        .iter()
                        .zip(&old[old_pos..old_pos + count])
                        .map(|(new, old)| {
                            if old.width() > new.width() {
                                old.clone()
                            } else {
                                new.clone()
                            }
                        })
                        .collect();

                    join(&widest)
                } else {
                    join(&new[new_pos..new_pos + count])
                };

                new_pos += count;
                old_pos += count;
                value
            }
        };

        changes.push(Change { value, count, tag });
    }

    changes
}

/// Moves every removal in front of an insertion it directly follows.
///
/// The search discovers insertions before deletions at a shared position;
/// conventional output lists deletions first.
pub(crate) fn reorder_removals<V>(changes: &mut [Change<V>]) {
    for i in 1..changes.len() {
        if changes[i].tag == Tag::Removed && changes[i - 1].tag == Tag::Added {
            changes.swap(i - 1, i);
        }
    }
}

/// Folds a trailing change the policy cannot tell apart from the empty
/// string into its predecessor.
///
/// Suppresses a spurious trailing change caused only by an ignorable
/// boundary token, e.g. trailing whitespace under a whitespace-insensitive
/// policy.
pub(crate) fn merge_ignorable_trailer(changes: &mut Vec<Change>, eq: &Equality<String>) {
    let ignorable = changes.len() > 1
        && matches!(changes.last(), Some(last)
            if last.tag != Tag::Common && eq.equals(&String::new(), &last.value));

    if ignorable {
        let last = changes.pop().unwrap();
        let prior = changes.last_mut().unwrap();
        prior.value.push_str(&last.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn tokens(text: &str) -> Vec<String> {
        text.split(' ').map(str::to_owned).collect()
    }

    fn concat(tokens: &[String]) -> String {
        tokens.concat()
    }

    #[test]
    fn values_materialize_from_the_right_side() {
        let old = tokens("a b c");
        let new = tokens("a x c");

        let segments = vec![
            Segment { count: 1, tag: Tag::Common },
            Segment { count: 1, tag: Tag::Added },
            Segment { count: 1, tag: Tag::Removed },
            Segment { count: 1, tag: Tag::Common },
        ];

        let changes = build_values(segments, &new, &old, &concat, false);

        assert_matches!(&changes[..], [common, added, removed, tail] => {
            assert_eq!((common.tag, common.value.as_str()), (Tag::Common, "a"));
            assert_eq!((added.tag, added.value.as_str()), (Tag::Added, "x"));
            assert_eq!((removed.tag, removed.value.as_str()), (Tag::Removed, "b"));
            assert_eq!((tail.tag, tail.value.as_str()), (Tag::Common, "c"));
        });
    }

    #[test]
    fn the_longest_token_heuristic_keeps_the_wider_side() {
        let old = vec!["foo  ".to_owned()];
        let new = vec!["foo".to_owned()];
        let segments = vec![Segment { count: 1, tag: Tag::Common }];

        let changes = build_values(segments, &new, &old, &concat, true);
        assert_eq!(changes[0].value, "foo  ");

        let segments = vec![Segment { count: 1, tag: Tag::Common }];
        let changes = build_values(segments, &new, &old, &concat, false);
        assert_eq!(changes[0].value, "foo");
    }

    #[test]
    fn removals_move_in_front_of_the_insertion_they_follow() {
        let mut changes = vec![
            Change { value: "x".to_owned(), count: 1, tag: Tag::Added },
            Change { value: "b".to_owned(), count: 1, tag: Tag::Removed },
            Change { value: "c".to_owned(), count: 1, tag: Tag::Common },
            Change { value: "y".to_owned(), count: 1, tag: Tag::Added },
            Change { value: "d".to_owned(), count: 1, tag: Tag::Removed },
        ];

        reorder_removals(&mut changes);

        let script: Vec<_> = changes.iter().map(|c| (c.tag, c.value.as_str())).collect();
        assert_eq!(script, [
            (Tag::Removed, "b"),
            (Tag::Added, "x"),
            (Tag::Common, "c"),
            (Tag::Removed, "d"),
            (Tag::Added, "y"),
        ]);
    }

    #[test]
    fn an_ignorable_trailing_change_folds_into_its_predecessor() {
        let comparator = |left: &String, right: &String| left.trim() == right.trim();
        let eq = Equality::new(Some(&comparator), false);

        let mut changes = vec![
            Change { value: "foo".to_owned(), count: 1, tag: Tag::Common },
            Change { value: " ".to_owned(), count: 1, tag: Tag::Removed },
        ];

        merge_ignorable_trailer(&mut changes, &eq);

        assert_matches!(&changes[..], [Change { value, count: 1, tag: Tag::Common }] => {
            assert_eq!(value, "foo ");
        });
    }

    #[test]
    fn a_lone_change_is_never_folded() {
        let comparator = |left: &String, right: &String| left.trim() == right.trim();
        let eq = Equality::new(Some(&comparator), false);

        let mut changes = vec![Change { value: " ".to_owned(), count: 1, tag: Tag::Removed }];
        merge_ignorable_trailer(&mut changes, &eq);

        assert_eq!(changes.len(), 1);
    }

    #[test]
    fn a_substantial_trailing_change_is_kept() {
        let mut changes = vec![
            Change { value: "foo".to_owned(), count: 1, tag: Tag::Common },
            Change { value: "bar".to_owned(), count: 1, tag: Tag::Added },
        ];

        merge_ignorable_trailer(&mut changes, &Equality::default());

        assert_eq!(changes.len(), 2);
    }
}
