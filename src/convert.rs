use crate::{Change, Tag};

/// Renders a run list as markup, insertions inside `<ins>` and deletions
/// inside `<del>`, with html-significant characters escaped.
pub fn changes_to_xml(changes: &[Change]) -> String {
    let mut xml = String::new();

    for change in changes {
        match change.tag {
            Tag::Added => {
                xml.push_str("<ins>");
                xml.push_str(&escape_html(&change.value));
                xml.push_str("</ins>");
            }

            Tag::Removed => {
                xml.push_str("<del>");
                xml.push_str(&escape_html(&change.value));
                xml.push_str("</del>");
            }

            Tag::Common => xml.push_str(&escape_html(&change.value)),
        }
    }

    xml
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Maps a run list onto diff-match-patch style `(op, text)` pairs: `1` for
/// insertions, `-1` for deletions, `0` for common runs.
pub fn changes_to_dmp(changes: &[Change]) -> impl Iterator<Item = (i8, &str)> {
    changes.iter().map(|change| {
        let op = match change.tag {
            Tag::Added => 1,
            Tag::Removed => -1,
            Tag::Common => 0,
        };

        (op, change.value.as_str())
    })
}
