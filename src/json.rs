use crate::{diff, tokenize, Change, DiffOptions};
use serde_json::Value;

/// Recursively sorts object keys so logically equal documents serialize
/// identically.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),

        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by_key(|&(key, _)| key);

            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.clone(), canonicalize(value)))
                    .collect(),
            )
        }

        _ => value.clone(),
    }
}

/// Serializes a value the way the json flavor compares it: canonicalized,
/// two-space indentation, line-trailing commas stripped.
fn render(value: &Value) -> String {
    let text = serde_json::to_string_pretty(&canonicalize(value)).unwrap();
    text.replace(",\n", "\n")
}

/// Structural json diff.
///
/// Both values are canonicalized, pretty-printed and compared line by line
/// with case folding off; matching lines keep whichever side's rendering is
/// wider, so the original formatting survives a lenient comparator.
pub fn diff_json(old: &Value, new: &Value) -> Vec<Change> {
    let options = DiffOptions {
        tokenize: Some(&tokenize::lines),
        ignore_case: false,
        use_longest_token: true,
        ..DiffOptions::default()
    };

    diff(&render(old), &render(new), &options)
}
