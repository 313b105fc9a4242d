use crate::Equality;

/// Configuration hooks for [diff][crate::diff].
///
/// A plain bundle of optional function values plus two flags, selected per
/// diff flavor at the call site; absent hooks fall back to the documented
/// defaults.
pub struct DiffOptions<'a> {
    /// Overrides token equality.
    pub comparator: Option<&'a dyn Fn(&String, &String) -> bool>,

    /// Pre-processing applied to both whole inputs before tokenization;
    /// defaults to the identity.
    pub cast_input: Option<&'a dyn Fn(&str) -> String>,

    /// Splits text into tokens; defaults to one token per character.
    pub tokenize: Option<&'a dyn Fn(&str) -> Vec<String>>,

    /// Filters degenerate tokens after tokenization; defaults to dropping
    /// empty ones.
    pub remove_empty: Option<&'a dyn Fn(Vec<String>) -> Vec<String>>,

    /// Reconstructs text from a token list for a run's value; defaults to
    /// concatenation.
    pub join: Option<&'a dyn Fn(&[String]) -> String>,

    /// Enables the case-insensitive fallback of the default equality.
    pub ignore_case: bool,

    /// Materializes common runs from whichever side's token is wider,
    /// recovering formatting the equality policy normalized away.
    pub use_longest_token: bool,
}

impl Default for DiffOptions<'_> {
    fn default() -> Self {
        DiffOptions {
            comparator: None,
            cast_input: None,
            tokenize: None,
            remove_empty: None,
            join: None,
            ignore_case: true,
            use_longest_token: false,
        }
    }
}

impl<'a> DiffOptions<'a> {
    pub(crate) fn cast(&self, text: &str) -> String {
        match self.cast_input {
            Some(cast) => cast(text),
            None => text.to_owned(),
        }
    }

    pub(crate) fn tokens(&self, text: &str) -> Vec<String> {
        let tokens = match self.tokenize {
            Some(tokenize) => tokenize(text),
            None => text.chars().map(String::from).collect(),
        };

        match self.remove_empty {
            Some(remove_empty) => remove_empty(tokens),
            None => tokens.into_iter().filter(|token| !token.is_empty()).collect(),
        }
    }

    pub(crate) fn join(&self, tokens: &[String]) -> String {
        match self.join {
            Some(join) => join(tokens),
            None => tokens.concat(),
        }
    }

    pub(crate) fn equality(&self) -> Equality<'a, String> {
        Equality::new(self.comparator, self.ignore_case)
    }
}
