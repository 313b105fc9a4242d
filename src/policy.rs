use crate::Token;

/// Pluggable token equality.
///
/// Resolution order: the caller-supplied comparator if present, otherwise
/// exact equality, otherwise case-folded equality if the fallback is
/// enabled. The default policy has no comparator and the fallback enabled.
pub struct Equality<'a, T> {
    comparator: Option<&'a dyn Fn(&T, &T) -> bool>,
    ignore_case: bool,
}

impl<'a, T> Equality<'a, T> {
    /// A policy with the given comparator and case-fold fallback.
    pub fn new(comparator: Option<&'a dyn Fn(&T, &T) -> bool>, ignore_case: bool) -> Self {
        Equality {
            comparator,
            ignore_case,
        }
    }

    /// Exact equality, no fallback.
    pub fn exact() -> Self {
        Equality {
            comparator: None,
            ignore_case: false,
        }
    }
}

impl<T: Token> Equality<'_, T> {
    /// Whether two tokens are equal under this policy.
    ///
    /// Pure and total; never fails.
    pub fn equals(&self, left: &T, right: &T) -> bool {
        match self.comparator {
            Some(comparator) => comparator(left, right),
            None => left == right || (self.ignore_case && left.eq_folded(right)),
        }
    }
}

impl<T> Default for Equality<'_, T> {
    fn default() -> Self {
        Equality {
            comparator: None,
            ignore_case: true,
        }
    }
}

impl<T> Clone for Equality<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Equality<'_, T> {}
