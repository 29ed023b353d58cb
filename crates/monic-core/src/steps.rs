//! Derivation steps.
//!
//! Every solver can narrate the arithmetic it performed as an ordered list
//! of plain strings. The steps are a side value for presentation layers,
//! which render them verbatim; they are not part of the mathematical
//! contract, and the plain (un-narrated) entry points simply drop them.

/// A computed value together with the derivation steps that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explained<T> {
    /// The result of the computation.
    pub value: T,
    /// Human-readable derivation lines, in the order they were performed.
    pub steps: Vec<String>,
}

impl<T> Explained<T> {
    /// Wraps a value with its derivation steps.
    #[must_use]
    pub fn new(value: T, steps: Vec<String>) -> Self {
        Self { value, steps }
    }

    /// Wraps a value with no narration.
    #[must_use]
    pub fn silent(value: T) -> Self {
        Self {
            value,
            steps: Vec::new(),
        }
    }

    /// Discards the steps.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Maps the carried value, keeping the steps.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Explained<U> {
        Explained {
            value: f(self.value),
            steps: self.steps,
        }
    }
}
