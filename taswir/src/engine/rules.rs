//! Ordered keyword rule tables.
//!
//! A [`RuleTable`] is a compile-time list of `(predicate, payload)` pairs
//! plus a fallback rule. Predicates test case-insensitive substring
//! containment against the lowercased input; the first rule whose
//! predicate holds wins.

/// A containment predicate over lowercased text.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// True if any keyword occurs.
    AnyOf(&'static [&'static str]),
    /// True if every keyword occurs.
    AllOf(&'static [&'static str]),
    /// True if any nested predicate holds.
    Any(&'static [Predicate]),
    /// True if every nested predicate holds.
    All(&'static [Predicate]),
}

impl Predicate {
    /// Evaluates the predicate against text that is already lowercased.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Self::AnyOf(keywords) => keywords.iter().any(|k| lowered.contains(k)),
            Self::AllOf(keywords) => keywords.iter().all(|k| lowered.contains(k)),
            Self::Any(preds) => preds.iter().any(|p| p.matches(lowered)),
            Self::All(preds) => preds.iter().all(|p| p.matches(lowered)),
        }
    }
}

/// One named rule.
#[derive(Debug)]
pub struct ResolutionRule<T: 'static> {
    /// Bucket name.
    pub name: &'static str,
    /// When the rule applies.
    pub predicate: Predicate,
    /// The canned payload.
    pub payload: T,
}

/// An ordered rule table with a fallback.
#[derive(Debug)]
pub struct RuleTable<T: 'static> {
    rules: &'static [ResolutionRule<T>],
    fallback: &'static ResolutionRule<T>,
}

impl<T> RuleTable<T> {
    /// Creates a table. `fallback` is used when no rule matches.
    #[must_use]
    pub const fn new(
        rules: &'static [ResolutionRule<T>],
        fallback: &'static ResolutionRule<T>,
    ) -> Self {
        Self { rules, fallback }
    }

    /// Returns the first rule matching `input`, or the fallback.
    #[must_use]
    pub fn resolve(&self, input: &str) -> &'static ResolutionRule<T> {
        let lowered = input.to_lowercase();
        self.resolve_lowered(&lowered)
    }

    /// Like [`resolve`](Self::resolve) for text that is already lowercased.
    #[must_use]
    pub fn resolve_lowered(&self, lowered: &str) -> &'static ResolutionRule<T> {
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(lowered))
            .unwrap_or(self.fallback)
    }

    /// The rules in evaluation order, without the fallback.
    #[must_use]
    pub fn rules(&self) -> &'static [ResolutionRule<T>] {
        self.rules
    }

    /// The fallback rule.
    #[must_use]
    pub fn fallback(&self) -> &'static ResolutionRule<T> {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static RULES: [ResolutionRule<u8>; 2] = [
        ResolutionRule {
            name: "both",
            predicate: Predicate::AllOf(&["red", "blue"]),
            payload: 1,
        },
        ResolutionRule {
            name: "warm",
            predicate: Predicate::AnyOf(&["red", "orange"]),
            payload: 2,
        },
    ];
    static FALLBACK: ResolutionRule<u8> = ResolutionRule {
        name: "none",
        predicate: Predicate::AnyOf(&[]),
        payload: 0,
    };
    static TABLE: RuleTable<u8> = RuleTable::new(&RULES, &FALLBACK);

    #[test]
    fn test_first_match_wins() {
        assert_eq!(TABLE.resolve("Red and BLUE").name, "both");
        assert_eq!(TABLE.resolve("just red").name, "warm");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(TABLE.resolve("green").payload, 0);
        assert_eq!(TABLE.resolve("").name, "none");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(TABLE.resolve("ORANGE").name, "warm");
    }

    #[test]
    fn test_nested_predicates() {
        const PRED: Predicate = Predicate::Any(&[
            Predicate::AllOf(&["good", "bad"]),
            Predicate::All(&[Predicate::AnyOf(&["a"]), Predicate::AnyOf(&["z"])]),
        ]);
        assert!(PRED.matches("good and bad"));
        assert!(PRED.matches("az"));
        assert!(!PRED.matches("good"));
    }

    #[test]
    fn test_empty_any_of_never_matches() {
        assert!(!Predicate::AnyOf(&[]).matches("anything"));
        assert!(Predicate::AllOf(&[]).matches("anything"));
    }
}
