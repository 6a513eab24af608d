//! Ordered first-match lookup tables with a mandatory fallback.
//!
//! Upstream enum-ish strings (cursor types, notification kinds, media types,
//! community roles) are mapped through these tables rather than `match`
//! expressions so the mapping order is data and can be inspected in tests.

/// How a table key is compared against the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Input equals the string
    Exact(&'static str),
    /// Input starts with the string
    Prefix(&'static str),
    /// Input ends with the string
    Suffix(&'static str),
}

impl Pattern {
    /// Whether `input` satisfies this pattern.
    pub fn matches(&self, input: &str) -> bool {
        match self {
            Pattern::Exact(s) => input == *s,
            Pattern::Prefix(s) => input.starts_with(s),
            Pattern::Suffix(s) => input.ends_with(s),
        }
    }
}

/// A static list of `(pattern, value)` rules plus a default.
///
/// [`resolve`](Self::resolve) returns the value of the first matching rule,
/// or the default when nothing matches or the input is absent.
#[derive(Debug)]
pub struct Lookup<T: 'static> {
    rules: &'static [(Pattern, T)],
    default: T,
}

impl<T: Copy + 'static> Lookup<T> {
    /// Build a table.
    pub const fn new(rules: &'static [(Pattern, T)], default: T) -> Self {
        Self { rules, default }
    }

    /// First-match-wins resolution.
    pub fn resolve(&self, input: Option<&str>) -> T {
        input
            .and_then(|input| self.rules.iter().find(|(p, _)| p.matches(input)))
            .map(|(_, value)| *value)
            .unwrap_or(self.default)
    }

    /// The value used when no rule matches.
    pub fn default_value(&self) -> T {
        self.default
    }

    /// The rules, in resolution order.
    pub fn rules(&self) -> &'static [(Pattern, T)] {
        self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Shape {
        Round,
        Pointy,
        Other,
    }

    const SHAPES: Lookup<Shape> = Lookup::new(
        &[
            (Pattern::Exact("circle"), Shape::Round),
            (Pattern::Prefix("tri"), Shape::Pointy),
            (Pattern::Suffix("le"), Shape::Round),
        ],
        Shape::Other,
    );

    #[test]
    fn first_match_wins() {
        // "triangle" matches both the prefix and the suffix rule
        assert_eq!(SHAPES.resolve(Some("triangle")), Shape::Pointy);
        assert_eq!(SHAPES.resolve(Some("circle")), Shape::Round);
        assert_eq!(SHAPES.resolve(Some("ellipsoidle")), Shape::Round);
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(SHAPES.resolve(Some("square")), Shape::Other);
        assert_eq!(SHAPES.resolve(None), Shape::Other);
        assert_eq!(SHAPES.default_value(), Shape::Other);
    }
}
