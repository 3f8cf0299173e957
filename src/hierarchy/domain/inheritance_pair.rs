use serde::Serialize;
use std::fmt;

/// A single "child derives from parent" relationship found in a header.
///
/// One declaration with N base classes yields N pairs that share the same
/// child; pairs are not deduplicated when produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InheritancePair {
    pub child: String,
    pub parent: String,
}

impl InheritancePair {
    pub fn new(child: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            child: child.into(),
            parent: parent.into(),
        }
    }
}

impl fmt::Display for InheritancePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.child, self.parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_child_and_parent_apart() {
        let pair = InheritancePair::new("Dog", "Animal");
        assert_eq!(pair.child, "Dog");
        assert_eq!(pair.parent, "Animal");
    }

    #[test]
    fn test_display() {
        let pair = InheritancePair::new("Dog", "Animal");
        assert_eq!(pair.to_string(), "Dog : Animal");
    }
}
