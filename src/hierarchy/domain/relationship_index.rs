use super::InheritancePair;
use std::collections::{BTreeMap, BTreeSet};

/// Parent/child lookup tables derived from a flat list of inheritance pairs.
///
/// Both directions are deduplicated: feeding the same pair twice yields the
/// same index as feeding it once. The index is rebuilt from scratch on every
/// run, never updated incrementally.
#[derive(Debug, Clone, Default)]
pub struct RelationshipIndex {
    children_of: BTreeMap<String, BTreeSet<String>>,
    parents_of: BTreeMap<String, BTreeSet<String>>,
}

impl RelationshipIndex {
    /// Builds the index in a single pass over `pairs`.
    pub fn build<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = &'a InheritancePair>,
    {
        let mut index = Self::default();
        for pair in pairs {
            index
                .children_of
                .entry(pair.parent.clone())
                .or_default()
                .insert(pair.child.clone());
            index
                .parents_of
                .entry(pair.child.clone())
                .or_default()
                .insert(pair.parent.clone());
        }
        index
    }

    /// Direct children of `parent`, in sorted order.
    pub fn children_of(&self, parent: &str) -> impl Iterator<Item = &str> {
        self.children_of
            .get(parent)
            .into_iter()
            .flat_map(|children| children.iter().map(String::as_str))
    }

    /// Direct parents of `child`, in sorted order.
    pub fn parents_of(&self, child: &str) -> impl Iterator<Item = &str> {
        self.parents_of
            .get(child)
            .into_iter()
            .flat_map(|parents| parents.iter().map(String::as_str))
    }

    /// True when `name` appears on either side of at least one pair.
    pub fn contains(&self, name: &str) -> bool {
        self.children_of.contains_key(name) || self.parents_of.contains_key(name)
    }
}
