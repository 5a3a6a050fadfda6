//! Evaluated argument snapshots.
//!
//! An invocation `{{my-comp a b title=t}}` evaluates to positional
//! references `[a, b]` and named references `{title: t}`. Each half carries
//! a combined tag so "did any argument change" is a single comparison.

use std::collections::BTreeMap;

use crate::reference::{Tag, ValueRef};
use crate::types::Value;

// =============================================================================
// Positional
// =============================================================================

/// Ordered positional argument references.
#[derive(Clone, Debug, Default)]
pub struct PositionalArgs {
    values: Vec<ValueRef>,
    tag: Tag,
}

impl PositionalArgs {
    pub fn new(values: Vec<ValueRef>) -> Self {
        let tag = Tag::combine(values.iter().map(ValueRef::tag));
        Self { values, tag }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[ValueRef] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&ValueRef> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn tag(&self) -> Tag {
        self.tag.clone()
    }

    /// Read every reference.
    pub fn value(&self) -> Vec<Value> {
        self.values.iter().map(ValueRef::value).collect()
    }
}

// =============================================================================
// Named
// =============================================================================

/// Named argument references, keyed by argument name.
#[derive(Clone, Debug, Default)]
pub struct NamedArgs {
    map: BTreeMap<String, ValueRef>,
    tag: Tag,
}

impl NamedArgs {
    pub fn new(map: BTreeMap<String, ValueRef>) -> Self {
        let tag = Tag::combine(map.values().map(ValueRef::tag));
        Self { map, tag }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ValueRef> {
        self.map.get(name)
    }

    pub fn map(&self) -> &BTreeMap<String, ValueRef> {
        &self.map
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn tag(&self) -> Tag {
        self.tag.clone()
    }

    /// Read every reference.
    pub fn value(&self) -> BTreeMap<String, Value> {
        self.map
            .iter()
            .map(|(name, r)| (name.clone(), r.value()))
            .collect()
    }
}

// =============================================================================
// EvaluatedArgs
// =============================================================================

/// Positional and named arguments of one invocation.
#[derive(Clone, Debug, Default)]
pub struct EvaluatedArgs {
    positional: PositionalArgs,
    named: NamedArgs,
    tag: Tag,
}

impl EvaluatedArgs {
    pub fn new(positional: PositionalArgs, named: NamedArgs) -> Self {
        let tag = Tag::combine([positional.tag(), named.tag()]);
        Self {
            positional,
            named,
            tag,
        }
    }

    /// Build from raw parts.
    ///
    /// ```ignore
    /// let args = EvaluatedArgs::from_parts(
    ///     vec![ValueRef::constant("a")],
    ///     [("title", ValueRef::cell("Hi"))],
    /// );
    /// ```
    pub fn from_parts<K: Into<String>>(
        positional: Vec<ValueRef>,
        named: impl IntoIterator<Item = (K, ValueRef)>,
    ) -> Self {
        let named = named.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self::new(PositionalArgs::new(positional), NamedArgs::new(named))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn positional(&self) -> &PositionalArgs {
        &self.positional
    }

    pub fn named(&self) -> &NamedArgs {
        &self.named
    }

    /// Combined tag of every argument.
    pub fn tag(&self) -> Tag {
        self.tag.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::CellRef;

    #[test]
    fn test_args_tag_covers_both_halves() {
        let pos = CellRef::new(1);
        let named = CellRef::new("x");
        let args = EvaluatedArgs::from_parts(
            vec![ValueRef::from(pos.clone())],
            [("title", ValueRef::from(named.clone()))],
        );

        let snapshot = args.tag().value();
        pos.set(2);
        assert!(!args.tag().validate(snapshot));

        let snapshot = args.tag().value();
        named.set("y");
        assert!(!args.tag().validate(snapshot));
    }

    #[test]
    fn test_constant_args_have_constant_tag() {
        let args = EvaluatedArgs::from_parts(
            vec![ValueRef::constant(1)],
            [("a", ValueRef::constant(true))],
        );
        assert!(args.tag().is_constant());
        assert_eq!(args.positional().value(), vec![Value::Int(1)]);
        assert_eq!(args.named().value().get("a"), Some(&Value::Bool(true)));
    }
}
