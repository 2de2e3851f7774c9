//! Schema rules and the ordered schema collection.

use indexmap::IndexMap;

use super::cast::{Value, ValueKind};
use crate::dotenv::RawMapping;

/// Validation directive for one variable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaRule {
    /// Fail when the variable is absent from the raw mapping.
    pub required: bool,
    /// Kind the raw string is cast to.
    pub kind: ValueKind,
    /// Used verbatim (not cast) when the variable is absent.
    pub default: Option<Value>,
}

impl SchemaRule {
    /// An optional rule of the given kind with no default.
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Mark the rule as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Required rules that also declare a default. The default can never
    /// satisfy the required check.
    pub fn is_contradictory(&self) -> bool {
        self.required && self.default.is_some()
    }
}

/// Ordered mapping from variable name to [`SchemaRule`].
///
/// The schema is the authoritative key set for validated output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    rules: IndexMap<String, SchemaRule>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn rule(mut self, key: impl Into<String>, rule: SchemaRule) -> Self {
        self.insert(key, rule);
        self
    }

    /// Insert or replace the rule for `key`.
    pub fn insert(&mut self, key: impl Into<String>, rule: SchemaRule) -> Option<SchemaRule> {
        self.rules.insert(key.into(), rule)
    }

    pub fn get(&self, key: &str) -> Option<&SchemaRule> {
        self.rules.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaRule)> {
        self.rules.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Keys whose rule is both required and carries a default.
    pub fn contradictions(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, rule)| rule.is_contradictory())
            .map(|(key, _)| key)
            .collect()
    }

    /// Raw keys the schema does not declare, in file order.
    pub fn undeclared<'a>(&self, raw: &'a RawMapping) -> Vec<&'a str> {
        raw.keys()
            .filter(|key| !self.rules.contains_key(key.as_str()))
            .map(String::as_str)
            .collect()
    }
}

impl FromIterator<(String, SchemaRule)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, SchemaRule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
