// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::expression;
use crate::flowfile::FlowUnit;

/// Configuration visible to a processor during one invocation.
///
/// Property values are stored as written in the flow configuration; values
/// containing `${attribute}` references are resolved against the unit being
/// processed via [`ProcessContext::evaluated_property`].
#[derive(Debug, Clone, Default)]
pub struct ProcessContext {
    properties: HashMap<String, String>,
}

impl ProcessContext {
    pub fn new(properties: HashMap<String, String>) -> Self {
        Self { properties }
    }

    /// Raw property value as configured, unevaluated.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Property value with attribute expressions resolved against `unit`.
    pub fn evaluated_property(&self, name: &str, unit: &FlowUnit) -> Option<String> {
        self.property(name)
            .map(|value| expression::evaluate(value, unit.attributes()))
    }

    /// Boolean property; anything other than the literal `"true"` (ignoring
    /// surrounding whitespace and case) is `default`-or-false.
    pub fn boolean_property(&self, name: &str, default: bool) -> bool {
        match self.property(name) {
            Some(value) => value.trim().eq_ignore_ascii_case("true"),
            None => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(pairs: &[(&str, &str)]) -> ProcessContext {
        ProcessContext::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn property_returns_raw_value() {
        let ctx = context(&[("source_attribute", "${which}")]);
        assert_eq!(ctx.property("source_attribute"), Some("${which}"));
        assert_eq!(ctx.property("missing"), None);
    }

    #[test]
    fn evaluated_property_resolves_against_unit() {
        let ctx = context(&[("source_attribute", "${which}")]);
        let unit = FlowUnit::new(
            b"content".to_vec(),
            HashMap::from([("which".to_string(), "list_of_things".to_string())]),
        );

        assert_eq!(
            ctx.evaluated_property("source_attribute", &unit),
            Some("list_of_things".to_string())
        );
        assert_eq!(ctx.evaluated_property("missing", &unit), None);
    }

    #[test]
    fn boolean_property_parses_true_only() {
        let ctx = context(&[("a", "true"), ("b", "TRUE "), ("c", "yes")]);
        assert!(ctx.boolean_property("a", false));
        assert!(ctx.boolean_property("b", false));
        assert!(!ctx.boolean_property("c", true));
        assert!(ctx.boolean_property("absent", true));
        assert!(!ctx.boolean_property("absent", false));
    }
}
