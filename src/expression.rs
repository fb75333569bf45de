// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Attribute expression evaluation.
//!
//! Property values may reference attributes of the unit being processed with
//! `${name}` placeholders. References to attributes the unit does not carry
//! resolve to the empty string, `$$` escapes a literal `$`, and an
//! unterminated `${` is kept verbatim. There is no nesting and no function
//! syntax; this is deliberately the attribute-reference subset.

use std::collections::HashMap;

/// Evaluate a property expression against a unit's attribute map.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use flowunit::expression::evaluate;
///
/// let attributes = HashMap::from([("host".to_string(), "ingest-1".to_string())]);
/// assert_eq!(evaluate("target_${host}", &attributes), "target_ingest-1");
/// assert_eq!(evaluate("${absent}", &attributes), "");
/// assert_eq!(evaluate("$${host}", &attributes), "${host}");
/// ```
pub fn evaluate(expression: &str, attributes: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(expression.len());
    let mut chars = expression.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('$') => {
                chars.next();
                out.push('$');
            }
            Some('{') => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for n in chars.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    name.push(n);
                }
                if closed {
                    if let Some(value) = attributes.get(&name) {
                        out.push_str(value);
                    }
                } else {
                    out.push_str("${");
                    out.push_str(&name);
                }
            }
            _ => out.push('$'),
        }
    }

    out
}
