// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Heterogeneously-typed event properties and their coercion to text.

use std::collections::BTreeMap;

use serde_json::Value;

/// A single property value, tagged with its declared kind.
///
/// The variant chosen at the call site is authoritative: coercion is
/// directed by the variant alone, never by inspecting the contained
/// number. `Other(4.0)` and `Real(4.0)` are different values.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	/// Plain text, kept unchanged by coercion.
	Text(String),
	/// A whole number, rendered in canonical base-10.
	Integer(i64),
	/// A floating-point number, rendered with the default `f64` formatting.
	Real(f64),
	/// Any other describable value: booleans, arrays, objects, null.
	Other(Value),
}

impl PropertyValue {
	/// Renders this value as text. Total: every kind yields some text.
	///
	/// The first matching rule wins:
	/// 1. `Text` passes through unchanged.
	/// 2. `Integer` renders as canonical base-10 (no grouping, no leading
	///    zeros, sign prefix only when negative).
	/// 3. `Real` renders with `f64`'s default formatting.
	/// 4. `Other` is encoded as compact JSON. The encoding is
	///    deterministic for a given value and part of the wire contract:
	///    `true`, `null`, `[1,2]`, `{"a":1}`.
	#[must_use]
	pub fn coerce(&self) -> String {
		match self {
			PropertyValue::Text(s) => s.clone(),
			PropertyValue::Integer(i) => i.to_string(),
			PropertyValue::Real(r) => r.to_string(),
			PropertyValue::Other(v) => serde_json::to_string(v).unwrap_or_default(),
		}
	}
}

impl From<&str> for PropertyValue {
	fn from(value: &str) -> Self {
		PropertyValue::Text(value.to_string())
	}
}

impl From<String> for PropertyValue {
	fn from(value: String) -> Self {
		PropertyValue::Text(value)
	}
}

impl From<i64> for PropertyValue {
	fn from(value: i64) -> Self {
		PropertyValue::Integer(value)
	}
}

impl From<i32> for PropertyValue {
	fn from(value: i32) -> Self {
		PropertyValue::Integer(i64::from(value))
	}
}

impl From<f64> for PropertyValue {
	fn from(value: f64) -> Self {
		PropertyValue::Real(value)
	}
}

impl From<bool> for PropertyValue {
	fn from(value: bool) -> Self {
		PropertyValue::Other(Value::Bool(value))
	}
}

impl From<Value> for PropertyValue {
	fn from(value: Value) -> Self {
		PropertyValue::Other(value)
	}
}

/// A builder for raw event properties.
///
/// # Example
///
/// ```
/// use shvil_analytics_core::Properties;
///
/// let props = Properties::new()
/// 	.insert("label", "ok")
/// 	.insert("count", 3)
/// 	.insert("accuracy", 4.0);
/// assert_eq!(props.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
	inner: BTreeMap<String, PropertyValue>,
}

impl Properties {
	/// Creates a new empty property map.
	pub fn new() -> Self {
		Self {
			inner: BTreeMap::new(),
		}
	}

	/// Inserts a key-value pair (builder pattern).
	///
	/// The value can be anything that converts into a [`PropertyValue`]:
	/// text, integers, reals, booleans, or arbitrary JSON values.
	#[must_use]
	pub fn insert<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: Into<PropertyValue>,
	{
		self.inner.insert(key.into(), value.into());
		self
	}

	/// Merges another property map into this one.
	///
	/// If both contain the same key, the value from `other` wins.
	#[must_use]
	pub fn merge(mut self, other: Properties) -> Self {
		for (k, v) in other.inner {
			self.inner.insert(k, v);
		}
		self
	}

	/// Gets a value by key.
	pub fn get(&self, key: &str) -> Option<&PropertyValue> {
		self.inner.get(key)
	}

	/// Returns the number of properties.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns true if the map is empty.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Iterates over the entries in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
		self.inner.iter()
	}

	/// Coerces every value to text, preserving the key set exactly.
	///
	/// No key is ever added or dropped; each value goes through
	/// [`PropertyValue::coerce`] independently.
	#[must_use]
	pub fn coerce(&self) -> BTreeMap<String, String> {
		self
			.inner
			.iter()
			.map(|(k, v)| (k.clone(), v.coerce()))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	#[test]
	fn test_text_passes_through_unchanged() {
		assert_eq!(PropertyValue::Text("ok".to_string()).coerce(), "ok");
		assert_eq!(PropertyValue::Text(String::new()).coerce(), "");
	}

	#[test]
	fn test_integer_renders_canonical_decimal() {
		assert_eq!(PropertyValue::Integer(0).coerce(), "0");
		assert_eq!(PropertyValue::Integer(-7).coerce(), "-7");
		assert_eq!(PropertyValue::Integer(1_000_000).coerce(), "1000000");
	}

	#[test]
	fn test_real_uses_default_float_formatting() {
		assert_eq!(PropertyValue::Real(99.99).coerce(), "99.99");
		assert_eq!(PropertyValue::Real(-0.5).coerce(), "-0.5");
	}

	#[test]
	fn test_integer_valued_real_follows_real_rule() {
		// Declared kind decides, not the numeric value: Real(4.0) goes
		// through the float formatter, Integer(4) through the decimal one.
		assert_eq!(PropertyValue::Real(4.0).coerce(), "4");
		assert_eq!(PropertyValue::Integer(4).coerce(), "4");
		assert_eq!(
			PropertyValue::Other(json!(4.0)).coerce(),
			serde_json::to_string(&json!(4.0)).unwrap()
		);
	}

	#[test]
	fn test_other_kinds_render_as_compact_json() {
		assert_eq!(PropertyValue::from(true).coerce(), "true");
		assert_eq!(PropertyValue::from(false).coerce(), "false");
		assert_eq!(PropertyValue::Other(Value::Null).coerce(), "null");
		assert_eq!(PropertyValue::Other(json!([1, 2, 3])).coerce(), "[1,2,3]");
		assert_eq!(
			PropertyValue::Other(json!({"nested": {"key": 1}})).coerce(),
			r#"{"nested":{"key":1}}"#
		);
	}

	#[test]
	fn test_json_string_stays_in_fallback_rule() {
		// A JSON string passed as Other keeps its quotes: the value was
		// not declared Text, so rule 1 does not apply.
		assert_eq!(PropertyValue::Other(json!("hi")).coerce(), "\"hi\"");
	}

	#[test]
	fn test_insert_and_get() {
		let props = Properties::new().insert("label", "ok").insert("count", 3);
		assert_eq!(
			props.get("label"),
			Some(&PropertyValue::Text("ok".to_string()))
		);
		assert_eq!(props.get("count"), Some(&PropertyValue::Integer(3)));
		assert!(props.get("missing").is_none());
	}

	#[test]
	fn test_merge_other_wins() {
		let a = Properties::new().insert("a", 1).insert("b", 2);
		let b = Properties::new().insert("b", 20).insert("c", 3);
		let merged = a.merge(b);

		assert_eq!(merged.len(), 3);
		assert_eq!(merged.get("b"), Some(&PropertyValue::Integer(20)));
	}

	#[test]
	fn test_coerce_preserves_key_set() {
		let props = Properties::new()
			.insert("text", "x")
			.insert("int", -7)
			.insert("real", 2.5)
			.insert("flag", true)
			.insert("list", json!([1, "two"]));

		let coerced = props.coerce();
		assert_eq!(coerced.len(), 5);
		assert_eq!(coerced["text"], "x");
		assert_eq!(coerced["int"], "-7");
		assert_eq!(coerced["real"], "2.5");
		assert_eq!(coerced["flag"], "true");
		assert_eq!(coerced["list"], r#"[1,"two"]"#);
	}

	proptest! {
		#[test]
		fn integer_coercion_parses_back(i in any::<i64>()) {
			let coerced = PropertyValue::Integer(i).coerce();
			prop_assert_eq!(coerced.parse::<i64>().unwrap(), i);
		}

		#[test]
		fn text_coercion_is_identity(s in "\\PC*") {
			let coerced = PropertyValue::Text(s.clone()).coerce();
			prop_assert_eq!(coerced, s);
		}

		#[test]
		fn fallback_is_deterministic(entries in prop::collection::vec(("[a-z]{1,8}", any::<i64>()), 0..8)) {
			let map: serde_json::Map<String, Value> = entries
				.iter()
				.map(|(k, v)| (k.clone(), Value::from(*v)))
				.collect();
			let value = Value::Object(map);
			let first = PropertyValue::Other(value.clone()).coerce();
			let second = PropertyValue::Other(value).coerce();
			prop_assert_eq!(first, second);
		}

		#[test]
		fn coerce_keys_match_exactly(keys in prop::collection::vec("[a-z_]{1,12}", 0..16)) {
			let mut props = Properties::new();
			for (i, key) in keys.iter().enumerate() {
				props = props.insert(key.clone(), i as i64);
			}
			let coerced = props.coerce();
			let expected: std::collections::BTreeSet<_> = keys.iter().cloned().collect();
			let actual: std::collections::BTreeSet<_> = coerced.keys().cloned().collect();
			prop_assert_eq!(actual, expected);
		}
	}
}
