//! Scalar normalizers and style-value resolvers.
//!
//! Pure functions that turn host-specific values into their canonical
//! token encodings: hex colors, 2-decimal rounding, unit-aware line-height
//! and letter-spacing strings, variant-name property maps, and per-mode
//! variable values.

use serde::{Deserialize, Serialize};

use crate::error::TokenResult;
use crate::node::{LetterSpacing, LineHeight};
use crate::registry::{VariableType, VariableValue};

/// Round to 2 decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert 0..1 RGB channels to a lowercase `#rrggbb` string.
///
/// Each channel is scaled to 0..255 and rounded to the nearest integer,
/// so `(1, 0, 0.5)` encodes as `#ff0080`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    let channel = |v: f64| (v * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// A resolved style value: either a bare number or a unit-suffixed string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarOrText {
    /// A plain numeric value (pixels).
    Number(f64),
    /// A textual value such as `"auto"` or `"120%"`.
    Text(String),
}

impl ScalarOrText {
    /// The `"auto"` sentinel used for unresolved line heights.
    #[must_use]
    pub fn auto() -> Self {
        Self::Text("auto".to_string())
    }
}

/// Resolve a line height to its token encoding.
///
/// Automatic, missing, or mixed values become `"auto"`; pixel values stay
/// numeric; percent values round to 2 decimals and gain a `%` suffix.
#[must_use]
pub fn resolve_line_height(line_height: Option<LineHeight>) -> ScalarOrText {
    match line_height {
        Some(LineHeight::Pixels { value }) => ScalarOrText::Number(value),
        Some(LineHeight::Percent { value }) => ScalarOrText::Text(format!("{}%", round2(value))),
        Some(LineHeight::Auto | LineHeight::Other) | None => ScalarOrText::auto(),
    }
}

/// Resolve a letter spacing to its token encoding.
///
/// Missing or mixed values become `0`; pixel values stay numeric; percent
/// values round to 2 decimals and gain a `%` suffix.
#[must_use]
pub fn resolve_letter_spacing(letter_spacing: Option<LetterSpacing>) -> ScalarOrText {
    match letter_spacing {
        Some(LetterSpacing::Pixels { value }) => ScalarOrText::Number(value),
        Some(LetterSpacing::Percent { value }) => {
            ScalarOrText::Text(format!("{}%", round2(value)))
        }
        Some(LetterSpacing::Other) | None => ScalarOrText::Number(0.0),
    }
}

/// Variant properties as a map that keeps its keys in insertion order, so
/// the serialized object reads in the same order the variant name declares
/// its segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantProperties(Vec<(String, String)>);

impl VariantProperties {
    /// Insert a property, updating in place when the key already exists.
    pub fn insert(&mut self, key: String, value: String) {
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    /// Look up a property value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl Serialize for VariantProperties {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, value)| (key, value)))
    }
}

impl<'de> Deserialize<'de> for VariantProperties {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> serde::de::Visitor<'de> for MapVisitor {
            type Value = VariantProperties;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of variant properties")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<Self::Value, A::Error> {
                let mut properties = VariantProperties::default();
                while let Some((key, value)) = access.next_entry()? {
                    properties.insert(key, value);
                }
                Ok(properties)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

/// Parse a variant node name like `"Size=Large, State=Hover"` into a
/// property map, keys in the order the name declares them.
///
/// The name splits on commas, each segment on `=`; both sides are trimmed.
/// Segments without a well-formed key/value pair are silently dropped, and
/// only the first two `=`-separated fields of a segment count.
#[must_use]
pub fn parse_variant_name(name: &str) -> VariantProperties {
    let mut properties = VariantProperties::default();
    for segment in name.split(',') {
        let mut fields = segment.split('=');
        let (Some(key), Some(value)) = (fields.next(), fields.next()) else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if !key.is_empty() && !value.is_empty() {
            properties.insert(key.to_string(), value.to_string());
        }
    }
    properties
}

/// Resolve a raw per-mode variable value to its token encoding.
///
/// Scalars pass through unchanged; an alias becomes `{"alias": <id>}`
/// without being followed; a color value of a COLOR-typed variable encodes
/// as hex; anything else is carried verbatim.
///
/// # Errors
///
/// Returns [`crate::TokenError::Serialization`] if a pass-through value
/// cannot be represented as JSON.
pub fn resolve_variable_value(
    value: Option<&VariableValue>,
    resolved_type: VariableType,
) -> TokenResult<serde_json::Value> {
    let Some(value) = value else {
        return Ok(serde_json::Value::Null);
    };

    let resolved = match value {
        VariableValue::Boolean(flag) => serde_json::Value::Bool(*flag),
        VariableValue::Number(number) => serde_json::to_value(number)?,
        VariableValue::Text(text) => serde_json::Value::String(text.clone()),
        VariableValue::Alias(alias) => serde_json::json!({ "alias": alias.id }),
        VariableValue::Color(color) if resolved_type == VariableType::Color => {
            serde_json::Value::String(rgb_to_hex(color.r, color.g, color.b))
        }
        VariableValue::Color(color) => serde_json::to_value(color)?,
    };
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Rgba;
    use crate::registry::VariableAlias;

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.336), 0.34);
        assert_eq!(round2(119.994), 119.99);
        assert_eq!(round2(120.0), 120.0);
    }

    #[test]
    fn test_rgb_to_hex_rounds_to_nearest_byte() {
        assert_eq!(rgb_to_hex(1.0, 0.0, 0.5), "#ff0080");
        assert_eq!(rgb_to_hex(0.0, 0.0, 0.0), "#000000");
        assert_eq!(rgb_to_hex(1.0, 1.0, 1.0), "#ffffff");
        // 0.1 * 255 = 25.5 rounds to 26 = 0x1a
        assert_eq!(rgb_to_hex(0.1, 0.1, 0.1), "#1a1a1a");
    }

    #[test]
    fn test_line_height_resolution() {
        assert_eq!(resolve_line_height(None), ScalarOrText::auto());
        assert_eq!(
            resolve_line_height(Some(LineHeight::Auto)),
            ScalarOrText::auto()
        );
        assert_eq!(
            resolve_line_height(Some(LineHeight::Pixels { value: 18.0 })),
            ScalarOrText::Number(18.0)
        );
        assert_eq!(
            resolve_line_height(Some(LineHeight::Percent { value: 120.0 })),
            ScalarOrText::Text("120%".to_string())
        );
        assert_eq!(
            resolve_line_height(Some(LineHeight::Percent { value: 120.456 })),
            ScalarOrText::Text("120.46%".to_string())
        );
    }

    #[test]
    fn test_letter_spacing_resolution() {
        assert_eq!(resolve_letter_spacing(None), ScalarOrText::Number(0.0));
        assert_eq!(
            resolve_letter_spacing(Some(LetterSpacing::Pixels { value: 0.5 })),
            ScalarOrText::Number(0.5)
        );
        assert_eq!(
            resolve_letter_spacing(Some(LetterSpacing::Percent { value: 10.0 })),
            ScalarOrText::Text("10%".to_string())
        );
    }

    #[test]
    fn test_parse_variant_name_well_formed() {
        let properties = parse_variant_name("Size=Large, State=Hover");
        assert_eq!(properties.len(), 2);
        assert_eq!(properties.get("Size"), Some("Large"));
        assert_eq!(properties.get("State"), Some("Hover"));
    }

    #[test]
    fn test_parse_variant_name_malformed_segments_drop() {
        assert!(parse_variant_name("Malformed").is_empty());
        assert!(parse_variant_name("").is_empty());
        assert!(parse_variant_name("=value, key=").is_empty());

        // Extra '=' fields beyond the first two are discarded.
        let properties = parse_variant_name("a=b=c, State=Focused");
        assert_eq!(properties.get("a"), Some("b"));
        assert_eq!(properties.get("State"), Some("Focused"));
    }

    #[test]
    fn test_variant_properties_serialize_in_authored_order() {
        let properties = parse_variant_name("State=Hover, Size=Large");
        let json = serde_json::to_string(&properties).expect("serialize");
        assert_eq!(json, r#"{"State":"Hover","Size":"Large"}"#);

        let back: VariantProperties = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, properties);
    }

    #[test]
    fn test_variant_properties_duplicate_key_keeps_position() {
        let properties = parse_variant_name("State=Hover, Size=Large, State=Default");
        assert_eq!(properties.len(), 2);
        assert_eq!(properties.get("State"), Some("Default"));
        let keys: Vec<&str> = properties.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["State", "Size"]);
    }

    #[test]
    fn test_variable_value_alias_is_not_followed() {
        let alias = VariableValue::Alias(VariableAlias {
            kind: "VARIABLE_ALIAS".to_string(),
            id: "VariableID:7:3".to_string(),
        });
        let resolved =
            resolve_variable_value(Some(&alias), VariableType::Color).expect("resolves");
        assert_eq!(resolved, serde_json::json!({ "alias": "VariableID:7:3" }));
    }

    #[test]
    fn test_variable_value_color_encodes_as_hex() {
        let color = VariableValue::Color(Rgba {
            r: 1.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        });
        let resolved =
            resolve_variable_value(Some(&color), VariableType::Color).expect("resolves");
        assert_eq!(resolved, serde_json::json!("#ff0000"));

        // A color value on a non-color variable passes through verbatim.
        let passthrough =
            resolve_variable_value(Some(&color), VariableType::Float).expect("resolves");
        assert!(passthrough.is_object());
    }

    #[test]
    fn test_variable_value_scalars_pass_through() {
        assert_eq!(
            resolve_variable_value(Some(&VariableValue::Number(16.0)), VariableType::Float)
                .expect("resolves"),
            serde_json::json!(16.0)
        );
        assert_eq!(
            resolve_variable_value(Some(&VariableValue::Boolean(true)), VariableType::Boolean)
                .expect("resolves"),
            serde_json::json!(true)
        );
        assert_eq!(
            resolve_variable_value(None, VariableType::String).expect("resolves"),
            serde_json::Value::Null
        );
    }
}
