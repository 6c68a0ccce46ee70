//! Value types produced by the decoder
//!
//! `Rule` and `Limit` are immutable once built; fields are exposed through
//! accessors only.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Limit Type
// ============================================================================

/// Unit in which a playlist limit is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum LimitType {
    #[default]
    #[serde(rename = "songs")]
    Songs = 1,
    #[serde(rename = "GB")]
    GigaBytes = 2,
    #[serde(rename = "MB")]
    MegaBytes = 3,
    #[serde(rename = "minutes")]
    Minutes = 4,
}

impl LimitType {
    /// Map a unit string to a limit type.
    ///
    /// Matching is exact and case-sensitive; anything unknown is `Songs`.
    pub fn from_unit(unit: &str) -> Self {
        match unit {
            "GB" => LimitType::GigaBytes,
            "MB" => LimitType::MegaBytes,
            "minutes" => LimitType::Minutes,
            _ => LimitType::Songs,
        }
    }

    /// Unit string for this limit type
    pub fn as_unit(self) -> &'static str {
        match self {
            LimitType::Songs => "songs",
            LimitType::GigaBytes => "GB",
            LimitType::MegaBytes => "MB",
            LimitType::Minutes => "minutes",
        }
    }
}

impl fmt::Display for LimitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_unit())
    }
}

// ============================================================================
// Limit
// ============================================================================

/// Cap on the size of a playlist's result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    #[serde(rename = "type")]
    limit_type: LimitType,
    display_name: String,
    value: i32,
}

impl Limit {
    /// Create a limit whose display name is derived from its type
    pub fn new(limit_type: LimitType, value: i32) -> Self {
        Self {
            limit_type,
            display_name: limit_type.as_unit().to_string(),
            value,
        }
    }

    /// Create a zero-valued limit with an explicit display name
    pub fn with_display_name(limit_type: LimitType, display_name: impl Into<String>) -> Self {
        Self {
            limit_type,
            display_name: display_name.into(),
            value: 0,
        }
    }

    pub fn limit_type(&self) -> LimitType {
        self.limit_type
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::new(LimitType::Songs, 0)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

// ============================================================================
// Rule
// ============================================================================

/// One filter condition of a smart playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    field: String,
    operator: String,
    value: String,
}

impl Rule {
    /// Create a new rule
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("songs", LimitType::Songs)]
    #[test_case("GB", LimitType::GigaBytes)]
    #[test_case("MB", LimitType::MegaBytes)]
    #[test_case("minutes", LimitType::Minutes)]
    #[test_case("gb", LimitType::Songs; "lowercase gb is unknown")]
    #[test_case("Minutes", LimitType::Songs; "capitalized minutes is unknown")]
    #[test_case("", LimitType::Songs; "empty")]
    #[test_case("3", LimitType::Songs; "numeric")]
    fn test_limit_type_from_unit(unit: &str, expected: LimitType) {
        assert_eq!(LimitType::from_unit(unit), expected);
    }

    #[test]
    fn test_limit_type_unit_roundtrip() {
        for t in [
            LimitType::Songs,
            LimitType::GigaBytes,
            LimitType::MegaBytes,
            LimitType::Minutes,
        ] {
            assert_eq!(LimitType::from_unit(t.as_unit()), t);
        }
    }

    #[test]
    fn test_limit_type_discriminants() {
        assert_eq!(LimitType::Songs as u8, 1);
        assert_eq!(LimitType::Minutes as u8, 4);
        assert_eq!(LimitType::default(), LimitType::Songs);
    }

    #[test]
    fn test_limit_default() {
        let limit = Limit::default();
        assert_eq!(limit.limit_type(), LimitType::Songs);
        assert_eq!(limit.display_name(), "songs");
        assert_eq!(limit.value(), 0);
    }

    #[test]
    fn test_limit_derives_display_name() {
        let limit = Limit::new(LimitType::GigaBytes, 2);
        assert_eq!(limit.display_name(), "GB");
        assert_eq!(limit.to_string(), "GB");
        assert_eq!(limit.value(), 2);
    }

    #[test]
    fn test_limit_with_display_name() {
        let limit = Limit::with_display_name(LimitType::Minutes, "min");
        assert_eq!(limit.limit_type(), LimitType::Minutes);
        assert_eq!(limit.to_string(), "min");
        assert_eq!(limit.value(), 0);
    }

    #[test]
    fn test_limit_serializes_unit_string() {
        let json = serde_json::to_value(Limit::new(LimitType::MegaBytes, 700)).unwrap();
        assert_eq!(json["type"], "MB");
        assert_eq!(json["display_name"], "MB");
        assert_eq!(json["value"], 700);
    }

    #[test]
    fn test_rule_accessors() {
        let rule = Rule::new("artist", "is", "Muse");
        assert_eq!(rule.field(), "artist");
        assert_eq!(rule.operator(), "is");
        assert_eq!(rule.value(), "Muse");
    }
}
