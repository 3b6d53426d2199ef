//! Symbol Color Type - named accent colors attached to an entity
//!
//! Canonical form of the legacy `symbolColors` records. The tolerant loader
//! lives in [`crate::normalize::colors`].

use serde::{Deserialize, Serialize};

/// A named accent color owned by an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolColor {
    /// Identifier, unique within the owning entity
    pub id: String,
    /// Display name, empty when unnamed
    pub name: String,
    /// 6-hex-digit color string, always upper-cased
    pub hex: String,
}

impl SymbolColor {
    /// Fallback hex value used whenever a record carries none
    pub const DEFAULT_HEX: &'static str = "#444444";
}

impl Default for SymbolColor {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            hex: Self::DEFAULT_HEX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color() {
        let color = SymbolColor::default();
        assert!(color.id.is_empty());
        assert!(color.name.is_empty());
        assert_eq!(color.hex, "#444444");
    }
}
