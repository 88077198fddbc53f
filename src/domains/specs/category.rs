//! Spec categories.
//!
//! The category is part of a spec's identity and is encoded in its file name,
//! so the set is closed and none of the names contain an underscore.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a development spec belongs to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Frontend,
    Backend,
    Mobile,
    Design,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Frontend,
        Category::Backend,
        Category::Mobile,
        Category::Design,
    ];

    /// The lowercase name used on the wire and in file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Mobile => "mobile",
            Category::Design => "design",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_frontend() {
        assert_eq!(Category::default(), Category::Frontend);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("backend".parse::<Category>(), Ok(Category::Backend));
        assert_eq!("design".parse::<Category>(), Ok(Category::Design));
        assert!("Backend".parse::<Category>().is_err());
        assert!("ops".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_value(Category::Mobile).unwrap();
        assert_eq!(json, serde_json::json!("mobile"));

        let parsed: Category = serde_json::from_value(serde_json::json!("design")).unwrap();
        assert_eq!(parsed, Category::Design);

        assert!(serde_json::from_value::<Category>(serde_json::json!("ops")).is_err());
    }

    #[test]
    fn test_names_have_no_underscore() {
        for category in Category::ALL {
            assert!(!category.as_str().contains('_'));
        }
    }
}
