//! Domain models for the remote collections.
//!
//! These are the records the backend hands out: identity (`id`) is
//! server-assigned and immutable, the remaining fields are user-editable.

use crate::mirror::Named;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ingredient as stored on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Server-assigned identifier, unique within a collection snapshot
    pub id: i64,
    /// User-facing display name
    pub name: String,
}

impl Named for Ingredient {
    fn record_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A recipe as stored on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Server-assigned identifier, unique within a collection snapshot
    pub id: i64,
    /// User-facing display name
    pub name: String,
    /// Free-form preparation text
    pub instructions: String,
    /// Username of the account that created the recipe (server-assigned)
    pub author: String,
}

impl Named for Recipe {
    fn record_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.instructions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_rows() {
        let ingredient = Ingredient {
            id: 1,
            name: "Salt".to_string(),
        };
        assert_eq!(ingredient.to_string(), "Salt");

        let recipe = Recipe {
            id: 7,
            name: "Toast".to_string(),
            instructions: "Toast the bread".to_string(),
            author: "alice".to_string(),
        };
        assert_eq!(recipe.to_string(), "Toast: Toast the bread");
    }
}
