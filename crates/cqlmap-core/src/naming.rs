// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column and table naming.
//!
//! A [`NamingStrategy`] turns a source identifier into the name used in the
//! database schema. An explicit column name always short-circuits the
//! strategy and is used verbatim.
//!
//! | Strategy | `firstName` | `name1` | `first_name` | `userID` |
//! |----------|-------------|---------|--------------|----------|
//! | `SnakeCase` | `first_name` | `name_1` | `first_name` | `user_i_d` |
//! | `LowerCase` | `firstname` | `name1` | `first_name` | `userid` |
//! | `CaseSensitive` | `"firstName"` | `name1` | `first_name` | `"userID"` |

use convert_case::{Boundary, Case, Converter};
use serde::{Deserialize, Serialize};

/// Policy converting a source identifier into a schema name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamingStrategy {
    /// `firstName` becomes `first_name`.
    SnakeCase,

    /// `firstName` becomes `firstname`.
    #[default]
    LowerCase,

    /// `firstName` becomes `"firstName"` so the case survives the database's
    /// case-insensitive identifier normalization.
    CaseSensitive
}

impl NamingStrategy {
    /// Apply the strategy to a raw identifier.
    #[must_use]
    pub fn apply(&self, raw: &str) -> String {
        match self {
            Self::SnakeCase => to_snake_case(raw),
            Self::LowerCase => raw.to_lowercase(),
            Self::CaseSensitive => {
                if raw.chars().any(char::is_uppercase) {
                    format!("\"{raw}\"")
                } else {
                    raw.to_string()
                }
            }
        }
    }

    /// Parse a strategy from its attribute spelling.
    ///
    /// Accepts `snake_case`, `lower_case` and `case_sensitive` in any case.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().replace('-', "_").as_str() {
            "snake_case" | "snake" => Some(Self::SnakeCase),
            "lower_case" | "lowercase" | "lower" => Some(Self::LowerCase),
            "case_sensitive" | "sensitive" => Some(Self::CaseSensitive),
            _ => None
        }
    }
}

/// Resolve a column name, letting an explicit name win over the strategy.
#[must_use]
pub fn resolve_column_name(explicit: Option<&str>, raw: &str, strategy: NamingStrategy) -> String {
    match explicit {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => strategy.apply(raw)
    }
}

fn is_upper(grapheme: Option<&&str>) -> bool {
    grapheme
        .and_then(|g| g.chars().next())
        .is_some_and(char::is_uppercase)
}

fn starts_upper_pair(graphemes: &[&str]) -> bool {
    is_upper(graphemes.first()) && is_upper(graphemes.get(1))
}

/// Every uppercase letter starts a word, so `userID` becomes `user_i_d`.
const UPPER_UPPER: Boundary = Boundary::Custom {
    condition: starts_upper_pair,
    start:     1,
    len:       0
};

/// Words start at an uppercase letter and at the first digit of a run;
/// existing underscores are kept.
fn to_snake_case(raw: &str) -> String {
    Converter::new()
        .set_boundaries(&[
            Boundary::Underscore,
            Boundary::LowerUpper,
            UPPER_UPPER,
            Boundary::DigitUpper,
            Boundary::LowerDigit,
            Boundary::UpperDigit
        ])
        .to_case(Case::Snake)
        .convert(raw)
}
