//! The fixed set of labels an article can be filed under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six satire sections of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Finance,
    Business,
    Tech,
    Crypto,
    Culture,
    Opinion,
}

/// Returned when a label is not one of the six category names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: '{0}'")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Every category, in the order they are listed to the model.
    pub const ALL: [Category; 6] = [
        Category::Finance,
        Category::Business,
        Category::Tech,
        Category::Crypto,
        Category::Culture,
        Category::Opinion,
    ];

    /// Used whenever a classification cannot be trusted.
    pub const FALLBACK: Category = Category::Opinion;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finance => "Finance",
            Self::Business => "Business",
            Self::Tech => "Tech",
            Self::Crypto => "Crypto",
            Self::Culture => "Culture",
            Self::Opinion => "Opinion",
        }
    }

    /// The one-sentence rule the model is given for this category.
    pub fn definition(&self) -> &'static str {
        match self {
            Self::Finance => {
                "This is for satirical articles about traditional financial markets, banking, and investment."
            }
            Self::Business => {
                "This is for satirical articles about companies, corporate news, startups, and entrepreneurship."
            }
            Self::Tech => {
                "This is for satirical articles about technology, gadgets, software, AI, or digital infrastructure."
            }
            Self::Crypto => {
                "This is for satirical articles about digital currencies, blockchain, and decentralized finance (DeFi)."
            }
            Self::Culture => {
                "This is for satirical articles about sports, gaming, entertainment, and general lifestyle topics. This is the catch-all for anything that is not directly political, financial, or technological."
            }
            Self::Opinion => {
                "Use this for articles that are satirical about politics, government, or social commentary. This category is for pieces that mock a specific political stance, policy, or public figure."
            }
        }
    }

    /// Parse a raw model reply. Surrounding whitespace is ignored, the
    /// match itself is exact and case-sensitive.
    pub fn from_label(raw: &str) -> Result<Self, UnknownCategory> {
        raw.trim().parse()
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
