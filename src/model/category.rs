use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// The fixed set of spending categories.
///
/// Every expense belongs to exactly one category; anything unset or unrecognized —
/// for example a loose category guess from the bill scanner — lands in `Other`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    clap::ValueEnum,
)]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Shopping,
    Entertainment,
    Health,
    #[default]
    Other,
}

serde_plain::derive_display_from_serialize!(Category);

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Shopping,
        Category::Entertainment,
        Category::Health,
        Category::Other,
    ];

    /// Resolves a category name case-insensitively, falling back to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "food" => Category::Food,
            "transport" => Category::Transport,
            "utilities" => Category::Utilities,
            "shopping" => Category::Shopping,
            "entertainment" => Category::Entertainment,
            "health" => Category::Health,
            _ => Category::Other,
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from_name(s))
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Category::from_name(&name))
    }
}
