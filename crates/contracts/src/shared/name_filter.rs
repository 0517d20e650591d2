//! Gender filter applied to a fetched name list.

use serde::{Deserialize, Serialize};

use crate::domain::a001_name::aggregate::NameRecord;
use crate::domain::a001_name::gender::Gender;

/// Active gender tab. Exactly one is selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
    #[serde(alias = "neutral")]
    Unisex,
}

impl GenderFilter {
    pub fn all() -> [GenderFilter; 4] {
        [
            GenderFilter::All,
            GenderFilter::Male,
            GenderFilter::Female,
            GenderFilter::Unisex,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenderFilter::All => "all",
            GenderFilter::Male => "male",
            GenderFilter::Female => "female",
            GenderFilter::Unisex => "unisex",
        }
    }

    /// Tab caption.
    pub fn label(&self) -> &'static str {
        match self {
            GenderFilter::All => "All Names",
            GenderFilter::Male => "Male",
            GenderFilter::Female => "Female",
            GenderFilter::Unisex => "Unisex",
        }
    }

    /// `"neutral"` selects the same tab as `"unisex"`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Some(GenderFilter::All),
            "male" => Some(GenderFilter::Male),
            "female" => Some(GenderFilter::Female),
            "unisex" | "neutral" => Some(GenderFilter::Unisex),
            _ => None,
        }
    }

    /// `Unisex` also takes untagged records; unrecognized tags only pass `All`.
    pub fn matches(&self, gender: Option<&Gender>) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => gender == Some(&Gender::Male),
            GenderFilter::Female => gender == Some(&Gender::Female),
            GenderFilter::Unisex => matches!(gender, None | Some(Gender::Unisex)),
        }
    }
}

/// Stable filter: keeps input order, one pass.
pub fn filter_names(names: &[NameRecord], selector: GenderFilter) -> Vec<NameRecord> {
    if selector == GenderFilter::All {
        return names.to_vec();
    }
    names
        .iter()
        .filter(|n| selector.matches(n.gender.as_ref()))
        .cloned()
        .collect()
}
