use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::gender::{self, Gender};
use crate::domain::common::AggregateId;

/// Server-side cap on the number of records returned by one name query.
pub const MAX_NAMES_PER_REQUEST: usize = 50;

// ============================================================================
// ID Type
// ============================================================================

/// Unique key of a name record.
///
/// Records imported from other stores keep their original key, so this is an
/// opaque string rather than a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameId(pub String);

impl NameId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for NameId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Name id cannot be empty".into());
        }
        Ok(Self(trimmed.to_string()))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A curated name. Read-only for everything except the import path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    #[serde(rename = "_id")]
    pub id: NameId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    #[serde(
        default,
        deserialize_with = "gender::deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub subcategory: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl NameRecord {
    /// Build a record from an import row under a fresh id.
    pub fn from_import(dto: NameImportDto, id: NameId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            meaning: dto.meaning.filter(|s| !s.trim().is_empty()),
            origin: dto.origin.filter(|s| !s.trim().is_empty()),
            gender: dto.gender.as_deref().and_then(Gender::from_tag),
            category: dto.category.trim().to_string(),
            subcategory: dto.subcategory.trim().to_string(),
            popularity: dto.popularity,
            created_at: Some(now),
        }
    }

    /// Tooltip text for a name card: meaning and origin when known.
    pub fn details(&self) -> Option<String> {
        match (&self.meaning, &self.origin) {
            (Some(m), Some(o)) => Some(format!("{} ({})", m, o)),
            (Some(m), None) => Some(m.clone()),
            (None, Some(o)) => Some(o.clone()),
            (None, None) => None,
        }
    }
}

/// One row of a names import file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameImportDto {
    pub name: String,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    pub category: String,
    pub subcategory: String,
    #[serde(default)]
    pub popularity: Option<i32>,
}

impl NameImportDto {
    /// A row needs a name and at least one of category or subcategory.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".into());
        }
        if self.category.trim().is_empty() && self.subcategory.trim().is_empty() {
            return Err(format!("Name '{}' has neither category nor subcategory", self.name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_mongo_style_id() {
        let record = NameRecord {
            id: NameId("n-1".into()),
            name: "Aelar".into(),
            meaning: Some("Noble".into()),
            origin: None,
            gender: Some(Gender::Male),
            category: "Fantasy Races".into(),
            subcategory: "Elf Names".into(),
            popularity: None,
            created_at: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["_id"], "n-1");
        assert_eq!(json["gender"], "male");
        assert!(json.get("origin").is_none());
    }

    #[test]
    fn test_unknown_gender_is_kept_and_blank_is_unset() {
        let json = r#"{"_id":"x","name":"Kael","gender":"dragon","category":"c","subcategory":"s"}"#;
        let record: NameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.gender, Some(Gender::Other("dragon".into())));

        let json = r#"{"_id":"y","name":"Ash","gender":"","category":"c","subcategory":"s"}"#;
        let record: NameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.gender, None);
    }

    #[test]
    fn test_from_import_normalizes() {
        let dto = NameImportDto {
            name: "  Lyra ".into(),
            meaning: Some("".into()),
            origin: Some("Elvish".into()),
            gender: Some("neutral".into()),
            category: "Fantasy Races".into(),
            subcategory: "Elf Names".into(),
            popularity: Some(10),
        };
        let now = Utc::now();
        let record = NameRecord::from_import(dto, NameId("id".into()), now);
        assert_eq!(record.name, "Lyra");
        assert_eq!(record.meaning, None);
        assert_eq!(record.gender, Some(Gender::Unisex));
        assert_eq!(record.created_at, Some(now));
        assert_eq!(record.details().as_deref(), Some("Elvish"));
    }

    #[test]
    fn test_import_validation() {
        let mut dto = NameImportDto {
            name: "Thorin".into(),
            meaning: None,
            origin: None,
            gender: None,
            category: "".into(),
            subcategory: "Dwarf Names".into(),
            popularity: None,
        };
        assert!(dto.validate().is_ok());
        dto.subcategory.clear();
        assert!(dto.validate().is_err());
        assert!(NameId::from_string("  ").is_err());
    }
}
