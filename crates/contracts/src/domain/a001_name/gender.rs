use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Gender tag of a name record.
///
/// `Unisex` is the canonical neutral member; older records spell it `"neutral"`.
/// Tags outside the known set are kept verbatim in `Other`, so they stay
/// visible under "All" but never pass a gender tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Unisex,
    Other(String),
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unisex => "unisex",
            Gender::Other(tag) => tag,
        }
    }

    /// Parse a stored tag. Blank input yields `None` (no tag at all).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let trimmed = tag.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => None,
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "unisex" | "neutral" => Some(Gender::Unisex),
            _ => Some(Gender::Other(trimmed.to_string())),
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Gender::from_tag(&raw).ok_or_else(|| serde::de::Error::custom("empty gender tag"))
    }
}

/// Lenient decoder for the optional `gender` field: `null`, missing or empty
/// strings become `None` instead of failing the record.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Gender::from_tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Gender::from_tag("Male"), Some(Gender::Male));
        assert_eq!(Gender::from_tag(" female "), Some(Gender::Female));
        assert_eq!(Gender::from_tag("neutral"), Some(Gender::Unisex));
        assert_eq!(Gender::from_tag("unisex"), Some(Gender::Unisex));
        assert_eq!(Gender::from_tag(" Elven "), Some(Gender::Other("Elven".into())));
        assert_eq!(Gender::from_tag(""), None);
        assert_eq!(Gender::from_tag("   "), None);
    }

    #[test]
    fn test_serializes_canonical_spelling() {
        let json = serde_json::to_string(&Gender::Unisex).unwrap();
        assert_eq!(json, "\"unisex\"");
        let parsed: Gender = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(parsed, Gender::Unisex);
    }

    #[test]
    fn test_unknown_tag_round_trips() {
        let parsed: Gender = serde_json::from_str("\"dragon\"").unwrap();
        assert_eq!(parsed, Gender::Other("dragon".into()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"dragon\"");
    }
}
