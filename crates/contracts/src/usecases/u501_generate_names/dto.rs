use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const MIN_COUNT: u8 = 1;
pub const MAX_COUNT: u8 = 10;
pub const DEFAULT_COUNT: u8 = 5;

/// Value of the style select meaning "no constraint".
pub const ANY_STYLE: &str = "any";

/// Style presets offered by the generator page (value, caption).
pub const NAME_STYLES: &[(&str, &str)] = &[
    (ANY_STYLE, "Any Style"),
    ("fantasy", "Fantasy"),
    ("medieval", "Medieval"),
    ("futuristic", "Futuristic"),
    ("mythological", "Mythological"),
    ("dark", "Dark/Gothic"),
    ("whimsical", "Whimsical"),
];

/// Words per generated name. Serialized as `"any"`, `1`, `2` or `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordCount {
    #[default]
    Any,
    One,
    Two,
    Three,
}

impl WordCount {
    pub fn all() -> [WordCount; 4] {
        [WordCount::Any, WordCount::One, WordCount::Two, WordCount::Three]
    }

    pub fn words(&self) -> Option<usize> {
        match self {
            WordCount::Any => None,
            WordCount::One => Some(1),
            WordCount::Two => Some(2),
            WordCount::Three => Some(3),
        }
    }

    /// Value used in the `<select>` element.
    pub fn as_value(&self) -> &'static str {
        match self {
            WordCount::Any => "any",
            WordCount::One => "1",
            WordCount::Two => "2",
            WordCount::Three => "3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WordCount::Any => "Any number",
            WordCount::One => "1 Word",
            WordCount::Two => "2 Words",
            WordCount::Three => "3 Words",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "any" | "" => Some(WordCount::Any),
            "1" => Some(WordCount::One),
            "2" => Some(WordCount::Two),
            "3" => Some(WordCount::Three),
            _ => None,
        }
    }

    fn from_number(n: u64) -> Option<Self> {
        match n {
            1 => Some(WordCount::One),
            2 => Some(WordCount::Two),
            3 => Some(WordCount::Three),
            _ => None,
        }
    }
}

impl Serialize for WordCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.words() {
            None => serializer.serialize_str("any"),
            Some(n) => serializer.serialize_u64(n as u64),
        }
    }
}

impl<'de> Deserialize<'de> for WordCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => WordCount::from_number(n),
            Raw::Text(s) => WordCount::from_value(&s),
        };
        parsed.ok_or_else(|| serde::de::Error::custom("wordCount must be \"any\", 1, 2 or 3"))
    }
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNamesRequest {
    pub criteria: String,
    #[serde(default = "default_count")]
    pub count: u8,
    #[serde(default)]
    pub word_count: WordCount,
    #[serde(default = "default_style")]
    pub name_style: String,
}

fn default_count() -> u8 {
    DEFAULT_COUNT
}

fn default_style() -> String {
    ANY_STYLE.to_string()
}

impl GenerateNamesRequest {
    /// Clamp a user-typed count into `MIN_COUNT..=MAX_COUNT`; garbage becomes the minimum.
    pub fn clamp_count(raw: &str) -> u8 {
        raw.trim()
            .parse::<i64>()
            .map(|n| n.clamp(MIN_COUNT as i64, MAX_COUNT as i64) as u8)
            .unwrap_or(MIN_COUNT)
    }

    /// Trimmed criteria and style, count forced into range.
    pub fn normalized(self) -> Self {
        Self {
            criteria: self.criteria.trim().to_string(),
            count: self.count.clamp(MIN_COUNT, MAX_COUNT),
            word_count: self.word_count,
            name_style: self.name_style.trim().to_string(),
        }
    }

    /// Criteria must not be blank once trimmed.
    pub fn validate(&self) -> Result<(), String> {
        if self.criteria.trim().is_empty() {
            return Err("Please enter criteria for the names you want to generate.".into());
        }
        Ok(())
    }

    /// Style constraint, if any.
    pub fn style(&self) -> Option<&str> {
        let style = self.name_style.trim();
        if style.is_empty() || style.eq_ignore_ascii_case(ANY_STYLE) {
            None
        } else {
            Some(style)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateNamesResponse {
    pub names: Vec<String>,
}

/// Error body returned with non-2xx generator responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateErrorResponse {
    pub error: String,
}
