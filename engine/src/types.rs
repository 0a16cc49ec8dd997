use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Language code (e.g. "en", "es")
pub type LangCode = String;

/// Concept identifier shared by every language's word list
pub type ConceptId = String;

/// Concept id as written in the word lists: JSON string or number.
/// Anything else is kept as `Unusable` so the row can be skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawConceptId {
    Text(String),
    Number(serde_json::Number),
    Unusable(serde_json::Value),
}

/// One row of a language's word list, as loaded. Rows without a usable
/// concept id or lemma are skipped during normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLemma {
    #[serde(default)]
    pub concept_id: Option<RawConceptId>,
    #[serde(default)]
    pub word_lemma: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub word_type: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    /// Misspelled field carried by some of the published word lists
    #[serde(default)]
    pub definiton: Option<String>,
    #[serde(default)]
    pub sentence: Option<String>,
}

/// One row of a language's inflected-form table
#[derive(Debug, Clone, Deserialize)]
pub struct RawInflection {
    #[serde(default)]
    pub concept_id: Option<RawConceptId>,
    #[serde(default)]
    pub word_inflected: Option<String>,
}

/// Everything loaded for a single language
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLanguage {
    pub lemmas: Vec<RawLemma>,
    #[serde(default)]
    pub inflected: Option<Vec<RawInflection>>,
}

/// Entry of the supplementary category list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryEntry {
    #[serde(default)]
    pub category: Option<String>,
}

/// Word list payload handed to the engine at startup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordsPayload {
    pub languages: HashMap<LangCode, RawLanguage>,
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
}

/// Normalized lemma record. Defaults are already applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LemmaRecord {
    pub concept_id: ConceptId,
    pub lemma: String,
    pub level: String,
    pub category: String,
    #[serde(rename = "type")]
    pub word_type: String,
    pub definition: Option<String>,
    pub example_sentence: Option<String>,
}

/// Lemma store: language code -> lemma list in source order
pub type LemmaStore = HashMap<LangCode, Vec<LemmaRecord>>;

/// Inflection table: concept id -> inflected surface form
pub type InflectionTable = HashMap<ConceptId, String>;

/// Inflection store: language code -> inflection table
pub type InflectionStore = HashMap<LangCode, InflectionTable>;

/// Target lookup used by the join: concept id -> target record
pub type TargetLookup<'a> = HashMap<&'a str, &'a LemmaRecord>;

/// Metadata carried by a matched concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptMetadata {
    pub level: String,
    pub category: String,
    #[serde(rename = "type")]
    pub word_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_sentence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_sentence: Option<String>,
}

/// A source/target word pair produced by the join
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptPair {
    /// Always textual: numeric ids in the word lists are written as strings
    pub id: ConceptId,
    pub key: String,
    pub source_text: String,
    pub target_text: String,
    pub metadata: ConceptMetadata,
}

/// Facets of the joined set for one language pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetSummary {
    pub total_concepts: usize,
    pub total_with_translations: usize,
    pub levels: Vec<String>,
    pub categories: Vec<String>,
}

/// Facets observed across every language
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalFacets {
    pub categories: Vec<String>,
    pub levels: Vec<String>,
}

/// A facet constraint: "all" or one exact value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parameter value meaning "no constraint on this axis"
    pub const ALL: &'static str = "all";

    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    /// Exact, case-sensitive match; `All` matches everything
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => Self::ALL,
            Selection::Only(value) => value,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::parse(value)
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == Selection::ALL {
            Selection::All
        } else {
            Selection::Only(value)
        }
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => Selection::ALL.to_string(),
            Selection::Only(value) => value,
        }
    }
}

/// Level and category constraints chosen by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub level: Selection,
    pub category: Selection,
}

/// Selectable filter value with its display attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Option lists for the level and category pickers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub levels: Vec<FilterOption>,
    pub categories: Vec<FilterOption>,
}

/// Display configuration for one language
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
    pub id: LangCode,
    pub name: String,
    #[serde(default)]
    pub native_name: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub inflected_url: Option<String>,
}

/// Engine config: languages in display order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub languages: Vec<LanguageConfig>,
}

/// Result of checking a batch of answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
    pub percentage: u32,
}
