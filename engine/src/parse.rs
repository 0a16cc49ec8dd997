use crate::error::LoadError;
use crate::types::{
    ConceptId, EngineConfig, InflectionTable, LemmaRecord, RawConceptId, RawInflection, RawLemma,
    WordsPayload,
};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

/// Defaults applied to records that leave these fields out
pub const DEFAULT_LEVEL: &str = "A1";
pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_TYPE: &str = "word";

fn parse_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse {
        what: what.to_string(),
        source,
    })
}

/// Parse the startup word list payload
pub fn parse_words(json: &str) -> Result<WordsPayload, LoadError> {
    parse_json(json, "word lists")
}

/// Parse the engine config payload
pub fn parse_config(json: &str) -> Result<EngineConfig, LoadError> {
    parse_json(json, "config")
}

/// Parse a bare lemma array for one language
pub fn parse_lemmas(json: &str, lang: &str) -> Result<Vec<RawLemma>, LoadError> {
    parse_json(json, &format!("lemmas for '{}'", lang))
}

/// Parse a bare inflection array for one language
pub fn parse_inflections(json: &str, lang: &str) -> Result<Vec<RawInflection>, LoadError> {
    parse_json(json, &format!("inflections for '{}'", lang))
}

/// Textual join key for a concept id ("12" and 12 are the same concept).
/// Blank text and non-scalar ids have no key.
pub fn concept_key(id: &RawConceptId) -> Option<ConceptId> {
    let key = match id {
        RawConceptId::Text(s) => s.trim().to_string(),
        RawConceptId::Number(n) => n.to_string(),
        RawConceptId::Unusable(_) => return None,
    };
    (!key.is_empty()).then_some(key)
}

/// Lowercased lemma used as a stable card key
pub fn lemma_key(lemma: &str) -> String {
    lemma.to_lowercase()
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Turn a raw row into a `LemmaRecord`, applying the field defaults.
/// Returns the reason the row is unusable when it has no concept id or
/// no lemma.
///
/// This is the only place defaults are substituted; matching, filtering
/// and facet extraction all read the normalized values.
pub fn normalize_lemma(raw: RawLemma) -> Result<LemmaRecord, &'static str> {
    let concept_id = raw
        .concept_id
        .as_ref()
        .and_then(concept_key)
        .ok_or("missing concept_id")?;
    let lemma = present(raw.word_lemma).ok_or("missing word_lemma")?;

    Ok(LemmaRecord {
        concept_id,
        lemma,
        level: present(raw.level).unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
        category: present(raw.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        word_type: present(raw.word_type).unwrap_or_else(|| DEFAULT_TYPE.to_string()),
        definition: present(raw.definition).or_else(|| present(raw.definiton)),
        example_sentence: present(raw.sentence),
    })
}

/// Normalize a whole lemma list, keeping its order. Unusable rows are
/// dropped with a warning.
pub fn normalize_lemmas(raw: Vec<RawLemma>, lang: &str) -> Vec<LemmaRecord> {
    let records: Vec<LemmaRecord> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match normalize_lemma(row) {
            Ok(record) => Some(record),
            Err(reason) => {
                tracing::warn!(lang, index, reason, "skipping word list row");
                None
            }
        })
        .collect();

    let duplicates = duplicate_concepts(&records);
    if !duplicates.is_empty() {
        tracing::warn!(
            "language '{}' repeats {} concept id(s), later rows win in lookups: {:?}",
            lang,
            duplicates.len(),
            duplicates
        );
    }

    records
}

/// Concept ids that appear more than once, in first-repeat order
pub fn duplicate_concepts(records: &[LemmaRecord]) -> Vec<ConceptId> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    records
        .iter()
        .filter(|r| !seen.insert(r.concept_id.as_str()) && reported.insert(r.concept_id.as_str()))
        .map(|r| r.concept_id.clone())
        .collect()
}

/// Build the inflection table for a language. The first row per concept
/// wins; rows without an id or a form are ignored.
pub fn normalize_inflections(rows: Vec<RawInflection>) -> InflectionTable {
    let mut table = InflectionTable::new();
    for row in rows {
        let key = row.concept_id.as_ref().and_then(concept_key);
        if let (Some(key), Some(form)) = (key, present(row.word_inflected)) {
            table.entry(key).or_insert(form);
        }
    }
    table
}
