use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub mod console;
pub mod error;
pub mod facets;
pub mod matcher;
#[cfg(feature = "native")]
pub mod native;
pub mod options;
pub mod parse;
pub mod repository;
pub mod scoring;
pub mod types;

pub use crate::error::LoadError;
pub use crate::repository::WordRepository;

use types::{
    ConceptPair, EngineConfig, FacetSummary, FilterOptions, FilterSelection, GlobalFacets,
    LanguageConfig, ScoreSummary, Selection,
};

/// Language entry for the language picker
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub id: String,
    pub name: String,
    pub native_name: String,
    pub flag: String,
}

/// Engine state: immutable word lists plus display config
pub struct Engine {
    repository: WordRepository,
    config: EngineConfig,
}

impl Engine {
    pub fn new(repository: WordRepository, config: EngineConfig) -> Self {
        Engine { repository, config }
    }

    /// Parse both startup payloads and build the engine
    pub fn from_json(words_json: &str, config_json: &str) -> Result<Self, LoadError> {
        let repository = WordRepository::from_json(words_json)?;
        let config = parse::parse_config(config_json)?;
        Ok(Engine::new(repository, config))
    }

    pub fn repository(&self) -> &WordRepository {
        &self.repository
    }

    /// Concept pairs for a language pair under a level/category selection
    pub fn words(
        &self,
        source: &str,
        target: &str,
        selection: &FilterSelection,
    ) -> Vec<ConceptPair> {
        let start = console::now_ms();
        let words = matcher::query(
            &self.repository,
            source,
            target,
            &selection.level,
            &selection.category,
        );

        tracing::debug!(
            "[perf] words {}->{} level={} category={} results={} | total={:.1}ms",
            source,
            target,
            selection.level.as_str(),
            selection.category.as_str(),
            words.len(),
            console::now_ms() - start
        );

        if words.is_empty() {
            tracing::info!(
                "no concepts for {}->{} with level={} category={}",
                source,
                target,
                selection.level.as_str(),
                selection.category.as_str()
            );
        }
        words
    }

    /// Facet summary of the full joined set for a language pair
    pub fn facets(&self, source: &str, target: &str) -> FacetSummary {
        matcher::compute_facets(&self.repository, source, target)
    }

    pub fn global_facets(&self) -> &GlobalFacets {
        self.repository.global_facets()
    }

    pub fn global_options(&self) -> FilterOptions {
        options::global_options(self.global_facets())
    }

    /// Option lists narrowed to what the language pair can satisfy
    pub fn pair_options(&self, source: &str, target: &str) -> FilterOptions {
        options::pair_options(self.global_facets(), &self.facets(source, target))
    }

    /// Languages that have word lists: configured ones first, in config
    /// order, then any loaded language missing from the config
    pub fn languages(&self) -> Vec<LanguageInfo> {
        let configured = self
            .config
            .languages
            .iter()
            .filter(|lang| self.repository.has_language(&lang.id))
            .map(language_info);

        let unconfigured = self
            .repository
            .languages()
            .into_iter()
            .filter(|code| !self.config.languages.iter().any(|lang| lang.id == *code))
            .map(|code| LanguageInfo {
                id: code.to_string(),
                name: code.to_string(),
                native_name: code.to_string(),
                flag: String::new(),
            });

        configured.chain(unconfigured).collect()
    }
}

fn language_info(lang: &LanguageConfig) -> LanguageInfo {
    LanguageInfo {
        id: lang.id.clone(),
        name: lang.name.clone(),
        native_name: lang.native_name.clone().unwrap_or_else(|| lang.name.clone()),
        flag: lang.flag.clone().unwrap_or_default(),
    }
}

// Use thread_local with RefCell for lazy initialization from JS
thread_local! {
    static ENGINE: RefCell<Option<Engine>> = const { RefCell::new(None) };
}

const NOT_INITIALIZED: &str =
    "Engine not initialized. Call init_engine(words_json, config_json) first.";

fn with_engine<T>(f: impl FnOnce(&Engine) -> T) -> Result<T, JsError> {
    ENGINE.with(|engine| {
        let engine_ref = engine.borrow();
        match engine_ref.as_ref() {
            Some(eng) => Ok(f(eng)),
            None => Err(JsError::new(NOT_INITIALIZED)),
        }
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value)
        .map_err(|e| JsError::new(&format!("Failed to serialize result: {}", e)))
}

/// Initialize the engine with word lists and config from JavaScript
/// words_json: JSON string of WordsPayload ({languages: {code: {lemmas, inflected}}, categories})
/// config_json: JSON string of EngineConfig ({languages: [{id, name, nativeName, flag}]})
#[wasm_bindgen]
pub fn init_engine(words_json: &str, config_json: &str) -> Result<(), JsError> {
    #[cfg(target_arch = "wasm32")]
    console::init();

    let engine = Engine::from_json(words_json, config_json)
        .map_err(|e| JsError::new(&format!("Failed to load word lists: {}", e)))?;

    ENGINE.with(|slot| {
        *slot.borrow_mut() = Some(engine);
    });

    Ok(())
}

/// Check if the engine has been initialized
#[wasm_bindgen]
pub fn is_engine_ready() -> bool {
    ENGINE.with(|engine| engine.borrow().is_some())
}

/// Concept pairs for a language pair; level/category "all" means no constraint
#[wasm_bindgen]
pub fn get_words(
    source: &str,
    target: &str,
    level: &str,
    category: &str,
) -> Result<String, JsError> {
    let selection = FilterSelection {
        level: Selection::parse(level),
        category: Selection::parse(category),
    };
    to_json(&with_engine(|eng| eng.words(source, target, &selection))?)
}

/// Facet summary for a language pair
#[wasm_bindgen]
pub fn get_available_filters(source: &str, target: &str) -> Result<String, JsError> {
    to_json(&with_engine(|eng| eng.facets(source, target))?)
}

/// Levels and categories across every language
#[wasm_bindgen]
pub fn get_global_filters() -> Result<String, JsError> {
    to_json(&with_engine(|eng| eng.global_facets().clone())?)
}

#[wasm_bindgen]
pub fn get_level_options() -> Result<String, JsError> {
    to_json(&with_engine(|eng| eng.global_options().levels)?)
}

#[wasm_bindgen]
pub fn get_category_options() -> Result<String, JsError> {
    to_json(&with_engine(|eng| eng.global_options().categories)?)
}

/// Level and category options available for a language pair
#[wasm_bindgen]
pub fn get_pair_options(source: &str, target: &str) -> Result<String, JsError> {
    to_json(&with_engine(|eng| eng.pair_options(source, target))?)
}

/// Reset a level/category selection the pair cannot satisfy back to "all"
#[wasm_bindgen]
pub fn reconcile_selection(
    source: &str,
    target: &str,
    level: &str,
    category: &str,
) -> Result<String, JsError> {
    let selection = FilterSelection {
        level: Selection::parse(level),
        category: Selection::parse(category),
    };
    to_json(&with_engine(|eng| options::reconcile(selection, &eng.facets(source, target)))?)
}

#[wasm_bindgen]
pub fn get_languages() -> Result<String, JsError> {
    to_json(&with_engine(|eng| eng.languages())?)
}

/// Score typed answers against the words they were given for
/// words_json: JSON array of concept pairs as returned by get_words
/// answers_json: JSON array of answer strings, by position
#[wasm_bindgen]
pub fn score_answers(words_json: &str, answers_json: &str) -> Result<String, JsError> {
    let words: Vec<ConceptPair> = serde_json::from_str(words_json)
        .map_err(|e| JsError::new(&format!("Failed to parse words: {}", e)))?;
    let answers: Vec<String> = serde_json::from_str(answers_json)
        .map_err(|e| JsError::new(&format!("Failed to parse answers: {}", e)))?;
    let summary: ScoreSummary = scoring::score(&words, &answers);
    to_json(&summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_WORDS: &str = r#"{
        "languages": {
            "en": {
                "lemmas": [
                    {"concept_id": 1, "word_lemma": "hello", "level": "A1", "category": "greetings"},
                    {"concept_id": 2, "word_lemma": "water", "category": "drinks"},
                    {"concept_id": 3, "word_lemma": "eat", "level": "A2", "category": "food"},
                    {"concept_id": 4, "word_lemma": "galaxy", "level": "C1", "category": "astronomy"}
                ],
                "inflected": [{"concept_id": 3, "word_inflected": "eating"}]
            },
            "es": {"lemmas": [
                {"concept_id": 1, "word_lemma": "hola"},
                {"concept_id": 2, "word_lemma": "agua"},
                {"concept_id": 3, "word_lemma": "comer"}
            ]},
            "pt": {"lemmas": [
                {"concept_id": 1, "word_lemma": "olá", "level": "B2", "category": "greetings"}
            ]}
        },
        "categories": [{"category": "travel"}]
    }"#;

    const TEST_CONFIG: &str = r#"{
        "languages": [
            {"id": "es", "name": "Spanish", "nativeName": "Español", "flag": "🇪🇸"},
            {"id": "en", "name": "English", "flag": "🇺🇸"},
            {"id": "de", "name": "German", "nativeName": "Deutsch"}
        ]
    }"#;

    fn setup_test_engine() {
        init_engine(TEST_WORDS, TEST_CONFIG).expect("Failed to initialize test engine");
    }

    fn engine() -> Engine {
        Engine::from_json(TEST_WORDS, TEST_CONFIG).unwrap()
    }

    #[test]
    fn test_get_words() {
        setup_test_engine();
        assert!(is_engine_ready());
        let results: Vec<ConceptPair> =
            serde_json::from_str(&get_words("en", "es", "all", "all").unwrap()).unwrap();
        let sources: Vec<&str> = results.iter().map(|p| p.source_text.as_str()).collect();
        assert_eq!(sources, vec!["hello", "water", "eating"]);
    }

    #[test]
    fn test_get_words_filtered() {
        setup_test_engine();
        let results: Vec<ConceptPair> =
            serde_json::from_str(&get_words("en", "es", "A1", "all").unwrap()).unwrap();
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let none: Vec<ConceptPair> =
            serde_json::from_str(&get_words("en", "es", "C1", "astronomy").unwrap()).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_words_json_shape() {
        setup_test_engine();
        let json = get_words("en", "es", "all", "greetings").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["sourceText"], "hello");
        assert_eq!(value[0]["targetText"], "hola");
        assert_eq!(value[0]["metadata"]["level"], "A1");
        assert_eq!(value[0]["metadata"]["type"], "word");
        assert!(value[0]["metadata"].get("sourceDefinition").is_none());
    }

    #[test]
    fn test_get_available_filters() {
        setup_test_engine();
        let summary: FacetSummary =
            serde_json::from_str(&get_available_filters("en", "es").unwrap()).unwrap();
        assert_eq!(summary.total_concepts, 4);
        assert_eq!(summary.total_with_translations, 3);
        assert_eq!(summary.levels, vec!["A1", "A2"]);
        assert_eq!(summary.categories, vec!["drinks", "food", "greetings"]);
    }

    #[test]
    fn test_global_filters() {
        let engine = engine();
        let global = engine.global_facets();
        assert_eq!(global.levels, vec!["A1", "A2", "B2", "C1"]);
        assert_eq!(
            global.categories,
            vec!["astronomy", "drinks", "food", "general", "greetings", "travel"]
        );
    }

    #[test]
    fn test_pair_options() {
        let engine = engine();
        let options = engine.pair_options("pt", "en");
        let levels: Vec<&str> = options.levels.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(levels, vec!["all", "B2"]);
        assert_eq!(options.categories.len(), 2);
        assert_eq!(engine.global_options().levels.len(), 5);
    }

    #[test]
    fn test_reconcile_selection() {
        setup_test_engine();
        let selection: FilterSelection =
            serde_json::from_str(&reconcile_selection("en", "pt", "C1", "greetings").unwrap())
                .unwrap();
        assert_eq!(selection.level, Selection::All);
        assert_eq!(selection.category, Selection::Only("greetings".to_string()));
    }

    #[test]
    fn test_languages() {
        let engine = engine();
        let langs = engine.languages();
        let ids: Vec<&str> = langs.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["es", "en", "pt"]);
        assert_eq!(langs[0].native_name, "Español");
        assert_eq!(langs[1].native_name, "English");
        assert_eq!(langs[2].flag, "");
    }

    #[test]
    fn test_init_skips_unusable_rows() {
        let words = r#"{
            "languages": {
                "en": {"lemmas": [
                    {"concept_id": 1, "word_lemma": "hello"},
                    {"concept_id": 2},
                    {"concept_id": null, "word_lemma": "ghost"},
                    {"concept_id": 3, "word_lemma": "bread", "definition": "food", "definiton": "fod"}
                ]},
                "es": {"lemmas": [
                    {"concept_id": 1, "word_lemma": "hola"},
                    {"concept_id": 3, "word_lemma": "pan"}
                ]}
            }
        }"#;
        init_engine(words, TEST_CONFIG).expect("rows without id or lemma should be skipped");
        let results: Vec<ConceptPair> =
            serde_json::from_str(&get_words("en", "es", "all", "all").unwrap()).unwrap();
        let targets: Vec<&str> = results.iter().map(|p| p.target_text.as_str()).collect();
        assert_eq!(targets, vec!["hola", "pan"]);
        assert_eq!(results[1].metadata.source_definition.as_deref(), Some("food"));
    }

    #[test]
    fn test_engine_repository() {
        let engine = engine();
        let repo = engine.repository();
        assert_eq!(repo.languages(), vec!["en", "es", "pt"]);
        assert_eq!(repo.get_inflected_form("en", "3"), Some("eating"));
        assert_eq!(repo.supplementary_categories(), ["travel".to_string()]);
    }

    #[test]
    fn test_unknown_language_is_empty() {
        let engine = engine();
        assert!(engine.words("en", "xx", &FilterSelection::default()).is_empty());
        assert_eq!(engine.facets("xx", "en"), FacetSummary::default());
    }

    #[test]
    fn test_score_answers() {
        setup_test_engine();
        let words = get_words("en", "es", "all", "all").unwrap();
        let answers = r#"["Hola", "", "beber"]"#;
        let summary: ScoreSummary =
            serde_json::from_str(&score_answers(&words, answers).unwrap()).unwrap();
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.answered, 2);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.percentage, 33);
    }
}
