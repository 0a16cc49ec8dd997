use crate::facets;
use crate::parse::lemma_key;
use crate::repository::WordRepository;
use crate::types::{
    ConceptMetadata, ConceptPair, FacetSummary, LemmaRecord, Selection, TargetLookup,
};

/// Index a target lemma list by concept id. A later row with the same
/// concept id replaces the earlier one.
pub fn target_lookup(targets: &[LemmaRecord]) -> TargetLookup<'_> {
    targets
        .iter()
        .map(|record| (record.concept_id.as_str(), record))
        .collect()
}

fn make_pair(
    repo: &WordRepository,
    source_lang: &str,
    source: &LemmaRecord,
    target: &LemmaRecord,
) -> ConceptPair {
    let source_text = repo
        .get_inflected_form(source_lang, &source.concept_id)
        .unwrap_or(source.lemma.as_str())
        .to_string();

    ConceptPair {
        id: source.concept_id.clone(),
        key: lemma_key(&source.lemma),
        source_text,
        target_text: target.lemma.clone(),
        metadata: ConceptMetadata {
            level: source.level.clone(),
            category: source.category.clone(),
            word_type: source.word_type.clone(),
            source_definition: source.definition.clone(),
            source_sentence: source.example_sentence.clone(),
            target_definition: target.definition.clone(),
            target_sentence: target.example_sentence.clone(),
        },
    }
}

/// Inner join of two languages on concept id.
///
/// Pairs come out in the source list's order. Source concepts without a
/// target row are skipped. The source side uses the inflected form when
/// the source language has one for the concept.
pub fn join(repo: &WordRepository, source_lang: &str, target_lang: &str) -> Vec<ConceptPair> {
    let lookup = target_lookup(repo.get_lemmas(target_lang));

    repo.get_lemmas(source_lang)
        .iter()
        .filter_map(|source| {
            let target = lookup.get(source.concept_id.as_str())?;
            Some(make_pair(repo, source_lang, source, target))
        })
        .collect()
}

/// Keep the pairs matching both constraints, in their original order
pub fn filter(
    pairs: Vec<ConceptPair>,
    level: &Selection,
    category: &Selection,
) -> Vec<ConceptPair> {
    pairs
        .into_iter()
        .filter(|pair| {
            level.matches(&pair.metadata.level) && category.matches(&pair.metadata.category)
        })
        .collect()
}

/// Join then filter: the list a study session works through
pub fn query(
    repo: &WordRepository,
    source_lang: &str,
    target_lang: &str,
    level: &Selection,
    category: &Selection,
) -> Vec<ConceptPair> {
    let joined = join(repo, source_lang, target_lang);
    let joined_count = joined.len();
    let filtered = filter(joined, level, category);

    tracing::debug!(
        "{} -> {} level={} category={}: {} joined, {} after filters",
        source_lang,
        target_lang,
        level.as_str(),
        category.as_str(),
        joined_count,
        filtered.len()
    );

    filtered
}

/// Facets of the full joined set for a language pair, ignoring any
/// current selection
pub fn compute_facets(
    repo: &WordRepository,
    source_lang: &str,
    target_lang: &str,
) -> FacetSummary {
    let sources = repo.get_lemmas(source_lang);
    let lookup = target_lookup(repo.get_lemmas(target_lang));

    let translated: Vec<&LemmaRecord> = sources
        .iter()
        .filter(|record| lookup.contains_key(record.concept_id.as_str()))
        .collect();
    let (levels, categories) = facets::facets_of(translated.iter().copied());

    FacetSummary {
        total_concepts: sources.len(),
        total_with_translations: translated.len(),
        levels,
        categories,
    }
}
