use crate::repository::WordRepository;
use crate::types::{GlobalFacets, LemmaRecord};
use std::collections::BTreeSet;

/// Canonical CEFR level order; anything else sorts after C2
const LEVEL_ORDER: &[&str] = &["A1", "A2", "B1", "B2", "C1", "C2"];

/// Position of a level in the canonical order (unknown levels rank last)
pub fn level_rank(level: &str) -> usize {
    LEVEL_ORDER
        .iter()
        .position(|l| *l == level)
        .unwrap_or(LEVEL_ORDER.len())
}

/// Distinct levels in canonical order. Unknown levels tie on rank and
/// fall back to lexicographic order.
pub fn sort_levels<I: IntoIterator<Item = String>>(levels: I) -> Vec<String> {
    let mut sorted: Vec<String> = levels.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    sorted.sort_by_key(|level| level_rank(level));
    sorted
}

/// Distinct categories in lexicographic order
pub fn sort_categories<I: IntoIterator<Item = String>>(categories: I) -> Vec<String> {
    categories.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Sorted distinct levels and categories of a set of records
pub fn facets_of<'a, I>(records: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = &'a LemmaRecord>,
{
    let mut levels = BTreeSet::new();
    let mut categories = BTreeSet::new();
    for record in records {
        levels.insert(record.level.clone());
        categories.insert(record.category.clone());
    }
    (sort_levels(levels), sort_categories(categories))
}

/// Union of levels and categories over every language, plus the
/// supplementary category list
pub fn global_facets(repo: &WordRepository) -> GlobalFacets {
    let all_records = repo
        .languages()
        .into_iter()
        .flat_map(|lang| repo.get_lemmas(lang).iter());
    let (levels, categories) = facets_of(all_records);

    let categories = sort_categories(
        categories
            .into_iter()
            .chain(repo.supplementary_categories().iter().cloned()),
    );

    GlobalFacets { categories, levels }
}
