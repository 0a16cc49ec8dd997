//! Native loading: fetch each configured language's word list over HTTP.

use crate::error::LoadError;
use crate::parse::{parse_inflections, parse_lemmas};
use crate::repository::WordRepository;
use crate::types::{CategoryEntry, EngineConfig, LanguageConfig, RawLanguage, WordsPayload};
use rayon::prelude::*;

fn fetch(url: &str) -> Result<String, LoadError> {
    let fetch_err = |source| LoadError::Fetch {
        url: url.to_string(),
        source,
    };
    reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(fetch_err)
}

fn load_language(lang: &LanguageConfig) -> Result<(String, RawLanguage), LoadError> {
    let url = lang
        .url
        .as_deref()
        .ok_or_else(|| LoadError::MissingUrl(lang.id.clone()))?;
    let lemmas = parse_lemmas(&fetch(url)?, &lang.id)?;

    let inflected = match lang.inflected_url.as_deref() {
        Some(url) => Some(parse_inflections(&fetch(url)?, &lang.id)?),
        None => None,
    };

    tracing::info!("fetched {} lemmas for '{}' from {}", lemmas.len(), lang.id, url);
    Ok((lang.id.clone(), RawLanguage { lemmas, inflected }))
}

/// Fetch every configured language in parallel and build the repository.
/// Fails if any language is missing a url or cannot be fetched or parsed.
pub fn load_from_config(
    config: &EngineConfig,
    categories: Vec<CategoryEntry>,
) -> Result<WordRepository, LoadError> {
    let languages = config
        .languages
        .par_iter()
        .map(load_language)
        .collect::<Result<_, _>>()?;

    Ok(WordRepository::from_payload(WordsPayload {
        languages,
        categories,
    }))
}
