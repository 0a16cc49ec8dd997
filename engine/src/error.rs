use thiserror::Error;

/// Errors raised while loading word lists or engine configuration.
///
/// Queries never fail: unknown languages and empty matches are ordinary
/// empty results. Unusable rows are skipped, so only an unreadable
/// payload or an unreachable word list fails the load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "native")]
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[cfg(feature = "native")]
    #[error("language '{0}' has no word list url configured")]
    MissingUrl(String),
}
