use std::path::PathBuf;

use thiserror::Error;

use crate::simple::SimpleParseError;

#[derive(Debug, Error)]
pub enum I18nError {
    /// The resolver cannot start: a required locale is absent or the global
    /// state was already installed.
    #[error("i18n configuration error: {0}")]
    Configuration(String),

    #[error("unknown locale `{0}`")]
    UnknownLocale(String),

    #[error(transparent)]
    SimpleParse(#[from] SimpleParseError),

    #[error("fluent error: {0}")]
    Fluent(String),

    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid i18n config: {0}")]
    Toml(#[from] toml::de::Error),
}
