//! Built-in strings of the developer to-do board.

use crate::catalog::{Catalog, CatalogBuilder};
use crate::resolver::Resolver;
use crate::I18nError;

pub const DEFAULT_LOCALE: &str = "en";
pub const FALLBACK_LOCALE: &str = "en";

/// `(locale, yaml source)` for every locale the board ships with.
pub const BUILTIN_SOURCES: [(&str, &str); 2] = [
    ("en", include_str!("../resource/i18n/board.en.yaml")),
    ("fr", include_str!("../resource/i18n/board.fr.yaml")),
];

/// A builder pre-loaded with the board's own locales, for callers that add
/// more tables on top.
pub fn builder() -> Result<CatalogBuilder, I18nError> {
    BUILTIN_SOURCES
        .iter()
        .try_fold(Catalog::builder(), |b, (locale, src)| b.simple_str(locale, src))
}

pub fn catalog() -> Result<Catalog, I18nError> {
    Ok(builder()?.build())
}

/// A resolver over [`catalog`] at [`DEFAULT_LOCALE`] / [`FALLBACK_LOCALE`].
pub fn resolver() -> Result<Resolver, I18nError> {
    Resolver::new(catalog()?, DEFAULT_LOCALE, FALLBACK_LOCALE)
}
