//! i18n configuration file handling (`i18n.toml`)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board;
use crate::catalog::{Catalog, CatalogBuilder};
use crate::resolver::Resolver;
use crate::I18nError;

/// Locales and catalog sources of the app.
///
/// ```toml
/// default_locale = "fr"
/// fallback_locale = "en"
///
/// [[catalogs]]
/// locale = "de"
/// path = "i18n/board.de.yaml"
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct I18nConfig {
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default = "default_locale")]
    pub fallback_locale: String,
    /// Start from the built-in board strings.
    #[serde(default = "default_true")]
    pub builtin: bool,
    /// Extra catalog files, loaded in order on top of the built-in strings.
    #[serde(default)]
    pub catalogs: Vec<CatalogSource>,
}

fn default_locale() -> String {
    board::DEFAULT_LOCALE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            fallback_locale: default_locale(),
            builtin: true,
            catalogs: Vec::new(),
        }
    }
}

/// One catalog file for one locale.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CatalogSource {
    pub locale: String,
    /// Relative paths are resolved against the config's base directory.
    pub path: PathBuf,
    #[serde(default)]
    pub format: CatalogFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    /// YAML mapping or legacy `key = value` lines.
    #[default]
    Simple,
    Fluent,
}

fn read_file(path: &Path) -> Result<String, I18nError> {
    fs::read_to_string(path).map_err(|source| I18nError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_source(
    builder: CatalogBuilder,
    source: &CatalogSource,
    base_dir: &Path,
) -> Result<CatalogBuilder, I18nError> {
    let path = base_dir.join(&source.path);
    let src = read_file(&path)?;
    match source.format {
        CatalogFormat::Simple => builder.simple_str(&source.locale, &src),
        #[cfg(feature = "fluent")]
        CatalogFormat::Fluent => builder.fluent_str(&source.locale, &src),
        #[cfg(not(feature = "fluent"))]
        CatalogFormat::Fluent => Err(I18nError::Fluent(format!(
            "`{}` is a Fluent catalog but the `fluent` feature is disabled",
            path.display()
        ))),
    }
}

impl I18nConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, I18nError> {
        Ok(toml::from_str(src)?)
    }

    /// Load the config at `path`. Catalog paths inside it stay relative; pass
    /// the config's directory to [`I18nConfig::build_catalog`].
    pub fn load(path: &Path) -> Result<Self, I18nError> {
        Self::from_toml_str(&read_file(path)?)
    }

    pub fn build_catalog(&self, base_dir: &Path) -> Result<Catalog, I18nError> {
        let mut builder = if self.builtin {
            board::builder()?
        } else {
            Catalog::builder()
        };

        for source in &self.catalogs {
            builder = load_source(builder, source, base_dir)?;
        }

        let catalog = builder.build();
        info!(locales = ?catalog.locales(), sources = self.catalogs.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Build the catalog and a resolver at the configured locales.
    pub fn into_resolver(self, base_dir: &Path) -> Result<Resolver, I18nError> {
        let catalog = self.build_catalog(base_dir)?;
        Resolver::new(catalog, &self.default_locale, &self.fallback_locale)
    }
}
