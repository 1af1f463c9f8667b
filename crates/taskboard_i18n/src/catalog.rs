//! The immutable locale -> messages mapping.
//!
//! A [`Catalog`] is assembled once through [`CatalogBuilder`] and then shared
//! read-only (usually behind an `Arc`). Lookups here never fall back across
//! locales; fallback is the [`Resolver`](crate::Resolver)'s job.
//!
//! | Situation | Behavior |
//! |-----------|----------|
//! | Key missing in locale | `None` |
//! | Locale not loaded | `None` |
//! | Fluent and simple both define a key | Fluent wins |

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::label::Message;
use crate::locale::{locale_candidates, normalize_locale};
use crate::simple::LocaleMessages;
use crate::I18nError;

#[cfg(feature = "fluent")]
use crate::fluent::FluentMessages;

#[derive(Debug, Default)]
pub struct Catalog {
    simple: BTreeMap<String, LocaleMessages>,
    #[cfg(feature = "fluent")]
    fluent: BTreeMap<String, FluentMessages>,
}

/// Collects per-locale message tables before freezing them into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Add (or extend) the simple table of `locale`. Later entries win.
    pub fn locale(mut self, locale: &str, messages: LocaleMessages) -> Self {
        let loc = normalize_locale(locale);
        self.catalog.simple.entry(loc).or_default().merge(messages);
        self
    }

    /// Parse a YAML / `key = value` source and add it to `locale`.
    pub fn simple_str(self, locale: &str, src: &str) -> Result<Self, I18nError> {
        let messages = LocaleMessages::parse(src)?;
        Ok(self.locale(locale, messages))
    }

    /// Parse a Fluent source for `locale`, replacing any earlier one.
    #[cfg(feature = "fluent")]
    pub fn fluent_str(mut self, locale: &str, ftl: &str) -> Result<Self, I18nError> {
        let loc = normalize_locale(locale);
        let messages = FluentMessages::parse(&loc, ftl)?;
        self.catalog.fluent.insert(loc, messages);
        Ok(self)
    }

    pub fn build(self) -> Catalog {
        debug!(locales = ?self.catalog.locales(), "catalog built");
        self.catalog
    }
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// All locale tags, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let tags: BTreeSet<&str> = self.simple.keys().map(String::as_str).collect();
        #[cfg(feature = "fluent")]
        let tags = {
            let mut tags = tags;
            tags.extend(self.fluent.keys().map(String::as_str));
            tags
        };
        tags.into_iter().collect()
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        let loc = normalize_locale(locale);
        #[cfg(feature = "fluent")]
        {
            if self.fluent.contains_key(&loc) {
                return true;
            }
        }
        self.simple.contains_key(&loc)
    }

    /// The simple table of `locale`, if one was loaded.
    pub fn messages(&self, locale: &str) -> Option<&LocaleMessages> {
        self.simple.get(&normalize_locale(locale))
    }

    pub fn contains_key(&self, locale: &str, key: &str) -> bool {
        let loc = normalize_locale(locale);
        #[cfg(feature = "fluent")]
        {
            if self.fluent.get(&loc).is_some_and(|f| f.contains_key(key)) {
                return true;
            }
        }
        self.simple.get(&loc).is_some_and(|m| m.contains_key(key))
    }

    /// Raw template of `key` in `locale`'s simple table. No fallback.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.simple.get(&normalize_locale(locale))?.get(key)
    }

    /// Format `msg` in exactly `locale`. No fallback.
    pub fn format(&self, locale: &str, msg: &Message) -> Option<String> {
        let loc = normalize_locale(locale);
        #[cfg(feature = "fluent")]
        {
            if let Some(s) = self.fluent.get(&loc).and_then(|f| f.format_message(msg)) {
                return Some(s);
            }
        }
        self.simple.get(&loc)?.format_message(msg)
    }

    /// Pick the best available locale for a list of requested tags, in order
    /// of preference. `fr-CA` matches `fr` when no `fr-CA` table exists.
    pub fn negotiate<S: AsRef<str>>(&self, requested: &[S]) -> Option<&str> {
        let available = self.locales();
        requested
            .iter()
            .flat_map(|r| locale_candidates(r.as_ref()))
            .find_map(|cand| {
                available
                    .iter()
                    .copied()
                    .find(|a| a.eq_ignore_ascii_case(&cand))
            })
    }

    /// Keys of `reference`'s simple table that `locale` does not define in
    /// either backend, sorted.
    pub fn missing_keys(&self, reference: &str, locale: &str) -> Vec<String> {
        let Some(reference) = self.messages(reference) else {
            return Vec::new();
        };
        reference
            .keys()
            .filter(|key| !self.contains_key(locale, key))
            .map(str::to_string)
            .collect()
    }

    /// Per-locale coverage relative to the keys of `reference`.
    pub fn coverage_report(&self, reference: &str) -> CoverageReport {
        let total_keys = self.messages(reference).map_or(0, LocaleMessages::len);
        let locales = self
            .locales()
            .into_iter()
            .map(|tag| {
                let missing = self.missing_keys(reference, tag);
                LocaleCoverage {
                    locale: tag.to_string(),
                    present: total_keys.saturating_sub(missing.len()),
                    missing,
                }
            })
            .collect();

        CoverageReport {
            reference: reference.to_string(),
            total_keys,
            locales,
        }
    }
}

/// How completely each locale covers the reference locale's keys.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageReport {
    pub reference: String,
    pub total_keys: usize,
    pub locales: Vec<LocaleCoverage>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocaleCoverage {
    pub locale: String,
    pub present: usize,
    pub missing: Vec<String>,
}

impl LocaleCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleCoverage::is_complete)
    }
}
