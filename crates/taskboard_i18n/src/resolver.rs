//! The message catalog resolver.
//!
//! A [`Resolver`] pairs a shared, immutable [`Catalog`] with an active and a
//! fallback locale. Resolution never fails:
//!
//! 1. the active locale's entry,
//! 2. else the fallback locale's entry,
//! 3. else the key itself, so a missing translation stays visible on screen.
//!
//! The resolver is a plain value. UI code that wants one process-wide
//! instance goes through [`I18nState`](crate::I18nState); servers should give
//! each request its own resolver via [`Resolver::scoped`].

use std::sync::Arc;

use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::keys::MessageKey;
use crate::label::{ArgValue, Label, Message};
use crate::locale::{normalize_locale, resolution_chain};
use crate::I18nError;

#[derive(Clone, Debug)]
pub struct Resolver {
    catalog: Arc<Catalog>,
    locale: String,
    fallback: String,
}

impl Resolver {
    /// Build a resolver active at `default_locale`.
    ///
    /// Both `default_locale` and `fallback_locale` must name locales present
    /// in `catalog`, otherwise this fails with [`I18nError::Configuration`].
    pub fn new(
        catalog: impl Into<Arc<Catalog>>,
        default_locale: &str,
        fallback_locale: &str,
    ) -> Result<Self, I18nError> {
        let catalog = catalog.into();
        let locale = normalize_locale(default_locale);
        let fallback = normalize_locale(fallback_locale);

        for (role, tag) in [("default", &locale), ("fallback", &fallback)] {
            if !catalog.contains_locale(tag) {
                return Err(I18nError::Configuration(format!(
                    "{role} locale `{tag}` is not in the catalog (available: {:?})",
                    catalog.locales()
                )));
            }
        }

        Ok(Self {
            catalog,
            locale,
            fallback,
        })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The active locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback
    }

    /// Switch the active locale.
    ///
    /// Unknown locales are rejected with [`I18nError::UnknownLocale`] and the
    /// active locale stays as it was. Returns whether the locale changed.
    pub fn set_locale(&mut self, locale: &str) -> Result<bool, I18nError> {
        let loc = self.checked_locale(locale)?;
        if loc == self.locale {
            return Ok(false);
        }
        debug!("Resolver::set_locale: {} -> {}", self.locale, loc);
        self.locale = loc;
        Ok(true)
    }

    /// A resolver sharing this catalog and fallback, active at `locale`.
    ///
    /// Meant for request-scoped resolution where the active locale must not
    /// be shared between callers.
    pub fn scoped(&self, locale: &str) -> Result<Resolver, I18nError> {
        let locale = self.checked_locale(locale)?;
        Ok(Resolver {
            catalog: Arc::clone(&self.catalog),
            locale,
            fallback: self.fallback.clone(),
        })
    }

    fn checked_locale(&self, locale: &str) -> Result<String, I18nError> {
        let loc = normalize_locale(locale);
        if self.catalog.contains_locale(&loc) {
            Ok(loc)
        } else {
            Err(I18nError::UnknownLocale(loc))
        }
    }

    /// Translate `key` without arguments.
    pub fn resolve(&self, key: &str) -> String {
        self.tr(&Message::new(key.to_string()))
    }

    /// Translate `key`, substituting `{name}` markers from `args`.
    pub fn resolve_with(&self, key: &str, args: &[(&str, ArgValue)]) -> String {
        let msg = args
            .iter()
            .fold(Message::new(key.to_string()), |m, (name, value)| {
                m.arg(name.to_string(), value.clone())
            });
        self.tr(&msg)
    }

    pub fn resolve_key(&self, key: MessageKey) -> String {
        self.tr(&Message::from(key))
    }

    /// Translate a message through the active -> fallback chain.
    pub fn tr(&self, msg: &Message) -> String {
        for (step, loc) in resolution_chain(&self.locale, &self.fallback)
            .into_iter()
            .enumerate()
        {
            if let Some(s) = self.catalog.format(loc, msg) {
                if step > 0 {
                    trace!(
                        message_id = %msg.id,
                        locale = %self.locale,
                        fallback = %loc,
                        "resolved from fallback locale"
                    );
                }
                return s;
            }
        }

        debug!(
            message_id = %msg.id,
            locale = %self.locale,
            "missing translation, showing key"
        );
        msg.id.to_string()
    }

    pub fn resolve_label(&self, label: &Label) -> String {
        match label {
            Label::Raw(s) => s.clone(),
            Label::Msg(m) => self.tr(m),
        }
    }
}
