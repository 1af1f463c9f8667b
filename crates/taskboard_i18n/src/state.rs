use std::sync::{Mutex, OnceLock, PoisonError, RwLock, RwLockReadGuard};

use tracing::{debug, info};

use crate::keys::MessageKey;
use crate::label::{ArgValue, Label, Message};
use crate::resolver::Resolver;
use crate::I18nError;

/// Global i18n singleton.
static I18N_STATE: OnceLock<I18nState> = OnceLock::new();

/// Global redraw callback - set by the app layer to re-render after a locale switch
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function.
///
/// The app should set this to whatever re-renders the board.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = Some(callback);
}

fn trigger_redraw() {
    let callback = *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(cb) = callback {
        cb();
    }
}

/// Process-wide resolver for UI code that has no context object at hand.
///
/// Holds one [`Resolver`]; only [`I18nState::set_locale`] mutates it.
pub struct I18nState {
    resolver: RwLock<Resolver>,
}

impl I18nState {
    /// Install the global state. Fails if it was already installed.
    pub fn init(resolver: Resolver) -> Result<&'static I18nState, I18nError> {
        let locale = resolver.locale().to_string();
        let fallback = resolver.fallback_locale().to_string();

        let mut installed = false;
        let state = I18N_STATE.get_or_init(|| {
            installed = true;
            I18nState {
                resolver: RwLock::new(resolver),
            }
        });
        if !installed {
            return Err(I18nError::Configuration(
                "i18n state is already initialized".to_string(),
            ));
        }

        info!(%locale, %fallback, "i18n initialized");
        Ok(state)
    }

    /// The global state.
    ///
    /// # Panics
    ///
    /// If [`I18nState::init`] has not run yet.
    pub fn get() -> &'static I18nState {
        I18N_STATE
            .get()
            .expect("I18nState not initialized. Call I18nState::init() at app startup.")
    }

    pub fn try_get() -> Option<&'static I18nState> {
        I18N_STATE.get()
    }

    fn read(&self) -> RwLockReadGuard<'_, Resolver> {
        self.resolver.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn locale(&self) -> String {
        self.read().locale().to_string()
    }

    pub fn fallback_locale(&self) -> String {
        self.read().fallback_locale().to_string()
    }

    /// Switch the active locale and request a redraw if it changed.
    ///
    /// Same policy as [`Resolver::set_locale`]: unknown locales are an error
    /// and leave the state untouched.
    pub fn set_locale(&self, locale: &str) -> Result<(), I18nError> {
        let changed = self
            .resolver
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_locale(locale)?;

        if changed {
            debug!(locale = %self.locale(), "locale switched, requesting redraw");
            trigger_redraw();
        }
        Ok(())
    }

    /// A copy of the current resolver, for request-scoped use.
    pub fn snapshot(&self) -> Resolver {
        self.read().clone()
    }

    pub fn resolve(&self, key: &str) -> String {
        self.read().resolve(key)
    }

    pub fn resolve_with(&self, key: &str, args: &[(&str, ArgValue)]) -> String {
        self.read().resolve_with(key, args)
    }

    pub fn resolve_key(&self, key: MessageKey) -> String {
        self.read().resolve_key(key)
    }

    pub fn tr(&self, msg: &Message) -> String {
        self.read().tr(msg)
    }

    pub fn resolve_label(&self, label: &Label) -> String {
        self.read().resolve_label(label)
    }
}
