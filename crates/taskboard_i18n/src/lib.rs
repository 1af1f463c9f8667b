//! Localization for the taskboard to-do app
//!
//! - [`Catalog`]: immutable locale -> message tables (YAML / `key = value`,
//!   optionally Fluent `.ftl` behind the `fluent` feature)
//! - [`Resolver`]: active + fallback locale over a shared catalog; a missing
//!   translation degrades to the fallback locale, then to the key itself
//! - [`I18nState`]: optional process-wide resolver with a redraw hook for
//!   locale switches
//! - [`MessageKey`]: compile-time checked keys of the board UI
//! - [`board`]: the built-in `en` / `fr` strings

pub mod board;
mod catalog;
pub mod config;
mod error;
mod interpolate;
mod keys;
mod label;
mod locale;
mod resolver;
mod simple;
mod state;

#[cfg(feature = "fluent")]
mod fluent;

pub use catalog::{Catalog, CatalogBuilder, CoverageReport, LocaleCoverage};
pub use config::{CatalogFormat, CatalogSource, I18nConfig};
pub use error::I18nError;
pub use interpolate::interpolate;
pub use keys::{MessageKey, UnknownMessageKey};
pub use label::{ArgValue, Label, Message};
pub use locale::{locale_candidates, normalize_locale};
pub use resolver::Resolver;
pub use simple::{LocaleMessages, SimpleParseError};
pub use state::{set_redraw_callback, I18nState};

#[cfg(feature = "fluent")]
pub use fluent::FluentMessages;

/// Translate a label using the global [`I18nState`].
///
/// If the state isn't initialized, this degrades gracefully:
/// - `Label::Raw` returns its raw text
/// - `Label::Msg` returns the key id
pub fn resolve_label(label: &Label) -> String {
    if let Some(st) = I18nState::try_get() {
        st.resolve_label(label)
    } else {
        match label {
            Label::Raw(s) => s.clone(),
            Label::Msg(m) => m.id.to_string(),
        }
    }
}

/// Build a [`Label`] from a key and optional named arguments.
///
/// - `t!("appTitle")`
/// - `t!(MessageKey::AddTaskButton)`
/// - `t!("openTasks", { count: 3, owner: name })`
#[macro_export]
macro_rules! t {
    ($id:expr, { $($name:ident : $value:expr),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut m = $crate::Message::from($id);
        $(
            m = m.arg(stringify!($name), $value);
        )*
        $crate::Label::msg(m)
    }};
    ($id:expr) => {
        $crate::Label::msg($crate::Message::from($id))
    };
}
