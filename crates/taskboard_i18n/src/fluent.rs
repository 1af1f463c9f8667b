use std::fmt;

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use unic_langid::LanguageIdentifier;

use crate::label::{ArgValue, Message};
use crate::I18nError;

/// A compiled Fluent (.ftl) resource for one locale.
pub struct FluentMessages {
    locale: String,
    bundle: FluentBundle<FluentResource>,
}

impl fmt::Debug for FluentMessages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentMessages")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl FluentMessages {
    pub fn parse(locale: &str, ftl: &str) -> Result<Self, I18nError> {
        let langid: LanguageIdentifier = locale
            .parse()
            .map_err(|e| I18nError::Fluent(format!("invalid locale `{locale}`: {e}")))?;

        let res = FluentResource::try_new(ftl.to_string())
            .map_err(|(_res, errs)| I18nError::Fluent(format!("ftl parse error: {errs:?}")))?;

        let mut bundle = FluentBundle::new_concurrent(vec![langid]);
        // Isolation marks around placeables would leak into plain UI text.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(res)
            .map_err(|errs| I18nError::Fluent(format!("ftl add_resource error: {errs:?}")))?;

        Ok(Self {
            locale: locale.to_string(),
            bundle,
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.bundle.has_message(key)
    }

    pub fn format_message(&self, msg: &Message) -> Option<String> {
        let pattern = self.bundle.get_message(&msg.id)?.value()?;

        let mut args = FluentArgs::new();
        for (k, v) in &msg.args {
            let value = match v {
                ArgValue::Str(s) => FluentValue::from(s.as_str()),
                ArgValue::Int(i) => FluentValue::from(*i),
                ArgValue::Float(f) => FluentValue::from(*f),
                // Fluent has no native bool.
                ArgValue::Bool(b) => FluentValue::from(b.to_string()),
            };
            args.set(k.as_ref(), value);
        }

        let mut errs = Vec::new();
        let s = self
            .bundle
            .format_pattern(pattern, Some(&args), &mut errs)
            .to_string();
        if !errs.is_empty() {
            tracing::warn!(
                locale = %self.locale,
                message_id = %msg.id,
                errors = ?errs,
                "Fluent formatting errors"
            );
        }
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FTL: &str = "
addTaskButton = Ajouter une tâche
openTasks = { $count } tâches ouvertes pour { $name }
";

    #[test]
    fn formats_plain_and_parameterized_messages() {
        let fr = FluentMessages::parse("fr", FTL).unwrap();
        assert!(fr.contains_key("addTaskButton"));
        assert_eq!(
            fr.format_message(&Message::new("addTaskButton")),
            Some("Ajouter une tâche".to_string())
        );
        assert_eq!(
            fr.format_message(&Message::new("openTasks").arg("count", 2).arg("name", "Ada")),
            Some("2 tâches ouvertes pour Ada".to_string())
        );
        assert_eq!(fr.format_message(&Message::new("missing")), None);
    }

    #[test]
    fn rejects_invalid_locale_and_syntax() {
        assert!(matches!(
            FluentMessages::parse("not a locale!", FTL),
            Err(I18nError::Fluent(_))
        ));
        assert!(matches!(
            FluentMessages::parse("fr", "= broken"),
            Err(I18nError::Fluent(_))
        ));
    }
}
