use std::collections::BTreeMap;

use thiserror::Error;

use crate::interpolate::interpolate;
use crate::label::Message;

const MAX_ENTRIES: usize = 10_000;
const MAX_KEY_BYTES: usize = 128;
const MAX_VALUE_BYTES: usize = 16 * 1024;

#[derive(Debug, Error)]
pub enum SimpleParseError {
    #[error("yaml catalog error: {0}")]
    Yaml(String),

    #[error("catalog syntax error at line {line}: {msg}")]
    Syntax { line: usize, msg: String },
}

/// `[A-Za-z0-9][A-Za-z0-9_.-]*`, at most [`MAX_KEY_BYTES`].
fn check_key(key: &str) -> Result<(), String> {
    let mut it = key.chars();
    let valid = match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {
            it.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        }
        _ => false,
    };
    if !valid {
        return Err(format!(
            "invalid key `{key}` (allowed: [A-Za-z0-9][A-Za-z0-9_.-]*)"
        ));
    }
    if key.len() > MAX_KEY_BYTES {
        return Err(format!("key `{key}` is too long (max {MAX_KEY_BYTES} bytes)"));
    }
    Ok(())
}

fn check_value(key: &str, value: &str) -> Result<(), String> {
    if value.len() > MAX_VALUE_BYTES {
        return Err(format!(
            "value for key `{key}` is too long (max {MAX_VALUE_BYTES} bytes)"
        ));
    }
    Ok(())
}

/// Does the first meaningful line look like `key: value` rather than
/// `key = value`?
fn looks_like_yaml(src: &str) -> bool {
    for line in src.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        return match (line.find(':'), line.find('=')) {
            (Some(colon), Some(eq)) => colon < eq,
            (Some(_), None) => true,
            _ => false,
        };
    }
    false
}

/// The flat message table of a single locale.
///
/// Two source formats are accepted by [`LocaleMessages::parse`]:
/// - a YAML mapping of string keys to string values (preferred)
/// - legacy `key = value` lines, with `#`/`//` comments and optional
///   `"..."`/`'...'` quoting supporting `\n`, `\t`, `\\` and quote escapes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocaleMessages {
    entries: BTreeMap<String, String>,
}

impl LocaleMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `other` into `self`; entries of `other` win.
    pub fn merge(&mut self, other: LocaleMessages) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn parse(src: &str) -> Result<Self, SimpleParseError> {
        match serde_yaml::from_str::<serde_yaml::Value>(src) {
            Ok(serde_yaml::Value::Mapping(map)) => Self::from_yaml(map),
            Ok(serde_yaml::Value::Null) if src.trim().is_empty() => Ok(Self::new()),
            Ok(_) => Self::parse_legacy(src),
            Err(e) if looks_like_yaml(src) => {
                Err(SimpleParseError::Yaml(format!("yaml parse error: {e}")))
            }
            Err(_) => Self::parse_legacy(src),
        }
    }

    fn from_yaml(map: serde_yaml::Mapping) -> Result<Self, SimpleParseError> {
        if map.len() > MAX_ENTRIES {
            return Err(SimpleParseError::Yaml(format!(
                "too many entries (max {MAX_ENTRIES})"
            )));
        }

        let mut out = Self::new();
        for (k, v) in map {
            let Some(key) = k.as_str() else {
                return Err(SimpleParseError::Yaml(
                    "yaml keys must be strings".to_string(),
                ));
            };
            check_key(key).map_err(SimpleParseError::Yaml)?;
            let Some(value) = v.as_str() else {
                return Err(SimpleParseError::Yaml(format!(
                    "yaml value for key `{key}` must be a string"
                )));
            };
            check_value(key, value).map_err(SimpleParseError::Yaml)?;
            out.insert(key, value);
        }
        Ok(out)
    }

    fn parse_legacy(src: &str) -> Result<Self, SimpleParseError> {
        let mut out = Self::new();
        for (idx, raw) in src.lines().enumerate() {
            let line_no = idx + 1;
            let syntax = |msg: String| SimpleParseError::Syntax { line: line_no, msg };

            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(syntax("expected `key = value`".to_string()));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(syntax("empty key".to_string()));
            }
            check_key(key).map_err(syntax)?;

            let value = unquote(strip_inline_comment(value.trim())).map_err(syntax)?;
            check_value(key, &value).map_err(syntax)?;

            if out.len() >= MAX_ENTRIES && !out.contains_key(key) {
                return Err(syntax(format!("too many entries (max {MAX_ENTRIES})")));
            }
            out.insert(key, value);
        }
        Ok(out)
    }

    /// Look up `msg.id` and interpolate its arguments.
    ///
    /// Without arguments the stored text is returned as is; brace escapes
    /// only collapse when substitution runs.
    pub fn format_message(&self, msg: &Message) -> Option<String> {
        let template = self.get(&msg.id)?;
        if msg.args.is_empty() {
            return Some(template.to_string());
        }
        Some(interpolate(template, &msg.arg_refs()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleMessages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}

/// Inline comments only count when preceded by whitespace, and never inside
/// a quoted value.
fn strip_inline_comment(value: &str) -> &str {
    let scan_from = match value.chars().next() {
        Some(q @ ('"' | '\'')) => value[1..].rfind(q).map_or(0, |i| i + 2),
        _ => 0,
    };
    let tail = &value[scan_from..];
    let cut = [" #", " //"]
        .iter()
        .filter_map(|marker| tail.find(marker))
        .min();
    match cut {
        Some(pos) => value[..scan_from + pos].trim_end(),
        None => value,
    }
}

fn unquote(s: &str) -> Result<String, String> {
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return unescape(&s[1..s.len() - 1]);
        }
    }
    Ok(s.to_string())
}

fn unescape(s: &str) -> Result<String, String> {
    let mut out = String::with_capacity(s.len());
    let mut it = s.chars();
    while let Some(c) = it.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match it.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            // `\\`, `\"`, `\'` and unknown escapes keep the escaped char.
            Some(other) => out.push(other),
            None => return Err("dangling escape".to_string()),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_yaml_and_lookup() {
        let src = r#"
appTitle: "Developer To-Do Board"
greeting: "Hello, {name}!"
"#;

        let msgs = LocaleMessages::parse(src).unwrap();
        assert_eq!(msgs.get("appTitle"), Some("Developer To-Do Board"));
        assert_eq!(
            msgs.format_message(&Message::new("greeting").arg("name", "Ada")),
            Some("Hello, Ada!".to_string())
        );
        assert_eq!(msgs.format_message(&Message::new("missing")), None);
    }

    #[test]
    fn format_without_args_keeps_stored_text() {
        let msgs: LocaleMessages = [("braces", "Use {{x}} and }} here {name}")]
            .into_iter()
            .collect();
        assert_eq!(
            msgs.format_message(&Message::new("braces")),
            Some("Use {{x}} and }} here {name}".to_string())
        );
        assert_eq!(
            msgs.format_message(&Message::new("braces").arg("name", "Ada")),
            Some("Use {x} and } here Ada".to_string())
        );
    }

    #[test]
    fn parse_legacy_lines() {
        let src = r#"
        # board labels
        toDo = To Do
        addTaskButton = "Add Task"   // quoted
        done = Done # trailing comment
        note = 'line\none'
        "#;

        let msgs = LocaleMessages::parse(src).unwrap();
        assert_eq!(msgs.get("toDo"), Some("To Do"));
        assert_eq!(msgs.get("addTaskButton"), Some("Add Task"));
        assert_eq!(msgs.get("done"), Some("Done"));
        assert_eq!(msgs.get("note"), Some("line\none"));
        assert_eq!(msgs.len(), 4);
    }

    #[test]
    fn empty_source_is_empty_table() {
        assert!(LocaleMessages::parse("").unwrap().is_empty());
        assert!(LocaleMessages::parse("# nothing\n").unwrap().is_empty());
    }

    #[test]
    fn yaml_requires_string_values() {
        let err = LocaleMessages::parse("appTitle: 123\n").unwrap_err();
        assert!(matches!(err, SimpleParseError::Yaml(_)));
    }

    #[test]
    fn key_validation() {
        let err = LocaleMessages::parse("bad key: \"nope\"\n").unwrap_err();
        assert!(matches!(err, SimpleParseError::Yaml(_)));

        let err = LocaleMessages::parse("ok = fine\nbad key = nope\n").unwrap_err();
        assert!(matches!(err, SimpleParseError::Syntax { line: 2, .. }));
    }

    #[test]
    fn legacy_line_without_separator_is_rejected() {
        let err = LocaleMessages::parse("toDo = To Do\njust words\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "catalog syntax error at line 2: expected `key = value`"
        );
    }

    #[test]
    fn dangling_escape_is_rejected() {
        let err = LocaleMessages::parse("k = \"oops\\\"").unwrap_err();
        assert!(matches!(err, SimpleParseError::Syntax { line: 1, .. }));
    }

    #[test]
    fn oversized_value_is_rejected() {
        let src = format!("big = {}", "x".repeat(MAX_VALUE_BYTES + 1));
        assert!(LocaleMessages::parse(&src).is_err());
    }
}
