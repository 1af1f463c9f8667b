use std::borrow::Cow;
use std::fmt;

use crate::keys::MessageKey;

/// A value substituted into a `{name}` placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Str(s) => f.write_str(s),
            ArgValue::Int(i) => write!(f, "{i}"),
            ArgValue::Float(v) => {
                // `2.50` -> `2.5`, `3.0` -> `3`
                let mut s = v.to_string();
                if s.contains('.') {
                    let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
                    s.truncate(trimmed);
                }
                f.write_str(&s)
            }
            ArgValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ArgValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for ArgValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<usize> for ArgValue {
    fn from(v: usize) -> Self {
        Self::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for ArgValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for ArgValue {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<bool> for ArgValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// A message key plus its interpolation arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: Cow<'static, str>,
    pub args: Vec<(Cow<'static, str>, ArgValue)>,
}

impl Message {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: id.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<ArgValue>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    /// Borrowed `(name, value)` view of the arguments.
    pub(crate) fn arg_refs(&self) -> Vec<(&str, &ArgValue)> {
        self.args.iter().map(|(k, v)| (k.as_ref(), v)).collect()
    }
}

impl From<&'static str> for Message {
    fn from(id: &'static str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Message {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<MessageKey> for Message {
    fn from(key: MessageKey) -> Self {
        Self::new(key.as_str())
    }
}

/// Text shown by a widget: either literal or a message to translate.
#[derive(Clone, Debug, PartialEq)]
pub enum Label {
    Raw(String),
    Msg(Message),
}

impl Label {
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    pub fn msg(m: impl Into<Message>) -> Self {
        Self::Msg(m.into())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<Message> for Label {
    fn from(m: Message) -> Self {
        Self::Msg(m)
    }
}

impl From<MessageKey> for Label {
    fn from(key: MessageKey) -> Self {
        Self::Msg(key.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn float_display_drops_trailing_zeros() {
        assert_eq!(ArgValue::from(2.5_f64).to_string(), "2.5");
        assert_eq!(ArgValue::from(3.0_f64).to_string(), "3");
        assert_eq!(ArgValue::from(-0.25_f64).to_string(), "-0.25");
    }

    #[test]
    fn message_from_key_has_no_args() {
        let m = Message::from(MessageKey::AddTaskButton);
        assert_eq!(m.id, "addTaskButton");
        assert!(m.args.is_empty());
    }

    #[test]
    fn label_from_str_is_raw() {
        assert_eq!(Label::from("Inbox"), Label::Raw("Inbox".to_string()));
        assert_eq!(
            Label::from(MessageKey::Done),
            Label::Msg(Message::new("done"))
        );
    }
}
