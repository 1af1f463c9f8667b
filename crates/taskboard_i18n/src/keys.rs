//! Statically known message keys of the task board UI.
//!
//! UI code should prefer [`MessageKey`] over string literals: a typo becomes
//! a compile error instead of a key rendered on screen. String keys are still
//! accepted everywhere for dynamic lookups.

use std::fmt;
use std::str::FromStr;

/// Every message the task board renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    AppTitle,
    ToDo,
    InProgress,
    Done,
    TaskTitlePlaceholder,
    TaskDescriptionPlaceholder,
    AddTaskButton,
    CompleteButton,
    UndoButton,
    DeleteButton,
    BugTag,
    FeatureTag,
    RefactorTag,
}

impl MessageKey {
    /// All keys, in the order the board declares them.
    pub const ALL: [MessageKey; 13] = [
        MessageKey::AppTitle,
        MessageKey::ToDo,
        MessageKey::InProgress,
        MessageKey::Done,
        MessageKey::TaskTitlePlaceholder,
        MessageKey::TaskDescriptionPlaceholder,
        MessageKey::AddTaskButton,
        MessageKey::CompleteButton,
        MessageKey::UndoButton,
        MessageKey::DeleteButton,
        MessageKey::BugTag,
        MessageKey::FeatureTag,
        MessageKey::RefactorTag,
    ];

    /// The catalog key for this message.
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageKey::AppTitle => "appTitle",
            MessageKey::ToDo => "toDo",
            MessageKey::InProgress => "inProgress",
            MessageKey::Done => "done",
            MessageKey::TaskTitlePlaceholder => "taskTitlePlaceholder",
            MessageKey::TaskDescriptionPlaceholder => "taskDescriptionPlaceholder",
            MessageKey::AddTaskButton => "addTaskButton",
            MessageKey::CompleteButton => "completeButton",
            MessageKey::UndoButton => "undoButton",
            MessageKey::DeleteButton => "deleteButton",
            MessageKey::BugTag => "bugTag",
            MessageKey::FeatureTag => "featureTag",
            MessageKey::RefactorTag => "refactorTag",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`MessageKey`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMessageKey(pub String);

impl fmt::Display for UnknownMessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown message key `{}`", self.0)
    }
}

impl std::error::Error for UnknownMessageKey {}

impl FromStr for MessageKey {
    type Err = UnknownMessageKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownMessageKey(s.to_string()))
    }
}

impl AsRef<str> for MessageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
