//! Node labels for graphs whose nodes mix numbers and names.

use std::convert::Infallible;
use std::fmt::{self, Display};
use std::str::FromStr;

/// A node label that is either an integer or a name.
///
/// Integers sort before names, so a set of labels prints as
/// `1, 2, A, B` rather than interleaving the two kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Int(i64),
    Name(String),
}

impl Label {
    /// Returns the integer value, if this is an integer label.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Label::Int(value) => Some(*value),
            Label::Name(_) => None,
        }
    }

    /// Returns the name, if this is a name label.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Label::Int(_) => None,
            Label::Name(name) => Some(name),
        }
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Int(value)
    }
}

impl From<i32> for Label {
    fn from(value: i32) -> Self {
        Label::Int(value.into())
    }
}

impl From<char> for Label {
    fn from(value: char) -> Self {
        Label::Name(value.to_string())
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Name(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Name(value)
    }
}

/// Parses integers as [`Label::Int`] and anything else as [`Label::Name`].
impl FromStr for Label {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(value) => Label::Int(value),
            Err(_) => Label::Name(s.to_string()),
        })
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(value) => write!(f, "{value}"),
            Label::Name(name) => f.write_str(name),
        }
    }
}
