//! Domain identifiers.
//!
//! `TaskId` は store が払い出す連番です。ワイヤ上では不透明な文字列
//! （`"1"`, `"2"`, ...）として扱い、数値であることにクライアントは依存しません。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a Task, unique within a process lifetime.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    /// The first id handed out by a fresh store.
    pub const FIRST: TaskId = TaskId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id allocated right after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The string is not an id this process could have handed out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid task id: {0:?}")]
pub struct InvalidTaskId(pub String);

impl FromStr for TaskId {
    type Err = InvalidTaskId;

    /// Only the exact rendered form names an id: `"01"` and `"+1"` do not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .ok()
            .map(Self)
            .filter(|id| id.to_string() == s)
            .ok_or_else(|| InvalidTaskId(s.to_string()))
    }
}

impl Serialize for TaskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
