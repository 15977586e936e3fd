//! Priority markers and display colors.
//!
//! Both are closed whitelists. They are validated independently: a color is
//! not required to be the one paired with the task's priority, and two colors
//! (purple, orange) have no paired priority at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority marker attached to a task at creation.
///
/// The four non-default markers follow the Eisenhower quadrants. On the wire a
/// marker is its emoticon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "🔥")]
    UrgentImportant,
    #[serde(rename = "⭐")]
    Important,
    #[serde(rename = "⚡")]
    Urgent,
    #[serde(rename = "💡")]
    Low,
    #[default]
    #[serde(rename = "📋")]
    Default,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Priority::UrgentImportant,
        Priority::Important,
        Priority::Urgent,
        Priority::Low,
        Priority::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::UrgentImportant => "🔥",
            Priority::Important => "⭐",
            Priority::Urgent => "⚡",
            Priority::Low => "💡",
            Priority::Default => "📋",
        }
    }

    pub fn paired_color(&self) -> Color {
        match self {
            Priority::UrgentImportant => Color::Red,
            Priority::Important => Color::Blue,
            Priority::Urgent => Color::Yellow,
            Priority::Low => Color::Green,
            Priority::Default => Color::Grey,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the whitelisted markers or colors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{value:?} is not a valid {what}")]
pub struct UnknownMarker {
    pub what: &'static str,
    pub value: String,
}

impl FromStr for Priority {
    type Err = UnknownMarker;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownMarker {
                what: "priority",
                value: s.to_string(),
            })
    }
}

/// Display color attached to a task at creation. On the wire a color is its
/// lowercase hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "#dc3545")]
    Red,
    #[serde(rename = "#0d6efd")]
    Blue,
    #[serde(rename = "#ffc107")]
    Yellow,
    #[serde(rename = "#28a745")]
    Green,
    #[serde(rename = "#6f42c1")]
    Purple,
    #[serde(rename = "#fd7e14")]
    Orange,
    #[default]
    #[serde(rename = "#6c757d")]
    Grey,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::Green,
        Color::Purple,
        Color::Orange,
        Color::Grey,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "#dc3545",
            Color::Blue => "#0d6efd",
            Color::Yellow => "#ffc107",
            Color::Green => "#28a745",
            Color::Purple => "#6f42c1",
            Color::Orange => "#fd7e14",
            Color::Grey => "#6c757d",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = UnknownMarker;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownMarker {
                what: "color",
                value: s.to_string(),
            })
    }
}
