use serde::{Deserialize, Serialize};
use std::fmt;

/// A single selectable entry of the dropdown.
///
/// A missing `value` in configuration deserializes to an empty string and
/// renders as a blank row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DropdownOption {
    #[serde(default)]
    pub value: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl fmt::Display for DropdownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<&str> for DropdownOption {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[must_use]
pub fn demo_options() -> Vec<DropdownOption> {
    ["One", "Two", "Three", "Four", "Five"]
        .into_iter()
        .map(DropdownOption::from)
        .collect()
}

/// Returns the positions in `options` whose value contains `text`.
///
/// Matching is a case-sensitive substring test on the raw text; an empty
/// text matches everything. Order follows `options`.
#[must_use]
pub fn filter_options(options: &[DropdownOption], text: &str) -> Vec<usize> {
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| text.is_empty() || option.value.contains(text))
        .map(|(i, _)| i)
        .collect()
}
