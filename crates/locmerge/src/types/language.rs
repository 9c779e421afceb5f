use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// The authoritative, ordered list of language names.
///
/// Table columns are aligned against this order and every translation array
/// has exactly one slot per entry. Names are matched exactly, so `"English"`
/// and `"english"` are different languages.
///
/// # Example
///
/// ```
/// use locmerge::LanguageSet;
///
/// let languages = LanguageSet::new(["English", "Français", "Deutsch"]);
/// assert_eq!(languages.index_of("Français"), Some(1));
/// assert_eq!(languages.index_of("français"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageSet {
    names: Vec<String>,
}

impl LanguageSet {
    /// Create a language set from names in authoritative order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Position of `name` in the set, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| candidate == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LanguageSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Display for LanguageSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.names.join(", "))
    }
}
