use serde::Serialize;

/// Per-language slots for a single translation key.
///
/// Slot `i` holds the text for language `i` of the [`LanguageSet`] the array
/// was created against. A slot is either empty or holds non-empty text; empty
/// strings are never stored.
///
/// [`LanguageSet`]: crate::LanguageSet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Translations {
    slots: Vec<Option<String>>,
}

impl Translations {
    /// An array of `len` empty slots.
    pub fn empty(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Text in slot `index`, or `None` when the slot is empty or out of range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(Option::as_deref)
    }

    /// Write `value` into slot `index`.
    ///
    /// Empty values and out-of-range indices are ignored so a blank cell can
    /// never erase text supplied earlier.
    pub fn set(&mut self, index: usize, value: &str) {
        if value.is_empty() {
            return;
        }
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(value.to_string());
        }
    }

    /// Number of slots, filled or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding text.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
