mod language;
mod translations;

pub use language::LanguageSet;
pub use translations::Translations;
