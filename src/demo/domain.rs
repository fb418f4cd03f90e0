// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    UsEnglish,
    UkEnglish,
    CanadianFrench,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::UsEnglish => "en-US",
            Language::UkEnglish => "en-GB",
            Language::CanadianFrench => "fr-CA",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-US" => Ok(Language::UsEnglish),
            "en-GB" => Ok(Language::UkEnglish),
            "fr-CA" => Ok(Language::CanadianFrench),
            other => anyhow::bail!("unsupported language '{}', expected en-US, en-GB or fr-CA", other),
        }
    }
}

/// A translation produced by one translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub translator: String,
    pub text: String,
}

/// A request to translate `text` between two languages.
///
/// Parallel engines may work on the same item, so every field they write
/// sits behind its own lock.
#[derive(Debug)]
pub struct TranslatableItem {
    pub from: Language,
    pub to: Language,
    pub text: String,
    translations: Mutex<Vec<Translation>>,
    published: Mutex<Vec<String>>,
    notifications: Mutex<Vec<String>>,
    translated: AtomicBool,
}

impl TranslatableItem {
    pub fn new(from: Language, to: Language, text: impl Into<String>) -> Self {
        Self {
            from,
            to,
            text: text.into(),
            translations: Mutex::new(Vec::new()),
            published: Mutex::new(Vec::new()),
            notifications: Mutex::new(Vec::new()),
            translated: AtomicBool::new(false),
        }
    }

    pub fn is_translated(&self) -> bool {
        self.translated.load(Ordering::SeqCst)
    }

    pub(crate) fn mark_translated(&self) {
        self.translated.store(true, Ordering::SeqCst);
    }

    pub(crate) fn add_translation(&self, translation: Translation) -> anyhow::Result<()> {
        lock(&self.translations)?.push(translation);
        Ok(())
    }

    /// Most recent translation, if any translator produced one.
    pub fn latest_translation(&self) -> anyhow::Result<Option<Translation>> {
        Ok(lock(&self.translations)?.last().cloned())
    }

    pub fn translations(&self) -> anyhow::Result<Vec<Translation>> {
        Ok(lock(&self.translations)?.clone())
    }

    pub(crate) fn publish(&self, text: String) -> anyhow::Result<()> {
        lock(&self.published)?.push(text);
        Ok(())
    }

    pub fn published(&self) -> anyhow::Result<Vec<String>> {
        Ok(lock(&self.published)?.clone())
    }

    pub(crate) fn notify(&self, message: String) -> anyhow::Result<()> {
        lock(&self.notifications)?.push(message);
        Ok(())
    }

    pub fn notifications(&self) -> anyhow::Result<Vec<String>> {
        Ok(lock(&self.notifications)?.clone())
    }
}

fn lock<V>(mutex: &Mutex<V>) -> anyhow::Result<std::sync::MutexGuard<'_, V>> {
    mutex
        .lock()
        .map_err(|_| anyhow::anyhow!("translatable item lock poisoned"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip_through_parse() {
        for language in [Language::UsEnglish, Language::UkEnglish, Language::CanadianFrench] {
            assert_eq!(language.code().parse::<Language>().unwrap(), language);
        }
        assert!("de-DE".parse::<Language>().is_err());
    }

    #[test]
    fn test_latest_translation() {
        let item = TranslatableItem::new(Language::UsEnglish, Language::UkEnglish, "color");
        assert_eq!(item.latest_translation().unwrap(), None);

        item.add_translation(Translation {
            translator: "dictionary".into(),
            text: "colour".into(),
        })
        .unwrap();
        assert_eq!(item.latest_translation().unwrap().unwrap().text, "colour");
    }
}
