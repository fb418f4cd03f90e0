// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Stand-in translation backends. Each waits a little to simulate a remote call.

use async_trait::async_trait;
use std::time::Duration;

use crate::demo::domain::{Language, TranslatableItem, Translation};
use crate::traits::AsyncProcessor;

/// A translator that tags the text with its target language after `latency`.
pub struct MockTranslator {
    name: &'static str,
    latency: Duration,
}

impl MockTranslator {
    pub fn new(name: &'static str, latency: Duration) -> Self {
        Self { name, latency }
    }

    pub fn google() -> Self {
        Self::new("google_translator", Duration::from_millis(40))
    }

    pub fn microsoft() -> Self {
        Self::new("microsoft_translator", Duration::from_millis(30))
    }

    pub fn cache() -> Self {
        Self::new("cache_translator", Duration::from_millis(1))
    }

    pub fn single_word() -> Self {
        Self::new("single_word_translator", Duration::from_millis(10))
    }
}

#[async_trait]
impl AsyncProcessor<TranslatableItem> for MockTranslator {
    async fn process(&self, item: &TranslatableItem) -> anyhow::Result<()> {
        tokio::time::sleep(self.latency).await;
        item.add_translation(Translation {
            translator: self.name.to_string(),
            text: format!("[{}] {}", item.to, item.text),
        })
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Swaps US and UK spellings for a handful of known words.
pub struct DictionaryTranslator;

const SPELLINGS: &[(&str, &str)] = &[
    ("color", "colour"),
    ("center", "centre"),
    ("favorite", "favourite"),
    ("organize", "organise"),
];

#[async_trait]
impl AsyncProcessor<TranslatableItem> for DictionaryTranslator {
    async fn process(&self, item: &TranslatableItem) -> anyhow::Result<()> {
        let to_uk = match (item.from, item.to) {
            (Language::UsEnglish, Language::UkEnglish) => true,
            (Language::UkEnglish, Language::UsEnglish) => false,
            (from, to) => anyhow::bail!("dictionary cannot translate {} -> {}", from, to),
        };

        let text = item
            .text
            .split(' ')
            .map(|word| {
                SPELLINGS
                    .iter()
                    .find_map(|(us, uk)| match (to_uk, word) {
                        (true, w) if w == *us => Some(*uk),
                        (false, w) if w == *uk => Some(*us),
                        _ => None,
                    })
                    .unwrap_or(word)
            })
            .collect::<Vec<_>>()
            .join(" ");

        item.add_translation(Translation {
            translator: "dictionary_translator".to_string(),
            text,
        })
    }

    fn name(&self) -> &str {
        "dictionary_translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dictionary_swaps_spellings() {
        let item = TranslatableItem::new(
            Language::UsEnglish,
            Language::UkEnglish,
            "my favorite color",
        );
        DictionaryTranslator.process(&item).await.unwrap();
        assert_eq!(
            item.latest_translation().unwrap().unwrap().text,
            "my favourite colour"
        );

        let item = TranslatableItem::new(Language::UkEnglish, Language::UsEnglish, "city centre");
        DictionaryTranslator.process(&item).await.unwrap();
        assert_eq!(item.latest_translation().unwrap().unwrap().text, "city center");
    }

    #[tokio::test]
    async fn test_dictionary_rejects_french() {
        let item = TranslatableItem::new(Language::CanadianFrench, Language::UsEnglish, "bonjour");
        assert!(DictionaryTranslator.process(&item).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_translator_tags_target_language() {
        let item = TranslatableItem::new(Language::UsEnglish, Language::CanadianFrench, "hello");
        MockTranslator::cache().process(&item).await.unwrap();

        let translation = item.latest_translation().unwrap().unwrap();
        assert_eq!(translation.translator, "cache_translator");
        assert_eq!(translation.text, "[fr-CA] hello");
    }
}
