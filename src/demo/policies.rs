// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Input and output policies for translation requests.

use async_trait::async_trait;
use std::time::Duration;

use crate::demo::domain::{Language, TranslatableItem};
use crate::traits::{InputPolicy, OutputPolicy};

pub struct NotYetTranslated;

impl InputPolicy<TranslatableItem> for NotYetTranslated {
    fn evaluate(&self, item: &TranslatableItem) -> bool {
        !item.is_translated()
    }

    fn name(&self) -> &str {
        "not_yet_translated"
    }
}

/// Accepts items translated from `language`.
pub struct FromLanguage(pub Language);

impl InputPolicy<TranslatableItem> for FromLanguage {
    fn evaluate(&self, item: &TranslatableItem) -> bool {
        item.from == self.0
    }

    fn name(&self) -> &str {
        "from_language"
    }
}

/// Accepts items translated to `language`.
pub struct ToLanguage(pub Language);

impl InputPolicy<TranslatableItem> for ToLanguage {
    fn evaluate(&self, item: &TranslatableItem) -> bool {
        item.to == self.0
    }

    fn name(&self) -> &str {
        "to_language"
    }
}

pub struct ContainsNumericText;

impl InputPolicy<TranslatableItem> for ContainsNumericText {
    fn evaluate(&self, item: &TranslatableItem) -> bool {
        item.text.chars().any(|c| c.is_ascii_digit())
    }

    fn name(&self) -> &str {
        "contains_numeric_text"
    }
}

/// Publishes the latest translation.
pub struct PublishTranslation;

#[async_trait]
impl OutputPolicy<TranslatableItem> for PublishTranslation {
    async fn apply(&self, item: &TranslatableItem) -> anyhow::Result<()> {
        let latest = item
            .latest_translation()?
            .ok_or_else(|| anyhow::anyhow!("no translation to publish for '{}'", item.text))?;

        tokio::time::sleep(Duration::from_millis(5)).await;
        tracing::info!(translator = %latest.translator, text = %latest.text, "Published translation");
        item.publish(latest.text)
    }

    fn name(&self) -> &str {
        "publish_translation"
    }
}

pub struct MarkItemTranslated;

#[async_trait]
impl OutputPolicy<TranslatableItem> for MarkItemTranslated {
    async fn apply(&self, item: &TranslatableItem) -> anyhow::Result<()> {
        item.mark_translated();
        Ok(())
    }

    fn name(&self) -> &str {
        "mark_item_translated"
    }
}

pub struct SendTranslationSuccessEmail;

#[async_trait]
impl OutputPolicy<TranslatableItem> for SendTranslationSuccessEmail {
    async fn apply(&self, item: &TranslatableItem) -> anyhow::Result<()> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        item.notify(format!(
            "Your {} -> {} translation of '{}' is ready",
            item.from, item.to, item.text
        ))
    }

    fn name(&self) -> &str {
        "send_translation_success_email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_policies() {
        let item = TranslatableItem::new(Language::UsEnglish, Language::CanadianFrench, "hello");

        assert!(FromLanguage(Language::UsEnglish).evaluate(&item));
        assert!(!FromLanguage(Language::UkEnglish).evaluate(&item));
        assert!(ToLanguage(Language::CanadianFrench).evaluate(&item));
        assert!(!ContainsNumericText.evaluate(&item));
        assert!(NotYetTranslated.evaluate(&item));
    }

    #[tokio::test]
    async fn test_publish_without_translation_fails() {
        let item = TranslatableItem::new(Language::UsEnglish, Language::UkEnglish, "color");
        assert!(PublishTranslation.apply(&item).await.is_err());
        assert!(item.published().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mark_translated_closes_the_gate() {
        let item = TranslatableItem::new(Language::UsEnglish, Language::UkEnglish, "color");
        MarkItemTranslated.apply(&item).await.unwrap();
        assert!(!NotYetTranslated.evaluate(&item));
    }
}
