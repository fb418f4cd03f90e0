// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A nested translation pipeline built from small policies and processors.
//!
//! The aggregate engine only accepts items that are not yet translated and
//! fans out in parallel to three inner engines. Each inner engine has its own
//! gate, so for a given item most of them are silent no-ops:
//!
//! * Canadian French: from fr-CA XOR to fr-CA
//! * English: (from en-US AND to en-GB) OR (from en-GB AND to en-US)
//! * Numeric: text contains a digit

pub mod domain;
pub mod policies;
pub mod translators;

use std::sync::Arc;

use crate::builder::PolicyEngineBuilder;
use crate::config::EngineOptions;
use crate::engine::PolicyEngine;
use crate::errors::BuildError;
use crate::policies::{And, Or, Xor};
use crate::traits::{AsyncProcessor, InputPolicy, OutputPolicy};

pub use domain::{Language, TranslatableItem, Translation};

use policies::{
    ContainsNumericText, FromLanguage, MarkItemTranslated, NotYetTranslated, PublishTranslation,
    SendTranslationSuccessEmail, ToLanguage,
};
use translators::{DictionaryTranslator, MockTranslator};

type Input = Arc<dyn InputPolicy<TranslatableItem>>;
type Output = Arc<dyn OutputPolicy<TranslatableItem>>;
type Unit = Arc<dyn AsyncProcessor<TranslatableItem>>;

/// Policy and processor instances shared by every engine in the pipeline.
pub struct TranslationCatalog {
    not_yet_translated: Input,
    from_us_english: Input,
    from_uk_english: Input,
    from_canadian_french: Input,
    to_us_english: Input,
    to_uk_english: Input,
    to_canadian_french: Input,
    contains_numeric_text: Input,

    google: Unit,
    microsoft: Unit,
    cache: Unit,
    single_word: Unit,
    dictionary: Unit,

    publish: Output,
    mark_translated: Output,
    send_success_email: Output,
}

impl TranslationCatalog {
    pub fn new() -> Self {
        Self {
            not_yet_translated: Arc::new(NotYetTranslated),
            from_us_english: Arc::new(FromLanguage(Language::UsEnglish)),
            from_uk_english: Arc::new(FromLanguage(Language::UkEnglish)),
            from_canadian_french: Arc::new(FromLanguage(Language::CanadianFrench)),
            to_us_english: Arc::new(ToLanguage(Language::UsEnglish)),
            to_uk_english: Arc::new(ToLanguage(Language::UkEnglish)),
            to_canadian_french: Arc::new(ToLanguage(Language::CanadianFrench)),
            contains_numeric_text: Arc::new(ContainsNumericText),

            google: Arc::new(MockTranslator::google()),
            microsoft: Arc::new(MockTranslator::microsoft()),
            cache: Arc::new(MockTranslator::cache()),
            single_word: Arc::new(MockTranslator::single_word()),
            dictionary: Arc::new(DictionaryTranslator),

            publish: Arc::new(PublishTranslation),
            mark_translated: Arc::new(MarkItemTranslated),
            send_success_email: Arc::new(SendTranslationSuccessEmail),
        }
    }

    pub fn canadian_french_engine(&self) -> Result<PolicyEngine<TranslatableItem>, BuildError> {
        let from_xor_to_french: Input = Arc::new(Xor::new(vec![
            self.from_canadian_french.clone(),
            self.to_canadian_french.clone(),
        ]));

        Ok(PolicyEngineBuilder::configure()
            .with_input_policies(vec![self.not_yet_translated.clone(), from_xor_to_french])
            .with_async_processors(vec![
                self.google.clone(),
                self.microsoft.clone(),
                self.cache.clone(),
            ])?
            .with_output_policies(vec![
                self.publish.clone(),
                self.mark_translated.clone(),
                self.send_success_email.clone(),
            ])
            .named("canadian_french_translation")
            .build())
    }

    pub fn english_engine(&self) -> Result<PolicyEngine<TranslatableItem>, BuildError> {
        let us_to_uk: Input = Arc::new(And::new(vec![
            self.from_us_english.clone(),
            self.to_uk_english.clone(),
        ]));
        let uk_to_us: Input = Arc::new(And::new(vec![
            self.from_uk_english.clone(),
            self.to_us_english.clone(),
        ]));
        let either_english: Input = Arc::new(Or::new(vec![us_to_uk, uk_to_us]));

        Ok(PolicyEngineBuilder::configure()
            .with_input_policies(vec![self.not_yet_translated.clone(), either_english])
            .with_async_processors(vec![self.single_word.clone(), self.dictionary.clone()])?
            .with_output_policies(vec![self.publish.clone(), self.mark_translated.clone()])
            .named("english_translation")
            .build())
    }

    pub fn numeric_engine(&self) -> Result<PolicyEngine<TranslatableItem>, BuildError> {
        Ok(PolicyEngineBuilder::configure()
            .with_input_policies(vec![
                self.not_yet_translated.clone(),
                self.contains_numeric_text.clone(),
            ])
            .with_async_processors(vec![self.single_word.clone()])?
            .with_output_policies(vec![self.publish.clone(), self.mark_translated.clone()])
            .named("numeric_translation")
            .build())
    }

    /// The outer engine. `options` applies to it alone; inner engines keep
    /// their own names and defaults.
    pub fn aggregate_engine(
        &self,
        options: EngineOptions,
    ) -> Result<PolicyEngine<TranslatableItem>, BuildError> {
        let inner: Vec<Unit> = vec![
            Arc::new(self.canadian_french_engine()?),
            Arc::new(self.english_engine()?),
            Arc::new(self.numeric_engine()?),
        ];

        // Each inner engine handles its own post-processing
        Ok(PolicyEngineBuilder::configure()
            .with_input_policies(vec![self.not_yet_translated.clone()])
            .with_parallel_processors(inner)?
            .with_output_policies(vec![])
            .named("aggregate_translation")
            .with_options(options)
            .build())
    }
}

impl Default for TranslationCatalog {
    fn default() -> Self {
        Self::new()
    }
}
