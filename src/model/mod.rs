//! Language models and the model registry
//!
//! A [`LanguageModel`] turns raw text into a [`Doc`]: sentences, tokens with
//! lemmas, and entity spans. Models can be expensive to build, so the
//! [`ModelRegistry`] constructs each identifier once and hands out shared
//! `Arc`s afterwards.

pub mod rules;

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::error::{AnalyzerError, Result};
use crate::nlp::Language;
use crate::types::Doc;

pub use rules::RuleBasedModel;

/// Identifier of the model used when none is configured
pub const DEFAULT_MODEL: &str = "en_core_web_sm";

/// Tokenize + lemmatize + entity-tag capability
pub trait LanguageModel: Send + Sync {
    /// Identifier the model was loaded under
    fn name(&self) -> &str;

    /// Analyze a text
    fn analyze(&self, text: &str) -> Doc;
}

/// Lazily populated cache of language models keyed by identifier
#[derive(Default)]
pub struct ModelRegistry {
    models: RwLock<FxHashMap<String, Arc<dyn LanguageModel>>>,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("loaded", &self.loaded())
            .finish()
    }
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry
    pub fn global() -> &'static ModelRegistry {
        static GLOBAL: OnceLock<ModelRegistry> = OnceLock::new();
        GLOBAL.get_or_init(ModelRegistry::new)
    }

    /// Return the model for `id`, building it on first use
    ///
    /// Known identifiers are [`DEFAULT_MODEL`] and any supported language
    /// code (`en`, `de`, ...), plus anything added with [`Self::register`].
    pub fn load(&self, id: &str) -> Result<Arc<dyn LanguageModel>> {
        if let Some(model) = self.read().get(id) {
            return Ok(Arc::clone(model));
        }

        let mut models = self
            .models
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(model) = models.get(id) {
            return Ok(Arc::clone(model));
        }

        let model = build_model(id).ok_or_else(|| AnalyzerError::ModelUnavailable(id.to_string()))?;
        tracing::debug!(model = id, "loaded language model");
        models.insert(id.to_string(), Arc::clone(&model));
        Ok(model)
    }

    /// Make a custom model available under `id`, replacing any previous one
    pub fn register(&self, id: impl Into<String>, model: Arc<dyn LanguageModel>) {
        self.models
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into(), model);
    }

    /// Number of models currently held
    pub fn loaded(&self) -> usize {
        self.read().len()
    }

    /// Drop every cached model
    pub fn clear(&self) {
        self.models
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, FxHashMap<String, Arc<dyn LanguageModel>>> {
        self.models.read().unwrap_or_else(PoisonError::into_inner)
    }
}

fn build_model(id: &str) -> Option<Arc<dyn LanguageModel>> {
    let language = if id == DEFAULT_MODEL {
        Language::English
    } else {
        Language::from_code(id)?
    };
    Some(Arc::new(RuleBasedModel::new(id, language)))
}
