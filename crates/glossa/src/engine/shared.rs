//! A swap point for publishing one engine to many readers.

use std::mem;
use std::sync::{Arc, PoisonError, RwLock};

use crate::engine::TranslationEngine;

/// Holds the current [`TranslationEngine`] for a host application.
///
/// Readers take cheap snapshots; writers replace the whole engine. A
/// snapshot never observes a half-applied update.
///
/// # Example
///
/// ```
/// use glossa::{EngineConfig, SharedEngine, TranslationEngine};
///
/// let config = EngineConfig::from_json(r#"{"locales": ["en", "de"]}"#).unwrap();
/// let shared = SharedEngine::new(TranslationEngine::new(config));
///
/// let before = shared.snapshot();
/// shared.update(|engine| engine.set_locale("de"));
///
/// assert_eq!(before.locale().as_str(), "en");
/// assert_eq!(shared.snapshot().locale().as_str(), "de");
/// ```
#[derive(Debug)]
pub struct SharedEngine {
    current: RwLock<Arc<TranslationEngine>>,
}

impl SharedEngine {
    pub fn new(engine: TranslationEngine) -> Self {
        SharedEngine {
            current: RwLock::new(Arc::new(engine)),
        }
    }

    /// The engine as of now.
    pub fn snapshot(&self) -> Arc<TranslationEngine> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Publish `engine`, returning the one it replaces.
    pub fn replace(&self, engine: TranslationEngine) -> Arc<TranslationEngine> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        mem::replace(&mut *guard, Arc::new(engine))
    }

    /// Derive a new engine from the current one and publish it.
    ///
    /// The write lock is held while `f` runs, so concurrent updates apply in
    /// sequence.
    pub fn update(&self, f: impl FnOnce(&TranslationEngine) -> TranslationEngine) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = f(&guard);
        *guard = Arc::new(next);
    }

    /// Like [`SharedEngine::update`], for derivations that can fail. On error
    /// the current engine is kept.
    pub fn try_update<E>(
        &self,
        f: impl FnOnce(&TranslationEngine) -> Result<TranslationEngine, E>,
    ) -> Result<(), E> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = f(&guard)?;
        *guard = Arc::new(next);
        Ok(())
    }
}
