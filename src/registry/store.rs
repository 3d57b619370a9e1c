use hashbrown::HashMap as FastHashMap;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use regex::Regex;
use std::sync::Arc;

use super::{RegistryMetrics, RegistryStats};

/// Deduplicating cache of compiled constraint patterns, keyed by source text.
///
/// One registry belongs to one router. Identical constraint strings across
/// routes share a single compiled `Regex`.
#[derive(Debug, Default)]
pub struct PatternRegistry {
    compiled: RwLock<FastHashMap<Box<str>, Arc<Regex>>>,
    metrics: RegistryMetrics,
}

impl PatternRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled pattern for `raw`, compiling it on first use.
    ///
    /// Concurrent callers asking for the same source converge on the
    /// instance stored by the first one; upgradable reads are exclusive with
    /// each other so a pattern is never compiled twice.
    pub fn compile_or_reuse(&self, raw: &str) -> Result<Arc<Regex>, regex::Error> {
        if let Some(existing) = self.compiled.read().get(raw).cloned() {
            self.metrics.record_reuse();
            return Ok(existing);
        }

        let guard = self.compiled.upgradable_read();
        if let Some(existing) = guard.get(raw).cloned() {
            self.metrics.record_reuse();
            return Ok(existing);
        }

        let regex = Arc::new(Regex::new(raw)?);
        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        guard.insert(raw.to_string().into_boxed_str(), regex.clone());
        self.metrics.record_compile();
        tracing::event!(tracing::Level::DEBUG, pattern = %raw, "constraint pattern compiled");

        Ok(regex)
    }

    pub fn len(&self) -> usize {
        self.compiled.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.read().is_empty()
    }

    pub fn stats(&self) -> RegistryStats {
        self.metrics.snapshot()
    }
}
