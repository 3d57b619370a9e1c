use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct RegistryMetrics {
    compiled: AtomicUsize,
    reused: AtomicUsize,
}

impl RegistryMetrics {
    pub fn record_compile(&self) {
        self.compiled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reuse(&self) {
        self.reused.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RegistryStats {
        RegistryStats {
            compiled: self.compiled.load(Ordering::Relaxed),
            reused: self.reused.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub compiled: usize,
    pub reused: usize,
}
