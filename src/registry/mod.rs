mod stats;
mod store;

pub use stats::{RegistryMetrics, RegistryStats};
pub use store::PatternRegistry;
