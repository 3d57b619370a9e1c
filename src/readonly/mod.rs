mod snapshot;

pub(crate) use snapshot::Fallbacks;
pub use snapshot::RouterReadOnly;
