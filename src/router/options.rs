use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_CONSTRAINT_LEN: usize = 1024;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    /// Registering GET also binds HEAD to the same handler.
    pub auto_head: bool,
    /// Unbound `OPTIONS` on a known path goes to the preflight handler
    /// instead of method-not-allowed.
    pub handle_preflight: bool,
    pub max_constraint_len: usize,
    pub debug: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            auto_head: true,
            handle_preflight: true,
            max_constraint_len: DEFAULT_MAX_CONSTRAINT_LEN,
            debug: false,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_constraint_len == 0 {
            return Err(RouterOptionsError::MaxConstraintLenInvalid { provided: 0 });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn auto_head(mut self, value: bool) -> Self {
        self.options.auto_head = value;
        self
    }

    pub fn handle_preflight(mut self, value: bool) -> Self {
        self.options.handle_preflight = value;
        self
    }

    pub fn max_constraint_len(mut self, value: usize) -> Self {
        self.options.max_constraint_len = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_constraint_len must be at least 1 (got {provided})")]
    MaxConstraintLenInvalid { provided: usize },
}
