pub mod analyzer;
pub mod boundary;
pub mod config;
pub mod conventional;
pub mod domain;
pub mod error;
pub mod git;
pub mod workflow;

pub use error::{NextverError, Result};
pub use workflow::{CalculationResult, Workflow};
