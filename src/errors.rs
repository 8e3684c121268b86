//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`MaceError`] covers the static failure modes:
//! - Malformed rigid-body catalogs (mismatched or empty orientation lists)
//! - Invalid timeline descriptors (phase ranges, tween spans)
//! - Configuration loading and validation errors
//!
//! Out-of-range progress values are never errors. The driver and the
//! resolver clamp them silently.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mace_orbit::errors::{MaceError, Result};
//!
//! fn load() -> Result<()> {
//!     let config = EngineConfig::load("rig.json")?;
//!     config.validate()?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the pose engine.
#[derive(Error, Debug)]
pub enum MaceError {
    // ========================================================================
    // Catalog Errors
    // ========================================================================
    /// The initial and target orientation lists have different lengths.
    #[error("Catalog mismatch: {initial} initial orientations but {target} target orientations")]
    CatalogMismatch {
        /// Number of initial Euler triples
        initial: usize,
        /// Number of target Euler triples
        target: usize,
    },

    /// The catalog would contain no bodies.
    #[error("Catalog must contain at least one body")]
    EmptyCatalog,

    // ========================================================================
    // Timeline Errors
    // ========================================================================
    /// A phase range is out of order, overlapping or outside `[0, 1]`.
    #[error("Invalid phase: {0}")]
    InvalidPhase(String),

    /// A tween span or channel assignment is malformed.
    #[error("Invalid tween: {0}")]
    InvalidTween(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Alias for `Result<T, MaceError>`.
pub type Result<T> = std::result::Result<T, MaceError>;
