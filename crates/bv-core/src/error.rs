//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `BvError` as one variant
//! via `#[from]`, so errors raised by core types keep their message intact.

use thiserror::Error;

/// The base error type shared by the `bv-*` crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BvError {
    #[error("unknown vehicle behavior {0:?}: expected \"follower\", \"master_cw\", or \"master_ccw\"")]
    UnknownBehavior(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for the `bv-*` crates.
pub type BvResult<T> = Result<T, BvError>;
