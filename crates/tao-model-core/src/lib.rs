pub mod config;
pub mod error;
pub mod team;
pub mod types;

#[cfg(feature = "pnl")]
pub mod pnl;

#[cfg(feature = "sensitivity")]
pub mod sensitivity;

#[cfg(feature = "cash")]
pub mod cash;

#[cfg(feature = "engine")]
pub mod engine;

pub use error::TaoModelError;
pub use types::*;

/// Standard result type for all tao-model operations
pub type TaoModelResult<T> = Result<T, TaoModelError>;
