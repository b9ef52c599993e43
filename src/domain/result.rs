//! Result type alias for Starling operations

use crate::domain::errors::HarmonizerError;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, HarmonizerError>;
