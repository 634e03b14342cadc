//! Error types for ncurses-bridge.

use crate::registry::{ResourceId, ResourceKind};
use thiserror::Error;

/// Result type alias for binding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced at the binding boundary.
///
/// Every error is local to the failing call; none of them poison the
/// context or the native library. Callers are free to retry with
/// corrected arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A native call reported failure (the ncurses `ERR` return).
    #[error("native curses call failed")]
    General,

    /// An invalid argument was detected before any native call was made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A stateful operation was invoked before [`Curses::init`].
    ///
    /// [`Curses::init`]: crate::Curses::init
    #[error("curses not initialized; call init() before any curses operation")]
    NotInitialized,

    /// The resource id does not resolve to a live registry entry.
    ///
    /// Either the id was never registered, or the entry has already been
    /// released (stale generation).
    #[error("unknown or stale resource id {0}")]
    NotFound(ResourceId),

    /// The resource id resolves, but to a different kind of handle.
    #[error("resource {id} is a {actual}, expected a {expected}")]
    KindMismatch {
        /// The offending id.
        id: ResourceId,
        /// The kind the operation requires.
        expected: ResourceKind,
        /// The kind the id was registered under.
        actual: ResourceKind,
    },

    /// A native constructor returned a null handle.
    #[error("native library failed to allocate {0}")]
    AllocationFailed(&'static str),

    /// The registry refused to wrap a fresh native handle.
    ///
    /// The constructing adapter destroys the native object before
    /// surfacing this, so no native memory leaks.
    #[error("resource registry is at capacity")]
    RegistryFull,

    /// The same native pointer was offered for registration twice.
    ///
    /// Wrapping one native object in two independent entries would make
    /// the reference count inconsistent and risk a double free.
    #[error("native handle is already registered")]
    DuplicateHandle,
}

/// Trait for converting native return codes to `Result`.
pub trait IntoResult {
    /// The success type.
    type Output;

    /// Convert to a Result.
    fn into_result(self) -> Result<Self::Output>;
}

impl IntoResult for i32 {
    type Output = ();

    fn into_result(self) -> Result<Self::Output> {
        if self == crate::types::ERR {
            Err(Error::General)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ERR, OK};

    #[test]
    fn test_into_result() {
        assert_eq!(OK.into_result(), Ok(()));
        assert_eq!(1.into_result(), Ok(()));
        assert_eq!(ERR.into_result(), Err(Error::General));
    }
}
