//! Error handling for the thread shim.
//!
//! Every failure point in the lifecycle maps to a distinct variant, so a
//! host can tell "attribute setup failed" apart from "the thread never
//! started" instead of observing a bare absent handle.

use thiserror::Error;

/// Result type for threading operations.
pub type ThreadResult<T> = Result<T, ThreadError>;

/// Top-level error type for all threading operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThreadError {
    /// Thread spawning errors
    #[error("thread spawn error: {0}")]
    Spawn(#[from] SpawnError),
    /// Thread joining errors
    #[error("thread join error: {0}")]
    Join(#[from] JoinError),
}

/// Errors that can occur during thread spawning.
///
/// The platform reports failures as a returned error number rather than
/// through `errno`; the raw value is preserved in each variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    /// Requested stack size is below the platform minimum
    #[error("invalid stack size: {0} bytes is below the platform minimum")]
    InvalidStackSize(usize),
    /// Thread attribute object could not be initialized
    #[error("thread attribute initialization failed (errno {0})")]
    AttributeInit(i32),
    /// Platform rejected the requested stack size
    #[error("stack size of {size} bytes rejected by the platform (errno {errno})")]
    StackSize {
        /// Requested stack size in bytes
        size: usize,
        /// Error number returned by the platform
        errno: i32,
    },
    /// Native thread creation itself failed; no thread was started
    #[error("native thread creation failed (errno {0})")]
    Launch(i32),
}

/// Errors that can occur during thread joining.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Joining would deadlock (a thread joining itself, or a join cycle)
    #[error("joining this thread would deadlock")]
    WouldDeadlock,
    /// Platform reported a join failure
    #[error("thread join failed (errno {0})")]
    Platform(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_error_display_includes_errno() {
        let err = SpawnError::Launch(libc::EAGAIN);
        let msg = err.to_string();
        assert!(msg.contains("thread creation failed"));
        assert!(msg.contains(&libc::EAGAIN.to_string()));
    }

    #[test]
    fn stack_size_error_reports_requested_size() {
        let err = SpawnError::StackSize {
            size: 4096,
            errno: libc::EINVAL,
        };
        assert!(err.to_string().contains("4096"));
    }

    #[test]
    fn thread_error_wraps_both_halves() {
        let spawn: ThreadError = SpawnError::AttributeInit(libc::ENOMEM).into();
        let join: ThreadError = JoinError::WouldDeadlock.into();
        assert!(matches!(spawn, ThreadError::Spawn(_)));
        assert!(matches!(join, ThreadError::Join(_)));
    }
}
