//! Owned handle for a spawned native thread.
//!
//! The handle is the sole owning reference to the underlying thread. Its
//! two terminal operations both consume it: [`ThreadHandle::join`] waits
//! for the thread and collects its exit value, [`ThreadHandle::detach`]
//! releases the handle immediately and lets the OS reclaim the thread when
//! its entry function returns. Dropping a handle detaches, so forgetting
//! to call either is not a leak.

use core::mem;
use core::ptr;

use libc::c_void;

use crate::errors::JoinError;

/// Non-copyable owning reference to a native thread.
///
/// Exactly one handle exists per successfully spawned thread. There is no
/// way to use the thread after the handle has been consumed; release-then-
/// reuse is a compile error rather than undefined behavior.
pub struct ThreadHandle {
    id: libc::pthread_t,
}

impl ThreadHandle {
    pub(crate) fn new(id: libc::pthread_t) -> Self {
        Self { id }
    }

    /// The platform-native thread identifier.
    ///
    /// Only meaningful for diagnostics; all lifecycle operations go through
    /// the handle itself.
    pub fn as_raw(&self) -> libc::pthread_t {
        self.id
    }

    /// Wait for the thread to finish and return its exit value.
    ///
    /// Blocks until the entry function returns. The exit value is whatever
    /// pointer the entry function returned.
    ///
    /// # Errors
    ///
    /// [`JoinError::WouldDeadlock`] if the platform detects that the join
    /// can never complete (for example a thread joining itself). The
    /// thread is not joined in that case and its resources are reclaimed
    /// by the OS at process exit.
    pub fn join(self) -> Result<*mut c_void, JoinError> {
        let id = self.id;
        // Ownership of the joinable thread passes to pthread_join; the drop
        // glue must not also detach it.
        mem::forget(self);

        let mut exit_value: *mut c_void = ptr::null_mut();
        // SAFETY: id refers to a thread that is still joinable, because the
        // handle is the sole owner and neither join nor detach has run yet.
        let rc = unsafe { libc::pthread_join(id, &mut exit_value) };
        match rc {
            0 => {
                tracing::trace!("native thread joined");
                Ok(exit_value)
            }
            libc::EDEADLK => Err(JoinError::WouldDeadlock),
            errno => {
                tracing::debug!(errno, "pthread_join failed");
                Err(JoinError::Platform(errno))
            }
        }
    }

    /// Release the handle without waiting for the thread.
    ///
    /// Returns promptly regardless of what the thread is doing. The thread
    /// keeps running; the OS reclaims its resources when the entry function
    /// returns, with no join required. This is the `destroy` half of the
    /// create/destroy contract exposed to embedders.
    pub fn detach(self) {
        // Drop performs the actual release.
        drop(self);
    }

    /// Convert the handle into a raw pointer for the C ABI.
    ///
    /// The handle's drop glue does not run; ownership moves to the pointer.
    /// Reconstitute it with [`ThreadHandle::from_raw`] to release the
    /// thread.
    pub fn into_raw(self) -> *mut ThreadHandle {
        Box::into_raw(Box::new(self))
    }

    /// Reconstitute a handle from a raw pointer produced by
    /// [`ThreadHandle::into_raw`].
    ///
    /// # Safety
    ///
    /// `raw` must come from `into_raw` and must not have been passed to
    /// `from_raw` before. The returned handle resumes sole ownership of
    /// the thread.
    pub unsafe fn from_raw(raw: *mut ThreadHandle) -> Self {
        // SAFETY: caller guarantees raw originated from Box::into_raw in
        // into_raw and has not been reconstituted already.
        *unsafe { Box::from_raw(raw) }
    }
}

impl Drop for ThreadHandle {
    fn drop(&mut self) {
        // SAFETY: the handle is the sole owner of a still-joinable thread;
        // join forgets the handle before consuming the thread, so detach
        // runs at most once.
        let rc = unsafe { libc::pthread_detach(self.id) };
        if rc != 0 {
            tracing::debug!(errno = rc, "pthread_detach failed during release");
        } else {
            tracing::trace!("thread handle released");
        }
    }
}

impl core::fmt::Debug for ThreadHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ThreadHandle").field("id", &self.id).finish()
    }
}

// SAFETY: the identifier is an opaque token; every operation on it is
// mediated by the platform, which allows join and detach from any thread.
unsafe impl Send for ThreadHandle {}
unsafe impl Sync for ThreadHandle {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thread::ThreadBuilder;
    use std::sync::atomic::{AtomicUsize, Ordering};

    extern "C" fn exit_with_41(_ctx: *mut c_void) -> *mut c_void {
        41usize as *mut c_void
    }

    static RAW_ROUND_TRIP_RUNS: AtomicUsize = AtomicUsize::new(0);

    extern "C" fn count_raw_round_trip(_ctx: *mut c_void) -> *mut c_void {
        RAW_ROUND_TRIP_RUNS.fetch_add(1, Ordering::SeqCst);
        ptr::null_mut()
    }

    #[test]
    fn join_returns_entry_exit_value() {
        let handle = ThreadBuilder::new().spawn(exit_with_41).expect("spawn failed");
        let exit_value = handle.join().expect("join failed");
        assert_eq!(exit_value as usize, 41);
    }

    #[test]
    fn raw_round_trip_preserves_ownership() {
        let handle = ThreadBuilder::new()
            .spawn(count_raw_round_trip)
            .expect("spawn failed");
        let id = handle.as_raw();

        let raw = handle.into_raw();
        // SAFETY: raw came from into_raw just above.
        let handle = unsafe { ThreadHandle::from_raw(raw) };
        assert_eq!(handle.as_raw(), id);

        handle.join().expect("join failed");
        assert_eq!(RAW_ROUND_TRIP_RUNS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_detaches_without_waiting() {
        extern "C" fn sleepy(_ctx: *mut c_void) -> *mut c_void {
            std::thread::sleep(std::time::Duration::from_millis(500));
            ptr::null_mut()
        }

        let handle = ThreadBuilder::new().spawn(sleepy).expect("spawn failed");
        let start = std::time::Instant::now();
        drop(handle);
        assert!(start.elapsed() < std::time::Duration::from_millis(100));
    }
}
