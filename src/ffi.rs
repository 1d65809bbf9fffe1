//! C-ABI surface for embedding hosts.
//!
//! Non-Rust embedders link the shim as a static archive and call this
//! create/destroy pair. The handle crosses the boundary as an opaque
//! pointer-sized value the host stores and passes back verbatim; its
//! layout is never exposed.
//!
//! Failure is reported as a null handle. The richer [`SpawnError`]
//! taxonomy is available to Rust hosts through [`crate::thread`];
//! a C host only observes present-or-absent.
//!
//! [`SpawnError`]: crate::errors::SpawnError

use core::ptr;

use crate::thread::{EntryFn, ThreadBuilder, ThreadHandle};

/// Spawn a native thread running `entry` with the default 2 MiB stack.
///
/// `entry` is invoked with a null context argument. Returns an opaque
/// handle owning the thread, or null if `entry` is null or any step of
/// thread creation failed. A non-null handle always refers to a thread
/// that actually started.
#[no_mangle]
pub extern "C" fn embed_thread_create(entry: Option<EntryFn>) -> *mut ThreadHandle {
    let Some(entry) = entry else {
        return ptr::null_mut();
    };
    match ThreadBuilder::new().spawn(entry) {
        Ok(handle) => handle.into_raw(),
        Err(err) => {
            tracing::debug!(error = %err, "embed_thread_create failed");
            ptr::null_mut()
        }
    }
}

/// Release a handle previously returned by [`embed_thread_create`].
///
/// Returns promptly without waiting for the thread; the OS reclaims the
/// thread's resources when its entry function returns. Passing null is a
/// no-op.
///
/// # Safety
///
/// `handle` must be null or a value returned by [`embed_thread_create`]
/// that has not already been destroyed.
#[no_mangle]
pub unsafe extern "C" fn embed_thread_destroy(handle: *mut ThreadHandle) {
    if handle.is_null() {
        return;
    }
    // SAFETY: caller contract guarantees the pointer came from
    // embed_thread_create and is being destroyed for the first time.
    let handle = unsafe { ThreadHandle::from_raw(handle) };
    handle.detach();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::c_void;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::{Duration, Instant};

    static FFI_ENTRY_RAN: AtomicBool = AtomicBool::new(false);

    extern "C" fn mark_ran(_ctx: *mut c_void) -> *mut c_void {
        FFI_ENTRY_RAN.store(true, Ordering::SeqCst);
        ptr::null_mut()
    }

    #[test]
    fn create_then_destroy_round_trip() {
        let handle = embed_thread_create(Some(mark_ran));
        assert!(!handle.is_null());

        // The entry function must be observed to run within a bounded wait.
        let deadline = Instant::now() + Duration::from_secs(5);
        while !FFI_ENTRY_RAN.load(Ordering::SeqCst) {
            assert!(Instant::now() < deadline, "entry function never ran");
            std::thread::sleep(Duration::from_millis(1));
        }

        // SAFETY: handle came from embed_thread_create above.
        unsafe { embed_thread_destroy(handle) };
    }

    #[test]
    fn null_entry_yields_null_handle() {
        assert!(embed_thread_create(None).is_null());
    }

    #[test]
    fn destroy_of_null_is_a_no_op() {
        // SAFETY: null is explicitly permitted.
        unsafe { embed_thread_destroy(ptr::null_mut()) };
    }
}
