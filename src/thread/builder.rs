//! Thread builder: the single creation path.
//!
//! The builder pins down everything that must be fixed before the native
//! thread exists. Today that is the stack size; it is validated and applied
//! through the attribute object before `pthread_create` runs, and cannot be
//! changed afterward.

use core::mem::MaybeUninit;
use core::ptr;

use crate::errors::SpawnError;
use crate::thread::attr::Attributes;
use crate::thread::{EntryFn, ThreadHandle, DEFAULT_STACK_SIZE};

/// Builder for configuring and spawning a native thread.
#[derive(Debug, Clone)]
pub struct ThreadBuilder {
    /// Stack size in bytes, fixed at creation time
    stack_size: usize,
}

impl ThreadBuilder {
    /// Create a builder with the default 2 MiB stack.
    pub fn new() -> Self {
        Self {
            stack_size: DEFAULT_STACK_SIZE,
        }
    }

    /// Override the stack size in bytes.
    ///
    /// Sizes below the platform minimum are rejected by [`spawn`], before
    /// any platform call is made.
    ///
    /// [`spawn`]: ThreadBuilder::spawn
    pub fn stack_size(mut self, size: usize) -> Self {
        self.stack_size = size;
        self
    }

    /// Spawn a native thread running `entry` with the configured stack.
    ///
    /// The entry function is invoked with a null context argument. On
    /// success the returned [`ThreadHandle`] is the sole owning reference
    /// to the thread.
    ///
    /// # Errors
    ///
    /// Each platform failure point surfaces as its own variant:
    /// attribute init ([`SpawnError::AttributeInit`]), stack-size
    /// configuration ([`SpawnError::StackSize`]), and thread creation
    /// itself ([`SpawnError::Launch`]). No handle is produced for a thread
    /// that did not start, and nothing acquired before a failing step
    /// outlives the error return.
    pub fn spawn(self, entry: EntryFn) -> Result<ThreadHandle, SpawnError> {
        if self.stack_size < min_stack_size() {
            return Err(SpawnError::InvalidStackSize(self.stack_size));
        }

        let mut attrs = Attributes::new()?;
        attrs.set_stack_size(self.stack_size)?;

        let mut id = MaybeUninit::<libc::pthread_t>::uninit();
        // SAFETY: id is writable storage for one pthread_t, attrs is an
        // initialized attribute object, and entry matches the platform
        // thread-entry signature. The context argument is always null; the
        // entry function must not rely on receiving one.
        let rc = unsafe {
            libc::pthread_create(id.as_mut_ptr(), attrs.as_ptr(), entry, ptr::null_mut())
        };
        if rc != 0 {
            tracing::debug!(errno = rc, "pthread_create failed");
            return Err(SpawnError::Launch(rc));
        }

        // SAFETY: pthread_create succeeded and wrote the identifier.
        let id = unsafe { id.assume_init() };
        tracing::trace!(stack_size = self.stack_size, "native thread spawned");
        Ok(ThreadHandle::new(id))
    }
}

impl Default for ThreadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Smallest stack size the platform accepts for a new thread.
fn min_stack_size() -> usize {
    libc::PTHREAD_STACK_MIN as usize
}
