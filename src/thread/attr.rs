//! RAII ownership of the platform thread-attribute object.
//!
//! `pthread_attr_t` must be destroyed exactly once after a successful init.
//! Wrapping it in an owned type releases it on every exit path, so an error
//! between init and thread creation cannot leak the attribute object.

use core::mem::MaybeUninit;

use crate::errors::SpawnError;

/// Owned, initialized thread-attribute object.
pub(crate) struct Attributes {
    raw: libc::pthread_attr_t,
}

impl Attributes {
    /// Initialize a fresh attribute object.
    pub(crate) fn new() -> Result<Self, SpawnError> {
        let mut raw = MaybeUninit::<libc::pthread_attr_t>::uninit();
        // SAFETY: pthread_attr_init initializes the storage we hand it and
        // reports failure through its return value.
        let rc = unsafe { libc::pthread_attr_init(raw.as_mut_ptr()) };
        if rc != 0 {
            return Err(SpawnError::AttributeInit(rc));
        }
        // SAFETY: init succeeded, so the attribute object is initialized.
        Ok(Self {
            raw: unsafe { raw.assume_init() },
        })
    }

    /// Request a stack size for threads created with these attributes.
    pub(crate) fn set_stack_size(&mut self, size: usize) -> Result<(), SpawnError> {
        // SAFETY: self.raw was initialized in new().
        let rc = unsafe { libc::pthread_attr_setstacksize(&mut self.raw, size) };
        if rc != 0 {
            return Err(SpawnError::StackSize { size, errno: rc });
        }
        Ok(())
    }

    pub(crate) fn as_ptr(&self) -> *const libc::pthread_attr_t {
        &self.raw
    }
}

impl Drop for Attributes {
    fn drop(&mut self) {
        // SAFETY: self.raw was initialized in new() and is destroyed exactly
        // once, here.
        unsafe {
            libc::pthread_attr_destroy(&mut self.raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thread::DEFAULT_STACK_SIZE;

    #[test]
    fn init_and_configure_default_stack() {
        let mut attrs = Attributes::new().expect("attribute init failed");
        attrs
            .set_stack_size(DEFAULT_STACK_SIZE)
            .expect("2 MiB stack should be accepted");
    }

    #[test]
    fn attributes_release_on_error_path() {
        // Exercise the early-return path: configure, fail nothing, and let
        // Drop run. Destroying an initialized object must not crash even if
        // no thread was ever created from it.
        let attrs = Attributes::new().expect("attribute init failed");
        drop(attrs);
    }
}
