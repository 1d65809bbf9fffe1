//! Native thread lifecycle: spawn with a fixed stack, then join or detach.
//!
//! The handle returned by spawning is the sole owning reference to the
//! native thread. Both terminal operations consume the handle, so a
//! released thread cannot be touched again through this module.

use libc::c_void;

pub(crate) mod attr;
pub mod builder;
pub mod handle;

pub use builder::ThreadBuilder;
pub use handle::ThreadHandle;

/// Default stack size for spawned threads: 2 MiB.
///
/// Worker threads in an embedding host run small, bounded workloads; a
/// constrained stack keeps per-thread memory cost predictable.
pub const DEFAULT_STACK_SIZE: usize = 2 * 1024 * 1024;

/// Thread entry function, matching the platform thread-entry signature.
///
/// Invoked with a null context argument; the return value becomes the
/// thread's exit value, observable through [`ThreadHandle::join`].
pub type EntryFn = extern "C" fn(*mut c_void) -> *mut c_void;
