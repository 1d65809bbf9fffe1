#![deny(unsafe_op_in_unsafe_fn)]
#![forbid(unreachable_pub)]

//! Handle-based native thread lifecycle shim for embedding hosts.
//!
//! This library spawns native worker threads with a fixed, small stack and
//! hands the host an opaque, singly-owned handle. The host never touches
//! platform threading types directly: it creates a thread, stores the handle,
//! and later releases it. Nothing more.
//!
//! # Target Platform
//!
//! - **Environment**: Unix hosts with a POSIX threads implementation
//! - **Creation path**: `pthread_create` with a 2 MiB stack by default
//! - **Linkage**: rlib for Rust hosts, staticlib for C embedders (see [`ffi`])
//!
//! # Quick Start
//!
//! ```no_run
//! use embed_threads::spawn;
//! use std::ffi::c_void;
//!
//! extern "C" fn worker(_ctx: *mut c_void) -> *mut c_void {
//!     // thread work
//!     std::ptr::null_mut()
//! }
//!
//! let handle = spawn(worker).expect("failed to spawn worker");
//!
//! // Release the handle without waiting; the OS reclaims the thread's
//! // resources when `worker` returns.
//! handle.detach();
//! ```
//!
//! # Architecture
//!
//! The library is organized around a few small abstractions:
//! - RAII ownership of the platform thread-attribute object
//! - A builder that fixes the stack size at creation time
//! - A non-copyable [`ThreadHandle`] whose only operations are
//!   consume-and-wait ([`ThreadHandle::join`]) and consume-and-release
//!   ([`ThreadHandle::detach`])
//! - A C-ABI create/destroy pair in [`ffi`] for non-Rust embedders

// Core modules
pub mod errors;
pub mod ffi;
pub mod thread;

// ============================================================================
// Public API
// ============================================================================

// Threads
pub use thread::{EntryFn, ThreadBuilder, ThreadHandle, DEFAULT_STACK_SIZE};

// Errors
pub use errors::{JoinError, SpawnError, ThreadError, ThreadResult};

// ============================================================================
// Convenience Functions
// ============================================================================

/// Spawn a native thread running `entry` with the default 2 MiB stack.
///
/// The entry function is always invoked with a null context argument; any
/// context it needs must be reachable without one (typically through
/// process-global state owned by the embedder).
pub fn spawn(entry: EntryFn) -> ThreadResult<ThreadHandle> {
    Ok(thread::ThreadBuilder::new().spawn(entry)?)
}
