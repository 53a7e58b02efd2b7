//! rawsyscall - Direct System Calls for 64-bit Unix
//!
//! Performs a system call without going through a typed runtime wrapper:
//! a syscall number and up to six machine-word arguments go in, the raw
//! signed machine-word result comes out.
//!
//! # Backends
//! - Resolved entry point: libc's variadic `syscall(long, ...)`, located once
//!   per process with `dlsym` and called through a fixed six-argument shape
//! - Direct (Linux only): inline assembly, no libc involvement at all
//!
//! # Supported Targets
//! - AArch64 (primary)
//! - x86_64
//!
//! Both must be 64-bit Linux or Apple. Anything else fails to build.
//!
//! # Results
//! Results are never interpreted. A failing syscall is a successful
//! invocation whose value happens to be an error sentinel:
//! - entry point: `-1` with `errno` set
//! - direct: `-errno`
//!
//! # Example
//! ```no_run
//! use rawsyscall::{numbers, syscall};
//!
//! let pid = unsafe { syscall!(numbers::GETPID) }.unwrap();
//! assert_eq!(pid as u32, std::process::id());
//! ```

#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(not(all(
    any(target_os = "linux", target_vendor = "apple"),
    target_pointer_width = "64",
    any(target_arch = "aarch64", target_arch = "x86_64")
)))]
compile_error!("rawsyscall only supports 64-bit Linux or Apple targets on aarch64 or x86_64");

mod abi;
mod backend;
mod entry;
mod error;
mod invoke;
mod macros;

pub mod arch;
pub mod numbers;

pub use abi::{SyscallArgument, SyscallNumber, SyscallResult, MAX_ARGS};
pub use backend::Backend;
pub use entry::{EntryConfig, EntryPoint, OpenFlags};
pub use error::{Error, Result};
pub use invoke::{entry_point, invoke, invoke_with};

#[cfg(target_os = "linux")]
pub use invoke::invoke_direct;
