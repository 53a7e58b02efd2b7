//! Syscall Invocation
//!
//! Validates the argument count, pads the arguments to a full block and
//! hands the call to a backend.
//!
//! The process-wide entry point is resolved on first use and never torn
//! down. A failed resolution is remembered too: every later call reports
//! the same error instead of retrying.

use spin::Once;

use crate::abi::{pad_arguments, SyscallArgument, SyscallNumber, SyscallResult};
use crate::backend::Backend;
use crate::entry::{EntryConfig, EntryPoint};
use crate::error::Result;

/// Process-wide resolution of the default entry point.
static ENTRY_POINT: Once<Result<EntryPoint>> = Once::new();

/// The process-wide syscall entry point, resolved on first use.
///
/// Concurrent first callers resolve it exactly once; the others wait for
/// that result.
///
/// # Errors
/// `EntryPointResolutionFailed` if libc's `syscall` cannot be located.
pub fn entry_point() -> Result<&'static EntryPoint> {
    resolve_once(&ENTRY_POINT, || EntryPoint::resolve(&EntryConfig::default()))
}

/// Run `resolve` the first time `cell` is reached and hand out its outcome,
/// success or failure, on every call after that.
fn resolve_once<F>(cell: &Once<Result<EntryPoint>>, resolve: F) -> Result<&EntryPoint>
where
    F: FnOnce() -> Result<EntryPoint>,
{
    cell.call_once(resolve).as_ref().map_err(Clone::clone)
}

/// Invoke a syscall through `backend`.
///
/// # Errors
/// `ArgumentCountExceeded` if `args` has more than [`crate::MAX_ARGS`]
/// entries. The backend is not called in that case.
///
/// # Safety
/// See [`Backend::call`].
pub unsafe fn invoke_with<B: Backend + ?Sized>(
    backend: &B,
    number: SyscallNumber,
    args: &[SyscallArgument],
) -> Result<SyscallResult> {
    let block = pad_arguments(args)?;

    // SAFETY: forwarded contract
    Ok(unsafe { backend.call(number, block) })
}

/// Invoke a syscall through libc's resolved `syscall` entry point.
///
/// The result is returned exactly as libc reports it: `-1` with `errno`
/// set when the kernel rejects the call.
///
/// # Errors
/// - `ArgumentCountExceeded` if more than six arguments are given. This is
///   checked before the entry point is touched.
/// - `EntryPointResolutionFailed` if the entry point cannot be resolved.
///
/// # Safety
/// The kernel operation may read or write any memory the arguments point
/// to. The caller must ensure it respects Rust's aliasing and ownership
/// rules.
pub unsafe fn invoke(number: SyscallNumber, args: &[SyscallArgument]) -> Result<SyscallResult> {
    // SAFETY: forwarded contract
    unsafe { invoke_resolved(entry_point, number, args) }
}

/// Check the argument count, then resolve an entry point and call it.
///
/// # Safety
/// Same as [`invoke`].
unsafe fn invoke_resolved<'a, F>(
    entry: F,
    number: SyscallNumber,
    args: &[SyscallArgument],
) -> Result<SyscallResult>
where
    F: FnOnce() -> Result<&'a EntryPoint>,
{
    pad_arguments(args)?;
    let entry = entry()?;

    // SAFETY: forwarded contract
    unsafe { invoke_with(entry, number, args) }
}

/// Invoke a syscall with the trap instruction, bypassing libc.
///
/// The result is the kernel's: `-errno` on failure.
///
/// # Errors
/// `ArgumentCountExceeded` if more than six arguments are given.
///
/// # Safety
/// Same as [`invoke`].
#[cfg(target_os = "linux")]
pub unsafe fn invoke_direct(number: SyscallNumber, args: &[SyscallArgument]) -> Result<SyscallResult> {
    // SAFETY: forwarded contract
    unsafe { invoke_with(&crate::arch::Direct, number, args) }
}
