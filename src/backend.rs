//! Syscall Backends
//!
//! A backend performs exactly one shape of call: a syscall number followed
//! by a full block of [`MAX_ARGS`] words. Arity is handled before a backend
//! is reached, by zero-filling the unused slots.

use crate::abi::{SyscallArgument, SyscallNumber, SyscallResult, MAX_ARGS};

/// A way of reaching the kernel.
pub trait Backend {
    /// Perform the syscall and return the raw result.
    ///
    /// # Safety
    /// The kernel operation may read or write any memory the arguments
    /// point to, unmap memory, close descriptors, or end the process.
    /// The caller must ensure `number` and `args` describe an operation
    /// that respects Rust's aliasing and ownership rules.
    unsafe fn call(&self, number: SyscallNumber, args: [SyscallArgument; MAX_ARGS]) -> SyscallResult;
}

impl<B: Backend + ?Sized> Backend for &B {
    #[inline]
    unsafe fn call(&self, number: SyscallNumber, args: [SyscallArgument; MAX_ARGS]) -> SyscallResult {
        // SAFETY: forwarded contract
        unsafe { (**self).call(number, args) }
    }
}
