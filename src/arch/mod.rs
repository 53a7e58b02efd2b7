//! Direct Syscall Backend
//!
//! Issues the trap instruction with inline assembly, bypassing libc
//! entirely. Only Linux is supported: its syscall ABI is stable and
//! returns `-errno` in the result register on failure.
//!
//! Exactly one of the architecture modules is compiled in, chosen by
//! target. There is no run-time selection.

#[cfg(all(target_os = "linux", target_arch = "aarch64"))]
mod aarch64;
#[cfg(all(target_os = "linux", target_arch = "aarch64"))]
use self::aarch64 as native;

#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
mod x86_64;
#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
use self::x86_64 as native;

#[cfg(target_os = "linux")]
pub use direct::Direct;

#[cfg(target_os = "linux")]
mod direct {
    use super::native;
    use crate::abi::{SyscallArgument, SyscallNumber, SyscallResult, MAX_ARGS};
    use crate::backend::Backend;

    /// Syscalls through the trap instruction.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Direct;

    impl Backend for Direct {
        #[inline]
        unsafe fn call(&self, number: SyscallNumber, args: [SyscallArgument; MAX_ARGS]) -> SyscallResult {
            // SAFETY: forwarded contract
            unsafe { native::syscall6(number, args) }
        }
    }
}
