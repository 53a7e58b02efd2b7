//! Syscall Numbers
//!
//! A handful of well-known numbers for each supported target. Nothing
//! checks that a number passed to [`crate::invoke`] appears here; this is
//! a convenience, not a syscall table.
//!
//! AArch64 Linux uses the generic syscall table, so its numbers differ
//! from x86_64. Apple targets share the BSD numbering on both
//! architectures.

use crate::abi::SyscallNumber;

#[cfg(all(target_os = "linux", target_arch = "aarch64"))]
mod table {
    use super::SyscallNumber;

    pub const READ: SyscallNumber = 63;
    pub const WRITE: SyscallNumber = 64;
    pub const CLOSE: SyscallNumber = 57;
    pub const DUP: SyscallNumber = 23;
    pub const FCNTL: SyscallNumber = 25;
    pub const GETPID: SyscallNumber = 172;
    pub const GETPPID: SyscallNumber = 173;
    pub const GETUID: SyscallNumber = 174;
}

#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
mod table {
    use super::SyscallNumber;

    pub const READ: SyscallNumber = 0;
    pub const WRITE: SyscallNumber = 1;
    pub const CLOSE: SyscallNumber = 3;
    pub const DUP: SyscallNumber = 32;
    pub const FCNTL: SyscallNumber = 72;
    pub const GETPID: SyscallNumber = 39;
    pub const GETPPID: SyscallNumber = 110;
    pub const GETUID: SyscallNumber = 102;
}

#[cfg(target_vendor = "apple")]
mod table {
    use super::SyscallNumber;

    pub const READ: SyscallNumber = 3;
    pub const WRITE: SyscallNumber = 4;
    pub const CLOSE: SyscallNumber = 6;
    pub const DUP: SyscallNumber = 41;
    pub const FCNTL: SyscallNumber = 92;
    pub const GETPID: SyscallNumber = 20;
    pub const GETPPID: SyscallNumber = 39;
    pub const GETUID: SyscallNumber = 24;
}

pub use table::*;
