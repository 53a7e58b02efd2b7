//! AArch64 Linux syscall instruction
//!
//! # Calling Convention
//! - Syscall number in X8
//! - Arguments in X0-X5
//! - Return value in X0
//! - `svc #0` clobbers nothing else

use core::arch::asm;

use crate::abi::{SyscallArgument, SyscallNumber, SyscallResult, MAX_ARGS};

/// Issue `svc #0` with all six argument registers loaded.
///
/// # Safety
/// See [`crate::Backend::call`].
#[inline(always)]
pub(super) unsafe fn syscall6(number: SyscallNumber, args: [SyscallArgument; MAX_ARGS]) -> SyscallResult {
    let ret: SyscallResult;

    // SAFETY: registers follow the kernel ABI; memory effects are the caller's
    unsafe {
        asm!(
            "svc #0",
            in("x8") number,
            inlateout("x0") args[0] as SyscallResult => ret,
            in("x1") args[1],
            in("x2") args[2],
            in("x3") args[3],
            in("x4") args[4],
            in("x5") args[5],
            options(nostack),
        );
    }

    ret
}
