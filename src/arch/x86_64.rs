//! x86_64 Linux syscall instruction
//!
//! # Calling Convention
//! - Syscall number in RAX
//! - Arguments in RDI, RSI, RDX, R10, R8, R9
//! - Return value in RAX
//! - `syscall` clobbers RCX (return address) and R11 (saved RFLAGS)

use core::arch::asm;

use crate::abi::{SyscallArgument, SyscallNumber, SyscallResult, MAX_ARGS};

/// Issue `syscall` with all six argument registers loaded.
///
/// # Safety
/// See [`crate::Backend::call`].
#[inline(always)]
pub(super) unsafe fn syscall6(number: SyscallNumber, args: [SyscallArgument; MAX_ARGS]) -> SyscallResult {
    let ret: SyscallResult;

    // SAFETY: registers follow the kernel ABI; memory effects are the caller's
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") number => ret,
            in("rdi") args[0],
            in("rsi") args[1],
            in("rdx") args[2],
            in("r10") args[3],
            in("r8") args[4],
            in("r9") args[5],
            lateout("rcx") _,
            lateout("r11") _,
            options(nostack),
        );
    }

    ret
}
