//! Syscall ABI Types
//!
//! Every supported target passes the syscall number and arguments in
//! 64-bit registers and returns a 64-bit signed value.
//!
//! | Target        | Instruction | Number | Arguments                  | Return |
//! |---------------|-------------|--------|----------------------------|--------|
//! | Linux aarch64 | `svc #0`    | X8     | X0-X5                      | X0     |
//! | Linux x86_64  | `syscall`   | RAX    | RDI, RSI, RDX, R10, R8, R9 | RAX    |

use core::mem::size_of;

use crate::error::{Error, Result};

/// Platform-defined syscall identifier. Never validated.
pub type SyscallNumber = i64;

/// One register-sized syscall argument.
pub type SyscallArgument = u64;

/// Raw syscall return value, including any error sentinel.
pub type SyscallResult = i64;

/// Maximum number of arguments a syscall can take.
pub const MAX_ARGS: usize = 6;

// The resolved entry point takes C `long`s, which must be one register wide.
const _: () = assert!(size_of::<libc::c_long>() == size_of::<SyscallArgument>());
const _: () = assert!(size_of::<usize>() == size_of::<SyscallArgument>());

/// Copy `args` into a full argument block, zero-filling unused slots.
///
/// # Errors
/// `ArgumentCountExceeded` if more than [`MAX_ARGS`] arguments are given.
pub(crate) fn pad_arguments(args: &[SyscallArgument]) -> Result<[SyscallArgument; MAX_ARGS]> {
    if args.len() > MAX_ARGS {
        return Err(Error::ArgumentCountExceeded {
            count: args.len(),
            max: MAX_ARGS,
        });
    }

    let mut block = [0; MAX_ARGS];
    block[..args.len()].copy_from_slice(args);
    Ok(block)
}
