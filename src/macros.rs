//! Call-site macros taking a variable number of arguments.

/// Invoke a syscall through libc's resolved entry point.
///
/// Expands to [`crate::invoke`] with every argument cast `as u64`, so
/// pointers, descriptors and flags can be passed as-is. Values wider
/// than a word are truncated; signed values are reinterpreted.
///
/// Must be used inside an `unsafe` block.
///
/// ```no_run
/// use rawsyscall::{numbers, syscall};
///
/// let message = b"hello\n";
/// let written = unsafe { syscall!(numbers::WRITE, 1, message.as_ptr(), message.len()) };
/// assert_eq!(written, Ok(6));
/// ```
#[macro_export]
macro_rules! syscall {
    ($number:expr $(, $arg:expr)* $(,)?) => {
        $crate::invoke(
            ($number) as $crate::SyscallNumber,
            &[$(($arg) as $crate::SyscallArgument),*],
        )
    };
}

/// Invoke a syscall with the trap instruction, bypassing libc (Linux only).
///
/// Same argument handling as [`syscall!`], expanding to
/// [`crate::invoke_direct`].
#[cfg(target_os = "linux")]
#[macro_export]
macro_rules! syscall_direct {
    ($number:expr $(, $arg:expr)* $(,)?) => {
        $crate::invoke_direct(
            ($number) as $crate::SyscallNumber,
            &[$(($arg) as $crate::SyscallArgument),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::{numbers, Error};

    #[test]
    fn test_no_arguments() {
        let pid = unsafe { syscall!(numbers::GETPID) };
        assert_eq!(pid, Ok(std::process::id() as i64));
    }

    #[test]
    fn test_number_need_not_be_literal() {
        let number = numbers::GETPID as i32;
        let pid = unsafe { syscall!(number) };
        assert_eq!(pid, Ok(std::process::id() as i64));
    }

    #[test]
    fn test_mixed_argument_types() {
        let message = b"";
        let written = unsafe { syscall!(numbers::WRITE, 2i32, message.as_ptr(), message.len(),) };
        assert_eq!(written, Ok(0));
    }

    #[test]
    fn test_seven_arguments() {
        let ret = unsafe { syscall!(numbers::GETPID, 1, 2, 3, 4, 5, 6, 7) };
        assert_eq!(ret, Err(Error::ArgumentCountExceeded { count: 7, max: 6 }));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_direct() {
        let pid = unsafe { syscall_direct!(numbers::GETPID) };
        assert_eq!(pid, Ok(std::process::id() as i64));

        let ret = unsafe { syscall_direct!(numbers::CLOSE, -1i64) };
        assert_eq!(ret, Ok(-(libc::EBADF as i64)));
    }
}
