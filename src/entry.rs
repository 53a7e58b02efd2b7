//! Syscall Entry Point Resolution
//!
//! Locates libc's variadic `syscall` function at run time with
//! `dlopen`/`dlsym` and calls it through a single function-pointer type
//! fixed at the maximum arity.
//!
//! # Design
//! - `EntryConfig` says where to look (library, symbol, `dlopen` mode)
//! - `EntryPoint` is the resolved, immutable function pointer
//! - After a successful lookup the `dlopen` handle is never closed, so a
//!   resolved pointer stays valid for the rest of the process. A failed
//!   lookup closes it again.
//!
//! # C Prototypes
//! - glibc / musl: `long syscall(long number, ...)`
//! - Apple: `int syscall(int number, ...)`
//!
//! Variadic arguments are always passed as `long`. On Apple targets they
//! land on the stack, which is what the kernel shim there expects.

use core::ffi::{c_void, CStr};
use core::fmt;
use core::mem;
use core::ptr;
use std::ffi::CString;

use bitflags::bitflags;
use libc::c_long;

use crate::abi::{SyscallArgument, SyscallNumber, SyscallResult, MAX_ARGS};
use crate::backend::Backend;
use crate::error::{Error, Result};

#[cfg(target_vendor = "apple")]
type NativeWord = libc::c_int;
#[cfg(not(target_vendor = "apple"))]
type NativeWord = c_long;

/// Shape of the resolved entry point.
type SyscallFn = unsafe extern "C" fn(NativeWord, ...) -> NativeWord;

/// Symbol resolved when no other is configured.
const DEFAULT_SYMBOL: &CStr = c"syscall";

bitflags! {
    /// `dlopen` mode used when resolving the entry point.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpenFlags: i32 {
        /// Resolve symbols as code that references them is executed.
        const LAZY = libc::RTLD_LAZY;
        /// Resolve all undefined symbols before `dlopen` returns.
        const NOW = libc::RTLD_NOW;
        /// Make the library's symbols available to later loads.
        const GLOBAL = libc::RTLD_GLOBAL;
        /// Only succeed if the library is already loaded.
        const NOLOAD = libc::RTLD_NOLOAD;
        /// Keep the library's symbols out of later loads. Zero on Linux,
        /// where it is the default whenever `GLOBAL` is absent.
        const LOCAL = libc::RTLD_LOCAL;
    }
}

impl Default for OpenFlags {
    fn default() -> Self {
        Self::NOW
    }
}

/// Where and how to look for the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryConfig {
    /// Library to open. `None` searches the running program's global
    /// symbol scope, which includes the libc it was linked against.
    pub library: Option<CString>,
    /// Symbol to look up.
    pub symbol: CString,
    /// `dlopen` mode.
    pub flags: OpenFlags,
}

impl EntryConfig {
    /// Look up `symbol` in the running program's global scope.
    pub fn with_symbol(symbol: &CStr) -> Self {
        Self {
            symbol: symbol.to_owned(),
            ..Self::default()
        }
    }
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            library: None,
            symbol: DEFAULT_SYMBOL.to_owned(),
            flags: OpenFlags::default(),
        }
    }
}

/// A resolved native syscall entry point.
#[derive(Clone, Copy)]
pub struct EntryPoint {
    func: SyscallFn,
}

impl EntryPoint {
    /// Resolve an entry point according to `config`.
    ///
    /// Each call opens a fresh reference to the library. Prefer
    /// [`crate::entry_point`] unless a non-default configuration is needed.
    ///
    /// # Errors
    /// `EntryPointResolutionFailed` if the library cannot be opened or the
    /// symbol is not defined in it. The reason is the dynamic linker's message.
    pub fn resolve(config: &EntryConfig) -> Result<Self> {
        let symbol = config.symbol.to_string_lossy().into_owned();
        let library = config
            .library
            .as_deref()
            .map_or(ptr::null(), CStr::as_ptr);

        // SAFETY: `library` is null or a valid C string that outlives the call
        let handle = unsafe { libc::dlopen(library, config.flags.bits()) };
        if handle.is_null() {
            return Err(resolution_failed(symbol));
        }

        // SAFETY: clears any stale error so the one read below belongs to dlsym
        unsafe { libc::dlerror() };

        // SAFETY: `handle` came from a successful dlopen
        let address = unsafe { libc::dlsym(handle, config.symbol.as_ptr()) };
        if address.is_null() {
            // dlclose may overwrite the dlsym message, so read it first
            let err = resolution_failed(symbol);
            // SAFETY: nothing resolved from `handle` escapes this function
            unsafe { libc::dlclose(handle) };
            return Err(err);
        }

        // SAFETY: the symbol is libc's `syscall`, whose C prototype is
        // `SyscallFn`. A custom symbol is the caller's responsibility.
        let func = unsafe { mem::transmute::<*mut c_void, SyscallFn>(address) };

        log::debug!("resolved syscall entry point `{}` at {:p}", symbol, address);

        Ok(Self { func })
    }

    /// Address of the resolved function.
    pub fn address(&self) -> *const c_void {
        self.func as *const c_void
    }
}

impl Backend for EntryPoint {
    #[inline]
    unsafe fn call(&self, number: SyscallNumber, args: [SyscallArgument; MAX_ARGS]) -> SyscallResult {
        let [a0, a1, a2, a3, a4, a5] = args;

        // SAFETY: the pointer has the `SyscallFn` prototype; the caller
        // upholds the contract of the kernel operation itself
        let ret = unsafe {
            (self.func)(
                number as NativeWord,
                a0 as c_long,
                a1 as c_long,
                a2 as c_long,
                a3 as c_long,
                a4 as c_long,
                a5 as c_long,
            )
        };

        ret as SyscallResult
    }
}

impl fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryPoint({:p})", self.address())
    }
}

/// Build a resolution error from the dynamic linker's last message.
fn resolution_failed(symbol: String) -> Error {
    // SAFETY: dlerror returns null or a NUL-terminated string valid until
    // the next dl* call on this thread; it is copied out immediately
    let reason = unsafe {
        let message = libc::dlerror();
        if message.is_null() {
            String::from("unknown dynamic linker error")
        } else {
            CStr::from_ptr(message).to_string_lossy().into_owned()
        }
    };

    log::warn!("cannot resolve syscall entry point `{}`: {}", symbol, reason);

    Error::EntryPointResolutionFailed { symbol, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers;

    #[test]
    fn test_default_config() {
        let config = EntryConfig::default();
        assert_eq!(config.library, None);
        assert_eq!(config.symbol.as_c_str(), c"syscall");
        assert_eq!(config.flags, OpenFlags::NOW);
    }

    #[test]
    fn test_flag_bits() {
        assert_eq!(OpenFlags::NOW.bits(), libc::RTLD_NOW);
        assert_eq!(
            (OpenFlags::LAZY | OpenFlags::GLOBAL).bits(),
            libc::RTLD_LAZY | libc::RTLD_GLOBAL
        );
    }

    #[test]
    fn test_local_flag_bits() {
        assert_eq!(OpenFlags::LOCAL.bits(), libc::RTLD_LOCAL);
        assert_eq!((OpenFlags::NOW | OpenFlags::LOCAL).bits(), libc::RTLD_NOW | libc::RTLD_LOCAL);
    }

    #[test]
    fn test_resolve_default() {
        let entry = EntryPoint::resolve(&EntryConfig::default()).unwrap();
        assert!(!entry.address().is_null());
    }

    #[test]
    fn test_resolve_missing_symbol() {
        let config = EntryConfig::with_symbol(c"rawsyscall_no_such_entry_point");
        match EntryPoint::resolve(&config) {
            Err(Error::EntryPointResolutionFailed { symbol, reason }) => {
                assert_eq!(symbol, "rawsyscall_no_such_entry_point");
                assert!(!reason.is_empty());
            }
            other => panic!("expected resolution failure, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_missing_library() {
        let config = EntryConfig {
            library: Some(c"/nonexistent/librawsyscall_missing.so".to_owned()),
            ..EntryConfig::default()
        };
        assert!(matches!(
            EntryPoint::resolve(&config),
            Err(Error::EntryPointResolutionFailed { .. })
        ));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_missing_symbol_releases_library() {
        const LIBRARY: &CStr = c"libz.so.1";

        let is_loaded = || {
            // SAFETY: NOLOAD never maps anything; a hit only takes a reference
            let handle = unsafe { libc::dlopen(LIBRARY.as_ptr(), libc::RTLD_NOW | libc::RTLD_NOLOAD) };
            if handle.is_null() {
                return false;
            }
            // SAFETY: drops the reference taken just above
            unsafe { libc::dlclose(handle) };
            true
        };

        if is_loaded() {
            return;
        }

        let config = EntryConfig {
            library: Some(LIBRARY.to_owned()),
            symbol: c"rawsyscall_no_such_entry_point".to_owned(),
            flags: OpenFlags::NOW,
        };

        match EntryPoint::resolve(&config) {
            Err(Error::EntryPointResolutionFailed { reason, .. }) => {
                assert!(reason.contains("rawsyscall_no_such_entry_point"));
                assert!(!is_loaded());
            }
            // libz is not installed on this host; nothing was loaded
            Err(_) => assert!(!is_loaded()),
            Ok(entry) => panic!("unexpected entry point {:?}", entry),
        }
    }

    #[test]
    fn test_call_getpid() {
        let entry = EntryPoint::resolve(&EntryConfig::default()).unwrap();
        let pid = unsafe { entry.call(numbers::GETPID, [0; MAX_ARGS]) };
        assert_eq!(pid, std::process::id() as SyscallResult);
    }

    #[test]
    fn test_call_failure_is_libc_sentinel() {
        let entry = EntryPoint::resolve(&EntryConfig::default()).unwrap();
        let ret = unsafe { entry.call(numbers::CLOSE, [-1i64 as u64, 0, 0, 0, 0, 0]) };
        assert_eq!(ret, -1);
        assert_eq!(
            std::io::Error::last_os_error().raw_os_error(),
            Some(libc::EBADF)
        );
    }
}
