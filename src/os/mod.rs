//! Operating system entropy.
//!
//! Each platform submodule exposes the same function, `sys_random`, which
//! fills a buffer from the kernel's cryptographic random number generator.
//! The correct submodule is selected at compile time, so callers stay fully
//! portable.
//!
//! Unlike a panicking wrapper, `sys_random` reports failure through
//! [`std::io::Result`]. Share generation treats any such failure as fatal
//! for the current run, but the decision belongs to the caller.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub(crate) mod device;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub(crate) use device::*;
