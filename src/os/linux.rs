//! Linux entropy through the `getrandom(2)` system call.
//!
//! `getrandom` draws from the kernel entropy pool and blocks only until the
//! pool has been initialized once after boot.

use std::io;

use libc::{EINTR, c_void, getrandom};

/// Fills `buf` with random bytes from the kernel.
///
/// Short reads are retried until the buffer is full; `EINTR` is retried as
/// well. Any other failure is returned as the raw OS error.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.raw_os_error() == Some(EINTR) {
                continue;
            }
            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
