//! Stdout Emitter
//!
//! Di unix, [`RawStdout`] memanggil `libc::write` langsung ke
//! `STDOUT_FILENO`. Target lain memakai `std::io::stdout()`.

use std::io::{self, Write};

/// Sink untuk file descriptor 1
///
/// Tidak ada buffer internal: setiap `write` adalah satu syscall.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawStdout;

#[cfg(unix)]
impl Write for RawStdout {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // SAFETY: pointer dan length berasal dari slice yang valid
        let ret = unsafe {
            libc::write(
                libc::STDOUT_FILENO,
                buf.as_ptr() as *const libc::c_void,
                buf.len(),
            )
        };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(ret as usize)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(not(unix))]
impl Write for RawStdout {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write(buf)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Tulis seluruh buffer ke sink
///
/// Loop sampai semua byte tertulis. `Interrupted` di-retry,
/// sink yang menerima 0 byte menghasilkan `WriteZero`.
pub fn emit_all<W: Write>(out: &mut W, buf: &[u8]) -> io::Result<()> {
    let mut written = 0;
    while written < buf.len() {
        match out.write(&buf[written..]) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "Failed to write whole buffer",
                ));
            }
            Ok(n) => written += n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    out.flush()
}

/// Emit buffer ke stdout
#[inline]
pub fn emit_stdout(buf: &[u8]) -> io::Result<()> {
    emit_all(&mut RawStdout, buf)
}
