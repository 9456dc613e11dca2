use std::borrow::Borrow;
use std::fs::File;
use std::io::{self, ErrorKind};

use thiserror::Error;

use crate::config::attr::from;
use crate::config::{Opts, Target};
use crate::event::Event;
use crate::ffi::{bindings as b, syscall};


/// Why the kernel refused to open a counter.
///
/// The raw errno is preserved as the error source. `PermissionDenied` is the
/// common case on locked-down hosts, where `/proc/sys/kernel/perf_event_paranoid`
/// restricts counter access to privileged callers.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("permission denied (see /proc/sys/kernel/perf_event_paranoid)")]
    PermissionDenied(#[source] io::Error),

    #[error("event not supported by this CPU or kernel")]
    UnsupportedEvent(#[source] io::Error),

    #[error("resource limit exceeded")]
    ResourceLimit(#[source] io::Error),

    #[error(transparent)]
    Other(#[from] io::Error),
}

impl OpenError {
    fn from_open(e: io::Error) -> Self {
        if e.kind() == ErrorKind::Unsupported {
            return Self::UnsupportedEvent(e);
        }
        match e.raw_os_error() {
            Some(libc::EACCES | libc::EPERM) => Self::PermissionDenied(e),
            Some(libc::ENOENT | libc::ENODEV | libc::EOPNOTSUPP | libc::ENOSYS) => {
                Self::UnsupportedEvent(e)
            }
            Some(libc::EMFILE | libc::ENFILE | libc::ENOSPC) => Self::ResourceLimit(e),
            _ => Self::Other(e),
        }
    }
}

/// A single hardware or software event counter.
///
/// The counter owns its perf fd, so the kernel resource is released when
/// the counter goes out of scope, on every exit path.
pub struct Counter {
    perf: File,
}

impl Counter {
    /// Opens a counter for `event` on `target`.
    ///
    /// The attribute record is zero-initialized, sized to the layout the
    /// kernel expects, and filled from the event config and `opts`. A denied
    /// open surfaces as a typed [`OpenError`] instead of an unusable fd.
    pub fn new(
        event: impl TryInto<Event, Error = io::Error>,
        target: impl Into<Target>,
        opts: impl Borrow<Opts>,
    ) -> Result<Self, OpenError> {
        let target = target.into();
        let Event(event_cfg) = event.try_into()?;
        let attr = from(event_cfg, opts.borrow());
        let perf = syscall!(
            perf_event_open,
            &attr,
            target.pid,
            target.cpu,
            -1,
            b::PERF_FLAG_FD_CLOEXEC,
        )
        .map_err(OpenError::from_open)?;

        Ok(Self { perf })
    }

    pub fn file(&self) -> &File {
        &self.perf
    }

    /// Kernel-assigned event id.
    pub fn id(&self) -> io::Result<u64> {
        let mut id: u64 = 0;
        syscall!(ioctl_argp, &self.perf, b::PERF_EVENT_IOC_ID, &mut id)?;
        Ok(id)
    }

    pub fn enable(&self) -> io::Result<()> {
        syscall!(ioctl, &self.perf, b::PERF_EVENT_IOC_ENABLE)?;
        Ok(())
    }

    pub fn disable(&self) -> io::Result<()> {
        syscall!(ioctl, &self.perf, b::PERF_EVENT_IOC_DISABLE)?;
        Ok(())
    }

    /// Zeroes the accumulated count without closing the counter.
    pub fn reset(&self) -> io::Result<()> {
        syscall!(ioctl, &self.perf, b::PERF_EVENT_IOC_RESET)?;
        Ok(())
    }

    /// Reads the current counter value.
    ///
    /// The value lands in a dedicated buffer owned by this call; a read
    /// shorter than one `u64` is an error, not a partial result.
    pub fn count(&self) -> io::Result<u64> {
        let mut buf = [0u8; size_of::<u64>()];
        let bytes = syscall!(read, &self.perf, &mut buf)?;
        if bytes < buf.len() {
            return Err(ErrorKind::UnexpectedEof.into());
        }
        Ok(u64::from_ne_bytes(buf))
    }
}
