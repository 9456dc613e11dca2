pub mod bindings;
#[cfg(any(target_os = "linux", target_os = "android"))]
#[path = "syscall.rs"]
pub mod sys;

macro_rules! syscall {
    ($syscall:ident, $($arg:expr),* $(,)?) => {{
        #[cfg(any(target_os = "linux", target_os = "android"))]
        let val = $crate::ffi::sys::$syscall($($arg),*);
        #[cfg(not(any(target_os = "linux", target_os = "android")))]
        let val = {
            $(let _ = $arg;)*
            Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
        };
        val
    }};
}
pub(crate) use syscall;

pub type Attr = bindings::perf_event_attr;

#[cfg(test)]
mod test;
