use std::io::ErrorKind;
use std::mem::{align_of, offset_of, size_of};

use super::bindings as b;
use super::Attr;

// The kernel rejects the open call unless `attr.size` names a layout it
// knows, so the flattened struct must stay byte-compatible with the uapi.
#[test]
fn attr_layout_matches_ver8() {
    assert_eq!(size_of::<Attr>(), b::PERF_ATTR_SIZE_VER8 as usize);
    assert_eq!(align_of::<Attr>(), align_of::<u64>());
}

#[test]
fn attr_field_offsets() {
    assert_eq!(offset_of!(Attr, config), 8);
    assert_eq!(offset_of!(Attr, read_format), 32);
    assert_eq!(offset_of!(Attr, flags), 40);
    assert_eq!(offset_of!(Attr, config1), 56);
    assert_eq!(offset_of!(Attr, sig_data), 120);
    assert_eq!(offset_of!(Attr, config3), 128);
}

// The declared size must name a layout the kernel knows; a corrupted size
// fails attr validation, which runs before any permission check.
#[test]
fn open_rejects_corrupted_attr_size() {
    let mut attr = Attr {
        type_: b::PERF_TYPE_SOFTWARE,
        config: b::PERF_COUNT_SW_DUMMY,
        ..Default::default()
    };
    attr.size = 17;

    let err = match syscall!(perf_event_open, &attr, 0, -1, -1, b::PERF_FLAG_FD_CLOEXEC) {
        Err(e) => e,
        Ok(_) => panic!("open accepted a corrupted attr size"),
    };
    if err.kind() == ErrorKind::Unsupported {
        return;
    }
    match err.raw_os_error() {
        // Hosts that block the syscall outright fail before validation.
        Some(libc::EPERM | libc::EACCES | libc::ENOSYS) => {}
        other => assert!(matches!(other, Some(libc::E2BIG | libc::EINVAL))),
    }
}

#[test]
fn attr_default_is_all_zero() {
    let attr = Attr::default();
    let bytes: [u8; b::PERF_ATTR_SIZE_VER8 as usize] = unsafe { std::mem::transmute(attr) };
    assert!(bytes.iter().all(|b| *b == 0));
}
