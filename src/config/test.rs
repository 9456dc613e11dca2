use super::attr::from;
use super::{Cpu, Opts, Priv, Proc, Target};
use crate::event::hw::Hardware;
use crate::event::Event;
use crate::ffi::bindings as b;
use crate::ffi::Attr;

#[test]
fn attr_declares_its_own_size() {
    let Event(cfg) = Hardware::Instr.try_into().unwrap();
    let attr = from(cfg, &Opts::default());
    assert_eq!(attr.size as usize, size_of::<Attr>());
}

#[test]
fn attr_carries_event_config() {
    let Event(cfg) = Hardware::Instr.try_into().unwrap();
    let attr = from(cfg, &Opts::default());
    assert_eq!(attr.type_, b::PERF_TYPE_HARDWARE);
    assert_eq!(attr.config, b::PERF_COUNT_HW_INSTRUCTIONS);
    // Defaults: count from open, no sampling, no exclusions.
    assert_eq!(attr.flags, 0);
    assert_eq!(attr.sample_period, 0);
    assert_eq!(attr.read_format, 0);
}

#[test]
fn attr_exclude_and_enable_bits() {
    let Event(cfg) = Hardware::Instr.try_into().unwrap();
    let opts = Opts {
        enable: false,
        exclude: Priv {
            kernel: true,
            hv: true,
            ..Default::default()
        },
    };
    let attr = from(cfg, &opts);
    assert_eq!(
        attr.flags,
        b::ATTR_FLAG_DISABLED | b::ATTR_FLAG_EXCLUDE_KERNEL | b::ATTR_FLAG_EXCLUDE_HV
    );
}

#[test]
fn target_encodings() {
    let t: Target = (Proc::CURRENT, Cpu::ALL).into();
    assert_eq!((t.pid, t.cpu), (0, -1));

    let t: Target = (Proc(42), Cpu(3)).into();
    assert_eq!((t.pid, t.cpu), (42, 3));

    let t: Target = (Cpu(1), Proc::ALL).into();
    assert_eq!((t.pid, t.cpu), (-1, 1));
}
