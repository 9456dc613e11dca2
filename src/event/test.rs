use super::hw::Hardware;
use super::sw::Software;
use super::Event;
use crate::ffi::bindings as b;

#[test]
fn instr_maps_to_hardware_instructions() {
    let Event(cfg) = Hardware::Instr.try_into().unwrap();
    assert_eq!(cfg.ty, b::PERF_TYPE_HARDWARE);
    assert_eq!(cfg.config, b::PERF_COUNT_HW_INSTRUCTIONS);
}

#[test]
fn hw_events_map_to_hardware_type() {
    let events = [
        Hardware::CpuCycle,
        Hardware::CacheMiss,
        Hardware::BranchInstr,
        Hardware::Instr,
    ];
    for ev in events {
        let Event(cfg) = ev.try_into().unwrap();
        assert_eq!(cfg.ty, b::PERF_TYPE_HARDWARE);
    }
}

#[test]
fn task_clock_maps_to_software_type() {
    let Event(cfg) = Software::TaskClock.try_into().unwrap();
    assert_eq!(cfg.ty, b::PERF_TYPE_SOFTWARE);
    assert_eq!(cfg.config, b::PERF_COUNT_SW_TASK_CLOCK);
}
