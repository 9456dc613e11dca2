//! Hand-maintained subset of `include/uapi/linux/perf_event.h`.
//!
//! The probe only needs the counting half of the perf ABI: the attribute
//! record layout, the hardware and software event ids, the counter ioctls
//! and the open flags. Values are transcribed from the v6.x uapi header.

#![allow(non_camel_case_types)]

// perf_type_id
pub const PERF_TYPE_HARDWARE: u32 = 0;
pub const PERF_TYPE_SOFTWARE: u32 = 1;

// perf_hw_id
pub const PERF_COUNT_HW_CPU_CYCLES: u64 = 0;
pub const PERF_COUNT_HW_INSTRUCTIONS: u64 = 1;
pub const PERF_COUNT_HW_CACHE_REFERENCES: u64 = 2;
pub const PERF_COUNT_HW_CACHE_MISSES: u64 = 3;
pub const PERF_COUNT_HW_BRANCH_INSTRUCTIONS: u64 = 4;
pub const PERF_COUNT_HW_BRANCH_MISSES: u64 = 5;
pub const PERF_COUNT_HW_BUS_CYCLES: u64 = 6;
pub const PERF_COUNT_HW_STALLED_CYCLES_FRONTEND: u64 = 7;
pub const PERF_COUNT_HW_STALLED_CYCLES_BACKEND: u64 = 8;
pub const PERF_COUNT_HW_REF_CPU_CYCLES: u64 = 9;

// perf_sw_ids
pub const PERF_COUNT_SW_CPU_CLOCK: u64 = 0;
pub const PERF_COUNT_SW_TASK_CLOCK: u64 = 1;
pub const PERF_COUNT_SW_PAGE_FAULTS: u64 = 2;
pub const PERF_COUNT_SW_CONTEXT_SWITCHES: u64 = 3;
pub const PERF_COUNT_SW_CPU_MIGRATIONS: u64 = 4;
pub const PERF_COUNT_SW_PAGE_FAULTS_MIN: u64 = 5;
pub const PERF_COUNT_SW_PAGE_FAULTS_MAJ: u64 = 6;
pub const PERF_COUNT_SW_DUMMY: u64 = 9;

// `perf_event_open` flags.
pub const PERF_FLAG_FD_CLOEXEC: u64 = 1 << 3;

// Counter ioctls: _IO('$', nr), plus _IOR('$', 7, u64) for the event id.
pub const PERF_EVENT_IOC_ENABLE: u64 = 0x2400;
pub const PERF_EVENT_IOC_DISABLE: u64 = 0x2401;
pub const PERF_EVENT_IOC_RESET: u64 = 0x2403;
pub const PERF_EVENT_IOC_ID: u64 = 0x8008_2407;

// The attr layout this module transcribes, the newest the kernel validates.
pub const PERF_ATTR_SIZE_VER8: u32 = 136; // adds config3

// Bits of `perf_event_attr::flags`. The uapi declares these as a bitfield;
// a plain word with named bits keeps the layout obvious without bindgen.
pub const ATTR_FLAG_DISABLED: u64 = 1 << 0;
pub const ATTR_FLAG_EXCLUDE_USER: u64 = 1 << 4;
pub const ATTR_FLAG_EXCLUDE_KERNEL: u64 = 1 << 5;
pub const ATTR_FLAG_EXCLUDE_HV: u64 = 1 << 6;
pub const ATTR_FLAG_EXCLUDE_IDLE: u64 = 1 << 7;
pub const ATTR_FLAG_EXCLUDE_HOST: u64 = 1 << 19;
pub const ATTR_FLAG_EXCLUDE_GUEST: u64 = 1 << 20;

/// `struct perf_event_attr`, through `config3` (PERF_ATTR_SIZE_VER8).
///
/// Union members are flattened to their counting-mode interpretation
/// (`sample_period` over `sample_freq`, `wakeup_events` over
/// `wakeup_watermark`, `config1`/`config2` over the breakpoint fields).
/// All fields zero means "count, no sampling, no exclusions", which is
/// what the kernel documents as the default.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct perf_event_attr {
    pub type_: u32,
    pub size: u32,
    pub config: u64,
    pub sample_period: u64,
    pub sample_type: u64,
    pub read_format: u64,
    pub flags: u64,
    pub wakeup_events: u32,
    pub bp_type: u32,
    pub config1: u64,
    pub config2: u64,
    pub branch_sample_type: u64,
    pub sample_regs_user: u64,
    pub sample_stack_user: u32,
    pub clockid: i32,
    pub sample_regs_intr: u64,
    pub aux_watermark: u32,
    pub sample_max_stack: u16,
    pub __reserved_2: u16,
    pub aux_sample_size: u32,
    pub __reserved_3: u32,
    pub sig_data: u64,
    pub config3: u64,
}

const _: () = assert!(size_of::<perf_event_attr>() == PERF_ATTR_SIZE_VER8 as usize);
