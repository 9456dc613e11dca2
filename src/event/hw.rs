use super::EventConfig;
use crate::ffi::bindings as b;

/// Generalized hardware counter events.
///
/// Availability depends on the host PMU; opening a counter for an event the
/// CPU does not implement fails with
/// [`UnsupportedEvent`][crate::count::OpenError::UnsupportedEvent].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hardware {
    CpuCycle,
    BusCycle,
    RefCpuCycle,

    CacheMiss,
    CacheAccess,

    BranchMiss,
    BranchInstr,

    BackendStalledCycle,
    FrontendStalledCycle,

    /// Retired instructions.
    Instr,
}

super::try_from!(Hardware, value, {
    let config = match value {
        Hardware::CpuCycle => b::PERF_COUNT_HW_CPU_CYCLES,
        Hardware::BusCycle => b::PERF_COUNT_HW_BUS_CYCLES,
        Hardware::RefCpuCycle => b::PERF_COUNT_HW_REF_CPU_CYCLES,

        Hardware::CacheMiss => b::PERF_COUNT_HW_CACHE_MISSES,
        Hardware::CacheAccess => b::PERF_COUNT_HW_CACHE_REFERENCES,

        Hardware::BranchMiss => b::PERF_COUNT_HW_BRANCH_MISSES,
        Hardware::BranchInstr => b::PERF_COUNT_HW_BRANCH_INSTRUCTIONS,

        Hardware::BackendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_BACKEND,
        Hardware::FrontendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_FRONTEND,

        Hardware::Instr => b::PERF_COUNT_HW_INSTRUCTIONS,
    };

    let event_config = EventConfig {
        ty: b::PERF_TYPE_HARDWARE,
        config,
    };

    Ok(Self(event_config))
});
