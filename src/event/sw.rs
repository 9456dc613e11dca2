use super::EventConfig;
use crate::ffi::bindings as b;

/// Software events counted by the kernel itself.
///
/// These work without PMU access, which makes them useful probe targets on
/// virtualized hosts where hardware counters are unavailable.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Software {
    CpuClock,
    TaskClock,

    PageFault,
    MinorPageFault,
    MajorPageFault,

    CtxSwitch,
    CpuMigration,

    /// A placeholder event that counts nothing.
    Dummy,
}

super::try_from!(Software, value, {
    let config = match value {
        Software::CpuClock => b::PERF_COUNT_SW_CPU_CLOCK,
        Software::TaskClock => b::PERF_COUNT_SW_TASK_CLOCK,

        Software::PageFault => b::PERF_COUNT_SW_PAGE_FAULTS,
        Software::MinorPageFault => b::PERF_COUNT_SW_PAGE_FAULTS_MIN,
        Software::MajorPageFault => b::PERF_COUNT_SW_PAGE_FAULTS_MAJ,

        Software::CtxSwitch => b::PERF_COUNT_SW_CONTEXT_SWITCHES,
        Software::CpuMigration => b::PERF_COUNT_SW_CPU_MIGRATIONS,

        Software::Dummy => b::PERF_COUNT_SW_DUMMY,
    };

    let event_config = EventConfig {
        ty: b::PERF_TYPE_SOFTWARE,
        config,
    };

    Ok(Self(event_config))
});
