pub(super) mod attr;
mod target;

pub use target::*;

/// Counter options.
///
/// The all-default options reproduce a counter opened with a zeroed
/// attribute record: counting starts as soon as the open call returns,
/// with no sampling and no privilege exclusions.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opts {
    /// Start counting immediately on open.
    ///
    /// When disabled, the counter stays paused until
    /// [`Counter::enable`][crate::count::Counter::enable] is called.
    pub enable: bool,

    pub exclude: Priv,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            enable: true,
            exclude: Priv::default(),
        }
    }
}

/// Privilege levels to exclude from counting.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Priv {
    /// User space.
    pub user: bool,

    /// Kernel space.
    pub kernel: bool,

    /// Hypervisor.
    pub hv: bool,

    /// Host mode.
    pub host: bool,

    /// Guest mode.
    pub guest: bool,

    /// Idle task.
    pub idle: bool,
}

#[cfg(test)]
mod test;
