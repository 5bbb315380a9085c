use crate::registry::LogisticsRegistry;

/// Mutable state a command acts on during one run of the shell.
///
/// The session contains:
/// - `registry`: every vehicle, shipment and route entered so far.
/// - `should_exit`: a flag the read loop checks to know when to stop.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Records entered during this run. Discarded when the process ends.
    pub registry: LogisticsRegistry,
    /// When set to true, the read loop stops after the current command.
    pub should_exit: bool,
}

impl Session {
    /// Start an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over an existing registry.
    pub fn with_registry(registry: LogisticsRegistry) -> Self {
        Self {
            registry,
            should_exit: false,
        }
    }
}
