use std::fmt;
use thiserror::Error;

/// Kind of record an id lookup was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Vehicle,
    Shipment,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Vehicle => f.write_str("Vehicle"),
            Entity::Shipment => f.write_str("Shipment"),
        }
    }
}

/// Errors reported by the registry and by status parsing.
///
/// None of them is fatal: the registry stays usable after any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogisticsError {
    /// An update targeted an id that is not in the collection.
    #[error("{entity} ID not found!")]
    NotFound { entity: Entity, id: String },

    /// Status text did not name a known status.
    #[error("Invalid status: {0} (expected Pending, InTransit or Delivered)")]
    InvalidStatus(String),
}
