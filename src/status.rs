use crate::error::LogisticsError;
use std::fmt;
use std::str::FromStr;

/// Where a shipment currently is in its lifecycle.
///
/// Any status may replace any other; there is no transition guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShipmentStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
}

impl ShipmentStatus {
    /// All statuses, in menu order.
    pub const ALL: [ShipmentStatus; 3] = [
        ShipmentStatus::Pending,
        ShipmentStatus::InTransit,
        ShipmentStatus::Delivered,
    ];

    /// Fixed human-readable description of the status.
    pub fn description(self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "Shipment is pending.",
            ShipmentStatus::InTransit => "Shipment is in transit.",
            ShipmentStatus::Delivered => "Shipment has been delivered.",
        }
    }

    /// Tag name as typed by users.
    pub fn name(self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "Pending",
            ShipmentStatus::InTransit => "InTransit",
            ShipmentStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShipmentStatus {
    type Err = LogisticsError;

    /// Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.name() == s)
            .ok_or_else(|| LogisticsError::InvalidStatus(s.to_string()))
    }
}
