use crate::status::ShipmentStatus;

/// A shipment tracked by id. New shipments start out [`ShipmentStatus::Pending`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipment {
    id: String,
    status: ShipmentStatus,
}

impl Shipment {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: ShipmentStatus::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    /// Replace the status and return the new description.
    pub fn set_status(&mut self, status: ShipmentStatus) -> &'static str {
        self.status = status;
        status.description()
    }

    /// `(id, description)` pair for display.
    pub fn describe(&self) -> (&str, &'static str) {
        (&self.id, self.status.description())
    }
}
