use crate::error::{Entity, LogisticsError};
use crate::route::RouteTable;
use crate::shipment::Shipment;
use crate::status::ShipmentStatus;
use crate::vehicle::Vehicle;
use tracing::{debug, warn};

/// In-memory owner of every vehicle, shipment and route.
///
/// Vehicles and shipments keep their insertion order. Ids are not required to
/// be unique: lookups and updates always address the first match.
///
/// Example
/// ```
/// use cat_logistics::{LogisticsRegistry, Shipment, ShipmentStatus};
/// let mut reg = LogisticsRegistry::new();
/// reg.add_shipment(Shipment::new("S1"));
/// reg.update_shipment_status("S1", ShipmentStatus::InTransit).unwrap();
/// let report: Vec<_> = reg.track_shipments().collect();
/// assert_eq!(report, vec![("S1", "Shipment is in transit.")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogisticsRegistry {
    vehicles: Vec<Vehicle>,
    shipments: Vec<Shipment>,
    routes: RouteTable,
}

impl LogisticsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vehicle. Duplicate ids are accepted.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        debug!(vehicle_id = vehicle.id(), location = vehicle.location(), "vehicle added");
        self.vehicles.push(vehicle);
    }

    /// Append a shipment. Duplicate ids are accepted.
    pub fn add_shipment(&mut self, shipment: Shipment) {
        debug!(shipment_id = shipment.id(), "shipment added");
        self.shipments.push(shipment);
    }

    pub fn add_route(&mut self, start: impl Into<String>, end: impl Into<String>) {
        let (start, end) = (start.into(), end.into());
        debug!(%start, %end, "route added");
        if let Some(previous) = self.routes.add_route(start, end) {
            debug!(%previous, "route overwritten");
        }
    }

    /// Set the status of the first shipment with `id` and return the new description.
    pub fn update_shipment_status(
        &mut self,
        id: &str,
        status: ShipmentStatus,
    ) -> Result<&'static str, LogisticsError> {
        match self.shipments.iter_mut().find(|s| s.id() == id) {
            Some(shipment) => {
                debug!(shipment_id = id, %status, "shipment status updated");
                Ok(shipment.set_status(status))
            }
            None => {
                warn!(shipment_id = id, "shipment not found");
                Err(LogisticsError::NotFound {
                    entity: Entity::Shipment,
                    id: id.to_string(),
                })
            }
        }
    }

    /// Move the first vehicle with `id` to `location`.
    pub fn update_vehicle_location(
        &mut self,
        id: &str,
        location: impl Into<String>,
    ) -> Result<(), LogisticsError> {
        match self.vehicles.iter_mut().find(|v| v.id() == id) {
            Some(vehicle) => {
                let location = location.into();
                debug!(vehicle_id = id, %location, "vehicle location updated");
                vehicle.update_location(location);
                Ok(())
            }
            None => {
                warn!(vehicle_id = id, "vehicle not found");
                Err(LogisticsError::NotFound {
                    entity: Entity::Vehicle,
                    id: id.to_string(),
                })
            }
        }
    }

    /// `(id, status description)` for every shipment, in insertion order.
    pub fn track_shipments(&self) -> impl Iterator<Item = (&str, &'static str)> + '_ {
        self.shipments.iter().map(Shipment::describe)
    }

    /// `(id, location)` for every vehicle, in insertion order.
    pub fn track_vehicles(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.vehicles.iter().map(Vehicle::describe)
    }

    /// `(start, end)` for every route, ascending by start.
    pub fn list_routes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.routes.list_routes()
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    pub fn shipment(&self, id: &str) -> Option<&Shipment> {
        self.shipments.iter().find(|s| s.id() == id)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shipment_reports_pending() {
        let mut reg = LogisticsRegistry::new();
        reg.add_shipment(Shipment::new("S1"));
        let report: Vec<_> = reg.track_shipments().collect();
        assert_eq!(report, vec![("S1", "Shipment is pending.")]);
    }

    #[test]
    fn test_update_status_then_track() {
        let mut reg = LogisticsRegistry::new();
        reg.add_shipment(Shipment::new("S1"));
        let desc = reg
            .update_shipment_status("S1", ShipmentStatus::InTransit)
            .unwrap();
        assert_eq!(desc, "Shipment is in transit.");
        let report: Vec<_> = reg.track_shipments().collect();
        assert_eq!(report, vec![("S1", "Shipment is in transit.")]);
    }

    #[test]
    fn test_update_status_on_empty_registry_is_not_found() {
        let mut reg = LogisticsRegistry::new();
        let res = reg.update_shipment_status("S9", ShipmentStatus::Delivered);
        assert_eq!(
            res,
            Err(LogisticsError::NotFound {
                entity: Entity::Shipment,
                id: "S9".to_string()
            })
        );
        assert!(reg.shipments().is_empty());
        assert_eq!(reg.track_shipments().count(), 0);
    }

    #[test]
    fn test_update_vehicle_location() {
        let mut reg = LogisticsRegistry::new();
        reg.add_vehicle(Vehicle::new("V1", "Chicago"));
        reg.update_vehicle_location("V1", "Dallas").unwrap();
        let report: Vec<_> = reg.track_vehicles().collect();
        assert_eq!(report, vec![("V1", "Dallas")]);
    }

    #[test]
    fn test_update_missing_vehicle_leaves_state_unchanged() {
        let mut reg = LogisticsRegistry::new();
        reg.add_vehicle(Vehicle::new("V1", "Chicago"));
        let before = reg.vehicles().to_vec();
        let err = reg.update_vehicle_location("V2", "Dallas").unwrap_err();
        assert_eq!(err.to_string(), "Vehicle ID not found!");
        assert_eq!(reg.vehicles(), before.as_slice());
    }

    #[test]
    fn test_only_matching_shipment_changes() {
        let mut reg = LogisticsRegistry::new();
        for id in ["S1", "S2", "S3"] {
            reg.add_shipment(Shipment::new(id));
        }
        reg.update_shipment_status("S2", ShipmentStatus::Delivered)
            .unwrap();
        let statuses: Vec<_> = reg.shipments().iter().map(Shipment::status).collect();
        assert_eq!(
            statuses,
            vec![
                ShipmentStatus::Pending,
                ShipmentStatus::Delivered,
                ShipmentStatus::Pending
            ]
        );
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let mut reg = LogisticsRegistry::new();
        reg.add_vehicle(Vehicle::new("V1", "Chicago"));
        reg.add_vehicle(Vehicle::new("V1", "Boston"));
        reg.update_vehicle_location("V1", "Dallas").unwrap();
        let report: Vec<_> = reg.track_vehicles().collect();
        assert_eq!(report, vec![("V1", "Dallas"), ("V1", "Boston")]);
        assert_eq!(reg.vehicle("V1").map(Vehicle::location), Some("Dallas"));

        reg.add_shipment(Shipment::new("S1"));
        reg.add_shipment(Shipment::new("S1"));
        reg.update_shipment_status("S1", ShipmentStatus::InTransit)
            .unwrap();
        let report: Vec<_> = reg.track_shipments().collect();
        assert_eq!(
            report,
            vec![
                ("S1", "Shipment is in transit."),
                ("S1", "Shipment is pending.")
            ]
        );
    }

    #[test]
    fn test_routes_sorted_and_overwritten() {
        let mut reg = LogisticsRegistry::new();
        reg.add_route("NY", "LA");
        reg.add_route("LA", "SF");
        reg.add_route("NY", "Chicago");
        let routes: Vec<_> = reg.list_routes().collect();
        assert_eq!(routes, vec![("LA", "SF"), ("NY", "Chicago")]);
        assert_eq!(reg.routes().len(), 2);
    }
}
