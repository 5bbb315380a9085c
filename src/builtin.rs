use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::interpreter::Factory;
use crate::menu;
use crate::session::Session;
use crate::shipment::Shipment;
use crate::status::ShipmentStatus;
use crate::vehicle::Vehicle;
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::io::Write;

/// Built-in commands known to the shell at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed
/// directly against the session's registry.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "add-vehicle" or "routes".
    fn name() -> &'static str;

    /// Executes the command using the provided output and session.
    ///
    /// Return value follows shell conventions: 0 for success, non-zero for error.
    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        session: &mut Session,
    ) -> Result<ExitCode> {
        match <T as BuiltinCommand>::execute(*self, stdout, session) {
            Ok(x) => Ok(x),
            Err(e) => {
                writeln!(stdout, "{e}")?;
                Ok(1)
            }
        }
    }
}

struct InvalidArgs {
    output: String,
    is_error: bool,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        _session: &mut Session,
    ) -> Result<ExitCode> {
        writeln!(stdout, "{}", self.output.trim_end())?;
        Ok(if self.is_error { 1 } else { 0 })
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            Some(match T::from_args(&[name], args) {
                Ok(cmd) => Box::new(cmd),
                Err(EarlyExit { output, status }) => Box::new(InvalidArgs {
                    output,
                    is_error: status.is_err(),
                }),
            })
        } else {
            None
        }
    }
}

#[derive(FromArgs)]
/// Register a vehicle at its current location.
pub struct AddVehicle {
    #[argh(positional)]
    /// vehicle id; duplicates are accepted.
    pub id: String,

    #[argh(positional)]
    /// where the vehicle is now.
    pub location: String,
}

impl BuiltinCommand for AddVehicle {
    fn name() -> &'static str {
        "add-vehicle"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        session
            .registry
            .add_vehicle(Vehicle::new(self.id, self.location));
        writeln!(stdout, "Vehicle added successfully!")?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Register a new shipment. It starts out pending.
pub struct AddShipment {
    #[argh(positional)]
    /// shipment id; duplicates are accepted.
    pub id: String,
}

impl BuiltinCommand for AddShipment {
    fn name() -> &'static str {
        "add-shipment"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        session.registry.add_shipment(Shipment::new(self.id));
        writeln!(stdout, "Shipment added successfully!")?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Add a route, replacing any route that leaves the same start location.
pub struct AddRoute {
    #[argh(positional)]
    /// start location.
    pub start: String,

    #[argh(positional)]
    /// end location.
    pub end: String,
}

impl BuiltinCommand for AddRoute {
    fn name() -> &'static str {
        "add-route"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        session.registry.add_route(self.start, self.end);
        writeln!(stdout, "Route added successfully!")?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Set the status of a shipment.
pub struct UpdateStatus {
    #[argh(positional)]
    /// shipment id; the first shipment with this id is updated.
    pub id: String,

    #[argh(positional)]
    /// one of Pending, InTransit, Delivered.
    pub status: String,
}

impl BuiltinCommand for UpdateStatus {
    fn name() -> &'static str {
        "update-status"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        // Rejected before the registry is touched.
        let status: ShipmentStatus = self.status.parse()?;
        let description = session.registry.update_shipment_status(&self.id, status)?;
        writeln!(stdout, "Shipment ID: {} -> {}", self.id, description)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print every shipment with its status, in the order they were added.
pub struct TrackShipments {}

impl BuiltinCommand for TrackShipments {
    fn name() -> &'static str {
        "track-shipments"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        writeln!(stdout, "Concurrent Shipment Tracking:")?;
        for (id, description) in session.registry.track_shipments() {
            writeln!(stdout, "Shipment ID: {id} -> {description}")?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print every vehicle with its location, in the order they were added.
pub struct TrackVehicles {}

impl BuiltinCommand for TrackVehicles {
    fn name() -> &'static str {
        "track-vehicles"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        writeln!(stdout, "\nConcurrent Vehicle Tracking:")?;
        for (id, location) in session.registry.track_vehicles() {
            writeln!(stdout, "Vehicle ID: {id}, Current Location: {location}")?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print all routes sorted by start location.
pub struct Routes {}

impl BuiltinCommand for Routes {
    fn name() -> &'static str {
        "routes"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        writeln!(stdout, "Printing all routes:")?;
        for (start, end) in session.registry.list_routes() {
            writeln!(stdout, "Route from {start} to {end}")?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Move a vehicle to a new location.
pub struct UpdateLocation {
    #[argh(positional)]
    /// vehicle id; the first vehicle with this id is updated.
    pub id: String,

    #[argh(positional)]
    /// new location.
    pub location: String,
}

impl BuiltinCommand for UpdateLocation {
    fn name() -> &'static str {
        "update-location"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        session
            .registry
            .update_vehicle_location(&self.id, self.location)?;
        writeln!(stdout, "Vehicle location updated successfully!")?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print the numbered menu.
pub struct Menu {}

impl BuiltinCommand for Menu {
    fn name() -> &'static str {
        "menu"
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<ExitCode> {
        menu::render(stdout)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// End the session. All records are discarded.
pub struct Exit {}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        writeln!(stdout, "Exiting the system.")?;
        session.should_exit = true;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogisticsRegistry;

    fn run<C: BuiltinCommand>(cmd: C, session: &mut Session) -> (ExitCode, String) {
        let mut out: Vec<u8> = Vec::new();
        let code = cmd.execute(&mut out, session).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_add_vehicle_then_track() {
        let mut session = Session::new();
        let (code, out) = run(
            AddVehicle {
                id: "V1".to_string(),
                location: "Chicago".to_string(),
            },
            &mut session,
        );
        assert_eq!(code, 0);
        assert_eq!(out, "Vehicle added successfully!\n");

        let (_, out) = run(TrackVehicles {}, &mut session);
        assert_eq!(
            out,
            "\nConcurrent Vehicle Tracking:\nVehicle ID: V1, Current Location: Chicago\n"
        );
    }

    #[test]
    fn test_update_status_reports_description() {
        let mut registry = LogisticsRegistry::new();
        registry.add_shipment(Shipment::new("S1"));
        let mut session = Session::with_registry(registry);

        let (code, out) = run(
            UpdateStatus {
                id: "S1".to_string(),
                status: "InTransit".to_string(),
            },
            &mut session,
        );
        assert_eq!(code, 0);
        assert_eq!(out, "Shipment ID: S1 -> Shipment is in transit.\n");
    }

    #[test]
    fn test_update_status_invalid_name_is_rejected() {
        let mut registry = LogisticsRegistry::new();
        registry.add_shipment(Shipment::new("S1"));
        let mut session = Session::with_registry(registry);

        let cmd = Box::new(UpdateStatus {
            id: "S1".to_string(),
            status: "Lost".to_string(),
        });
        let mut out: Vec<u8> = Vec::new();
        let code = ExecutableCommand::execute(cmd, &mut out, &mut session).unwrap();

        assert_eq!(code, 1);
        assert!(String::from_utf8(out).unwrap().starts_with("Invalid status: Lost"));
        assert_eq!(
            session.registry.shipment("S1").map(Shipment::status),
            Some(ShipmentStatus::Pending)
        );
    }

    #[test]
    fn test_update_missing_shipment_reports_not_found() {
        let mut session = Session::new();
        let cmd = Box::new(UpdateStatus {
            id: "S9".to_string(),
            status: "Delivered".to_string(),
        });
        let mut out: Vec<u8> = Vec::new();
        let code = ExecutableCommand::execute(cmd, &mut out, &mut session).unwrap();

        assert_eq!(code, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "Shipment ID not found!\n");
        assert!(session.registry.shipments().is_empty());
    }

    #[test]
    fn test_update_location_missing_vehicle() {
        let mut session = Session::new();
        let res = UpdateLocation {
            id: "V1".to_string(),
            location: "Dallas".to_string(),
        }
        .execute(&mut Vec::<u8>::new(), &mut session);
        assert!(res.is_err());
    }

    #[test]
    fn test_routes_prints_sorted() {
        let mut session = Session::new();
        for (start, end) in [("NY", "LA"), ("LA", "SF"), ("NY", "Chicago")] {
            run(
                AddRoute {
                    start: start.to_string(),
                    end: end.to_string(),
                },
                &mut session,
            );
        }
        let (_, out) = run(Routes {}, &mut session);
        assert_eq!(
            out,
            "Printing all routes:\nRoute from LA to SF\nRoute from NY to Chicago\n"
        );
    }

    #[test]
    fn test_exit_sets_flag() {
        let mut session = Session::new();
        let (code, out) = run(Exit {}, &mut session);
        assert_eq!(code, 0);
        assert_eq!(out, "Exiting the system.\n");
        assert!(session.should_exit);
    }

    #[test]
    fn test_factory_reports_missing_arguments() {
        let factory = Factory::<AddVehicle>::default();
        let cmd = factory.try_create("add-vehicle", &["V1"]).unwrap();
        let mut out: Vec<u8> = Vec::new();
        let code = cmd.execute(&mut out, &mut Session::new()).unwrap();
        assert_eq!(code, 1);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_factory_ignores_other_names() {
        let factory = Factory::<AddShipment>::default();
        assert!(factory.try_create("add-vehicle", &["V1", "NY"]).is_none());
    }
}
