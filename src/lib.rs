//! An in-memory record keeper for a small logistics operation.
//!
//! The crate keeps vehicles, shipments and routes in a [`LogisticsRegistry`]
//! for the lifetime of the process. Nothing is persisted.
//!
//! The registry can be used directly, or driven through [`Interpreter`], a
//! menu-driven shell that reads either numbered menu choices or typed commands
//! such as `add-vehicle V1 Chicago`. The public modules [`command`] and
//! [`session`] expose the traits and state for plugging in extra commands.

mod builtin;
pub mod command;
mod config;
mod error;
mod interpreter;
mod menu;
mod registry;
mod route;
pub mod session;
mod shipment;
mod status;
mod vehicle;

pub use config::Config;
pub use error::{Entity, LogisticsError};
/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
pub use registry::LogisticsRegistry;
pub use route::RouteTable;
pub use shipment::Shipment;
pub use status::ShipmentStatus;
pub use vehicle::Vehicle;
