//! Arcade flight and mission simulation.
//!
//! [`Simulation`] owns the aircraft ([`FlightState`]), the scenario
//! ([`WorldModel`]) and the mission cursor. [`Simulation::step`] advances it
//! by one frame from a [`ControlSet`](wingtip_input::ControlSet) snapshot and
//! never touches a drawing surface; presentation reads the result afterwards.

pub mod angles;
pub mod error;
pub mod flight;
pub mod ground;
pub mod mission;
pub mod model;
pub mod simulation;
pub mod status;
pub mod world;

pub use error::ScenarioError;
pub use flight::{FlightPhase, FlightState};
pub use ground::{ContactResult, resolve_ground_contact};
pub use mission::{MissionEvent, evaluate_mission};
pub use model::FlightModel;
pub use simulation::{Simulation, StepOutcome};
pub use status::StatusMessage;
pub use world::{Runway, ScenarioFile, Waypoint, WorldModel};
