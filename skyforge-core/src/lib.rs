pub mod clock;
pub mod config;
pub mod coordinates;
pub mod input;
pub mod layout;
pub mod session;
pub mod vehicle;

pub use clock::{FixedStep, MAX_STEPS_PER_FRAME};
pub use config::{ConfigError, FlightConfig, VehiclePreset, default_presets};
pub use coordinates::{Position, Viewport};
pub use input::{HeldKeys, InputEvent, InputSource, LogicalKey};
pub use layout::{Band, SelectionLayout};
pub use session::{ExitReason, Flow, LANDING_NOTICE, Session, SessionState};
pub use vehicle::{ALTITUDE_STEP, GROUND_HEIGHT, TURN_STEP_DEGREES, Vehicle};
