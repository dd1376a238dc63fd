use crate::config::{ConfigError, FlightConfig, VehiclePreset};
use crate::coordinates::{Position, Viewport};
use crate::input::{HeldKeys, InputEvent, InputSource, LogicalKey};
use crate::layout::SelectionLayout;
use crate::vehicle::{TURN_STEP_DEGREES, Vehicle};

pub const LANDING_NOTICE: &str = "Emergency landing complete! Game over.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Selecting,
    Flying,
    Landed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    Landed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(ExitReason),
}

pub struct Session {
    frame: u64,
    vehicles: Vec<Vehicle>,
    selected: Option<usize>,
    state: SessionState,
    viewport: Viewport,
    layout: SelectionLayout,
}

impl Session {
    pub fn new(
        presets: &[VehiclePreset],
        viewport: Viewport,
        layout: SelectionLayout,
    ) -> Result<Self, ConfigError> {
        viewport.validate()?;
        if presets.is_empty() {
            return Err(ConfigError::EmptyPresets);
        }
        for preset in presets {
            preset.validate()?;
        }

        let vehicles = presets
            .iter()
            .map(|preset| Vehicle::from_preset(preset, viewport))
            .collect();

        Ok(Self {
            frame: 0,
            vehicles,
            selected: None,
            state: SessionState::Selecting,
            viewport,
            layout,
        })
    }

    pub fn from_config(config: &FlightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(&config.presets, config.viewport, config.layout)
    }

    /// Fixed steps run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.selected.and_then(|index| self.vehicles.get(index))
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> &SelectionLayout {
        &self.layout
    }

    /// Runs one display frame: every pending discrete event, then `ticks` fixed
    /// steps with the held keys sampled per step. Nothing runs after an exit.
    pub fn run_frame<S: InputSource>(&mut self, source: &mut S, ticks: u32) -> Flow {
        for event in source.drain_events() {
            if let Flow::Exit(reason) = self.handle(event) {
                return Flow::Exit(reason);
            }
        }

        for _ in 0..ticks {
            let flow = self.handle(InputEvent::FrameTick(source.held_keys()));
            if flow != Flow::Continue {
                return flow;
            }
        }
        Flow::Continue
    }

    pub fn handle(&mut self, event: InputEvent) -> Flow {
        match (self.state, event) {
            (SessionState::Landed, _) => Flow::Continue,
            (_, InputEvent::Quit) => {
                log::info!("quit requested after {} frames", self.frame);
                Flow::Exit(ExitReason::Quit)
            }
            (SessionState::Selecting, InputEvent::PointerDown { x, y }) => {
                self.select_at(Position::new(x, y));
                Flow::Continue
            }
            (SessionState::Flying, InputEvent::KeyEdge(LogicalKey::Abort)) => self.land(),
            (SessionState::Flying, InputEvent::FrameTick(held)) => {
                self.frame += 1;
                self.fly(held);
                Flow::Continue
            }
            (SessionState::Selecting, InputEvent::FrameTick(_)) => {
                self.frame += 1;
                Flow::Continue
            }
            (_, InputEvent::PointerDown { .. }) | (_, InputEvent::KeyEdge(_)) => Flow::Continue,
        }
    }

    fn select_at(&mut self, point: Position) {
        match self.layout.hit_test(point, self.vehicles.len()) {
            Some(index) => {
                self.selected = Some(index);
                self.state = SessionState::Flying;
                log::info!("selected {} for flight", self.vehicles[index].name());
            }
            None => log::debug!("click at ({}, {}) hit no aircraft", point.x, point.y),
        }
    }

    fn fly(&mut self, held: HeldKeys) {
        let viewport = self.viewport;
        let Some(vehicle) = self.selected.and_then(|index| self.vehicles.get_mut(index)) else {
            return;
        };

        if held.up {
            vehicle.climb();
        }
        if held.down {
            vehicle.descend();
        }
        if held.left {
            vehicle.turn(TURN_STEP_DEGREES);
        }
        if held.right {
            vehicle.turn(-TURN_STEP_DEGREES);
        }
        vehicle.advance(viewport);
    }

    fn land(&mut self) -> Flow {
        self.state = SessionState::Landed;
        if let Some(vehicle) = self.selected_vehicle() {
            log::info!(
                "{} landed at altitude {} after {} frames",
                vehicle.name(),
                vehicle.altitude(),
                self.frame
            );
        }
        log::info!("{}", LANDING_NOTICE);
        Flow::Exit(ExitReason::Landed)
    }
}
