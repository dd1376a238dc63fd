use crate::config::VehiclePreset;
use crate::coordinates::{Position, Viewport};

pub const ALTITUDE_STEP: i32 = 50;
pub const TURN_STEP_DEGREES: f32 = 2.0;
/// Distance from the bottom edge where every vehicle starts, matching the ground strip.
pub const GROUND_HEIGHT: f32 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    name: String,
    cruise_speed: f32,
    max_altitude: i32,
    position: Position,
    altitude: i32,
    heading: f32,
}

impl Vehicle {
    pub fn new(
        name: impl Into<String>,
        cruise_speed: f32,
        max_altitude: i32,
        position: Position,
    ) -> Self {
        Self {
            name: name.into(),
            cruise_speed,
            max_altitude,
            position,
            altitude: 0,
            heading: 0.0,
        }
    }

    /// Builds a vehicle parked on the left quarter of the ground line.
    pub fn from_preset(preset: &VehiclePreset, viewport: Viewport) -> Self {
        let start = Position::new(
            (viewport.width / 4.0).floor(),
            viewport.height - GROUND_HEIGHT,
        );
        Self::new(
            preset.name.clone(),
            preset.cruise_speed,
            preset.max_altitude,
            viewport.clamp(start),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn max_altitude(&self) -> i32 {
        self.max_altitude
    }

    pub fn altitude(&self) -> i32 {
        self.altitude
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Moves one frame along the current heading. Screen y grows downward, so the
    /// vertical component is negated.
    pub fn advance(&mut self, viewport: Viewport) {
        let radians = self.heading.to_radians();
        let moved = Position::new(
            self.position.x + radians.cos() * self.cruise_speed,
            self.position.y - radians.sin() * self.cruise_speed,
        );
        self.position = viewport.clamp(moved);
    }

    pub fn change_altitude(&mut self, delta: i32) {
        if delta > 0 && self.altitude >= self.max_altitude {
            return;
        }
        if delta < 0 && self.altitude <= 0 {
            return;
        }
        self.altitude = self
            .altitude
            .saturating_add(delta)
            .clamp(0, self.max_altitude.max(0));
    }

    pub fn climb(&mut self) {
        self.change_altitude(ALTITUDE_STEP);
    }

    pub fn descend(&mut self) {
        self.change_altitude(-ALTITUDE_STEP);
    }

    pub fn turn(&mut self, delta_degrees: f32) {
        let next = (self.heading + delta_degrees).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
        self.heading = if next >= 360.0 { 0.0 } else { next };
    }

    pub fn set_heading(&mut self, degrees: f32) {
        self.heading = 0.0;
        self.turn(degrees);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn light() -> Vehicle {
        Vehicle::new("Light", 3.0, 5000, Position::new(256.0, 668.0))
    }

    #[test]
    fn preset_starts_on_left_quarter_of_ground_line() {
        let preset = VehiclePreset::new("Mid", 5.0, 8000);
        let vehicle = Vehicle::from_preset(&preset, Viewport::new(1024.0, 768.0));

        assert_eq!(vehicle.name(), "Mid");
        assert_eq!(vehicle.position(), Position::new(256.0, 668.0));
        assert_eq!(vehicle.altitude(), 0);
        assert_eq!(vehicle.heading(), 0.0);
    }

    #[test]
    fn advance_moves_right_at_zero_heading() {
        let mut vehicle = light();
        vehicle.advance(Viewport::default());
        assert_relative_eq!(vehicle.position.x, 259.0);
        assert_relative_eq!(vehicle.position.y, 668.0);
    }

    #[test]
    fn advance_moves_up_screen_at_ninety_degrees() {
        let mut vehicle = light();
        vehicle.set_heading(90.0);
        vehicle.advance(Viewport::default());
        assert_relative_eq!(vehicle.position.x, 256.0, epsilon = 1e-4);
        assert_relative_eq!(vehicle.position.y, 665.0, epsilon = 1e-4);
    }

    #[test]
    fn advance_stays_inside_viewport_from_any_heading_and_start() {
        let viewport = Viewport::new(200.0, 100.0);
        let starts = [
            Position::new(0.0, 0.0),
            Position::new(200.0, 100.0),
            Position::new(0.0, 100.0),
            Position::new(200.0, 0.0),
            Position::new(100.0, 50.0),
        ];

        for start in starts {
            for speed in [0.0, 3.0, 7.0, 500.0] {
                for heading in (0..360).step_by(2) {
                    let mut vehicle = Vehicle::new("scout", speed, 1000, start);
                    vehicle.set_heading(heading as f32);
                    vehicle.advance(viewport);
                    assert!(
                        viewport.contains(vehicle.position),
                        "escaped to {:?} from {:?} at {} deg",
                        vehicle.position,
                        start,
                        heading
                    );
                }
            }
        }
    }

    #[test]
    fn climb_and_descend_step_by_fifty_within_bounds() {
        for start in (0..=5000).step_by(50) {
            let mut up = light();
            up.altitude = start;
            up.climb();
            assert_eq!(up.altitude(), (start + 50).min(5000));

            let mut down = light();
            down.altitude = start;
            down.descend();
            assert_eq!(down.altitude(), (start - 50).max(0));
        }
    }

    #[test]
    fn climb_at_ceiling_is_a_fixed_point() {
        let mut vehicle = light();
        vehicle.altitude = vehicle.max_altitude();
        for _ in 0..10 {
            vehicle.climb();
            assert_eq!(vehicle.altitude(), 5000);
        }
    }

    #[test]
    fn off_grid_altitude_is_clamped_not_overshot() {
        let mut vehicle = Vehicle::new("odd", 1.0, 120, Position::default());
        vehicle.climb();
        vehicle.climb();
        vehicle.climb();
        assert_eq!(vehicle.altitude(), 120);
        vehicle.descend();
        vehicle.descend();
        vehicle.descend();
        assert_eq!(vehicle.altitude(), 0);
    }

    #[test]
    fn turn_wraps_in_both_directions() {
        for heading in (0..360).step_by(2) {
            let mut left = light();
            left.set_heading(heading as f32);
            left.turn(TURN_STEP_DEGREES);
            assert_eq!(left.heading(), ((heading + 2) % 360) as f32);

            let mut right = light();
            right.set_heading(heading as f32);
            right.turn(-TURN_STEP_DEGREES);
            assert_eq!(right.heading(), ((heading - 2 + 360) % 360) as f32);
            assert!((0.0..360.0).contains(&right.heading()));
        }
    }
}
