use macroquad::prelude::*;
use skyforge_core::{GROUND_HEIGHT, Session, SessionState, Vehicle, Viewport};

pub const FONT_SIZE: f32 = 36.0;
pub const MARKER_RADIUS: f32 = 10.0;
pub const TITLE_TEXT: &str = "Select an aircraft:";
const TITLE_POSITION: Vec2 = Vec2::new(100.0, 100.0);
const LABEL_OFFSET: Vec2 = Vec2::new(20.0, 15.0);
const HUD_POSITION: Vec2 = Vec2::new(20.0, 20.0);

pub const BACKGROUND: Color = Color::from_rgba(255, 255, 255, 255);
pub const SKY: Color = Color::from_rgba(0, 0, 255, 255);
pub const GROUND: Color = Color::from_rgba(0, 255, 0, 255);
pub const MARKER: Color = Color::from_rgba(255, 0, 0, 255);
const TEXT_ON_LIGHT: Color = SKY;
const TEXT_ON_SKY: Color = BACKGROUND;

pub fn altitude_label(vehicle: &Vehicle) -> String {
    format!("Altitude: {} m", vehicle.altitude())
}

pub fn draw_session(session: &Session) {
    clear_background(BACKGROUND);

    match session.state() {
        SessionState::Selecting => draw_selection_screen(session),
        SessionState::Flying | SessionState::Landed => {
            if let Some(vehicle) = session.selected_vehicle() {
                draw_flight_screen(vehicle, session.viewport());
            }
        }
    }
}

fn draw_selection_screen(session: &Session) {
    draw_text_top_left(TITLE_TEXT, TITLE_POSITION, TEXT_ON_LIGHT);

    let bands = session.layout().bands(session.vehicles().len());
    for (band, vehicle) in bands.zip(session.vehicles()) {
        draw_rectangle(band.x, band.y, band.width, band.height, GROUND);
        draw_text_top_left(
            vehicle.name(),
            vec2(band.x, band.y) + LABEL_OFFSET,
            TEXT_ON_LIGHT,
        );
    }
}

fn draw_flight_screen(vehicle: &Vehicle, viewport: Viewport) {
    let horizon = viewport.height - GROUND_HEIGHT;
    draw_rectangle(0.0, 0.0, viewport.width, horizon, SKY);
    draw_rectangle(0.0, horizon, viewport.width, GROUND_HEIGHT, GROUND);

    draw_circle(
        vehicle.position().x.trunc(),
        vehicle.position().y.trunc(),
        MARKER_RADIUS,
        MARKER,
    );

    draw_text_top_left(&altitude_label(vehicle), HUD_POSITION, TEXT_ON_SKY);
}

/// macroquad anchors text on its baseline; layout positions are top-left corners.
fn draw_text_top_left(text: &str, top_left: Vec2, color: Color) {
    let dimensions = measure_text(text, None, FONT_SIZE as u16, 1.0);
    draw_text(
        text,
        top_left.x,
        top_left.y + dimensions.offset_y,
        FONT_SIZE,
        color,
    );
}
