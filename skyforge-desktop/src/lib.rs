use macroquad::prelude::*;
use skyforge_core::{
    ConfigError, ExitReason, FixedStep, FlightConfig, Flow, LANDING_NOTICE, Session,
};

pub mod input;
pub mod render;

use crate::input::MacroquadInput;

pub const WINDOW_TITLE: &str = "Flight Simulator";
pub const EXIT_OK: i32 = 0;
pub const EXIT_INIT_FAILURE: i32 = 1;

const EMBEDDED_CONFIG: &str = include_str!("../assets/flight.json");

pub fn exit_code(reason: ExitReason) -> i32 {
    match reason {
        ExitReason::Quit | ExitReason::Landed => EXIT_OK,
    }
}

pub fn load_config() -> Result<FlightConfig, ConfigError> {
    FlightConfig::from_json_str(EMBEDDED_CONFIG)
}

pub fn window_conf(config: &FlightConfig) -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: config.viewport.width.round() as i32,
        window_height: config.viewport.height.round() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Drives the session until it asks to exit and returns the reason.
pub async fn run(mut session: Session, config: FlightConfig) -> ExitReason {
    install_panic_hook();
    prevent_quit();

    let mut input = MacroquadInput::new();
    let mut clock = FixedStep::new(config.frame_seconds());
    log::info!(
        "window {}x{} at {} frames per second, {} aircraft",
        config.viewport.width,
        config.viewport.height,
        config.frame_rate,
        session.vehicles().len()
    );

    loop {
        let ticks = clock.advance(get_frame_time());
        if let Flow::Exit(reason) = session.run_frame(&mut input, ticks) {
            return reason;
        }

        render::draw_session(&session);
        next_frame().await;
    }
}

/// Reports how the session ended and terminates the process.
pub fn finish(reason: ExitReason) -> ! {
    if reason == ExitReason::Landed {
        println!("{}", LANDING_NOTICE);
    }
    let code = exit_code(reason);
    log::info!("exiting with status {} ({:?})", code, reason);
    std::process::exit(code)
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log::error!("panic: {}", info);
        default_hook(info);
    }));
}
