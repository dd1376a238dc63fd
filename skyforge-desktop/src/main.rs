use macroquad::Window;
use skyforge_core::Session;
use skyforge_desktop_lib::{EXIT_INIT_FAILURE, finish, load_config, run, window_conf};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Validate before opening a window so a bad setup exits cleanly.
    let (config, session) = match load_config().and_then(|config| {
        let session = Session::from_config(&config)?;
        Ok((config, session))
    }) {
        Ok(ready) => ready,
        Err(err) => {
            log::error!("failed to initialize: {}", err);
            eprintln!("skyforge: {}", err);
            std::process::exit(EXIT_INIT_FAILURE);
        }
    };

    Window::from_config(window_conf(&config), async move {
        let reason = run(session, config).await;
        finish(reason);
    });
}
