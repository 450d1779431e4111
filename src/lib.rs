pub mod app;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod options;
pub mod pointer;
pub mod settings;
pub use error::{AppError, AppResult};

use app::App;
use settings::JsonSettingsFile;

/// Entrypoint used by the UI shell: set up logging and load the persisted options.
pub fn launch() -> AppResult<App<JsonSettingsFile>> {
    logging::init();
    tracing::info!("starting Pixel Booster");

    let mut app = App::with_default_settings()?;
    app.start();

    tracing::info!(
        tool = ?app.options().tool(),
        zoom = app.options().zoom(),
        "startup complete"
    );
    Ok(app)
}
