//! TUI launch command handler.

use postgen_error::{PostgenResult, UiError, UiErrorKind};
use postgen_ui::{
    FilePreferences, HttpBackend, PostgenApi, PostgenConfig, PreferencesConfig, run_tui,
};
use std::sync::Arc;

/// Preference store at the configured path, or the platform default.
pub fn open_preferences(config: &PreferencesConfig) -> PostgenResult<FilePreferences> {
    match config.path() {
        Some(path) => Ok(FilePreferences::new(path)),
        None => FilePreferences::at_default_location(),
    }
}

/// Launch the terminal user interface.
#[tracing::instrument(skip_all, fields(base_url = %config.api().base_url()))]
pub async fn launch_tui(config: &PostgenConfig) -> PostgenResult<()> {
    let api: Arc<dyn PostgenApi> = Arc::new(HttpBackend::from_config(config.api()));
    let mut store = open_preferences(config.preferences())?;
    let ui = config.ui().clone();
    let runtime = tokio::runtime::Handle::current();

    tracing::info!(preferences = %store.path().display(), "Launching TUI");

    // The UI loop blocks on terminal input; requests run on the runtime
    tokio::task::spawn_blocking(move || run_tui(api, &mut store, &ui, runtime))
        .await
        .map_err(|e| {
            UiError::new(UiErrorKind::Rendering(format!("Terminal task failed: {}", e)))
        })??;

    tracing::info!("TUI closed");
    Ok(())
}
