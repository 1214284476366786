//! HTML snapshot command handler.

use super::tui_handler::open_preferences;
use postgen_error::{PostgenResult, UiError, UiErrorKind};
use postgen_ui::{App, HttpBackend, PostgenConfig, Tab, html::render_document, settle, view::render_page};
use std::path::Path;

/// Bootstrap the app on `tab`, wait for every load, and write the page as HTML.
#[tracing::instrument(skip(config))]
pub async fn write_snapshot(config: &PostgenConfig, tab: Tab, out: Option<&Path>) -> PostgenResult<()> {
    let api = HttpBackend::from_config(config.api());
    let store = open_preferences(config.preferences())?;

    let mut app = App::new(config.ui().alert_ttl());
    let requests = app.bootstrap(&store, tab);
    let executed = settle(&mut app, &api, requests).await;
    tracing::debug!(executed, alerts = app.alerts.len(), "Snapshot loaded");

    let html = render_document(&render_page(&app));
    match out {
        Some(path) => {
            std::fs::write(path, html).map_err(|e| {
                UiError::new(UiErrorKind::Output(format!("{}: {}", path.display(), e)))
            })?;
            tracing::info!(path = %path.display(), "Snapshot written");
        }
        None => print!("{}", html),
    }
    Ok(())
}
