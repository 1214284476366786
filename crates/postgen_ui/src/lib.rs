//! User interface layer for the postgen post generator.
//!
//! Lists, creates and deletes events, asks the backend to generate posts,
//! and walks generated posts through draft → approved → posted.
//!
//! The [`App`] state machine is host-agnostic: operations return [`Request`]s,
//! a host executes them against a [`PostgenApi`] and hands each [`Completion`]
//! back to [`App::complete`]. Rendering goes through pure view models
//! ([`view`]) consumed by the terminal host and the HTML renderer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alerts;
mod app;
mod backend;
mod config;
mod driver;
mod event_panel;
mod generator;
pub mod html;
#[cfg(feature = "http")]
mod http_backend;
#[cfg(feature = "terminal")]
mod input;
mod post_list;
mod preferences;
#[cfg(feature = "terminal")]
mod runner;
mod sequence;
mod session;
mod tabs;
mod theme;
#[cfg(feature = "terminal")]
mod ui;
pub mod view;

pub use alerts::{Alert, AlertKind, Alerts, DEFAULT_ALERT_TTL};
pub use app::{App, Completion, Focus, PendingConfirm, Request};
pub use backend::{ApiCall, PostgenApi, Reply, execute};
pub use config::{ApiConfig, LoggingConfig, PostgenConfig, PreferencesConfig, UiConfig};
pub use driver::settle;
pub use event_panel::{EventChoices, EventForm, EventPanel, FormField};
pub use generator::{GeneratorPanel, Preview};
#[cfg(feature = "http")]
pub use http_backend::HttpBackend;
#[cfg(feature = "terminal")]
pub use input::{EventHandler, InputEvent};
pub use post_list::PostListPanel;
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
#[cfg(feature = "terminal")]
pub use runner::run_tui;
pub use sequence::{Channel, RequestSequence, Ticket};
pub use session::Session;
pub use tabs::Tab;
pub use theme::{THEME_KEY, Theme, load_theme, toggle_theme};
