//! Terminal host: main loop and request dispatch.
//!
//! Requests run as tokio tasks on the provided runtime; their completions come
//! back over a channel and are applied on the UI thread between frames.

use crate::{
    App, Completion, EventHandler, Focus, InputEvent, PostgenApi, PreferenceStore, Request, Tab,
    UiConfig,
};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use postgen_core::PostStatus;
use postgen_error::{PostgenResult, UiError, UiErrorKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the terminal UI until the user quits.
///
/// Blocks the calling thread; `runtime` executes the network requests.
#[tracing::instrument(skip_all)]
pub fn run_tui(
    api: Arc<dyn PostgenApi>,
    store: &mut dyn PreferenceStore,
    config: &UiConfig,
    runtime: Handle,
) -> PostgenResult<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, api, store, config, runtime);
    let restored = restore_terminal(&mut terminal);
    // The loop error is the more useful one to report
    result.and(restored)
}

fn setup_terminal() -> PostgenResult<Tui> {
    enable_raw_mode().map_err(|e| {
        UiError::new(UiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        UiError::new(UiErrorKind::TerminalSetup(format!(
            "Failed to enter alternate screen: {}",
            e
        )))
    })?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        UiError::new(UiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> PostgenResult<()> {
    disable_raw_mode().map_err(|e| {
        UiError::new(UiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
        UiError::new(UiErrorKind::TerminalRestore(format!(
            "Failed to leave alternate screen: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        UiError::new(UiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })?;
    Ok(())
}

/// Spawns requests and collects their completions.
struct Dispatcher {
    api: Arc<dyn PostgenApi>,
    runtime: Handle,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
}

impl Dispatcher {
    fn new(api: Arc<dyn PostgenApi>, runtime: Handle) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            api,
            runtime,
            tx,
            rx,
        }
    }

    fn dispatch(&self, requests: Vec<Request>) {
        for request in requests {
            let api = Arc::clone(&self.api);
            let tx = self.tx.clone();
            self.runtime.spawn(async move {
                let result = crate::execute(api.as_ref(), &request.call).await;
                if tx.send(Completion { request, result }).is_err() {
                    tracing::debug!("UI closed before request completed");
                }
            });
        }
    }

    /// Apply every completion that has arrived, dispatching follow-ups.
    fn drain(&mut self, app: &mut App) {
        while let Ok(completion) = self.rx.try_recv() {
            let follow_ups = app.complete(completion);
            self.dispatch(follow_ups);
        }
    }
}

fn event_loop(
    terminal: &mut Tui,
    api: Arc<dyn PostgenApi>,
    store: &mut dyn PreferenceStore,
    config: &UiConfig,
    runtime: Handle,
) -> PostgenResult<()> {
    let mut app = App::new(config.alert_ttl());
    let events = EventHandler::new(config.tick_rate());
    let mut dispatcher = Dispatcher::new(api, runtime);

    dispatcher.dispatch(app.bootstrap(store, *config.initial_tab()));

    while !app.should_quit {
        terminal
            .draw(|f| crate::ui::draw(f, &app))
            .map_err(|e| UiError::new(UiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

        if let Some(InputEvent::Key(key)) = events.next()? {
            let requests = handle_key(&mut app, store, key);
            dispatcher.dispatch(requests);
        }

        dispatcher.drain(&mut app);
        app.alerts.expire(Instant::now());
    }

    Ok(())
}

/// Map one key press to app operations.
fn handle_key(app: &mut App, store: &mut dyn PreferenceStore, key: KeyEvent) -> Vec<Request> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Vec::new();
    }

    if app.confirm.is_some() {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.resolve_confirm(true).into_iter().collect(),
            KeyCode::Char('n') | KeyCode::Esc => app.resolve_confirm(false).into_iter().collect(),
            _ => Vec::new(),
        };
    }

    if app.focus == Focus::EventForm {
        return handle_form_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return Vec::new();
        }
        KeyCode::Char('t') => {
            app.toggle_theme(store);
            return Vec::new();
        }
        KeyCode::Char('x') => {
            if let Some(id) = app.alerts.latest().map(|alert| alert.id) {
                app.alerts.dismiss(id);
            }
            return Vec::new();
        }
        KeyCode::Char('1') => return app.switch_tab(Tab::Generate),
        KeyCode::Char('2') => return app.switch_tab(Tab::Posts),
        KeyCode::Char('e') => {
            app.focus = if app.focus == Focus::Events {
                Focus::Tab
            } else {
                Focus::Events
            };
            return Vec::new();
        }
        KeyCode::Char('n') => {
            app.focus = Focus::EventForm;
            return Vec::new();
        }
        KeyCode::Esc => {
            app.focus = Focus::Tab;
            return Vec::new();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous();
            return Vec::new();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next();
            return Vec::new();
        }
        _ => {}
    }

    match (app.focus, app.tab) {
        (Focus::Events, _) => match key.code {
            KeyCode::Char('d') => {
                app.delete_selected_event();
                Vec::new()
            }
            KeyCode::Char('r') => vec![app.load_events()],
            _ => Vec::new(),
        },
        (Focus::Tab, Tab::Generate) => match key.code {
            KeyCode::Char('[') => {
                app.generator.event_select.cycle(false);
                Vec::new()
            }
            KeyCode::Char(']') => {
                app.generator.event_select.cycle(true);
                Vec::new()
            }
            KeyCode::Char('p') => {
                app.generator.cycle_platform();
                Vec::new()
            }
            KeyCode::Char('o') => {
                app.generator.cycle_tone();
                Vec::new()
            }
            KeyCode::Char('g') | KeyCode::Enter => app.generate_post().into_iter().collect(),
            KeyCode::Char('r') => app.regenerate_post().into_iter().collect(),
            KeyCode::Char('a') => app
                .update_post_status(PostStatus::Approved)
                .into_iter()
                .collect(),
            KeyCode::Char('m') => app
                .update_post_status(PostStatus::Posted)
                .into_iter()
                .collect(),
            _ => Vec::new(),
        },
        (Focus::Tab, Tab::Posts) => match key.code {
            KeyCode::Char('f') => vec![app.cycle_filter(true)],
            KeyCode::Char('F') => vec![app.cycle_filter(false)],
            KeyCode::Char('a') | KeyCode::Enter => app.advance_selected_post().into_iter().collect(),
            KeyCode::Char('d') => {
                app.delete_selected_post();
                Vec::new()
            }
            KeyCode::Char('r') => vec![app.load_posts()],
            _ => Vec::new(),
        },
        (Focus::EventForm, _) => Vec::new(),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) -> Vec<Request> {
    let form = &mut app.events.form;
    match key.code {
        KeyCode::Esc => app.focus = Focus::Events,
        KeyCode::Tab => form.focus_next(),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Char(c) => form.push_char(c),
        KeyCode::Enter => {
            if let Some(request) = app.submit_event_form() {
                app.focus = Focus::Events;
                return vec![request];
            }
        }
        _ => {}
    }
    Vec::new()
}
