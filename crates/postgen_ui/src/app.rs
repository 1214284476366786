//! Application state and the operations hosts invoke.
//!
//! Operations never touch the network. They update state and return the
//! [`Request`]s to run; the host executes each one and feeds the outcome back
//! through [`App::complete`], which may return follow-up requests (reloads).

use crate::{
    AlertKind, Alerts, ApiCall, Channel, EventPanel, GeneratorPanel, PostListPanel,
    PreferenceStore, Preview, Reply, Session, Tab, Theme, Ticket, load_theme, toggle_theme,
};
use postgen_core::{GenerateRequest, PostStatus};
use postgen_error::{PostgenError, PostgenResult};
use std::time::Duration;
use tracing::{debug, instrument};

/// A backend call the host should execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Identifies the issuing panel and its position in that panel's sequence
    pub ticket: Ticket,
    /// What to call
    pub call: ApiCall,
}

/// The outcome of an executed [`Request`].
#[derive(Debug)]
pub struct Completion {
    /// The request that ran
    pub request: Request,
    /// Its result
    pub result: PostgenResult<Reply>,
}

/// A delete awaiting user confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingConfirm {
    /// Delete an event
    DeleteEvent(i64),
    /// Delete a post
    DeletePost(i64),
}

impl PendingConfirm {
    /// Confirmation prompt.
    pub fn message(self) -> &'static str {
        match self {
            PendingConfirm::DeleteEvent(_) => "Are you sure you want to delete this event?",
            PendingConfirm::DeletePost(_) => "Are you sure you want to delete this post?",
        }
    }
}

/// Which region receives keyboard input in interactive hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Focus {
    /// The active tab's panel
    #[default]
    Tab,
    /// The event card list
    Events,
    /// The new event form
    EventForm,
}

/// Main application state.
#[derive(Debug, Default)]
pub struct App {
    /// Active tab
    pub tab: Tab,
    /// Active theme
    pub theme: Theme,
    /// Visible notifications
    pub alerts: Alerts,
    /// Event cards and creation form
    pub events: EventPanel,
    /// Generation form and preview
    pub generator: GeneratorPanel,
    /// Generated post list
    pub posts: PostListPanel,
    /// Identifiers of the last generation
    pub session: Session,
    /// Delete waiting for a yes/no answer
    pub confirm: Option<PendingConfirm>,
    /// Keyboard focus
    pub focus: Focus,
    /// Whether to quit the application
    pub should_quit: bool,
    mutations: crate::RequestSequence,
}

impl App {
    /// Create an app whose alerts live for `alert_ttl`.
    pub fn new(alert_ttl: Duration) -> Self {
        Self {
            alerts: Alerts::new(alert_ttl),
            ..Self::default()
        }
    }

    /// Apply the stored theme, load the event list and open `initial_tab`.
    #[instrument(skip(self, store))]
    pub fn bootstrap(&mut self, store: &dyn PreferenceStore, initial_tab: Tab) -> Vec<Request> {
        self.theme = load_theme(store);
        let mut requests = vec![self.load_events()];
        requests.extend(self.switch_tab(initial_tab));
        requests
    }

    /// Flip and persist the theme.
    pub fn toggle_theme(&mut self, store: &mut dyn PreferenceStore) {
        self.theme = toggle_theme(self.theme, store);
    }

    /// Activate `tab` and refresh what it shows.
    #[instrument(skip(self))]
    pub fn switch_tab(&mut self, tab: Tab) -> Vec<Request> {
        self.tab = tab;
        match tab {
            Tab::Generate => vec![self.load_events_for_select()],
            Tab::Posts => vec![self.load_events_for_filter(), self.load_posts()],
        }
    }

    // ==================== Events ====================

    /// Reload the event cards.
    pub fn load_events(&mut self) -> Request {
        let ticket = self.events.seq.issue(Channel::EventList);
        Self::request(ticket, ApiCall::ListEvents)
    }

    /// Reload the generator's event dropdown.
    pub fn load_events_for_select(&mut self) -> Request {
        let ticket = self.generator.event_select.seq.issue(Channel::EventSelect);
        Self::request(ticket, ApiCall::ListEvents)
    }

    /// Reload the post filter dropdown.
    pub fn load_events_for_filter(&mut self) -> Request {
        let ticket = self.posts.filter.seq.issue(Channel::EventFilter);
        Self::request(ticket, ApiCall::ListEvents)
    }

    /// Submit the event form.
    ///
    /// Blank title or date raises an alert instead of a request.
    #[instrument(skip(self))]
    pub fn submit_event_form(&mut self) -> Option<Request> {
        match self.events.form.to_new_event() {
            Ok(event) => Some(self.mutation(Channel::EventMutation, ApiCall::CreateEvent(event))),
            Err(e) => {
                debug!(error = %e, "Event form incomplete");
                self.alerts.push(e.kind().to_string(), AlertKind::Danger);
                None
            }
        }
    }

    /// Ask to delete an event. Nothing is sent until confirmed.
    pub fn delete_event(&mut self, id: i64) {
        self.confirm = Some(PendingConfirm::DeleteEvent(id));
    }

    /// Ask to delete the event under the cursor.
    pub fn delete_selected_event(&mut self) {
        if let Some(id) = self.events.selected_id() {
            self.delete_event(id);
        }
    }

    // ==================== Generation ====================

    /// Generate a post for the selected event, platform and tone.
    #[instrument(skip(self))]
    pub fn generate_post(&mut self) -> Option<Request> {
        let Some(event_id) = self.generator.event_select.selected else {
            self.alerts.push("Please select an event", AlertKind::Danger);
            return None;
        };

        self.generator.loading = true;
        self.generator.preview = None;
        self.session.current_event_id = Some(event_id);

        let ticket = self.generator.seq.issue(Channel::Generator);
        Some(Self::request(
            ticket,
            ApiCall::GeneratePost(GenerateRequest {
                event_id,
                platform: self.generator.platform,
                tone: self.generator.tone,
            }),
        ))
    }

    /// Generate again for the last used event. No-op before the first generation.
    ///
    /// If that event has left the dropdown the sentinel is selected instead,
    /// so the user is asked to pick an event.
    pub fn regenerate_post(&mut self) -> Option<Request> {
        let event_id = self.session.current_event_id?;
        if !self.generator.event_select.select(Some(event_id)) {
            self.generator.event_select.select(None);
        }
        self.generate_post()
    }

    /// Move the just-generated post to `status`.
    #[instrument(skip(self))]
    pub fn update_post_status(&mut self, status: PostStatus) -> Option<Request> {
        let Some(post_id) = self.session.current_post_id else {
            self.alerts.push("No post to update", AlertKind::Danger);
            return None;
        };
        Some(self.mutation(
            Channel::GeneratedStatus,
            ApiCall::UpdatePostStatus { post_id, status },
        ))
    }

    // ==================== Posts ====================

    /// Reload posts, scoped to the filter's event if one is selected.
    pub fn load_posts(&mut self) -> Request {
        let event_id = self.posts.filter.selected;
        let ticket = self.posts.seq.issue(Channel::PostList);
        Self::request(ticket, ApiCall::ListPosts { event_id })
    }

    /// Change the filter and reload posts.
    ///
    /// Returns `None` when `event_id` is not one of the filter's options.
    pub fn set_filter(&mut self, event_id: Option<i64>) -> Option<Request> {
        self.posts
            .filter
            .select(event_id)
            .then(|| self.load_posts())
    }

    /// Step the filter through its options and reload posts.
    pub fn cycle_filter(&mut self, forward: bool) -> Request {
        self.posts.filter.cycle(forward);
        self.load_posts()
    }

    /// Move a listed post to `status`.
    pub fn change_post_status(&mut self, id: i64, status: PostStatus) -> Request {
        self.mutation(
            Channel::PostMutation,
            ApiCall::UpdatePostStatus {
                post_id: id,
                status,
            },
        )
    }

    /// Take the action offered on the post under the cursor, if any.
    pub fn advance_selected_post(&mut self) -> Option<Request> {
        let post = self.posts.selected_post()?;
        let (id, next) = (post.id, post.status.next()?);
        Some(self.change_post_status(id, next))
    }

    /// Ask to delete a post. Nothing is sent until confirmed.
    pub fn delete_post(&mut self, id: i64) {
        self.confirm = Some(PendingConfirm::DeletePost(id));
    }

    /// Ask to delete the post under the cursor.
    pub fn delete_selected_post(&mut self) {
        if let Some(id) = self.posts.selected_post().map(|p| p.id) {
            self.delete_post(id);
        }
    }

    /// Answer the pending confirmation. Declining sends nothing.
    pub fn resolve_confirm(&mut self, accepted: bool) -> Option<Request> {
        let pending = self.confirm.take()?;
        if !accepted {
            debug!(?pending, "Delete declined");
            return None;
        }
        Some(match pending {
            PendingConfirm::DeleteEvent(id) => {
                self.mutation(Channel::EventMutation, ApiCall::DeleteEvent(id))
            }
            PendingConfirm::DeletePost(id) => {
                self.mutation(Channel::PostMutation, ApiCall::DeletePost(id))
            }
        })
    }

    // ==================== Completion ====================

    /// Apply a finished request and return the reloads it triggers.
    ///
    /// Guarded loads whose ticket has been superseded are dropped.
    #[instrument(skip_all, fields(channel = %completion.request.ticket.channel, seq = completion.request.ticket.seq))]
    pub fn complete(&mut self, completion: Completion) -> Vec<Request> {
        let Completion { request, result } = completion;
        let channel = request.ticket.channel;

        if channel.is_guarded() && !self.is_current(request.ticket) {
            debug!("Discarding stale response");
            return Vec::new();
        }

        if channel == Channel::Generator {
            self.generator.loading = false;
        }

        match result {
            Ok(reply) => self.apply(channel, request.call, reply),
            Err(e) => {
                self.report(&request.call, &e);
                Vec::new()
            }
        }
    }

    fn apply(&mut self, channel: Channel, call: ApiCall, reply: Reply) -> Vec<Request> {
        match (channel, reply) {
            (Channel::EventList, Reply::Events(events)) => {
                debug!(count = events.len(), "Event list loaded");
                self.events.set_events(events);
                Vec::new()
            }
            (Channel::EventSelect, Reply::Events(events)) => {
                self.generator.event_select.replace(events);
                Vec::new()
            }
            (Channel::EventFilter, Reply::Events(events)) => {
                self.posts.filter.replace(events);
                Vec::new()
            }
            (Channel::PostList, Reply::Posts(posts)) => {
                debug!(count = posts.len(), "Post list loaded");
                self.posts.set_posts(posts);
                Vec::new()
            }
            (Channel::Generator, Reply::Generated(post)) => {
                self.session.current_post_id = Some(post.post_id);
                self.generator.preview = Some(Preview::from(post));
                self.alerts.push("Post generated successfully!", AlertKind::Success);
                Vec::new()
            }
            (Channel::EventMutation, _) => {
                let message = match call {
                    ApiCall::CreateEvent(_) => {
                        self.events.form.reset();
                        "Event created successfully!"
                    }
                    _ => "Event deleted successfully!",
                };
                self.alerts.push(message, AlertKind::Success);
                self.reload_events()
            }
            (Channel::PostMutation, _) => {
                let message = match call {
                    ApiCall::UpdatePostStatus { status, .. } => {
                        format!("Post status updated to {}!", status)
                    }
                    _ => "Post deleted successfully!".to_string(),
                };
                self.alerts.push(message, AlertKind::Success);
                vec![self.load_posts()]
            }
            (Channel::GeneratedStatus, _) => {
                let ApiCall::UpdatePostStatus { status, .. } = call else {
                    return Vec::new();
                };
                self.alerts
                    .push(format!("Post status updated to {}!", status), AlertKind::Success);
                if status == PostStatus::Approved {
                    vec![self.load_posts()]
                } else {
                    Vec::new()
                }
            }
            (channel, reply) => {
                tracing::warn!(%channel, ?reply, "Reply does not match its channel");
                Vec::new()
            }
        }
    }

    /// Event list plus the dropdown of the visible tab.
    fn reload_events(&mut self) -> Vec<Request> {
        let dropdown = match self.tab {
            Tab::Generate => self.load_events_for_select(),
            Tab::Posts => self.load_events_for_filter(),
        };
        vec![self.load_events(), dropdown]
    }

    fn report(&mut self, call: &ApiCall, error: &PostgenError) {
        let message = if error.is_api() {
            format!("Error: {}", error.message())
        } else {
            format!("Error {}: {}", call.activity(), error.message())
        };
        debug!(%error, "Request failed");
        self.alerts.push(message, AlertKind::Danger);
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        match ticket.channel {
            Channel::EventList => self.events.seq.is_current(ticket),
            Channel::EventSelect => self.generator.event_select.seq.is_current(ticket),
            Channel::EventFilter => self.posts.filter.seq.is_current(ticket),
            Channel::PostList => self.posts.seq.is_current(ticket),
            Channel::Generator => self.generator.seq.is_current(ticket),
            Channel::EventMutation | Channel::PostMutation | Channel::GeneratedStatus => true,
        }
    }

    fn mutation(&mut self, channel: Channel, call: ApiCall) -> Request {
        Self::request(self.mutations.issue(channel), call)
    }

    fn request(ticket: Ticket, call: ApiCall) -> Request {
        debug!(channel = %ticket.channel, seq = ticket.seq, activity = call.activity(), "Issuing request");
        Request { ticket, call }
    }

    // ==================== Navigation ====================

    /// Move the cursor of the focused list up.
    pub fn select_previous(&mut self) {
        match (self.focus, self.tab) {
            (Focus::Events, _) => self.events.select_previous(),
            (Focus::Tab, Tab::Posts) => self.posts.select_previous(),
            _ => {}
        }
    }

    /// Move the cursor of the focused list down.
    pub fn select_next(&mut self) {
        match (self.focus, self.tab) {
            (Focus::Events, _) => self.events.select_next(),
            (Focus::Tab, Tab::Posts) => self.posts.select_next(),
            _ => {}
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
