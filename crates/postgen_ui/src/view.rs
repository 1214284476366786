//! View models.
//!
//! Each panel renders to a plain data tree. Hosts (terminal, HTML) only lay
//! these out; every display decision (labels, fallbacks, which action a post
//! offers) is made here.

use crate::{
    Alerts, App, EventChoices, EventForm, EventPanel, FormField, GeneratorPanel,
    PendingConfirm, PostListPanel, Tab, Theme,
};
use postgen_core::{Event, Platform, Post, PostAction, PostStatus, Tone};
use strum::IntoEnumIterator;

/// Empty-state text of the event list.
pub const NO_EVENTS: &str = "No events yet. Create your first event!";
/// Empty-state text of the post list.
pub const NO_POSTS: &str = "No posts generated yet.";
/// Shown in place of missing hashtags.
pub const NO_HASHTAGS: &str = "No hashtags";
/// Sentinel option of the generator's event select.
pub const CHOOSE_EVENT: &str = "Choose an event...";
/// Sentinel option of the post filter.
pub const ALL_EVENTS: &str = "All Events";

/// A list that may still be loading or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<T> {
    /// No load has completed yet
    Loading,
    /// Loaded, nothing to show
    Empty(&'static str),
    /// Loaded items
    Cards(Vec<T>),
}

impl<T> ListView<T> {
    fn from_items(items: Option<&[impl Sized]>, empty: &'static str, cards: impl FnOnce() -> Vec<T>) -> Self {
        match items {
            None => ListView::Loading,
            Some([]) => ListView::Empty(empty),
            Some(_) => ListView::Cards(cards()),
        }
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        match self {
            ListView::Cards(cards) => cards.len(),
            _ => 0,
        }
    }

    /// Whether there are no cards.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One event card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    /// Event id, target of the delete control
    pub id: i64,
    /// Title
    pub title: String,
    /// Date
    pub date: String,
    /// Location, only when present
    pub location: Option<String>,
    /// Type, only when present
    pub kind: Option<String>,
    /// Description, only when present
    pub description: Option<String>,
    /// Under the keyboard cursor
    pub selected: bool,
}

impl EventCard {
    fn new(event: &Event, selected: bool) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            date: event.date.clone(),
            location: event.location().map(str::to_string),
            kind: event.kind().map(str::to_string),
            description: event.description().map(str::to_string),
            selected,
        }
    }
}

/// One form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    /// Which field
    pub field: FormField,
    /// Label
    pub label: &'static str,
    /// Current text
    pub value: String,
    /// Must be non-empty to submit
    pub required: bool,
    /// Receives typed characters
    pub focused: bool,
}

/// The new event form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFormView {
    /// Inputs in tab order
    pub fields: Vec<FormFieldView>,
    /// Whether the form has keyboard focus
    pub active: bool,
}

/// One `<option>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    /// Option value; `None` is the empty sentinel value
    pub value: Option<String>,
    /// Visible text
    pub label: String,
    /// Currently selected
    pub selected: bool,
}

/// A dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    /// Options, sentinel first for event selects
    pub options: Vec<OptionView>,
}

impl SelectView {
    /// Label of the selected option.
    pub fn selected_label(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.label.as_str())
    }
}

/// Generated content shown after a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    /// Body
    pub content: String,
    /// Hashtags, empty when none were generated
    pub hashtags: String,
}

/// The generator form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorView {
    /// Source event, `Choose an event...` sentinel
    pub event_select: SelectView,
    /// Platform select
    pub platform: SelectView,
    /// Tone select
    pub tone: SelectView,
    /// Loading indicator visible
    pub loading: bool,
    /// Preview section, hidden when `None`
    pub preview: Option<PreviewView>,
}

/// The status-advancing control on a post card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    /// Which action
    pub action: PostAction,
    /// Button text
    pub label: &'static str,
    /// Status sent when pressed
    pub target: PostStatus,
}

/// One post card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    /// Post id, target of the controls
    pub id: i64,
    /// Event title heading
    pub event_title: String,
    /// Badge text, upper case
    pub status_label: &'static str,
    /// Badge classes, `status-badge status-<status>`
    pub status_class: String,
    /// Platform badge
    pub platform: String,
    /// Tone badge
    pub tone: String,
    /// Body
    pub content: String,
    /// Hashtags or the `No hashtags` fallback
    pub hashtags: String,
    /// Status action, none for posted posts
    pub action: Option<ActionButton>,
    /// Under the keyboard cursor
    pub selected: bool,
}

impl PostCard {
    fn new(post: &Post, selected: bool) -> Self {
        Self {
            id: post.id,
            event_title: post.event_title.clone(),
            status_label: post.status.badge(),
            status_class: format!("status-badge status-{}", post.status.as_str()),
            platform: post.platform.clone(),
            tone: post.tone.clone(),
            content: post.content.clone(),
            hashtags: post.hashtags().unwrap_or(NO_HASHTAGS).to_string(),
            action: post.status.action().map(|action| ActionButton {
                action,
                label: action.label(),
                target: action.target(),
            }),
            selected,
        }
    }
}

/// The post list tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListView {
    /// Event filter, `All Events` sentinel
    pub filter: SelectView,
    /// Post cards
    pub posts: ListView<PostCard>,
}

/// One notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertView {
    /// Dismissal id
    pub id: u64,
    /// Text
    pub message: String,
    /// `alert alert-<kind> alert-dismissible fade show`
    pub class: String,
}

/// One tab button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabView {
    /// Which tab
    pub tab: Tab,
    /// Button text
    pub label: &'static str,
    /// Whether this tab is shown
    pub active: bool,
}

/// Everything a host draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Active theme
    pub theme: Theme,
    /// Notifications, oldest first
    pub alerts: Vec<AlertView>,
    /// Tab buttons
    pub tabs: Vec<TabView>,
    /// Event cards
    pub events: ListView<EventCard>,
    /// New event form
    pub event_form: EventFormView,
    /// Generator tab
    pub generator: GeneratorView,
    /// Posts tab
    pub posts: PostListView,
    /// Open confirmation prompt
    pub confirm: Option<&'static str>,
}

impl PageView {
    /// The active tab.
    pub fn active_tab(&self) -> Tab {
        self.tabs
            .iter()
            .find(|t| t.active)
            .map_or_else(Tab::default, |t| t.tab)
    }
}

/// Render the event cards.
pub fn render_events(panel: &EventPanel, with_cursor: bool) -> ListView<EventCard> {
    ListView::from_items(panel.list.as_deref(), NO_EVENTS, || {
        panel
            .events()
            .iter()
            .enumerate()
            .map(|(i, e)| EventCard::new(e, with_cursor && i == panel.selected))
            .collect()
    })
}

/// Render the new event form.
pub fn render_event_form(form: &EventForm, active: bool) -> EventFormView {
    EventFormView {
        fields: FormField::iter()
            .map(|field| FormFieldView {
                field,
                label: field.label(),
                value: form.value(field).to_string(),
                required: field.is_required(),
                focused: active && field == form.focused,
            })
            .collect(),
        active,
    }
}

fn render_choices(
    choices: &EventChoices,
    sentinel: &str,
    label: impl Fn(&Event) -> String,
) -> SelectView {
    let sentinel = OptionView {
        value: None,
        label: sentinel.to_string(),
        selected: choices.selected.is_none(),
    };
    let options = choices.events.iter().map(|event| OptionView {
        value: Some(event.id.to_string()),
        label: label(event),
        selected: choices.selected == Some(event.id),
    });
    SelectView {
        options: std::iter::once(sentinel).chain(options).collect(),
    }
}

/// Render the generator's event dropdown (`title - date`).
pub fn render_event_select(choices: &EventChoices) -> SelectView {
    render_choices(choices, CHOOSE_EVENT, Event::select_label)
}

/// Render the post filter dropdown (`title`).
pub fn render_event_filter(choices: &EventChoices) -> SelectView {
    render_choices(choices, ALL_EVENTS, |e| e.filter_label().to_string())
}

fn render_fixed<T>(selected: T, label: impl Fn(T) -> &'static str) -> SelectView
where
    T: IntoEnumIterator + PartialEq + Copy + ToString,
{
    SelectView {
        options: T::iter()
            .map(|v| OptionView {
                value: Some(v.to_string()),
                label: label(v).to_string(),
                selected: v == selected,
            })
            .collect(),
    }
}

/// Render the generator tab.
pub fn render_generator(panel: &GeneratorPanel) -> GeneratorView {
    GeneratorView {
        event_select: render_event_select(&panel.event_select),
        platform: render_fixed(panel.platform, Platform::label),
        tone: render_fixed(panel.tone, Tone::label),
        loading: panel.loading,
        preview: panel.preview.as_ref().map(|p| PreviewView {
            content: p.content.clone(),
            hashtags: p.hashtags.clone().unwrap_or_default(),
        }),
    }
}

/// Render the posts tab.
pub fn render_posts(panel: &PostListPanel, with_cursor: bool) -> PostListView {
    PostListView {
        filter: render_event_filter(&panel.filter),
        posts: ListView::from_items(panel.list.as_deref(), NO_POSTS, || {
            panel
                .posts()
                .iter()
                .enumerate()
                .map(|(i, p)| PostCard::new(p, with_cursor && i == panel.selected))
                .collect()
        }),
    }
}

/// Render visible alerts.
pub fn render_alerts(alerts: &Alerts) -> Vec<AlertView> {
    alerts
        .iter()
        .map(|a| AlertView {
            id: a.id,
            message: a.message.clone(),
            class: format!("alert alert-{} alert-dismissible fade show", a.kind),
        })
        .collect()
}

/// Render the whole page.
pub fn render_page(app: &App) -> PageView {
    use crate::Focus;

    PageView {
        theme: app.theme,
        alerts: render_alerts(&app.alerts),
        tabs: Tab::iter()
            .map(|tab| TabView {
                tab,
                label: tab.label(),
                active: tab == app.tab,
            })
            .collect(),
        events: render_events(&app.events, app.focus == Focus::Events),
        event_form: render_event_form(&app.events.form, app.focus == Focus::EventForm),
        generator: render_generator(&app.generator),
        posts: render_posts(&app.posts, app.focus == Focus::Tab && app.tab == Tab::Posts),
        confirm: app.confirm.map(PendingConfirm::message),
    }
}
