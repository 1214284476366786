//! Event list, creation form and the two event dropdowns.

use crate::RequestSequence;
use postgen_core::{Event, NewEvent, NewEventBuilder};
use postgen_error::BuilderError;

/// Event form input focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter)]
pub enum FormField {
    /// Title field (required)
    #[default]
    Title,
    /// Date field (required)
    Date,
    /// Location field
    Location,
    /// Event type field
    Kind,
    /// Description field
    Description,
}

impl FormField {
    /// Input label.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Date => "Date",
            FormField::Location => "Location",
            FormField::Kind => "Type",
            FormField::Description => "Description",
        }
    }

    /// Whether the field must be filled before submitting.
    pub fn is_required(self) -> bool {
        matches!(self, FormField::Title | FormField::Date)
    }

    /// Field after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Date,
            FormField::Date => FormField::Location,
            FormField::Location => FormField::Kind,
            FormField::Kind => FormField::Description,
            FormField::Description => FormField::Title,
        }
    }
}

/// Edit buffer for a new event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    /// Title
    pub title: String,
    /// Date, `YYYY-MM-DD`
    pub date: String,
    /// Location
    pub location: String,
    /// Event type
    pub kind: String,
    /// Description
    pub description: String,
    /// Which field receives typed characters
    pub focused: FormField,
}

impl EventForm {
    /// Current text of `field`.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Date => &self.date,
            FormField::Location => &self.location,
            FormField::Kind => &self.kind,
            FormField::Description => &self.description,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Date => &mut self.date,
            FormField::Location => &mut self.location,
            FormField::Kind => &mut self.kind,
            FormField::Description => &mut self.description,
        }
    }

    /// Replace the text of `field`.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// Append a character to the focused field.
    pub fn push_char(&mut self, c: char) {
        let field = self.focused;
        self.value_mut(field).push(c);
    }

    /// Remove the last character of the focused field.
    pub fn pop_char(&mut self) {
        let field = self.focused;
        self.value_mut(field).pop();
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    /// Clear every field and focus the title.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the request body, enforcing the required fields.
    ///
    /// Values are sent as typed; a blank title or date is rejected.
    pub fn to_new_event(&self) -> Result<NewEvent, BuilderError> {
        NewEventBuilder::default()
            .title(self.title.as_str())
            .date(self.date.as_str())
            .location(self.location.as_str())
            .kind(self.kind.as_str())
            .description(self.description.as_str())
            .build()
    }
}

/// A dropdown of events with a leading "no selection" option.
///
/// `selected == None` is the sentinel. Reloading keeps the selection when the
/// selected event is still listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventChoices {
    /// Options after the sentinel
    pub events: Vec<Event>,
    /// Selected event id
    pub selected: Option<i64>,
    /// Load sequencing
    pub seq: RequestSequence,
}

impl EventChoices {
    /// Replace the options, resetting to the sentinel if the selection vanished.
    pub fn replace(&mut self, events: Vec<Event>) {
        self.events = events;
        if self.selected.is_some_and(|id| !self.contains(id)) {
            tracing::debug!(event_id = ?self.selected, "Selected event no longer listed");
            self.selected = None;
        }
    }

    /// Whether an option with this id exists.
    pub fn contains(&self, id: i64) -> bool {
        self.events.iter().any(|e| e.id == id)
    }

    /// Select an event, or the sentinel with `None`.
    ///
    /// Ids that are not listed are ignored and return `false`.
    pub fn select(&mut self, id: Option<i64>) -> bool {
        match id {
            Some(id) if !self.contains(id) => false,
            _ => {
                self.selected = id;
                true
            }
        }
    }

    /// Step through sentinel and options, wrapping at either end.
    pub fn cycle(&mut self, forward: bool) {
        // Position 0 is the sentinel
        let positions = self.events.len() + 1;
        let current = self
            .selected
            .and_then(|id| self.events.iter().position(|e| e.id == id))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % positions
        } else {
            (current + positions - 1) % positions
        };
        self.selected = next.checked_sub(1).map(|i| self.events[i].id);
    }
}

/// Event cards, their selection cursor and the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPanel {
    /// Loaded events; `None` until the first load completes
    pub list: Option<Vec<Event>>,
    /// Cursor into `list`
    pub selected: usize,
    /// New event form
    pub form: EventForm,
    /// Load sequencing
    pub seq: RequestSequence,
}

impl EventPanel {
    /// Replace the cards, clamping the cursor.
    pub fn set_events(&mut self, events: Vec<Event>) {
        if self.selected >= events.len() {
            self.selected = events.len().saturating_sub(1);
        }
        self.list = Some(events);
    }

    /// Loaded events, empty before the first load.
    pub fn events(&self) -> &[Event] {
        self.list.as_deref().unwrap_or_default()
    }

    /// Move the cursor up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move the cursor down.
    pub fn select_next(&mut self) {
        if self.selected < self.events().len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Id of the event under the cursor.
    pub fn selected_id(&self) -> Option<i64> {
        self.events().get(self.selected).map(|e| e.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postgen_core::EventBuilder;

    fn event(id: i64, title: &str) -> Event {
        EventBuilder::default()
            .id(id)
            .title(title)
            .date("2025-05-05")
            .build()
            .unwrap()
    }

    #[test]
    fn test_replace_keeps_listed_selection() {
        let mut choices = EventChoices::default();
        choices.replace(vec![event(1, "A"), event(2, "B")]);
        assert!(choices.select(Some(2)));

        choices.replace(vec![event(2, "B"), event(3, "C")]);
        assert_eq!(choices.selected, Some(2));

        choices.replace(vec![event(3, "C")]);
        assert_eq!(choices.selected, None);
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut choices = EventChoices::default();
        choices.replace(vec![event(1, "A")]);
        assert!(!choices.select(Some(9)));
        assert_eq!(choices.selected, None);
    }

    #[test]
    fn test_cycle_visits_sentinel() {
        let mut choices = EventChoices::default();
        choices.replace(vec![event(1, "A"), event(2, "B")]);

        choices.cycle(true);
        assert_eq!(choices.selected, Some(1));
        choices.cycle(true);
        assert_eq!(choices.selected, Some(2));
        choices.cycle(true);
        assert_eq!(choices.selected, None);
        choices.cycle(false);
        assert_eq!(choices.selected, Some(2));
    }

    #[test]
    fn test_form_requires_title() {
        let mut form = EventForm::default();
        form.set(FormField::Date, "2025-01-01");
        let err = form.to_new_event().unwrap_err();
        assert_eq!(err.kind().to_string(), "Event title is required");
    }

    #[test]
    fn test_form_sends_values_as_typed() {
        let mut form = EventForm::default();
        form.set(FormField::Title, "Expo ");
        form.set(FormField::Date, "2025-04-04");
        form.set(FormField::Description, "  Doors at 9\n");

        let event = form.to_new_event().unwrap();
        assert_eq!(event.title(), "Expo ");
        assert_eq!(event.description(), "  Doors at 9\n");
        assert_eq!(event.location(), "");
    }

    #[test]
    fn test_form_rejects_blank_date() {
        let mut form = EventForm::default();
        form.set(FormField::Title, "Expo");
        form.set(FormField::Date, "   ");
        let err = form.to_new_event().unwrap_err();
        assert_eq!(err.kind().to_string(), "Event date is required");
    }

    #[test]
    fn test_form_typing_follows_focus() {
        let mut form = EventForm::default();
        form.push_char('A');
        form.focus_next();
        form.push_char('2');
        form.push_char('x');
        form.pop_char();
        assert_eq!(form.title, "A");
        assert_eq!(form.date, "2");
        assert_eq!(form.focused, FormField::Date);
    }

    #[test]
    fn test_set_events_clamps_cursor() {
        let mut panel = EventPanel::default();
        panel.set_events(vec![event(1, "A"), event(2, "B")]);
        panel.select_next();
        panel.select_next();
        assert_eq!(panel.selected_id(), Some(2));

        panel.set_events(vec![event(1, "A")]);
        assert_eq!(panel.selected_id(), Some(1));
    }
}
