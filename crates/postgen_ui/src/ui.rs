//! Terminal rendering of the page view.

use crate::view::{
    EventCard, EventFormView, GeneratorView, ListView, PageView, PostCard, PostListView,
    SelectView, render_page,
};
use crate::{App, Focus, Tab, Theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Colours for one theme.
#[derive(Debug, Clone, Copy)]
struct Palette {
    base: Style,
    accent: Color,
    muted: Color,
    cursor: Style,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                base: Style::default().fg(Color::White).bg(Color::Black),
                accent: Color::Cyan,
                muted: Color::Gray,
                cursor: Style::default().fg(Color::Black).bg(Color::Cyan),
            },
            Theme::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                accent: Color::Blue,
                muted: Color::DarkGray,
                cursor: Style::default().fg(Color::White).bg(Color::Blue),
            },
        }
    }
}

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let page = render_page(app);
    let palette = Palette::for_theme(page.theme);
    f.render_widget(Block::default().style(palette.base), f.area());

    let alert_height = if page.alerts.is_empty() {
        0
    } else {
        page.alerts.len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(0),               // Panels
            Constraint::Length(alert_height), // Alerts
            Constraint::Length(3),            // Status bar
        ])
        .split(f.area());

    draw_header(f, &page, palette, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    if app.focus == Focus::EventForm {
        draw_event_form(f, &page.event_form, palette, columns[0]);
    } else {
        draw_events(f, &page.events, palette, columns[0]);
    }

    match page.active_tab() {
        Tab::Generate => draw_generator(f, &page.generator, palette, columns[1]),
        Tab::Posts => draw_posts(f, &page.posts, palette, columns[1]),
    }

    if !page.alerts.is_empty() {
        draw_alerts(f, &page, palette, chunks[2]);
    }
    draw_status_bar(f, app, palette, chunks[3]);

    if let Some(message) = page.confirm {
        draw_confirm(f, message, palette);
    }
}

fn draw_header(f: &mut Frame, page: &PageView, palette: Palette, area: Rect) {
    let mut spans = vec![Span::styled(
        "AI Social Media Post Generator  ",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    for (i, tab) in page.tabs.iter().enumerate() {
        let style = if tab.active {
            palette.cursor.add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, tab.label), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(format!(" {}", page.theme.glyph())));

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn list_lines<T>(
    list: &ListView<T>,
    palette: Palette,
    card: impl Fn(&T) -> Vec<Line<'static>>,
) -> Vec<Line<'static>> {
    match list {
        ListView::Loading => vec![Line::styled("Loading...", Style::default().fg(palette.muted))],
        ListView::Empty(text) => vec![Line::styled(*text, Style::default().fg(palette.muted))],
        ListView::Cards(cards) => cards
            .iter()
            .flat_map(|c| {
                let mut lines = card(c);
                lines.push(Line::raw(""));
                lines
            })
            .collect(),
    }
}

fn draw_events(f: &mut Frame, events: &ListView<EventCard>, palette: Palette, area: Rect) {
    let lines = list_lines(events, palette, |e| {
        let title_style = if e.selected {
            palette.cursor.add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let mut lines = vec![
            Line::styled(e.title.clone(), title_style),
            Line::raw(format!("  📅 {}", e.date)),
        ];
        if let Some(location) = &e.location {
            lines.push(Line::raw(format!("  📍 {}", location)));
        }
        if let Some(kind) = &e.kind {
            lines.push(Line::raw(format!("  🏷 {}", kind)));
        }
        if let Some(description) = &e.description {
            lines.push(Line::styled(
                format!("  {}", description),
                Style::default().fg(palette.muted),
            ));
        }
        lines
    });

    let events = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Events"))
        .wrap(Wrap { trim: false });
    f.render_widget(events, area);
}

fn draw_event_form(f: &mut Frame, form: &EventFormView, palette: Palette, area: Rect) {
    let lines: Vec<Line> = form
        .fields
        .iter()
        .map(|field| {
            let marker = if field.required { "*" } else { " " };
            let style = if field.focused {
                palette.cursor
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{}{:<12}", marker, field.label),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(format!("{}▏", field.value), style),
            ])
        })
        .collect();

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Create Event"))
        .wrap(Wrap { trim: false });
    f.render_widget(form, area);
}

fn select_line(label: &str, select: &SelectView, palette: Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(palette.accent)),
        Span::raw(format!("◂ {} ▸", select.selected_label().unwrap_or_default())),
    ])
}

fn draw_generator(f: &mut Frame, generator: &GeneratorView, palette: Palette, area: Rect) {
    let mut lines = vec![
        select_line("Event", &generator.event_select, palette),
        select_line("Platform", &generator.platform, palette),
        select_line("Tone", &generator.tone, palette),
        Line::raw(""),
    ];

    if generator.loading {
        lines.push(Line::styled(
            "Generating...",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    if let Some(preview) = &generator.preview {
        lines.push(Line::styled(
            "Preview",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.extend(preview.content.lines().map(|l| Line::raw(l.to_string())));
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            preview.hashtags.clone(),
            Style::default().fg(palette.accent),
        ));
    }

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Generate Posts"))
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}

fn status_color(card: &PostCard) -> Color {
    match card.action.map(|a| a.target) {
        Some(postgen_core::PostStatus::Approved) => Color::Yellow,
        Some(_) => Color::Green,
        None => Color::Magenta,
    }
}

fn draw_posts(f: &mut Frame, posts: &PostListView, palette: Palette, area: Rect) {
    let mut lines = vec![select_line("Filter", &posts.filter, palette), Line::raw("")];
    lines.extend(list_lines(&posts.posts, palette, |p| {
        let title_style = if p.selected {
            palette.cursor.add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let mut lines = vec![
            Line::from(vec![
                Span::styled(p.event_title.clone(), title_style),
                Span::raw(" "),
                Span::styled(
                    format!("[{}]", p.status_label),
                    Style::default().fg(status_color(p)),
                ),
                Span::styled(
                    format!(" {} · {}", p.platform, p.tone),
                    Style::default().fg(palette.muted),
                ),
            ]),
        ];
        lines.extend(p.content.lines().map(|l| Line::raw(format!("  {}", l))));
        lines.push(Line::styled(
            format!("  {}", p.hashtags),
            Style::default().fg(palette.accent),
        ));
        if let Some(action) = p.action {
            lines.push(Line::styled(
                format!("  [a] {}", action.label),
                Style::default().fg(palette.muted),
            ));
        }
        lines
    }));

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("View Posts"))
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}

fn draw_alerts(f: &mut Frame, page: &PageView, palette: Palette, area: Rect) {
    let lines: Vec<Line> = page
        .alerts
        .iter()
        .map(|a| {
            let color = if a.class.contains("alert-danger") {
                Color::Red
            } else {
                Color::Green
            };
            Line::styled(a.message.clone(), Style::default().fg(color))
        })
        .collect();
    let alerts = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted)),
    );
    f.render_widget(alerts, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let help_text = if app.confirm.is_some() {
        "y: Confirm | n/Esc: Cancel"
    } else {
        match (app.focus, app.tab) {
            (Focus::EventForm, _) => "Type to edit | Tab: Next field | Enter: Create | Esc: Cancel",
            (Focus::Events, _) => "↑↓: Navigate | D: Delete | N: New event | X: Dismiss alert | Esc: Back | Q: Quit",
            (Focus::Tab, Tab::Generate) => {
                "[ ]: Event | P: Platform | O: Tone | G: Generate | R: Regenerate | A: Approve | M: Mark posted | X: Dismiss alert | E: Events | T: Theme | Q: Quit"
            }
            (Focus::Tab, Tab::Posts) => {
                "↑↓: Navigate | F: Filter | A: Advance status | D: Delete | X: Dismiss alert | E: Events | T: Theme | Q: Quit"
            }
        }
    };

    let status = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(palette.muted));
    f.render_widget(status, area);
}

fn draw_confirm(f: &mut Frame, message: &str, palette: Palette) {
    let area = centered(f.area(), 50, 5);
    f.render_widget(Clear, area);
    let dialog = Paragraph::new(vec![Line::raw(message.to_string()), Line::raw(""), Line::raw("[y] Yes   [n] No")])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(palette.base)
        .alignment(Alignment::Center);
    f.render_widget(dialog, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
