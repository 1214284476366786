//! Static HTML rendering of a [`PageView`].
//!
//! Produces the markup the browser front end used: `event-card` blocks,
//! `status-badge status-<status>` badges, `preview-box` / `hashtags-box`
//! content and Bootstrap alert containers. All user text is escaped.

use crate::view::{
    AlertView, EventCard, EventFormView, GeneratorView, ListView, PageView, PostCard,
    PostListView, SelectView,
};

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a complete document.
pub fn render_document(page: &PageView) -> String {
    let tabs: String = page
        .tabs
        .iter()
        .map(|t| {
            format!(
                r#"<button class="tab-btn{}" data-tab="{}">{}</button>"#,
                active(t.active),
                t.tab,
                escape(t.label)
            )
        })
        .collect();

    let active_tab = page.active_tab();
    let confirm = page
        .confirm
        .map(|msg| {
            format!(
                r#"<div class="confirm-dialog" role="dialog"><p>{}</p></div>"#,
                escape(msg)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head><meta charset="utf-8"><title>AI Social Media Post Generator</title></head>
<body>
<button class="theme-toggle"><i id="theme-icon" class="{icon}"></i></button>
<div id="alertContainer">{alerts}</div>
<div class="row">
<div class="col-md-4">
{form}
<div id="eventsList">{events}</div>
</div>
<div class="col-md-8">
<div class="tabs">{tabs}</div>
<div id="generate-tab" class="tab-content{generate_active}">{generator}</div>
<div id="posts-tab" class="tab-content{posts_active}">{posts}</div>
</div>
</div>
{confirm}
</body>
</html>
"#,
        theme = page.theme,
        icon = page.theme.icon_class(),
        alerts = render_alerts(&page.alerts),
        form = render_event_form(&page.event_form),
        events = render_events(&page.events),
        tabs = tabs,
        generate_active = active(active_tab == crate::Tab::Generate),
        generator = render_generator(&page.generator),
        posts_active = active(active_tab == crate::Tab::Posts),
        posts = render_posts(&page.posts),
        confirm = confirm,
    )
}

fn active(on: bool) -> &'static str {
    if on { " active" } else { "" }
}

fn hidden(visible: bool) -> &'static str {
    if visible { "" } else { r#" style="display: none;""# }
}

/// Render the alert stack.
pub fn render_alerts(alerts: &[AlertView]) -> String {
    alerts
        .iter()
        .map(|a| {
            format!(
                r#"<div class="{}" data-alert-id="{}">{}<button type="button" class="btn-close" data-bs-dismiss="alert"></button></div>"#,
                a.class,
                a.id,
                escape(&a.message)
            )
        })
        .collect()
}

fn render_event_form(form: &EventFormView) -> String {
    let inputs: String = form
        .fields
        .iter()
        .map(|f| {
            format!(
                r#"<label>{}<input name="{}" value="{}"{}></label>"#,
                escape(f.label),
                f.label.to_lowercase(),
                escape(&f.value),
                if f.required { " required" } else { "" }
            )
        })
        .collect();
    format!(
        r#"<form id="eventForm">{}<button type="submit">Create Event</button></form>"#,
        inputs
    )
}

fn render_list<T>(list: &ListView<T>, card: impl Fn(&T) -> String) -> String {
    match list {
        ListView::Loading => r#"<p class="text-white-50">Loading...</p>"#.to_string(),
        ListView::Empty(text) => format!(r#"<p class="text-white-50">{}</p>"#, escape(text)),
        ListView::Cards(cards) => cards.iter().map(card).collect(),
    }
}

/// Render the event cards.
pub fn render_events(events: &ListView<EventCard>) -> String {
    render_list(events, |e| {
        let optional = |icon: &str, value: &Option<String>| {
            value
                .as_deref()
                .map(|v| format!(r#"<p class="mb-1"><i class="fas {} icon"></i>{}</p>"#, icon, escape(v)))
                .unwrap_or_default()
        };
        let description = e
            .description
            .as_deref()
            .map(|d| format!(r#"<p class="mt-2">{}</p>"#, escape(d)))
            .unwrap_or_default();
        format!(
            r#"<div class="event-card" data-event-id="{id}"><h5>{title}</h5><p class="mb-1"><i class="fas fa-calendar icon"></i>{date}</p>{location}{kind}{description}<button class="btn btn-danger btn-sm" data-delete-event="{id}"><i class="fas fa-trash"></i></button></div>"#,
            id = e.id,
            title = escape(&e.title),
            date = escape(&e.date),
            location = optional("fa-map-marker-alt", &e.location),
            kind = optional("fa-tag", &e.kind),
            description = description,
        )
    })
}

fn render_select(id: &str, select: &SelectView) -> String {
    let options: String = select
        .options
        .iter()
        .map(|o| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape(o.value.as_deref().unwrap_or_default()),
                if o.selected { " selected" } else { "" },
                escape(&o.label)
            )
        })
        .collect();
    format!(r#"<select id="{}">{}</select>"#, id, options)
}

fn render_generator(generator: &GeneratorView) -> String {
    let preview = generator
        .preview
        .as_ref()
        .map(|p| {
            format!(
                r#"<div id="previewContent" class="preview-box">{}</div><div id="previewHashtags" class="hashtags-box">{}</div>"#,
                escape(&p.content),
                escape(&p.hashtags)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<form id="generateForm">{}{}{}<button type="submit">Generate</button></form><div id="loading"{}>Generating...</div><div id="previewSection"{}>{}</div>"#,
        render_select("selectEvent", &generator.event_select),
        render_select("selectPlatform", &generator.platform),
        render_select("selectTone", &generator.tone),
        hidden(generator.loading),
        hidden(generator.preview.is_some()),
        preview
    )
}

fn render_post(post: &PostCard) -> String {
    let action = post
        .action
        .map(|a| {
            format!(
                r#"<button class="btn btn-sm" data-post-id="{}" data-status="{}">{}</button>"#,
                post.id,
                a.target,
                escape(a.label)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<div class="event-card" data-post-id="{id}"><h5>{title}</h5><span class="{badge_class}">{badge}</span><span class="badge bg-info ms-2">{platform}</span><span class="badge bg-secondary ms-2">{tone}</span><button class="btn btn-danger btn-sm" data-delete-post="{id}"><i class="fas fa-trash"></i></button><div class="preview-box mb-2">{content}</div><div class="hashtags-box">{hashtags}</div><div class="mt-2">{action}</div></div>"#,
        id = post.id,
        title = escape(&post.event_title),
        badge_class = post.status_class,
        badge = post.status_label,
        platform = escape(&post.platform),
        tone = escape(&post.tone),
        content = escape(&post.content),
        hashtags = escape(&post.hashtags),
        action = action,
    )
}

fn render_posts(posts: &PostListView) -> String {
    format!(
        r#"{}<div id="postsList">{}</div>"#,
        render_select("filterEvent", &posts.filter),
        render_list(&posts.posts, render_post)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlertKind, App, view::render_page};
    use postgen_core::{EventBuilder, PostBuilder, PostStatus};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut app = App::default();
        app.events.set_events(vec![
            EventBuilder::default()
                .id(1)
                .title("<script>alert(1)</script>")
                .date("2025-01-01")
                .build()
                .unwrap(),
        ]);
        let html = render_document(&render_page(&app));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains(r#"class="event-card""#));
    }

    #[test]
    fn test_class_vocabulary() {
        let mut app = App::default();
        app.alerts.push("Saved", AlertKind::Success);
        app.posts.set_posts(vec![
            PostBuilder::default()
                .id(2)
                .event_title("Expo")
                .platform("twitter")
                .tone("friendly")
                .content("See you there")
                .status(PostStatus::Approved)
                .build()
                .unwrap(),
        ]);

        let html = render_document(&render_page(&app));
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains(r#"class="fas fa-moon""#));
        assert!(html.contains("alert alert-success alert-dismissible fade show"));
        assert!(html.contains(r#"<span class="status-badge status-approved">APPROVED</span>"#));
        assert!(html.contains(r#"<div class="hashtags-box">No hashtags</div>"#));
        assert!(html.contains("Mark as Posted"));
        assert!(!html.contains(">Approve<"));
    }

    #[test]
    fn test_empty_states() {
        let mut app = App::default();
        app.events.set_events(Vec::new());
        app.posts.set_posts(Vec::new());
        let html = render_document(&render_page(&app));
        assert!(html.contains("No events yet. Create your first event!"));
        assert!(html.contains("No posts generated yet."));
        assert!(html.contains(r#"<option value="" selected>Choose an event...</option>"#));
    }
}
