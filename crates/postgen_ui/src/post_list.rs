//! Generated post list and its event filter.

use crate::{EventChoices, RequestSequence};
use postgen_core::Post;

/// Post cards, their cursor and the `All Events` filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostListPanel {
    /// Event filter dropdown (`All Events` sentinel)
    pub filter: EventChoices,
    /// Loaded posts; `None` until the first load completes
    pub list: Option<Vec<Post>>,
    /// Cursor into `list`
    pub selected: usize,
    /// Load sequencing
    pub seq: RequestSequence,
}

impl PostListPanel {
    /// Replace the cards, clamping the cursor.
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        if self.selected >= posts.len() {
            self.selected = posts.len().saturating_sub(1);
        }
        self.list = Some(posts);
    }

    /// Loaded posts, empty before the first load.
    pub fn posts(&self) -> &[Post] {
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
        if self.selected < self.posts().len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Post under the cursor.
    pub fn selected_post(&self) -> Option<&Post> {
        self.posts().get(self.selected)
    }
}
