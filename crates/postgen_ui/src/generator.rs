//! Post generation form and preview.

use crate::{EventChoices, RequestSequence};
use postgen_core::{GeneratedPost, Platform, Tone};
use strum::IntoEnumIterator;

/// Result of the last successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Generated body
    pub content: String,
    /// Generated hashtags, if any
    pub hashtags: Option<String>,
}

impl From<GeneratedPost> for Preview {
    fn from(post: GeneratedPost) -> Self {
        Self {
            content: post.content,
            hashtags: post.hashtags.filter(|h| !h.is_empty()),
        }
    }
}

/// Generator form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorPanel {
    /// Source event dropdown (`Choose an event...` sentinel)
    pub event_select: EventChoices,
    /// Target platform
    pub platform: Platform,
    /// Tone
    pub tone: Tone,
    /// Whether a generation request is in flight
    pub loading: bool,
    /// Visible preview, hidden while generating
    pub preview: Option<Preview>,
    /// Generation sequencing
    pub seq: RequestSequence,
}

impl GeneratorPanel {
    /// Select the next platform, wrapping around.
    pub fn cycle_platform(&mut self) {
        self.platform = next_in(self.platform);
    }

    /// Select the next tone, wrapping around.
    pub fn cycle_tone(&mut self) {
        self.tone = next_in(self.tone);
    }
}

fn next_in<T: IntoEnumIterator + PartialEq + Copy>(current: T) -> T {
    let mut all = T::iter().cycle();
    all.by_ref().find(|v| *v == current);
    all.next().unwrap_or(current)
}
