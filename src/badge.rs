//! Badge display text.
//!
//! Badge copy comes out of the renderer as a single line with `#` standing
//! in for line breaks. The text is captured and rewritten exactly once, the
//! first time the backing fragment exists; later changes to the fragment are
//! ignored.

/// Delimiter the renderer uses in place of a line break.
pub const MARKER: char = '#';

/// Something that can repaint the badge right away, off the normal draw
/// cycle.
pub trait Redraw {
    fn redraw(&mut self);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum BadgeState {
    #[default]
    Uninitialized,
    Normalized(String),
}

#[derive(Clone, Debug, Default)]
pub struct BadgeText {
    state: BadgeState,
}

impl BadgeText {
    pub fn new() -> Self {
        Self::default()
    }

    /// First call captures the fragment, rewrites every marker into a line
    /// break and forces a redraw. Every later call is a no-op.
    pub fn on_content_available<R: Redraw>(&mut self, fragment: &str, display: &mut R) {
        if matches!(self.state, BadgeState::Normalized(_)) {
            return;
        }
        self.state = BadgeState::Normalized(fragment.replace(MARKER, "\n"));
        display.redraw();
    }

    /// The display text, once normalized.
    pub fn text(&self) -> Option<&str> {
        match &self.state {
            BadgeState::Uninitialized => None,
            BadgeState::Normalized(text) => Some(text),
        }
    }

    pub fn is_normalized(&self) -> bool {
        matches!(self.state, BadgeState::Normalized(_))
    }
}
