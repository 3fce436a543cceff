//! Scroll-triggered reveal presets.
//!
//! Elements start hidden with one of the [`Reveal`] classes. The landing
//! page observes them and adds [`VISIBLE_CLASS`] the first time they enter
//! the viewport; once revealed they stay revealed.

use std::time::Duration;

/// Marker class shared by every revealable element.
pub const REVEAL_CLASS: &str = "reveal";

/// Class added when an element has entered the viewport.
pub const VISIBLE_CLASS: &str = "visible";

/// Entry transition applied when an element is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Fade in while rising
    FadeUp,
    /// Opacity only
    Fade,
    /// Fade in from slightly scaled down
    Zoom,
    /// Slide in from the left
    SlideLeft,
    /// Slide in from the right
    SlideRight,
}

impl Reveal {
    /// Full class list for an element using this preset.
    pub const fn class(self) -> &'static str {
        match self {
            Reveal::FadeUp => "reveal reveal-fade-up",
            Reveal::Fade => "reveal reveal-fade",
            Reveal::Zoom => "reveal reveal-zoom",
            Reveal::SlideLeft => "reveal reveal-slide-left",
            Reveal::SlideRight => "reveal reveal-slide-right",
        }
    }
}

/// Delay for the `index`-th item of a staggered list.
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// CSS custom property read by the reveal transition.
pub const DELAY_PROPERTY: &str = "--reveal-delay";

/// Inline style carrying a reveal delay.
///
/// Only the entry transition picks it up; hover transitions on the same
/// element start immediately.
pub fn transition_style(delay: Duration) -> String {
    format!("{DELAY_PROPERTY}: {}ms", delay.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_linearly() {
        let step = Duration::from_millis(100);
        assert_eq!(stagger_delay(0, step), Duration::ZERO);
        assert_eq!(stagger_delay(3, step), Duration::from_millis(300));
    }

    #[test]
    fn stagger_saturates_instead_of_overflowing() {
        let step = Duration::from_secs(u64::MAX / 2);
        assert_eq!(stagger_delay(usize::MAX, step), Duration::MAX);
    }

    #[test]
    fn transition_style_is_in_millis() {
        assert_eq!(
            transition_style(Duration::from_millis(200)),
            "--reveal-delay: 200ms"
        );
    }

    #[test]
    fn transition_style_leaves_other_transitions_alone() {
        let style = transition_style(Duration::from_millis(300));
        assert!(!style.contains("transition-delay"));
        assert!(style.starts_with(DELAY_PROPERTY));
    }

    #[test]
    fn every_preset_carries_the_marker_class() {
        for preset in [
            Reveal::FadeUp,
            Reveal::Fade,
            Reveal::Zoom,
            Reveal::SlideLeft,
            Reveal::SlideRight,
        ] {
            assert!(preset.class().split(' ').any(|c| c == REVEAL_CLASS));
        }
    }
}
