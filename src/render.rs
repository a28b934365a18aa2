//! Collaborator contracts for the rendering side.
//!
//! The pipeline never draws. It hands a finished radar to an injected
//! renderer, with a canvas size hint derived from injected page state, so
//! builds run and test without a live page.

use crate::constants::canvas;
use crate::data::Radar;

/// External renderer consuming the finished aggregate.
pub trait Renderer {
    /// Draw `radar` into a canvas of roughly `size_hint` pixels.
    fn render(&mut self, size_hint: u32, radar: &Radar);
}

/// Injected ambient page state (viewport, title bar).
pub trait RadarPage {
    /// Current viewport height in pixels.
    fn viewport_height(&self) -> u32;
    /// Replace the page title.
    fn set_title(&mut self, title: &str);
}

/// Canvas size hint for a given viewport height.
pub fn size_hint(viewport_height: u32) -> u32 {
    canvas::MIN_SIZE.max(viewport_height.saturating_sub(canvas::VIEWPORT_INSET))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tall_viewports_subtract_the_page_chrome() {
        assert_eq!(size_hint(1000), 867);
        assert_eq!(size_hint(754), 621);
    }

    #[test]
    fn short_viewports_clamp_to_the_minimum() {
        assert_eq!(size_hint(700), 620);
        assert_eq!(size_hint(0), 620);
        assert_eq!(size_hint(753), 620);
    }
}
