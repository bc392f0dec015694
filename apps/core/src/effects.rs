//! Scroll, pointer and navigation math behind the page's interaction effects.

/// Fixed height of the sticky navigation bar.
pub const HEADER_OFFSET: f64 = 80.0;
/// Scroll distance after which the scroll indicator hides.
pub const SCROLL_INDICATOR_HIDE_AFTER: f64 = 100.0;
/// Lifetime of a click ripple in milliseconds.
pub const RIPPLE_LIFETIME_MS: i32 = 600;
/// Delay between successive card fade-ins in seconds.
pub const CARD_STAGGER_SECONDS: f64 = 0.1;
/// Delay before the page fades in after load, in milliseconds.
pub const PAGE_FADE_IN_DELAY_MS: i32 = 100;
/// Delay between fading out and following a link, in milliseconds.
pub const PAGE_FADE_OUT_MS: i32 = 300;

pub const FADE_SECTION_SELECTOR: &str =
    "#featured, #projects, #contact, #about-story, #skills, #cta, .resume-section";
pub const FADE_CARD_SELECTOR: &str = ".project-card, .skill-category, .resume-item";
pub const OBSERVER_THRESHOLD: f64 = 0.15;
pub const OBSERVER_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Allows at most one pending animation-frame update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Returns true when the caller should request a frame.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub const fn is_pending(self) -> bool {
        self.pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParallax {
    pub translate_y: f64,
    pub opacity: f64,
}

/// Hero content drifts down and fades while it is still on screen.
pub fn hero_parallax(scroll_y: f64, viewport_height: f64) -> Option<HeroParallax> {
    if viewport_height <= 0.0 || scroll_y >= viewport_height {
        return None;
    }
    Some(HeroParallax {
        translate_y: scroll_y * 0.5,
        opacity: 1.0 - (scroll_y / viewport_height) * 0.5,
    })
}

/// Vertical offset for the about photo, or `None` while it is off screen.
pub fn photo_parallax(rect_top: f64, viewport_height: f64) -> Option<f64> {
    if viewport_height <= 0.0 {
        return None;
    }
    let progress = (viewport_height - rect_top) / viewport_height;
    (progress > 0.0 && progress < 1.0).then_some(progress * -20.0)
}

/// Click position relative to the clicked element's box.
pub fn ripple_offset(client: (f64, f64), rect_origin: (f64, f64)) -> (f64, f64) {
    (client.0 - rect_origin.0, client.1 - rect_origin.1)
}

pub fn anchor_scroll_top(target_offset_top: f64, header_offset: f64) -> f64 {
    target_offset_top - header_offset
}

/// In-page anchors other than a bare `#`.
pub fn is_same_page_anchor(href: &str) -> bool {
    href.starts_with('#') && href.len() > 1
}

pub fn scroll_indicator_visible(scroll_y: f64) -> bool {
    scroll_y <= SCROLL_INDICATOR_HIDE_AFTER
}

pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * CARD_STAGGER_SECONDS)
}

/// Whether following a link should fade the page out first.
pub fn should_fade_navigation(
    href: &str,
    target: Option<&str>,
    link_host: &str,
    page_host: &str,
) -> bool {
    target != Some("_blank") && !href.starts_with('#') && link_host == page_host
}

#[cfg(test)]
mod tests {
    use super::{
        anchor_scroll_top, hero_parallax, is_same_page_anchor, photo_parallax, ripple_offset,
        scroll_indicator_visible, should_fade_navigation, stagger_delay, FrameGate,
    };

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    #[test]
    fn frame_gate_allows_one_pending_frame() {
        let mut gate = FrameGate::new();
        assert!(gate.try_schedule());
        assert!(!gate.try_schedule());
        assert!(gate.is_pending());
        gate.complete();
        assert!(gate.try_schedule());
    }

    #[test]
    fn hero_moves_half_speed_and_fades() {
        let parallax = hero_parallax(200.0, 800.0).unwrap();
        assert_close(parallax.translate_y, 100.0);
        assert_close(parallax.opacity, 0.875);
    }

    #[test]
    fn hero_untouched_once_scrolled_past() {
        assert!(hero_parallax(800.0, 800.0).is_none());
        assert!(hero_parallax(10.0, 0.0).is_none());
    }

    #[test]
    fn photo_parallax_only_inside_viewport() {
        assert_close(photo_parallax(400.0, 800.0).unwrap(), -10.0);
        assert!(photo_parallax(900.0, 800.0).is_none());
        assert!(photo_parallax(0.0, 800.0).is_none());
        assert!(photo_parallax(-100.0, 800.0).is_none());
    }

    #[test]
    fn ripple_is_relative_to_element() {
        assert_eq!(ripple_offset((150.0, 90.0), (100.0, 40.0)), (50.0, 50.0));
    }

    #[test]
    fn anchor_scroll_accounts_for_header() {
        assert_close(anchor_scroll_top(1200.0, 80.0), 1120.0);
    }

    #[test]
    fn bare_hash_is_not_an_anchor_target() {
        assert!(is_same_page_anchor("#contact"));
        assert!(!is_same_page_anchor("#"));
        assert!(!is_same_page_anchor("about.html"));
    }

    #[test]
    fn indicator_hides_after_threshold() {
        assert!(scroll_indicator_visible(0.0));
        assert!(scroll_indicator_visible(100.0));
        assert!(!scroll_indicator_visible(100.5));
    }

    #[test]
    fn stagger_delay_formats_tenths() {
        assert_eq!(stagger_delay(0), "0.0s");
        assert_eq!(stagger_delay(3), "0.3s");
    }

    #[test]
    fn fade_only_for_same_host_page_links() {
        assert!(should_fade_navigation("about.html", None, "me.dev", "me.dev"));
        assert!(!should_fade_navigation("about.html", Some("_blank"), "me.dev", "me.dev"));
        assert!(!should_fade_navigation("#top", None, "me.dev", "me.dev"));
        assert!(!should_fade_navigation("https://other.dev", None, "other.dev", "me.dev"));
    }
}
