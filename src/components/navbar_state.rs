//! Navbar state machine, kept free of DOM types so it runs under plain
//! `cargo test`.
//!
//! The component feeds this module scroll samples, timestamps and section
//! geometry; everything that decides *what* the navbar shows lives here.

use std::cmp::Ordering;

use crate::config;

/// Visibility/scale state of the fixed navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Expanded,
    Compact,
    Hidden,
}

impl DisplayMode {
    pub fn class(self) -> &'static str {
        match self {
            DisplayMode::Expanded => "navbar-expanded",
            DisplayMode::Compact => "navbar-compact",
            DisplayMode::Hidden => "navbar-hidden",
        }
    }
}

/// One scroll sample as seen by the mode machine.
#[derive(Debug, Clone, Copy)]
pub struct ModeInput {
    pub y: f64,
    pub delta: f64,
    pub now_ms: f64,
    /// Expiry of the click-armed expanded lock; 0 when never armed.
    pub lock_until_ms: f64,
}

/// Resolve the display mode for one scroll sample. `None` means the sample
/// was too small to act on and the previous mode stands.
pub fn next_mode(input: ModeInput) -> Option<DisplayMode> {
    if input.now_ms < input.lock_until_ms || input.y <= config::NEAR_TOP_PX {
        return Some(DisplayMode::Expanded);
    }
    if input.delta.abs() < config::SCROLL_JITTER_PX {
        return None;
    }
    Some(if input.delta > 0.0 {
        if input.y > config::HIDE_THRESHOLD_PX {
            DisplayMode::Hidden
        } else {
            DisplayMode::Compact
        }
    } else {
        DisplayMode::Expanded
    })
}

/// Click-armed override pinning a section id against geometry recomputation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionLock {
    pub until_ms: f64,
    pub id: Option<&'static str>,
}

impl SectionLock {
    pub fn arm(id: &'static str, now_ms: f64) -> Self {
        Self {
            until_ms: now_ms + config::SECTION_LOCK_MS,
            id: Some(id),
        }
    }

    pub fn active(&self, now_ms: f64) -> bool {
        now_ms < self.until_ms
    }
}

/// Pick the active section from `(id, absolute_top)` pairs: the last section
/// (in top order) whose top has scrolled within the navbar's reach wins,
/// with the topmost section as the fallback. Equal tops resolve to the later
/// entry.
pub fn pick_active_section<'a>(
    sections: &[(&'a str, f64)],
    y: f64,
    nav_height: f64,
) -> Option<&'a str> {
    let mut ordered: Vec<(&str, f64)> = sections.to_vec();
    ordered.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    let threshold = y + nav_height + config::SECTION_LOOKAHEAD_PX + 1.0;
    let mut best = ordered.first()?.0;
    for &(id, top) in &ordered {
        if top <= threshold {
            best = id;
        }
    }
    Some(best)
}

/// Section selection with the lock applied: a live lock wins over geometry.
pub fn resolve_active_section<'a>(
    lock: &SectionLock,
    now_ms: f64,
    sections: &[(&'a str, f64)],
    y: f64,
    nav_height: f64,
) -> Option<&'a str> {
    if lock.active(now_ms) {
        if let Some(id) = lock.id {
            return Some(id);
        }
    }
    pick_active_section(sections, y, nav_height)
}

/// Parse a computed `background-color` value into `(r, g, b, a)`.
/// Handles the `rgb(…)`/`rgba(…)` forms computed styles produce, both
/// comma- and slash-separated, plus the `transparent` keyword. Anything
/// else is `None`.
pub fn parse_css_color(value: &str) -> Option<(f64, f64, f64, f64)> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("transparent") {
        return Some((0.0, 0.0, 0.0, 0.0));
    }
    let body = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut parts = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.trim().parse::<f64>().ok());
    let r = parts.next()??;
    let g = parts.next()??;
    let b = parts.next()??;
    let a = parts.next().flatten().unwrap_or(1.0);
    Some((r, g, b, a))
}

/// Perceptual brightness in `[0, 255]` via the standard luma weighting.
pub fn luma(r: f64, g: f64, b: f64) -> f64 {
    (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0
}

/// Whether a computed background color counts as light. `None` when the
/// color is transparent or unparsable and the ancestor walk should continue.
pub fn light_background(value: &str) -> Option<bool> {
    let (r, g, b, a) = parse_css_color(value)?;
    if a <= 0.0 {
        return None;
    }
    Some(luma(r, g, b) > config::LIGHT_BG_LUMA)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(y: f64, delta: f64) -> ModeInput {
        ModeInput {
            y,
            delta,
            now_ms: 10_000.0,
            lock_until_ms: 0.0,
        }
    }

    #[test]
    fn tiny_deltas_leave_mode_unchanged() {
        for delta in [-1.9, -0.5, 0.0, 0.5, 1.9] {
            assert_eq!(next_mode(sample(300.0, delta)), None, "delta {}", delta);
        }
    }

    #[test]
    fn live_lock_forces_expanded_regardless_of_motion() {
        for (y, delta) in [(500.0, 80.0), (120.0, -3.0), (2_000.0, 999.0)] {
            let input = ModeInput {
                y,
                delta,
                now_ms: 10_000.0,
                lock_until_ms: 10_001.0,
            };
            assert_eq!(next_mode(input), Some(DisplayMode::Expanded));
        }
    }

    #[test]
    fn lock_expiry_is_exclusive() {
        // A tick exactly at the expiry timestamp is no longer locked.
        let input = ModeInput {
            y: 500.0,
            delta: 80.0,
            now_ms: 10_000.0,
            lock_until_ms: 10_000.0,
        };
        assert_eq!(next_mode(input), Some(DisplayMode::Hidden));
    }

    #[test]
    fn near_top_is_always_expanded() {
        assert_eq!(next_mode(sample(8.0, 50.0)), Some(DisplayMode::Expanded));
        assert_eq!(next_mode(sample(0.0, -50.0)), Some(DisplayMode::Expanded));
    }

    #[test]
    fn scroll_down_compacts_then_hides_and_up_expands() {
        // y 0 -> 50: shallow downward scroll compacts.
        assert_eq!(next_mode(sample(50.0, 50.0)), Some(DisplayMode::Compact));
        // y 50 -> 120: deep downward scroll hides.
        assert_eq!(next_mode(sample(120.0, 70.0)), Some(DisplayMode::Hidden));
        // y 120 -> 80: any real upward scroll expands.
        assert_eq!(next_mode(sample(80.0, -40.0)), Some(DisplayMode::Expanded));
    }

    #[test]
    fn last_section_past_the_navbar_wins() {
        let sections = [("home", 0.0), ("features", 800.0), ("benefits", 1600.0)];
        // threshold = 750 + 80 + 24 + 1 = 855, so the 800-top section is in.
        assert_eq!(
            pick_active_section(&sections, 750.0, 80.0),
            Some("features")
        );
        // Just short of the second section's top.
        assert_eq!(pick_active_section(&sections, 600.0, 80.0), Some("home"));
        // Deep enough for the last section.
        assert_eq!(
            pick_active_section(&sections, 1600.0, 80.0),
            Some("benefits")
        );
    }

    #[test]
    fn topmost_section_is_the_fallback() {
        let sections = [("home", 400.0), ("features", 900.0)];
        assert_eq!(pick_active_section(&sections, 0.0, 0.0), Some("home"));
        assert_eq!(pick_active_section(&[], 0.0, 0.0), None);
    }

    #[test]
    fn equal_tops_resolve_to_the_later_entry() {
        let sections = [("home", 200.0), ("features", 200.0)];
        assert_eq!(
            pick_active_section(&sections, 400.0, 80.0),
            Some("features")
        );
    }

    #[test]
    fn input_order_does_not_matter() {
        let shuffled = [("benefits", 1600.0), ("home", 0.0), ("features", 800.0)];
        assert_eq!(
            pick_active_section(&shuffled, 750.0, 80.0),
            Some("features")
        );
    }

    #[test]
    fn armed_lock_pins_the_clicked_section() {
        let sections = [("home", 0.0), ("features", 800.0), ("benefits", 1600.0)];
        let lock = SectionLock::arm("benefits", 0.0);
        // Geometry says "home", the lock says otherwise for its whole window.
        assert_eq!(
            resolve_active_section(&lock, 0.0, &sections, 0.0, 80.0),
            Some("benefits")
        );
        assert_eq!(
            resolve_active_section(&lock, crate::config::SECTION_LOCK_MS - 1.0, &sections, 0.0, 80.0),
            Some("benefits")
        );
        // At expiry geometry takes over again.
        assert_eq!(
            resolve_active_section(&lock, crate::config::SECTION_LOCK_MS, &sections, 0.0, 80.0),
            Some("home")
        );
    }

    #[test]
    fn parses_computed_color_forms() {
        assert_eq!(
            parse_css_color("rgb(255, 94, 50)"),
            Some((255.0, 94.0, 50.0, 1.0))
        );
        assert_eq!(
            parse_css_color("rgba(10, 10, 15, 0.5)"),
            Some((10.0, 10.0, 15.0, 0.5))
        );
        assert_eq!(
            parse_css_color("rgb(255 255 255 / 0.06)"),
            Some((255.0, 255.0, 255.0, 0.06))
        );
        assert_eq!(parse_css_color("transparent"), Some((0.0, 0.0, 0.0, 0.0)));
        assert_eq!(parse_css_color("currentcolor"), None);
        assert_eq!(parse_css_color("rgb(a, b, c)"), None);
    }

    #[test]
    fn light_background_threshold() {
        assert_eq!(light_background("rgb(255, 255, 255)"), Some(true));
        assert_eq!(light_background("rgb(10, 10, 15)"), Some(false));
        // Transparent layers don't decide; the walk keeps climbing.
        assert_eq!(light_background("rgba(0, 0, 0, 0)"), None);
        // Luma 200 is not strictly above the threshold.
        assert_eq!(light_background("rgb(200, 200, 200)"), Some(false));
    }

    #[test]
    fn sampling_is_idempotent() {
        let color = "rgba(250, 250, 250, 1)";
        assert_eq!(light_background(color), light_background(color));
        let sections = [("home", 0.0), ("features", 800.0)];
        assert_eq!(
            pick_active_section(&sections, 750.0, 80.0),
            pick_active_section(&sections, 750.0, 80.0)
        );
    }
}
