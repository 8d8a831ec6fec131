//! Tuning constants for the scroll-linked navigation.
//!
//! The pixel thresholds and lock windows below are presentation tuning, not
//! contracts. They are collected here so the navbar and the scroll provider
//! never hard-code them inline.

/// One entry in the fixed navigation list. Each `id` must match the DOM id
/// of a section on the home page.
#[derive(Clone, Copy, PartialEq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_SECTIONS: [NavSection; 5] = [
    NavSection { id: "home", label: "Home" },
    NavSection { id: "features", label: "Features" },
    NavSection { id: "interface", label: "Interface" },
    NavSection { id: "benefits", label: "Benefits" },
    NavSection { id: "testimonials", label: "Testimonials" },
];

/// At or above this offset the navbar is always expanded.
pub const NEAR_TOP_PX: f64 = 8.0;

/// Scrolling down past this offset hides the navbar entirely.
pub const HIDE_THRESHOLD_PX: f64 = 96.0;

/// Scroll deltas smaller than this leave the display mode untouched.
pub const SCROLL_JITTER_PX: f64 = 2.0;

/// Extra clearance below the navbar when deciding which section is active
/// and when offsetting programmatic scrolls.
pub const SECTION_LOOKAHEAD_PX: f64 = 24.0;

/// How long a nav click pins the navbar to the expanded mode.
pub const MODE_LOCK_MS: f64 = 1600.0;

/// How long a nav click pins the clicked section as active.
pub const SECTION_LOCK_MS: f64 = 1700.0;

/// Duration of the eased scroll triggered by a nav click.
pub const NAV_SCROLL_DURATION_S: f64 = 1.35;

/// Default duration for programmatic scrolls without an explicit one.
pub const SMOOTH_SCROLL_DURATION_S: f64 = 1.2;

/// Delay before re-measuring the document after a route change, so the new
/// page has a layout to measure.
pub const ROUTE_SETTLE_DELAY_MS: u32 = 100;

/// Luma above which the background behind the navbar counts as light.
pub const LIGHT_BG_LUMA: f64 = 200.0;

/// Root margin for the reveal-on-scroll observer.
pub const REVEAL_MARGIN: &str = "-50px";

/// Root margin for the stats count-up trigger.
pub const COUNT_UP_MARGIN: &str = "-100px";

/// Stat count-up: total duration and number of increments.
pub const COUNT_UP_DURATION_MS: u32 = 2000;
pub const COUNT_UP_STEPS: u32 = 60;
