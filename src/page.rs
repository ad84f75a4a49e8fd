use chrono::{DateTime, Datelike, Utc};

/// Window offset past which the navigation bar gets its solid background.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Height of the fixed navigation bar.
pub const NAV_HEIGHT: f64 = 64.0;
pub const SLIDE_INTERVAL_MS: u64 = 3000;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD
}

/// Id of the last section whose top edge is at or above the bottom of the
/// navigation bar. `sections` holds `(id, document offset)` in page order.
pub fn active_section<'a>(offset: f64, sections: &[(&'a str, f64)]) -> Option<&'a str> {
    let line = offset + NAV_HEIGHT;
    sections
        .iter()
        .rev()
        .find(|(_, top)| *top <= line)
        .or_else(|| sections.first())
        .map(|(id, _)| *id)
}

pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Year stamped by the build script, falling back to the current one.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.with_timezone(&Utc).year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_active_section() {
        let sections = [("home", 0.0), ("about", 900.0), ("skills", 1800.0)];
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(835.0, &sections), Some("home"));
        assert_eq!(active_section(836.0, &sections), Some("about"));
        assert_eq!(active_section(5000.0, &sections), Some("skills"));
        assert_eq!(active_section(0.0, &[]), None);
        // above the first section still highlights it
        assert_eq!(active_section(0.0, &[("about", 400.0)]), Some("about"));
    }

    #[test]
    fn test_next_slide_wraps() {
        assert_eq!(next_slide(0, 3), 1);
        assert_eq!(next_slide(2, 3), 0);
        assert_eq!(next_slide(5, 0), 0);
    }

    #[test]
    fn test_build_year_is_plausible() {
        assert!(build_year() >= 2024);
    }
}
