//! Formatting helpers shared by the views

use dig_common::Progress;

/// CSS transform for the card track: one card width per index, plus the live
/// drag offset in pixels
pub fn track_transform(index: usize, drag_offset: f64) -> String {
    if drag_offset == 0.0 {
        format!("translateX(-{}%)", index * 100)
    } else {
        format!("translateX(calc(-{}% + {}px))", index * 100, drag_offset)
    }
}

/// "3 / 10" (one-based)
pub fn progress_label(progress: Progress) -> String {
    format!("{} / {}", progress.index + 1, progress.total)
}

/// Header label for a search crate
pub fn search_summary(text: &str) -> String {
    match text.trim() {
        "" => "Search".to_string(),
        q => format!("\u{201c}{q}\u{201d}"),
    }
}

/// Short description of the active genre filter for the header button
pub fn genre_summary(names: &[String]) -> String {
    const SHOWN: usize = 2;
    match names.len() {
        0 => "All genres".to_string(),
        n if n <= SHOWN => names.join(", "),
        n => format!("{} +{}", names[..SHOWN].join(", "), n - SHOWN),
    }
}
