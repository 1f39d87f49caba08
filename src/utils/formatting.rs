//! Formatting utilities used for CLI outputs.

/// Text progress bar, e.g. `[████████░░░░░░░░░░░░] 40%`.
pub fn progress_bar(percent: i64, width: usize) -> String {
    let pct = percent.clamp(0, 100) as usize;
    let filled = (pct * width).div_euclid(100);

    let mut bar = String::with_capacity(width + 8);
    bar.push('[');
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar.push(']');
    bar.push_str(&format!(" {:>3}%", pct));
    bar
}

/// Shorten a string to `max` chars with a trailing ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
