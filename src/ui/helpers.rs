//! Small shared rendering helpers.

/// Braille spinner frames, one per animation tick.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Current spinner frame for an animation tick counter.
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Tail of `input` that fits in `max_width` terminal cells.
///
/// Single-line inputs scroll horizontally; the newest characters stay
/// visible next to the cursor.
pub fn visible_tail(input: &str, max_width: usize) -> &str {
    use unicode_width::UnicodeWidthStr;

    if input.width() <= max_width {
        return input;
    }
    let mut start = 0;
    for (idx, _) in input.char_indices() {
        if input[idx..].width() <= max_width {
            start = idx;
            break;
        }
        start = idx;
    }
    &input[start..]
}
