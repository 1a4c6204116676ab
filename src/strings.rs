/// Number of consecutive `ch` bytes starting at `start`.
pub fn run_length(bytes: &[u8], start: usize, ch: u8) -> usize {
    bytes[start.min(bytes.len())..]
        .iter()
        .take_while(|&&b| b == ch)
        .count()
}

/// Offset of the first byte at or after `start` that isn't a space or tab.
pub fn skip_spaces(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && is_space_or_tab(bytes[i]) {
        i += 1;
    }
    i
}

pub fn is_space_or_tab(ch: u8) -> bool {
    matches!(ch, 9 | 32)
}
