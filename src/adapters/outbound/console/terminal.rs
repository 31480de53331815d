/// Width used when the terminal size cannot be determined (e.g. output piped in CI)
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Returns the terminal width in columns, falling back to [`DEFAULT_TERMINAL_WIDTH`]
pub fn terminal_width() -> usize {
    width_or_default(crossterm::terminal::size().ok().map(|(cols, _)| cols))
}

fn width_or_default(cols: Option<u16>) -> usize {
    match cols {
        Some(cols) if cols > 0 => usize::from(cols),
        _ => DEFAULT_TERMINAL_WIDTH,
    }
}
