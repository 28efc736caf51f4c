//! Colours used by the record grid.
use ansi_term::Colour;

pub const GREY: Colour = Colour::Fixed(244);
pub const GREEN: Colour = Colour::Green;
pub const RED: Colour = Colour::Red;
pub const CYAN: Colour = Colour::Cyan;

/// Placeholder shown for an empty logout/remark cell.
pub const EMPTY_CELL: &str = "--:--";

pub fn is_empty_cell(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == EMPTY_CELL
}

/// Login times in green, logout times in red, empty cells in grey.
pub fn color_for_time(value: &str, is_login: bool) -> Colour {
    if is_empty_cell(value) {
        GREY
    } else if is_login {
        GREEN
    } else {
        RED
    }
}
