use crate::params::{Mode, Offset};

/// Position of a spawn relative to the caster.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub forward: f64,
    pub side: f64,
    pub vertical: f64,
}

/// Map an image cell onto the output axes.
///
/// Rows are flipped so the top of the image ends up highest. `spacing` is the
/// distance between neighbouring pixels in output units.
pub fn map_position(
    mode: Mode,
    origin: &Offset,
    spacing: f64,
    column: u32,
    row: u32,
    height: u32,
) -> Position {
    let across = column as f64 * spacing;
    let lifted = height.saturating_sub(1).saturating_sub(row) as f64 * spacing;

    match mode {
        Mode::Horizontal => Position {
            forward: origin.forward,
            side: origin.side + across,
            vertical: origin.vertical + lifted,
        },
        Mode::Vertical => Position {
            forward: origin.forward + across,
            side: origin.side,
            vertical: origin.vertical + lifted,
        },
    }
}
