use crate::{notename::NotationConvention, util::mod12::Sector};

/// Everything the presentation layer can ask of a [crate::session::WheelSession].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelMsg {
    /// The wheel follows the pointer, which is at this offset from the wheel's centre (screen
    /// coordinates, y pointing down).
    DragTo { dx: f64, dy: f64 },
    /// Set the wheel to an arbitrary angle, without snapping.
    Rotate { angle: f64 },
    /// The pointer was let go: snap to the nearest detent.
    Release,
    SelectKey { sector: Sector },
    /// Turn the wheel clockwise by this many detents.
    Step { delta: i64 },
    Reset,
    SetNotation { notation: NotationConvention },
    ToggleNotation,
}

pub trait HandleMsg<I> {
    fn handle_msg(&mut self, msg: I);
}
