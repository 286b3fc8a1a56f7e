use crate::types::{ClockFace, IndexSet, SquareState, SQUARE_COUNT};

/// Merge the hour and minute selections into one state per square.
pub fn compose(hour_squares: &IndexSet, minute_squares: &IndexSet) -> ClockFace {
    let mut face = [SquareState::Inactive; SQUARE_COUNT];

    for (index, state) in face.iter_mut().enumerate() {
        *state = match (hour_squares.contains(index), minute_squares.contains(index)) {
            (true, true) => SquareState::Both,
            (true, false) => SquareState::HourOnly,
            (false, true) => SquareState::MinuteOnly,
            (false, false) => SquareState::Inactive,
        };
    }

    face
}
