use crate::types::SQUARE_COUNT;

/// Width of the golden tiling in unit cells
pub const GRID_COLUMNS: u32 = 8;
/// Height of the golden tiling in unit cells
pub const GRID_ROWS: u32 = 5;

/// Position and edge length of one square, in unit cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareCell {
    pub column: u32,
    pub row: u32,
    pub size: u32,
}

/// Cells of the five squares, ordered by sequence index.
///
/// ```text
/// 2 2 1 5 5 5 5 5
/// 2 2 1 5 5 5 5 5
/// 3 3 3 5 5 5 5 5
/// 3 3 3 5 5 5 5 5
/// 3 3 3 5 5 5 5 5
/// ```
pub fn square_layout() -> [SquareCell; SQUARE_COUNT] {
    [
        SquareCell { column: 2, row: 0, size: 1 },
        SquareCell { column: 2, row: 1, size: 1 },
        SquareCell { column: 0, row: 0, size: 2 },
        SquareCell { column: 0, row: 2, size: 3 },
        SquareCell { column: 3, row: 0, size: 5 },
    ]
}

/// Map a cell onto a screen rectangle of `cell_size` points per unit.
pub fn cell_rect(origin: egui::Pos2, cell: SquareCell, cell_size: f32) -> egui::Rect {
    let min = origin + egui::vec2(cell.column as f32, cell.row as f32) * cell_size;
    egui::Rect::from_min_size(min, egui::Vec2::splat(cell.size as f32 * cell_size))
}
