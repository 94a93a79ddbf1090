//! Board rendering for the tic-tac-toe GUI

use crate::{Board, Cell, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index, if any.
    ///
    /// Clicks are only reported while `accept_input` is set and the cell is
    /// empty.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<usize>,
        winning_line: Option<[usize; 3]>,
        accept_input: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y).max(90.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        if let Some(line) = winning_line {
            self.draw_winning_cells(&painter, &line);
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(index) = last_move {
            self.draw_last_move_marker(&painter, index);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !accept_input {
            return None;
        }

        let index = response
            .hover_pos()
            .and_then(|p| self.screen_to_board(p))
            .map(Pos::to_index)?;

        if !board.is_empty(index) {
            return None;
        }

        painter.rect_filled(self.cell_rect(index).shrink(4.0), CornerRadius::same(4), hover_valid());

        response.clicked().then_some(index)
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let inner = self.inner_rect();

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            painter.line_segment(
                [
                    Pos2::new(inner.min.x + offset, inner.min.y),
                    Pos2::new(inner.min.x + offset, inner.max.y),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    Pos2::new(inner.min.x, inner.min.y + offset),
                    Pos2::new(inner.max.x, inner.min.y + offset),
                ],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for index in 0..TOTAL_CELLS {
            if let Some(Cell::Mark(mark)) = board.get(index) {
                self.draw_mark(painter, index, mark);
            }
        }
    }

    fn draw_mark(&self, painter: &Painter, index: usize, mark: Mark) {
        let center = self.cell_center(index);
        let half = self.cell_size * MARK_SIZE_RATIO;
        let stroke = Stroke::new(MARK_STROKE_WIDTH, mark_color(mark));

        match mark {
            Mark::X => {
                painter.line_segment(
                    [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(-half, half), center + Vec2::new(half, -half)],
                    stroke,
                );
            }
            Mark::O => {
                painter.circle_stroke(center, half, stroke);
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, index: usize) {
        let rect = self.cell_rect(index).shrink(3.0);
        painter.rect_stroke(
            rect,
            CornerRadius::same(4),
            Stroke::new(2.0, LAST_MOVE_MARKER),
            egui::StrokeKind::Inside,
        );
    }

    fn draw_winning_cells(&self, painter: &Painter, line: &[usize; 3]) {
        for &index in line {
            painter.rect_filled(self.cell_rect(index).shrink(2.0), CornerRadius::same(4), win_cell_fill());
        }
    }

    /// Stroke through the three winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[usize; 3]) {
        let stroke = Stroke::new(5.0, WIN_HIGHLIGHT);
        painter.line_segment([self.cell_center(line[0]), self.cell_center(line[2])], stroke);
    }

    fn inner_rect(&self) -> Rect {
        self.board_rect.shrink(BOARD_MARGIN)
    }

    fn cell_rect(&self, index: usize) -> Rect {
        let (row, col) = (index / BOARD_SIZE, index % BOARD_SIZE);
        let min = self.inner_rect().min
            + Vec2::new(col as f32 * self.cell_size, row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    fn cell_center(&self, index: usize) -> Pos2 {
        self.cell_rect(index).center()
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.inner_rect().min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}
