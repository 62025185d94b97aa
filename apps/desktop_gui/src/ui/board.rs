//! The 9x9 grid widget.

use client_core::{Cell, GameSession};
use shared::domain::{Coord, BOARD_SIZE, BOX_SIZE};

struct BoardPalette {
    base: egui::Color32,
    highlight: egui::Color32,
    selected: egui::Color32,
    given_text: egui::Color32,
    entered_text: egui::Color32,
    mark_text: egui::Color32,
    thin_line: egui::Color32,
    thick_line: egui::Color32,
}

impl BoardPalette {
    fn for_visuals(visuals: &egui::Visuals) -> Self {
        if visuals.dark_mode {
            Self {
                base: egui::Color32::from_rgb(26, 26, 30),
                highlight: egui::Color32::from_rgb(44, 44, 48),
                selected: egui::Color32::from_rgb(37, 45, 86),
                given_text: egui::Color32::from_rgb(220, 221, 222),
                entered_text: egui::Color32::from_rgb(88, 101, 242),
                mark_text: egui::Color32::from_rgb(170, 171, 179),
                thin_line: egui::Color32::from_rgb(58, 60, 70),
                thick_line: egui::Color32::from_rgb(185, 187, 190),
            }
        } else {
            Self {
                base: egui::Color32::WHITE,
                highlight: egui::Color32::from_rgb(226, 231, 237),
                selected: egui::Color32::from_rgb(187, 222, 251),
                given_text: egui::Color32::from_rgb(20, 20, 24),
                entered_text: egui::Color32::from_rgb(50, 90, 175),
                mark_text: egui::Color32::from_rgb(108, 109, 118),
                thin_line: egui::Color32::from_rgb(190, 198, 206),
                thick_line: egui::Color32::from_rgb(52, 72, 97),
            }
        }
    }
}

pub fn cell_rect(board: egui::Rect, coord: Coord) -> egui::Rect {
    let size = board.width() / BOARD_SIZE as f32;
    egui::Rect::from_min_size(
        board.min + egui::vec2(coord.col as f32 * size, coord.row as f32 * size),
        egui::vec2(size, size),
    )
}

pub fn cell_at(board: egui::Rect, pos: egui::Pos2) -> Option<Coord> {
    if !board.contains(pos) {
        return None;
    }
    let size = board.width() / BOARD_SIZE as f32;
    let col = ((pos.x - board.left()) / size).floor() as usize;
    let row = ((pos.y - board.top()) / size).floor() as usize;
    Some(Coord::new(row.min(BOARD_SIZE - 1), col.min(BOARD_SIZE - 1)))
}

/// Pencil marks sit in a 3x3 keypad layout inside their cell, 1 top-left.
pub fn mark_rect(cell: egui::Rect, digit: u8) -> egui::Rect {
    let index = usize::from(digit.saturating_sub(1));
    let size = cell.width() / BOX_SIZE as f32;
    egui::Rect::from_min_size(
        cell.min
            + egui::vec2(
                (index % BOX_SIZE) as f32 * size,
                (index / BOX_SIZE) as f32 * size,
            ),
        egui::vec2(size, size),
    )
}

/// Paints the board and returns the cell clicked this frame.
pub fn show_board(ui: &mut egui::Ui, session: &GameSession) -> Option<Coord> {
    let side = ui.available_width().min(ui.available_height()).max(180.0);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
    let palette = BoardPalette::for_visuals(ui.visuals());
    let painter = ui.painter_at(rect);

    for cell in session.board().cells() {
        paint_cell(
            &painter,
            &palette,
            cell_rect(rect, cell.coord()),
            cell,
            session,
        );
    }
    paint_grid_lines(&painter, &palette, rect);

    if response.clicked() {
        response
            .interact_pointer_pos()
            .and_then(|pos| cell_at(rect, pos))
    } else {
        None
    }
}

fn paint_cell(
    painter: &egui::Painter,
    palette: &BoardPalette,
    rect: egui::Rect,
    cell: &Cell,
    session: &GameSession,
) {
    let fill = if session.selection() == Some(cell.coord()) {
        palette.selected
    } else if session.highlights().contains(cell.coord()) {
        palette.highlight
    } else {
        palette.base
    };
    painter.rect_filled(rect, egui::CornerRadius::ZERO, fill);

    if cell.has_value() {
        let color = if cell.is_predefined() {
            palette.given_text
        } else {
            palette.entered_text
        };
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            cell.value().to_string(),
            egui::FontId::proportional(rect.height() * 0.6),
            color,
        );
        return;
    }

    for digit in cell.marks().iter() {
        let slot = mark_rect(rect, digit);
        painter.text(
            slot.center(),
            egui::Align2::CENTER_CENTER,
            digit.to_string(),
            egui::FontId::proportional(slot.height() * 0.75),
            palette.mark_text,
        );
    }
}

fn paint_grid_lines(painter: &egui::Painter, palette: &BoardPalette, rect: egui::Rect) {
    let size = rect.width() / BOARD_SIZE as f32;
    for i in 0..=BOARD_SIZE {
        let offset = i as f32 * size;
        let stroke = if i % BOX_SIZE == 0 {
            egui::Stroke::new(2.0, palette.thick_line)
        } else {
            egui::Stroke::new(1.0, palette.thin_line)
        };
        painter.line_segment(
            [
                egui::pos2(rect.left() + offset, rect.top()),
                egui::pos2(rect.left() + offset, rect.bottom()),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.left(), rect.top() + offset),
                egui::pos2(rect.right(), rect.top() + offset),
            ],
            stroke,
        );
    }
}
