//! Plain-text rendering of a session for the terminal frontend.

use std::fmt::Write as _;

use client_core::GameSession;
use shared::domain::{Coord, BOARD_SIZE, BOX_SIZE};

/// Each cell takes three columns: `[5]` is the selection, `:5:` a
/// highlighted cell, `·` a blank and `+` a blank carrying pencil marks.
pub fn render_board(session: &GameSession) -> String {
    let separator = format!("  +{}\n", "---------+".repeat(BOX_SIZE));
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        if col > 0 && col % BOX_SIZE == 0 {
            out.push(' ');
        }
        let _ = write!(out, " {} ", col + 1);
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        if row % BOX_SIZE == 0 {
            out.push_str(&separator);
        }
        let _ = write!(out, "{} |", row + 1);
        for col in 0..BOARD_SIZE {
            let coord = Coord::new(row, col);
            out.push_str(&render_cell(session, coord));
            if (col + 1) % BOX_SIZE == 0 {
                out.push('|');
            }
        }
        out.push('\n');
    }
    out.push_str(&separator);
    out
}

fn render_cell(session: &GameSession, coord: Coord) -> String {
    let glyph = match session.board().get(coord) {
        Ok(cell) if cell.has_value() => char::from(b'0' + cell.value()),
        Ok(cell) if cell.has_marks() => '+',
        _ => '·',
    };
    if session.selection() == Some(coord) {
        format!("[{glyph}]")
    } else if session.highlights().contains(coord) {
        format!(":{glyph}:")
    } else {
        format!(" {glyph} ")
    }
}

pub fn render_footer(session: &GameSession) -> String {
    let mut out = format!(
        "time {}  pencil {}",
        session.clock(),
        if session.pencil_mode() { "on" } else { "off" }
    );
    if let Some(coord) = session.selection() {
        let _ = write!(out, "  selected row {} col {}", coord.row + 1, coord.col + 1);
        if let Ok(cell) = session.board().get(coord) {
            if cell.has_marks() {
                let marks: Vec<String> = cell.marks().iter().map(|d| d.to_string()).collect();
                let _ = write!(out, "  marks {}", marks.join(","));
            }
        }
    }
    let status = session.status().text();
    if !status.is_empty() {
        let _ = write!(out, "\n{status}");
    }
    out
}
