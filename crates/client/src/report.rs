//! Plain-text rendering of the world and of turn records.
use std::fmt::Write;

use tactics_core::{Position, World};
use tactics_runtime::TurnRecord;

/// The grid as rows of glyphs; occupants are drawn over their tile.
pub fn render_world(world: &World) -> String {
    let grid = world.grid();
    let mut out = String::with_capacity(((grid.width() + 1) * grid.height()) as usize);
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let position = Position::new(x, y);
            let glyph = grid
                .entity_at(position)
                .and_then(|id| world.entity(id))
                .map_or_else(|| grid.tile(position).glyph(), |entity| entity.glyph);
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// One line per record, e.g. `turn 3 #1: attack (deaths: #0)`.
pub fn describe(record: &TurnRecord) -> String {
    let mut line = format!("turn {} {}: ", record.turn, record.entity);
    match record.chosen {
        Some(mode) => {
            let _ = write!(line, "{}", mode);
        }
        None => line.push_str("waits"),
    }
    if !record.deaths.is_empty() {
        let dead: Vec<String> = record.deaths.iter().map(ToString::to_string).collect();
        let _ = write!(line, " (deaths: {})", dead.join(", "));
    }
    line
}
