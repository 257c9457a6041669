//! Text and JSON output for an arranged tag list.

use serde::Serialize;
use tagflow::{Arrangement, Placement, Rect, Row, Size};

use crate::tags::{CHAR_WIDTH, Tag};

/// Draw one text line per row, each tag at the column nearest its x position.
///
/// Selected tags are bracketed; unselected ones are padded with spaces so both
/// occupy the same cells. Lines grow only as far as the tags reach, whatever
/// the width of `bounds`.
pub fn render_text(tags: &[Tag], arrangement: &Arrangement, bounds: Rect) -> String {
    let mut out = String::new();

    for row in &arrangement.rows {
        let mut line: Vec<char> = Vec::new();

        for (tag, placement) in tags[row.indices()].iter().zip(arrangement.row_placements(row)) {
            let start = ((placement.x - bounds.x) / CHAR_WIDTH).round().max(0.0) as usize;
            let label = if tag.selected {
                format!("[{}]", tag.name)
            } else {
                format!(" {} ", tag.name)
            };

            let mut col = start;
            for ch in label.chars() {
                if col >= line.len() {
                    line.resize(col + 1, ' ');
                }
                line[col] = ch;
                col += 1;
            }
        }

        let text: String = line.into_iter().collect();
        out.push_str(text.trim_end());
        out.push('\n');
    }

    out
}

#[derive(Debug, Serialize)]
pub struct TagOutput<'a> {
    pub name: &'a str,
    pub selected: bool,
    pub placement: Placement,
}

#[derive(Debug, Serialize)]
pub struct LayoutOutput<'a> {
    pub size: Size,
    pub rows: &'a [Row],
    pub tags: Vec<TagOutput<'a>>,
}

pub fn render_json(tags: &[Tag], arrangement: &Arrangement) -> serde_json::Result<String> {
    let output = LayoutOutput {
        size: arrangement.size,
        rows: &arrangement.rows,
        tags: tags
            .iter()
            .zip(&arrangement.placements)
            .map(|(tag, placement)| TagOutput {
                name: &tag.name,
                selected: tag.selected,
                placement: *placement,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&output)
}
