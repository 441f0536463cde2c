use crate::model::ContributionDay;
use chrono::Datelike;

/// Fixed graph width so all months align in one column.
pub const GRAPH_WIDTH: usize = 31;

const GLYPH_EMPTY: char = '░';
const GLYPH_LIGHT: char = '▒';
const GLYPH_MEDIUM: char = '▓';
const GLYPH_DENSE: char = '█';

/// Fixed intensity buckets: 0, 1-3, 4-6, 7+.
pub fn intensity_glyph(count: u32) -> char {
    match count {
        0 => GLYPH_EMPTY,
        1..=3 => GLYPH_LIGHT,
        4..=6 => GLYPH_MEDIUM,
        _ => GLYPH_DENSE,
    }
}

/// Glyph string for one calendar month (1-12) plus the month's total count.
/// Days keep their order; the string is right-padded with the empty glyph to
/// GRAPH_WIDTH characters.
pub fn month_graph(days: &[ContributionDay], month: u32) -> (String, u64) {
    let mut graph = String::new();
    let mut total = 0u64;
    let mut matched = 0usize;

    for day in days.iter().filter(|d| d.date.month() == month) {
        graph.push(intensity_glyph(day.count));
        total += u64::from(day.count);
        matched += 1;
    }

    for _ in matched..GRAPH_WIDTH {
        graph.push(GLYPH_EMPTY);
    }

    (graph, total)
}
