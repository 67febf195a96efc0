//! Plain-text rendering of boards, matches and score results, plus tracing setup.
use std::fmt::Write;

use tiny_town::prelude::{Grid, Match, ScoreResult};
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// One line per row, cells padded to the widest value.
pub fn render_board(grid: &Grid) -> String {
    let labels: Vec<String> = grid.iter().map(|(_, tile)| tile.to_string()).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(1);
    let mut out = String::new();
    for row in labels.chunks(grid.size()) {
        let line: Vec<String> = row.iter().map(|l| format!("{l:<width$}")).collect();
        let _ = writeln!(out, "{}", line.join(" | ").trim_end());
    }
    out
}

pub fn render_matches(matches: &[Match]) -> String {
    let mut out = String::new();
    for m in matches {
        let _ = writeln!(out, "{:<30} at {}  [{}]", m.building.as_str(), m.origin(), m.pattern);
    }
    out
}

pub fn render_score(result: &ScoreResult) -> String {
    let mut out = String::new();
    for (id, points) in &result.breakdown {
        let _ = writeln!(out, "{:<30} {:>4}", id.as_str(), points);
    }
    let _ = writeln!(out, "{:<30} {:>4}", "empty cells", -(result.penalty_count as i32));
    let _ = writeln!(
        out,
        "food: {} produced, {} left, {} fed",
        result.feeding.pool_produced,
        result.feeding.pool_remaining,
        result.feeding.fed.len()
    );
    let _ = writeln!(out, "{:<30} {:>4}", "total", result.total);
    out
}

#[cfg(test)]
mod tests {
    use tiny_town::prelude::{score, Cell, Registry, Resource};

    use super::*;

    #[test]
    fn board_has_one_line_per_row() {
        let mut grid = Grid::new();
        grid.place(Cell::new(0, 0), Resource::Wood).unwrap();
        grid.place_building(Cell::new(3, 3), "well").unwrap();
        let text = render_board(&grid);
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().next().unwrap().starts_with("wood"));
        assert!(text.contains("[well]"));
    }

    #[test]
    fn score_lists_total() {
        let result = score(&Grid::new(), &Registry::default());
        let text = render_score(&result);
        assert!(text.contains("empty cells"));
        assert!(text.trim_end().ends_with("-16"));
    }
}
