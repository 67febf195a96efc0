#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_board, render_matches, render_score};
