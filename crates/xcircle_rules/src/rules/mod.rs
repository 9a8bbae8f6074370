//! Win and draw rules.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_win, winning_line};
