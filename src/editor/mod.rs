//! The text editing core.
//!
//! [`TextBuffer`] is a rope-backed buffer with a cursor and a dirty flag;
//! it has no knowledge of files or the terminal.

mod buffer;

pub use buffer::{Cursor, Direction, TextBuffer};
