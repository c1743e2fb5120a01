//! Pure text helpers shared by the domain.

mod text;

pub use text::*;
