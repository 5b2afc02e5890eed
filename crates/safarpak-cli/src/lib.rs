//! SafarPak CLI library.
//!
//! Output formatting and argument parsing helpers shared by the
//! `safarpak-cli` binary and its tests.

pub mod output;
pub mod point;
