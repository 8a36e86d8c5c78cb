//! A music playlist kept in a height-balanced tree ordered by title.
//!
//! [`index::TrackIndex`] is the core; [`shell::Session`] wraps it in the
//! interactive menu used by the `tunetree` binary.

pub mod artists;
pub mod config;
pub mod index;
pub mod logging;
pub mod shell;
