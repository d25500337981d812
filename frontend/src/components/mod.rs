//! UI components for the template frontend.
//!
//! # Layout Components
//! - [`Hero`] - Landing banner with heading, subtext and call-to-action buttons

mod hero;

pub use hero::*;
