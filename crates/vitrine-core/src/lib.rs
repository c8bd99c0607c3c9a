//! Core building blocks for vitrine: page content model, line
//! classification, configuration and logging setup.
//!
//! Nothing in this crate touches the terminal; everything is usable from
//! headless contexts (tests, `vitrine content check`).

pub mod classify;
pub mod config;
pub mod content;
pub mod logging;
