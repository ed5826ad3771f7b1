//! NewsPulse: pull a set of RSS/Atom feeds, normalize and sentiment-tag the
//! entries, and render them as a filterable HTML card grid.
//!
//! The pipeline is fetch → parse → transform → filter → render, rerun from
//! scratch on every refresh.

pub mod cli;
pub mod config;
pub mod error;
pub mod news;
pub mod open_url;
pub mod render;
pub mod sentiment;
pub mod session;
pub mod ui;
pub mod util;
