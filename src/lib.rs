//! Search box core with a terminal front end
//!
//! The library holds everything that does not touch the terminal: ranking,
//! remote augmentation, caching, debouncing, keyboard navigation, recent
//! searches and query classification, composed by
//! [`controller::SearchBox`]. The `app` and `widgets` modules render that
//! state with ratatui.

pub mod app;
pub mod capabilities;
pub mod classify;
pub mod config;
pub mod controller;
pub mod debouncer;
pub mod error;
pub mod history;
pub mod navigation;
pub mod remote;
pub mod suggest;
pub mod widgets;

#[cfg(test)]
mod test_utils;
