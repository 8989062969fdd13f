//! Dashboard application: view state, refresh orchestration, job
//! tracking, and the event loop binding them to the realtime channel.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod feed;
pub mod indicator;
pub mod refresh;
pub mod toast;
pub mod tracker;
pub mod view;
