pub mod config;
pub mod logging;

pub mod batch;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod media;
pub mod persist;
