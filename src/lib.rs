//! Parsu: alumni and career networking platform prototype.
//!
//! Every page runs on seeded mock records. The HTTP API exposes the page
//! state (listings, status toggles, request queues and forms) per view session.

pub mod cli;
pub mod core;
pub mod mock_data;
pub mod types;
pub mod utils;
pub mod views;
pub mod web;

pub use web::{build_rocket, start_web_server};
