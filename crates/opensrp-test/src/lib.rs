//! Test helpers shared by the OpenSRP login crates.

mod api;

pub use api::start_api_mock;
