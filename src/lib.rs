// Workdesk Calendar Core
// Exports all modules for the hosting page and the test suite

pub mod models;
pub mod services;
pub mod utils;
