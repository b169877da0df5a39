pub mod config;
pub mod errors;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod structs;
