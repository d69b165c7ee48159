pub mod config;
pub mod models;
pub mod catalog;
pub mod search;
pub mod render;
pub mod utils;
