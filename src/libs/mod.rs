pub mod config;
pub mod errors;
pub mod logo;
pub mod status;
pub mod todos;
pub mod utils;
