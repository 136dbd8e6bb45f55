/// One-off colour lookup
pub mod colour;
/// Settings file access
pub mod config;
/// Live terminal page
pub mod run;
