pub mod config;
pub mod dates;
pub mod language;
pub mod model;
pub mod sanitize;
pub mod source;
pub mod transform;
