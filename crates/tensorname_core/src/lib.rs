pub mod backend;
pub mod default;
pub mod dtype;
pub mod error;
pub mod options;
pub mod properties;
