pub mod prelude;

pub use tensorname_core as core;
pub use tensorname_types as types;
