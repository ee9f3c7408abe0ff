mod declared;
mod format;
mod resolve;

pub use declared::{enumerate_declared_types, DECLARED_BACKENDS};
pub use format::{backend_namespace, format_type_name};
pub use resolve::{resolve_type_name, Family, TypeNameResolver, DEFAULT_TYPE_NAME};
