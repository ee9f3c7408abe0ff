pub use crate::core::{
    backend::{dispatch_key_to_backend, Backend, DispatchKey, Layout},
    default::DefaultTypeConfig,
    error::Error,
    dtype::{Element, ScalarType},
    options::{TensorOptions, TypeKey, TypeKeyed},
    properties::{all_cpu_types, all_cuda_types, type_properties, TypeProperties},
};
pub use crate::types::{
    enumerate_declared_types, format_type_name, resolve_type_name, Family, TypeNameResolver, DEFAULT_TYPE_NAME,
};
