pub use tensorname_internal::*;
