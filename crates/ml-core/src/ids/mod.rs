//! ID type wrappers for type safety.

pub mod model_id;

pub use model_id::ModelId;
