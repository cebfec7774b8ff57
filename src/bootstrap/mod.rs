pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use wiring::{spawn_lifecycle_forwarder, wire_model_list, ModelListRuntime};
