//! # modelist
//!
//! Model catalog browser: loads the catalog, keeps the filtered list
//! projection current and routes item clicks to run or download actions.
//!
//! The filtering logic lives in `ml-core`, the presenter in `ml-app` and the
//! file-backed adapters in `ml-infra`; this crate assembles them.

pub mod bootstrap;
pub mod view;

pub use bootstrap::{load_config, spawn_lifecycle_forwarder, wire_model_list, ModelListRuntime};
pub use view::TracingView;
