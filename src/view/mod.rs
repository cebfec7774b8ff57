mod tracing_view;

pub use tracing_view::TracingView;
