use std::path::Path;

use crate::ids::ModelId;

/// Presentation layer callbacks.
///
/// Called synchronously from the presenter; implementations are expected to
/// hop to their own UI thread if they need one. The view pulls the rows to
/// render from the presenter's current view.
pub trait ModelListViewPort: Send + Sync {
    fn on_loading(&self);

    fn on_list_available(&self);

    fn on_list_load_error(&self, message: &str);

    /// The whole view may have changed (filter or canonical list update).
    fn on_data_set_changed(&self);

    /// A single row at `position` of the current view changed.
    fn on_item_changed(&self, position: usize, id: &ModelId);

    fn run_model(&self, path: &Path, id: &ModelId);
}
