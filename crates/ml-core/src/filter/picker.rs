use crate::filter::{Facet, FacetError};

/// One row of a facet picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub label: &'static str,
    pub selected: bool,
}

/// Single-choice option list for one facet.
///
/// The selection listener is handed over at construction; the picker never
/// looks one up from its surroundings.
pub struct FacetPicker<F: Facet> {
    title: String,
    selected: F,
    on_select: Box<dyn FnMut(F) + Send>,
}

impl<F: Facet> FacetPicker<F> {
    pub fn new(
        title: impl Into<String>,
        current: F,
        on_select: impl FnMut(F) + Send + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            selected: current,
            on_select: Box::new(on_select),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn selected(&self) -> F {
        self.selected
    }

    pub fn selected_index(&self) -> usize {
        self.selected.index()
    }

    pub fn options(&self) -> Vec<FacetOption> {
        F::all()
            .iter()
            .map(|value| FacetOption {
                label: value.label(),
                selected: *value == self.selected,
            })
            .collect()
    }

    /// Select the option at `index`.
    ///
    /// Returns `Ok(true)` and notifies the listener when the selection
    /// changed, `Ok(false)` when `index` is already selected.
    pub fn select(&mut self, index: usize) -> Result<bool, FacetError> {
        let value = F::from_index(index)?;
        if value == self.selected {
            return Ok(false);
        }

        self.selected = value;
        (self.on_select)(value);
        Ok(true)
    }
}

impl<F: Facet + std::fmt::Debug> std::fmt::Debug for FacetPicker<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetPicker")
            .field("title", &self.title)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
