//! Local UI chrome state kept out of the domain models.

/// Layout for the course library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LibraryLayout {
    #[default]
    Grid,
    List,
}

/// Transient presentation state for panels and toggles.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub system_panel_open: bool,
    pub library_layout: LibraryLayout,
}
