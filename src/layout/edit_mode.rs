//! Viewing/Editing state of the dashboard.

/// Whether the dashboard is being customized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Normal, view-only dashboard.
    #[default]
    Viewing,
    /// Structural changes allowed; hidden widgets are drawn dimmed.
    Editing,
}

impl EditMode {
    /// The "customize" action. Already editing stays editing.
    pub fn customize(self) -> Self {
        EditMode::Editing
    }

    /// The "done editing" action. Already viewing stays viewing.
    pub fn done_editing(self) -> Self {
        EditMode::Viewing
    }

    /// Flips between the two states.
    pub fn toggled(self) -> Self {
        match self {
            EditMode::Viewing => self.customize(),
            EditMode::Editing => self.done_editing(),
        }
    }

    /// Returns `true` while editing.
    pub fn is_editing(self) -> bool {
        self == EditMode::Editing
    }
}

impl From<bool> for EditMode {
    fn from(is_edit_mode: bool) -> Self {
        if is_edit_mode {
            EditMode::Editing
        } else {
            EditMode::Viewing
        }
    }
}
