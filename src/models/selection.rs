use super::skip::{Skip, SkipId};

/// The single selected skip, tracked by id so it survives re-sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    selected: Option<SkipId>,
}

impl Selection {
    /// Replaces any prior selection.
    pub fn select(&mut self, id: SkipId) {
        self.selected = Some(id);
    }

    pub const fn id(&self) -> Option<SkipId> {
        self.selected
    }

    pub fn is_selected(&self, id: SkipId) -> bool {
        self.selected == Some(id)
    }

    /// Looks the selection up in the current list. `None` if nothing is
    /// selected or the record is no longer present.
    pub fn resolve<'a>(&self, skips: &'a [Skip]) -> Option<&'a Skip> {
        let id = self.selected?;
        skips.iter().find(|skip| skip.id == id)
    }
}
