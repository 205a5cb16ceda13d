//! Category dropdown state.

use plume_common::Category;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryMenu {
    pub open: bool,
}

impl CategoryMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Outside click or selection.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Entries shown while open, with the current choice marked.
    pub fn entries(&self, current: Option<Category>) -> Vec<(Category, bool)> {
        if !self.open {
            return Vec::new();
        }
        Category::ALL
            .into_iter()
            .map(|c| (c, Some(c) == current))
            .collect()
    }
}
