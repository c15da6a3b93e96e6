use std::collections::HashSet;

use super::table::RowId;

/// Rows picked for partial export, by identity.
///
/// Members keep the order in which they were toggled on; export emits
/// selected rows in that order.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    order: Vec<RowId>,
    members: HashSet<RowId>,
}

impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for SelectionSet {}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.members.contains(&id)
    }

    /// Adds `id` if absent, removes it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, id: RowId) -> bool {
        if self.members.insert(id) {
            self.order.push(id);
            true
        } else {
            self.members.remove(&id);
            self.order.retain(|member| *member != id);
            false
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RowId> + '_ {
        self.order.iter().copied()
    }

    pub(crate) fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = SelectionSet::new();

        assert!(selection.toggle(RowId(3)));
        assert!(selection.contains(RowId(3)));
        assert!(!selection.toggle(RowId(3)));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_twice_restores_previous_members() {
        let mut selection = SelectionSet::new();
        selection.toggle(RowId(1));
        selection.toggle(RowId(2));
        let before = selection.clone();

        selection.toggle(RowId(5));
        selection.toggle(RowId(5));

        assert_eq!(selection, before);
    }

    #[test]
    fn membership_and_order_agree_over_many_rows() {
        let mut selection = SelectionSet::new();
        for id in (0..2_000).rev() {
            selection.toggle(RowId(id));
        }
        for id in (0..2_000).step_by(2) {
            selection.toggle(RowId(id));
        }

        assert_eq!(selection.len(), 1_000);
        assert!(selection.contains(RowId(1)));
        assert!(!selection.contains(RowId(2)));
        assert_eq!(selection.iter().next(), Some(RowId(1_999)));
        assert!(selection.iter().all(|id| selection.contains(id)));
    }

    #[test]
    fn iteration_follows_toggle_order() {
        let mut selection = SelectionSet::new();
        selection.toggle(RowId(9));
        selection.toggle(RowId(2));
        selection.toggle(RowId(4));
        selection.toggle(RowId(2));

        let order: Vec<RowId> = selection.iter().collect();
        assert_eq!(order, vec![RowId(9), RowId(4)]);
    }
}
