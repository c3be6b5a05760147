use super::naming::{copy_name, next_page_name};
use super::{Page, PageCategory, PageId};
use log::*;
use std::collections::HashSet;

/// A request to change the page collection. Indices address positions in
/// display order.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetActive(PageId),
    AddPage { after_index: usize },
    Reorder { from: usize, to: usize },
    Duplicate(PageId),
    Delete(PageId),
    SetAsFirst(PageId),
    Rename { id: PageId, name: String },
}

/// Ordered pages of a form plus the identifier of the active one.
///
/// The first and last pages are fixed sentinels. Every transition keeps
/// exactly one page active and leaves the sentinels in place.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCollection {
    pages: Vec<Page>,
    active_page_id: PageId,
    next_id: u64,
}

impl Default for PageCollection {
    fn default() -> Self {
        PageCollection::seed()
    }
}

impl PageCollection {
    /// Return the collection every session starts with.
    ///
    pub fn seed() -> Self {
        let mut pages = vec![
            Page::fixed(PageId::new(1), "Info", PageCategory::Info),
            Page::new(PageId::new(2), "Details", PageCategory::Document),
            Page::new(PageId::new(3), "Other", PageCategory::Document),
            Page::fixed(PageId::new(4), "Ending", PageCategory::Check),
        ];
        pages[0].is_active = true;
        PageCollection {
            pages,
            active_page_id: PageId::new(1),
            next_id: 5,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn active_page_id(&self) -> PageId {
        self.active_page_id
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.find(self.active_page_id)
    }

    pub fn find(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn index_of(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    /// Return the collection that results from applying `command`. Commands
    /// that are not allowed leave the collection as it was.
    ///
    pub fn apply(&self, command: Command) -> PageCollection {
        let mut next = self.clone();
        let changed = match command {
            Command::SetActive(id) => next.set_active(id),
            Command::AddPage { after_index } => next.add_page(after_index),
            Command::Reorder { from, to } => next.reorder(from, to),
            Command::Duplicate(id) => next.duplicate(id),
            Command::Delete(id) => next.delete(id),
            Command::SetAsFirst(id) => next.set_as_first(id),
            Command::Rename { id, name } => next.rename(id, name),
        };
        if !changed {
            return self.clone();
        }
        debug_assert!(next.is_consistent(), "page invariants broken: {:?}", next);
        next
    }

    /// Check the structural invariants: sentinels at both ends, unique ids and
    /// exactly one active page matching `active_page_id`.
    ///
    pub fn is_consistent(&self) -> bool {
        let (Some(first), Some(last)) = (self.pages.first(), self.pages.last()) else {
            return false;
        };
        if self.pages.len() < 2 || !first.is_fixed || !last.is_fixed {
            return false;
        }
        let inner_fixed = self.pages[1..self.pages.len() - 1]
            .iter()
            .any(|p| p.is_fixed);
        let mut ids = HashSet::new();
        let unique = self.pages.iter().all(|p| ids.insert(p.id));
        let mut active = self.pages.iter().filter(|p| p.is_active);
        let single_active = match (active.next(), active.next()) {
            (Some(page), None) => page.id == self.active_page_id,
            _ => false,
        };
        !inner_fixed && unique && single_active
    }

    fn fresh_id(&mut self) -> PageId {
        let id = PageId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn activate(&mut self, id: PageId) {
        self.active_page_id = id;
        for page in &mut self.pages {
            page.is_active = page.id == id;
        }
    }

    fn set_active(&mut self, id: PageId) -> bool {
        if self.find(id).is_none() {
            debug!("Ignoring activation of unknown page {}", id);
            return false;
        }
        self.activate(id);
        true
    }

    fn add_page(&mut self, after_index: usize) -> bool {
        // Never past the trailing fixed page.
        let insert_at = after_index.min(self.pages.len() - 2) + 1;
        let name = next_page_name(&self.pages);
        let id = self.fresh_id();
        debug!("Adding page {} '{}' at index {}", id, name, insert_at);
        self.pages
            .insert(insert_at, Page::new(id, &name, PageCategory::Document));
        self.activate(id);
        true
    }

    fn reorder(&mut self, from: usize, to: usize) -> bool {
        let last = self.pages.len() - 1;
        if from == 0 || from >= last || to == 0 || to >= last {
            debug!("Ignoring reorder {} -> {} touching a fixed position", from, to);
            return false;
        }
        if from == to {
            return false;
        }
        let page = self.pages.remove(from);
        debug!("Moving page {} from {} to {}", page.id, from, to);
        self.pages.insert(to, page);
        true
    }

    fn duplicate(&mut self, id: PageId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let original = &self.pages[index];
        if original.is_fixed {
            debug!("Ignoring duplication of fixed page {}", id);
            return false;
        }
        let mut copy = original.clone();
        copy.name = copy_name(&original.name);
        copy.id = self.fresh_id();
        let insert_at = (index + 1).min(self.pages.len() - 1);
        debug!("Duplicating page {} as {} at index {}", id, copy.id, insert_at);
        let copy_id = copy.id;
        self.pages.insert(insert_at, copy);
        self.activate(copy_id);
        true
    }

    fn delete(&mut self, id: PageId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if self.pages[index].is_fixed {
            debug!("Ignoring deletion of fixed page {}", id);
            return false;
        }
        let was_last = index == self.pages.len() - 1;
        let was_active = id == self.active_page_id;
        self.pages.remove(index);
        debug!("Deleted page {} from index {}", id, index);

        if was_active && !self.pages.is_empty() {
            let successor = if was_last {
                self.pages.len() - 1
            } else {
                index.saturating_sub(1)
            };
            let successor_id = self.pages[successor].id;
            self.activate(successor_id);
        }
        true
    }

    fn set_as_first(&mut self, id: PageId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if index <= 1 || self.pages[index].is_fixed {
            return false;
        }
        let page = self.pages.remove(index);
        self.pages.insert(1, page);
        true
    }

    fn rename(&mut self, id: PageId, name: String) -> bool {
        match self.pages.iter_mut().find(|p| p.id == id) {
            Some(page) => {
                debug!("Renaming page {} to '{}'", id, name);
                page.name = name;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::Words;
    use fake::Fake;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn id(raw: u64) -> PageId {
        PageId::new(raw)
    }

    fn names(collection: &PageCollection) -> Vec<&str> {
        collection.pages().iter().map(|p| p.name()).collect()
    }

    fn active_count(collection: &PageCollection) -> usize {
        collection.pages().iter().filter(|p| p.is_active()).count()
    }

    #[test]
    fn test_seed() {
        let seed = PageCollection::seed();
        assert_eq!(names(&seed), vec!["Info", "Details", "Other", "Ending"]);
        assert_eq!(seed.active_page_id(), id(1));
        assert!(seed.is_consistent());
        assert_eq!(PageCollection::default(), seed);
    }

    #[test]
    fn test_set_active() {
        let seed = PageCollection::seed();
        let next = seed.apply(Command::SetActive(id(3)));
        assert_eq!(next.active_page_id(), id(3));
        assert!(next.find(id(3)).unwrap().is_active());
        assert!(!next.find(id(1)).unwrap().is_active());
        assert_eq!(active_count(&next), 1);
    }

    #[test]
    fn test_set_active_unknown_is_noop() {
        let seed = PageCollection::seed();
        assert_eq!(seed.apply(Command::SetActive(id(99))), seed);
    }

    #[test]
    fn test_add_page_after_info() {
        let seed = PageCollection::seed();
        let next = seed.apply(Command::AddPage { after_index: 0 });
        assert_eq!(next.len(), 5);
        let added = next.get(1).unwrap();
        assert_eq!(added.name(), "Page 3");
        assert_eq!(added.category(), PageCategory::Document);
        assert!(added.is_active());
        assert_eq!(next.active_page_id(), added.id());
        assert_eq!(active_count(&next), 1);
    }

    #[test]
    fn test_add_page_clamps_before_ending() {
        let seed = PageCollection::seed();
        let next = seed.apply(Command::AddPage { after_index: 3 });
        assert_eq!(next.len(), 5);
        assert_eq!(next.get(3).unwrap().name(), "Page 3");
        assert_eq!(next.get(4).unwrap().name(), "Ending");

        let next = seed.apply(Command::AddPage { after_index: 100 });
        assert_eq!(next.get(4).unwrap().name(), "Ending");
    }

    #[test]
    fn test_add_page_between_bare_sentinels() {
        let seed = PageCollection::seed();
        let bare = seed.apply(Command::Delete(id(2))).apply(Command::Delete(id(3)));
        assert_eq!(names(&bare), vec!["Info", "Ending"]);

        let next = bare.apply(Command::AddPage { after_index: 5 });
        assert_eq!(names(&next), vec!["Info", "Page 1", "Ending"]);
        assert!(next.get(1).unwrap().is_active());
    }

    #[test]
    fn test_add_page_ids_are_fresh() {
        let seed = PageCollection::seed();
        let a = seed.apply(Command::AddPage { after_index: 0 });
        let b = a.apply(Command::AddPage { after_index: 0 });
        assert_ne!(a.get(1).unwrap().id(), b.get(1).unwrap().id());
        assert!(b.is_consistent());
    }

    #[test]
    fn test_reorder_moves_page() {
        let seed = PageCollection::seed();
        let next = seed.apply(Command::Reorder { from: 1, to: 2 });
        assert_eq!(names(&next), vec!["Info", "Other", "Details", "Ending"]);
        assert_eq!(next.active_page_id(), seed.active_page_id());
    }

    #[test]
    fn test_reorder_keeps_active_flag() {
        let seed = PageCollection::seed().apply(Command::SetActive(id(2)));
        let next = seed.apply(Command::Reorder { from: 1, to: 2 });
        assert_eq!(next.active_page_id(), id(2));
        assert!(next.get(2).unwrap().is_active());
    }

    #[test]
    fn test_reorder_fixed_positions_is_noop() {
        let seed = PageCollection::seed();
        let last = seed.len() - 1;
        for k in 0..seed.len() {
            assert_eq!(seed.apply(Command::Reorder { from: 0, to: k }), seed);
            assert_eq!(seed.apply(Command::Reorder { from: k, to: 0 }), seed);
            assert_eq!(seed.apply(Command::Reorder { from: last, to: k }), seed);
            assert_eq!(seed.apply(Command::Reorder { from: k, to: last }), seed);
        }
        assert_eq!(seed.apply(Command::Reorder { from: 1, to: 40 }), seed);
    }

    #[test]
    fn test_duplicate() {
        let seed = PageCollection::seed();
        let next = seed.apply(Command::Duplicate(id(2)));
        assert_eq!(next.len(), 5);
        let copy = next.get(2).unwrap();
        assert_eq!(copy.name(), "Details Copy");
        assert_eq!(copy.category(), PageCategory::Document);
        assert_ne!(copy.id(), id(2));
        assert!(copy.is_active());
        assert!(!next.find(id(2)).unwrap().is_active());
        assert_eq!(active_count(&next), 1);
    }

    #[test]
    fn test_duplicate_lands_before_ending() {
        let seed = PageCollection::seed();
        let next = seed.apply(Command::Duplicate(id(3)));
        assert_eq!(
            names(&next),
            vec!["Info", "Details", "Other", "Other Copy", "Ending"]
        );
    }

    #[test]
    fn test_duplicate_fixed_or_unknown_is_noop() {
        let seed = PageCollection::seed();
        assert_eq!(seed.apply(Command::Duplicate(id(1))), seed);
        assert_eq!(seed.apply(Command::Duplicate(id(4))), seed);
        assert_eq!(seed.apply(Command::Duplicate(id(77))), seed);
    }

    #[test]
    fn test_delete_inactive_page() {
        let seed = PageCollection::seed();
        let next = seed.apply(Command::Delete(id(2)));
        assert_eq!(names(&next), vec!["Info", "Other", "Ending"]);
        assert_eq!(next.active_page_id(), id(1));
        assert!(next.get(0).unwrap().is_active());
    }

    #[test]
    fn test_delete_active_page_activates_predecessor() {
        let seed = PageCollection::seed();
        let next = seed
            .apply(Command::SetActive(id(3)))
            .apply(Command::Delete(id(3)));
        assert_eq!(names(&next), vec!["Info", "Details", "Ending"]);
        assert_eq!(next.active_page_id(), id(2));
        assert!(next.find(id(2)).unwrap().is_active());
        assert_eq!(active_count(&next), 1);
    }

    #[test]
    fn test_delete_first_regular_page_activates_info() {
        let seed = PageCollection::seed().apply(Command::SetActive(id(2)));
        let next = seed.apply(Command::Delete(id(2)));
        assert_eq!(next.active_page_id(), id(1));
    }

    #[test]
    fn test_delete_fixed_or_unknown_is_noop() {
        let seed = PageCollection::seed();
        assert_eq!(seed.apply(Command::Delete(id(1))), seed);
        assert_eq!(seed.apply(Command::Delete(id(4))), seed);
        assert_eq!(seed.apply(Command::Delete(id(12))), seed);
    }

    #[test]
    fn test_set_as_first() {
        let seed = PageCollection::seed();
        let next = seed.apply(Command::SetAsFirst(id(3)));
        assert_eq!(names(&next), vec!["Info", "Other", "Details", "Ending"]);
        assert_eq!(next.active_page_id(), seed.active_page_id());
    }

    #[test]
    fn test_set_as_first_noops() {
        let seed = PageCollection::seed();
        assert_eq!(seed.apply(Command::SetAsFirst(id(1))), seed);
        assert_eq!(seed.apply(Command::SetAsFirst(id(2))), seed);
        assert_eq!(seed.apply(Command::SetAsFirst(id(4))), seed);
        assert_eq!(seed.apply(Command::SetAsFirst(id(8))), seed);
    }

    #[test]
    fn test_rename() {
        let seed = PageCollection::seed();
        let next = seed.apply(Command::Rename {
            id: id(4),
            name: "Thanks".to_string(),
        });
        assert_eq!(next.find(id(4)).unwrap().name(), "Thanks");
        assert!(next.find(id(4)).unwrap().is_fixed());

        let unknown = seed.apply(Command::Rename {
            id: id(9),
            name: "Nope".to_string(),
        });
        assert_eq!(unknown, seed);
    }

    #[test]
    fn test_generated_names_do_not_repeat_after_delete() {
        let collection = PageCollection::seed()
            .apply(Command::AddPage { after_index: 2 })
            .apply(Command::Delete(id(2)));
        let next = collection.apply(Command::AddPage { after_index: 2 });
        let generated: Vec<&str> = names(&next)
            .into_iter()
            .filter(|n| n.starts_with("Page "))
            .collect();
        assert_eq!(generated, vec!["Page 3", "Page 4"]);
    }

    fn random_command(rng: &mut StdRng, collection: &PageCollection) -> Command {
        let len = collection.len();
        // Include ids that were never handed out.
        let pick_id = |rng: &mut StdRng| match rng.gen_range(0..len + 1) {
            i if i < len => collection.get(i).unwrap().id(),
            _ => PageId::new(10_000),
        };
        match rng.gen_range(0..7) {
            0 => Command::SetActive(pick_id(rng)),
            1 => Command::AddPage {
                after_index: rng.gen_range(0..len + 2),
            },
            2 => Command::Reorder {
                from: rng.gen_range(0..len + 1),
                to: rng.gen_range(0..len + 1),
            },
            3 => Command::Duplicate(pick_id(rng)),
            4 => Command::Delete(pick_id(rng)),
            5 => Command::SetAsFirst(pick_id(rng)),
            _ => Command::Rename {
                id: pick_id(rng),
                name: Words(1..4).fake::<Vec<String>>().join(" "),
            },
        }
    }

    #[test]
    fn test_invariants_hold_for_random_sequences() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..50 {
            let mut collection = PageCollection::seed();
            for _ in 0..200 {
                let command = random_command(&mut rng, &collection);
                let before = collection.len();
                let next = collection.apply(command.clone());

                assert!(next.is_consistent(), "after {:?}: {:?}", command, next);
                assert_eq!(active_count(&next), 1);
                assert!(next.get(0).unwrap().is_fixed());
                assert!(next.get(next.len() - 1).unwrap().is_fixed());
                if let Command::AddPage { .. } = command {
                    assert_eq!(next.len(), before + 1);
                    assert!(next.active_page().unwrap().name().starts_with("Page "));
                }
                collection = next;
            }
        }
    }
}
