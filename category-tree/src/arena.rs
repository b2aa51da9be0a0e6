//! Arena store for the canonical category tree
//!
//! Categories are kept in a flat map keyed by id. Each slot holds the
//! category without its nested children, the id of its structural parent
//! and its ordered child ids. Trees and flat lists are derived by traversal.

use std::collections::HashMap;

use shared::models::Category;

#[derive(Debug, Clone)]
struct Slot {
    category: Category,
    parent: Option<i64>,
    children: Vec<i64>,
}

/// Flat, id-keyed view of a category forest
#[derive(Debug, Clone, Default)]
pub struct CategoryArena {
    slots: HashMap<i64, Slot>,
    roots: Vec<i64>,
}

impl CategoryArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an arena from a nested forest, preserving sibling order.
    ///
    /// Ids must be unique across the forest. A repeated id keeps its first
    /// occurrence; the duplicate and its subtree are skipped with a warning.
    pub fn from_forest(forest: &[Category]) -> Self {
        let mut arena = Self::default();
        for root in forest {
            if arena.insert_subtree(root, None) {
                arena.roots.push(root.id);
            }
        }
        arena
    }

    fn insert_subtree(&mut self, node: &Category, parent: Option<i64>) -> bool {
        if self.slots.contains_key(&node.id) {
            tracing::warn!(
                id = node.id,
                name = %node.name,
                "Duplicate category id in tree, skipping subtree"
            );
            return false;
        }

        self.slots.insert(
            node.id,
            Slot {
                category: node.detached(),
                parent,
                children: Vec::new(),
            },
        );

        let mut child_ids = Vec::with_capacity(node.child_nodes().len());
        for child in node.child_nodes() {
            if self.insert_subtree(child, Some(node.id)) {
                child_ids.push(child.id);
            }
        }
        if let Some(slot) = self.slots.get_mut(&node.id) {
            slot.children = child_ids;
        }
        true
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.slots.contains_key(&id)
    }

    /// Category by id, without nested children
    pub fn get(&self, id: i64) -> Option<&Category> {
        self.slots.get(&id).map(|slot| &slot.category)
    }

    /// Ordered root ids
    pub fn roots(&self) -> &[i64] {
        &self.roots
    }

    /// Structural parent of `id` (None for roots and unknown ids)
    pub fn parent_of(&self, id: i64) -> Option<i64> {
        self.slots.get(&id).and_then(|slot| slot.parent)
    }

    /// Ordered child ids of `id`
    pub fn children_of(&self, id: i64) -> &[i64] {
        self.slots
            .get(&id)
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    /// Ancestor ids of `id`, nearest first
    pub fn ancestors(&self, id: i64) -> Vec<i64> {
        let mut out = Vec::new();
        let mut current = self.parent_of(id);
        while let Some(parent) = current {
            out.push(parent);
            current = self.parent_of(parent);
        }
        out
    }

    /// Whether `id` lies strictly below `ancestor`
    pub fn is_descendant_of(&self, id: i64, ancestor: i64) -> bool {
        let mut current = self.parent_of(id);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent_of(parent);
        }
        false
    }

    /// Depth-first pre-order walk over every node, yielding `(level, category)`
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            arena: self,
            stack: self.roots.iter().rev().map(|id| (*id, 0)).collect(),
        }
    }

    /// Rebuild the nested forest shape
    pub fn to_forest(&self) -> Vec<Category> {
        self.roots.iter().filter_map(|id| self.subtree(*id)).collect()
    }

    fn subtree(&self, id: i64) -> Option<Category> {
        let slot = self.slots.get(&id)?;
        let children = slot
            .children
            .iter()
            .filter_map(|child| self.subtree(*child))
            .collect::<Vec<_>>();
        let mut category = slot.category.clone();
        if !children.is_empty() {
            category.children = Some(children);
        }
        Some(category)
    }
}

/// Pre-order iterator over a [`CategoryArena`]
pub struct Preorder<'a> {
    arena: &'a CategoryArena,
    stack: Vec<(i64, usize)>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (usize, &'a Category);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, level)) = self.stack.pop() {
            let Some(slot) = self.arena.slots.get(&id) else {
                continue;
            };
            self.stack
                .extend(slot.children.iter().rev().map(|child| (*child, level + 1)));
            return Some((level, &slot.category));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_forest() -> Vec<Category> {
        vec![
            Category::new(1, "Food", "Everything edible").with_children(vec![
                Category::new(2, "Dairy", "Milk and cheese")
                    .with_parent(1)
                    .with_children(vec![Category::new(4, "Yogurt", "").with_parent(2)]),
                Category::new(3, "Bakery", "Bread").with_parent(1),
            ]),
            Category::new(5, "Drinks", "Beverages"),
        ]
    }

    #[test]
    fn test_from_forest_indexes_every_node() {
        let arena = CategoryArena::from_forest(&sample_forest());
        assert_eq!(arena.len(), 5);
        assert_eq!(arena.roots(), &[1, 5]);
        assert_eq!(arena.children_of(1), &[2, 3]);
        assert_eq!(arena.children_of(2), &[4]);
        assert!(arena.children_of(5).is_empty());
        assert!(arena.get(1).unwrap().children.is_none());
    }

    #[test]
    fn test_parent_back_references() {
        let arena = CategoryArena::from_forest(&sample_forest());
        assert_eq!(arena.parent_of(4), Some(2));
        assert_eq!(arena.parent_of(2), Some(1));
        assert_eq!(arena.parent_of(1), None);
        assert_eq!(arena.ancestors(4), vec![2, 1]);
        assert!(arena.is_descendant_of(4, 1));
        assert!(!arena.is_descendant_of(1, 4));
        assert!(!arena.is_descendant_of(5, 1));
        assert!(!arena.is_descendant_of(1, 1));
    }

    #[test]
    fn test_duplicate_id_keeps_first_occurrence() {
        let forest = vec![
            Category::new(1, "Food", ""),
            Category::new(1, "Food again", "")
                .with_children(vec![Category::new(9, "Orphan", "").with_parent(1)]),
        ];
        let arena = CategoryArena::from_forest(&forest);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.roots(), &[1]);
        assert_eq!(arena.get(1).unwrap().name, "Food");
        assert!(!arena.contains(9));
    }

    #[test]
    fn test_preorder_levels_and_order() {
        let arena = CategoryArena::from_forest(&sample_forest());
        let walk: Vec<(usize, i64)> = arena.preorder().map(|(l, c)| (l, c.id)).collect();
        assert_eq!(walk, vec![(0, 1), (1, 2), (2, 4), (1, 3), (0, 5)]);
    }

    #[test]
    fn test_to_forest_restores_shape() {
        let forest = sample_forest();
        let arena = CategoryArena::from_forest(&forest);
        assert_eq!(arena.to_forest(), forest);
    }

    #[test]
    fn test_empty_arena() {
        let arena = CategoryArena::new();
        assert!(arena.is_empty());
        assert!(arena.get(1).is_none());
        assert!(arena.ancestors(1).is_empty());
        assert_eq!(arena.preorder().count(), 0);
    }
}
