//! Category tree view-model
//!
//! Owns one screen's category state: the canonical tree (as an arena),
//! the expanded ids, the pending "add child" target, the search term and
//! the pager. The render list is derived from those on demand.
//!
//! Edits go through the [`CategorySource`]. After a successful edit the
//! whole tree is fetched again; nothing is patched locally, so ids always
//! come from the source.

use std::collections::HashSet;

use shared::models::{Category, CategoryCreate, CategoryUpdate};

use crate::arena::CategoryArena;
use crate::error::{TreeError, TreeResult};
use crate::mutation::{MutationKind, MutationState, Submission};
use crate::pager::{Page, Pager};
use crate::source::CategorySource;
use crate::validation::{CategoryInput, CategoryPatch, ValidationError};
use crate::view::{self, CategoryViewNode};

pub struct CategoryTreeViewModel<S> {
    source: S,
    arena: CategoryArena,
    loaded: bool,
    expanded: HashSet<i64>,
    selected_parent: Option<i64>,
    search_term: String,
    pager: Pager,
    annotated: Vec<CategoryViewNode>,
    mutation: MutationState,
}

impl<S: CategorySource> CategoryTreeViewModel<S> {
    /// Create an empty view-model; call [`refresh`](Self::refresh) to load it
    pub fn new(source: S) -> Self {
        Self {
            source,
            arena: CategoryArena::new(),
            loaded: false,
            expanded: HashSet::new(),
            selected_parent: None,
            search_term: String::new(),
            pager: Pager::default(),
            annotated: Vec::new(),
            mutation: MutationState::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    // ========== Loading ==========

    /// Fetch the full tree and rebuild.
    ///
    /// On failure the current tree and view state are kept as they were.
    pub async fn refresh(&mut self) -> TreeResult<()> {
        let forest = self.source.fetch_tree().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to fetch category tree");
        })?;
        self.replace_tree(&forest);
        Ok(())
    }

    fn replace_tree(&mut self, forest: &[Category]) {
        self.arena = CategoryArena::from_forest(forest);
        self.loaded = true;

        let arena = &self.arena;
        self.expanded.retain(|id| arena.contains(*id));
        if self.selected_parent.is_some_and(|id| !arena.contains(id)) {
            self.selected_parent = None;
        }

        tracing::debug!(categories = self.arena.len(), "Category tree replaced");
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.annotated = view::annotate(&self.arena, &self.expanded, self.selected_parent);
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    // ========== Queries ==========

    pub fn arena(&self) -> &CategoryArena {
        &self.arena
    }

    /// Annotated tree, including collapsed subtrees
    pub fn annotated(&self) -> &[CategoryViewNode] {
        &self.annotated
    }

    /// Visible rows after expansion and search
    pub fn rows(&self) -> Vec<&CategoryViewNode> {
        view::filter(view::flatten(&self.annotated), &self.search_term)
    }

    /// Current page of [`rows`](Self::rows)
    pub fn page(&self) -> Page<&CategoryViewNode> {
        self.pager.paginate(&self.rows())
    }

    pub fn expanded_ids(&self) -> &HashSet<i64> {
        &self.expanded
    }

    pub fn selected_parent(&self) -> Option<i64> {
        self.selected_parent
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn mutation_state(&self) -> &MutationState {
        &self.mutation
    }

    /// Categories that may become the parent of `id`, in tree order with
    /// their level. Excludes `id` itself and its descendants; `None` lists
    /// every category (new category form).
    pub fn parent_candidates(&self, id: Option<i64>) -> Vec<(usize, &Category)> {
        self.arena
            .preorder()
            .filter(|(_, c)| match id {
                Some(id) => c.id != id && !self.arena.is_descendant_of(c.id, id),
                None => true,
            })
            .collect()
    }

    // ========== View state ==========

    pub fn toggle_expand(&mut self, id: i64) {
        self.expanded = view::toggle_expand(id, &self.expanded);
        self.rebuild();
    }

    pub fn expand(&mut self, id: i64) {
        if self.expanded.insert(id) {
            self.rebuild();
        }
    }

    pub fn collapse(&mut self, id: i64) {
        if self.expanded.remove(&id) {
            self.rebuild();
        }
    }

    pub fn collapse_all(&mut self) {
        if !self.expanded.is_empty() {
            self.expanded.clear();
            self.rebuild();
        }
    }

    /// Set the pending "add child" target; `None` for a new root category
    pub fn select_parent(&mut self, id: Option<i64>) {
        if self.selected_parent != id {
            self.selected_parent = id;
            self.rebuild();
        }
    }

    /// Change the search term; the pager goes back to page 1
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search_term {
            self.search_term = term;
            self.pager.reset();
        }
    }

    pub fn set_page(&mut self, page: u32) {
        self.pager.set_page(page);
    }

    pub fn set_per_page(&mut self, per_page: u32) {
        self.pager.set_per_page(per_page);
    }

    /// Return the mutation state to idle after its outcome was shown
    pub fn acknowledge_mutation(&mut self) {
        self.mutation.acknowledge();
    }

    // ========== Lookups for form dropdowns ==========

    pub async fn root_options(&self) -> TreeResult<Vec<Category>> {
        Ok(self.source.fetch_roots().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to fetch root categories");
        })?)
    }

    pub async fn child_options(&self, parent_id: i64) -> TreeResult<Vec<Category>> {
        Ok(self
            .source
            .fetch_children(parent_id)
            .await
            .inspect_err(|e| {
                tracing::warn!(parent_id, error = %e, "Failed to fetch child categories");
            })?)
    }

    // ========== Edits ==========

    /// Validate and create a category, then reload the tree.
    ///
    /// Without an explicit parent the selected parent is used; the
    /// selection is cleared once the category exists.
    pub async fn request_create(&mut self, input: CategoryInput) -> TreeResult<Category> {
        input.validate()?;

        let payload = CategoryCreate {
            name: input.name,
            description: input.description,
            parent_id: input.parent_id.or(self.selected_parent),
        };

        let submission = Submission::begin(&mut self.mutation, MutationKind::Create)?;
        let result = self.source.create(&payload).await;
        submission.settle(&result);
        let created = result.inspect_err(|e| {
            tracing::warn!(name = %payload.name, error = %e, "Create category failed");
        })?;

        tracing::info!(id = created.id, name = %created.name, "Category created");
        self.selected_parent = None;
        self.refresh().await?;
        Ok(created)
    }

    /// Validate and apply a partial update, then reload the tree
    pub async fn request_update(&mut self, id: i64, patch: CategoryPatch) -> TreeResult<Category> {
        patch.validate()?;
        if let Some(parent_id) = patch.parent_id
            && (parent_id == id || self.arena.is_descendant_of(parent_id, id))
        {
            return Err(ValidationError::InvalidParent { id, parent_id }.into());
        }

        let payload = CategoryUpdate {
            id,
            name: patch.name,
            description: patch.description,
            parent_id: patch.parent_id,
        };

        let submission = Submission::begin(&mut self.mutation, MutationKind::Update(id))?;
        let result = self.source.update(&payload).await;
        submission.settle(&result);
        let updated = result.inspect_err(|e| {
            tracing::warn!(id, error = %e, "Update category failed");
        })?;

        tracing::info!(id, "Category updated");
        self.refresh().await?;
        Ok(updated)
    }

    /// Delete a category, then reload the tree.
    ///
    /// Whether a category with children or products may be deleted is
    /// decided by the source.
    pub async fn request_delete(&mut self, id: i64) -> TreeResult<()> {
        let submission = Submission::begin(&mut self.mutation, MutationKind::Delete(id))?;
        let result = self.source.delete(id).await;
        submission.settle(&result);
        result.inspect_err(|e| {
            tracing::warn!(id, error = %e, "Delete category failed");
        })?;

        tracing::info!(id, "Category deleted");
        self.refresh().await
    }
}

impl<S> std::fmt::Debug for CategoryTreeViewModel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryTreeViewModel")
            .field("categories", &self.arena.len())
            .field("expanded", &self.expanded)
            .field("selected_parent", &self.selected_parent)
            .field("search_term", &self.search_term)
            .field("mutation", &self.mutation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceError;
    use async_trait::async_trait;

    /// Source serving a fixed tree; every edit fails
    struct StaticSource(Vec<Category>);

    #[async_trait]
    impl CategorySource for StaticSource {
        async fn fetch_tree(&self) -> Result<Vec<Category>, SourceError> {
            Ok(self.0.clone())
        }
        async fn fetch_roots(&self) -> Result<Vec<Category>, SourceError> {
            Ok(self.0.iter().map(Category::detached).collect())
        }
        async fn fetch_children(&self, _parent_id: i64) -> Result<Vec<Category>, SourceError> {
            Ok(Vec::new())
        }
        async fn create(&self, _payload: &CategoryCreate) -> Result<Category, SourceError> {
            Err(SourceError::new("read only"))
        }
        async fn update(&self, _payload: &CategoryUpdate) -> Result<Category, SourceError> {
            Err(SourceError::new("read only"))
        }
        async fn delete(&self, _id: i64) -> Result<(), SourceError> {
            Err(SourceError::new("read only"))
        }
    }

    fn tree() -> Vec<Category> {
        vec![
            Category::new(1, "Food", "All food").with_children(vec![
                Category::new(2, "Dairy", "Milk").with_parent(1).with_children(vec![
                    Category::new(3, "Cheese", "Aged").with_parent(2),
                ]),
            ]),
            Category::new(4, "Drinks", "Soda"),
        ]
    }

    fn loaded() -> CategoryTreeViewModel<StaticSource> {
        let mut vm = CategoryTreeViewModel::new(StaticSource(tree()));
        vm.replace_tree(&tree());
        vm
    }

    fn row_ids(vm: &CategoryTreeViewModel<StaticSource>) -> Vec<i64> {
        vm.rows().iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let vm = CategoryTreeViewModel::new(StaticSource(tree()));
        assert!(!vm.is_loaded());
        assert!(vm.rows().is_empty());
        assert_eq!(vm.mutation_state(), &MutationState::Idle);
    }

    #[test]
    fn test_expand_and_collapse_rebuild_rows() {
        let mut vm = loaded();
        assert_eq!(row_ids(&vm), vec![1, 4]);

        vm.toggle_expand(1);
        assert_eq!(row_ids(&vm), vec![1, 2, 4]);

        vm.expand(2);
        assert_eq!(row_ids(&vm), vec![1, 2, 3, 4]);

        vm.collapse(1);
        assert_eq!(row_ids(&vm), vec![1, 4]);
        assert!(vm.expanded_ids().contains(&2));

        vm.collapse_all();
        assert!(vm.expanded_ids().is_empty());
    }

    #[test]
    fn test_select_parent_marks_single_node() {
        let mut vm = loaded();
        vm.expand(1);
        vm.select_parent(Some(2));
        let selected: Vec<i64> = vm.rows().iter().filter(|n| n.is_selected).map(|n| n.id).collect();
        assert_eq!(selected, vec![2]);

        vm.select_parent(None);
        assert!(vm.rows().iter().all(|n| !n.is_selected));
    }

    #[test]
    fn test_search_resets_page() {
        let mut vm = loaded();
        vm.set_per_page(1);
        vm.set_page(2);
        assert_eq!(vm.page().items[0].id, 4);

        vm.set_search_term("food");
        assert_eq!(vm.pager().page(), 1);
        assert_eq!(vm.page().items.len(), 1);
        assert_eq!(vm.page().items[0].id, 1);
    }

    #[test]
    fn test_replace_tree_prunes_stale_state() {
        let mut vm = loaded();
        vm.expand(2);
        vm.expand(4);
        vm.select_parent(Some(3));

        vm.replace_tree(&[Category::new(4, "Drinks", "Soda")]);
        assert_eq!(vm.expanded_ids(), &HashSet::from([4]));
        assert_eq!(vm.selected_parent(), None);
    }

    #[test]
    fn test_parent_candidates_exclude_subtree() {
        let vm = loaded();
        let ids: Vec<i64> = vm.parent_candidates(Some(2)).iter().map(|(_, c)| c.id).collect();
        assert_eq!(ids, vec![1, 4]);

        let all: Vec<(usize, i64)> = vm
            .parent_candidates(None)
            .iter()
            .map(|(level, c)| (*level, c.id))
            .collect();
        assert_eq!(all, vec![(0, 1), (1, 2), (2, 3), (0, 4)]);
    }

    #[tokio::test]
    async fn test_update_rejects_moving_under_descendant() {
        let mut vm = loaded();
        let err = vm
            .request_update(
                1,
                CategoryPatch {
                    parent_id: Some(3),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            TreeError::Validation(ValidationError::InvalidParent { id: 1, parent_id: 3 })
        );

        let err = vm
            .request_update(
                2,
                CategoryPatch {
                    parent_id: Some(2),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(vm.mutation_state(), &MutationState::Idle);
    }
}
