//! In-memory category source for view-model tests

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use category_tree::{CategorySource, SourceError};
use shared::error::ErrorCode;
use shared::models::{Category, CategoryCreate, CategoryUpdate};

#[derive(Default)]
pub struct Calls {
    pub fetch_tree: AtomicUsize,
    pub fetch_roots: AtomicUsize,
    pub fetch_children: AtomicUsize,
    pub create: AtomicUsize,
    pub update: AtomicUsize,
    pub delete: AtomicUsize,
}

impl Calls {
    pub fn mutations(&self) -> usize {
        self.create.load(Ordering::SeqCst)
            + self.update.load(Ordering::SeqCst)
            + self.delete.load(Ordering::SeqCst)
    }
}

/// Behaves like the category service: assigns ids, refuses to delete
/// categories that still have children.
pub struct FakeSource {
    forest: Mutex<Vec<Category>>,
    next_id: AtomicI64,
    pub calls: Calls,
    pub fail_fetch: AtomicBool,
    pub fail_mutations: AtomicBool,
    /// Mutations never answer
    pub stall: AtomicBool,
}

impl FakeSource {
    pub fn new(forest: Vec<Category>) -> Self {
        Self {
            forest: Mutex::new(forest),
            next_id: AtomicI64::new(100),
            calls: Calls::default(),
            fail_fetch: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
            stall: AtomicBool::new(false),
        }
    }

    pub fn snapshot(&self) -> Vec<Category> {
        self.forest.lock().unwrap().clone()
    }

    async fn gate(&self) -> Result<(), SourceError> {
        if self.stall.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(SourceError::with_code(
                ErrorCode::InternalError,
                "Service unavailable",
            ));
        }
        Ok(())
    }
}

/// Food(1) > Dairy(2) > Cheese(3), Food(1) > Bakery(4), Drinks(5)
pub fn sample_tree() -> Vec<Category> {
    vec![
        Category::new(1, "Food", "Everything edible").with_children(vec![
            Category::new(2, "Dairy", "Milk and derivatives")
                .with_parent(1)
                .with_children(vec![
                    Category::new(3, "Cheese", "Aged and fresh cheese").with_parent(2),
                ]),
            Category::new(4, "Bakery", "Bread and pastries").with_parent(1),
        ]),
        Category::new(5, "Drinks", "Soft drinks and juices"),
    ]
}

fn find_mut(nodes: &mut [Category], id: i64) -> Option<&mut Category> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = node.children.as_deref_mut().and_then(|c| find_mut(c, id)) {
            return Some(found);
        }
    }
    None
}

fn take(nodes: &mut Vec<Category>, id: i64) -> Option<Category> {
    if let Some(pos) = nodes.iter().position(|n| n.id == id) {
        return Some(nodes.remove(pos));
    }
    nodes
        .iter_mut()
        .filter_map(|n| n.children.as_mut())
        .find_map(|c| take(c, id))
}

fn insert(forest: &mut Vec<Category>, mut category: Category) -> Result<(), SourceError> {
    match category.parent_id {
        None => forest.push(category),
        Some(parent_id) => {
            let parent = find_mut(forest, parent_id).ok_or_else(|| {
                SourceError::with_code(ErrorCode::CategoryNotFound, "Parent category not found")
            })?;
            category.parent_name = Some(parent.name.clone());
            parent.children.get_or_insert_with(Vec::new).push(category);
        }
    }
    Ok(())
}

#[async_trait]
impl CategorySource for FakeSource {
    async fn fetch_tree(&self) -> Result<Vec<Category>, SourceError> {
        self.calls.fetch_tree.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(SourceError::new("connection refused"));
        }
        Ok(self.snapshot())
    }

    async fn fetch_roots(&self) -> Result<Vec<Category>, SourceError> {
        self.calls.fetch_roots.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot().iter().map(Category::detached).collect())
    }

    async fn fetch_children(&self, parent_id: i64) -> Result<Vec<Category>, SourceError> {
        self.calls.fetch_children.fetch_add(1, Ordering::SeqCst);
        let mut forest = self.forest.lock().unwrap();
        let parent = find_mut(&mut forest, parent_id).ok_or_else(|| {
            SourceError::with_code(ErrorCode::CategoryNotFound, "Category not found")
        })?;
        Ok(parent.child_nodes().iter().map(Category::detached).collect())
    }

    async fn create(&self, payload: &CategoryCreate) -> Result<Category, SourceError> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        self.gate().await?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut category = Category::new(id, payload.name.clone(), payload.description.clone());
        category.parent_id = payload.parent_id;

        let mut forest = self.forest.lock().unwrap();
        insert(&mut forest, category.clone())?;
        Ok(category)
    }

    async fn update(&self, payload: &CategoryUpdate) -> Result<Category, SourceError> {
        self.calls.update.fetch_add(1, Ordering::SeqCst);
        self.gate().await?;

        let mut forest = self.forest.lock().unwrap();
        let mut category = take(&mut forest, payload.id).ok_or_else(|| {
            SourceError::with_code(ErrorCode::CategoryNotFound, "Category not found")
        })?;
        if let Some(name) = &payload.name {
            category.name = name.clone();
        }
        if let Some(description) = &payload.description {
            category.description = description.clone();
        }
        if payload.parent_id.is_some() {
            category.parent_id = payload.parent_id;
        }
        insert(&mut forest, category.clone())?;
        Ok(category.detached())
    }

    async fn delete(&self, id: i64) -> Result<(), SourceError> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        self.gate().await?;

        let mut forest = self.forest.lock().unwrap();
        let category = find_mut(&mut forest, id).ok_or_else(|| {
            SourceError::with_code(ErrorCode::CategoryNotFound, "Category not found")
        })?;
        if !category.child_nodes().is_empty() {
            return Err(SourceError::with_code(
                ErrorCode::CategoryHasChildren,
                "Category has child categories",
            ));
        }
        take(&mut forest, id);
        Ok(())
    }
}
