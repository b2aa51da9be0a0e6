//! Category tree view-model
//!
//! Turns the canonical category forest into an indented, searchable,
//! paginated list of rows and mediates structural edits.
//!
//! ```text
//! CategorySource --fetch_tree--> CategoryArena --annotate--> CategoryViewNode tree
//!     --flatten--> visible rows --filter(term)--> rows --paginate--> page
//! ```

pub mod arena;
pub mod error;
pub mod mutation;
pub mod pager;
pub mod source;
pub mod validation;
pub mod view;
pub mod view_model;

pub use arena::CategoryArena;
pub use error::{TreeError, TreeResult};
pub use mutation::{MutationKind, MutationState};
pub use pager::{Page, Pager};
pub use source::{CategorySource, SourceError};
pub use validation::{CategoryInput, CategoryPatch, ValidationError};
pub use view::{CategoryViewNode, annotate, annotate_forest, filter, flatten, toggle_expand};
pub use view_model::CategoryTreeViewModel;
