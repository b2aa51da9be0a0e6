//! Mart Client - HTTP client for the back-office category API
//!
//! Provides the network [`CategorySource`](category_tree::CategorySource)
//! used by the category tree view-model.

pub mod category;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod record;
pub mod session;

pub use category::CategoryApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use record::CategoryRecord;
pub use session::Session;
