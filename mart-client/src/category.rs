//! Category API
//!
//! Typed wrapper over the `/categories` endpoints. Implements
//! [`CategorySource`] so the tree view-model can run against the server.

use async_trait::async_trait;
use category_tree::{CategorySource, SourceError};
use serde::de::IgnoredAny;
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use shared::request::SearchRequest;
use shared::response::SearchResponse;

use crate::record::{self, CategoryRecord};
use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient, Session};

#[derive(Debug, Clone)]
pub struct CategoryApi<C = NetworkHttpClient> {
    http: C,
}

impl CategoryApi<NetworkHttpClient> {
    /// Build a network-backed API with a fresh session seeded from `config`
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let session = Session::new(config.token.clone());
        Ok(Self::new(NetworkHttpClient::new(config, session)?))
    }
}

impl<C: HttpClient> CategoryApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn session(&self) -> &Session {
        self.http.session()
    }

    /// `POST /categories/create`
    pub async fn create(&self, payload: &CategoryCreate) -> ClientResult<Category> {
        let record: CategoryRecord = self.http.post("categories/create", payload).await?;
        record.into_category()
    }

    /// `GET /categories/roots`
    pub async fn roots(&self) -> ClientResult<Vec<Category>> {
        let records: Vec<CategoryRecord> = self.http.get("categories/roots").await?;
        record::into_categories(records)
    }

    /// `GET /categories/tree`
    pub async fn tree(&self) -> ClientResult<Vec<Category>> {
        let records: Vec<CategoryRecord> = self.http.get("categories/tree").await?;
        record::into_categories(records)
    }

    /// `GET /categories/{id}/children`
    pub async fn children(&self, parent_id: i64) -> ClientResult<Vec<Category>> {
        let path = format!("categories/{}/children", parent_id);
        let records: Vec<CategoryRecord> = self.http.get(&path).await?;
        record::into_categories(records)
    }

    /// `PUT /categories/update`
    pub async fn update(&self, payload: &CategoryUpdate) -> ClientResult<Category> {
        let record: CategoryRecord = self.http.put("categories/update", payload).await?;
        record.into_category()
    }

    /// `GET /categories/all`, flat list
    pub async fn fetch_all(&self) -> ClientResult<Vec<Category>> {
        let records: Vec<CategoryRecord> = self.http.get("categories/all").await?;
        record::into_categories(records)
    }

    /// `POST /categories/search`
    pub async fn search(&self, request: &SearchRequest) -> ClientResult<SearchResponse<Category>> {
        let response: SearchResponse<CategoryRecord> =
            self.http.post("categories/search", request).await?;
        response.try_map(CategoryRecord::into_category)
    }

    /// `DELETE /categories/{id}`
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let path = format!("categories/{}", id);
        let _: IgnoredAny = self.http.delete(&path).await?;
        Ok(())
    }
}

#[async_trait]
impl<C: HttpClient> CategorySource for CategoryApi<C> {
    async fn fetch_tree(&self) -> Result<Vec<Category>, SourceError> {
        Ok(self.tree().await?)
    }

    async fn fetch_roots(&self) -> Result<Vec<Category>, SourceError> {
        Ok(self.roots().await?)
    }

    async fn fetch_children(&self, parent_id: i64) -> Result<Vec<Category>, SourceError> {
        Ok(self.children(parent_id).await?)
    }

    async fn create(&self, payload: &CategoryCreate) -> Result<Category, SourceError> {
        Ok(CategoryApi::create(self, payload).await?)
    }

    async fn update(&self, payload: &CategoryUpdate) -> Result<Category, SourceError> {
        Ok(CategoryApi::update(self, payload).await?)
    }

    async fn delete(&self, id: i64) -> Result<(), SourceError> {
        Ok(CategoryApi::delete(self, id).await?)
    }
}
