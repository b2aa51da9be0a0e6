//! Session context shared by every service talking to the API

use std::sync::Arc;

use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
struct SessionData {
    token: Option<String>,
}

/// Bearer token holder
///
/// Cheap to clone; clones share the same token, so clearing it after a
/// 401 logs out every service built from this session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionData>>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionData { token })),
        }
    }

    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.token.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.token.is_some()
    }

    pub async fn set_token(&self, token: impl Into<String>) {
        self.inner.write().await.token = Some(token.into());
    }

    pub async fn clear(&self) {
        self.inner.write().await.token = None;
    }

    /// `Authorization` header value
    pub(crate) async fn auth_header(&self) -> Option<String> {
        self.token().await.map(|t| format!("Bearer {}", t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_token() {
        let session = Session::default();
        let other = session.clone();
        assert!(!session.is_authenticated().await);

        other.set_token("abc").await;
        assert_eq!(session.auth_header().await.as_deref(), Some("Bearer abc"));

        session.clear().await;
        assert_eq!(other.token().await, None);
    }
}
