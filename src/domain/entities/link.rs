//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A persisted association between a short identifier and its original URL.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        short_id: String,
        original_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_id,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_id: String,
    pub original_url: String,
}

impl NewLink {
    pub fn new(short_id: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_id: short_id.into(),
            original_url: original_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "ABCDE".to_string(),
            "www.teste.com/essa-url-e-longa".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.short_id, "ABCDE");
        assert_eq!(link.original_url, "www.teste.com/essa-url-e-longa");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink::new("teste", "www.teste.com");

        assert_eq!(new_link.short_id, "teste");
        assert_eq!(new_link.original_url, "www.teste.com");
    }
}
