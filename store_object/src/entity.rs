//! Base entity shape
//!
//! Every persisted model in the platform carries the same bookkeeping
//! fields: a UUID identity, activity and soft-delete flags, and creation
//! and update timestamps. [`BaseFields`] holds them for embedding (with
//! `#[serde(flatten)]`) and [`Entity`] exposes them uniformly to generic
//! code such as repositories and cache key construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Uniform accessors over the base fields of any persisted model.
pub trait Entity: Clone + Send + Sync {
    fn id(&self) -> Uuid;
    fn is_active(&self) -> bool;
    fn is_deleted(&self) -> bool;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

/// The base fields shared by every persisted model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseFields {
    pub id: Uuid,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BaseFields {
    /// Fresh base fields for a newly created record
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            is_active: true,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for BaseFields {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fields_are_active_and_not_deleted() {
        let fields = BaseFields::new();

        assert!(fields.is_active);
        assert!(!fields.is_deleted);
        assert_eq!(fields.created_at, fields.updated_at);
    }

    #[test]
    fn touch_advances_updated_at() {
        let mut fields = BaseFields::new();
        let created = fields.created_at;

        std::thread::sleep(std::time::Duration::from_millis(2));
        fields.touch();

        assert!(fields.updated_at > created);
        assert_eq!(fields.created_at, created);
    }

    #[test]
    fn base_fields_flatten_into_models() {
        #[derive(Debug, Clone, Serialize, Deserialize)]
        struct Resource {
            #[serde(flatten)]
            base: BaseFields,
            name: String,
        }

        let resource = Resource {
            base: BaseFields::new(),
            name: "Conference room".to_string(),
        };

        let json = serde_json::to_value(&resource).unwrap();
        assert!(json.get("id").is_some(), "base fields must flatten");
        assert_eq!(json["name"], "Conference room");
    }
}
