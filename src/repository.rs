//! Storage boundary for finished API drafts.

use crate::catalog::{ApiDraft, Category};
use crate::error::RepositoryError;

/// An API draft together with the id it was stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredApi {
    pub id: u64,
    pub api: ApiDraft,
}

/// Where finished API drafts go.
pub trait ApiRepository {
    /// Validate and store `api`, returning its new id.
    fn save(&mut self, api: ApiDraft) -> Result<u64, RepositoryError>;

    fn get(&self, id: u64) -> Result<StoredApi, RepositoryError>;

    /// All stored APIs in insertion order.
    fn list(&self) -> Vec<StoredApi>;

    /// APIs whose name or provider contains `term` (ignoring case), optionally
    /// restricted to one category.
    fn search(&self, term: &str, category: Option<Category>) -> Vec<StoredApi>;
}

/// Repository holding everything in memory.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    apis: Vec<StoredApi>,
    next_id: u64,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.apis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apis.is_empty()
    }
}

impl ApiRepository for InMemoryRepository {
    fn save(&mut self, api: ApiDraft) -> Result<u64, RepositoryError> {
        api.validate()?;
        self.next_id += 1;
        let id = self.next_id;
        tracing::debug!(id, name = %api.name, endpoints = api.endpoints.len(), "saved api");
        self.apis.push(StoredApi { id, api });
        Ok(id)
    }

    fn get(&self, id: u64) -> Result<StoredApi, RepositoryError> {
        self.apis
            .iter()
            .find(|stored| stored.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound { id })
    }

    fn list(&self) -> Vec<StoredApi> {
        self.apis.clone()
    }

    fn search(&self, term: &str, category: Option<Category>) -> Vec<StoredApi> {
        self.apis
            .iter()
            .filter(|stored| stored.api.matches(term, category))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    fn api(name: &str, provider: &str, category: Category) -> ApiDraft {
        let mut draft = ApiDraft::new(name, provider);
        draft.version = "v1".into();
        draft.base_url = "https://api.example.com".into();
        draft.category = Some(category);
        draft
    }

    fn seeded() -> InMemoryRepository {
        let mut repo = InMemoryRepository::new();
        repo.save(api("User Management API", "TechCorp Solutions", Category::User))
            .unwrap();
        repo.save(api("Payment Gateway API", "PayFlow Systems", Category::Payment))
            .unwrap();
        repo.save(api("Analytics Dashboard API", "DataLabs Analytics", Category::Analytics))
            .unwrap();
        repo
    }

    #[test]
    fn save_assigns_ids() {
        let repo = seeded();
        let ids: Vec<u64> = repo.list().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn save_rejects_incomplete_draft() {
        let mut repo = InMemoryRepository::new();
        let result = repo.save(ApiDraft::new("", "Someone"));
        assert!(matches!(
            result,
            Err(RepositoryError::Invalid(CatalogError::MissingField { field: "name" }))
        ));
        assert!(repo.is_empty());
    }

    #[test]
    fn get_missing_id() {
        let repo = seeded();
        assert_eq!(repo.get(2).unwrap().api.provider, "PayFlow Systems");
        assert!(matches!(repo.get(9), Err(RepositoryError::NotFound { id: 9 })));
    }

    #[test]
    fn search_by_term() {
        let repo = seeded();
        let hits = repo.search("analytics", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);

        let hits = repo.search("api", None);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn search_by_category() {
        let repo = seeded();
        let hits = repo.search("", Some(Category::Payment));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].api.name, "Payment Gateway API");

        assert!(repo.search("techcorp", Some(Category::Payment)).is_empty());
    }
}
