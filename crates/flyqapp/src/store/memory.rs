use super::{FilterChange, FilterStore, SavedFilter};
use crate::error::{FilterError, Result};
use crate::model::Group;
use chrono::Utc;

/// In-memory store for testing logic without filesystem I/O.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    filters: Vec<SavedFilter>,
    session: Option<Group>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.filters.iter().position(|entry| entry.name == name)
    }
}

impl FilterStore for InMemoryStore {
    fn create(&mut self, name: &str, filter: &str, color: &str) -> Result<SavedFilter> {
        if self.position(name).is_some() {
            return Err(FilterError::DuplicateName(name.to_string()));
        }
        let entry = SavedFilter::new(name, filter, color);
        self.filters.push(entry.clone());
        Ok(entry)
    }

    fn get(&self, name: &str) -> Result<SavedFilter> {
        self.position(name)
            .map(|pos| self.filters[pos].clone())
            .ok_or_else(|| FilterError::FilterNotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<SavedFilter>> {
        Ok(self.filters.clone())
    }

    fn update(&mut self, name: &str, change: FilterChange) -> Result<SavedFilter> {
        let position = self
            .position(name)
            .ok_or_else(|| FilterError::FilterNotFound(name.to_string()))?;
        if let Some(new_name) = &change.name {
            if new_name != name && self.position(new_name).is_some() {
                return Err(FilterError::DuplicateName(new_name.clone()));
            }
        }
        let entry = &mut self.filters[position];
        if let Some(new_name) = change.name {
            entry.name = new_name;
        }
        if let Some(filter) = change.filter {
            entry.filter = filter;
        }
        if let Some(color) = change.color {
            entry.color = color;
        }
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let position = self
            .position(name)
            .ok_or_else(|| FilterError::FilterNotFound(name.to_string()))?;
        self.filters.remove(position);
        Ok(())
    }

    fn load_session(&self) -> Result<Option<Group>> {
        Ok(self.session.clone())
    }

    fn save_session(&mut self, root: &Group) -> Result<()> {
        self.session = Some(root.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let mut store = InMemoryStore::new();
        store.create("daily", "{}", "#ff0000").unwrap();
        let entry = store.get("daily").unwrap();
        assert_eq!(entry.filter, "{}");
        assert_eq!(entry.color, "#ff0000");
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut store = InMemoryStore::new();
        store.create("daily", "{}", "#ff0000").unwrap();
        assert!(matches!(
            store.create("daily", "{}", "#00ff00"),
            Err(FilterError::DuplicateName(name)) if name == "daily"
        ));
    }

    #[test]
    fn test_list_preserves_creation_order() {
        let mut store = InMemoryStore::new();
        store.create("b", "{}", "#111111").unwrap();
        store.create("a", "{}", "#222222").unwrap();
        let names: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_update_renames_and_rejects_collisions() {
        let mut store = InMemoryStore::new();
        store.create("daily", "{}", "#111111").unwrap();
        store.create("weekly", "{}", "#222222").unwrap();

        assert!(matches!(
            store.update("daily", FilterChange::rename("weekly")),
            Err(FilterError::DuplicateName(_))
        ));

        let updated = store
            .update("daily", FilterChange::rename("monthly").with_color("#333333"))
            .unwrap();
        assert_eq!(updated.name, "monthly");
        assert_eq!(updated.color, "#333333");
        assert!(store.get("daily").is_err());
    }

    #[test]
    fn test_delete_unknown_fails() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            store.delete("ghost"),
            Err(FilterError::FilterNotFound(_))
        ));
    }

    #[test]
    fn test_session_round_trip() {
        let mut store = InMemoryStore::new();
        assert!(store.load_session().unwrap().is_none());
        let root = Group::default();
        store.save_session(&root).unwrap();
        assert_eq!(store.load_session().unwrap(), Some(root));
    }
}
