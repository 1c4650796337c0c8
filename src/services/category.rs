//! Category service
//!
//! Explicit management of the category set. Expenses add their category
//! automatically; this service covers the view/add/delete menu.

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List all categories, sorted
    pub fn list(&self) -> TrackerResult<Vec<String>> {
        self.storage.categories.get_all()
    }

    /// Add a category; returns false if it already existed
    pub fn add(&self, name: &str) -> TrackerResult<bool> {
        if name.trim().is_empty() {
            return Err(TrackerError::Validation("Category name cannot be empty".into()));
        }

        let added = self.storage.categories.insert(name)?;
        if added {
            tracing::info!(category = name, "added category");
            self.storage
                .log_create(EntityType::Category, name, None, &name)?;
        }
        Ok(added)
    }

    /// Delete a category; returns false if it was not in the set
    ///
    /// Expenses that use the label are not touched.
    pub fn delete(&self, name: &str) -> TrackerResult<bool> {
        let removed = self.storage.categories.remove(name)?;
        if removed {
            tracing::info!(category = name, "deleted category");
            self.storage
                .log_delete(EntityType::Category, name, None, &name)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::services::expense::{CreateExpenseInput, ExpenseService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_list_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        assert!(service.add("travel").unwrap());
        assert!(!service.add("travel").unwrap());
        assert!(service.add("books").unwrap());
        assert_eq!(service.list().unwrap(), vec!["books", "travel"]);

        assert!(service.delete("travel").unwrap());
        assert!(!service.delete("travel").unwrap());
        assert_eq!(service.list().unwrap(), vec!["books"]);
    }

    #[test]
    fn test_empty_name_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        assert!(service.add("   ").unwrap_err().is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_no_link_to_expenses() {
        let (_temp_dir, storage) = create_test_storage();
        let categories = CategoryService::new(&storage);
        let expenses = ExpenseService::new(&storage);

        expenses
            .add(CreateExpenseInput::new("food", "lunch", 12.5, "2024-03-15"))
            .unwrap();
        categories.delete("food").unwrap();

        assert_eq!(expenses.list().unwrap()[0].category, "food");
        assert!(categories.list().unwrap().is_empty());
    }

    #[test]
    fn test_categories_not_persisted() {
        let (temp_dir, storage) = create_test_storage();
        CategoryService::new(&storage).add("travel").unwrap();

        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();

        assert!(CategoryService::new(&reloaded).list().unwrap().is_empty());
    }
}
