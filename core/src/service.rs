//! Operations over the todo collection.
//!
//! # Design
//! Every operation is a full read-modify-write cycle against the backing
//! file; nothing is cached between calls. Mutating methods take `&mut self`
//! so that a service shared behind a lock holds exclusive access for the
//! whole cycle, never just for the final write.
//!
//! Payload validation (non-empty titles, required query parameters) is the
//! caller's job; the service applies whatever it is handed.

use crate::error::TodoError;
use crate::store::TodoStore;
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// The todo collection's operations, backed by a [`TodoStore`].
#[derive(Debug)]
pub struct TodoService {
    store: TodoStore,
}

impl TodoService {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Returns every todo in stored order.
    pub fn list_all(&self) -> Result<Vec<Todo>, TodoError> {
        self.store.load()
    }

    /// Appends a new todo and returns it.
    ///
    /// Ids are derived from the collection length, so after a delete an id
    /// can be handed out a second time. Lookups tolerate this by matching
    /// first (update) or every (delete) occurrence.
    pub fn create(&mut self, new: CreateTodo) -> Result<Todo, TodoError> {
        let mut todos = self.store.load()?;
        let todo = Todo {
            id: todos.len() as u64 + 1,
            title: new.title,
            description: new.description,
            completed: new.completed,
            tags: new.tags,
            priority: new.priority,
            due_date: new.due_date,
        };
        todos.push(todo.clone());
        self.store.save(&todos)?;
        Ok(todo)
    }

    /// Applies `patch` to the first todo with a matching id and returns the
    /// result. Fields absent from the patch keep their stored value; a due
    /// date, once set, cannot be cleared through a patch. When the id is
    /// unknown the file is left untouched.
    pub fn update(&mut self, id: u64, patch: UpdateTodo) -> Result<Todo, TodoError> {
        let mut todos = self.store.load()?;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))?;

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(description) = patch.description {
            todo.description = description;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        if let Some(tags) = patch.tags {
            todo.tags = tags;
        }
        if let Some(priority) = patch.priority {
            todo.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            todo.due_date = Some(due_date);
        }

        let updated = todo.clone();
        self.store.save(&todos)?;
        Ok(updated)
    }

    /// Removes every todo with a matching id. An unknown id is not an
    /// error; the collection is simply rewritten unchanged.
    pub fn delete(&mut self, id: u64) -> Result<(), TodoError> {
        let mut todos = self.store.load()?;
        todos.retain(|t| t.id != id);
        self.store.save(&todos)?;
        Ok(())
    }

    /// Case-insensitive substring search over title, description, and tags.
    pub fn search(&self, query: &str) -> Result<Vec<Todo>, TodoError> {
        let needle = query.to_lowercase();
        let todos = self.store.load()?;
        Ok(todos
            .into_iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
                    || t.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn fresh_service() -> (TodoService, TempDir) {
        let dir = tempdir().unwrap();
        let store = TodoStore::new(dir.path().join("todo.json"));
        store.initialize().unwrap();
        (TodoService::new(store), dir)
    }

    fn new_todo(title: &str, description: &str) -> CreateTodo {
        CreateTodo {
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            tags: Vec::new(),
            priority: Priority::Medium,
            due_date: None,
        }
    }

    fn stored(id: u64, title: &str) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: String::new(),
            completed: false,
            tags: Vec::new(),
            priority: Priority::Medium,
            due_date: None,
        }
    }

    #[test]
    fn create_assigns_next_sequential_id() {
        let (mut service, _dir) = fresh_service();

        let first = service.create(new_todo("Buy milk", "2%")).unwrap();
        let second = service.create(new_todo("Laundry", "whites")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn create_after_delete_can_duplicate_an_id() {
        let (mut service, _dir) = fresh_service();
        service.create(new_todo("a", "")).unwrap();
        service.create(new_todo("b", "")).unwrap();

        service.delete(1).unwrap();
        let third = service.create(new_todo("c", "")).unwrap();

        // len is 1 after the delete, so the new todo reuses id 2.
        assert_eq!(third.id, 2);
        let ids: Vec<u64> = service.list_all().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 2]);
    }

    #[test]
    fn list_all_returns_stored_order() {
        let (mut service, _dir) = fresh_service();
        service.create(new_todo("first", "")).unwrap();
        service.create(new_todo("second", "")).unwrap();
        service.create(new_todo("third", "")).unwrap();

        let titles: Vec<String> = service
            .list_all()
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn update_patches_only_present_fields() {
        let (mut service, _dir) = fresh_service();
        service.create(new_todo("Buy milk", "2% from the corner shop")).unwrap();

        let updated = service
            .update(
                1,
                UpdateTodo {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "Buy milk");
        assert_eq!(updated.description, "2% from the corner shop");
        assert_eq!(updated.priority, Priority::Medium);
    }

    #[test]
    fn update_applies_to_first_match_only() {
        let dir = tempdir().unwrap();
        let store = TodoStore::new(dir.path().join("todo.json"));
        store.save(&[stored(2, "first"), stored(2, "second")]).unwrap();
        let mut service = TodoService::new(store);

        service
            .update(
                2,
                UpdateTodo {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        let todos = service.list_all().unwrap();
        assert!(todos[0].completed);
        assert!(!todos[1].completed);
    }

    #[test]
    fn update_unknown_id_leaves_file_untouched() {
        let (mut service, _dir) = fresh_service();
        service.create(new_todo("Buy milk", "2%")).unwrap();
        let before = fs::read_to_string(service.store.path()).unwrap();

        let err = service
            .update(
                9,
                UpdateTodo {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap_err();

        assert!(matches!(err, TodoError::NotFound(9)));
        assert_eq!(fs::read_to_string(service.store.path()).unwrap(), before);
    }

    #[test]
    fn delete_removes_every_match() {
        let dir = tempdir().unwrap();
        let store = TodoStore::new(dir.path().join("todo.json"));
        store
            .save(&[stored(2, "first"), stored(2, "second"), stored(3, "keep")])
            .unwrap();
        let mut service = TodoService::new(store);

        service.delete(2).unwrap();

        let todos = service.list_all().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "keep");
    }

    #[test]
    fn delete_unknown_id_is_success() {
        let (mut service, _dir) = fresh_service();
        service.create(new_todo("Buy milk", "2%")).unwrap();

        service.delete(99).unwrap();

        assert_eq!(service.list_all().unwrap().len(), 1);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let (mut service, _dir) = fresh_service();
        service.create(new_todo("Test the boiler", "annual service")).unwrap();
        service.create(new_todo("Buy milk", "2% from the corner shop")).unwrap();
        service
            .create(CreateTodo {
                tags: vec!["TESTING".to_string(), "home".to_string()],
                ..new_todo("Laundry", "whites")
            })
            .unwrap();

        let titles = |q: &str| -> Vec<String> {
            service
                .search(q)
                .unwrap()
                .into_iter()
                .map(|t| t.title)
                .collect()
        };

        assert_eq!(titles("test"), vec!["Test the boiler", "Laundry"]);
        assert_eq!(titles("TEST"), vec!["Test the boiler", "Laundry"]);
        assert_eq!(titles("corner"), vec!["Buy milk"]);
        assert!(titles("nothing matches this").is_empty());
    }
}
