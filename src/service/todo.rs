//! Todo list kept in memory. The store is an owned value handed to `AppState` at startup.

use crate::error::AppError;
use crate::service::validation::{
    Fields, TODO_SUMMARY_INVALID, TODO_SUMMARY_REQUIRED, TODO_TASK_INVALID, TODO_TASK_REQUIRED,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub task: String,
    pub summary: String,
}

#[derive(Clone, Default)]
pub struct TodoStore {
    items: Arc<RwLock<BTreeMap<i64, Todo>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        TodoStore::default()
    }

    /// Store pre-filled with the three sample tasks.
    pub fn seeded() -> Self {
        let items = [
            (1, "Write Hello World Program", "write a program"),
            (2, "Task 2", "write a program 2"),
            (3, "Task 3", "write a program 3"),
        ]
        .into_iter()
        .map(|(id, task, summary)| {
            (
                id,
                Todo {
                    task: task.to_string(),
                    summary: summary.to_string(),
                },
            )
        })
        .collect();
        TodoStore {
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub fn list(&self) -> BTreeMap<i64, Todo> {
        self.items.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn get(&self, id: i64) -> Result<Todo, AppError> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("todo {}", id)))
    }

    /// Both fields are required strings; an id already in use is a conflict.
    pub fn create(&self, id: i64, body: &Fields) -> Result<Todo, AppError> {
        let task = match body.get("task") {
            Some(Value::String(s)) => s.clone(),
            _ => return Err(TODO_TASK_REQUIRED.into()),
        };
        let summary = match body.get("summary") {
            Some(Value::String(s)) => s.clone(),
            _ => return Err(TODO_SUMMARY_REQUIRED.into()),
        };
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        if items.contains_key(&id) {
            return Err(AppError::Conflict(format!("todo {} already exists", id)));
        }
        let todo = Todo { task, summary };
        items.insert(id, todo.clone());
        tracing::info!(todo_id = id, "todo created");
        Ok(todo)
    }

    /// Non-empty `task` / `summary` strings overwrite; empty or missing ones keep the stored text.
    pub fn update(&self, id: i64, body: &Fields) -> Result<Todo, AppError> {
        let task =
            optional_update(body, "task").map_err(|_| AppError::from(TODO_TASK_INVALID))?;
        let summary =
            optional_update(body, "summary").map_err(|_| AppError::from(TODO_SUMMARY_INVALID))?;
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        let todo = items
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("todo {}", id)))?;
        if let Some(task) = task {
            todo.task = task;
        }
        if let Some(summary) = summary {
            todo.summary = summary;
        }
        Ok(todo.clone())
    }

    /// Remove one todo and return what is left.
    pub fn delete(&self, id: i64) -> Result<BTreeMap<i64, Todo>, AppError> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        if items.remove(&id).is_none() {
            return Err(AppError::NotFound(format!("todo {}", id)));
        }
        tracing::info!(todo_id = id, "todo deleted");
        Ok(items.clone())
    }
}

/// Ok(None) when absent, null or empty; Err(()) for non-string values.
fn optional_update(body: &Fields, key: &str) -> Result<Option<String>, ()> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(()),
    }
}
