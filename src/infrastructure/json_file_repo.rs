use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    collection,
    repository::TodoRepository,
    todo::{CreateTodo, Todo, TodoId, UpdateTodo},
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("todo store not found at {}", path.display())]
    NotFound { path: PathBuf },
    #[error("todo store at {} is not valid JSON: {source}", path.display())]
    Malformed { path: PathBuf, source: serde_json::Error },
    #[error("todo store i/o failed at {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("todo collection could not be serialized: {0}")]
    Encode(serde_json::Error),
}

// Whole-file accessor for the backing store. Each load/save pair is the unit
// of consistency for one request; nothing is cached in between.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }

    // A missing file is NotFound and unparsable content is Malformed; neither
    // falls back to an empty collection. A zero-byte file is empty.
    pub async fn load(&self) -> Result<Vec<Todo>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound { path: self.path.clone() });
            }
            Err(source) => return Err(StoreError::Io { path: self.path.clone(), source }),
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&contents)
            .map_err(|source| StoreError::Malformed { path: self.path.clone(), source })
    }

    // Whole-file rewrite, no partial-write recovery.
    pub async fn save(&self, todos: &[Todo]) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(todos).map_err(StoreError::Encode)?;
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })
    }

    // First run: create parent directories and an empty store when the file
    // is absent. Existing content is left untouched.
    pub async fn init(&self) -> Result<(), StoreError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;
        if exists {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;
            }
        }
        tracing::info!(path = %self.path.display(), "initializing empty todo store");
        self.save(&[]).await
    }
}

// File-backed repository: every operation is an independent load, pure
// collection op, save round, exactly one per request.
#[derive(Clone)]
pub struct JsonFileTodoRepository {
    store: JsonStore,
}

impl JsonFileTodoRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { store: JsonStore::new(path) }
    }
}

#[async_trait]
impl TodoRepository for JsonFileTodoRepository {
    async fn init(&self) -> Result<()> {
        Ok(self.store.init().await?)
    }

    async fn list(&self, completed: Option<bool>) -> Result<Vec<Todo>> {
        let todos = self.store.load().await?;
        Ok(collection::filtered(&todos, completed))
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>> {
        let todos = self.store.load().await?;
        Ok(collection::find(&todos, id).cloned())
    }

    async fn create(&self, input: CreateTodo) -> Result<Todo> {
        let mut todos = self.store.load().await?;
        let todo = collection::insert(&mut todos, input)?;
        self.store.save(&todos).await?;
        Ok(todo)
    }

    async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Option<Todo>> {
        let mut todos = self.store.load().await?;
        match collection::apply_patch(&mut todos, id, patch) {
            Some(todo) => {
                self.store.save(&todos).await?;
                Ok(Some(todo))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: TodoId) -> Result<Option<Todo>> {
        let mut todos = self.store.load().await?;
        match collection::remove(&mut todos, id) {
            Some(todo) => {
                self.store.save(&todos).await?;
                Ok(Some(todo))
            }
            None => Ok(None),
        }
    }
}
