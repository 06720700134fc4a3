use async_trait::async_trait;
use super::todo::{Todo, TodoId, CreateTodo, UpdateTodo};

#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    // First-run hook: bring the backing store into a loadable state.
    async fn init(&self) -> anyhow::Result<()>;
    async fn list(&self, completed: Option<bool>) -> anyhow::Result<Vec<Todo>>;
    async fn get(&self, id: TodoId) -> anyhow::Result<Option<Todo>>;
    async fn create(&self, input: CreateTodo) -> anyhow::Result<Todo>;
    async fn update(&self, id: TodoId, patch: UpdateTodo) -> anyhow::Result<Option<Todo>>;
    // Returns the removed todo so callers can echo it back.
    async fn delete(&self, id: TodoId) -> anyhow::Result<Option<Todo>>;
}
