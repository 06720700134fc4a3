use std::net::SocketAddr;

use todo_api::application::todo_service::TodoServiceImpl;
use todo_api::domain::repository::TodoRepository;
use todo_api::http::routes::todos;
use todo_api::http::routing;
use todo_api::infrastructure::json_file_repo::JsonFileTodoRepository;
use todo_api::infrastructure::request_log::RequestLog;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let todos_file = std::env::var("TODOS_FILE").unwrap_or_else(|_| "todos.json".to_string());
    let log_file = std::env::var("LOG_FILE").unwrap_or_else(|_| "logs.txt".to_string());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let repo = JsonFileTodoRepository::new(&todos_file);
    repo.init().await?;
    let request_log = RequestLog::to_file(&log_file);
    let service = TodoServiceImpl::new(repo);
    let todos_router = todos::router(todos::AppState { service });
    let router = routing::app(todos_router, request_log);

    let addr: SocketAddr = bind_addr.parse()?;
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}
