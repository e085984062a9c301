use anyhow::Context;
use tinytodo_core::{TodoService, TodoStore};
use tinytodo_server::logging;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = logging::init_logging();

    let data_file = std::env::var("TODO_FILE").unwrap_or_else(|_| "todo.json".to_string());
    let store = TodoStore::new(&data_file);
    store
        .initialize()
        .with_context(|| format!("failed to initialize todo file at {data_file}"))?;
    tracing::info!("todo collection at {data_file}");

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");

    tinytodo_server::run(listener, TodoService::new(store)).await?;
    Ok(())
}
