use anyhow::Result;
use tokio::net::TcpListener;
use todo_htmx::{db::Db, repository::TodoRepository, router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::default();
    let db = Db::open(&config.db_path)?;
    let state = AppState::new(TodoRepository::new(&db)?);
    let app = router(state);

    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, db = %config.db_path.display(), "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let flushed = db.flush().await?;
    tracing::info!(flushed, "shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        // never resolve, so the server keeps running
        std::future::pending::<()>().await;
    }
}
