//! String Stats Server - Binary Entry Point

use std::env;
use std::sync::Arc;

use string_stats::api::http::create_router;
use string_stats::api::state::AppState;
use string_stats::store::KvStore;
use string_stats::types::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    let db_path = env::var("STATS_DB_PATH").unwrap_or_else(|_| "stats.db".to_string());
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:1323".to_string());

    // A store that cannot be opened is fatal; runtime write failures are not
    let store = Arc::new(KvStore::open(&db_path)?);
    eprintln!("[Store] Opened {}", store.path().display());

    let state = Arc::new(AppState::new(store));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    eprintln!("[Server] Listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
