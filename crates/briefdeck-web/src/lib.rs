//! Briefdeck Web Layer
//!
//! Serves the upload page and the analysis API on axum. The interactive
//! surface stays thin: one page, one multipart endpoint, a recent-example
//! listing, and a health check.

#![warn(missing_docs)]

pub mod handlers;

pub use handlers::{create_router, AppState, MAX_UPLOAD_BYTES};

use briefdeck_domain::traits::ChatProvider;
use tokio::net::TcpListener;
use tracing::info;

/// Web server error
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the Briefdeck HTTP server on the given bind address.
///
/// Runs until the process is stopped.
pub async fn start_server<C>(bind_addr: &str, state: AppState<C>) -> Result<(), WebError>
where
    C: ChatProvider + Send + Sync + 'static,
{
    let app = create_router(state);

    let listener = TcpListener::bind(bind_addr).await?;
    info!("Briefdeck listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| WebError::Server(e.to_string()))?;

    Ok(())
}
