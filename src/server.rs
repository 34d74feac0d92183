//! HTTP server initialization and runtime setup.

use crate::application::services::InquiryService;
use crate::config::Config;
use crate::domain::catalog::Catalog;
use crate::domain::deep_link::Destination;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Builds the immutable inquiry service (destination validated here) and the
/// static catalog, then serves the Axum router.
///
/// # Errors
///
/// Returns an error if:
/// - The configured destination number is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let destination = Destination::new(config.whatsapp_number.clone())?;

    let inquiries = Arc::new(InquiryService::new(
        config.messaging_domain.clone(),
        destination,
    ));
    let catalog = Arc::new(Catalog::new());

    let state = AppState::new(inquiries, catalog);

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
