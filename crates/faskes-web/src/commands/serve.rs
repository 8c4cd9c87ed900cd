use std::sync::Arc;

use faskes_core::date::SystemClock;
use faskes_core::ProvinceRecord;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::routes::{app_router, AppState};

pub async fn run_serve(config: SiteConfig, records: Vec<ProvinceRecord>) -> Result<(), SiteError> {
    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(Arc::new(config), records, Arc::new(SystemClock));
    let router = app_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("faskes preview listening on http://{}/provinces", bind_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
