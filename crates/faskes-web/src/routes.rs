use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Json, Router};
use faskes_core::date::Clock;
use faskes_core::{build_province_list, ProvinceListItem, ProvinceRecord};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::error::AppError;
use crate::pages::{
    render_province_page, render_provinces_page, ProvinceDetailPageProps, ProvincesPageProps,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    records: Arc<Vec<ProvinceRecord>>,
    provinces_list: Arc<Vec<ProvinceListItem>>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Arc<SiteConfig>, records: Vec<ProvinceRecord>, clock: Arc<dyn Clock>) -> Self {
        let provinces_list = build_province_list(&records);
        Self {
            config,
            records: Arc::new(records),
            provinces_list: Arc::new(provinces_list),
            clock,
        }
    }

    fn find_province(&self, slug: &str) -> Option<&ProvinceRecord> {
        self.records.iter().find(|record| record.slug == slug)
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/provinces", get(provinces_page))
        .route("/provinces/{slug}", get(province_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    provinces: usize,
}

async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        provinces: state.records.len(),
    })
}

async fn index() -> Redirect {
    Redirect::permanent("/provinces")
}

#[derive(Debug, Default, Deserialize)]
struct ProvincesQuery {
    #[serde(default)]
    q: String,
}

async fn provinces_page(
    State(state): State<AppState>,
    Query(query): Query<ProvincesQuery>,
) -> Html<String> {
    tracing::debug!(query_len = query.q.len(), "Rendering provinces page");
    Html(render_provinces_page(ProvincesPageProps {
        provinces_list: state.provinces_list.as_ref().clone(),
        today: state.clock.today(),
        initial_query: query.q,
        site_title: state.config.site_title.clone(),
    }))
}

async fn province_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let province = state
        .find_province(&slug)
        .ok_or_else(|| AppError::not_found(format!("province `{slug}`")))?;
    tracing::debug!(slug = %province.slug, "Rendering province page");
    Ok(Html(render_province_page(ProvinceDetailPageProps {
        province: province.clone(),
        today: state.clock.today(),
        site_title: state.config.site_title.clone(),
    })))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use chrono::NaiveDate;
    use faskes_core::date::FixedClock;
    use faskes_core::provinces::parse_provinces;

    use super::*;

    fn state() -> AppState {
        let records = parse_provinces(
            r#"[
                { "name": "Aceh", "slug": "aceh", "data": [{ "nama": "RSUD Zainoel Abidin" }] },
                { "name": "Bali", "slug": "bali", "data": [] }
            ]"#,
        )
        .unwrap();
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        AppState::new(Arc::new(config), records, Arc::new(clock))
    }

    #[tokio::test]
    async fn healthz_reports_province_count() {
        let Json(body) = healthz(State(state())).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.provinces, 2);
    }

    #[tokio::test]
    async fn provinces_page_filters_by_query_param() {
        let Html(html) = provinces_page(
            State(state()),
            Query(ProvincesQuery {
                q: "bali".to_string(),
            }),
        )
        .await;

        assert!(html.contains(">Bali</p>"));
        assert!(!html.contains(">Aceh</p>"));
        assert!(html.contains("per 17 Oktober 2026"));
    }

    #[tokio::test]
    async fn province_page_renders_known_slug() {
        let Html(html) = province_page(State(state()), Path("aceh".to_string()))
            .await
            .unwrap();
        assert!(html.contains("RSUD Zainoel Abidin"));
        assert!(html.contains(">1 Entri</p>"));
    }

    #[tokio::test]
    async fn province_page_unknown_slug_is_not_found() {
        let err = province_page(State(state()), Path("atlantis".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
