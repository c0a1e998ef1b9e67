use crate::cli::ServeArgs;
use crate::infra::{build_service, AppState, InMemoryProfileStore};
use crate::routes::with_recommendation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pathway_advisor::config::AppConfig;
use pathway_advisor::error::AppError;
use pathway_advisor::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = match args.profiles.as_deref() {
        Some(path) => InMemoryProfileStore::from_path(path)?,
        None => InMemoryProfileStore::default(),
    };
    info!(students = store.len(), "profile store ready");
    let service = Arc::new(build_service(store, &config.catalog)?);

    let app = with_recommendation_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "pathway advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}
