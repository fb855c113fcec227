use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;

/// GET /metrics: Prometheus text exposition of request counters and timings.
pub async fn prometheus_metrics(State(handle): State<Arc<PrometheusHandle>>) -> impl IntoResponse {
    handle.render()
}

/// Register descriptions for the metrics recorded by the pantry routes.
pub fn describe_metrics() {
    metrics::describe_counter!(
        "pantry_classify_requests_total",
        "Total inventory classification requests"
    );
    metrics::describe_histogram!(
        "pantry_classify_seconds",
        "Time to classify the catalog against one inventory"
    );
    metrics::describe_counter!(
        "pantry_unlock_requests_total",
        "Total unlock recommendation requests"
    );
    metrics::describe_counter!(
        "pantry_shopping_list_requests_total",
        "Total shopping list requests"
    );
}
