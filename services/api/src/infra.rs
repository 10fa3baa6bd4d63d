use metrics_exporter_prometheus::PrometheusHandle;
use nutri_score::scoring::Category;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_category(raw: &str) -> Result<Category, String> {
    Category::parse(raw).ok_or_else(|| {
        format!("unknown category '{raw}' (expected food, water, cheese or beverage)")
    })
}
