use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MonitoringResponse {
    pub url: String,
}
