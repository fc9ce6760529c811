use gloo_timers::future::TimeoutFuture;
use log::info;
use thiserror::Error;

use crate::config::{self, SUBMIT_DELAY_MS};
use crate::contact::validation::ConsultationRequest;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode consultation request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Sends a consultation request.
///
/// There is no backend yet: the request is encoded and logged, and the
/// round-trip is simulated with a fixed delay.
pub async fn submit_consultation(request: &ConsultationRequest) -> Result<(), SubmitError> {
    let body = serde_json::to_string(request)?;
    info!("Submitting consultation for {} to {}", request.company, config::get_submit_endpoint());
    info!("Consultation payload: {}", body);
    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
    Ok(())
}
