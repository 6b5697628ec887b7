//! HTTP delivery of the contact form.
//!
//! Client-side (csr): a JSON `POST` via `gloo-net`, raced against a
//! `gloo-timers` timeout.
//! Native builds: delivery is reported as unavailable.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome maps onto a [`SubmitFailure`] so the form can show its error
//! message and stay usable; nothing here panics.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use behavior::{ContactPayload, Delivery, SubmitFailure};
use futures::future::LocalBoxFuture;

/// Posts contact payloads to a fixed endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpDelivery {
    endpoint: String,
    timeout: Duration,
}

impl HttpDelivery {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self { endpoint: endpoint.into(), timeout }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Map an HTTP status onto a delivery outcome.
///
/// # Errors
///
/// [`SubmitFailure::Rejected`] for anything outside 2xx.
pub fn classify_status(status: u16) -> Result<(), SubmitFailure> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitFailure::Rejected { status })
    }
}

impl Delivery for HttpDelivery {
    fn deliver(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), SubmitFailure>> {
        let endpoint = self.endpoint.clone();
        let timeout = self.timeout;
        Box::pin(post_contact(endpoint, timeout, payload))
    }
}

#[cfg(feature = "csr")]
async fn post_contact(endpoint: String, timeout: Duration, payload: ContactPayload) -> Result<(), SubmitFailure> {
    use futures::future::{Either, select};

    let request = gloo_net::http::Request::post(&endpoint)
        .json(&payload)
        .map_err(|e| SubmitFailure::Fault(e.to_string()))?;
    let send = Box::pin(request.send());
    let timer = gloo_timers::future::TimeoutFuture::new(crate::util::timers::timer_millis(timeout));

    match select(send, timer).await {
        Either::Left((Ok(resp), _)) => {
            log::debug!("contact: {endpoint} answered {}", resp.status());
            classify_status(resp.status())
        }
        Either::Left((Err(e), _)) => Err(SubmitFailure::Network(e.to_string())),
        Either::Right(((), _)) => Err(SubmitFailure::TimedOut(timeout)),
    }
}

#[cfg(not(feature = "csr"))]
#[allow(clippy::unused_async)]
async fn post_contact(endpoint: String, timeout: Duration, payload: ContactPayload) -> Result<(), SubmitFailure> {
    log::debug!("contact: no HTTP client for {endpoint} ({}ms, {} bytes)", timeout.as_millis(), payload.message.len());
    Err(SubmitFailure::Unavailable)
}
