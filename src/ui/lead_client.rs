//! Browser transport for the lead forms
//!
//! Issues `fetch` requests through gloo-net. Each request carries an
//! `AbortSignal`; starting a new request aborts the previous one, and the
//! resulting `AbortError` is reported as `TransportError::Aborted`.

use std::cell::RefCell;

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use web_sys::AbortController;

use crate::core::submission::{HttpReply, LeadTransport, TransportError, is_abort};

/// Fetch-based transport owned by one form
#[derive(Default)]
pub struct FetchTransport {
    in_flight: RefCell<Option<AbortController>>,
}

impl FetchTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the previous request, if any, and register a fresh controller
    fn replace_controller(&self) -> Result<AbortController, TransportError> {
        let controller = AbortController::new()
            .map_err(|e| TransportError::Network(format!("{:?}", e)))?;

        if let Some(previous) = self.in_flight.replace(Some(controller.clone())) {
            previous.abort();
        }

        Ok(controller)
    }
}

impl LeadTransport for FetchTransport {
    fn post_json<'a>(
        &'a self,
        endpoint: &'a str,
        body: String,
    ) -> LocalBoxFuture<'a, Result<HttpReply, TransportError>> {
        Box::pin(async move {
            let controller = self.replace_controller()?;
            let signal = controller.signal();

            let response = Request::post(endpoint)
                .abort_signal(Some(&signal))
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status();
            let status_text = response.status_text();
            // An unreadable body still leaves the status line to report
            let body = response.text().await.unwrap_or_default();

            Ok(HttpReply {
                status,
                status_text,
                body,
            })
        })
    }
}

fn transport_error(err: gloo_net::Error) -> TransportError {
    match err {
        gloo_net::Error::JsError(js) if is_abort(&js.name) => TransportError::Aborted,
        other => TransportError::Network(other.to_string()),
    }
}
