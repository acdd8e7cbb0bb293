//! The connection form.

use super::notification::{Notification, Toaster};
use super::router::Route;
use crate::config::TaswirConfig;
use crate::errors::ValidationError;
use crate::events::{EventSink, EventType, SessionEvent};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Connection form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectForm {
    /// Instance URL.
    pub mcp_url: String,
    /// Auth token.
    pub auth_token: String,
}

impl ConnectForm {
    /// Creates a form.
    #[must_use]
    pub fn new(mcp_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            mcp_url: mcp_url.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Both fields are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mcp_url.trim().is_empty() || self.auth_token.trim().is_empty() {
            return Err(ValidationError::new("Please fill in all fields"));
        }
        Ok(())
    }
}

/// Simulated connect: validate, wait, confirm, wait, redirect.
///
/// Nothing is contacted. Any non-blank URL and token succeed.
#[derive(Clone)]
pub struct ConnectFlow {
    connect_delay: Duration,
    redirect_delay: Duration,
    toaster: Toaster,
    sink: Arc<dyn EventSink>,
}

impl ConnectFlow {
    /// Creates a flow with the config's delays.
    #[must_use]
    pub fn new(config: &TaswirConfig, toaster: Toaster, sink: Arc<dyn EventSink>) -> Self {
        Self {
            connect_delay: config.connect_delay(),
            redirect_delay: config.redirect_delay(),
            toaster,
            sink,
        }
    }

    /// The toaster notifications go to.
    #[must_use]
    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    /// Submits the form. Returns the route to navigate to, or the
    /// validation error after showing it as a destructive notification.
    pub async fn submit(&self, form: &ConnectForm) -> Result<Route, ValidationError> {
        if let Err(err) = form.validate() {
            self.toaster.show(Notification::error(err.message.clone()));
            return Err(err);
        }

        tokio::time::sleep(self.connect_delay).await;
        self.toaster
            .show(Notification::info("Connected successfully", "Redirecting to tools..."));
        info!(url = %form.mcp_url, "Connected");
        self.sink
            .emit(
                &SessionEvent::new(EventType::ConnectSucceeded)
                    .with_data(serde_json::json!({ "url": form.mcp_url })),
            )
            .await;

        tokio::time::sleep(self.redirect_delay).await;
        Ok(Route::Tools)
    }
}

impl std::fmt::Debug for ConnectFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectFlow")
            .field("connect_delay", &self.connect_delay)
            .field("redirect_delay", &self.redirect_delay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CollectingEventSink;

    fn flow(sink: Arc<CollectingEventSink>) -> ConnectFlow {
        ConnectFlow::new(&TaswirConfig::default(), Toaster::new(), sink)
    }

    #[test]
    fn test_validate() {
        assert!(ConnectForm::new("https://mcp.test", "tok").validate().is_ok());
        assert!(ConnectForm::new("", "tok").validate().is_err());
        assert!(ConnectForm::new("https://mcp.test", "   ").validate().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_fields_rejected_without_delay() {
        let flow = flow(Arc::new(CollectingEventSink::new()));
        let start = tokio::time::Instant::now();

        let err = flow.submit(&ConnectForm::default()).await.unwrap_err();

        assert_eq!(err.message, "Please fill in all fields");
        assert_eq!(start.elapsed(), Duration::ZERO);
        let shown = flow.toaster().shown();
        assert_eq!(shown.len(), 1);
        assert!(shown[0].is_destructive());
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_timeline() {
        let sink = Arc::new(CollectingEventSink::new());
        let flow = flow(sink.clone());
        let toaster = flow.toaster().clone();

        let handle = tokio::spawn({
            let flow = flow.clone();
            async move { flow.submit(&ConnectForm::new("https://mcp.test", "secret")).await }
        });

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(toaster.shown().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let latest = toaster.latest().unwrap();
        assert_eq!(latest.title, "Connected successfully");
        assert_eq!(latest.description, "Redirecting to tools...");
        assert!(!handle.is_finished());

        let route = handle.await.unwrap().unwrap();
        assert_eq!(route, Route::Tools);
        assert_eq!(sink.types(), vec![EventType::ConnectSucceeded]);
    }
}
