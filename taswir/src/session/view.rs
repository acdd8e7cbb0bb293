//! The tool view: active tool, active output, and session log.

use super::log::SessionLog;
use super::notification::{Notification, Toaster};
use crate::config::TaswirConfig;
use crate::core::ToolOutput;
use crate::engine::{Resolver, ToolRequest};
use crate::errors::{Result, ToolError};
use crate::events::{EventSink, EventType, SessionEvent};
use crate::render::{copy_to_clipboard, render, Clipboard, RenderedView};
use crate::tools::{builtin_registry, ToolDefinition, ToolId, ToolInvocation};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Log message appended when a form passes validation.
pub const MSG_VALIDATED: &str = "Parameters validated";
/// Log message appended when processing starts.
pub const MSG_PROCESSING: &str = "Processing request...";
/// Log message appended when the output arrives.
pub const MSG_GENERATED: &str = "Output generated";

#[derive(Debug)]
struct ViewState {
    tool: ToolId,
    // Bumped on every tool switch so stale submissions can be recognised.
    generation: u64,
    output: Option<ToolOutput>,
    rendered: Option<RenderedView>,
    log: SessionLog,
}

/// Cloneable handle to one tool view.
///
/// Submissions are not serialized: two in flight both append their log
/// lines, and whichever finishes its delay last leaves its output active.
#[derive(Clone)]
pub struct ToolSession {
    state: Arc<Mutex<ViewState>>,
    resolver: Arc<dyn Resolver>,
    sink: Arc<dyn EventSink>,
    toaster: Toaster,
    submit_delay: Duration,
    max_upload_bytes: usize,
}

impl ToolSession {
    /// Opens a view on `tool` with a seeded log.
    #[must_use]
    pub fn new(
        tool: ToolId,
        resolver: Arc<dyn Resolver>,
        sink: Arc<dyn EventSink>,
        config: &TaswirConfig,
    ) -> Self {
        let session = Self {
            state: Arc::new(Mutex::new(ViewState {
                tool,
                generation: 0,
                output: None,
                rendered: None,
                log: SessionLog::new(config.log_flash()),
            })),
            resolver,
            sink,
            toaster: Toaster::new(),
            submit_delay: config.submit_delay(),
            max_upload_bytes: config.max_upload_bytes,
        };
        session.emit_reset(tool);
        session
    }

    /// Uses a shared toaster.
    #[must_use]
    pub fn with_toaster(mut self, toaster: Toaster) -> Self {
        self.toaster = toaster;
        self
    }

    /// The active tool.
    #[must_use]
    pub fn tool(&self) -> ToolId {
        self.state.lock().tool
    }

    /// The active tool's definition.
    #[must_use]
    pub fn definition(&self) -> Option<&'static ToolDefinition> {
        builtin_registry().definition(self.tool())
    }

    /// The active output, if any.
    #[must_use]
    pub fn output(&self) -> Option<ToolOutput> {
        self.state.lock().output.clone()
    }

    /// The active output's display shape, if any.
    #[must_use]
    pub fn rendered(&self) -> Option<RenderedView> {
        self.state.lock().rendered.clone()
    }

    /// A snapshot of the session log.
    #[must_use]
    pub fn log(&self) -> SessionLog {
        self.state.lock().log.clone()
    }

    /// Log messages in order.
    #[must_use]
    pub fn log_messages(&self) -> Vec<String> {
        self.state
            .lock()
            .log
            .entries()
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    /// Opens or closes the log panel.
    pub fn set_log_expanded(&self, expanded: bool) {
        self.state.lock().log.set_expanded(expanded);
    }

    /// The toaster errors go to.
    #[must_use]
    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    /// Switches the view to another tool: clears the output and reseeds
    /// the log. Submissions still in flight for the old tool are dropped.
    pub fn switch_tool(&self, tool: ToolId) {
        {
            let mut state = self.state.lock();
            state.tool = tool;
            state.generation += 1;
            state.output = None;
            state.rendered = None;
            state.log.reset();
        }
        self.emit_reset(tool);
    }

    /// Submits a form.
    ///
    /// Preconditions are checked first; a failure is shown as a destructive
    /// notification and nothing is logged. Otherwise two log lines are
    /// appended, the submit delay elapses, the engine resolves, and the
    /// output replaces the active one.
    pub async fn submit(&self, invocation: ToolInvocation) -> Result<ToolOutput> {
        let (tool, generation) = {
            let state = self.state.lock();
            (state.tool, state.generation)
        };
        if invocation.tool != tool {
            return Err(ToolError::Mismatch {
                expected: tool.to_string(),
                actual: invocation.tool.to_string(),
            }
            .into());
        }

        let request = match ToolRequest::capture(&invocation, self.max_upload_bytes) {
            Ok(request) => request,
            Err(err) => {
                warn!(tool_id = %tool, error = %err, "Submission rejected");
                self.toaster.show(Notification::from(&err));
                self.sink.try_emit(
                    &SessionEvent::new(EventType::ToolRejected)
                        .with_tool(tool)
                        .with_invocation(invocation.id)
                        .with_data(serde_json::json!({ "error": err.to_string() })),
                );
                return Err(err);
            }
        };

        if let Err(current) = self.log_accepted(generation) {
            debug!(tool_id = %tool, invocation_id = %invocation.id, "View closed before processing");
            return Err(ToolError::Mismatch {
                expected: current.to_string(),
                actual: tool.to_string(),
            }
            .into());
        }
        self.sink
            .emit(
                &SessionEvent::new(EventType::ToolSubmitted)
                    .with_tool(tool)
                    .with_invocation(invocation.id)
                    .with_data(serde_json::Value::Object(invocation.params.clone())),
            )
            .await;
        info!(tool_id = %tool, invocation_id = %invocation.id, "Processing request");

        tokio::time::sleep(self.submit_delay).await;

        let output = self.resolver.resolve(&request)?;
        let view = render(&output);

        {
            let mut state = self.state.lock();
            if state.generation != generation {
                debug!(tool_id = %tool, invocation_id = %invocation.id, "Dropping output for a closed view");
                return Ok(output);
            }
            state.log.append(MSG_GENERATED);
            state.output = Some(output.clone());
            state.rendered = Some(view);
        }
        self.sink
            .emit(
                &SessionEvent::new(EventType::ToolCompleted)
                    .with_tool(tool)
                    .with_invocation(invocation.id)
                    .with_data(serde_json::json!({ "kind": output.kind().to_string() })),
            )
            .await;

        Ok(output)
    }

    /// Copies the active output. Returns false when there is nothing to copy.
    pub fn copy_output(&self, clipboard: &dyn Clipboard) -> Result<bool> {
        let Some(view) = self.rendered() else {
            return Ok(false);
        };
        copy_to_clipboard(&view, clipboard)?;
        Ok(true)
    }

    // Appends the acceptance lines unless the view switched tools since
    // `generation` was read. Returns the current tool in that case.
    fn log_accepted(&self, generation: u64) -> std::result::Result<(), ToolId> {
        let mut state = self.state.lock();
        if state.generation != generation {
            return Err(state.tool);
        }
        state.log.append(MSG_VALIDATED);
        state.log.append(MSG_PROCESSING);
        Ok(())
    }

    fn emit_reset(&self, tool: ToolId) {
        self.sink
            .try_emit(&SessionEvent::new(EventType::SessionReset).with_tool(tool));
    }
}

impl std::fmt::Debug for ToolSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSession")
            .field("state", &self.state)
            .field("submit_delay", &self.submit_delay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ResolutionEngine;
    use crate::events::NoOpEventSink;
    use crate::session::SEED_MESSAGES;

    fn session(tool: ToolId) -> ToolSession {
        ToolSession::new(
            tool,
            Arc::new(ResolutionEngine::seeded(1)),
            Arc::new(NoOpEventSink),
            &TaswirConfig::instant(),
        )
    }

    #[test]
    fn test_stale_generation_logs_nothing() {
        let session = session(ToolId::SentimentAnalysis);
        let generation = session.state.lock().generation;

        session.switch_tool(ToolId::Translation);

        assert_eq!(session.log_accepted(generation), Err(ToolId::Translation));
        assert_eq!(session.log_messages(), SEED_MESSAGES.to_vec());
    }

    #[test]
    fn test_current_generation_logs_acceptance() {
        let session = session(ToolId::SentimentAnalysis);
        let generation = session.state.lock().generation;

        assert!(session.log_accepted(generation).is_ok());
        assert_eq!(
            session.log_messages()[SEED_MESSAGES.len()..].to_vec(),
            vec![MSG_VALIDATED.to_string(), MSG_PROCESSING.to_string()]
        );
    }

    #[tokio::test]
    async fn test_collapsed_log_reopens_on_next_append() {
        let session = session(ToolId::Translation);
        session
            .submit(ToolInvocation::new(ToolId::Translation).with_text("Hello"))
            .await
            .unwrap();
        assert!(session.log().is_expanded());

        session.set_log_expanded(false);
        assert!(!session.log().is_expanded());
        assert_eq!(session.log().len(), SEED_MESSAGES.len() + 3);

        session
            .submit(ToolInvocation::new(ToolId::Translation).with_text("Goodbye"))
            .await
            .unwrap();
        assert!(session.log().is_expanded());
    }
}
