//! Top-level navigation over the connect form, gallery, and tool pages.

use super::connect::ConnectFlow;
use super::notification::Toaster;
use super::router::{gallery_breadcrumbs, Breadcrumb, Route, ToolPage};
use super::view::ToolSession;
use crate::config::TaswirConfig;
use crate::engine::{ResolutionEngine, Resolver};
use crate::events::{EventSink, EventType, NoOpEventSink, SessionEvent};
use crate::tools::{builtin_registry, ToolCard, ToolRegistry};
use std::sync::Arc;
use tracing::{debug, warn};

/// What a route displays.
#[derive(Debug)]
pub enum Page {
    /// The connect form.
    Connect(ConnectFlow),
    /// The tool gallery.
    Gallery {
        /// Cards in display order.
        cards: Vec<ToolCard>,
        /// Home / Tools.
        breadcrumbs: Vec<Breadcrumb>,
    },
    /// A tool view.
    Tool {
        /// The view handle.
        session: ToolSession,
        /// Home / Tools / tool name.
        breadcrumbs: Vec<Breadcrumb>,
    },
    /// A tool id that is not in the table.
    ToolNotFound {
        /// The requested id.
        id: String,
        /// Link back to the gallery.
        back: Breadcrumb,
    },
    /// A path outside the route table.
    Unknown(String),
}

/// The application: shared config, engine, event sink and toaster.
#[derive(Clone)]
pub struct App {
    config: TaswirConfig,
    registry: &'static ToolRegistry,
    resolver: Arc<dyn Resolver>,
    sink: Arc<dyn EventSink>,
    toaster: Toaster,
}

impl App {
    /// Creates an app with the built-in engine and no event sink.
    #[must_use]
    pub fn new(config: TaswirConfig) -> Self {
        let resolver: Arc<dyn Resolver> = Arc::new(ResolutionEngine::new(&config));
        Self {
            config,
            registry: builtin_registry(),
            resolver,
            sink: Arc::new(NoOpEventSink),
            toaster: Toaster::new(),
        }
    }

    /// Sets the event sink.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replaces the resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// The config.
    #[must_use]
    pub fn config(&self) -> &TaswirConfig {
        &self.config
    }

    /// The shared toaster.
    #[must_use]
    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    /// Opens the page for a path.
    #[must_use]
    pub fn navigate(&self, path: &str) -> Page {
        let route = Route::parse(path);
        debug!(%route, "Navigating");

        match route {
            Route::Connect => Page::Connect(ConnectFlow::new(
                &self.config,
                self.toaster.clone(),
                Arc::clone(&self.sink),
            )),
            Route::Tools => Page::Gallery {
                cards: self.registry.gallery(),
                breadcrumbs: gallery_breadcrumbs(),
            },
            Route::Tool(id) => match ToolPage::resolve(&id, self.registry) {
                ToolPage::Found {
                    definition,
                    breadcrumbs,
                } => Page::Tool {
                    session: ToolSession::new(
                        definition.id,
                        Arc::clone(&self.resolver),
                        Arc::clone(&self.sink),
                        &self.config,
                    )
                    .with_toaster(self.toaster.clone()),
                    breadcrumbs,
                },
                ToolPage::NotFound { id, back } => {
                    warn!(tool_id = %id, "Tool not found");
                    self.sink.try_emit(
                        &SessionEvent::new(EventType::ToolNotFound)
                            .with_data(serde_json::json!({ "id": id })),
                    );
                    Page::ToolNotFound { id, back }
                }
            },
            Route::Unknown(path) => Page::Unknown(path),
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
