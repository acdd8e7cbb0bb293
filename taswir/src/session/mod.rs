//! The view model around the engine.
//!
//! - [`App`] routes paths to pages
//! - [`ToolSession`] holds one tool view: active output and session log
//! - [`ConnectFlow`] simulates the connection form
//! - [`Toaster`] collects notifications

mod app;
mod connect;
mod log;
mod notification;
mod router;
mod view;


pub use app::{App, Page};
pub use connect::{ConnectFlow, ConnectForm};
pub use log::{LogEntry, SessionLog, SEED_MESSAGES};
pub use notification::{Notification, NotificationVariant, Toaster};
pub use router::{
    gallery_breadcrumbs, tool_breadcrumbs, Breadcrumb, Route, ToolPage, BACK_TO_TOOLS,
};
pub use view::{ToolSession, MSG_GENERATED, MSG_PROCESSING, MSG_VALIDATED};
