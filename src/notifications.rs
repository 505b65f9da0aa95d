//! User-facing notifications.
//!
//! The upload flow reports file errors through the [`NotificationSink`]
//! trait; the crate ships a toast queue implementation plus a logging sink
//! for headless use. Presentation (rendering, animation) belongs to the host.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl NotificationLevel {
    /// How long a toast of this level stays on screen by default.
    pub fn default_duration(&self) -> Duration {
        match self {
            NotificationLevel::Info => Duration::from_secs(3),
            NotificationLevel::Warning => Duration::from_secs(4),
            NotificationLevel::Error => Duration::from_secs(5),
        }
    }
}

/// A notification to surface to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }
}

/// Where the upload flow sends its error notices.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// A single queued toast.
#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            level,
            message: message.into(),
            created_at: Instant::now(),
            duration: level.default_duration(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// FIFO queue of active toasts.
#[derive(Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut toast: Toast) -> u64 {
        self.next_id += 1;
        toast.id = self.next_id;
        let id = toast.id;
        self.toasts.push(toast);
        id
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Drop every toast whose display time has elapsed.
    pub fn prune_expired(&mut self) {
        self.toasts.retain(|toast| !toast.is_expired());
    }
}

/// Clonable handle to a shared toast queue, usable as a [`NotificationSink`].
#[derive(Clone, Default)]
pub struct SharedToasts(Arc<Mutex<ToastManager>>);

impl SharedToasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manager<R>(&self, f: impl FnOnce(&mut ToastManager) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl NotificationSink for SharedToasts {
    fn notify(&self, notice: Notice) {
        let toast = Toast::new(notice.level, notice.message);
        self.0.lock().push(toast);
    }
}

/// Sink that only logs, for headless embedding.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NotificationLevel::Info => tracing::info!("{}", notice.message),
            NotificationLevel::Warning => tracing::warn!("{}", notice.message),
            NotificationLevel::Error => tracing::error!("{}", notice.message),
        }
    }
}
