//! The debounced input coordinator for image sources.
//!
//! Wires a text field and a file chooser to the resolver. The text field is
//! always responsive: its value is recorded immediately, and resolution runs
//! only after the quiet period (or at once on blur). Every issued resolution
//! claims a fresh [`RequestToken`]; a completion whose token is no longer
//! current is discarded without touching any state. In-flight probes are
//! never aborted, so this comparison is the whole correctness story.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::constants::{MAX_UPLOAD_BYTES, MIN_SRC_LEN, SOURCE_DEBOUNCE_MS};
use crate::images::{normalize_url, FileHandle, ImageProbe, ResolveError, Resolver};
use crate::notifications::{Notice, NotificationSink};
use crate::types::ImageDescriptor;
use crate::upload::Debounce;

/// Identity of one issued resolution, compared at completion time.
/// Monotonically increasing per coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Outcome of the most recent completed probe relative to the most recent
/// issued input. UI affordance only (error icon, spinner).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub invalid: bool,
    pub loading: Option<RequestToken>,
}

/// Emitted when a source resolves successfully. `target` is whatever the
/// host attached when the input was issued, typically the element or slide
/// the property editor was pointed at.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadEvent<T> {
    Resolved {
        descriptor: ImageDescriptor,
        target: T,
    },
}

/// Tunables for the upload flow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadOptions {
    /// Files at or above this many bytes are rejected before reading
    pub max_file_bytes: u64,
    /// Quiet period for the source text field
    pub debounce: Duration,
    /// Normalized sources shorter than this are ignored
    pub min_src_len: usize,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            max_file_bytes: MAX_UPLOAD_BYTES,
            debounce: Duration::from_millis(SOURCE_DEBOUNCE_MS),
            min_src_len: MIN_SRC_LEN,
        }
    }
}

struct SourceState {
    source_value: String,
    invalid: bool,
    loading: Option<RequestToken>,
    next_token: u64,
}

struct Shared<T> {
    state: Mutex<SourceState>,
    resolver: Resolver,
    events: mpsc::UnboundedSender<UploadEvent<T>>,
    notifier: Arc<dyn NotificationSink>,
}

impl<T> Shared<T> {
    /// Claim a fresh token and make it the current in-flight resolution.
    fn claim_token(&self) -> RequestToken {
        let mut state = self.state.lock();
        state.next_token += 1;
        let token = RequestToken(state.next_token);
        state.loading = Some(token);
        token
    }
}

/// Coordinates the image-source text input and file chooser.
pub struct FileUpload<T> {
    shared: Arc<Shared<T>>,
    debounce: Debounce<(String, T)>,
    opts: UploadOptions,
}

impl<T: Send + 'static> FileUpload<T> {
    /// Build the coordinator and the receiver its resolutions are emitted on.
    /// Must be called within a tokio runtime.
    pub fn new(
        opts: UploadOptions,
        probe: Arc<dyn ImageProbe>,
        notifier: Arc<dyn NotificationSink>,
    ) -> (Self, mpsc::UnboundedReceiver<UploadEvent<T>>) {
        let (events, events_rx) = mpsc::unbounded_channel();
        let shared = Arc::new(Shared {
            state: Mutex::new(SourceState {
                source_value: String::new(),
                invalid: false,
                loading: None,
                next_token: 0,
            }),
            resolver: Resolver::new(probe).with_min_src_len(opts.min_src_len),
            events,
            notifier,
        });
        let debounce = {
            let shared = Arc::clone(&shared);
            Debounce::new(opts.debounce, move |(text, target): (String, T)| {
                issue_url_resolution(Arc::clone(&shared), text, target);
            })
        };
        (
            Self {
                shared,
                debounce,
                opts,
            },
            events_rx,
        )
    }

    /// A keystroke in the source field. Records the text immediately, clears
    /// stale validation flags, and restarts the quiet period.
    pub fn on_input_change(&self, text: &str, target: T) {
        {
            let mut state = self.shared.state.lock();
            state.source_value = text.to_string();
            state.invalid = false;
            state.loading = None;
        }
        self.debounce.call((text.to_string(), target));
    }

    /// The source field lost focus: do not wait out the quiet period.
    pub fn on_input_blur(&self, text: &str, target: T) {
        self.debounce.cancel();
        issue_url_resolution(Arc::clone(&self.shared), text.to_string(), target);
    }

    /// A file was chosen. Bypasses the debounce entirely. The size gate runs
    /// before the resolver is involved at all.
    pub async fn on_file_selected(&self, file: &dyn FileHandle, target: T) {
        let size = file.size_bytes();
        if size >= self.opts.max_file_bytes {
            self.shared.notifier.notify(Notice::error(
                ResolveError::FileTooLarge {
                    size,
                    max: self.opts.max_file_bytes,
                }
                .to_string(),
            ));
            return;
        }

        let token = self.shared.claim_token();
        let result = self
            .shared
            .resolver
            .resolve_file(file, self.opts.max_file_bytes)
            .await;

        let mut state = self.shared.state.lock();
        if state.loading != Some(token) {
            tracing::debug!(?token, "discarding stale file resolution");
            return;
        }
        match result {
            Ok(descriptor) => {
                state.source_value.clear();
                state.invalid = false;
                state.loading = None;
                drop(state);
                // the text field was just cleared; a pending typed-URL
                // resolution would resurrect its stale content
                self.debounce.cancel();
                let _ = self.shared.events.send(UploadEvent::Resolved { descriptor, target });
            }
            Err(err) => {
                state.loading = None;
                drop(state);
                self.shared.notifier.notify(Notice::error(err.to_string()));
            }
        }
    }

    /// Current validation flags for the UI.
    pub fn validation(&self) -> ValidationState {
        let state = self.shared.state.lock();
        ValidationState {
            invalid: state.invalid,
            loading: state.loading,
        }
    }

    /// Current raw text of the source field.
    pub fn source_value(&self) -> String {
        self.shared.state.lock().source_value.clone()
    }
}

/// Kick off one URL resolution. Token claiming happens synchronously here so
/// that issue order equals token order regardless of task scheduling.
fn issue_url_resolution<T: Send + 'static>(shared: Arc<Shared<T>>, raw: String, target: T) {
    // Too short to be a plausible address: reset flags, never probe.
    let normalized = normalize_url(&raw);
    if normalized.chars().count() < shared.resolver.min_src_len() {
        let mut state = shared.state.lock();
        state.invalid = false;
        state.loading = None;
        return;
    }

    let token = shared.claim_token();
    tokio::spawn(async move {
        let result = shared.resolver.resolve_url(&raw).await;

        let mut state = shared.state.lock();
        if state.loading != Some(token) {
            tracing::debug!(?token, src = %normalized, "discarding stale source resolution");
            return;
        }
        match result {
            Ok(descriptor) => {
                state.source_value.clear();
                state.invalid = false;
                state.loading = None;
                drop(state);
                let _ = shared.events.send(UploadEvent::Resolved { descriptor, target });
            }
            Err(ResolveError::InputTooShort) => {
                state.invalid = false;
                state.loading = None;
            }
            Err(_) => {
                // the user may still be typing: flag locally, keep the
                // previous valid image, no notification
                state.invalid = true;
                state.loading = None;
            }
        }
    });
}
