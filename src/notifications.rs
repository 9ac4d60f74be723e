//! Transient user-facing notifications.
//!
//! Toasts carry a message, a variant and a lifetime. The host renders
//! [`ToastManager::toasts`] and calls [`ToastManager::prune_expired`] on
//! its own tick.

use crate::constants::NOTIFICATION_DURATION_SECS;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Global counter for unique toast ids
static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn default_duration(&self) -> Duration {
        Duration::from_secs(NOTIFICATION_DURATION_SECS)
    }

    /// Alert style class used when the toast is rendered as markup
    pub fn alert_class(&self) -> &'static str {
        match self {
            ToastVariant::Success => "alert-success",
            ToastVariant::Info => "alert-info",
            ToastVariant::Warning => "alert-warning",
            ToastVariant::Error => "alert-danger",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Info => "ℹ",
            ToastVariant::Warning => "⚠",
            ToastVariant::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
    pub duration: Duration,
    pub created: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            variant,
            duration: variant.default_duration(),
            created: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= self.duration
    }

    /// Fraction of the lifetime left, 1.0 when fresh
    pub fn remaining_percent(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = self.created.elapsed().as_secs_f32();
        (1.0 - elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Queue of visible toasts, oldest first.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    /// Overrides each variant's default lifetime when set
    duration: Option<Duration>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration: Some(duration),
        }
    }

    /// Show a toast. Returns its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let toast = match self.duration {
            Some(duration) => toast.with_duration(duration),
            None => toast,
        };
        let id = toast.id;
        tracing::debug!(id, variant = ?toast.variant, message = %toast.message, "toast");
        self.toasts.push(toast);
        id
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Drop toasts whose lifetime is over. Returns how many were dropped.
    pub fn prune_expired(&mut self) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        before - self.toasts.len()
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}
