//! In-app toast notifications.

use std::collections::VecDeque;

/// Ticks a toast stays visible (the event loop ticks every 100ms)
pub const TOAST_TTL_TICKS: u16 = 40;

/// Oldest toasts are dropped beyond this count
pub const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Failure,
}

/// A user-visible message produced by a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Failure,
            message: message.into(),
        }
    }
}

/// Fire-and-forget notification sink
pub trait Notifier {
    fn notify(&mut self, notice: Notice);

    fn notify_success(&mut self, message: impl Into<String>) {
        self.notify(Notice::success(message));
    }

    fn notify_failure(&mut self, message: impl Into<String>) {
        self.notify(Notice::failure(message));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub notice: Notice,
    remaining_ticks: u16,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.toasts.back().map(|t| &t.notice)
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Age every toast by one tick and drop the expired ones
    pub fn tick(&mut self) {
        for toast in self.toasts.iter_mut() {
            toast.remaining_ticks = toast.remaining_ticks.saturating_sub(1);
        }
        self.toasts.retain(|t| t.remaining_ticks > 0);
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!("Notify success: {}", notice.message),
            NoticeLevel::Failure => tracing::warn!("Notify failure: {}", notice.message),
        }
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            notice,
            remaining_ticks: TOAST_TTL_TICKS,
        });
    }
}
