//! Toast Context
//!
//! Transient notifications provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

/// One error notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// Notification queue signals
#[derive(Clone, Copy)]
pub struct ToastContext {
    /// Visible toasts, oldest first - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Visible toasts - write
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
    /// How long a toast stays before it is dismissed automatically
    duration_ms: u32,
}

impl ToastContext {
    pub fn new(duration_ms: u32) -> Self {
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        Self {
            toasts,
            set_toasts,
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    /// Show an error toast and schedule its removal
    pub fn error(&self, message: impl Into<String>) {
        let id = self.allocate_id();
        self.set_toasts.update(|list| {
            list.push(Toast { id, message: message.into() })
        });

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(ctx.duration_ms).await;
            ctx.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn allocate_id(&self) -> u32 {
        self.next_id.update_value(|n| *n += 1);
        self.next_id.get_value()
    }
}

/// Get the toast context
pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let ctx = ToastContext::new(1_000);
        ctx.set_toasts.set(vec![
            Toast { id: 1, message: "first".into() },
            Toast { id: 2, message: "second".into() },
        ]);

        ctx.dismiss(1);

        let remaining = ctx.toasts.get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[test]
    fn test_use_toasts_reads_provided_context() {
        let owner = Owner::new();
        owner.with(|| {
            let provided = ToastContext::new(2_500);
            provide_context(provided);

            let ctx = use_toasts();
            assert_eq!(ctx.duration_ms, 2_500);
            assert!(ctx.toasts.get_untracked().is_empty());
        });
    }

    #[test]
    fn test_ids_are_unique() {
        let ctx = ToastContext::new(1_000);
        let a = ctx.allocate_id();
        let b = ctx.allocate_id();
        assert_ne!(a, b);
    }
}
