//! # Transient Feedback
//!
//! Toasts, the submission confirmation modal, and the loading overlay.
//! Their auto-dismiss timers run in the browser; the intervals are set here
//! and emitted as `data-*` attributes.

use std::time::Duration;

use serde::Serialize;

use crate::escape::escape_html;
use crate::navigation::Page;

/// How long a toast stays up.
pub const TOAST_TIMEOUT: Duration = Duration::from_millis(3000);
/// How long the confirmation modal stays up before returning home.
pub const MODAL_TIMEOUT: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
        }
    }
}

/// A short message shown in the toast container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Render one toast. The message is escaped.
pub fn render_toast(toast: &Toast) -> String {
    format!(
        r#"<div class="toast {class}" role="status" data-dismiss-after="{timeout}"><i class="fas fa-{icon}"></i><span>{message}</span><button class="toast-close" type="button" aria-label="Dismiss"><i class="fas fa-times"></i></button></div>"#,
        class = toast.kind.css_class(),
        timeout = TOAST_TIMEOUT.as_millis(),
        icon = toast.kind.icon(),
        message = escape_html(&toast.message),
    )
}

/// The toast container, holding `toasts` in order.
pub fn render_toast_container(toasts: &[Toast]) -> String {
    let mut html = String::from(r#"<div class="toast-container" id="toastContainer">"#);
    for toast in toasts {
        html.push_str(&render_toast(toast));
    }
    html.push_str("</div>");
    html
}

/// The submission confirmation modal.
///
/// When `open`, the modal is shown on load and the script sends the browser
/// to the home page after [`MODAL_TIMEOUT`].
pub fn render_success_modal(open: bool) -> String {
    format!(
        r#"<div class="modal{show}" id="successModal" data-dismiss-after="{timeout}" data-return-to="{home}"><div class="modal-content"><div class="modal-icon"><i class="fas fa-check-circle"></i></div><h3>Project Submitted!</h3><p>Your project has been added to the showcase. Redirecting you to the projects page...</p></div></div>"#,
        show = if open { " show" } else { "" },
        timeout = MODAL_TIMEOUT.as_millis(),
        home = Page::Home.path(),
    )
}

/// Page-level spinner, hidden until the script shows it.
pub fn render_loading_overlay() -> String {
    r#"<div class="loading-overlay" id="loadingOverlay"><div class="spinner"><i class="fas fa-spinner fa-spin"></i></div></div>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_message_is_escaped() {
        let html = render_toast(&Toast::error("<img src=x onerror=alert(1)>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("toast error"));
        assert!(html.contains("exclamation-circle"));
    }

    #[test]
    fn toast_carries_dismiss_interval() {
        let html = render_toast(&Toast::success("Vote recorded!"));
        assert!(html.contains(r#"data-dismiss-after="3000""#));
        assert!(html.contains("check-circle"));
        assert!(html.contains("Vote recorded!"));
    }

    #[test]
    fn empty_container_has_no_toasts() {
        let html = render_toast_container(&[]);
        assert!(html.contains("toastContainer"));
        assert!(!html.contains("class=\"toast "));
    }

    #[test]
    fn modal_open_returns_home() {
        let html = render_success_modal(true);
        assert!(html.contains("modal show"));
        assert!(html.contains(r#"data-dismiss-after="2000""#));
        assert!(html.contains(r#"data-return-to="/""#));
        assert!(!render_success_modal(false).contains("modal show"));
    }

    #[test]
    fn loading_overlay_has_spinner() {
        assert!(render_loading_overlay().contains("fa-spinner"));
    }
}
