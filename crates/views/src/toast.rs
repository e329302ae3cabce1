//! Notification toasts.

use sponsorlink_core::notification::{Notification, NOTIFICATION_DISMISS_MS};

use crate::html::{escape, Region};
use crate::ids;

/// Toast container contents; empty when there is nothing to say.
pub fn render_toasts(notification: Option<&Notification>) -> Region {
    let html = notification
        .map(|n| {
            format!(
                r#"<div class="toast {kind}" role="status" data-dismiss-after="{NOTIFICATION_DISMISS_MS}"><div class="toast-title">{title}</div><div class="toast-message">{message}</div></div>"#,
                kind = n.kind.as_str(),
                title = escape(&n.title),
                message = escape(&n.message),
            )
        })
        .unwrap_or_default();

    Region::new(ids::TOAST_CONTAINER, html)
}
