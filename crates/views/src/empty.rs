//! Empty-state block shared by the list views.

use crate::html::escape;

pub(crate) fn empty_state(icon: &str, icon_class: &str, title: &str, text: &str, action: &str) -> String {
    let icon_class = if icon_class.is_empty() {
        "empty-icon".to_string()
    } else {
        format!("empty-icon {icon_class}")
    };
    format!(
        r#"<div class="empty-state"><div class="{icon_class}">{icon}</div><h3 class="empty-title">{title}</h3><p class="empty-text">{text}</p>{action}</div>
"#,
        title = escape(title),
        text = escape(text),
    )
}
