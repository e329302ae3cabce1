//! Page shell shared by every dashboard.

use sponsorlink_core::notification::Notification;

use crate::html::escape;
use crate::icons;
use crate::toast::render_toasts;

/// Top-level pages, used to highlight the active nav link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Club,
    Sponsor,
    Admin,
}

impl Page {
    fn title(self) -> &'static str {
        match self {
            Self::Home => "SponsorLink",
            Self::Club => "Club Dashboard | SponsorLink",
            Self::Sponsor => "Sponsor Dashboard | SponsorLink",
            Self::Admin => "Admin Panel | SponsorLink",
        }
    }
}

const NAV: [(Page, &str, &str); 3] = [
    (Page::Club, "/club", "For Clubs"),
    (Page::Sponsor, "/sponsor", "For Sponsors"),
    (Page::Admin, "/admin", "Admin"),
];

/// Fades toasts out after their `data-dismiss-after` delay.
const TOAST_SCRIPT: &str = r#"<script>
document.querySelectorAll('[data-dismiss-after]').forEach(function (toast) {
  setTimeout(function () {
    toast.style.opacity = '0';
    setTimeout(function () { toast.remove(); }, 300);
  }, Number(toast.dataset.dismissAfter));
});
</script>"#;

/// Re-renders the sponsor list as the search box changes.
pub(crate) const SEARCH_SCRIPT: &str = r#"<script>
(function () {
  var input = document.getElementById('search-input');
  if (!input) return;
  var seq = 0;
  input.addEventListener('input', function () {
    var mine = ++seq;
    fetch('/sponsor/regions?search=' + encodeURIComponent(input.value))
      .then(function (res) { return res.json(); })
      .then(function (body) {
        if (mine !== seq) return;
        body.data.forEach(function (region) {
          var el = document.getElementById(region.target);
          if (el) el.innerHTML = region.html;
        });
        history.replaceState(null, '', input.value ? '/sponsor?search=' + encodeURIComponent(input.value) : '/sponsor');
      });
  });
})();
</script>"#;

/// Wrap `body` in the document shell with the nav bar and toast container.
pub fn render_page(page: Page, body: &str, notification: Option<&Notification>, scripts: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(target, path, label)| {
            let active = if *target == page { " active" } else { "" };
            format!(r#"<a class="nav-link{active}" href="{path}">{label}</a>"#)
        })
        .collect();

    let toasts = render_toasts(notification).mount("div", "toast-container");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<header class="header"><div class="container header-content"><a class="logo" href="/"><span class="logo-icon">{zap}</span><span class="logo-text">SponsorLink</span></a><nav class="nav">{nav}</nav></div></header>
<main class="container">
{body}</main>
{toasts}
{TOAST_SCRIPT}
{scripts}
</body>
</html>
"#,
        title = escape(page.title()),
        zap = icons::ZAP,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_active_nav_link() {
        let html = render_page(Page::Sponsor, "", None, "");

        assert!(html.contains(r#"<a class="nav-link active" href="/sponsor">"#));
        assert!(html.contains(r#"<a class="nav-link" href="/club">"#));
        assert!(html.contains("<title>Sponsor Dashboard | SponsorLink</title>"));
    }

    #[test]
    fn mounts_toast_container() {
        let n = Notification::success("Event Created!", "Your event has been submitted for approval.");
        let html = render_page(Page::Club, "", Some(&n), "");

        assert!(html.contains(r#"<div id="toast-container" class="toast-container">"#));
        assert!(html.contains("Event Created!"));
    }
}
