//! URLs for static site content that respect the deployment base path.
//!
//! When `PUBLIC_URL` is set at compile time (e.g. `/folio` for a project
//! page), content URLs are prefixed with it. Without it they stay relative to
//! the document, the way the original site referenced `./content/...`.

/// URL for a file shipped next to the app.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches("./").trim_start_matches('/');

    if base.is_empty() {
        format!("./{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
