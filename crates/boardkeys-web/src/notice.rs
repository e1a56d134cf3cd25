//! Toast renderer for [`Notice`]s.
//!
//! At most one toast is attached at a time: any element carrying the notice
//! class is removed before the new one is inserted. Each toast removes itself
//! after its duration.

use std::time::Duration;

use boardkeys_core::{Notice, NoticeKind};
use gloo::timers::callback::Timeout;
use web_sys::Document;

use crate::WebError;

const INFO_BACKGROUND: &str = "#4CAF50";
const ERROR_BACKGROUND: &str = "#ff4444";

/// Inline style for a toast of `kind`.
pub fn style(kind: NoticeKind) -> String {
    let background = match kind {
        NoticeKind::Info => INFO_BACKGROUND,
        NoticeKind::Error => ERROR_BACKGROUND,
    };
    format!(
        "position: fixed; bottom: 20px; right: 20px; padding: 12px 24px; \
         background: {background}; color: white; border-radius: 5px; z-index: 9999; \
         box-shadow: 0 4px 12px rgba(0,0,0,0.15); font-size: 14px;"
    )
}

/// Replace the visible toast with `notice`.
///
/// # Errors
///
/// Returns an error if the document has no body or a DOM call throws.
pub fn show(document: &Document, class: &str, notice: &Notice, duration: Duration) -> Result<(), WebError> {
    let selector = format!(".{class}");
    while let Some(existing) = document.query_selector(&selector)? {
        existing.remove();
    }

    let toast = document.create_element("div")?;
    toast.set_class_name(class);
    toast.set_attribute("style", &style(notice.kind))?;
    toast.set_text_content(Some(&notice.text));
    document.body().ok_or(WebError::NoBody)?.append_child(&toast)?;

    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, move || toast.remove()).forget();
    Ok(())
}
