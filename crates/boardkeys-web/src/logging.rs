//! Tracing subscriber that writes to the browser console.
//!
//! The subscriber is global and can only be installed once per page, so the
//! level filter sits behind a reload handle: a later `startWithConfig` with a
//! different `log_level` swaps the filter instead of being dropped.

use std::cell::RefCell;

use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};
use tracing_web::MakeWebConsoleWriter;

thread_local! {
    static FILTER: RefCell<Option<reload::Handle<EnvFilter, Registry>>> = const { RefCell::new(None) };
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the console subscriber, or apply `level` to the one already
/// installed.
///
/// An unparsable `level` falls back to `info`.
pub fn init(level: &str) {
    let reloaded = FILTER.with(|handle| {
        handle.borrow().as_ref().map(|handle| handle.reload(filter(level)))
    });
    match reloaded {
        Some(Ok(())) => {
            tracing::debug!(level, "log level updated");
            return;
        },
        Some(Err(e)) => {
            tracing::warn!(level, error = %e, "failed to update log level");
            return;
        },
        None => {},
    }

    let (filter, handle) = reload::Layer::new(filter(level));
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(MakeWebConsoleWriter::new());

    match tracing_subscriber::registry().with(filter).with(console).try_init() {
        Ok(()) => FILTER.with(|slot| *slot.borrow_mut() = Some(handle)),
        Err(e) => tracing::warn!(level, error = %e, "another tracing subscriber is installed"),
    }
}
