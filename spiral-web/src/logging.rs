/// tracing output routed to the browser console
use tracing::{Level, Subscriber};
use tracing_web::MakeWebConsoleWriter;

/// Install the global subscriber. Later calls are ignored.
pub fn init(level: Level) {
    if tracing::subscriber::set_global_default(subscriber(level)).is_ok() {
        tracing::debug!(%level, "console logging enabled");
    }
}

/// fmt subscriber whose events land on the matching `console` method
fn subscriber(level: Level) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_writer(MakeWebConsoleWriter::new())
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .finish()
}
