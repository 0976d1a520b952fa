pub mod api;
pub mod config;
pub mod edgar;
pub mod seeds;

pub(crate) mod tui;

/// Shortcut for required API elements.
pub(crate) mod http {
    pub(crate) use reqwest::Client as HttpClient;
}

/// Format the elapsed time since `time` for trace output.
pub(crate) fn time_elapsed(time: std::time::Instant) -> String {
    format!("time elapsed: {:?}", time.elapsed())
}
