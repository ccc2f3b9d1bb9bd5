// Backend endpoint configuration. Overridable at compile time so hosted
// builds can point somewhere other than a local backend.

pub fn get_backend_url() -> &'static str {
    option_env!("TALEWEAVER_API_URL").unwrap_or("http://localhost:5000")
}

pub const DEFAULT_GENERATION_TIMEOUT_MS: u32 = 120_000;

/// Client-side cancellation window for a generation request.
pub fn get_generation_timeout_ms() -> u32 {
    match option_env!("TALEWEAVER_API_TIMEOUT_MS") {
        Some(raw) => raw.parse().unwrap_or(DEFAULT_GENERATION_TIMEOUT_MS),
        None => DEFAULT_GENERATION_TIMEOUT_MS,
    }
}

/// PDF export runs under its own, shorter window.
pub const PDF_EXPORT_TIMEOUT_MS: u32 = 60_000;

/// The startup probe gives up quickly so the dashboard can show a verdict.
pub const HEALTH_PROBE_TIMEOUT_MS: u32 = 5_000;
