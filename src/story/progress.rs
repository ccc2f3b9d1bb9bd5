use gloo_timers::callback::Timeout;

/// Status lines shown while a generation request is pending, with offsets in
/// milliseconds from submission. Purely cosmetic reassurance; the backend
/// reports no real progress and none is claimed.
pub const PROGRESS_STEPS: [(u32, &str); 5] = [
    (1_000, "Generating story text..."),
    (3_000, "Creating magical illustrations..."),
    (8_000, "Adding artistic touches..."),
    (15_000, "Almost ready! Finalizing images..."),
    (25_000, "Just a few more seconds..."),
];

/// Owns one timer per step. Dropping the ticker cancels every step that has
/// not fired yet, so the schedule dies with the request no matter how the
/// request ends.
pub struct ProgressTicker {
    _handles: Vec<Timeout>,
}

impl ProgressTicker {
    pub fn start<F>(notify: F) -> Self
    where
        F: Fn(&'static str) + Clone + 'static,
    {
        let handles = PROGRESS_STEPS
            .iter()
            .map(|&(offset_ms, message)| {
                let notify = notify.clone();
                Timeout::new(offset_ms, move || notify(message))
            })
            .collect();
        ProgressTicker { _handles: handles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_fire_in_ascending_order() {
        let offsets: Vec<u32> = PROGRESS_STEPS.iter().map(|&(ms, _)| ms).collect();
        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        assert_eq!(offsets, sorted);
        assert_eq!(offsets, vec![1_000, 3_000, 8_000, 15_000, 25_000]);
    }
}
