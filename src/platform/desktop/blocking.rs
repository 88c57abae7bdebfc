use std::time::Instant;

/// Runs `f` on the UI thread and logs how long it took. File dialogs and
/// workbook parsing go through here.
pub fn run_blocking<F, T>(task: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    let output = f();
    tracing::debug!(
        task,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "blocking task finished"
    );
    output
}
