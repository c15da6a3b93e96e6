use tokio::task::JoinHandle;

/// Starts file and parser work on the blocking pool; the event loop keeps rendering.
/// Must be called from inside the runtime.
pub fn run_blocking<F, T>(f: F) -> JoinHandle<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
}
