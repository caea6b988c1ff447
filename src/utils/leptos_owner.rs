use leptos::logging::log;
use leptos::*;
use std::future::Future;

/// Stores an async result in a signal unless the view owning the signal has
/// been disposed meanwhile, in which case the value is dropped.
/// Returns whether the value was stored.
pub fn commit<T: 'static>(log_context: &str, signal: RwSignal<T>, value: T) -> bool {
    match signal.try_set(value) {
        None => true,
        Some(_) => {
            log!("[OWNER] View disposed, dropping result: {}", log_context);
            false
        }
    }
}

/// Like [`commit`], but edits the current value in place instead of
/// replacing it.
pub fn apply<T: 'static>(log_context: &str, signal: RwSignal<T>, edit: impl FnOnce(&mut T)) -> bool {
    match signal.try_update(edit) {
        Some(()) => true,
        None => {
            log!("[OWNER] View disposed, dropping result: {}", log_context);
            false
        }
    }
}

/// Runs `load` on the browser event loop and commits its output to `signal`.
pub fn load_into<T, F>(log_context: &'static str, signal: RwSignal<T>, load: F)
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    spawn_local(async move {
        let value = load.await;
        commit(log_context, signal, value);
    });
}
