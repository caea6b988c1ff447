use leptos::logging::log;
use std::panic;

/// Installs `console_error_panic_hook` and, on top of it, a hook that
/// explains panics caused by touching a view after it was unmounted.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A view was used after it was unmounted. Usually one of:");
            log!("[PANIC] - a backend response arrived for a page the visitor already left");
            log!("[PANIC] - a click handler fired while the admin editor was being torn down");
            log!("[PANIC] Results for unmounted views should go through utils::leptos_owner::commit");
        }
    }));
}

/// Call once before mounting the app.
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook installed");
}
