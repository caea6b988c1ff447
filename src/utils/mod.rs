pub mod browser;
pub mod leptos_owner;
pub mod panic_hook;
