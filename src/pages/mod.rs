pub mod admin_dashboard;
pub mod admin_login;
pub mod blog;
pub mod blog_post;
pub mod gallery;
pub mod home;
pub mod not_found;
