//! Admin dashboard: tab set, summary counts and the sign-in guard.
use leptos::logging::warn;
use std::fmt;

use crate::backend::{Collection, DataClient};
use crate::session::Identity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Gallery,
    Menu,
    Testimonials,
    Blog,
    Inquiries,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Gallery,
        DashboardTab::Menu,
        DashboardTab::Testimonials,
        DashboardTab::Blog,
        DashboardTab::Inquiries,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Gallery => "Gallery",
            DashboardTab::Menu => "Menu",
            DashboardTab::Testimonials => "Testimonials",
            DashboardTab::Blog => "Blog",
            DashboardTab::Inquiries => "Inquiries",
        }
    }

    pub fn collection(self) -> Collection {
        match self {
            DashboardTab::Gallery => Collection::GalleryImages,
            DashboardTab::Menu => Collection::MenuItems,
            DashboardTab::Testimonials => Collection::Testimonials,
            DashboardTab::Blog => Collection::BlogPosts,
            DashboardTab::Inquiries => Collection::ContactInquiries,
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub gallery: u64,
    pub menu: u64,
    pub testimonials: u64,
    pub blog: u64,
    pub inquiries: u64,
}

impl DashboardStats {
    pub fn for_tab(&self, tab: DashboardTab) -> u64 {
        match tab {
            DashboardTab::Gallery => self.gallery,
            DashboardTab::Menu => self.menu,
            DashboardTab::Testimonials => self.testimonials,
            DashboardTab::Blog => self.blog,
            DashboardTab::Inquiries => self.inquiries,
        }
    }
}

/// Counts every collection concurrently. If any count fails, all of them
/// read zero.
pub async fn fetch_stats(client: &DataClient) -> DashboardStats {
    let counts = futures::try_join!(
        client.count(Collection::GalleryImages),
        client.count(Collection::MenuItems),
        client.count(Collection::Testimonials),
        client.count(Collection::BlogPosts),
        client.count(Collection::ContactInquiries),
    );
    match counts {
        Ok((gallery, menu, testimonials, blog, inquiries)) => DashboardStats {
            gallery,
            menu,
            testimonials,
            blog,
            inquiries,
        },
        Err(err) => {
            warn!("[DASHBOARD] Counting records failed: {}", err);
            DashboardStats::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The session store has not finished restoring yet.
    Pending,
    Granted,
    RedirectToLogin,
}

pub fn access(ready: bool, user: Option<&Identity>) -> Access {
    match (ready, user) {
        (false, _) => Access::Pending,
        (true, Some(_)) => Access::Granted,
        (true, None) => Access::RedirectToLogin,
    }
}
