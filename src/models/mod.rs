pub mod blog_post;
pub mod contact_inquiry;
pub mod gallery_image;
pub mod menu_item;
pub mod testimonial;

pub use blog_post::{BlogPost, BlogPostDraft};
pub use contact_inquiry::{ContactInquiry, NewInquiry};
pub use gallery_image::{GalleryCategory, GalleryImage, GalleryImageDraft};
pub use menu_item::{MenuCategory, MenuItem, MenuItemDraft};
pub use testimonial::{Testimonial, TestimonialDraft};

/// A closed set of tags a record can be filed under.
pub trait Category: Copy + Eq + 'static {
    const ALL: &'static [Self];
    /// Wire and display form.
    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// Labels of every category, in declaration order. Feeds select inputs.
pub fn labels<C: Category>() -> Vec<&'static str> {
    C::ALL.iter().map(|c| c.label()).collect()
}

/// Records that carry a category used for client-side filtering.
pub trait Categorized {
    type Category: Category;
    fn category(&self) -> Self::Category;
}
