//! Built-in content shown while a collection is still empty.
use chrono::Utc;

use crate::models::{
    BlogPost, GalleryCategory, GalleryImage, MenuCategory, MenuItem, Testimonial,
};

const PEXELS: &str = "https://images.pexels.com/photos";

fn pexels(id: u32) -> String {
    format!("{PEXELS}/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w=800")
}

pub fn gallery_images() -> Vec<GalleryImage> {
    use GalleryCategory::*;

    let now = Utc::now();
    [
        ("Wedding Event", "Wedding catering setup", 1024359, Wedding),
        ("Corporate Lunch", "Corporate event catering", 1267320, Corporate),
        ("Birthday Party", "Private party catering", 1395964, Private),
        ("Outdoor Event", "Outdoor catering setup", 2291367, Outdoor),
        ("Luxury Dining", "Luxury event catering", 1126359, Luxury),
        ("Wedding Reception", "Wedding reception catering", 1616113, Wedding),
        ("Business Meeting", "Corporate meeting catering", 3184192, Corporate),
        ("Anniversary", "Anniversary celebration", 2291367, Private),
        ("Garden Party", "Outdoor garden party", 1395967, Outdoor),
        ("Gala Dinner", "Luxury gala dinner", 2788792, Luxury),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, alt_text, photo, category))| GalleryImage {
        id: (i + 1).to_string(),
        title: title.to_string(),
        alt_text: alt_text.to_string(),
        image_url: pexels(photo),
        category,
        created_at: now,
    })
    .collect()
}

pub fn blog_posts() -> Vec<BlogPost> {
    let now = Utc::now();
    [
        (
            "5 Tips for Planning the Perfect Wedding Menu",
            "perfect-wedding-menu-tips",
            1024359,
            "Planning a wedding menu can be overwhelming. Here are our top tips to create a memorable culinary experience for your special day.",
        ),
        (
            "Corporate Catering: Making Your Business Events Stand Out",
            "corporate-catering-guide",
            1267320,
            "Discover how professional catering can elevate your corporate events and leave a lasting impression on your clients and employees.",
        ),
        (
            "The Art of Traditional South Indian Cuisine",
            "traditional-south-indian-cuisine",
            1640772,
            "Explore the rich heritage and authentic flavors of South Indian cuisine that have been passed down through generations.",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, slug, photo, excerpt))| BlogPost {
        id: (i + 1).to_string(),
        title: title.to_string(),
        slug: slug.to_string(),
        thumbnail_url: pexels(photo),
        excerpt: excerpt.to_string(),
        content: excerpt.to_string(),
        published_at: now,
        created_at: now,
        updated_at: now,
    })
    .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    let now = Utc::now();
    [
        (
            "Priya & Raj",
            "Shanvik made our wedding day absolutely perfect! The food was exceptional and the service was impeccable. All our guests are still talking about the delicious spread.",
        ),
        (
            "Anand Kumar",
            "We hired Shanvik for our corporate event and they exceeded all expectations. Professional, punctual, and the food quality was outstanding. Highly recommended!",
        ),
        (
            "Lakshmi Reddy",
            "Thank you for making my mother's 75th birthday so special. The traditional dishes were authentic and reminded us of home-cooked meals. Personal attention to every detail!",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (reviewer_name, content))| Testimonial {
        id: (i + 1).to_string(),
        reviewer_name: reviewer_name.to_string(),
        content: content.to_string(),
        rating: 5,
        photo_url: String::new(),
        video_url: None,
        created_at: now,
    })
    .collect()
}

pub fn menu_items() -> Vec<MenuItem> {
    use MenuCategory::*;

    let now = Utc::now();
    [
        (
            "Vegetarian Delights",
            "Fresh seasonal vegetables prepared with aromatic spices and traditional techniques",
            1640772,
            Vegetarian,
        ),
        (
            "Non-Vegetarian Specialties",
            "Tender meats and seafood, expertly grilled and marinated with signature spices",
            2338407,
            NonVegetarian,
        ),
        (
            "Exquisite Desserts",
            "Traditional sweets and contemporary desserts to end your meal on a sweet note",
            291528,
            Desserts,
        ),
        (
            "Appetizers & Starters",
            "An array of savory bites to begin your culinary journey",
            1639562,
            Vegetarian,
        ),
        (
            "Beverages",
            "Refreshing drinks and traditional beverages to complement your meal",
            1233319,
            Vegetarian,
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, description, photo, category))| MenuItem {
        id: (i + 1).to_string(),
        category,
        name: name.to_string(),
        description: description.to_string(),
        image_url: pexels(photo),
        created_at: now,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_sets_have_fixed_sizes() {
        assert_eq!(gallery_images().len(), 10);
        assert_eq!(gallery_images()[0].title, "Wedding Event");
        assert_eq!(blog_posts().len(), 3);
        assert_eq!(testimonials().len(), 3);
        assert_eq!(menu_items().len(), 5);
    }

    #[test]
    fn placeholder_slugs_are_unique() {
        let posts = blog_posts();
        let mut slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), posts.len());
    }
}
