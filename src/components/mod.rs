pub mod catering_services;
pub mod contact_form;
pub mod footer;
pub mod header;
pub mod hero;
pub mod inquiries_viewer;
pub mod menu_carousel;
pub mod our_story;
pub mod resource_manager;
pub mod testimonials_carousel;
