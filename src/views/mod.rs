pub mod header;
pub mod login;
pub mod property_card;
pub mod property_list;

pub use login::render_login;
pub use property_list::render_property_list;
