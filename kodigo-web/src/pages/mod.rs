mod contact;
mod contact_success;
mod home;
mod layout;

pub use contact::Contact;
pub use contact_success::ContactSuccess;
pub use home::Home;
pub use layout::SiteLayout;
