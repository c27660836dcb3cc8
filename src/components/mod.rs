pub mod footer;
pub mod layout;

pub use footer::Footer;
pub use layout::Layout;
