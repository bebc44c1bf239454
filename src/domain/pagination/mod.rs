pub mod page;
pub mod window;

pub use page::{Page, PageRequest};
pub use window::PageWindow;
