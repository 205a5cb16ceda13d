mod category;
mod editor;
mod image_upload;
mod toolbar;

pub use category::CategoryDropdown;
pub use editor::{BODY_ID, PostEditor};
pub use image_upload::ImageUploadButton;
pub use toolbar::FormatToolbar;
