pub mod use_array;
pub mod use_copy_to_clipboard;
pub mod use_device_detect;
pub mod use_fetch;
pub mod use_local_storage_state;
pub mod use_page_bottom;
pub mod use_unsplash_photos;
pub mod use_window_size;

pub use use_array::{UseArrayHandle, use_array};
pub use use_copy_to_clipboard::use_copy_to_clipboard;
pub use use_device_detect::use_device_detect;
pub use use_fetch::{UseFetchHandle, use_fetch};
pub use use_local_storage_state::use_local_storage_state;
pub use use_page_bottom::use_page_bottom;
pub use use_unsplash_photos::use_unsplash_photos;
pub use use_window_size::use_window_size;
