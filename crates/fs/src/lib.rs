mod error;
mod identity;
mod mode;
mod record;
mod scan;

pub use error::ScanError;
pub use identity::{group_name, owner_name};
pub use mode::mode_string;
pub use record::{FileRecord, ModTime, sort_by_name};
pub use scan::scan_dir;
