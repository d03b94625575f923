mod navigation_target;
mod notification_bucket;

pub use navigation_target::*;
pub use notification_bucket::*;
