mod notification_event;

pub use notification_event::*;
