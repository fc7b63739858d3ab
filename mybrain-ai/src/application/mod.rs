pub mod conversation;
pub mod dispatch;
