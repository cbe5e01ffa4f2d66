pub mod days;
pub mod item;

pub use item::Reminder;
