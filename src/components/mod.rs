pub mod reminder_form;
pub mod reminder_list;

pub use reminder_form::ReminderForm;
pub use reminder_list::ReminderList;
