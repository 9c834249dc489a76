pub mod create_contact;
pub mod delete_contact;
pub mod get_contact;
pub mod list_contacts;
pub mod search_contacts;
pub mod update_contact;
pub mod upcoming_birthdays;
