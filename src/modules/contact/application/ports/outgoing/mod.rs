pub mod contact_repository;

pub use contact_repository::{
    ContactPatch, ContactRepository, ContactRepositoryError, CreateContactData, SearchFilter,
};
