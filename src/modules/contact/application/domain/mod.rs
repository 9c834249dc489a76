pub mod birthday;
pub mod entities;
