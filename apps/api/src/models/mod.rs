pub mod catalog;
pub mod proyecto;
pub mod user;
