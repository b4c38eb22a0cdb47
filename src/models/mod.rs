pub mod aggregate;
pub mod interest;
pub mod persona;
pub mod profile;
pub mod project;
pub mod repo;
pub mod request;
pub mod score;
