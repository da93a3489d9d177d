pub mod entity;
pub mod guards;
pub mod repository;
