//! Auth domain layer

pub mod entity;
pub mod repository;
