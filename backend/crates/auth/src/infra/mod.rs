//! Auth infrastructure layer

pub mod postgres;
