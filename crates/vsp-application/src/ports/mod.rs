//! Application ports

pub mod admin;
pub mod registry;
