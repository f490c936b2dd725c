//! CLI Commands

pub mod cart;
pub mod catalog;
pub mod serve;
