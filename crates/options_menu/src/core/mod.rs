//! Core crate configuration

pub mod config;
