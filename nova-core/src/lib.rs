#![allow(clippy::new_without_default)]

pub mod catalog;
pub mod embed;
pub mod error;
pub mod filter;
pub mod util;
