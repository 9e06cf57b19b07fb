#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

pub mod auth;
pub mod config;
pub mod guard;
pub mod models;
pub mod navigation;
pub mod session;
pub mod storage;
pub mod validation;
