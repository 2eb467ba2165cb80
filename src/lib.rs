// src/lib.rs

pub mod activity_log;
pub mod command;
pub mod context;
pub mod data_uri;
pub mod error;
pub mod export;
pub mod i18n;
pub mod template;
