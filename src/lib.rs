//! Terminal widget that fetches random advice and keeps a session history

pub mod advice;
pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod theme;
