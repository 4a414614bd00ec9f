//! Terminal front end for the shortener: one form, one in-flight request.

pub mod app;
pub mod events;
pub mod field;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod request;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod toast;
pub mod worker;

pub use runtime::run;
