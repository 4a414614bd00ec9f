use crate::shorten::ShortenResult;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RequestIntent {
    /// A validated URL was submitted. The app issues the call right after.
    Submit,

    /// The in-flight call returned a short link.
    Resolve { result: ShortenResult },

    /// The in-flight call failed.
    Reject { message: String },

    /// Spinner tick.
    AnimationTick,
}

impl Intent for RequestIntent {}
