//! Utility functions

pub mod slug;
