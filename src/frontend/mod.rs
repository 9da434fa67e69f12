//! Server-rendered views: widget values and page resolution.

pub mod components;
pub mod pages;
