//! Featured projects section of the portfolio page
//!
//! - static account/topic/override configuration in `catalog`
//! - featured filter and ordering in `featured`
//! - HTML fragments in `render`
//! - the page element being rewritten in `container`
//! - the single fetch → filter → sort → render pass in `loader`

pub mod catalog;
pub mod config;
pub mod container;
pub mod featured;
pub mod loader;
pub mod render;
