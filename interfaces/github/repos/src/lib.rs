//! Client for the GitHub REST endpoint listing a user's public repositories.

pub mod index;
pub mod models;
