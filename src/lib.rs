//! Research Pro: knowledge management and discovery for research teams.
//!
//! Topics, sources, notes, insights and collections are kept in a
//! [`state::ResearchStore`] and served over a REST API, with keyword search
//! ([`search`]) and a summary dashboard ([`analytics`]) on top.

pub mod analytics;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod state;

pub use error::{AppError, Result};
