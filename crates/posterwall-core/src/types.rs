//! Core types for the collections payload
//!
//! These structures mirror the JSON served by the poster backend. Missing
//! fields decode to their defaults so a sparse entry renders blank instead
//! of failing the whole payload; a wrong-shaped payload is a decode error.

use serde::{Deserialize, Serialize};

/// A single movie inside a collection
///
/// No identity beyond its position in the parent's `movies` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Display title, doubles as the poster's alt text
    #[serde(default)]
    pub title: String,
    /// Poster image URL
    #[serde(default)]
    pub poster: String,
    /// Background/fanart image URL
    #[serde(default)]
    pub background: String,
}

/// A titled collection of movies with its own artwork
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCollection {
    /// Display title, doubles as the collection poster's alt text
    #[serde(default)]
    pub title: String,
    /// Collection poster image URL
    #[serde(default)]
    pub poster: String,
    /// Background/fanart image URL
    #[serde(default)]
    pub background: String,
    /// Member movies, in display order
    #[serde(default)]
    pub movies: Vec<Movie>,
}

impl MovieCollection {
    /// Number of images this collection renders: its own poster plus one
    /// per movie.
    pub fn poster_count(&self) -> usize {
        1 + self.movies.len()
    }
}
