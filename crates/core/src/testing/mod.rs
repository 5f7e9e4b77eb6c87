//! Testing utilities shared by unit and integration tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use pinrecon_core::testing::fixtures::{file, game_with};
//!
//! let games = vec![game_with("AFM", "Attack from Mars (Bally 1995)", "Bally", 1995)];
//! let files = vec![file("/media/Wheel Images/AFM.png", "Wheel Images")];
//! ```

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::Game;
    use crate::reconcile::CandidateFile;

    /// Create a game with only a name.
    pub fn game(name: &str) -> Game {
        Game::new(name)
    }

    /// Create a fully described game. Empty strings are treated as absent.
    pub fn game_with(name: &str, description: &str, manufacturer: &str, year: u32) -> Game {
        Game {
            name: name.to_string(),
            description: Some(description.to_string()).filter(|d| !d.is_empty()),
            manufacturer: Some(manufacturer.to_string()).filter(|m| !m.is_empty()),
            year: Some(year),
        }
    }

    /// Create a candidate file with a nominal size.
    pub fn file(path: &str, content_type: &str) -> CandidateFile {
        file_with_size(path, content_type, 1024)
    }

    pub fn file_with_size(path: &str, content_type: &str, size: u64) -> CandidateFile {
        CandidateFile::new(path, content_type, size)
    }
}
