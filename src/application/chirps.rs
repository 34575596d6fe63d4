//! Create, list and show chirps use cases

use crate::domain::Chirp;
use crate::error::Result;
use crate::infrastructure::ChirpRepository;

/// Service for working with chirps in a repository
pub struct ChirpService<R: ChirpRepository> {
    repository: R,
}

impl<R: ChirpRepository> ChirpService<R> {
    /// Create a new chirp service
    pub fn new(repository: R) -> Self {
        ChirpService { repository }
    }

    /// Store a new chirp. The body is kept exactly as given.
    pub fn create(&self, body: &str) -> Result<Chirp> {
        self.repository.create_chirp(body)
    }

    /// Chirps ascending by id, optionally only the first `limit`
    pub fn list(&self, limit: Option<usize>) -> Result<Vec<Chirp>> {
        let mut chirps = self.repository.get_chirps()?;
        if let Some(limit) = limit {
            chirps.truncate(limit);
        }
        Ok(chirps)
    }

    /// A single chirp by id
    pub fn show(&self, id: u64) -> Result<Chirp> {
        self.repository.get_chirp(id)
    }
}
