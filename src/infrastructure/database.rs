//! JSON file database

use crate::domain::{Chirp, DbStructure};
use crate::error::{ChirpyError, Result};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// Abstract store for chirp operations
pub trait ChirpRepository: Send + Sync {
    /// Location of the backing file
    fn path(&self) -> &Path;

    /// Append a chirp with the next sequential id
    fn create_chirp(&self, body: &str) -> Result<Chirp>;

    /// All chirps, ascending by id
    fn get_chirps(&self) -> Result<Vec<Chirp>>;

    /// A single chirp by id
    fn get_chirp(&self, id: u64) -> Result<Chirp>;
}

/// Chirp store backed by a single pretty-printed JSON file.
///
/// Every operation loads the whole file; `create_chirp` rewrites it.
/// The lock only serializes callers sharing this value. Two processes (or two
/// `JsonFileDatabase` values) pointed at the same file can still lose updates.
#[derive(Debug)]
pub struct JsonFileDatabase {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileDatabase {
    /// Open the database at `path`, creating an empty file if none exists.
    ///
    /// Existing content is not validated until the first operation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_db(&path)?;

        Ok(JsonFileDatabase {
            path,
            lock: RwLock::new(()),
        })
    }

    // The lock guards no data, so a panic in another holder leaves nothing
    // inconsistent in memory.
    fn read(&self) -> RwLockReadGuard<'_, ()> {
        self.lock.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ()> {
        self.lock.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ChirpRepository for JsonFileDatabase {
    fn path(&self) -> &Path {
        &self.path
    }

    fn create_chirp(&self, body: &str) -> Result<Chirp> {
        let _guard = self.write();

        let mut db = load_db(&self.path)?;
        let chirp = db.insert(body);
        write_db(&self.path, &db)?;

        info!(id = chirp.id, path = %self.path.display(), "created chirp");
        Ok(chirp)
    }

    fn get_chirps(&self) -> Result<Vec<Chirp>> {
        let _guard = self.read();

        Ok(load_db(&self.path)?.into_sorted())
    }

    fn get_chirp(&self, id: u64) -> Result<Chirp> {
        let _guard = self.read();

        let mut db = load_db(&self.path)?;
        db.chirps
            .remove(&id)
            .ok_or(ChirpyError::ChirpNotFound(id))
    }
}

/// Create an empty database file if nothing exists at `path`
fn ensure_db(path: &Path) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    match options.open(path) {
        Ok(_) => {
            info!(path = %path.display(), "created empty database file");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if path.is_dir() {
                return Err(ChirpyError::Io(io::Error::new(
                    io::ErrorKind::Other,
                    format!("database path is a directory: {}", path.display()),
                )));
            }
            Ok(())
        }
        Err(e) => Err(ChirpyError::Io(e)),
    }
}

/// Read and decode the whole file. Callers must hold the lock.
fn load_db(path: &Path) -> Result<DbStructure> {
    let data = fs::read(path)?;

    // A freshly created file has no content yet.
    if data.is_empty() {
        debug!(path = %path.display(), "database file is empty");
        return Ok(DbStructure::default());
    }

    let db: DbStructure =
        serde_json::from_slice(&data).map_err(|source| ChirpyError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), chirps = db.len(), "loaded database");
    Ok(db)
}

/// Encode and overwrite the whole file. Callers must hold the write lock.
fn write_db(path: &Path, db: &DbStructure) -> Result<()> {
    let data = serde_json::to_vec_pretty(db).map_err(ChirpyError::Encode)?;
    fs::write(path, data)?;

    debug!(path = %path.display(), chirps = db.len(), "wrote database");
    Ok(())
}
