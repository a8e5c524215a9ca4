//! # Storage Layer
//!
//! This module defines the storage abstraction for medidesk. One store
//! instance manages all records of one entity type; the [`RecordStore`]
//! trait lets the application work with different backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `MemoryStore` (no filesystem needed)
//! - Share the read-modify-write operations across entity types instead
//!   of repeating them per entity
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage, one delimited
//!   text file per entity type under a data directory
//! - [`memory::MemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data-dir>/
//! ├── patients.txt        # id,name,age,gender,contact
//! ├── doctors.txt         # id,name,specialization,contact
//! └── appointments.txt    # id,patient_id,doctor_id,date,time
//! ```
//!
//! One record per line, fields comma-joined in declaration order, no
//! header. Blank lines are skipped on read. A missing file means an
//! empty collection, not an error. A line that does not parse fails the
//! whole load. Field values are not escaped, so a value containing the
//! delimiter would corrupt the line; the validators exclude commas from
//! every field that reaches disk except specialization.
//!
//! ## The Read-Modify-Write Contract
//!
//! Every mutation loads the entire collection, transforms it in memory
//! and rewrites the whole file. There is no append-in-place, no locking
//! and no guard against concurrent writers. This is only acceptable at
//! front-desk record counts, where a linear scan is cheaper than any
//! index would be.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// A persistable record with an integer id and a line codec.
///
/// `KIND` is the stable snake-case plural used for the backing file stem
/// and in parse errors. `DISPLAY` is the capitalized singular used in
/// user-facing messages.
pub trait Record: Clone {
    const KIND: &'static str;
    const DISPLAY: &'static str;

    fn id(&self) -> u32;

    /// Serializes to one delimited line, fields in declaration order.
    fn to_line(&self) -> String;

    /// Parses one line. The error is a bare reason; the store wraps it
    /// with the kind and line number.
    fn from_line(line: &str) -> std::result::Result<Self, String>
    where
        Self: Sized;
}

/// Abstract interface for record storage.
///
/// Implementors provide the collection load/save pair; every operation
/// on top of it is a whole-collection read-modify-write with the same
/// semantics across backends.
pub trait RecordStore<R: Record> {
    /// Load every record. A missing backing resource is an empty
    /// collection.
    fn load_all(&self) -> Result<Vec<R>>;

    /// Replace the backing resource with exactly these records, in
    /// order.
    fn save_all(&mut self, records: &[R]) -> Result<()>;

    fn add(&mut self, record: R) -> Result<()> {
        let mut records = self.load_all()?;
        records.push(record);
        self.save_all(&records)
    }

    /// Replaces the first record with a matching id. When no id matches
    /// the collection is saved unchanged; existence checks are the
    /// command layer's job.
    fn update(&mut self, record: R) -> Result<()> {
        let mut records = self.load_all()?;
        if let Some(existing) = records.iter_mut().find(|r| r.id() == record.id()) {
            *existing = record;
        }
        self.save_all(&records)
    }

    fn delete(&mut self, id: u32) -> Result<()> {
        let mut records = self.load_all()?;
        records.retain(|r| r.id() != id);
        self.save_all(&records)
    }

    fn get(&self, id: u32) -> Result<Option<R>> {
        Ok(self.load_all()?.into_iter().find(|r| r.id() == id))
    }

    /// `max(id) + 1`, starting at 1 for an empty collection. Ids freed
    /// by deletion below the maximum are never handed out again.
    fn next_id(&self) -> Result<u32> {
        Ok(self.load_all()?.iter().map(Record::id).max().unwrap_or(0) + 1)
    }
}
