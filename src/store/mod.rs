//! In-memory entity stores. Authoritative state lives here for the process
//! lifetime; there is no persistence.

pub mod company;
pub mod employee;
pub mod error;
pub mod filter;

use indexmap::IndexMap;
use parking_lot::RwLock;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::company::CompanyRead;
use crate::models::employee::EmployeeRead;

/// Both entity maps behind per-store locks. Insertion order of the maps is
/// the List order, so deletions must not reshuffle surviving entries.
///
/// Paths that touch both maps (employee link resolution, the company delete
/// cascade) always acquire the company lock before the employee lock.
pub struct Stores {
    pub(crate) companies: RwLock<IndexMap<Uuid, CompanyRead>>,
    pub(crate) employees: RwLock<IndexMap<Uuid, EmployeeRead>>,
}

impl Stores {
    pub fn new() -> Self {
        Stores {
            companies: RwLock::new(IndexMap::new()),
            employees: RwLock::new(IndexMap::new()),
        }
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn fresh_id() -> Uuid {
    Uuid::new_v4()
}

pub(crate) fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
