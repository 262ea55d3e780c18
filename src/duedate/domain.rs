use crate::core::library::{CirculationResult, LoanCategory};
use crate::duedate::domain::model::{DueDateResult, HolidayWindow, ReferenceInstant};

pub mod model;
pub mod service;

// DueDateService computes when a borrowed book must be returned. It performs
// no I/O of its own; the caller supplies the authoritative instant and the
// holiday windows it already fetched, so identical inputs always produce the
// same due date.
pub trait DueDateService: Sync + Send {
    fn compute(&self, category: LoanCategory, now: ReferenceInstant,
               holidays: &[HolidayWindow]) -> CirculationResult<DueDateResult>;
}
