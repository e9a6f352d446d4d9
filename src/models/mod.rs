//! Domain models for the equipment dashboard
//!
//! Raw rows as read from a source, the typed record they normalize into, and
//! the enumerations both sides share.

pub mod raw;
pub mod record;
pub mod types;

// Re-export commonly used types
pub use raw::{RawRow, RawTable, RawValue};
pub use record::{EquipmentRecord, RecordSet};
pub use types::{Column, ColumnKind, MachineStatus};
