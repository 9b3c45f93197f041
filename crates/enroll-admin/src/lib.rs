//! Application shell for the enrollment admin.
//!
//! [`Shell`] holds a snapshot of students, teachers, courses and enrollments,
//! one form per resource and the active view. Front ends feed it
//! [`Message`]s; every successful create, update or delete is followed by a
//! full re-fetch so the snapshot always mirrors the server.

pub mod error;
pub mod form;
mod handler;
pub mod message;
pub mod shell;
pub mod snapshot;
pub mod table;

pub use error::{AdminError, FormError};
pub use form::{FormMode, SelectOption, Submission};
pub use message::{CourseMessage, EnrollmentMessage, Message, StudentMessage, TeacherMessage};
pub use shell::{Header, RefreshOutcome, Shell};
pub use snapshot::Snapshot;
pub use table::{RowAction, TableRow, TableView};
