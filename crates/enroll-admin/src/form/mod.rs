//! Entity forms.
//!
//! Student, teacher and course forms are two-state machines: `Create` when no
//! row is being edited, `Edit(id)` after an edit trigger populated them.
//! Submitting is split in two so a failed request never loses input:
//!
//! 1. [`prepare`](StudentForm::prepare) validates, coerces numeric text and
//!    yields a [`Submission`] without touching the form.
//! 2. `complete` clears the fields and returns to `Create`; the shell calls it
//!    only after the request succeeded.
//!
//! The enrollment form has no edit mode; it only tracks two selections.

mod course;
mod enrollment;
mod options;
mod student;
mod teacher;

pub use course::{CourseField, CourseFields, CourseForm, CourseSubmission};
pub use enrollment::EnrollmentForm;
pub use options::{SelectOption, course_options, student_options, teacher_options};
pub use student::{StudentField, StudentFields, StudentForm, StudentSubmission};
pub use teacher::{TeacherField, TeacherFields, TeacherForm, TeacherSubmission};

use crate::error::FormError;

/// Whether a form creates a new row or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<Id> {
    Create,
    Edit(Id),
}

impl<Id> Default for FormMode<Id> {
    fn default() -> Self {
        Self::Create
    }
}

impl<Id: Copy> FormMode<Id> {
    pub fn editing(&self) -> Option<Id> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(*id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

/// What a validated form asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<Id, New, Patch> {
    Create(New),
    Update(Id, Patch),
}

/// Coerces form text to an integer.
///
/// Blank input becomes `0`; surrounding whitespace is ignored. There is no
/// bounds check.
pub fn coerce_integer(field: &'static str, raw: &str) -> Result<i64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<i64>().map_err(|_| FormError::NotANumber {
        field,
        value: raw.to_string(),
    })
}
