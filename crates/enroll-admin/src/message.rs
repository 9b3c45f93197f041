//! Message hierarchy for the shell.
//!
//! Every user interaction is a [`Message`]; [`Shell::update`] applies it.
//!
//! [`Shell::update`]: crate::Shell::update

use enroll_model::{CourseId, EnrollmentId, Resource, StudentId, TeacherId};

use crate::form::{CourseField, StudentField, TeacherField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Switch the active view. Local only.
    SelectView(Resource),

    /// Re-run the combined fetch of all four collections.
    Refresh,

    Student(StudentMessage),
    Teacher(TeacherMessage),
    Course(CourseMessage),
    Enrollment(EnrollmentMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentMessage {
    FieldChanged(StudentField, String),
    EditClicked(StudentId),
    DeleteClicked(StudentId),
    Submit,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeacherMessage {
    FieldChanged(TeacherField, String),
    EditClicked(TeacherId),
    DeleteClicked(TeacherId),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseMessage {
    FieldChanged(CourseField, String),
    /// Pick the course's teacher from the loaded teachers. `None` clears it.
    TeacherSelected(Option<TeacherId>),
    EditClicked(CourseId),
    DeleteClicked(CourseId),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentMessage {
    StudentSelected(Option<StudentId>),
    CourseSelected(Option<CourseId>),
    DeleteClicked(EnrollmentId),
    Submit,
}

impl From<StudentMessage> for Message {
    fn from(msg: StudentMessage) -> Self {
        Self::Student(msg)
    }
}

impl From<TeacherMessage> for Message {
    fn from(msg: TeacherMessage) -> Self {
        Self::Teacher(msg)
    }
}

impl From<CourseMessage> for Message {
    fn from(msg: CourseMessage) -> Self {
        Self::Course(msg)
    }
}

impl From<EnrollmentMessage> for Message {
    fn from(msg: EnrollmentMessage) -> Self {
        Self::Enrollment(msg)
    }
}
