//! Entities as returned by the enrollment API.
//!
//! Field names follow the wire contract (`student_id`, `teacher_name`, ...).
//! The `id` of every entity is assigned by the server.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::ids::{CourseId, EnrollmentId, StudentId, TeacherId};
use crate::payload::{
    CoursePatch, NewCourse, NewEnrollment, NewStudent, NewTeacher, StudentPatch, TeacherPatch,
};
use crate::resource::Resource;

/// A row of one of the four REST collections.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    type Id: Copy + Eq + fmt::Display + Send + Sync;
    /// Create payload: every field except the server-assigned id.
    type New: Serialize + Send + Sync;

    const RESOURCE: Resource;

    fn id(&self) -> Self::Id;
}

/// Entities that accept partial updates via `PUT {id}/`.
pub trait Updatable: Entity {
    type Patch: Serialize + Send + Sync;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "student_id")]
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i64,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(rename = "teacher_id")]
    pub id: TeacherId,
    pub teacher_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "course_id")]
    pub id: CourseId,
    pub course_name: String,
    pub units: i64,
    pub teacher: TeacherId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(rename = "enrollment_id")]
    pub id: EnrollmentId,
    pub student: StudentId,
    pub course: CourseId,
}

impl Entity for Student {
    type Id = StudentId;
    type New = NewStudent;
    const RESOURCE: Resource = Resource::Students;

    fn id(&self) -> StudentId {
        self.id
    }
}

impl Updatable for Student {
    type Patch = StudentPatch;
}

impl Entity for Teacher {
    type Id = TeacherId;
    type New = NewTeacher;
    const RESOURCE: Resource = Resource::Teachers;

    fn id(&self) -> TeacherId {
        self.id
    }
}

impl Updatable for Teacher {
    type Patch = TeacherPatch;
}

impl Entity for Course {
    type Id = CourseId;
    type New = NewCourse;
    const RESOURCE: Resource = Resource::Courses;

    fn id(&self) -> CourseId {
        self.id
    }
}

impl Updatable for Course {
    type Patch = CoursePatch;
}

impl Entity for Enrollment {
    type Id = EnrollmentId;
    type New = NewEnrollment;
    const RESOURCE: Resource = Resource::Enrollments;

    fn id(&self) -> EnrollmentId {
        self.id
    }
}
