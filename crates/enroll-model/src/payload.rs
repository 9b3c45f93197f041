//! Request bodies for create (`New*`) and update (`*Patch`) calls.
//!
//! Patch fields left as `None` are omitted from the JSON body, so a patch can
//! carry any subset of the entity's fields.

use serde::{Deserialize, Serialize};

use crate::ids::{CourseId, StudentId, TeacherId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeacher {
    pub teacher_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    pub course_name: String,
    pub units: i64,
    pub teacher: TeacherId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEnrollment {
    pub student: StudentId,
    pub course: CourseId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.age.is_none()
    }
}

impl From<NewStudent> for StudentPatch {
    fn from(student: NewStudent) -> Self {
        Self {
            first_name: Some(student.first_name),
            last_name: Some(student.last_name),
            email: Some(student.email),
            age: Some(student.age),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl TeacherPatch {
    pub fn is_empty(&self) -> bool {
        self.teacher_name.is_none() && self.email.is_none()
    }
}

impl From<NewTeacher> for TeacherPatch {
    fn from(teacher: NewTeacher) -> Self {
        Self {
            teacher_name: Some(teacher.teacher_name),
            email: Some(teacher.email),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<TeacherId>,
}

impl CoursePatch {
    pub fn is_empty(&self) -> bool {
        self.course_name.is_none() && self.units.is_none() && self.teacher.is_none()
    }
}

impl From<NewCourse> for CoursePatch {
    fn from(course: NewCourse) -> Self {
        Self {
            course_name: Some(course.course_name),
            units: Some(course.units),
            teacher: Some(course.teacher),
        }
    }
}
