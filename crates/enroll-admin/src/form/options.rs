//! Select options for reference fields.
//!
//! The wire carries identifiers only; these builders look up the display
//! label for each id in the current snapshot.

use enroll_model::{Course, Student, Teacher};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: i64,
    pub label: String,
}

/// Teacher choices for the course form.
pub fn teacher_options(teachers: &[Teacher]) -> Vec<SelectOption> {
    teachers
        .iter()
        .map(|teacher| SelectOption {
            value: teacher.id.get(),
            label: teacher.teacher_name.clone(),
        })
        .collect()
}

/// Student choices for the enrollment form, labelled by full name.
pub fn student_options(students: &[Student]) -> Vec<SelectOption> {
    students
        .iter()
        .map(|student| SelectOption {
            value: student.id.get(),
            label: student.full_name(),
        })
        .collect()
}

pub fn course_options(courses: &[Course]) -> Vec<SelectOption> {
    courses
        .iter()
        .map(|course| SelectOption {
            value: course.id.get(),
            label: course.course_name.clone(),
        })
        .collect()
}
