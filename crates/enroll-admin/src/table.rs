//! Read-only table views over the snapshot.
//!
//! Tables are plain data: headers, one row per entity in fetch order, and the
//! triggers each row offers. Rendering is left to the front end.

use enroll_model::{Course, Enrollment, Resource, Student, Teacher};

use crate::snapshot::Snapshot;

/// Per-row trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Populate the resource's form from this row.
    Edit,
    /// Delete the row immediately.
    Delete,
    /// Delete an enrollment; no confirmation step.
    Unenroll,
}

impl RowAction {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::Unenroll => "Unenroll",
        }
    }
}

const EDIT_DELETE: &[RowAction] = &[RowAction::Edit, RowAction::Delete];
const UNENROLL: &[RowAction] = &[RowAction::Unenroll];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: i64,
    pub cells: Vec<String>,
    pub actions: &'static [RowAction],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub resource: Resource,
    pub headers: Vec<&'static str>,
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Table for one resource, built from the given snapshot.
pub fn table_for(snapshot: &Snapshot, resource: Resource) -> TableView {
    match resource {
        Resource::Students => students_table(&snapshot.students),
        Resource::Teachers => teachers_table(&snapshot.teachers),
        Resource::Courses => courses_table(&snapshot.courses),
        Resource::Enrollments => enrollments_table(&snapshot.enrollments),
    }
}

pub fn students_table(students: &[Student]) -> TableView {
    TableView {
        resource: Resource::Students,
        headers: vec!["First Name", "Last Name", "Email", "Age"],
        rows: students
            .iter()
            .map(|student| TableRow {
                id: student.id.get(),
                cells: vec![
                    student.first_name.clone(),
                    student.last_name.clone(),
                    student.email.clone(),
                    student.age.to_string(),
                ],
                actions: EDIT_DELETE,
            })
            .collect(),
    }
}

pub fn teachers_table(teachers: &[Teacher]) -> TableView {
    TableView {
        resource: Resource::Teachers,
        headers: vec!["Name", "Email"],
        rows: teachers
            .iter()
            .map(|teacher| TableRow {
                id: teacher.id.get(),
                cells: vec![teacher.teacher_name.clone(), teacher.email.clone()],
                actions: EDIT_DELETE,
            })
            .collect(),
    }
}

pub fn courses_table(courses: &[Course]) -> TableView {
    TableView {
        resource: Resource::Courses,
        headers: vec!["Course Name", "Units", "Teacher ID"],
        rows: courses
            .iter()
            .map(|course| TableRow {
                id: course.id.get(),
                cells: vec![
                    course.course_name.clone(),
                    format!("{} Units", course.units),
                    format!("ID: {}", course.teacher),
                ],
                actions: EDIT_DELETE,
            })
            .collect(),
    }
}

pub fn enrollments_table(enrollments: &[Enrollment]) -> TableView {
    TableView {
        resource: Resource::Enrollments,
        headers: vec!["Student ID", "Course ID"],
        rows: enrollments
            .iter()
            .map(|enrollment| TableRow {
                id: enrollment.id.get(),
                cells: vec![
                    format!("#{}", enrollment.student),
                    format!("#{}", enrollment.course),
                ],
                actions: UNENROLL,
            })
            .collect(),
    }
}
