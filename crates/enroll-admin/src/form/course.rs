use std::str::FromStr;

use enroll_model::{Course, CourseId, CoursePatch, NewCourse, TeacherId};

use super::{FormMode, Submission, coerce_integer};
use crate::error::FormError;

pub type CourseSubmission = Submission<CourseId, NewCourse, CoursePatch>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Name,
    Units,
    Teacher,
}

impl CourseField {
    pub const ALL: [CourseField; 3] = [
        CourseField::Name,
        CourseField::Units,
        CourseField::Teacher,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Course Name",
            Self::Units => "Units",
            Self::Teacher => "Teacher",
        }
    }
}

impl FromStr for CourseField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "name" | "course_name" => Ok(Self::Name),
            "units" => Ok(Self::Units),
            "teacher" => Ok(Self::Teacher),
            _ => Err(format!(
                "unknown course field {s:?} (expected name, units or teacher)"
            )),
        }
    }
}

/// Raw course form input. `teacher` holds the selected teacher id as text,
/// empty when nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFields {
    pub course_name: String,
    pub units: String,
    pub teacher: String,
}

impl CourseFields {
    pub fn get(&self, field: CourseField) -> &str {
        match field {
            CourseField::Name => &self.course_name,
            CourseField::Units => &self.units,
            CourseField::Teacher => &self.teacher,
        }
    }
}

/// Course form. No presence check: blank units or teacher coerce to `0`.
#[derive(Debug, Clone, Default)]
pub struct CourseForm {
    fields: CourseFields,
    mode: FormMode<CourseId>,
}

impl CourseForm {
    pub fn fields(&self) -> &CourseFields {
        &self.fields
    }

    pub fn mode(&self) -> FormMode<CourseId> {
        self.mode
    }

    pub fn set(&mut self, field: CourseField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CourseField::Name => self.fields.course_name = value,
            CourseField::Units => self.fields.units = value,
            CourseField::Teacher => self.fields.teacher = value,
        }
    }

    pub fn select_teacher(&mut self, teacher: Option<TeacherId>) {
        self.fields.teacher = teacher.map(|id| id.to_string()).unwrap_or_default();
    }

    pub fn begin_edit(&mut self, course: &Course) {
        self.fields = CourseFields {
            course_name: course.course_name.clone(),
            units: course.units.to_string(),
            teacher: course.teacher.to_string(),
        };
        self.mode = FormMode::Edit(course.id);
    }

    pub fn prepare(&self) -> Result<CourseSubmission, FormError> {
        let course = NewCourse {
            course_name: self.fields.course_name.clone(),
            units: coerce_integer("units", &self.fields.units)?,
            teacher: TeacherId::new(coerce_integer("teacher", &self.fields.teacher)?),
        };
        Ok(match self.mode {
            FormMode::Create => Submission::Create(course),
            FormMode::Edit(id) => Submission::Update(id, CoursePatch::from(course)),
        })
    }

    pub fn complete(&mut self) {
        *self = Self::default();
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() {
            "Edit Course"
        } else {
            "Add New Course"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.mode.is_edit() { "Update" } else { "Add" }
    }
}
