use std::fmt;
use std::str::FromStr;

use enroll_model::{NewStudent, Student, StudentId, StudentPatch};

use super::{FormMode, Submission, coerce_integer};
use crate::error::FormError;

pub type StudentSubmission = Submission<StudentId, NewStudent, StudentPatch>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    FirstName,
    LastName,
    Email,
    Age,
}

impl StudentField {
    pub const ALL: [StudentField; 4] = [
        StudentField::FirstName,
        StudentField::LastName,
        StudentField::Email,
        StudentField::Age,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Age => "Age",
        }
    }

    pub const fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Age => "age",
        }
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StudentField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "first_name" | "first" => Ok(Self::FirstName),
            "last_name" | "last" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "age" => Ok(Self::Age),
            _ => Err(format!(
                "unknown student field {s:?} (expected first_name, last_name, email or age)"
            )),
        }
    }
}

/// Raw text as typed into the student form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: String,
}

impl StudentFields {
    pub fn get(&self, field: StudentField) -> &str {
        match field {
            StudentField::FirstName => &self.first_name,
            StudentField::LastName => &self.last_name,
            StudentField::Email => &self.email,
            StudentField::Age => &self.age,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    fields: StudentFields,
    mode: FormMode<StudentId>,
}

impl StudentForm {
    pub fn fields(&self) -> &StudentFields {
        &self.fields
    }

    pub fn mode(&self) -> FormMode<StudentId> {
        self.mode
    }

    pub fn set(&mut self, field: StudentField, value: impl Into<String>) {
        let value = value.into();
        match field {
            StudentField::FirstName => self.fields.first_name = value,
            StudentField::LastName => self.fields.last_name = value,
            StudentField::Email => self.fields.email = value,
            StudentField::Age => self.fields.age = value,
        }
    }

    /// Create -> Edit: copy the row into the fields and hold its id.
    pub fn begin_edit(&mut self, student: &Student) {
        self.fields = StudentFields {
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            age: student.age.to_string(),
        };
        self.mode = FormMode::Edit(student.id);
    }

    /// Edit -> Create without submitting.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// All four fields must be non-empty; age is coerced to an integer.
    pub fn prepare(&self) -> Result<StudentSubmission, FormError> {
        let fields = &self.fields;
        if StudentField::ALL
            .iter()
            .any(|field| fields.get(*field).is_empty())
        {
            return Err(FormError::MissingFields);
        }

        let student = NewStudent {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            email: fields.email.clone(),
            age: coerce_integer("age", &fields.age)?,
        };
        Ok(match self.mode {
            FormMode::Create => Submission::Create(student),
            FormMode::Edit(id) => Submission::Update(id, StudentPatch::from(student)),
        })
    }

    /// Called once the submitted request succeeded.
    pub fn complete(&mut self) {
        self.reset();
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() {
            "Edit Student"
        } else {
            "Add New Student"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.mode.is_edit() { "Save" } else { "Add" }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
