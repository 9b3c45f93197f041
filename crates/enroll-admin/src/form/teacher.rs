use std::str::FromStr;

use enroll_model::{NewTeacher, Teacher, TeacherId, TeacherPatch};

use super::{FormMode, Submission};
use crate::error::FormError;

pub type TeacherSubmission = Submission<TeacherId, NewTeacher, TeacherPatch>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherField {
    Name,
    Email,
}

impl TeacherField {
    pub const ALL: [TeacherField; 2] = [TeacherField::Name, TeacherField::Email];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
        }
    }
}

impl FromStr for TeacherField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "name" | "teacher_name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            _ => Err(format!(
                "unknown teacher field {s:?} (expected name or email)"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherFields {
    pub teacher_name: String,
    pub email: String,
}

impl TeacherFields {
    pub fn get(&self, field: TeacherField) -> &str {
        match field {
            TeacherField::Name => &self.teacher_name,
            TeacherField::Email => &self.email,
        }
    }
}

/// Teacher form. Unlike the student form, empty fields are passed through.
#[derive(Debug, Clone, Default)]
pub struct TeacherForm {
    fields: TeacherFields,
    mode: FormMode<TeacherId>,
}

impl TeacherForm {
    pub fn fields(&self) -> &TeacherFields {
        &self.fields
    }

    pub fn mode(&self) -> FormMode<TeacherId> {
        self.mode
    }

    pub fn set(&mut self, field: TeacherField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TeacherField::Name => self.fields.teacher_name = value,
            TeacherField::Email => self.fields.email = value,
        }
    }

    pub fn begin_edit(&mut self, teacher: &Teacher) {
        self.fields = TeacherFields {
            teacher_name: teacher.teacher_name.clone(),
            email: teacher.email.clone(),
        };
        self.mode = FormMode::Edit(teacher.id);
    }

    pub fn prepare(&self) -> Result<TeacherSubmission, FormError> {
        let teacher = NewTeacher {
            teacher_name: self.fields.teacher_name.clone(),
            email: self.fields.email.clone(),
        };
        Ok(match self.mode {
            FormMode::Create => Submission::Create(teacher),
            FormMode::Edit(id) => Submission::Update(id, TeacherPatch::from(teacher)),
        })
    }

    pub fn complete(&mut self) {
        *self = Self::default();
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() {
            "Edit Teacher"
        } else {
            "Add Teacher"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.mode.is_edit() { "Update" } else { "Add" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_is_passed_through() {
        let submission = TeacherForm::default().prepare().unwrap();
        assert_eq!(
            submission,
            Submission::Create(NewTeacher {
                teacher_name: String::new(),
                email: String::new(),
            })
        );
    }

    #[test]
    fn test_edit_then_complete() {
        let mut form = TeacherForm::default();
        form.begin_edit(&Teacher {
            id: TeacherId::new(2),
            teacher_name: "Smith".to_string(),
            email: "s@u.edu".to_string(),
        });
        assert_eq!(form.submit_label(), "Update");
        form.set(TeacherField::Name, "Jones");

        let Submission::Update(id, patch) = form.prepare().unwrap() else {
            panic!("expected an update");
        };
        assert_eq!(id, TeacherId::new(2));
        assert_eq!(patch.teacher_name.as_deref(), Some("Jones"));

        form.complete();
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.title(), "Add Teacher");
    }
}
