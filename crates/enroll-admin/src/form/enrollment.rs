use enroll_model::{CourseId, NewEnrollment, StudentId};

use crate::error::FormError;

/// Enrollment form: a student selection and a course selection.
///
/// Selections are not checked against the cached collections; whatever is
/// selected is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentForm {
    student: Option<StudentId>,
    course: Option<CourseId>,
}

impl EnrollmentForm {
    pub fn student(&self) -> Option<StudentId> {
        self.student
    }

    pub fn course(&self) -> Option<CourseId> {
        self.course
    }

    pub fn select_student(&mut self, student: Option<StudentId>) {
        self.student = student;
    }

    pub fn select_course(&mut self, course: Option<CourseId>) {
        self.course = course;
    }

    pub fn prepare(&self) -> Result<NewEnrollment, FormError> {
        match (self.student, self.course) {
            (Some(student), Some(course)) => Ok(NewEnrollment { student, course }),
            _ => Err(FormError::MissingSelection),
        }
    }

    pub fn complete(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_both_selections() {
        let mut form = EnrollmentForm::default();
        assert_eq!(form.prepare(), Err(FormError::MissingSelection));

        form.select_student(Some(StudentId::new(1)));
        assert_eq!(form.prepare(), Err(FormError::MissingSelection));

        form.select_student(None);
        form.select_course(Some(CourseId::new(5)));
        assert_eq!(form.prepare(), Err(FormError::MissingSelection));
    }

    #[test]
    fn test_complete_clears_selections() {
        let mut form = EnrollmentForm::default();
        form.select_student(Some(StudentId::new(1)));
        form.select_course(Some(CourseId::new(5)));
        assert_eq!(
            form.prepare(),
            Ok(NewEnrollment {
                student: StudentId::new(1),
                course: CourseId::new(5),
            })
        );

        form.complete();
        assert_eq!(form.student(), None);
        assert_eq!(form.course(), None);
    }
}
