use enroll_model::{
    Course, CourseId, Enrollment, Resource, Student, StudentId, Teacher, TeacherId,
};

/// The shell's in-memory copy of all four collections.
///
/// A snapshot is only ever replaced wholesale; nothing patches it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
}

impl Snapshot {
    pub fn count(&self, resource: Resource) -> usize {
        match resource {
            Resource::Students => self.students.len(),
            Resource::Teachers => self.teachers.len(),
            Resource::Courses => self.courses.len(),
            Resource::Enrollments => self.enrollments.len(),
        }
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    pub fn teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.teachers.iter().find(|teacher| teacher.id == id)
    }

    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }
}
