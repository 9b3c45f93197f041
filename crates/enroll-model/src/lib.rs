pub mod entity;
pub mod error;
pub mod ids;
pub mod payload;
pub mod resource;

pub use entity::{Course, Enrollment, Entity, Student, Teacher, Updatable};
pub use error::{ModelError, Result};
pub use ids::{CourseId, EnrollmentId, StudentId, TeacherId};
pub use payload::{
    CoursePatch, NewCourse, NewEnrollment, NewStudent, NewTeacher, StudentPatch, TeacherPatch,
};
pub use resource::Resource;
