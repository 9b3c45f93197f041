//! The resource operations as a trait, so the shell can run against any
//! backend that speaks the same contract.

use async_trait::async_trait;
use enroll_model::{
    Course, CourseId, CoursePatch, Enrollment, EnrollmentId, NewCourse, NewEnrollment, NewStudent,
    NewTeacher, Student, StudentId, StudentPatch, Teacher, TeacherId, TeacherPatch,
};

use crate::client::HttpClient;
use crate::error::Result;

/// List/create/update/delete for students, teachers and courses, plus
/// list/create/delete for enrollments.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    async fn list_students(&self) -> Result<Vec<Student>>;
    async fn create_student(&self, student: &NewStudent) -> Result<Student>;
    async fn update_student(&self, id: StudentId, patch: &StudentPatch) -> Result<Student>;
    async fn delete_student(&self, id: StudentId) -> Result<()>;

    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    async fn create_teacher(&self, teacher: &NewTeacher) -> Result<Teacher>;
    async fn update_teacher(&self, id: TeacherId, patch: &TeacherPatch) -> Result<Teacher>;
    async fn delete_teacher(&self, id: TeacherId) -> Result<()>;

    async fn list_courses(&self) -> Result<Vec<Course>>;
    async fn create_course(&self, course: &NewCourse) -> Result<Course>;
    async fn update_course(&self, id: CourseId, patch: &CoursePatch) -> Result<Course>;
    async fn delete_course(&self, id: CourseId) -> Result<()>;

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>>;
    async fn create_enrollment(&self, enrollment: &NewEnrollment) -> Result<Enrollment>;
    async fn delete_enrollment(&self, id: EnrollmentId) -> Result<()>;
}

#[async_trait]
impl ResourceApi for HttpClient {
    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list::<Student>().await
    }

    async fn create_student(&self, student: &NewStudent) -> Result<Student> {
        self.create::<Student>(student).await
    }

    async fn update_student(&self, id: StudentId, patch: &StudentPatch) -> Result<Student> {
        self.update::<Student>(id, patch).await
    }

    async fn delete_student(&self, id: StudentId) -> Result<()> {
        self.delete::<Student>(id).await
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list::<Teacher>().await
    }

    async fn create_teacher(&self, teacher: &NewTeacher) -> Result<Teacher> {
        self.create::<Teacher>(teacher).await
    }

    async fn update_teacher(&self, id: TeacherId, patch: &TeacherPatch) -> Result<Teacher> {
        self.update::<Teacher>(id, patch).await
    }

    async fn delete_teacher(&self, id: TeacherId) -> Result<()> {
        self.delete::<Teacher>(id).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list::<Course>().await
    }

    async fn create_course(&self, course: &NewCourse) -> Result<Course> {
        self.create::<Course>(course).await
    }

    async fn update_course(&self, id: CourseId, patch: &CoursePatch) -> Result<Course> {
        self.update::<Course>(id, patch).await
    }

    async fn delete_course(&self, id: CourseId) -> Result<()> {
        self.delete::<Course>(id).await
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>> {
        self.list::<Enrollment>().await
    }

    async fn create_enrollment(&self, enrollment: &NewEnrollment) -> Result<Enrollment> {
        self.create::<Enrollment>(enrollment).await
    }

    async fn delete_enrollment(&self, id: EnrollmentId) -> Result<()> {
        self.delete::<Enrollment>(id).await
    }
}
