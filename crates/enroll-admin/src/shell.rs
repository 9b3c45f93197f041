//! The application shell.
//!
//! The shell owns the snapshot of all four collections, the active view and
//! one form per resource. Every mutation follows the same pattern: call the
//! resource API, and once it succeeds re-fetch everything. A failed mutation
//! returns its error and skips the refresh. A follow-up refresh that fails
//! does not fail the mutation; it shows up in [`Shell::last_refresh`].

use enroll_client::{ClientError, ResourceApi};
use enroll_model::{
    CourseId, CoursePatch, EnrollmentId, NewCourse, NewEnrollment, NewStudent, NewTeacher,
    Resource, StudentId, StudentPatch, TeacherId, TeacherPatch,
};
use tracing::{error, info};

use crate::error::AdminError;
use crate::form::{CourseForm, EnrollmentForm, StudentForm, TeacherForm};
use crate::snapshot::Snapshot;
use crate::table::{TableView, table_for};

/// Result of a combined refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// All four lists arrived and replaced the snapshot.
    Applied,
    /// At least one list failed; the previous snapshot was kept.
    Retained,
}

/// Summary shown above the active table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: &'static str,
    pub subtitle: String,
    pub total_entries: usize,
}

pub struct Shell<A> {
    api: A,
    snapshot: Snapshot,
    active_view: Resource,
    last_refresh: Option<RefreshOutcome>,
    pub(crate) students: StudentForm,
    pub(crate) teachers: TeacherForm,
    pub(crate) courses: CourseForm,
    pub(crate) enrollments: EnrollmentForm,
}

impl<A: ResourceApi> Shell<A> {
    /// A shell with empty collections. Nothing is fetched until
    /// [`refresh`](Self::refresh) runs.
    pub fn new(api: A) -> Self {
        Self {
            api,
            snapshot: Snapshot::default(),
            active_view: Resource::default(),
            last_refresh: None,
            students: StudentForm::default(),
            teachers: TeacherForm::default(),
            courses: CourseForm::default(),
            enrollments: EnrollmentForm::default(),
        }
    }

    /// Builds the shell and performs the initial combined fetch.
    pub async fn mount(api: A) -> Self {
        let mut shell = Self::new(api);
        shell.refresh().await;
        shell
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn active_view(&self) -> Resource {
        self.active_view
    }

    /// Outcome of the most recent refresh, `None` before the first one.
    pub fn last_refresh(&self) -> Option<RefreshOutcome> {
        self.last_refresh
    }

    pub fn select_view(&mut self, view: Resource) {
        self.active_view = view;
    }

    pub fn student_form(&self) -> &StudentForm {
        &self.students
    }

    pub fn teacher_form(&self) -> &TeacherForm {
        &self.teachers
    }

    pub fn course_form(&self) -> &CourseForm {
        &self.courses
    }

    pub fn enrollment_form(&self) -> &EnrollmentForm {
        &self.enrollments
    }

    pub fn header(&self) -> Header {
        Header {
            title: self.active_view.label(),
            subtitle: format!("Organize and modify university {} data.", self.active_view),
            total_entries: self.snapshot.count(self.active_view),
        }
    }

    /// Table for the active view.
    pub fn table(&self) -> TableView {
        table_for(&self.snapshot, self.active_view)
    }

    pub fn table_for(&self, resource: Resource) -> TableView {
        table_for(&self.snapshot, resource)
    }

    // ========================================================================
    // Refresh
    // ========================================================================

    /// Fetches all four collections concurrently. Fails as a whole if any
    /// single list fails.
    pub async fn fetch_all(&self) -> Result<Snapshot, ClientError> {
        let (students, teachers, courses, enrollments) = tokio::try_join!(
            self.api.list_students(),
            self.api.list_teachers(),
            self.api.list_courses(),
            self.api.list_enrollments(),
        )?;
        Ok(Snapshot {
            students,
            teachers,
            courses,
            enrollments,
        })
    }

    /// Replaces the snapshot from a fresh combined fetch.
    ///
    /// Failures are logged and swallowed; the previous snapshot stays.
    pub async fn refresh(&mut self) -> RefreshOutcome {
        let outcome = match self.fetch_all().await {
            Ok(snapshot) => {
                info!(
                    students = snapshot.students.len(),
                    teachers = snapshot.teachers.len(),
                    courses = snapshot.courses.len(),
                    enrollments = snapshot.enrollments.len(),
                    "snapshot refreshed"
                );
                self.snapshot = snapshot;
                RefreshOutcome::Applied
            }
            Err(err) => {
                error!(error = %err, "failed to load data; check that the API server is reachable");
                RefreshOutcome::Retained
            }
        };
        self.last_refresh = Some(outcome);
        outcome
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    pub async fn add_student(&mut self, student: &NewStudent) -> Result<(), AdminError> {
        let created = self.api.create_student(student).await?;
        info!(id = %created.id, "student created");
        self.refresh().await;
        Ok(())
    }

    pub async fn update_student(
        &mut self,
        id: StudentId,
        patch: &StudentPatch,
    ) -> Result<(), AdminError> {
        self.api.update_student(id, patch).await?;
        info!(%id, "student updated");
        self.refresh().await;
        Ok(())
    }

    pub async fn delete_student(&mut self, id: StudentId) -> Result<(), AdminError> {
        self.api.delete_student(id).await?;
        info!(%id, "student deleted");
        self.refresh().await;
        Ok(())
    }

    pub async fn add_teacher(&mut self, teacher: &NewTeacher) -> Result<(), AdminError> {
        let created = self.api.create_teacher(teacher).await?;
        info!(id = %created.id, "teacher created");
        self.refresh().await;
        Ok(())
    }

    pub async fn update_teacher(
        &mut self,
        id: TeacherId,
        patch: &TeacherPatch,
    ) -> Result<(), AdminError> {
        self.api.update_teacher(id, patch).await?;
        info!(%id, "teacher updated");
        self.refresh().await;
        Ok(())
    }

    pub async fn delete_teacher(&mut self, id: TeacherId) -> Result<(), AdminError> {
        self.api.delete_teacher(id).await?;
        info!(%id, "teacher deleted");
        self.refresh().await;
        Ok(())
    }

    pub async fn add_course(&mut self, course: &NewCourse) -> Result<(), AdminError> {
        let created = self.api.create_course(course).await?;
        info!(id = %created.id, "course created");
        self.refresh().await;
        Ok(())
    }

    pub async fn update_course(
        &mut self,
        id: CourseId,
        patch: &CoursePatch,
    ) -> Result<(), AdminError> {
        self.api.update_course(id, patch).await?;
        info!(%id, "course updated");
        self.refresh().await;
        Ok(())
    }

    pub async fn delete_course(&mut self, id: CourseId) -> Result<(), AdminError> {
        self.api.delete_course(id).await?;
        info!(%id, "course deleted");
        self.refresh().await;
        Ok(())
    }

    pub async fn add_enrollment(&mut self, enrollment: &NewEnrollment) -> Result<(), AdminError> {
        let created = self.api.create_enrollment(enrollment).await?;
        info!(id = %created.id, "enrollment created");
        self.refresh().await;
        Ok(())
    }

    pub async fn delete_enrollment(&mut self, id: EnrollmentId) -> Result<(), AdminError> {
        self.api.delete_enrollment(id).await?;
        info!(%id, "enrollment deleted");
        self.refresh().await;
        Ok(())
    }
}
