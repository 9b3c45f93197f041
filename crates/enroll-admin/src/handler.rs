//! Message handlers.
//!
//! Field edits and selections only touch the form. Submits validate through
//! the form first, so a local failure returns before any request is sent;
//! the form is cleared only after the mutation succeeded.

use enroll_client::ResourceApi;
use enroll_model::Resource;
use tracing::debug;

use crate::error::AdminError;
use crate::form::Submission;
use crate::message::{CourseMessage, EnrollmentMessage, Message, StudentMessage, TeacherMessage};
use crate::shell::Shell;

impl<A: ResourceApi> Shell<A> {
    /// Applies one message.
    pub async fn update(&mut self, message: Message) -> Result<(), AdminError> {
        match message {
            Message::SelectView(view) => {
                self.select_view(view);
                Ok(())
            }
            Message::Refresh => {
                self.refresh().await;
                Ok(())
            }
            Message::Student(msg) => self.handle_student_message(msg).await,
            Message::Teacher(msg) => self.handle_teacher_message(msg).await,
            Message::Course(msg) => self.handle_course_message(msg).await,
            Message::Enrollment(msg) => self.handle_enrollment_message(msg).await,
        }
    }

    async fn handle_student_message(&mut self, msg: StudentMessage) -> Result<(), AdminError> {
        match msg {
            StudentMessage::FieldChanged(field, value) => {
                self.students.set(field, value);
                Ok(())
            }
            StudentMessage::EditClicked(id) => {
                let student = self
                    .snapshot()
                    .student(id)
                    .cloned()
                    .ok_or(AdminError::RowNotFound {
                        resource: Resource::Students,
                        id: id.get(),
                    })?;
                debug!(%id, "editing student");
                self.students.begin_edit(&student);
                Ok(())
            }
            StudentMessage::DeleteClicked(id) => self.delete_student(id).await,
            StudentMessage::Cancel => {
                self.students.cancel();
                Ok(())
            }
            StudentMessage::Submit => {
                match self.students.prepare()? {
                    Submission::Create(student) => self.add_student(&student).await?,
                    Submission::Update(id, patch) => self.update_student(id, &patch).await?,
                }
                self.students.complete();
                Ok(())
            }
        }
    }

    async fn handle_teacher_message(&mut self, msg: TeacherMessage) -> Result<(), AdminError> {
        match msg {
            TeacherMessage::FieldChanged(field, value) => {
                self.teachers.set(field, value);
                Ok(())
            }
            TeacherMessage::EditClicked(id) => {
                let teacher = self
                    .snapshot()
                    .teacher(id)
                    .cloned()
                    .ok_or(AdminError::RowNotFound {
                        resource: Resource::Teachers,
                        id: id.get(),
                    })?;
                debug!(%id, "editing teacher");
                self.teachers.begin_edit(&teacher);
                Ok(())
            }
            TeacherMessage::DeleteClicked(id) => self.delete_teacher(id).await,
            TeacherMessage::Submit => {
                match self.teachers.prepare()? {
                    Submission::Create(teacher) => self.add_teacher(&teacher).await?,
                    Submission::Update(id, patch) => self.update_teacher(id, &patch).await?,
                }
                self.teachers.complete();
                Ok(())
            }
        }
    }

    async fn handle_course_message(&mut self, msg: CourseMessage) -> Result<(), AdminError> {
        match msg {
            CourseMessage::FieldChanged(field, value) => {
                self.courses.set(field, value);
                Ok(())
            }
            CourseMessage::TeacherSelected(teacher) => {
                self.courses.select_teacher(teacher);
                Ok(())
            }
            CourseMessage::EditClicked(id) => {
                let course = self
                    .snapshot()
                    .course(id)
                    .cloned()
                    .ok_or(AdminError::RowNotFound {
                        resource: Resource::Courses,
                        id: id.get(),
                    })?;
                debug!(%id, "editing course");
                self.courses.begin_edit(&course);
                Ok(())
            }
            CourseMessage::DeleteClicked(id) => self.delete_course(id).await,
            CourseMessage::Submit => {
                match self.courses.prepare()? {
                    Submission::Create(course) => self.add_course(&course).await?,
                    Submission::Update(id, patch) => self.update_course(id, &patch).await?,
                }
                self.courses.complete();
                Ok(())
            }
        }
    }

    async fn handle_enrollment_message(
        &mut self,
        msg: EnrollmentMessage,
    ) -> Result<(), AdminError> {
        match msg {
            EnrollmentMessage::StudentSelected(student) => {
                self.enrollments.select_student(student);
                Ok(())
            }
            EnrollmentMessage::CourseSelected(course) => {
                self.enrollments.select_course(course);
                Ok(())
            }
            EnrollmentMessage::DeleteClicked(id) => self.delete_enrollment(id).await,
            EnrollmentMessage::Submit => {
                let enrollment = self.enrollments.prepare()?;
                self.add_enrollment(&enrollment).await?;
                self.enrollments.complete();
                Ok(())
            }
        }
    }
}
