//! One-shot subcommands.
//!
//! Each command returns the text to print on success. A failed mutation is
//! an error; a saved mutation whose reload failed yields a warning instead
//! of a stale table.

use anyhow::{Context, Result, anyhow, bail};
use enroll_admin::form::{CourseField, StudentField, TeacherField};
use enroll_admin::{
    AdminError, CourseMessage, EnrollmentMessage, Message, RefreshOutcome, Shell, StudentMessage,
    TeacherMessage,
};
use enroll_client::{ApiConfig, HttpClient};
use enroll_model::{
    CourseId, CoursePatch, EnrollmentId, Resource, StudentId, StudentPatch, TeacherId,
    TeacherPatch,
};
use tracing::{debug, info, warn};

use crate::cli::{
    AddCommand, AddCourseArgs, AddEnrollmentArgs, AddStudentArgs, AddTeacherArgs, Cli,
    UpdateCommand, UpdateCourseArgs, UpdateStudentArgs, UpdateTeacherArgs,
};
use crate::render::{render_header, render_table};
use crate::repl::{operator_message, run_session};
use crate::settings::Settings;

/// Settings file plus the `--api-url`/`ENROLL_API_URL` override.
pub fn api_config(cli: &Cli) -> ApiConfig {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    settings.api_config(cli.api_url.as_deref())
}

fn client(config: ApiConfig) -> Result<HttpClient> {
    HttpClient::new(config)
        .map_err(|e| {
            debug!(error = %e, "API client rejected its settings");
            anyhow!(e.user_message().to_string())
        })
        .context("failed to configure the API client")
}

fn connect(config: ApiConfig) -> Result<Shell<HttpClient>> {
    Ok(Shell::new(client(config)?))
}

/// Shell with a loaded snapshot. A failed initial load is fatal here.
async fn loaded(config: ApiConfig) -> Result<Shell<HttpClient>> {
    let mut shell = connect(config)?;
    if shell.refresh().await == RefreshOutcome::Retained {
        bail!(
            "failed to load data from {}; check that the API server is reachable",
            shell.api().config().base_url
        );
    }
    Ok(shell)
}

/// Shell failures carry the operator message; the detail is logged.
fn operator_error(error: &AdminError) -> anyhow::Error {
    anyhow!(operator_message(error))
}

fn view(shell: &mut Shell<HttpClient>, resource: Resource) -> String {
    shell.select_view(resource);
    format!(
        "{}\n{}",
        render_header(&shell.header()),
        render_table(&shell.table())
    )
}

/// Table after a saved change, or a warning when the reload failed and the
/// table would be stale.
fn after_change(shell: &mut Shell<HttpClient>, resource: Resource, done: &str) -> String {
    if shell.last_refresh() == Some(RefreshOutcome::Applied) {
        return view(shell, resource);
    }
    warn!(%resource, "change saved but the reload failed");
    format!(
        "warning: {done}, but reloading from {} failed; run `enroll-admin list {resource}` \
         once the API server is reachable",
        shell.api().config().base_url
    )
}

pub async fn run_list(config: ApiConfig, resource: Resource) -> Result<String> {
    let mut shell = loaded(config).await?;
    Ok(view(&mut shell, resource))
}

pub async fn run_shell(config: ApiConfig) -> Result<()> {
    info!(base_url = %config.base_url, "starting interactive session");
    let mut shell = Shell::mount(client(config)?).await;
    run_session(&mut shell).await
}

/// Fills the matching form field by field and submits it.
pub async fn run_add(config: ApiConfig, command: AddCommand) -> Result<String> {
    let mut shell = connect(config)?;
    let (resource, messages) = match command {
        AddCommand::Student(args) => (Resource::Students, student_messages(args)),
        AddCommand::Teacher(args) => (Resource::Teachers, teacher_messages(args)),
        AddCommand::Course(args) => (Resource::Courses, course_messages(args)),
        AddCommand::Enrollment(args) => (Resource::Enrollments, enrollment_messages(&args)),
    };
    let singular = resource.singular().to_lowercase();
    for message in messages {
        shell
            .update(message)
            .await
            .map_err(|e| operator_error(&e))
            .with_context(|| format!("failed to add {singular}"))?;
    }
    Ok(after_change(&mut shell, resource, &format!("{singular} added")))
}

fn student_messages(args: AddStudentArgs) -> Vec<Message> {
    vec![
        StudentMessage::FieldChanged(StudentField::FirstName, args.first_name).into(),
        StudentMessage::FieldChanged(StudentField::LastName, args.last_name).into(),
        StudentMessage::FieldChanged(StudentField::Email, args.email).into(),
        StudentMessage::FieldChanged(StudentField::Age, args.age).into(),
        StudentMessage::Submit.into(),
    ]
}

fn teacher_messages(args: AddTeacherArgs) -> Vec<Message> {
    vec![
        TeacherMessage::FieldChanged(TeacherField::Name, args.name).into(),
        TeacherMessage::FieldChanged(TeacherField::Email, args.email).into(),
        TeacherMessage::Submit.into(),
    ]
}

fn course_messages(args: AddCourseArgs) -> Vec<Message> {
    vec![
        CourseMessage::FieldChanged(CourseField::Name, args.name).into(),
        CourseMessage::FieldChanged(CourseField::Units, args.units).into(),
        CourseMessage::FieldChanged(CourseField::Teacher, args.teacher).into(),
        CourseMessage::Submit.into(),
    ]
}

fn enrollment_messages(args: &AddEnrollmentArgs) -> Vec<Message> {
    vec![
        EnrollmentMessage::StudentSelected(args.student.map(StudentId::new)).into(),
        EnrollmentMessage::CourseSelected(args.course.map(CourseId::new)).into(),
        EnrollmentMessage::Submit.into(),
    ]
}

/// Sends only the fields that were given.
pub async fn run_update(config: ApiConfig, command: UpdateCommand) -> Result<String> {
    let mut shell = connect(config)?;
    let (resource, id) = match command {
        UpdateCommand::Student(UpdateStudentArgs {
            id,
            first_name,
            last_name,
            email,
            age,
        }) => {
            let patch = StudentPatch {
                first_name,
                last_name,
                email,
                age,
            };
            ensure_fields(patch.is_empty())?;
            shell
                .update_student(StudentId::new(id), &patch)
                .await
                .map_err(|e| operator_error(&e))
                .with_context(|| format!("failed to update student {id}"))?;
            (Resource::Students, id)
        }
        UpdateCommand::Teacher(UpdateTeacherArgs { id, name, email }) => {
            let patch = TeacherPatch {
                teacher_name: name,
                email,
            };
            ensure_fields(patch.is_empty())?;
            shell
                .update_teacher(TeacherId::new(id), &patch)
                .await
                .map_err(|e| operator_error(&e))
                .with_context(|| format!("failed to update teacher {id}"))?;
            (Resource::Teachers, id)
        }
        UpdateCommand::Course(UpdateCourseArgs {
            id,
            name,
            units,
            teacher,
        }) => {
            let patch = CoursePatch {
                course_name: name,
                units,
                teacher: teacher.map(TeacherId::new),
            };
            ensure_fields(patch.is_empty())?;
            shell
                .update_course(CourseId::new(id), &patch)
                .await
                .map_err(|e| operator_error(&e))
                .with_context(|| format!("failed to update course {id}"))?;
            (Resource::Courses, id)
        }
    };
    let done = format!("{} {id} updated", resource.singular().to_lowercase());
    Ok(after_change(&mut shell, resource, &done))
}

fn ensure_fields(empty: bool) -> Result<()> {
    if empty {
        bail!("nothing to update; pass at least one field flag");
    }
    Ok(())
}

pub async fn run_delete(config: ApiConfig, resource: Resource, id: i64) -> Result<String> {
    let mut shell = connect(config)?;
    let message: Message = match resource {
        Resource::Students => StudentMessage::DeleteClicked(StudentId::new(id)).into(),
        Resource::Teachers => TeacherMessage::DeleteClicked(TeacherId::new(id)).into(),
        Resource::Courses => CourseMessage::DeleteClicked(CourseId::new(id)).into(),
        Resource::Enrollments => EnrollmentMessage::DeleteClicked(EnrollmentId::new(id)).into(),
    };
    let singular = resource.singular().to_lowercase();
    shell
        .update(message)
        .await
        .map_err(|e| operator_error(&e))
        .with_context(|| format!("failed to delete {singular} {id}"))?;
    Ok(after_change(&mut shell, resource, &format!("{singular} {id} deleted")))
}
