//! Interactive session.
//!
//! Each input line is parsed into a [`ReplCommand`], turned into a shell
//! [`Message`] against the active view, applied, and the view re-rendered.

use anyhow::{Context, Result, anyhow, bail};
use enroll_admin::{
    AdminError, CourseMessage, EnrollmentMessage, Message, Shell, StudentMessage, TeacherMessage,
};
use enroll_client::ResourceApi;
use enroll_model::{CourseId, EnrollmentId, Resource, StudentId, TeacherId};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::render_view;

pub const HELP: &str = "\
commands:
  view <students|teachers|courses|enrollments>   switch the active view
  refresh                                        re-fetch every collection
  set <field> <value>                            fill a field of the active form
  edit <id>                                      load a row into the active form
  cancel                                         leave edit mode (students)
  submit                                         add or update from the active form
  delete <id>                                    delete a row of the active view
  select student|course <id|none>                pick the enrollment selections
  select teacher <id|none>                       pick the course form's teacher
  help                                           show this text
  quit                                           leave the session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectTarget {
    Student,
    Course,
    Teacher,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    View(Resource),
    Refresh,
    Set { field: String, value: String },
    Edit(i64),
    Cancel,
    Submit,
    Delete(i64),
    Select { target: SelectTarget, id: Option<i64> },
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ReplCommand>> {
    let line = line.trim();
    let Some((word, rest)) = split_word(line) else {
        return Ok(None);
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "view" => ReplCommand::View(rest.parse()?),
        "refresh" => ReplCommand::Refresh,
        "set" => {
            let (field, value) =
                split_word(rest).ok_or_else(|| anyhow!("usage: set <field> <value>"))?;
            ReplCommand::Set {
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "edit" => ReplCommand::Edit(parse_id(rest)?),
        "cancel" => ReplCommand::Cancel,
        "submit" => ReplCommand::Submit,
        "delete" | "unenroll" => ReplCommand::Delete(parse_id(rest)?),
        "select" => {
            let (target, id) = split_word(rest)
                .ok_or_else(|| anyhow!("usage: select student|course|teacher <id|none>"))?;
            let target = match target.to_ascii_lowercase().as_str() {
                "student" => SelectTarget::Student,
                "course" => SelectTarget::Course,
                "teacher" => SelectTarget::Teacher,
                other => bail!("cannot select {other:?}; expected student, course or teacher"),
            };
            let id = if id.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(parse_id(id)?)
            };
            ReplCommand::Select { target, id }
        }
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => bail!("unknown command {other:?}; type `help` for a list"),
    };
    Ok(Some(command))
}

fn split_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    Some(match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    })
}

fn parse_id(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        bail!("missing id");
    }
    raw.parse()
        .with_context(|| format!("{raw:?} is not a numeric id"))
}

/// Maps a command onto a shell message for the given active view.
///
/// `Help` and `Quit` are handled by the session loop and have no message.
pub fn to_message(command: ReplCommand, view: Resource) -> Result<Message> {
    Ok(match command {
        ReplCommand::View(resource) => Message::SelectView(resource),
        ReplCommand::Refresh => Message::Refresh,
        ReplCommand::Set { field, value } => match view {
            Resource::Students => {
                StudentMessage::FieldChanged(field.parse().map_err(|e: String| anyhow!(e))?, value)
                    .into()
            }
            Resource::Teachers => {
                TeacherMessage::FieldChanged(field.parse().map_err(|e: String| anyhow!(e))?, value)
                    .into()
            }
            Resource::Courses => {
                CourseMessage::FieldChanged(field.parse().map_err(|e: String| anyhow!(e))?, value)
                    .into()
            }
            Resource::Enrollments => bail!("use `select student|course <id>` for enrollments"),
        },
        ReplCommand::Edit(id) => match view {
            Resource::Students => StudentMessage::EditClicked(StudentId::new(id)).into(),
            Resource::Teachers => TeacherMessage::EditClicked(TeacherId::new(id)).into(),
            Resource::Courses => CourseMessage::EditClicked(CourseId::new(id)).into(),
            Resource::Enrollments => bail!("enrollments cannot be edited"),
        },
        ReplCommand::Cancel => match view {
            Resource::Students => StudentMessage::Cancel.into(),
            other => bail!("the {} form has no cancel", other.singular().to_lowercase()),
        },
        ReplCommand::Submit => match view {
            Resource::Students => StudentMessage::Submit.into(),
            Resource::Teachers => TeacherMessage::Submit.into(),
            Resource::Courses => CourseMessage::Submit.into(),
            Resource::Enrollments => EnrollmentMessage::Submit.into(),
        },
        ReplCommand::Delete(id) => match view {
            Resource::Students => StudentMessage::DeleteClicked(StudentId::new(id)).into(),
            Resource::Teachers => TeacherMessage::DeleteClicked(TeacherId::new(id)).into(),
            Resource::Courses => CourseMessage::DeleteClicked(CourseId::new(id)).into(),
            Resource::Enrollments => {
                EnrollmentMessage::DeleteClicked(EnrollmentId::new(id)).into()
            }
        },
        ReplCommand::Select { target, id } => match target {
            SelectTarget::Student => {
                EnrollmentMessage::StudentSelected(id.map(StudentId::new)).into()
            }
            SelectTarget::Course => EnrollmentMessage::CourseSelected(id.map(CourseId::new)).into(),
            SelectTarget::Teacher => CourseMessage::TeacherSelected(id.map(TeacherId::new)).into(),
        },
        ReplCommand::Help | ReplCommand::Quit => bail!("help and quit are handled by the session"),
    })
}

/// Text shown to the operator for a failed message. API failures use the
/// client's short message; the full error goes to the debug log.
pub fn operator_message(error: &AdminError) -> String {
    match error {
        AdminError::Client(client) => {
            tracing::debug!(error = %client, "API request failed");
            client.user_message().to_string()
        }
        other => other.to_string(),
    }
}

/// Prefix for a failed message: local rejections are alerts.
pub fn failure_line(error: &AdminError) -> String {
    let prefix = if error.is_local() { "alert" } else { "error" };
    format!("{prefix}: {}", operator_message(error))
}

/// Runs the session on stdin until `quit` or end of input.
pub async fn run_session<A: ResourceApi>(shell: &mut Shell<A>) -> Result<()> {
    println!("{}", render_view(shell));
    println!("type `help` for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                println!("alert: {error}");
                continue;
            }
        };
        match command {
            ReplCommand::Quit => break,
            ReplCommand::Help => {
                println!("{HELP}");
                continue;
            }
            _ => {}
        }
        let message = match to_message(command, shell.active_view()) {
            Ok(message) => message,
            Err(error) => {
                println!("alert: {error}");
                continue;
            }
        };
        if let Err(error) = shell.update(message).await {
            println!("{}", failure_line(&error));
        }
        println!("{}", render_view(shell));
    }
    Ok(())
}
