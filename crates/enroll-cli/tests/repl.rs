//! Integration tests for the interactive command parser.

use enroll_admin::form::{CourseField, StudentField};
use enroll_admin::{
    AdminError, CourseMessage, EnrollmentMessage, FormError, Message, StudentMessage,
    TeacherMessage,
};
use enroll_client::ClientError;
use enroll_cli::repl::{
    ReplCommand, SelectTarget, failure_line, operator_message, parse_command, to_message,
};
use enroll_model::{CourseId, EnrollmentId, Resource, StudentId, TeacherId};

fn parse(line: &str) -> ReplCommand {
    parse_command(line).unwrap().unwrap()
}

#[test]
fn test_blank_line_is_ignored() {
    assert_eq!(parse_command("").unwrap(), None);
    assert_eq!(parse_command("   \t").unwrap(), None);
}

#[test]
fn test_view_accepts_singular_and_plural() {
    assert_eq!(parse("view courses"), ReplCommand::View(Resource::Courses));
    assert_eq!(parse("VIEW Teacher"), ReplCommand::View(Resource::Teachers));
    assert!(parse_command("view grades").is_err());
}

#[test]
fn test_set_keeps_value_spaces() {
    assert_eq!(
        parse("set last_name van der Berg"),
        ReplCommand::Set {
            field: "last_name".to_string(),
            value: "van der Berg".to_string(),
        }
    );
    assert!(parse_command("set").is_err());
}

#[test]
fn test_select_none_clears() {
    assert_eq!(
        parse("select course none"),
        ReplCommand::Select {
            target: SelectTarget::Course,
            id: None,
        }
    );
    assert_eq!(
        parse("select student 4"),
        ReplCommand::Select {
            target: SelectTarget::Student,
            id: Some(4),
        }
    );
    assert_eq!(
        parse("select teacher 1"),
        ReplCommand::Select {
            target: SelectTarget::Teacher,
            id: Some(1),
        }
    );
    assert!(parse_command("select grade 1").is_err());
}

#[test]
fn test_ids_must_be_numeric() {
    assert_eq!(parse("edit 12"), ReplCommand::Edit(12));
    assert_eq!(parse("unenroll 3"), ReplCommand::Delete(3));
    assert!(parse_command("delete abc").is_err());
    assert!(parse_command("edit").is_err());
}

#[test]
fn test_unknown_command() {
    let error = parse_command("frobnicate").unwrap_err();
    assert!(error.to_string().contains("unknown command"));
}

#[test]
fn test_messages_follow_active_view() {
    assert_eq!(
        to_message(parse("set age 20"), Resource::Students).unwrap(),
        Message::Student(StudentMessage::FieldChanged(
            StudentField::Age,
            "20".to_string()
        ))
    );
    assert_eq!(
        to_message(parse("set teacher 2"), Resource::Courses).unwrap(),
        Message::Course(CourseMessage::FieldChanged(
            CourseField::Teacher,
            "2".to_string()
        ))
    );
    assert_eq!(
        to_message(parse("edit 7"), Resource::Teachers).unwrap(),
        Message::Teacher(TeacherMessage::EditClicked(TeacherId::new(7)))
    );
    assert_eq!(
        to_message(parse("delete 3"), Resource::Enrollments).unwrap(),
        Message::Enrollment(EnrollmentMessage::DeleteClicked(EnrollmentId::new(3)))
    );
    assert_eq!(
        to_message(parse("submit"), Resource::Enrollments).unwrap(),
        Message::Enrollment(EnrollmentMessage::Submit)
    );
}

#[test]
fn test_select_works_from_any_view() {
    assert_eq!(
        to_message(parse("select student 1"), Resource::Courses).unwrap(),
        Message::Enrollment(EnrollmentMessage::StudentSelected(Some(StudentId::new(1))))
    );
    assert_eq!(
        to_message(parse("select course 5"), Resource::Students).unwrap(),
        Message::Enrollment(EnrollmentMessage::CourseSelected(Some(CourseId::new(5))))
    );
    assert_eq!(
        to_message(parse("select teacher none"), Resource::Enrollments).unwrap(),
        Message::Course(CourseMessage::TeacherSelected(None))
    );
    assert_eq!(
        to_message(parse("select teacher 2"), Resource::Courses).unwrap(),
        Message::Course(CourseMessage::TeacherSelected(Some(TeacherId::new(2))))
    );
}

#[test]
fn test_view_specific_rejections() {
    assert!(to_message(parse("cancel"), Resource::Teachers).is_err());
    assert!(to_message(parse("edit 1"), Resource::Enrollments).is_err());
    assert!(to_message(parse("set name x"), Resource::Enrollments).is_err());
    assert!(to_message(parse("set grade A"), Resource::Students).is_err());
    assert!(to_message(parse("quit"), Resource::Students).is_err());
}

#[test]
fn test_failure_lines() {
    let local = AdminError::Validation(FormError::MissingFields);
    insta::assert_snapshot!(failure_line(&local), @"alert: Please fill in all fields");

    let remote = AdminError::Client(ClientError::Network("connection refused".to_string()));
    insta::assert_snapshot!(failure_line(&remote), @"error: Could not reach the API server. Is it running?");

    let missing = AdminError::Client(ClientError::Status {
        resource: Resource::Courses,
        status: 404,
        body: "{\"detail\":\"Not found.\"}".to_string(),
    });
    insta::assert_snapshot!(failure_line(&missing), @"error: The record no longer exists.");

    let unknown = AdminError::RowNotFound {
        resource: Resource::Teachers,
        id: 9,
    };
    assert_eq!(operator_message(&unknown), unknown.to_string());
}
