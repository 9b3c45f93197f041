//! CLI argument definitions for the enrollment admin.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use enroll_model::Resource;

#[derive(Parser)]
#[command(
    name = "enroll-admin",
    version,
    about = "University enrollment admin - manage students, teachers, courses and enrollments",
    long_about = "Manage the students, teachers, courses and enrollments of a university \
                  enrollment API.\n\n\
                  Every change is followed by a full reload from the API. Use `shell` for \
                  an interactive session."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Base URL of the enrollment API (overrides the settings file).
    #[arg(long = "api-url", value_name = "URL", env = "ENROLL_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Settings file to read instead of the default location.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one resource table.
    List {
        #[arg(value_name = "RESOURCE")]
        resource: Resource,
    },

    /// Create a record through its form.
    #[command(subcommand)]
    Add(AddCommand),

    /// Change some fields of an existing record.
    #[command(subcommand)]
    Update(UpdateCommand),

    /// Delete a record.
    Delete {
        #[arg(value_name = "RESOURCE")]
        resource: Resource,
        #[arg(value_name = "ID")]
        id: i64,
    },

    /// Start an interactive session.
    Shell,
}

#[derive(Subcommand)]
pub enum AddCommand {
    Student(AddStudentArgs),
    Teacher(AddTeacherArgs),
    Course(AddCourseArgs),
    Enrollment(AddEnrollmentArgs),
}

/// Form fields are taken as text and validated like interactive input.
#[derive(Args)]
pub struct AddStudentArgs {
    #[arg(long = "first-name", default_value = "")]
    pub first_name: String,
    #[arg(long = "last-name", default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub age: String,
}

#[derive(Args)]
pub struct AddTeacherArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
}

#[derive(Args)]
pub struct AddCourseArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub units: String,
    /// Teacher id.
    #[arg(long, default_value = "")]
    pub teacher: String,
}

#[derive(Args)]
pub struct AddEnrollmentArgs {
    /// Student id.
    #[arg(long)]
    pub student: Option<i64>,
    /// Course id.
    #[arg(long)]
    pub course: Option<i64>,
}

#[derive(Subcommand)]
pub enum UpdateCommand {
    Student(UpdateStudentArgs),
    Teacher(UpdateTeacherArgs),
    Course(UpdateCourseArgs),
}

#[derive(Args)]
pub struct UpdateStudentArgs {
    pub id: i64,
    #[arg(long = "first-name")]
    pub first_name: Option<String>,
    #[arg(long = "last-name")]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub age: Option<i64>,
}

#[derive(Args)]
pub struct UpdateTeacherArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Args)]
pub struct UpdateCourseArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub units: Option<i64>,
    /// Teacher id.
    #[arg(long)]
    pub teacher: Option<i64>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
