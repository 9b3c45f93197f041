//! One-shot commands against an in-process fake API.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::routing::{get, put};
use axum::{Json, Router};
use clap::Parser;
use serde_json::{Value, json};

use enroll_cli::cli::{AddCommand, Cli, Command, UpdateCommand};
use enroll_cli::commands::{run_add, run_delete, run_list, run_update};
use enroll_client::ApiConfig;
use enroll_model::Resource;

type Request = (String, String, Option<Value>);

#[derive(Clone, Default)]
struct FakeApi {
    inner: Arc<Mutex<FakeState>>,
}

#[derive(Default)]
struct FakeState {
    rows: BTreeMap<String, Vec<Value>>,
    next_id: i64,
    requests: Vec<Request>,
    failing_lists: bool,
}

impl FakeApi {
    fn seed(&self, resource: &str, rows: Vec<Value>) {
        self.inner
            .lock()
            .unwrap()
            .rows
            .insert(resource.to_string(), rows);
    }

    /// Every `GET` answers 503; writes still succeed.
    fn fail_lists(&self) {
        self.inner.lock().unwrap().failing_lists = true;
    }

    fn requests(&self) -> Vec<Request> {
        self.inner.lock().unwrap().requests.clone()
    }

    fn record(&self, method: &Method, uri: &Uri, body: Option<Value>) {
        self.inner
            .lock()
            .unwrap()
            .requests
            .push((method.to_string(), uri.path().to_string(), body));
    }
}

fn id_key(resource: &str) -> String {
    format!("{}_id", resource.trim_end_matches('s'))
}

async fn list(
    State(api): State<FakeApi>,
    method: Method,
    uri: Uri,
    Path(resource): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    api.record(&method, &uri, None);
    let state = api.inner.lock().unwrap();
    if state.failing_lists {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    let rows = state.rows.get(&resource).cloned().unwrap_or_default();
    Ok(Json(Value::Array(rows)))
}

async fn create(
    State(api): State<FakeApi>,
    method: Method,
    uri: Uri,
    Path(resource): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    api.record(&method, &uri, Some(body.clone()));
    let mut state = api.inner.lock().unwrap();
    state.next_id += 1;
    let id = 100 + state.next_id;
    let mut row = body;
    row[id_key(&resource)] = json!(id);
    state.rows.entry(resource).or_default().push(row.clone());
    (StatusCode::CREATED, Json(row))
}

async fn update(
    State(api): State<FakeApi>,
    method: Method,
    uri: Uri,
    Path((resource, id)): Path<(String, i64)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    api.record(&method, &uri, Some(body.clone()));
    let key = id_key(&resource);
    let mut state = api.inner.lock().unwrap();
    let row = state
        .rows
        .get_mut(&resource)
        .and_then(|rows| rows.iter_mut().find(|row| row[&key] == json!(id)))
        .ok_or(StatusCode::NOT_FOUND)?;
    if let (Some(target), Some(fields)) = (row.as_object_mut(), body.as_object()) {
        for (name, value) in fields {
            target.insert(name.clone(), value.clone());
        }
    }
    Ok(Json(row.clone()))
}

async fn remove(
    State(api): State<FakeApi>,
    method: Method,
    uri: Uri,
    Path((resource, id)): Path<(String, i64)>,
) -> StatusCode {
    api.record(&method, &uri, None);
    let key = id_key(&resource);
    let mut state = api.inner.lock().unwrap();
    let Some(rows) = state.rows.get_mut(&resource) else {
        return StatusCode::NOT_FOUND;
    };
    let before = rows.len();
    rows.retain(|row| row[&key] != json!(id));
    if rows.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn spawn(api: FakeApi) -> ApiConfig {
    let app = Router::new()
        .route("/{resource}/", get(list).post(create))
        .route("/{resource}/{id}/", put(update).delete(remove))
        .with_state(api);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ApiConfig::new(format!("http://{addr}/"))
}

fn parse(args: &[&str]) -> Command {
    let argv = std::iter::once("enroll-admin").chain(args.iter().copied());
    Cli::try_parse_from(argv).unwrap().command
}

fn add(args: &[&str]) -> AddCommand {
    let Command::Add(command) = parse(args) else {
        panic!("not an add command: {args:?}");
    };
    command
}

fn update_command(args: &[&str]) -> UpdateCommand {
    let Command::Update(command) = parse(args) else {
        panic!("not an update command: {args:?}");
    };
    command
}

fn methods(requests: &[Request]) -> Vec<(&str, &str)> {
    requests
        .iter()
        .map(|(method, path, _)| (method.as_str(), path.as_str()))
        .collect()
}

fn seeded() -> FakeApi {
    let api = FakeApi::default();
    api.seed(
        "teachers",
        vec![json!({ "teacher_id": 2, "teacher_name": "Smith", "email": "smith@u.edu" })],
    );
    api.seed(
        "courses",
        vec![json!({ "course_id": 5, "course_name": "CS1", "units": 3, "teacher": 2 })],
    );
    api
}

// ============================================================================
// list
// ============================================================================

#[tokio::test]
async fn test_list_renders_the_requested_table() {
    let api = seeded();
    let config = spawn(api.clone()).await;

    let output = run_list(config, Resource::Courses).await.unwrap();

    assert!(output.starts_with("Courses\n"));
    assert!(output.contains("Total Entries: 1"));
    assert!(output.contains("CS1"));
    assert!(output.contains("ID: 2"));
    assert_eq!(api.requests().len(), 4);
}

#[tokio::test]
async fn test_list_fails_when_the_load_fails() {
    let api = seeded();
    api.fail_lists();
    let config = spawn(api.clone()).await;
    let base_url = config.base_url.clone();

    let error = run_list(config, Resource::Teachers).await.unwrap_err();

    let message = format!("{error:#}");
    assert!(message.starts_with("failed to load data from"), "{message}");
    assert!(message.contains(&base_url), "{message}");
}

#[tokio::test]
async fn test_bad_base_url_is_reported_before_any_request() {
    let error = run_list(ApiConfig::new("ftp://example.com"), Resource::Students)
        .await
        .unwrap_err();

    insta::assert_snapshot!(
        format!("{error:#}"),
        @"failed to configure the API client: The API address is not a valid http(s) URL."
    );
}

// ============================================================================
// add
// ============================================================================

#[tokio::test]
async fn test_add_teacher_posts_then_renders_reloaded_table() {
    let api = FakeApi::default();
    let config = spawn(api.clone()).await;

    let command = add(&["add", "teacher", "--name", "Lee", "--email", "lee@u.edu"]);
    let output = run_add(config, command).await.unwrap();

    assert!(output.starts_with("Teachers\n"));
    assert!(output.contains("Lee"));
    let requests = api.requests();
    assert_eq!(requests[0].0, "POST");
    assert_eq!(requests[0].1, "/teachers/");
    assert_eq!(
        requests[0].2,
        Some(json!({ "teacher_name": "Lee", "email": "lee@u.edu" }))
    );
    assert!(requests[1..].iter().all(|(method, _, _)| method == "GET"));
    assert_eq!(requests.len(), 5);
}

#[tokio::test]
async fn test_add_student_without_age_sends_nothing() {
    let api = FakeApi::default();
    let config = spawn(api.clone()).await;

    let command = add(&[
        "add",
        "student",
        "--first-name",
        "Ada",
        "--last-name",
        "Lovelace",
        "--email",
        "ada@u.edu",
    ]);
    let error = run_add(config, command).await.unwrap_err();

    insta::assert_snapshot!(format!("{error:#}"), @"failed to add student: Please fill in all fields");
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_add_with_failed_reload_warns_instead_of_printing_table() {
    let api = FakeApi::default();
    api.fail_lists();
    let config = spawn(api.clone()).await;

    let command = add(&["add", "teacher", "--name", "Lee", "--email", "lee@u.edu"]);
    let output = run_add(config, command).await.unwrap();

    assert!(output.starts_with("warning: teacher added, but reloading from"), "{output}");
    assert!(output.contains("enroll-admin list teachers"));
    assert!(!output.contains("Total Entries"));
    assert_eq!(methods(&api.requests())[0], ("POST", "/teachers/"));
}

// ============================================================================
// update and delete
// ============================================================================

#[tokio::test]
async fn test_update_without_fields_is_rejected() {
    let api = seeded();
    let config = spawn(api.clone()).await;

    let error = run_update(config, update_command(&["update", "teacher", "2"]))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "nothing to update; pass at least one field flag");
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_update_sends_only_given_fields() {
    let api = seeded();
    let config = spawn(api.clone()).await;

    let command = update_command(&["update", "course", "5", "--units", "4"]);
    let output = run_update(config, command).await.unwrap();

    assert!(output.contains("4 Units"));
    let requests = api.requests();
    assert_eq!(requests[0].1, "/courses/5/");
    assert_eq!(requests[0].2, Some(json!({ "units": 4 })));
}

#[tokio::test]
async fn test_delete_of_missing_row_shows_operator_message() {
    let api = seeded();
    let config = spawn(api.clone()).await;

    let error = run_delete(config, Resource::Courses, 77).await.unwrap_err();

    insta::assert_snapshot!(format!("{error:#}"), @"failed to delete course 77: The record no longer exists.");
    assert_eq!(methods(&api.requests()), vec![("DELETE", "/courses/77/")]);
}

#[tokio::test]
async fn test_delete_renders_remaining_rows() {
    let api = seeded();
    let config = spawn(api.clone()).await;

    let output = run_delete(config, Resource::Courses, 5).await.unwrap();

    assert!(output.contains("Total Entries: 0"));
    assert!(!output.contains("CS1"));
}
