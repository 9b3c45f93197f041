//! Integration tests for the HTTP client against an in-process fake API.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{Value, json};

use enroll_client::{ApiConfig, ClientError, HttpClient, ResourceApi};
use enroll_model::{
    CourseId, CoursePatch, EnrollmentId, NewTeacher, Resource, StudentId, TeacherId,
};

#[derive(Clone, Default)]
struct FakeApi {
    inner: Arc<Mutex<FakeState>>,
}

#[derive(Default)]
struct FakeState {
    rows: BTreeMap<String, Vec<Value>>,
    next_id: i64,
    requests: Vec<(String, String, Option<Value>)>,
    fail_with: Option<StatusCode>,
}

impl FakeApi {
    fn seed(&self, resource: &str, rows: Vec<Value>) {
        self.inner
            .lock()
            .unwrap()
            .rows
            .insert(resource.to_string(), rows);
    }

    fn fail_with(&self, status: StatusCode) {
        self.inner.lock().unwrap().fail_with = Some(status);
    }

    fn requests(&self) -> Vec<(String, String, Option<Value>)> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Records the request and returns the configured failure, if any.
    fn record(&self, method: &Method, uri: &Uri, body: Option<Value>) -> Result<(), StatusCode> {
        let mut state = self.inner.lock().unwrap();
        state
            .requests
            .push((method.to_string(), uri.path().to_string(), body));
        match state.fail_with {
            Some(status) => Err(status),
            None => Ok(()),
        }
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
    api.record(&method, &uri, None)?;
    let state = api.inner.lock().unwrap();
    let rows = state.rows.get(&resource).cloned().unwrap_or_default();
    Ok(Json(Value::Array(rows)))
}

async fn create(
    State(api): State<FakeApi>,
    method: Method,
    uri: Uri,
    Path(resource): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    api.record(&method, &uri, Some(body.clone()))?;
    let mut state = api.inner.lock().unwrap();
    state.next_id += 1;
    let id = 100 + state.next_id;
    let mut row = body;
    row[id_key(&resource)] = json!(id);
    state.rows.entry(resource).or_default().push(row.clone());
    Ok((StatusCode::CREATED, Json(row)))
}

async fn update(
    State(api): State<FakeApi>,
    method: Method,
    uri: Uri,
    Path((resource, id)): Path<(String, i64)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    api.record(&method, &uri, Some(body.clone()))?;
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
    if let Err(status) = api.record(&method, &uri, None) {
        return status;
    }
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

async fn spawn(api: FakeApi) -> HttpClient {
    let app = Router::new()
        .route("/{resource}/", get(list).post(create))
        .route("/{resource}/{id}/", put(update).delete(remove))
        .with_state(api);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    HttpClient::new(ApiConfig::new(format!("http://{addr}"))).unwrap()
}

#[tokio::test]
async fn test_list_students_decodes_collection() {
    let api = FakeApi::default();
    api.seed(
        "students",
        vec![json!({
            "student_id": 1,
            "first_name": "A",
            "last_name": "B",
            "email": "a@b.com",
            "age": 20
        })],
    );
    let client = spawn(api.clone()).await;

    let students = client.list_students().await.unwrap();

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, StudentId::new(1));
    assert_eq!(students[0].email, "a@b.com");
    assert_eq!(api.requests()[0].0, "GET");
    assert_eq!(api.requests()[0].1, "/students/");
}

#[tokio::test]
async fn test_create_teacher_posts_once_to_collection() {
    let api = FakeApi::default();
    let client = spawn(api.clone()).await;

    let teacher = client
        .create_teacher(&NewTeacher {
            teacher_name: "Smith".to_string(),
            email: "s@u.edu".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(teacher.teacher_name, "Smith");
    assert_eq!(teacher.id, TeacherId::new(101));
    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "POST");
    assert_eq!(requests[0].1, "/teachers/");
    assert_eq!(
        requests[0].2,
        Some(json!({ "teacher_name": "Smith", "email": "s@u.edu" }))
    );
}

#[tokio::test]
async fn test_update_course_sends_only_patched_fields() {
    let api = FakeApi::default();
    api.seed(
        "courses",
        vec![json!({ "course_id": 5, "course_name": "CS1", "units": 3, "teacher": 2 })],
    );
    let client = spawn(api.clone()).await;

    let patch = CoursePatch {
        units: Some(4),
        ..CoursePatch::default()
    };
    let course = client.update_course(CourseId::new(5), &patch).await.unwrap();

    assert_eq!(course.units, 4);
    assert_eq!(course.course_name, "CS1");
    let requests = api.requests();
    assert_eq!(requests[0].0, "PUT");
    assert_eq!(requests[0].1, "/courses/5/");
    assert_eq!(requests[0].2, Some(json!({ "units": 4 })));
}

#[tokio::test]
async fn test_delete_enrollment_targets_item_url() {
    let api = FakeApi::default();
    api.seed(
        "enrollments",
        vec![
            json!({ "enrollment_id": 3, "student": 1, "course": 5 }),
            json!({ "enrollment_id": 4, "student": 2, "course": 5 }),
        ],
    );
    let client = spawn(api.clone()).await;

    client.delete_enrollment(EnrollmentId::new(3)).await.unwrap();
    let remaining = client.list_enrollments().await.unwrap();

    assert_eq!(api.requests()[0].0, "DELETE");
    assert_eq!(api.requests()[0].1, "/enrollments/3/");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, EnrollmentId::new(4));
}

#[tokio::test]
async fn test_server_error_becomes_status_error() {
    let api = FakeApi::default();
    api.fail_with(StatusCode::INTERNAL_SERVER_ERROR);
    let client = spawn(api).await;

    let err = client.list_courses().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Status {
            resource: Resource::Courses,
            status: 500,
            ..
        }
    ));
}

#[tokio::test]
async fn test_missing_item_is_not_found() {
    let client = spawn(FakeApi::default()).await;

    let err = client.delete_student(StudentId::new(42)).await.unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_unexpected_shape_is_parse_error() {
    let api = FakeApi::default();
    api.seed("teachers", vec![json!({ "name": "no id here" })]);
    let client = spawn(api).await;

    let err = client.list_teachers().await.unwrap_err();

    assert!(matches!(err, ClientError::JsonParse(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = HttpClient::new(ApiConfig::new(format!("http://{addr}/"))).unwrap();

    let err = client.list_students().await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}
