//! Shared helpers for router-level tests
#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use tower::ServiceExt;

use coursework::{
    config::{Config, DatabaseConfig, JwtConfig, ServerConfig, StorageConfig},
    create_router,
    db::repositories::{AssignmentRepository, EnrollmentRepository, SubmissionRepository},
    models::{Assignment, AssignmentSubmission, AssignmentWithCourse, SubmissionUpsert},
    services::auth_service::Claims,
    storage::LocalDiskStorage,
    AppResult, AppState,
};

pub const JWT_SECRET: &str = "test_secret_key_for_testing_only";
const BOUNDARY: &str = "----coursework-test-boundary";

/// In-memory stand-in for the relational store
#[derive(Default)]
pub struct InMemoryStore {
    assignments: Mutex<HashMap<i64, AssignmentWithCourse>>,
    enrollments: Mutex<HashSet<(i64, i64)>>,
    submissions: Mutex<HashMap<(i64, i64), AssignmentSubmission>>,
    submission_reads: AtomicUsize,
    submission_writes: AtomicUsize,
}

impl InMemoryStore {
    /// Add an assignment whose section and course both exist
    pub fn add_assignment(&self, id: i64, course_id: i64, due_at: Option<DateTime<Utc>>) {
        self.insert_assignment(id, Some(id * 100), Some(course_id), due_at);
    }

    /// Add an assignment with arbitrary (possibly dangling) links
    pub fn insert_assignment(
        &self,
        id: i64,
        section_id: Option<i64>,
        course_id: Option<i64>,
        due_at: Option<DateTime<Utc>>,
    ) {
        self.assignments.lock().unwrap().insert(
            id,
            AssignmentWithCourse {
                assignment: Assignment {
                    id,
                    section_id,
                    title: format!("Assignment {}", id),
                    due_at,
                },
                section_id,
                course_id,
            },
        );
    }

    pub fn set_due_at(&self, assignment_id: i64, due_at: Option<DateTime<Utc>>) {
        if let Some(scoped) = self.assignments.lock().unwrap().get_mut(&assignment_id) {
            scoped.assignment.due_at = due_at;
        }
    }

    pub fn enroll(&self, user_id: i64, course_id: i64) {
        self.enrollments.lock().unwrap().insert((user_id, course_id));
    }

    pub fn submission_rows(&self) -> Vec<AssignmentSubmission> {
        self.submissions.lock().unwrap().values().cloned().collect()
    }

    pub fn submission_reads(&self) -> usize {
        self.submission_reads.load(Ordering::SeqCst)
    }

    pub fn submission_writes(&self) -> usize {
        self.submission_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssignmentRepository for InMemoryStore {
    async fn find_with_course(
        &self,
        assignment_id: i64,
    ) -> AppResult<Option<AssignmentWithCourse>> {
        Ok(self.assignments.lock().unwrap().get(&assignment_id).cloned())
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryStore {
    async fn exists(&self, user_id: i64, course_id: i64) -> AppResult<bool> {
        Ok(self.enrollments.lock().unwrap().contains(&(user_id, course_id)))
    }
}

#[async_trait]
impl SubmissionRepository for InMemoryStore {
    async fn find(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> AppResult<Option<AssignmentSubmission>> {
        self.submission_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .submissions
            .lock()
            .unwrap()
            .get(&(assignment_id, user_id))
            .cloned())
    }

    async fn upsert(&self, submission: &SubmissionUpsert) -> AppResult<AssignmentSubmission> {
        self.submission_writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.submissions.lock().unwrap();
        let next_id = rows.len() as i64 + 1;
        let key = (submission.assignment_id, submission.user_id);
        let now = Utc::now();

        let row = rows.entry(key).or_insert_with(|| AssignmentSubmission {
            id: next_id,
            assignment_id: submission.assignment_id,
            user_id: submission.user_id,
            file_path: String::new(),
            submitted_at: submission.submitted_at,
            is_late: false,
            created_at: now,
            updated_at: now,
        });
        row.file_path = submission.file_path.clone();
        row.submitted_at = submission.submitted_at;
        row.is_late = submission.is_late;
        row.updated_at = now;

        Ok(row.clone())
    }
}

/// Router wired to an in-memory store and a temporary storage directory
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub storage_dir: tempfile::TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let storage_dir = tempfile::tempdir().expect("Failed to create storage dir");
        let config = test_config(storage_dir.path());
        let store = Arc::new(InMemoryStore::default());

        let state = AppState::new(
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(LocalDiskStorage::from_config(&config.storage)),
            config,
        );

        Self {
            router: create_router(state),
            store,
            storage_dir,
        }
    }

    /// Send a request and decode the JSON body
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }

    /// Send a request and return the raw body
    pub async fn send_raw(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub async fn my_submission(
        &self,
        token: &str,
        assignment_id: &str,
    ) -> (StatusCode, serde_json::Value) {
        self.send(my_submission_request(token, assignment_id)).await
    }

    pub async fn submit(
        &self,
        token: &str,
        assignment_id: &str,
        file_name: &str,
        content: &[u8],
    ) -> (StatusCode, serde_json::Value) {
        let body = multipart_body("file", Some(file_name), content);
        self.send(submit_request(token, assignment_id, body)).await
    }
}

pub fn test_config(storage_root: &Path) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
        },
        database: DatabaseConfig {
            url: "postgres://localhost/unused".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: JWT_SECRET.to_string(),
        },
        storage: StorageConfig {
            root: storage_root.to_path_buf(),
            public_prefix: "/storage".to_string(),
            max_upload_size_kb: 20 * 1024,
        },
    }
}

/// Bearer token for a user id and role
pub fn token(user_id: i64, role: &str) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        username: Some(format!("user{}", user_id)),
        role: role.to_string(),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

/// Encode a single-field multipart body
pub fn multipart_body(field: &str, file_name: Option<&str>, content: &[u8]) -> Vec<u8> {
    multipart_parts(&[(field, file_name, content)])
}

/// Encode a multipart body from `(field, file_name, content)` parts, in order
pub fn multipart_parts(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (field, file_name, content) in parts {
        append_part(&mut body, field, *file_name, content);
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn append_part(body: &mut Vec<u8>, field: &str, file_name: Option<&str>, content: &[u8]) {
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    match file_name {
        Some(name) => {
            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    field, name
                )
                .as_bytes(),
            );
            body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        }
        None => {
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", field).as_bytes(),
            );
        }
    }
    body.extend_from_slice(content);
    body.extend_from_slice(b"\r\n");
}

pub fn my_submission_request(token: &str, assignment_id: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/api/assignments/{}/my-submission", assignment_id))
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn submit_request(token: &str, assignment_id: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/assignments/{}/submit", assignment_id))
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}
