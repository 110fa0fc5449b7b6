#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use anyhow::{Context, Result};
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::sync::oneshot;

/// Extensions the stub accepts for uploads.
const ALLOWED_EXTENSIONS: &[&str] = &["txt", "md", "pdf", "docx"];

#[derive(Debug, Default)]
pub struct StubState {
    pub opening_lines: BTreeMap<String, (bool, Vec<String>)>,
    /// project -> filename -> size
    pub documents: BTreeMap<String, BTreeMap<String, u64>>,
    pub created_chats: Vec<String>,
    pub saved_chats: Vec<(String, Value)>,
    pub projects: BTreeMap<String, (String, String)>,
    pub active_project: Option<String>,
    pub delete_requests: usize,
    pub list_requests: usize,
    /// Projects whose document list answers with a bare 500.
    pub broken_projects: Vec<String>,
}

type Shared = Arc<Mutex<StubState>>;

/// In-process backend serving the chat, document and project routes.
pub struct StubServer {
    pub base_url: String,
    state: Shared,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl StubServer {
    pub fn state(&self) -> MutexGuard<'_, StubState> {
        match self.state.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub fn spawn_stub() -> Result<StubServer> {
    let state: Shared = Arc::new(Mutex::new(StubState::default()));

    let listener = std::net::TcpListener::bind("127.0.0.1:0").context("bind stub listener")?;
    listener
        .set_nonblocking(true)
        .context("set listener nonblocking")?;
    let addr = listener.local_addr().context("read listener local addr")?;

    let app = router(state.clone());
    let (tx, rx) = oneshot::channel::<()>();
    let handle = thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(_) => return,
        };
        rt.block_on(async move {
            let Ok(listener) = tokio::net::TcpListener::from_std(listener) else {
                return;
            };
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });
    });

    Ok(StubServer {
        base_url: format!("http://{}", addr),
        state,
        shutdown: Some(tx),
        handle: Some(handle),
    })
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/get_opening_lines/:character", get(get_opening_lines))
        .route("/save_opening_lines", post(save_opening_lines))
        .route("/chats/new", post(new_chat))
        .route("/chats/save", post(save_chat))
        .route("/projects/list", get(list_projects))
        .route("/projects/create", post(create_project))
        .route("/projects/get/:name", get(get_project))
        .route("/projects/update/:name", post(update_project))
        .route("/projects/switch", post(switch_project))
        .route("/projects/delete/:name", delete(delete_project))
        .route("/projects/:project/documents/upload", post(upload_document))
        .route("/projects/:project/documents/list", get(list_documents))
        .route("/projects/:project/documents/:filename", delete(delete_document))
        .with_state(state)
}

fn lock(state: &Shared) -> MutexGuard<'_, StubState> {
    match state.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn error(status: StatusCode, msg: &str) -> Response {
    (status, Json(json!({"error": msg}))).into_response()
}

async fn get_opening_lines(State(state): State<Shared>, Path(character): Path<String>) -> Response {
    let st = lock(&state);
    let (enabled, lines) = st
        .opening_lines
        .get(&character)
        .cloned()
        .unwrap_or((false, Vec::new()));
    Json(json!({"enabled": enabled, "lines": lines})).into_response()
}

async fn save_opening_lines(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let Some(character) = body.get("character").and_then(Value::as_str) else {
        return error(StatusCode::BAD_REQUEST, "Character name is required");
    };
    let enabled = body.get("enabled").and_then(Value::as_bool).unwrap_or(false);
    let lines: Vec<String> = body
        .get("lines")
        .and_then(Value::as_array)
        .map(|a| {
            a.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    lock(&state)
        .opening_lines
        .insert(character.to_string(), (enabled, lines));
    Json(json!({"status": "success"})).into_response()
}

async fn new_chat(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let character = body
        .get("character")
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .trim()
        .to_string();
    let mut st = lock(&state);
    let prefix = format!("{} - New Chat", character);
    let taken = st
        .created_chats
        .iter()
        .filter(|c| c.starts_with(&prefix))
        .count();
    let filename = if taken == 0 {
        format!("{}.txt", prefix)
    } else {
        format!("{} ({}).txt", prefix, taken)
    };
    st.created_chats.push(filename.clone());
    Json(json!({"filename": filename})).into_response()
}

async fn save_chat(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let filename = body
        .get("filename")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    if filename.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Filename is required");
    }
    let messages = body.get("messages").cloned().unwrap_or(Value::Null);
    lock(&state).saved_chats.push((filename, messages));
    Json(json!({"success": true})).into_response()
}

async fn upload_document(
    State(state): State<Shared>,
    Path(project): Path<String>,
    mut multipart: Multipart,
) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            return error(StatusCode::BAD_REQUEST, "No file provided");
        };
        let ext = filename
            .rsplit_once('.')
            .map(|(_, e)| e.to_ascii_lowercase())
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return error(StatusCode::BAD_REQUEST, "Unsupported file type");
        }
        let Ok(bytes) = field.bytes().await else {
            return error(StatusCode::BAD_REQUEST, "Could not read upload");
        };
        lock(&state)
            .documents
            .entry(project)
            .or_default()
            .insert(filename.clone(), bytes.len() as u64);
        return Json(json!({"success": true, "filename": filename})).into_response();
    }
    error(StatusCode::BAD_REQUEST, "No file provided")
}

async fn list_documents(State(state): State<Shared>, Path(project): Path<String>) -> Response {
    let mut st = lock(&state);
    st.list_requests += 1;
    if st.broken_projects.contains(&project) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "storage offline").into_response();
    }
    let docs: Vec<Value> = st
        .documents
        .get(&project)
        .map(|m| {
            m.iter()
                .map(|(name, size)| json!({"filename": name, "size": size}))
                .collect()
        })
        .unwrap_or_default();
    Json(json!({"documents": docs})).into_response()
}

async fn delete_document(
    State(state): State<Shared>,
    Path((project, filename)): Path<(String, String)>,
) -> Response {
    let mut st = lock(&state);
    st.delete_requests += 1;
    let removed = st
        .documents
        .get_mut(&project)
        .and_then(|m| m.remove(&filename));
    match removed {
        Some(_) => Json(json!({"success": true})).into_response(),
        None => error(StatusCode::NOT_FOUND, "Document not found"),
    }
}

fn safe_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

async fn list_projects(State(state): State<Shared>) -> Response {
    let st = lock(&state);
    let projects: Vec<Value> = st
        .projects
        .iter()
        .map(|(name, (display_name, instructions))| {
            json!({"name": name, "display_name": display_name, "instructions": instructions})
        })
        .collect();
    Json(json!({"projects": projects, "active": st.active_project})).into_response()
}

async fn create_project(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let display = body
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let name = safe_name(&display);
    if name.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Project name is required");
    }
    let instructions = body
        .get("instructions")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let mut st = lock(&state);
    if st.projects.contains_key(&name) {
        return error(StatusCode::BAD_REQUEST, "Project already exists");
    }
    st.projects.insert(name.clone(), (display, instructions));
    Json(json!({"success": true, "name": name})).into_response()
}

async fn get_project(State(state): State<Shared>, Path(name): Path<String>) -> Response {
    let st = lock(&state);
    match st.projects.get(&name) {
        Some((_, instructions)) => Json(json!({
            "name": name,
            "instructions": instructions,
            "created": "2026-01-01T00:00:00Z",
        }))
        .into_response(),
        None => error(StatusCode::NOT_FOUND, "Project not found"),
    }
}

async fn update_project(
    State(state): State<Shared>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut st = lock(&state);
    let Some(entry) = st.projects.get_mut(&name) else {
        return error(StatusCode::NOT_FOUND, "Project not found");
    };
    if let Some(d) = body.get("display_name").and_then(Value::as_str) {
        entry.0 = d.to_string();
    }
    if let Some(i) = body.get("instructions").and_then(Value::as_str) {
        entry.1 = i.to_string();
    }
    Json(json!({"success": true})).into_response()
}

async fn switch_project(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut st = lock(&state);
    let name = body.get("name").and_then(Value::as_str).map(str::to_string);
    if let Some(n) = &name {
        if !st.projects.contains_key(n) {
            return error(StatusCode::NOT_FOUND, "Project not found");
        }
    }
    st.active_project = name.clone();
    Json(json!({"success": true, "active": name})).into_response()
}

async fn delete_project(State(state): State<Shared>, Path(name): Path<String>) -> Response {
    let mut st = lock(&state);
    if st.projects.remove(&name).is_none() {
        return error(StatusCode::NOT_FOUND, "Project not found");
    }
    if st.active_project.as_deref() == Some(name.as_str()) {
        st.active_project = None;
    }
    st.documents.remove(&name);
    Json(json!({"success": true})).into_response()
}
