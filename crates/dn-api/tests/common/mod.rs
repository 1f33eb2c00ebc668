//! Test transports.

#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

use dn_api::{Method, Request, Response, Transport, TransportError};
use serde_json::{Map, Value, json};

pub const BASE_URL: &str = "http://fake.test/api/v1";
pub const API_KEY: &str = "test-key";

/// Replays canned responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Response, String>>>,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(Response::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Request {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: Request) -> Result<Response, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
            .map_err(TransportError::Connection)
    }
}

const PROJECT_FIELDS: [&str; 2] = ["name", "description"];
const DIGGER_FIELDS: [&str; 5] = ["name", "url", "config", "schedule_from", "schedule_to"];

#[derive(Default)]
struct State {
    next_id: u64,
    projects: BTreeMap<u64, Map<String, Value>>,
    diggers: BTreeMap<u64, Map<String, Value>>,
    sessions: BTreeMap<(u64, u64), Map<String, Value>>,
    data: BTreeMap<(u64, u64), Value>,
}

/// In-memory stand-in for the remote API with real PUT/PATCH semantics.
///
/// Ids are handed out from 42 upward. Session payloads omit the owning
/// digger so callers rely on binding to learn it.
pub struct FakeApi {
    state: Mutex<State>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 42,
                ..State::default()
            }),
        }
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_digger(&self, project: u64, id: u64, name: &str) {
        let mut record = digger_defaults();
        record.insert("id".into(), id.into());
        record.insert("project".into(), project.into());
        record.insert("name".into(), name.into());
        self.state.lock().unwrap().diggers.insert(id, record);
    }

    pub fn insert_project(&self, id: u64, name: &str) {
        let mut record = Map::new();
        record.insert("id".into(), id.into());
        record.insert("name".into(), name.into());
        record.insert("description".into(), "".into());
        self.state.lock().unwrap().projects.insert(id, record);
    }

    pub fn insert_session(&self, digger: u64, id: u64, state: &str, data: Value) {
        let finished_at = if state == "running" {
            Value::Null
        } else {
            json!("2024-03-01T12:05:00Z")
        };
        let record = json!({
            "id": id,
            "started_at": "2024-03-01T12:00:00Z",
            "finished_at": finished_at,
            "state": state,
            "runtime": 300,
            "bandwidth": 4096,
            "requests": 12,
            "errors": 0
        });
        let Value::Object(record) = record else {
            unreachable!()
        };
        let mut guard = self.state.lock().unwrap();
        guard.sessions.insert((digger, id), record);
        guard.data.insert((digger, id), data);
    }

    fn handle(&self, request: &Request) -> Response {
        let expected = format!("Token {API_KEY}");
        if request.header_value("Authorization") != Some(expected.as_str()) {
            return Response::new(401, r#"{"detail":"Invalid token."}"#);
        }
        if request.header_value("Content-Type") != Some("application/json") {
            return Response::new(415, "unsupported media type");
        }

        let path = request
            .url()
            .strip_prefix(BASE_URL)
            .expect("request outside base url");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let body = request.body_json().unwrap_or(Value::Null);
        let method = request.method().clone();
        let mut state = self.state.lock().unwrap();

        match segments.as_slice() {
            ["projects"] if method == Method::GET => {
                let projects = state.projects.values().cloned().map(Value::Object);
                ok(Value::Array(projects.collect()))
            }
            ["projects"] if method == Method::POST => {
                let id = state.allocate();
                let mut record = Map::new();
                record.insert("id".into(), id.into());
                record.insert("name".into(), "".into());
                record.insert("description".into(), "".into());
                apply(&mut record, &body, &PROJECT_FIELDS);
                state.projects.insert(id, record.clone());
                Response::new(201, Value::Object(record).to_string())
            }
            ["projects", id] => {
                let id = parse(id);
                item(&mut state.projects, id, &method, &body, &PROJECT_FIELDS, || {
                    let mut record = Map::new();
                    record.insert("name".into(), "".into());
                    record.insert("description".into(), "".into());
                    record
                })
            }
            ["projects", id, "diggers"] if method == Method::GET => {
                let id = parse(id);
                if !state.projects.contains_key(&id) {
                    return not_found();
                }
                ok(Value::Array(
                    state
                        .diggers
                        .values()
                        .filter(|d| d.get("project") == Some(&Value::from(id)))
                        .cloned()
                        .map(Value::Object)
                        .collect(),
                ))
            }
            ["diggers"] if method == Method::POST => {
                let Some(project) = body.get("project").and_then(Value::as_u64) else {
                    return Response::new(400, r#"{"project":["This field is required."]}"#);
                };
                if !state.projects.contains_key(&project) {
                    return Response::new(400, r#"{"project":["Invalid pk."]}"#);
                }
                let id = state.allocate();
                let mut record = digger_defaults();
                record.insert("id".into(), id.into());
                record.insert("project".into(), project.into());
                apply(&mut record, &body, &DIGGER_FIELDS);
                state.diggers.insert(id, record.clone());
                Response::new(201, Value::Object(record).to_string())
            }
            ["diggers", id] => {
                let id = parse(id);
                item(&mut state.diggers, id, &method, &body, &DIGGER_FIELDS, || {
                    let mut record = Map::new();
                    for field in DIGGER_FIELDS {
                        record.insert(field.into(), Value::Null);
                    }
                    record.insert("name".into(), "".into());
                    record.insert("url".into(), "".into());
                    record.insert("config".into(), "".into());
                    record
                })
            }
            ["diggers", id, "sessions"] if method == Method::GET => {
                let id = parse(id);
                if !state.diggers.contains_key(&id) {
                    return not_found();
                }
                ok(Value::Array(
                    state
                        .sessions
                        .iter()
                        .filter(|((digger, _), _)| *digger == id)
                        .map(|(_, record)| Value::Object(record.clone()))
                        .collect(),
                ))
            }
            ["diggers", digger, "sessions", id] if method == Method::GET => {
                let key = (parse(digger), parse(id));
                state
                    .sessions
                    .get(&key)
                    .map_or_else(not_found, |record| ok(Value::Object(record.clone())))
            }
            ["diggers", digger, "sessions", id, "data"] if method == Method::GET => {
                let key = (parse(digger), parse(id));
                state
                    .data
                    .get(&key)
                    .map_or_else(not_found, |data| ok(data.clone()))
            }
            _ => Response::new(405, "method not allowed"),
        }
    }
}

impl Transport for FakeApi {
    fn send(&self, request: Request) -> Result<Response, TransportError> {
        Ok(self.handle(&request))
    }
}

impl State {
    fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn digger_defaults() -> Map<String, Value> {
    let Value::Object(record) = json!({
        "name": "",
        "url": "",
        "config": "",
        "status": "idle",
        "schedule_from": null,
        "schedule_to": null,
        "bandwidth": 0,
        "calls": 0,
        "requests": 0,
        "last_session": null
    }) else {
        unreachable!()
    };
    record
}

fn item(
    records: &mut BTreeMap<u64, Map<String, Value>>,
    id: u64,
    method: &Method,
    body: &Value,
    writable: &[&str],
    reset: impl Fn() -> Map<String, Value>,
) -> Response {
    let Some(record) = records.get_mut(&id) else {
        return not_found();
    };
    match *method {
        Method::GET => ok(Value::Object(record.clone())),
        Method::PUT => {
            for (key, value) in reset() {
                record.insert(key, value);
            }
            apply(record, body, writable);
            ok(Value::Object(record.clone()))
        }
        Method::PATCH => {
            apply(record, body, writable);
            ok(Value::Object(record.clone()))
        }
        Method::DELETE => {
            records.remove(&id);
            Response::new(204, "")
        }
        _ => Response::new(405, "method not allowed"),
    }
}

fn apply(record: &mut Map<String, Value>, body: &Value, writable: &[&str]) {
    for field in writable {
        if let Some(value) = body.get(*field) {
            record.insert((*field).to_string(), value.clone());
        }
    }
}

fn parse(segment: &str) -> u64 {
    segment.parse().expect("numeric id in path")
}

fn ok(value: Value) -> Response {
    Response::new(200, value.to_string())
}

fn not_found() -> Response {
    Response::new(404, r#"{"detail":"Not found."}"#)
}
