//! Canned-response transport for command tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use dn_api::{Client, Request, Response, Transport, TransportError};
use dn_core::Credential;

pub const BASE_URL: &str = "http://stub.test/api/v1";

pub struct StubTransport {
    responses: Mutex<VecDeque<Response>>,
    requests: Mutex<Vec<Request>>,
}

impl StubTransport {
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    fn send(&self, request: Request) -> Result<Response, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Connection("no stubbed response".to_string()))
    }
}

pub fn client(responses: &[(u16, &str)]) -> Client<StubTransport> {
    let transport = StubTransport {
        responses: Mutex::new(
            responses
                .iter()
                .map(|(status, body)| Response::new(*status, *body))
                .collect(),
        ),
        requests: Mutex::new(Vec::new()),
    };
    Client::with_transport(transport).with_base_url(BASE_URL)
}

pub fn credential() -> Credential {
    Credential::new("test-key").unwrap()
}

pub fn output(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).unwrap()
}
