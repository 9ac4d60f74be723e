//! HTTP Transport Integration Tests
//!
//! Runs `HttpProjectApi` against a local tiny_http server that answers a
//! scripted sequence of responses and records what it received.

use pageforge::project::{
    HttpProjectApi, ProjectApi, ProjectError, ProjectManager, ProjectOutcome, SaveProjectRequest,
};
use serde_json::{Map, Value, json};
use std::io::Read;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Response, Server};

/// A request as the server saw it
#[derive(Debug)]
struct Received {
    method: String,
    url: String,
    content_type: Option<String>,
    body: String,
}

/// Serve `replies` in order, one per request, then stop.
fn spawn_server(replies: Vec<(u16, &'static str)>) -> (String, Receiver<Received>) {
    let server = Server::http("127.0.0.1:0").expect("http server");
    let base = format!("http://{}", server.server_addr());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in replies {
            let Ok(mut request) = server.recv() else { return };

            let mut received = String::new();
            let _ = request.as_reader().read_to_string(&mut received);
            let content_type = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Content-Type"))
                .map(|h| h.value.as_str().to_string());
            let _ = tx.send(Received {
                method: request.method().to_string(),
                url: request.url().to_string(),
                content_type,
                body: received,
            });

            let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                .expect("static header");
            let _ = request.respond(
                Response::from_string(body)
                    .with_status_code(status)
                    .with_header(header),
            );
        }
    });

    (base, rx)
}

fn next(rx: &Receiver<Received>) -> Received {
    rx.recv_timeout(Duration::from_secs(5)).expect("request reached the server")
}

#[test]
fn test_create_project_posts_fields() {
    let (base, rx) = spawn_server(vec![(200, r#"{"success": true, "project_id": 12}"#)]);
    let api = HttpProjectApi::new(format!("{base}/")).unwrap();

    let mut fields = Map::new();
    fields.insert("name".into(), json!("Shop"));
    let response = api.create_project(&fields).unwrap();

    assert!(response.success);
    assert_eq!(response.project_id, Some(12));

    let request = next(&rx);
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "/create-project");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(serde_json::from_str::<Value>(&request.body).unwrap(), json!({"name": "Shop"}));
}

#[test]
fn test_save_project_wraps_content() {
    let (base, rx) = spawn_server(vec![(200, r#"{"success": true}"#)]);
    let api = HttpProjectApi::new(base).unwrap();

    let request = SaveProjectRequest {
        content: json!({"html": "<section></section>"}),
    };
    assert!(api.save_project(5, &request).unwrap().success);

    let received = next(&rx);
    assert_eq!(received.method, "POST");
    assert_eq!(received.url, "/api/save-project/5");
    assert_eq!(
        serde_json::from_str::<Value>(&received.body).unwrap(),
        json!({"content": {"html": "<section></section>"}})
    );
}

#[test]
fn test_publish_and_delete_routes() {
    let (base, rx) = spawn_server(vec![
        (200, r#"{"success": true, "url": "/preview/8"}"#),
        (200, r#"{"success": true}"#),
    ]);
    let api = HttpProjectApi::new(base).unwrap();

    let published = api.publish_project(8).unwrap();
    assert_eq!(published.url.as_deref(), Some("/preview/8"));
    let publish = next(&rx);
    assert_eq!((publish.method.as_str(), publish.url.as_str()), ("POST", "/api/publish-project/8"));
    assert_eq!(publish.content_type.as_deref(), Some("application/json"));

    assert!(api.delete_project(8).unwrap().success);
    let delete = next(&rx);
    assert_eq!((delete.method.as_str(), delete.url.as_str()), ("DELETE", "/api/delete-project/8"));
}

#[test]
fn test_error_status_body_is_still_decoded() {
    let (base, _rx) = spawn_server(vec![(500, r#"{"success": false}"#)]);
    let api = HttpProjectApi::new(base).unwrap();

    let response = api.delete_project(1).unwrap();
    assert!(!response.success);
}

#[test]
fn test_non_json_body_is_a_decode_error() {
    let (base, _rx) = spawn_server(vec![(502, "<html>Bad Gateway</html>")]);
    let api = HttpProjectApi::new(base).unwrap();

    match api.publish_project(1) {
        Err(ProjectError::Decode { status, .. }) => assert_eq!(status, 502),
        other => panic!("expected a decode error, got {:?}", other),
    }
}

#[test]
fn test_unreachable_server_is_a_transport_error() {
    // Bind then drop a server so the port is very likely closed
    let base = {
        let server = Server::http("127.0.0.1:0").expect("http server");
        format!("http://{}", server.server_addr())
    };
    let api = HttpProjectApi::new(base).unwrap();

    assert!(matches!(api.delete_project(1), Err(ProjectError::Transport(_))));
}

#[test]
fn test_manager_over_http() {
    let (base, rx) = spawn_server(vec![
        (200, r#"{"success": true, "project_id": 3}"#),
        (200, r#"{"success": true}"#),
    ]);
    let mut manager = ProjectManager::new(HttpProjectApi::new(base).unwrap());

    assert_eq!(
        manager.create_project(Map::new()),
        ProjectOutcome::Navigate("/editor/3".into())
    );
    assert_eq!(manager.save_project(3, json!("<p>x</p>")), ProjectOutcome::Stay);

    assert_eq!(next(&rx).url, "/create-project");
    assert_eq!(next(&rx).url, "/api/save-project/3");
    assert_eq!(manager.toasts().count(), 2);
}
