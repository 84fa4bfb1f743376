//! Full membership walkthrough against the live server.
//!
//! # Design
//! Starts the membership server on a random port, then exercises every core
//! client operation over real HTTP using ureq. Validates that request
//! building and response parsing agree with the actual server.

use membership_core::{
    ApiError, FieldStyle, HttpMethod, HttpRequest, HttpResponse, MembershipClient, Reply,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's status-code-as-error behavior so 4xx/5xx responses come
/// back as data and the core client interprets them.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let content_type = "application/x-www-form-urlencoded";
    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type(content_type).send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type(content_type).send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            membership_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn membership_walkthrough() {
    let addr = start_server();
    let client = MembershipClient::new(&format!("http://{addr}"))
        .unwrap()
        .with_field_style(FieldStyle::KeyNamed);

    // Step 1: read a member that was never registered.
    let reply = client.parse_read(execute(client.build_read("0001"))).unwrap();
    assert_eq!(reply, Reply::NotFound);

    // Step 2: register it.
    let reply = client
        .parse_create(execute(client.build_create("0001", "apple")))
        .unwrap();
    assert_eq!(reply, Reply::Created("apple".to_string()));

    // Step 3: read it back.
    let reply = client.parse_read(execute(client.build_read("0001"))).unwrap();
    assert_eq!(reply, Reply::Found("apple".to_string()));

    // Step 4: registering again leaves the first value.
    let reply = client
        .parse_create(execute(client.build_create("0001", "xpple")))
        .unwrap();
    assert_eq!(reply, Reply::AlreadyExists);

    // Step 5: updating an unregistered member does not create it.
    let reply = client
        .parse_update(execute(client.build_update("0002", "xrange")))
        .unwrap();
    assert_eq!(reply, Reply::NotFound);
    let reply = client.parse_read(execute(client.build_read("0002"))).unwrap();
    assert_eq!(reply, Reply::NotFound);

    // Step 6: register then update.
    client
        .parse_create(execute(client.build_create("0002", "xrange")))
        .unwrap();
    let reply = client
        .parse_update(execute(client.build_update("0002", "orange")))
        .unwrap();
    assert_eq!(reply, Reply::Updated("orange".to_string()));

    // Step 7: delete.
    let reply = client.parse_delete(execute(client.build_delete("0001"))).unwrap();
    assert_eq!(reply, Reply::Removed);

    // Step 8: deleting again is a no-op.
    let reply = client.parse_delete(execute(client.build_delete("0001"))).unwrap();
    assert_eq!(reply, Reply::NotFound);
}

#[test]
fn canonical_field_and_encoded_values() {
    let addr = start_server();
    let client = MembershipClient::new(&format!("http://{addr}")).unwrap();

    let reply = client
        .parse_create(execute(client.build_create("k 1", "green apple & pear")))
        .unwrap();
    assert_eq!(reply, Reply::Created("green apple & pear".to_string()));

    let reply = client.parse_read(execute(client.build_read("k 1"))).unwrap();
    assert_eq!(reply, Reply::Found("green apple & pear".to_string()));
}

#[test]
fn rejected_create_surfaces_as_http_error() {
    let addr = start_server();
    let client = MembershipClient::new(&format!("http://{addr}")).unwrap();

    let err = client
        .parse_create(execute(client.build_create("0003", "")))
        .unwrap_err();
    assert!(matches!(err, ApiError::HttpError { status: 400, .. }));

    // keys containing `/` stay one segment and are refused by the server
    let response = execute(client.build_read("00/03"));
    assert_eq!(response.status, 400);
}
