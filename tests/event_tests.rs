use sqs_bridge::core::models::Event;

#[test]
fn test_event_body_and_headers() {
    let event = Event::new("payload").with_header("host", "web-1");

    assert_eq!(event.body(), b"payload");
    assert_eq!(event.body_text(), "payload");
    assert_eq!(event.headers().get("host").map(String::as_str), Some("web-1"));
    assert!(!event.is_empty());
}

#[test]
fn test_empty_event() {
    let event = Event::new("");
    assert!(event.is_empty());
    assert_eq!(event.body_text(), "");
}
