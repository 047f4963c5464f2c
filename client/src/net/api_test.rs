use super::*;

#[test]
fn assist_endpoint_is_api_assist() {
    assert_eq!(ASSIST_ENDPOINT, "/api/assist");
}

#[test]
fn assist_request_keeps_text_verbatim() {
    assert_eq!(assist_request("  spaced \n").text, "  spaced \n");
}

#[test]
fn assist_failed_message_formats_status() {
    assert_eq!(assist_failed_message(502), "assist request failed: 502");
}

