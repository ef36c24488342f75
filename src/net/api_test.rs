use super::*;

#[test]
fn stop_streaming_endpoint_formats_expected_path() {
    assert_eq!(stop_streaming_endpoint(7), "/stop-streaming/7");
}

#[test]
fn prompt_submit_failed_message_formats_status() {
    assert_eq!(prompt_submit_failed_message(500), "prompt submit failed: 500");
}

#[test]
fn create_chat_failed_message_formats_status() {
    assert_eq!(create_chat_failed_message(400), "chat create failed: 400");
}

#[test]
fn stop_streaming_failed_message_formats_status() {
    assert_eq!(stop_streaming_failed_message(404), "stop streaming failed: 404");
}
