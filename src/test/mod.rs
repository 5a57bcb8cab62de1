use super::*;
use clap::Parser;
use std::fs;
use std::path::Path;

use crate::helpers::{resolve_input, EXIT_RUNTIME, EXIT_USAGE};
use crate::models::resolve_model;
use crate::openai::{ChatRequest, ReviewClient};
use crate::prompt::build_prompts;

#[test]
fn cli_defaults() {
	let cli = Cli::parse_from(["rwgpt"]);
	assert_eq!(cli.model, "gpt-4o");
	assert_eq!(cli.max_tokens, 900);
	assert_eq!(cli.temperature, 0.2);
	assert!(!cli.no_alias);
	assert!(!cli.verbose);
	assert!(!cli.write_req_resp);
}

#[test]
fn explicit_text_wins_over_file_and_stdin() {
	let text = resolve_input(
		Some("+print('hi')"),
		Some(Path::new("testdata/sample.diff")),
		true,
	)
	.unwrap();
	assert_eq!(text, "+print('hi')");
}

#[test]
fn file_wins_over_stdin() {
	let text = resolve_input(None, Some(Path::new("testdata/sample.diff")), true).unwrap();
	assert!(text.contains("+print('hi')"));
}

#[test]
fn no_source_is_a_usage_error() {
	let err = resolve_input(None, None, false).unwrap_err();
	assert_eq!(err.exit_code(), EXIT_USAGE);
	assert!(err.to_string().contains("No input provided"));
}

#[test]
fn blank_input_is_a_usage_error() {
	let err = resolve_input(Some("  \n\t "), None, false).unwrap_err();
	assert_eq!(err.exit_code(), EXIT_USAGE);
	assert!(err.to_string().contains("Empty input"));
}

#[test]
fn missing_input_file_is_a_runtime_error() {
	let err = resolve_input(None, Some(Path::new("testdata/no_such_file.diff")), false).unwrap_err();
	assert_eq!(err.exit_code(), EXIT_RUNTIME);
}

#[test]
fn alias_lookup_is_case_insensitive() {
	assert_eq!(resolve_model("gpt4", false), "gpt-4o");
	assert_eq!(resolve_model("GPT4", false), "gpt-4o");
	assert_eq!(resolve_model("Mini", false), "gpt-4o-mini");
}

#[test]
fn alias_resolution_is_idempotent() {
	let once = resolve_model("gpt4", false);
	assert_eq!(resolve_model(&once, false), once);
	assert_eq!(resolve_model("gpt-4o", false), "gpt-4o");
}

#[test]
fn unknown_model_passes_through() {
	assert_eq!(resolve_model("my-fine-tune", false), "my-fine-tune");
}

#[test]
fn no_alias_passes_the_raw_name_through() {
	assert_eq!(resolve_model("gpt4", true), "gpt4");
	assert_eq!(resolve_model("GPT4", true), "GPT4");
}

#[test]
fn user_prompt_embeds_the_diff_verbatim() {
	let diff = "--- a/x.py\n+++ b/x.py\n@@ -1 +1 @@\n-print('bye')\n+print('hi')";
	let prompts = build_prompts(diff);
	assert!(prompts.user.contains(diff));
	assert!(prompts.user.contains("```diff"));
}

#[test]
fn request_orders_system_before_user() {
	let prompts = build_prompts("+x");
	let request = ChatRequest::review(&prompts, "gpt-4o".to_string(), 0.2, 900);
	assert_eq!(request.messages.len(), 2);
	assert_eq!(request.messages[0].role, "system");
	assert_eq!(request.messages[1].role, "user");

	let json = serde_json::to_value(&request).unwrap();
	assert_eq!(json["model"], "gpt-4o");
	assert_eq!(json["max_tokens"], 900);
	assert_eq!(json["temperature"], 0.2);
}

#[test]
fn response_parse() {
	let content = fs::read_to_string("testdata/sample_response.json").unwrap();
	let review = ReviewClient::parse_response(&content).unwrap();
	assert_eq!(review, "LGTM");
}

#[test]
fn response_with_no_choices_is_no_content() {
	let content = fs::read_to_string("testdata/empty_choices.json").unwrap();
	let err = ReviewClient::parse_response(&content).unwrap_err();
	assert_eq!(err.exit_code(), EXIT_RUNTIME);
	assert!(err.to_string().contains("no content"));
}

#[test]
fn response_with_empty_text_is_no_content() {
	let body = r#"{"choices":[{"message":{"role":"assistant","content":"  "}}]}"#;
	let err = ReviewClient::parse_response(body).unwrap_err();
	assert_eq!(err.exit_code(), EXIT_RUNTIME);
}

#[test]
fn api_error_body_message_is_surfaced() {
	let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
	let described = ReviewClient::describe_failure(reqwest::StatusCode::UNAUTHORIZED, body);
	assert!(described.contains("Incorrect API key provided"));
}

#[test]
fn non_json_error_body_falls_back_to_a_snippet() {
	let described = ReviewClient::describe_failure(
		reqwest::StatusCode::BAD_GATEWAY,
		"<html>upstream unavailable</html>",
	);
	assert!(described.contains("502"));
	assert!(described.contains("upstream unavailable"));
}

#[test]
fn client_builds_completions_url_from_base() {
	// Trailing slash on the base must not double up.
	let client = ReviewClient::new("http://localhost:8080/v1/", "key".to_string());
	assert!(client.is_ok());
}
