use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_derive::{Deserialize, Serialize};
use std::fs;
use url::Url;

use crate::helpers::CliError;
use crate::prompt::PromptPair;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Serialize, Deserialize, Debug)]
pub struct Message {
	pub role: String,
	pub content: Option<String>,
}

impl Message {
	pub fn new(role: &str, content: &str) -> Self {
		Message { role: role.to_string(), content: Some(content.to_string()) }
	}
}

#[derive(Serialize, Debug)]
pub struct ChatRequest {
	pub model: String,
	pub messages: Vec<Message>,
	pub max_tokens: u32,
	pub temperature: f64,
}

impl ChatRequest {
	/// Build the two-message review conversation: system role first,
	/// user role second.
	pub fn review(prompts: &PromptPair, model: String, temperature: f64, max_tokens: u32) -> Self {
		ChatRequest {
			model,
			messages: vec![
				Message::new("system", &prompts.system),
				Message::new("user", &prompts.user),
			],
			max_tokens,
			temperature,
		}
	}
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
	choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
	message: Message,
}

#[derive(Deserialize)]
struct ApiErrorBody {
	error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
	message: String,
}

pub struct ReviewClient {
	post_url: Url,
	api_key: String,
	pub write_req_resp: bool,
}

impl ReviewClient {
	pub fn new(api_base: &str, api_key: String) -> Result<Self, CliError> {
		let post_url = Url::parse(&format!("{}/chat/completions", api_base.trim_end_matches('/')))?;
		Ok(ReviewClient {
			post_url,
			api_key,
			write_req_resp: false,
		})
	}

	/// Send the request once and return the first choice's text.
	/// No retry, no fallback model.
	pub async fn call_api(&self, request: &ChatRequest) -> Result<String, CliError> {
		let serialised = serde_json::to_string(request)?;
		if self.write_req_resp {
			fs::write("last_request.json", &serialised)?;
		}
		let client = reqwest::Client::new();
		let resp = client
			.post(self.post_url.clone())
			.header("Authorization", format!("Bearer {}", &self.api_key))
			.header(CONTENT_TYPE, "application/json")
			.body(serialised)
			.send()
			.await?;
		let status = resp.status();
		let body = resp.text().await?;
		if self.write_req_resp {
			fs::write("last_response.json", &body)?;
		}
		if !status.is_success() {
			return Err(CliError::Api(Self::describe_failure(status, &body)));
		}
		Self::parse_response(&body)
	}

	/// Prefer the API's own error message when the body carries one.
	pub fn describe_failure(status: StatusCode, body: &str) -> String {
		match serde_json::from_str::<ApiErrorBody>(body) {
			Ok(err) => format!("{}: {}", status, err.error.message),
			Err(_) => format!("{}: {}", status, body.chars().take(200).collect::<String>()),
		}
	}

	pub fn parse_response(body: &str) -> Result<String, CliError> {
		let response: ChatResponse = serde_json::from_str(body)?;
		let content = response
			.choices
			.into_iter()
			.next()
			.and_then(|choice| choice.message.content)
			.unwrap_or_default();
		if content.trim().is_empty() {
			return Err(CliError::NoContent);
		}
		Ok(content)
	}
}
