use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::string;
use thiserror::Error;

pub const EXIT_USAGE: i32 = 2;
pub const EXIT_RUNTIME: i32 = 1;

#[derive(Debug, Error)]
pub enum CliError {
	#[error("IO error: {0}")]
	Io(#[from] io::Error),
	#[error("Serde error: {0}")]
	Serde(#[from] serde_json::Error),
	#[error("Request error: {0}")]
	Http(#[from] reqwest::Error),
	#[error("Url error: {0}")]
	Url(#[from] url::ParseError),
	#[error("FromUtf8 error: {0}")]
	FromUtf8Error(#[from] string::FromUtf8Error),
	#[error("{0}")]
	Usage(String),
	#[error("API error: {0}")]
	Api(String),
	#[error("The service returned no content")]
	NoContent,
}

impl CliError {
	pub fn usage<M: Into<String>>(msg: M) -> Self {
		CliError::Usage(msg.into())
	}

	/// Usage errors exit with 2, everything else with 1.
	pub fn exit_code(&self) -> i32 {
		match self {
			CliError::Usage(_) => EXIT_USAGE,
			_ => EXIT_RUNTIME,
		}
	}
}

const MAX_READ_BYTES: usize = 8 * 1024 * 1024;

pub fn read_stdin() -> Result<String, CliError> {
	let mut stdin = io::stdin();

	let mut buffer = Vec::with_capacity(MAX_READ_BYTES);
	stdin.by_ref().take(MAX_READ_BYTES as u64).read_to_end(&mut buffer)?;

	if buffer.len() == MAX_READ_BYTES {
		let mut extra = [0u8; 1];
		let extra_read = stdin.read(&mut extra)?;

		if extra_read != 0 {
			return Err(CliError::usage("Input too large"));
		}
	}

	Ok(String::from_utf8(buffer)?)
}

/// Resolve the diff text from the first available source, in fixed
/// precedence order: explicit text, then file path, then stdin.
/// `stdin_available` is false when stdin is an interactive terminal,
/// in which case it is never read.
pub fn resolve_input(
	input: Option<&str>,
	input_file: Option<&Path>,
	stdin_available: bool,
) -> Result<String, CliError> {
	let text = if let Some(text) = input {
		text.to_string()
	} else if let Some(path) = input_file {
		let mut content = String::new();
		File::open(path)?.read_to_string(&mut content)?;
		content
	} else if stdin_available {
		read_stdin()?
	} else {
		return Err(CliError::usage(
			"No input provided. Pass --input, --input-file, or pipe data via stdin.",
		));
	};

	if text.trim().is_empty() {
		return Err(CliError::usage("Empty input."));
	}

	Ok(text)
}
