use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

mod helpers;
mod models;
mod openai;
mod prompt;

#[cfg(test)]
mod test;

use helpers::CliError;

/// rwgpt: simple GPT-powered code review for git diffs
#[derive(Parser, Debug)]
#[command(name = "rwgpt", version, about)]
struct Cli {
	/// The diff to review. Example: --input "$(git show -U4)"
	#[arg(long, value_name = "TEXT")]
	input: Option<String>,
	/// Path to a file containing the diff input
	#[arg(long, value_name = "PATH")]
	input_file: Option<PathBuf>,
	/// Model name or alias
	#[arg(long, default_value = models::DEFAULT_MODEL)]
	model: String,
	/// Pass the model name through without alias mapping
	#[arg(long, action = ArgAction::SetTrue)]
	no_alias: bool,
	/// Maximum number of tokens in the generated review
	#[arg(long, default_value_t = 900)]
	max_tokens: u32,
	/// Sampling temperature
	#[arg(long, default_value_t = 0.2)]
	temperature: f64,
	/// Enable verbose output
	#[arg(short, long, action = ArgAction::SetTrue)]
	verbose: bool,
	/// Write last_request.json and last_response.json for debugging
	#[arg(long, action = ArgAction::SetTrue)]
	write_req_resp: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let args = Cli::parse();

	let log_level = if args.verbose {
		LevelFilter::Info
	} else {
		LevelFilter::Warn
	};
	SimpleLogger::new().with_level(log_level).init().unwrap();

	if let Err(err) = run(args).await {
		eprintln!("Error: {}", err);
		process::exit(err.exit_code());
	}
}

async fn run(args: Cli) -> Result<(), CliError> {
	let api_key = env::var("OPENAI_API_KEY")
		.map_err(|_| CliError::usage("OPENAI_API_KEY is not set in the environment."))?;

	let diff_text = helpers::resolve_input(
		args.input.as_deref(),
		args.input_file.as_deref(),
		!std::io::stdin().is_terminal(),
	)?;

	let model = models::resolve_model(&args.model, args.no_alias);

	info!("model: {}", model);
	info!("max_tokens: {} temperature: {}", args.max_tokens, args.temperature);
	info!("input chars: {}", diff_text.len());

	let prompts = prompt::build_prompts(&diff_text);
	let request = openai::ChatRequest::review(&prompts, model, args.temperature, args.max_tokens);

	let api_base = env::var("OPENAI_API_BASE").unwrap_or_else(|_| openai::DEFAULT_API_BASE.to_string());
	let mut client = openai::ReviewClient::new(&api_base, api_key)?;
	client.write_req_resp = args.write_req_resp;

	let review = client.call_api(&request).await?;
	println!("{}", review);
	Ok(())
}
