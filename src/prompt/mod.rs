pub const SYSTEM_PROMPT: &str = "You are a senior software engineer reviewing a unified diff.

## Review Rules
- Group your feedback by file and reference line numbers where possible.
- Prefer concrete suggestions; include short code snippets when they help.
- Review only the added lines (lines starting with '+'). Use removed and
  context lines solely to understand the change.
- Do not restate what the diff already changed.
- Avoid generic praise. If you find no issues, say \"LGTM\" followed by any
  nits worth mentioning.

Output the review in Markdown.";

const USER_INSTRUCTIONS: &str = "Review the following diff. Focus on the added lines only; \
do not restate the changes themselves.";

/// The two prompt strings sent as the system and user messages.
/// Immutable once built.
pub struct PromptPair {
	pub system: String,
	pub user: String,
}

/// Embed the diff verbatim in a fenced block under the fixed instructions.
pub fn build_prompts(diff_text: &str) -> PromptPair {
	PromptPair {
		system: SYSTEM_PROMPT.to_string(),
		user: format!("{}\n\n```diff\n{}\n```\n", USER_INSTRUCTIONS, diff_text),
	}
}
