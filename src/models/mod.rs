/// Default model when none is requested on the command line.
pub const DEFAULT_MODEL: &str = "gpt-4o";

// Short names accepted in place of canonical model identifiers.
// Keys are matched case-insensitively; values are returned as stored.
const MODEL_ALIASES: &[(&str, &str)] = &[
	("gpt4", "gpt-4o"),
	("gpt-4", "gpt-4o"),
	("4o", "gpt-4o"),
	("mini", "gpt-4o-mini"),
	("gpt4-mini", "gpt-4o-mini"),
	("gpt3", "gpt-3.5-turbo"),
	("gpt3.5", "gpt-3.5-turbo"),
];

/// Map a human-friendly alias to its canonical model identifier.
/// Unknown names pass through unchanged, and `no_alias` skips the
/// table entirely.
pub fn resolve_model(name: &str, no_alias: bool) -> String {
	if no_alias {
		return name.to_string();
	}
	for (alias, canonical) in MODEL_ALIASES {
		if alias.eq_ignore_ascii_case(name) {
			return canonical.to_string();
		}
	}
	name.to_string()
}
