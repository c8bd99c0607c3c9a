//! Per-line display classification for console snippets.
//!
//! The console styles each snippet line by a coarse category. This is a
//! pure, total function: any input maps to exactly one category and
//! unmatched lines are [`Category::Plain`]. Misclassification is a display
//! inconsistency, never an error.

/// Display category for one snippet line.
///
/// First match wins, in the order the variants are listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Line starts with a comment marker.
    Comment,
    /// Line invokes a known command; the first token is styled separately.
    Command,
    /// Line pulls names into scope (use/mod/import style).
    Declaration,
    /// Line introduces a type or function.
    Keyword,
    /// Everything else.
    Plain,
}

/// A snippet line paired with its category. Recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub text: &'a str,
    pub category: Category,
}

/// Command names recognized at the start of a token.
const COMMAND_TOKENS: &[&str] = &["cargo", "rustup", "npm", "just", "make", "modkit"];

/// Keywords that mark a scope-import line.
const DECLARATION_TOKENS: &[&str] = &["use", "mod", "namespace", "import"];

/// Keywords that introduce a type or function.
const STRUCTURE_TOKENS: &[&str] = &["fn", "struct", "impl", "trait", "enum", "class"];

/// Classifies one raw line for display styling.
pub fn classify(line: &str) -> Category {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') || trimmed.starts_with("//") {
        return Category::Comment;
    }
    if has_token(line, COMMAND_TOKENS) {
        return Category::Command;
    }
    if has_token(line, DECLARATION_TOKENS) {
        return Category::Declaration;
    }
    if has_token(line, STRUCTURE_TOKENS) {
        return Category::Keyword;
    }
    Category::Plain
}

/// Classifies every line of a snippet body.
pub fn classify_lines(body: &str) -> Vec<ClassifiedLine<'_>> {
    body.lines()
        .map(|text| ClassifiedLine {
            text,
            category: classify(text),
        })
        .collect()
}

/// Splits a command line into its first token and the remainder, for
/// styling the invocation name separately from its arguments.
///
/// Leading whitespace stays attached to the token part so the rendered
/// line reproduces the original spacing.
pub fn split_command(line: &str) -> (&str, &str) {
    let trimmed = line.trim_start();
    let offset = line.len() - trimmed.len();
    match trimmed.find(char::is_whitespace) {
        Some(end) => line.split_at(offset + end),
        None => (line, ""),
    }
}

/// True if any whitespace-delimited token of `line` is in `tokens`.
fn has_token(line: &str, tokens: &[&str]) -> bool {
    line.split_whitespace()
        .any(|word| tokens.contains(&word.trim_end_matches(';')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_marker_wins() {
        assert_eq!(classify("# build the project"), Category::Comment);
        assert_eq!(classify("  # indented"), Category::Comment);
        assert_eq!(classify("// modules/user_management/src/lib.rs"), Category::Comment);
        // Comment outranks a command name inside the comment.
        assert_eq!(classify("# run cargo build first"), Category::Comment);
    }

    #[test]
    fn command_tokens() {
        assert_eq!(classify("cargo install modkit-cli"), Category::Command);
        assert_eq!(classify("npm install"), Category::Command);
        assert_eq!(classify("modkit new user-management"), Category::Command);
        // Substrings of other words do not count as tokens.
        assert_eq!(classify("cargoship manifest"), Category::Plain);
    }

    #[test]
    fn declarations() {
        assert_eq!(classify("use modkit::prelude::*;"), Category::Declaration);
        assert_eq!(classify("pub mod registry;"), Category::Declaration);
        assert_eq!(classify("import something"), Category::Declaration);
    }

    #[test]
    fn structure_keywords() {
        assert_eq!(classify("pub struct UserManagement;"), Category::Keyword);
        assert_eq!(classify("impl Module for UserManagement {"), Category::Keyword);
        assert_eq!(classify("    fn register(&self) {"), Category::Keyword);
    }

    #[test]
    fn plain_fallback_is_total() {
        assert_eq!(classify(""), Category::Plain);
        assert_eq!(classify("}"), Category::Plain);
        assert_eq!(classify("registry.service::<UserService>();"), Category::Plain);
    }

    #[test]
    fn classify_is_deterministic() {
        let line = "cargo install modkit-cli";
        assert_eq!(classify(line), classify(line));
    }

    #[test]
    fn split_command_first_token() {
        assert_eq!(split_command("cargo install foo"), ("cargo", " install foo"));
        assert_eq!(split_command("modkit"), ("modkit", ""));
        assert_eq!(split_command("  modkit init"), ("  modkit", " init"));
    }

    #[test]
    fn classify_lines_matches_per_line() {
        let body = "# comment\ncargo build\nplain";
        let lines = classify_lines(body);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].category, Category::Comment);
        assert_eq!(lines[1].category, Category::Command);
        assert_eq!(lines[2].category, Category::Plain);
    }
}
