use std::fmt;

/// A shell command line assembled from tokens joined by single spaces.
///
/// Tokens are not quoted: the rendered string is handed to a shell as-is, so a
/// literal `|` token pipes the output into the next command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    pub fn new(service: &str) -> Self {
        Self {
            tokens: vec![service.to_string()],
        }
    }

    pub fn arg(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    pub fn flag(self, name: &str, value: impl Into<String>) -> Self {
        self.arg(name).arg(value)
    }

    /// Pipes the output through `jq -r <filter>`.
    pub fn pipe_jq(self, filter: &str) -> Self {
        self.arg("|").arg("jq").arg("-r").arg(filter)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn render(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
