//! Response type for completed commands.

use std::time::Duration;

/// Response from a command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The command as it was submitted.
    pub command: String,

    /// The command output (echo line and trailing prompt removed).
    pub result: String,

    /// The output before the echo line was removed.
    pub raw_result: String,

    /// The prompt that ended the output.
    pub prompt: String,

    /// Time from dispatch to completion.
    pub elapsed: Duration,
}

impl Response {
    /// Create a new response.
    pub fn new(
        command: impl Into<String>,
        result: impl Into<String>,
        raw_result: impl Into<String>,
        prompt: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            command: command.into(),
            result: result.into(),
            raw_result: raw_result.into(),
            prompt: prompt.into(),
            elapsed,
        }
    }

    /// Get the result lines as an iterator.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.result.lines()
    }

    /// Check if the result contains a substring.
    pub fn contains(&self, pattern: &str) -> bool {
        self.result.contains(pattern)
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_contains() {
        let response = Response::new(
            "show version",
            "IOS 15.2\r\nuptime 3 days\r\n",
            "show version\r\nIOS 15.2\r\nuptime 3 days\r\n",
            "router#",
            Duration::from_millis(12),
        );
        assert_eq!(response.lines().collect::<Vec<_>>(), ["IOS 15.2", "uptime 3 days"]);
        assert!(response.contains("uptime"));
        assert_eq!(response.to_string(), response.result);
    }
}
