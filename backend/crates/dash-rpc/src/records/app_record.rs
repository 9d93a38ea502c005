use std::sync::LazyLock;

use regex::Regex;

static APP_PORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*\sports: (\d+)[\s|:]").expect("app port regex is valid"));

/// What the dashboard reads out of an application record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppRecord {
    pub port: Option<u16>,
}

impl AppRecord {
    pub fn parse(text: &str) -> Self {
        let port = APP_PORT
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok());

        Self { port }
    }

    /// An application is hosted once it has been given a non-zero port.
    pub fn is_hosted(&self) -> bool {
        self.port.is_some_and(|port| port > 0)
    }
}
