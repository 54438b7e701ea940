use std::net::SocketAddr;

#[derive(Clone)]
pub struct AppConfig {
    pub hubspot_access_token: String,
    pub slack_access_token: String,
    /// Channel name without the leading `#`.
    pub slack_channel: String,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub hubspot_base_url: String,
    pub slack_base_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("hubspot_access_token", &"[redacted]")
            .field("slack_access_token", &"[redacted]")
            .field("slack_channel", &self.slack_channel)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("hubspot_base_url", &self.hubspot_base_url)
            .field("slack_base_url", &self.slack_base_url)
            .finish()
    }
}
