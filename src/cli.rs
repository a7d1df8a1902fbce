//! Agent URL resolution for the `agent-ctl` helper
//!
//! Resolution order: explicit `--url` flag, then the `BITTE_AGENT_URL`
//! environment variable. No URL at all is the helper's only fatal case.

use thiserror::Error;

/// Guidance printed when no agent URL can be resolved.
pub const URL_GUIDANCE: &str = "No agent URL found! Please provide one of:
  - Set the BITTE_AGENT_URL environment variable
  - Pass a custom URL: agent-ctl validate --url https://your-agent.example.com";

#[derive(Debug, Error)]
#[error("no agent URL available")]
pub struct MissingAgentUrl;

/// Resolve the target agent URL. The flag always wins over the
/// environment; empty values count as absent.
pub fn resolve_agent_url(
    flag: Option<&str>,
    env_url: Option<&str>,
) -> Result<String, MissingAgentUrl> {
    for candidate in [flag, env_url].into_iter().flatten() {
        if !candidate.is_empty() {
            return Ok(candidate.to_string());
        }
    }
    Err(MissingAgentUrl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_environment() {
        let url = resolve_agent_url(Some("https://example.com"), Some("https://env.example.com"));
        assert_eq!(url.unwrap(), "https://example.com");
    }

    #[test]
    fn test_environment_used_without_flag() {
        let url = resolve_agent_url(None, Some("https://env.example.com"));
        assert_eq!(url.unwrap(), "https://env.example.com");
    }

    #[test]
    fn test_no_url_is_an_error_with_guidance() {
        assert!(resolve_agent_url(None, None).is_err());
        assert!(resolve_agent_url(Some(""), Some("")).is_err());
        assert!(URL_GUIDANCE.contains("BITTE_AGENT_URL"));
        assert!(URL_GUIDANCE.contains("--url"));
    }
}
