//! Reviewer notification mapping and formatting
//!
//! Pure functions over an immutable [`MappingConfig`] and a [`ReviewEvent`];
//! no state survives a call. Logins without a mapping contribute nothing,
//! so "no one to notify" comes back as `None` / an empty string rather
//! than an error.

use tracing::debug;

use crate::{MappingConfig, ReviewEvent};

/// The two notification outputs derived from one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Broadcast message for the shared channel, absent when no
    /// requested reviewer maps to a channel handle
    pub channel_message: Option<String>,

    /// `--user "handle"` arguments for the messaging CLI, space-joined;
    /// empty when no requested reviewer maps to a DM handle
    pub direct_message_args: String,
}

impl Notification {
    /// Compute both outputs for an event
    pub fn build(config: &MappingConfig, event: &ReviewEvent) -> Self {
        Self {
            channel_message: channel_message(config, event),
            direct_message_args: direct_message_arguments(config, event),
        }
    }
}

/// Extract the requested reviewers' logins, in request order
///
/// Duplicates are kept; entries without a login are skipped. An event
/// without a pull request or without reviewers yields an empty list.
pub fn extract_reviewers(event: &ReviewEvent) -> Vec<String> {
    let Some(pr) = &event.pull_request else {
        return Vec::new();
    };

    pr.requested_reviewers
        .iter()
        .filter_map(|reviewer| reviewer.login.clone())
        .collect()
}

/// Map logins to channel handles, skipping logins not in the table
pub fn map_to_channel(config: &MappingConfig, logins: &[String]) -> Vec<String> {
    logins
        .iter()
        .filter_map(|login| config.map_for_channel(login))
        .map(str::to_owned)
        .collect()
}

/// Map logins to direct-message handles, skipping logins not in the table
pub fn map_to_direct(config: &MappingConfig, logins: &[String]) -> Vec<String> {
    logins
        .iter()
        .filter_map(|login| config.map_for_direct_message(login))
        .map(str::to_owned)
        .collect()
}

/// Format the channel broadcast sentence
///
/// `None` when there is no one to mention. The plural suffix tracks the
/// mapped handle count, not the requested reviewer count.
pub fn format_channel_message(mapped: &[String], pr_url: &str) -> Option<String> {
    if mapped.is_empty() {
        return None;
    }

    let s = if mapped.len() > 1 { "s" } else { "" };

    Some(format!(
        "Assigned {} as reviewer{} for PR: {}",
        mapped.join(", "),
        s,
        pr_url
    ))
}

/// Format mapped handles as `--user "handle"` arguments, ready to be
/// passed to matrix-commander; empty input yields an empty string
pub fn format_direct_arguments(mapped: &[String]) -> String {
    mapped
        .iter()
        .map(|handle| format!("--user \"{}\"", handle))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The message to broadcast to the channel, if any
pub fn channel_message(config: &MappingConfig, event: &ReviewEvent) -> Option<String> {
    let logins = extract_reviewers(event);
    let mapped = map_to_channel(config, &logins);
    debug!(?logins, ?mapped, "mapped requested reviewers for channel");

    let pr = event.pull_request.as_ref()?;
    format_channel_message(&mapped, &pr.html_url)
}

/// The direct-message argument string, possibly empty
pub fn direct_message_arguments(config: &MappingConfig, event: &ReviewEvent) -> String {
    let logins = extract_reviewers(event);
    let mapped = map_to_direct(config, &logins);
    debug!(?logins, ?mapped, "mapped requested reviewers for direct messages");

    format_direct_arguments(&mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{PullRequest, Reviewer};

    fn event(url: &str, logins: &[Option<&str>]) -> ReviewEvent {
        ReviewEvent {
            pull_request: Some(PullRequest {
                html_url: url.to_string(),
                requested_reviewers: logins
                    .iter()
                    .map(|login| Reviewer {
                        login: login.map(str::to_owned),
                    })
                    .collect(),
            }),
        }
    }

    fn config() -> MappingConfig {
        MappingConfig::parse(
            r#"
[channel]
alice = "@alice:example.org"
carol = "@carol:example.org"

[direct_message]
bob = "@bob:example.org"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_extract_reviewers_preserves_order_and_duplicates() {
        let event = event(
            "https://example/pr/1",
            &[Some("bob"), Some("alice"), Some("bob")],
        );
        assert_eq!(extract_reviewers(&event), vec!["bob", "alice", "bob"]);
    }

    #[test]
    fn test_extract_reviewers_skips_missing_logins() {
        let event = event("https://example/pr/1", &[Some("alice"), None, Some("bob")]);
        assert_eq!(extract_reviewers(&event), vec!["alice", "bob"]);
    }

    #[test]
    fn test_extract_reviewers_empty_event() {
        let event = ReviewEvent { pull_request: None };
        assert!(extract_reviewers(&event).is_empty());

        let event = event_without_reviewers();
        assert!(extract_reviewers(&event).is_empty());
    }

    fn event_without_reviewers() -> ReviewEvent {
        event("https://example/pr/1", &[])
    }

    #[test]
    fn test_map_to_channel_skips_unmapped() {
        let logins = vec![
            "alice".to_string(),
            "bob".to_string(),
            "carol".to_string(),
        ];
        assert_eq!(
            map_to_channel(&config(), &logins),
            vec!["@alice:example.org", "@carol:example.org"]
        );
    }

    #[test]
    fn test_map_to_direct_skips_unmapped() {
        let logins = vec![
            "alice".to_string(),
            "bob".to_string(),
            "carol".to_string(),
        ];
        assert_eq!(map_to_direct(&config(), &logins), vec!["@bob:example.org"]);
    }

    #[test]
    fn test_map_keeps_duplicate_occurrences() {
        let logins = vec!["alice".to_string(), "alice".to_string()];
        assert_eq!(
            map_to_channel(&config(), &logins),
            vec!["@alice:example.org", "@alice:example.org"]
        );
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let logins = vec!["alice".to_string(), "bob".to_string()];
        let config = config();
        assert_eq!(
            map_to_channel(&config, &logins),
            map_to_channel(&config, &logins)
        );
        assert_eq!(
            map_to_direct(&config, &logins),
            map_to_direct(&config, &logins)
        );
    }

    #[test]
    fn test_format_channel_message_singular() {
        let mapped = vec!["@alice:example.org".to_string()];
        assert_eq!(
            format_channel_message(&mapped, "https://example/pr/42"),
            Some(
                "Assigned @alice:example.org as reviewer for PR: https://example/pr/42"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_format_channel_message_plural() {
        let mapped = vec![
            "@alice:example.org".to_string(),
            "@carol:example.org".to_string(),
        ];
        assert_eq!(
            format_channel_message(&mapped, "https://example/pr/42"),
            Some(
                "Assigned @alice:example.org, @carol:example.org as reviewers for PR: https://example/pr/42"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_format_channel_message_empty_is_absent() {
        assert_eq!(format_channel_message(&[], "https://example/pr/42"), None);
    }

    #[test]
    fn test_format_direct_arguments() {
        let mapped = vec![
            "@bob:example.org".to_string(),
            "@dan:example.org".to_string(),
        ];
        assert_eq!(
            format_direct_arguments(&mapped),
            r#"--user "@bob:example.org" --user "@dan:example.org""#
        );
    }

    #[test]
    fn test_format_direct_arguments_empty() {
        assert_eq!(format_direct_arguments(&[]), "");
    }

    #[test]
    fn test_channel_message_end_to_end() {
        // Worked example: alice and carol map, bob does not
        let event = event(
            "https://example/pr/42",
            &[Some("alice"), Some("bob"), Some("carol")],
        );
        assert_eq!(
            channel_message(&config(), &event),
            Some(
                "Assigned @alice:example.org, @carol:example.org as reviewers for PR: https://example/pr/42"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_direct_message_arguments_end_to_end() {
        let event = event(
            "https://example/pr/42",
            &[Some("alice"), Some("bob"), Some("carol")],
        );
        assert_eq!(
            direct_message_arguments(&config(), &event),
            r#"--user "@bob:example.org""#
        );
    }

    #[test]
    fn test_nothing_to_send_when_nobody_maps() {
        let event = event("https://example/pr/42", &[Some("mallory")]);
        let notification = Notification::build(&config(), &event);
        assert_eq!(notification.channel_message, None);
        assert_eq!(notification.direct_message_args, "");
    }

    #[test]
    fn test_no_reviewers_yields_empty_outputs() {
        let notification = Notification::build(&config(), &event_without_reviewers());
        assert_eq!(notification.channel_message, None);
        assert_eq!(notification.direct_message_args, "");
    }
}
