//! Soft-link extraction from notification action URLs.
//!
//! Older notification rows carry their event reference only as an
//! `eventId=` query parameter inside `action_url`. New rows store
//! `related_event_id` directly; this parser is the fallback.

use uuid::Uuid;

const EVENT_ID_MARKER: &str = "eventId=";

/// Pull an event id out of an action URL such as `/myspace?eventId=<uuid>`.
/// Returns `None` when the marker is absent or the id does not parse.
pub fn extract_event_id(action_url: &str) -> Option<Uuid> {
    let start = action_url.find(EVENT_ID_MARKER)? + EVENT_ID_MARKER.len();
    let rest = &action_url[start..];
    let end = rest.find('&').unwrap_or(rest.len());
    Uuid::parse_str(&rest[..end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_simple_url() {
        let id = Uuid::new_v4();
        let url = format!("/myspace?eventId={id}");
        assert_eq!(extract_event_id(&url), Some(id));
    }

    #[test]
    fn extracts_id_followed_by_other_params() {
        let id = Uuid::new_v4();
        let url = format!("/myspace?eventId={id}&tab=upcoming");
        assert_eq!(extract_event_id(&url), Some(id));
    }

    #[test]
    fn missing_marker_yields_none() {
        assert_eq!(extract_event_id("/myspace?tab=upcoming"), None);
    }

    #[test]
    fn malformed_id_yields_none() {
        assert_eq!(extract_event_id("/myspace?eventId=not-a-uuid"), None);
    }
}
