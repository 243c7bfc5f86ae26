//! Event-reminder notification construction.

use chrono::{Duration, Utc};

use campushub_entity::event::Event;
use campushub_entity::notification::{NewNotification, NotificationKind};

/// Title prefix that marks a notification as an event reminder. The
/// delete cascade keys off this prefix.
pub const EVENT_REMINDER_PREFIX: &str = "Event Reminder: ";

/// Longest description prefix shown in a reminder message.
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// How long an event-reminder notification stays visible.
const REMINDER_TTL_DAYS: i64 = 7;

/// Build the notification shown when a reminder fires. The message embeds
/// the event's actual date, not the time the user asked to be reminded at.
pub fn event_reminder_notification(event: &Event) -> NewNotification {
    let when = event
        .event_date
        .map(|d| d.format("%B %d, %Y at %H:%M").to_string())
        .unwrap_or_else(|| "soon".to_string());

    let mut message = format!("Don't forget! {} is happening on {}.", event.title, when);
    if let Some(description) = &event.description {
        let preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        message.push(' ');
        message.push_str(&preview);
        message.push_str("...");
    }

    NewNotification {
        title: format!("{EVENT_REMINDER_PREFIX}{}", event.title),
        message,
        kind: NotificationKind::Event,
        action_url: Some(format!("/myspace?eventId={}", event.id)),
        related_event_id: Some(event.id),
        expires_at: Some(Utc::now() + Duration::days(REMINDER_TTL_DAYS)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_entity::event::EventType;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn sample_event(description: Option<&str>) -> Event {
        let now = Utc::now();
        Event {
            id: Uuid::new_v4(),
            title: "Spring Concert".to_string(),
            description: description.map(str::to_string),
            event_type: EventType::Event,
            event_date: Some(Utc.with_ymd_and_hms(2025, 4, 12, 18, 30, 0).unwrap()),
            location: None,
            image_url: None,
            created_by: Uuid::new_v4(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn title_carries_reminder_prefix() {
        let built = event_reminder_notification(&sample_event(None));
        assert_eq!(built.title, "Event Reminder: Spring Concert");
        assert_eq!(built.kind, NotificationKind::Event);
    }

    #[test]
    fn message_embeds_event_date() {
        let built = event_reminder_notification(&sample_event(None));
        assert!(built.message.contains("April 12, 2025 at 18:30"));
    }

    #[test]
    fn action_url_and_related_id_reference_the_event() {
        let event = sample_event(None);
        let built = event_reminder_notification(&event);
        assert_eq!(built.action_url.unwrap(), format!("/myspace?eventId={}", event.id));
        assert_eq!(built.related_event_id, Some(event.id));
    }

    #[test]
    fn long_description_is_truncated_to_preview() {
        let long = "x".repeat(250);
        let built = event_reminder_notification(&sample_event(Some(&long)));
        assert!(built.message.contains(&"x".repeat(100)));
        assert!(!built.message.contains(&"x".repeat(101)));
        assert!(built.message.ends_with("..."));
    }

    #[test]
    fn expiry_is_about_a_week_out() {
        let built = event_reminder_notification(&sample_event(None));
        let expires = built.expires_at.unwrap();
        let days = (expires - Utc::now()).num_days();
        assert!((6..=7).contains(&days));
    }
}
