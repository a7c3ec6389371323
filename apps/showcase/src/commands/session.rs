//! # Session Commands

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use super::Command;
use crate::error::ApiError;
use crate::state::SessionState;

/// What a session command recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum SessionEvent {
    PageView { page: String, recorded: bool },
    Scroll { page: String, milestones: Vec<u8> },
    Click { accepted: bool },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub event: SessionEvent,
}

/// Applies a session command.
pub fn dispatch(session: &SessionState, command: &Command) -> Result<SessionResponse, ApiError> {
    debug!(?command, "session command");

    let event = match command {
        Command::Page(page) => SessionEvent::PageView {
            page: page.clone(),
            recorded: session.page_view(page),
        },
        Command::Route(page) => SessionEvent::PageView {
            page: page.clone(),
            recorded: session.navigate(page),
        },
        Command::Scroll { offset, height } => SessionEvent::Scroll {
            milestones: session.scroll(*offset, *height),
            page: session.current_page(),
        },
        Command::Click(now_ms) => SessionEvent::Click {
            accepted: session.click(*now_ms),
        },
        other => {
            return Err(ApiError::invalid_command(format!(
                "{:?} is not a session command",
                other
            )))
        }
    };

    Ok(SessionResponse {
        session_id: session.id(),
        event,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_and_route_events() {
        let session = SessionState::new("/docs");

        let response = dispatch(&session, &Command::Page("/docs".to_string())).unwrap();
        assert_eq!(
            response.event,
            SessionEvent::PageView {
                page: "/docs".to_string(),
                recorded: false
            }
        );

        let response = dispatch(&session, &Command::Route("/docs".to_string())).unwrap();
        assert_eq!(
            response.event,
            SessionEvent::PageView {
                page: "/docs".to_string(),
                recorded: true
            }
        );
    }

    #[test]
    fn test_scroll_event_serialization() {
        let session = SessionState::new("/docs");
        let response = dispatch(
            &session,
            &Command::Scroll {
                offset: 760.0,
                height: 1000.0,
            },
        )
        .unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["event"], "scroll");
        assert_eq!(json["page"], "/docs");
        assert_eq!(json["milestones"], serde_json::json!([25, 50, 75]));
        assert_eq!(json["sessionId"], session.id().to_string());
    }

    #[test]
    fn test_picker_command_rejected() {
        let session = SessionState::new("/docs");
        assert!(dispatch(&session, &Command::Open).is_err());
    }
}
