//! Pure projection of session state to render payloads.

use serde::{Deserialize, Serialize};

use crate::chat::{ChatStore, Message};
use crate::document::DocumentRegistry;
use crate::session::{ALL_DOCUMENTS_LABEL, AnswerMode, SessionState, View};

/// What the chatbot screen should present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatbotView {
    /// No thread is active; the user must start a chat first.
    NoActiveChat,
    /// The active thread's title and ordered message history.
    Thread {
        title: String,
        messages: Vec<Message>,
    },
}

/// Screen-level render payload, derived from session state.
///
/// Recomputed after every action; holds owned data so the rendering layer
/// never borrows into the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewModel {
    /// Counts for the dashboard screen.
    Dashboard {
        document_count: usize,
        chat_count: usize,
    },
    /// The sorted document list.
    Documents { documents: Vec<String> },
    /// Current answer configuration and the scope choices on offer.
    Settings {
        mode: AnswerMode,
        scope_options: Vec<String>,
    },
    /// The conversation screen.
    Chatbot(ChatbotView),
}

/// Maps the current session state to the payload its view should render.
///
/// Pure and idempotent: no mutation, recomputed from scratch on every call.
pub fn route(state: &SessionState, chats: &ChatStore, documents: &DocumentRegistry) -> ViewModel {
    match state.view {
        View::Dashboard => ViewModel::Dashboard {
            document_count: documents.len(),
            chat_count: chats.len(),
        },
        View::Documents => ViewModel::Documents {
            documents: documents.names(),
        },
        View::Settings => {
            let mut scope_options = vec![ALL_DOCUMENTS_LABEL.to_string()];
            scope_options.extend(documents.names());
            ViewModel::Settings {
                mode: state.mode,
                scope_options,
            }
        }
        View::Chatbot => {
            let chatbot = state
                .active_chat_id
                .as_deref()
                .and_then(|id| chats.get(id))
                .map(|thread| ChatbotView::Thread {
                    title: thread.title.clone(),
                    messages: thread.messages.clone(),
                })
                .unwrap_or(ChatbotView::NoActiveChat);
            ViewModel::Chatbot(chatbot)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DocumentScope;

    fn fixtures() -> (SessionState, ChatStore, DocumentRegistry) {
        let mut documents = DocumentRegistry::new();
        documents.add("welding.pdf");
        documents.add("bolts.pdf");

        let mut chats = ChatStore::new();
        let id = chats.create_thread();
        chats
            .append_message(&id, "What grade of bolt?", "Grade 8.8", vec![])
            .unwrap();

        let state = SessionState {
            active_chat_id: Some(id),
            ..SessionState::default()
        };
        (state, chats, documents)
    }

    #[test]
    fn test_dashboard_counts() {
        let (mut state, chats, documents) = fixtures();
        state.view = View::Dashboard;

        assert_eq!(
            route(&state, &chats, &documents),
            ViewModel::Dashboard {
                document_count: 2,
                chat_count: 1,
            }
        );
    }

    #[test]
    fn test_documents_list_is_sorted() {
        let (mut state, chats, documents) = fixtures();
        state.view = View::Documents;

        assert_eq!(
            route(&state, &chats, &documents),
            ViewModel::Documents {
                documents: vec!["bolts.pdf".to_string(), "welding.pdf".to_string()],
            }
        );
    }

    #[test]
    fn test_settings_offers_all_documents_first() {
        let (mut state, chats, documents) = fixtures();
        state.view = View::Settings;
        state.mode = AnswerMode::Strict;
        state.scope = DocumentScope::Document("bolts.pdf".to_string());

        assert_eq!(
            route(&state, &chats, &documents),
            ViewModel::Settings {
                mode: AnswerMode::Strict,
                scope_options: vec![
                    "All Documents".to_string(),
                    "bolts.pdf".to_string(),
                    "welding.pdf".to_string(),
                ],
            }
        );
    }

    #[test]
    fn test_chatbot_with_active_thread() {
        let (state, chats, documents) = fixtures();

        match route(&state, &chats, &documents) {
            ViewModel::Chatbot(ChatbotView::Thread { title, messages }) => {
                assert_eq!(title, "What grade of bolt?");
                assert_eq!(messages.len(), 1);
                assert_eq!(messages[0].answer, "Grade 8.8");
            }
            other => panic!("unexpected view model: {:?}", other),
        }
    }

    #[test]
    fn test_chatbot_without_active_thread() {
        let (mut state, chats, documents) = fixtures();
        state.active_chat_id = None;

        assert_eq!(
            route(&state, &chats, &documents),
            ViewModel::Chatbot(ChatbotView::NoActiveChat)
        );
    }

    #[test]
    fn test_route_is_idempotent() {
        let (state, chats, documents) = fixtures();
        assert_eq!(
            route(&state, &chats, &documents),
            route(&state, &chats, &documents)
        );
    }
}
