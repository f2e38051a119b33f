//! Multi-turn chat on top of a stateless generation call.
//!
//! A session keeps two views of the conversation. The comprehensive history is
//! a verbatim transcript of every turn sent and received. The curated history
//! is derived from it on demand and is what gets sent as context; turns the
//! model answered with empty or malformed content are left out of it, so one
//! bad reply does not poison later requests.

use super::curate::extract_curated_history;
use crate::ai::gemini::types::{
    Content, GenerateContentConfig, GenerateContentResponse, Part, Role,
};
use crate::ai::{GenerationService, ResponseStream};
use crate::{Error, Result};
use futures::Stream;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};
use tracing::{debug, warn};
use uuid::Uuid;

/// One outgoing turn: a role (defaults to `user`), at least one part and an
/// optional cancellation token for the call that sends it.
#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub parts: Vec<Part>,
    pub cancel: Option<CancellationToken>,
}

impl Message {
    pub fn new(role: Role, parts: Vec<Part>) -> Self {
        Self {
            role,
            parts,
            cancel: None,
        }
    }

    pub fn user<P: Into<Part>>(parts: impl IntoIterator<Item = P>) -> Self {
        Self::new(Role::User, parts.into_iter().map(Into::into).collect())
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::user([text])
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::user([text])
    }
}

impl From<Part> for Message {
    fn from(part: Part) -> Self {
        Message::user([part])
    }
}

impl From<Vec<Part>> for Message {
    fn from(parts: Vec<Part>) -> Self {
        Message::user(parts)
    }
}

/// A single conversation with a fixed model and configuration.
///
/// Sends take `&mut self`: one writer at a time, and a [`ChatStream`] keeps
/// the session borrowed until it is dropped. Run one session per
/// conversation; share the client, not the session.
pub struct ChatSession {
    id: Uuid,
    model: String,
    config: GenerateContentConfig,
    client: Arc<dyn GenerationService>,
    history: Vec<Content>,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("model", &self.model)
            .field("config", &self.config)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl ChatSession {
    /// Starts a session. `history` is stored as given, without validation.
    pub fn new(
        client: Arc<dyn GenerationService>,
        model: impl Into<String>,
        config: GenerateContentConfig,
        history: Vec<Content>,
    ) -> Result<Self> {
        let model = model.into();
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();
        if model.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "a model id is required to start a chat".to_string(),
            ));
        }

        let id = Uuid::new_v4();
        debug!(session_id = %id, model = %model, seeded = history.len(), "Created chat session");

        Ok(Self {
            id,
            model,
            config,
            client,
            history,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn config(&self) -> &GenerateContentConfig {
        &self.config
    }

    /// Every turn sent and received, valid or not, oldest first.
    pub fn comprehensive_history(&self) -> &[Content] {
        &self.history
    }

    /// Only the turns that will be sent as context on the next request.
    pub fn curated_history(&self) -> Result<Vec<Content>> {
        extract_curated_history(&self.history)
    }

    pub fn history(&self, curated: bool) -> Result<Vec<Content>> {
        if curated {
            self.curated_history()
        } else {
            Ok(self.history.clone())
        }
    }

    /// Sends one turn and waits for the whole reply.
    ///
    /// On success the outgoing turn and the reply's first candidate are both
    /// recorded, even when the reply is empty. On any error, including
    /// cancellation, history is left untouched.
    pub async fn send_message(
        &mut self,
        message: impl Into<Message>,
    ) -> Result<GenerateContentResponse> {
        let Message {
            role,
            parts,
            cancel,
        } = message.into();
        let (input, contents) = self.prepare(role, parts)?;

        debug!(
            session_id = %self.id,
            model = %self.model,
            context = contents.len(),
            "Sending chat message"
        );

        let call = self.client.generate(&self.model, &contents, &self.config);
        let response = match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(session_id = %self.id, "Chat message cancelled");
                    return Err(Error::Cancelled);
                }
                response = call => response?,
            },
            None => call.await?,
        };

        self.history.push(input);
        self.history.push(recorded_output(self.id, &response));
        Ok(response)
    }

    /// Sends one turn and returns the reply as a stream of fragments.
    ///
    /// The outgoing turn is recorded immediately. Each fragment is recorded as
    /// its own history entry at the moment it is pulled from the stream, so
    /// fragments that are never pulled are never recorded. Errors from the
    /// backend come through as stream items and record nothing.
    pub fn send_message_stream(&mut self, message: impl Into<Message>) -> Result<ChatStream<'_>> {
        let Message {
            role,
            parts,
            cancel,
        } = message.into();
        let (input, contents) = self.prepare(role, parts)?;

        debug!(
            session_id = %self.id,
            model = %self.model,
            context = contents.len(),
            "Streaming chat message"
        );

        let inner = self
            .client
            .generate_stream(&self.model, &contents, &self.config);
        self.history.push(input);

        Ok(ChatStream {
            session_id: self.id,
            history: &mut self.history,
            inner,
            cancelled: cancel.map(|token| Box::pin(token.cancelled_owned())),
            finished: false,
        })
    }

    /// Builds the outgoing turn and the context to send with it.
    fn prepare(&self, role: Role, parts: Vec<Part>) -> Result<(Content, Vec<Content>)> {
        if parts.is_empty() {
            return Err(Error::InvalidArgument(
                "a message needs at least one part".to_string(),
            ));
        }

        let input = Content::new(role, parts);
        let mut contents = self.curated_history()?;
        contents.push(input.clone());
        Ok((input, contents))
    }
}

/// What gets recorded for a reply: its first candidate's content, or an empty
/// `model` turn when there is none.
fn recorded_output(session_id: Uuid, response: &GenerateContentResponse) -> Content {
    if !response.is_valid() {
        warn!(
            session_id = %session_id,
            finish_reason = response.finish_reason().unwrap_or("none"),
            "Model returned an unusable turn; it will be left out of curated history"
        );
    }

    response
        .first_content()
        .cloned()
        .unwrap_or_else(|| Content::new(Role::Model, Vec::new()))
}

/// Reply fragments of [`ChatSession::send_message_stream`].
///
/// Pull-based: nothing is read from the backend unless the stream is polled.
/// Dropping it early closes the connection and leaves later fragments
/// unrecorded.
pub struct ChatStream<'a> {
    session_id: Uuid,
    history: &'a mut Vec<Content>,
    inner: ResponseStream,
    cancelled: Option<Pin<Box<WaitForCancellationFutureOwned>>>,
    finished: bool,
}

impl ChatStream<'_> {
    fn close(&mut self) {
        self.finished = true;
        self.inner = Box::pin(futures::stream::empty());
    }
}

impl Stream for ChatStream<'_> {
    type Item = Result<GenerateContentResponse>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.finished {
            return Poll::Ready(None);
        }

        if let Some(cancelled) = this.cancelled.as_mut() {
            if cancelled.as_mut().poll(cx).is_ready() {
                debug!(session_id = %this.session_id, "Chat stream cancelled");
                this.close();
                return Poll::Ready(Some(Err(Error::Cancelled)));
            }
        }

        match this.inner.as_mut().poll_next(cx) {
            Poll::Ready(Some(Ok(fragment))) => {
                this.history
                    .push(recorded_output(this.session_id, &fragment));
                Poll::Ready(Some(Ok(fragment)))
            }
            Poll::Ready(Some(Err(e))) => {
                warn!(session_id = %this.session_id, "Chat stream error: {}", e);
                Poll::Ready(Some(Err(e)))
            }
            Poll::Ready(None) => {
                this.close();
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Creates chat sessions that share one generation client.
#[derive(Clone)]
pub struct Chats {
    client: Arc<dyn GenerationService>,
}

impl Chats {
    pub fn new(client: Arc<dyn GenerationService>) -> Self {
        Self { client }
    }

    pub fn create(
        &self,
        model: &str,
        config: Option<GenerateContentConfig>,
        history: Vec<Content>,
    ) -> Result<ChatSession> {
        ChatSession::new(
            Arc::clone(&self.client),
            model,
            config.unwrap_or_default(),
            history,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::types::{Candidate, ROLE_MODEL, ROLE_USER};
    use crate::ai::MockGenerationClient;
    use futures::StreamExt;
    use pretty_assertions::assert_eq;

    const MODEL: &str = "gemini-2.0-flash";

    fn session_with(mock: &Arc<MockGenerationClient>, history: Vec<Content>) -> ChatSession {
        let client: Arc<dyn GenerationService> = mock.clone();
        ChatSession::new(client, MODEL, GenerateContentConfig::default(), history).unwrap()
    }

    fn invalid_model_response() -> GenerateContentResponse {
        GenerateContentResponse::from_content(Content {
            role: Some(ROLE_MODEL.to_string()),
            parts: vec![Part::text("")],
        })
    }

    fn api_error() -> Error {
        Error::Api {
            status: 503,
            message: "unavailable".to_string(),
        }
    }

    #[test]
    fn test_new_stores_seed_history_verbatim() {
        let mock = Arc::new(MockGenerationClient::new());
        let seed = vec![
            Content::user("Hello"),
            Content::model("Hi there!"),
            Content::user("This will be invalid"),
            Content::new(Role::Model, vec![]),
        ];
        let chat = session_with(&mock, seed.clone());

        assert_eq!(chat.history(false).unwrap(), seed);
        assert_eq!(
            chat.history(true).unwrap(),
            vec![Content::user("Hello"), Content::model("Hi there!")]
        );
    }

    #[test]
    fn test_new_rejects_empty_model() {
        let client: Arc<dyn GenerationService> = Arc::new(MockGenerationClient::new());
        let err = ChatSession::new(client, "models/", GenerateContentConfig::default(), vec![])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_new_strips_models_prefix() {
        let client: Arc<dyn GenerationService> = Arc::new(MockGenerationClient::new());
        let chat = ChatSession::new(
            client,
            "models/gemini-2.0-flash",
            GenerateContentConfig::default(),
            vec![],
        )
        .unwrap();
        assert_eq!(chat.model(), "gemini-2.0-flash");
    }

    #[test]
    fn test_curated_history_surfaces_malformed_role() {
        let mock = Arc::new(MockGenerationClient::new());
        let chat = session_with(
            &mock,
            vec![Content {
                role: Some("system".to_string()),
                parts: vec![Part::text("rules")],
            }],
        );

        assert_eq!(chat.history(false).unwrap().len(), 1);
        assert!(matches!(chat.history(true), Err(Error::MalformedRole(_))));
    }

    #[tokio::test]
    async fn test_send_message_records_both_turns() {
        let mock = Arc::new(MockGenerationClient::new().with_text_response("1 + 2 = 3"));
        let mut chat = session_with(&mock, vec![]);

        let response = chat.send_message("What is 1 + 2?").await.unwrap();

        assert_eq!(response.text().as_deref(), Some("1 + 2 = 3"));
        assert_eq!(
            chat.comprehensive_history(),
            &[Content::user("What is 1 + 2?"), Content::model("1 + 2 = 3")]
        );
        assert_eq!(chat.curated_history().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_send_message_sends_curated_history_plus_new_turn() {
        let mock = Arc::new(
            MockGenerationClient::new()
                .with_text_response("3")
                .with_text_response("4"),
        );
        let mut chat = session_with(&mock, vec![]);

        chat.send_message("What is 1 + 2?").await.unwrap();
        chat.send_message("Add 1 to the previous result.")
            .await
            .unwrap();

        let requests = mock.recorded_requests();
        assert_eq!(requests[0], vec![Content::user("What is 1 + 2?")]);
        assert_eq!(
            requests[1],
            vec![
                Content::user("What is 1 + 2?"),
                Content::model("3"),
                Content::user("Add 1 to the previous result."),
            ]
        );
    }

    #[tokio::test]
    async fn test_send_message_with_multiple_parts() {
        let mock = Arc::new(MockGenerationClient::new());
        let mut chat = session_with(&mock, vec![]);

        chat.send_message(vec![Part::text("What is "), Part::text("1 + 2?")])
            .await
            .unwrap();

        assert_eq!(chat.comprehensive_history()[0].parts.len(), 2);
        assert_eq!(
            chat.comprehensive_history()[0].role.as_deref(),
            Some(ROLE_USER)
        );
    }

    #[tokio::test]
    async fn test_send_message_with_model_role() {
        let mock = Arc::new(MockGenerationClient::new());
        let mut chat = session_with(&mock, vec![]);

        chat.send_message(Message::new(Role::Model, vec![Part::text("primer")]))
            .await
            .unwrap();

        assert_eq!(
            chat.comprehensive_history()[0].role.as_deref(),
            Some(ROLE_MODEL)
        );
    }

    #[tokio::test]
    async fn test_send_message_rejects_empty_parts() {
        let mock = Arc::new(MockGenerationClient::new());
        let mut chat = session_with(&mock, vec![]);

        let err = chat.send_message(Vec::<Part>::new()).await.unwrap_err();

        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(mock.get_call_count(), 0);
        assert!(chat.comprehensive_history().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_reply_is_recorded_but_not_curated() {
        let mock = Arc::new(MockGenerationClient::new().with_response(invalid_model_response()));
        let mut chat = session_with(&mock, vec![]);

        let response = chat.send_message("Hello").await.unwrap();

        assert!(!response.is_valid());
        assert_eq!(chat.comprehensive_history().len(), 2);
        assert!(chat.curated_history().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_conversation_continues_after_invalid_reply() {
        let mock = Arc::new(
            MockGenerationClient::new()
                .with_text_response("Hi!")
                .with_response(invalid_model_response())
                .with_text_response("Still here."),
        );
        let mut chat = session_with(&mock, vec![]);

        chat.send_message("Hello").await.unwrap();
        chat.send_message("Say nothing").await.unwrap();
        chat.send_message("Are you there?").await.unwrap();

        assert_eq!(
            mock.recorded_requests()[2],
            vec![
                Content::user("Hello"),
                Content::model("Hi!"),
                Content::user("Are you there?"),
            ]
        );
        assert_eq!(chat.comprehensive_history().len(), 6);
        assert_eq!(chat.curated_history().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_reply_without_candidates_records_empty_model_turn() {
        let mock = Arc::new(MockGenerationClient::new().with_response(GenerateContentResponse {
            candidates: vec![Candidate::default()],
            ..Default::default()
        }));
        let mut chat = session_with(&mock, vec![]);

        chat.send_message("Hello").await.unwrap();

        assert_eq!(
            chat.comprehensive_history(),
            &[Content::user("Hello"), Content::new(Role::Model, vec![])]
        );
        assert!(chat.curated_history().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_records_nothing() {
        let mock = Arc::new(MockGenerationClient::new().with_error(api_error()));
        let mut chat = session_with(&mock, vec![Content::user("a"), Content::model("b")]);

        let err = chat.send_message("Hello").await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(chat.comprehensive_history().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_history_fails_before_sending() {
        let mock = Arc::new(MockGenerationClient::new());
        let mut chat = session_with(
            &mock,
            vec![Content {
                role: Some("tool".to_string()),
                parts: vec![Part::text("x")],
            }],
        );

        let err = chat.send_message("Hello").await.unwrap_err();

        assert!(matches!(err, Error::MalformedRole(_)));
        assert_eq!(mock.get_call_count(), 0);
        assert_eq!(chat.comprehensive_history().len(), 1);
        assert!(chat.send_message_stream("Hello").is_err());
    }

    #[tokio::test]
    async fn test_cancelled_send_records_nothing() {
        let mock = Arc::new(MockGenerationClient::new());
        let mut chat = session_with(&mock, vec![]);
        let token = CancellationToken::new();
        token.cancel();

        let err = chat
            .send_message(Message::from("Hello").with_cancellation(token))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Cancelled));
        assert!(chat.comprehensive_history().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_while_call_in_flight_records_nothing() {
        let mock = Arc::new(
            MockGenerationClient::new()
                .with_text_response("too late")
                .with_delay(std::time::Duration::from_secs(30)),
        );
        let mut chat = session_with(&mock, vec![Content::user("a"), Content::model("b")]);
        let token = CancellationToken::new();

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let err = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            chat.send_message(Message::from("Hello").with_cancellation(token)),
        )
        .await
        .expect("cancellation should end the call")
        .unwrap_err();

        assert!(matches!(err, Error::Cancelled));
        assert_eq!(mock.get_call_count(), 1);
        assert_eq!(
            chat.comprehensive_history(),
            &[Content::user("a"), Content::model("b")]
        );
    }

    #[tokio::test]
    async fn test_uncancelled_token_does_not_interfere() {
        let mock = Arc::new(MockGenerationClient::new().with_text_response("ok"));
        let mut chat = session_with(&mock, vec![]);

        let response = chat
            .send_message(Message::from("Hello").with_cancellation(CancellationToken::new()))
            .await
            .unwrap();

        assert_eq!(response.text().as_deref(), Some("ok"));
        assert_eq!(chat.comprehensive_history().len(), 2);
    }

    #[tokio::test]
    async fn test_stream_records_each_fragment_separately() {
        let mock = Arc::new(MockGenerationClient::new().with_text_stream(&["1 + ", "2 = ", "3"]));
        let mut chat = session_with(&mock, vec![]);

        let texts: Vec<String> = chat
            .send_message_stream("What is 1 + 2?")
            .unwrap()
            .map(|item| item.unwrap().text().unwrap())
            .collect()
            .await;

        assert_eq!(texts, vec!["1 + ", "2 = ", "3"]);
        assert_eq!(
            chat.comprehensive_history(),
            &[
                Content::user("What is 1 + 2?"),
                Content::model("1 + "),
                Content::model("2 = "),
                Content::model("3"),
            ]
        );
        assert_eq!(chat.curated_history().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_stream_uses_curated_history_at_call_time() {
        let mock = Arc::new(MockGenerationClient::new().with_text_stream(&["two"]));
        let mut chat = session_with(
            &mock,
            vec![
                Content::user("zero"),
                Content::new(Role::Model, vec![]),
                Content::user("one"),
                Content::model("uno"),
            ],
        );

        let _ = chat
            .send_message_stream("two?")
            .unwrap()
            .collect::<Vec<_>>()
            .await;

        assert_eq!(
            mock.recorded_requests()[0],
            vec![
                Content::user("one"),
                Content::model("uno"),
                Content::user("two?"),
            ]
        );
    }

    #[tokio::test]
    async fn test_stream_stopped_after_first_fragment() {
        let mock = Arc::new(MockGenerationClient::new().with_text_stream(&["a", "b", "c"]));
        let mut chat = session_with(&mock, vec![]);

        {
            let mut stream = chat.send_message_stream("Hello").unwrap();
            let first = stream.next().await.unwrap().unwrap();
            assert_eq!(first.text().as_deref(), Some("a"));
        }

        assert_eq!(
            chat.comprehensive_history(),
            &[Content::user("Hello"), Content::model("a")]
        );
    }

    #[tokio::test]
    async fn test_stream_records_user_turn_before_first_pull() {
        let mock = Arc::new(MockGenerationClient::new().with_text_stream(&["a"]));
        let mut chat = session_with(&mock, vec![]);

        drop(chat.send_message_stream("Hello").unwrap());

        assert_eq!(chat.comprehensive_history(), &[Content::user("Hello")]);
    }

    #[tokio::test]
    async fn test_stream_errors_are_forwarded_and_not_recorded() {
        let mock = Arc::new(MockGenerationClient::new().with_stream(vec![
            Ok(GenerateContentResponse::from_content(Content::model("a"))),
            Err(api_error()),
            Ok(GenerateContentResponse::from_content(Content::model("b"))),
        ]));
        let mut chat = session_with(&mock, vec![]);

        let items: Vec<Result<GenerateContentResponse>> =
            chat.send_message_stream("Hello").unwrap().collect().await;

        assert_eq!(items.len(), 3);
        assert!(items[1].is_err());
        assert_eq!(
            chat.comprehensive_history(),
            &[
                Content::user("Hello"),
                Content::model("a"),
                Content::model("b"),
            ]
        );
    }

    #[tokio::test]
    async fn test_stream_invalid_fragment_drops_turn_from_curated() {
        let mock = Arc::new(MockGenerationClient::new().with_stream(vec![
            Ok(GenerateContentResponse::from_content(Content::model("a"))),
            Ok(invalid_model_response()),
        ]));
        let mut chat = session_with(&mock, vec![Content::user("q"), Content::model("r")]);

        let _ = chat
            .send_message_stream("Hello")
            .unwrap()
            .collect::<Vec<_>>()
            .await;

        assert_eq!(chat.comprehensive_history().len(), 5);
        assert_eq!(
            chat.curated_history().unwrap(),
            vec![Content::user("q"), Content::model("r")]
        );
    }

    #[tokio::test]
    async fn test_stream_cancellation_stops_recording() {
        let mock = Arc::new(MockGenerationClient::new().with_text_stream(&["a", "b", "c"]));
        let mut chat = session_with(&mock, vec![]);
        let token = CancellationToken::new();

        let items = {
            let mut stream = chat
                .send_message_stream(Message::from("Hello").with_cancellation(token.clone()))
                .unwrap();
            let mut items = vec![stream.next().await.unwrap()];
            token.cancel();
            while let Some(item) = stream.next().await {
                items.push(item);
            }
            items
        };

        assert_eq!(items.len(), 2);
        assert!(matches!(items[1], Err(Error::Cancelled)));
        assert_eq!(
            chat.comprehensive_history(),
            &[Content::user("Hello"), Content::model("a")]
        );
    }

    #[tokio::test]
    async fn test_chats_factory_shares_client() {
        let mock = Arc::new(
            MockGenerationClient::new()
                .with_text_response("one")
                .with_text_response("two"),
        );
        let client: Arc<dyn GenerationService> = mock.clone();
        let chats = Chats::new(client);

        let config = GenerateContentConfig {
            temperature: Some(0.5),
            ..Default::default()
        };
        let mut first = chats.create(MODEL, Some(config), vec![]).unwrap();
        let mut second = chats.create(MODEL, None, vec![]).unwrap();

        first.send_message("a").await.unwrap();
        second.send_message("b").await.unwrap();

        assert_eq!(first.config().temperature, Some(0.5));
        assert_eq!(second.config().temperature, None);
        assert_eq!(first.comprehensive_history().len(), 2);
        assert_eq!(second.comprehensive_history().len(), 2);
        assert_ne!(first.id(), second.id());
        assert_eq!(mock.get_call_count(), 2);
    }
}
