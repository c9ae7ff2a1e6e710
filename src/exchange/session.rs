use super::{
    ConfirmRequest, ExchangeError, ExchangeResponse, PendingGlossary, ServerStage, StartRequest,
    Transport,
};
use crate::glossary::{GlossaryMapping, parse_glossary_block};
use crate::transcript::{EntryKind, Transcript};

/// Where a session stands in the two-stage protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExchangeStage {
    /// Ready for a new message.
    #[default]
    Start,
    /// The backend offered glossary candidates for `message`.
    AwaitingConfirmation {
        message: String,
        pending: PendingGlossary,
    },
}

/// Result of a successful exchange step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Candidates are waiting for [`ExchangeSession::confirm`].
    NeedsConfirmation,
    /// The reply has been appended to the transcript.
    Completed,
}

/// State of one conversation: exchange stage, active glossary and transcript.
///
/// Transport and protocol failures append one error entry and leave the
/// stage and glossary exactly as they were before the call.
#[derive(Debug, Default)]
pub struct ExchangeSession {
    stage: ExchangeStage,
    glossary: GlossaryMapping,
    transcript: Transcript,
}

impl ExchangeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn stage(&self) -> &ExchangeStage {
        &self.stage
    }

    pub const fn is_awaiting_confirmation(&self) -> bool {
        matches!(self.stage, ExchangeStage::AwaitingConfirmation { .. })
    }

    /// Candidates awaiting confirmation, if any.
    pub const fn candidates(&self) -> Option<&PendingGlossary> {
        match &self.stage {
            ExchangeStage::AwaitingConfirmation { pending, .. } => Some(pending),
            ExchangeStage::Start => None,
        }
    }

    /// The message whose glossary is awaiting confirmation, if any.
    pub fn pending_message(&self) -> Option<&str> {
        match &self.stage {
            ExchangeStage::AwaitingConfirmation { message, .. } => Some(message.as_str()),
            ExchangeStage::Start => None,
        }
    }

    /// The glossary from the most recent completed exchange.
    pub const fn glossary(&self) -> &GlossaryMapping {
        &self.glossary
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    /// Sends a new message to the start endpoint.
    pub async fn start<T: Transport>(
        &mut self,
        transport: &T,
        message: &str,
    ) -> Result<StepOutcome, ExchangeError> {
        if self.is_awaiting_confirmation() {
            return Err(ExchangeError::ConfirmationPending);
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(ExchangeError::EmptyMessage);
        }

        self.transcript.push(EntryKind::User, message);

        let result = transport.start(&StartRequest { message }).await;
        let response = self.record(result.map_err(ExchangeError::Transport))?;

        match self.record(response.server_stage())? {
            ServerStage::ConfirmGlossary => {
                let pending = response
                    .glossary_options
                    .map(PendingGlossary::from)
                    .unwrap_or_default();
                self.stage = ExchangeStage::AwaitingConfirmation {
                    message: message.to_string(),
                    pending,
                };
                Ok(StepOutcome::NeedsConfirmation)
            }
            ServerStage::Complete => {
                self.complete(response);
                Ok(StepOutcome::Completed)
            }
        }
    }

    /// Replaces the definition of one offered candidate.
    pub fn edit_candidate(
        &mut self,
        term: &str,
        definition: impl Into<String>,
    ) -> Result<(), ExchangeError> {
        let ExchangeStage::AwaitingConfirmation { pending, .. } = &mut self.stage else {
            return Err(ExchangeError::NothingToConfirm);
        };

        if pending.set(term, definition) {
            Ok(())
        } else {
            Err(ExchangeError::UnknownTerm(term.to_string()))
        }
    }

    /// Sends the original message and the edited candidates to the confirm endpoint.
    pub async fn confirm<T: Transport>(
        &mut self,
        transport: &T,
    ) -> Result<StepOutcome, ExchangeError> {
        let ExchangeStage::AwaitingConfirmation { message, pending } = &self.stage else {
            return Err(ExchangeError::NothingToConfirm);
        };

        let request = ConfirmRequest {
            message: message.as_str(),
            confirmed_glossary: pending,
        };
        let result = transport.confirm(&request).await;
        let response = self.record(result.map_err(ExchangeError::Transport))?;

        match self.record(response.server_stage())? {
            ServerStage::Complete => {
                self.stage = ExchangeStage::Start;
                self.complete(response);
                Ok(StepOutcome::Completed)
            }
            ServerStage::ConfirmGlossary => {
                self.record(Err(ExchangeError::UnexpectedStage(response.stage)))
            }
        }
    }

    /// Drops a pending confirmation without contacting the backend.
    ///
    /// Returns `false` if nothing was pending.
    pub fn abandon(&mut self) -> bool {
        if !self.is_awaiting_confirmation() {
            return false;
        }
        self.stage = ExchangeStage::Start;
        self.transcript
            .push(EntryKind::Notice, "Glossary confirmation cancelled.");
        true
    }

    fn complete(&mut self, response: ExchangeResponse) {
        if let Some(block) = response
            .glossary_prompt
            .filter(|block| !block.trim().is_empty())
        {
            self.glossary = parse_glossary_block(&block);
            self.transcript.push(EntryKind::Glossary, block);
        }

        if let Some(reply) = response.reply.filter(|reply| !reply.is_empty()) {
            self.transcript.push(EntryKind::Assistant, reply);
        }
    }

    fn record<V>(&mut self, result: Result<V, ExchangeError>) -> Result<V, ExchangeError> {
        if let Err(err) = &result {
            self.transcript.push(EntryKind::Error, err.to_string());
        }
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq, Eq)]
    enum Sent {
        Start(String),
        Confirm(String, serde_json::Value),
    }

    #[derive(Default)]
    struct ScriptedTransport {
        replies: Mutex<VecDeque<Result<ExchangeResponse>>>,
        sent: Mutex<Vec<Sent>>,
    }

    impl ScriptedTransport {
        fn new(replies: Vec<Result<ExchangeResponse>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                sent: Mutex::default(),
            }
        }

        fn next(&self) -> Result<ExchangeResponse> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow!("no scripted reply")))
        }

        fn sent(&self) -> Vec<Sent> {
            std::mem::take(&mut *self.sent.lock().unwrap())
        }
    }

    impl Transport for ScriptedTransport {
        async fn start(&self, request: &StartRequest<'_>) -> Result<ExchangeResponse> {
            self.sent
                .lock()
                .unwrap()
                .push(Sent::Start(request.message.to_string()));
            self.next()
        }

        async fn confirm(&self, request: &ConfirmRequest<'_>) -> Result<ExchangeResponse> {
            self.sent.lock().unwrap().push(Sent::Confirm(
                request.message.to_string(),
                serde_json::to_value(request.confirmed_glossary).unwrap(),
            ));
            self.next()
        }
    }

    fn offer() -> ExchangeResponse {
        ExchangeResponse::confirm_glossary([("模型", "model"), ("训练", "training")])
    }

    #[tokio::test]
    async fn test_start_complete_appends_reply() {
        let transport = ScriptedTransport::new(vec![Ok(ExchangeResponse::complete(
            "No glossary match found.",
        ))]);
        let mut session = ExchangeSession::new();

        let outcome = session.start(&transport, "  你好  ").await.unwrap();

        assert_eq!(outcome, StepOutcome::Completed);
        assert_eq!(session.stage(), &ExchangeStage::Start);
        assert_eq!(transport.sent(), vec![Sent::Start("你好".to_string())]);

        let entries = session.transcript().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EntryKind::User);
        assert_eq!(entries[1].kind, EntryKind::Assistant);
        assert_eq!(entries[1].text, "No glossary match found.");
    }

    #[tokio::test]
    async fn test_start_confirm_glossary_awaits_without_reply() {
        let transport = ScriptedTransport::new(vec![Ok(offer())]);
        let mut session = ExchangeSession::new();

        let outcome = session.start(&transport, "训练模型").await.unwrap();

        assert_eq!(outcome, StepOutcome::NeedsConfirmation);
        assert!(session.is_awaiting_confirmation());
        assert_eq!(session.pending_message(), Some("训练模型"));
        assert_eq!(session.candidates().unwrap().get("模型"), Some("model"));
        assert_eq!(session.transcript().count(EntryKind::Assistant), 0);
    }

    #[tokio::test]
    async fn test_confirm_sends_edited_glossary_and_returns_to_start() {
        let transport = ScriptedTransport::new(vec![
            Ok(offer()),
            Ok(ExchangeResponse::complete("Train the checkpoint.")
                .with_glossary_prompt("模型 → checkpoint\n训练 → training")),
        ]);
        let mut session = ExchangeSession::new();

        session.start(&transport, "训练模型").await.unwrap();
        session.edit_candidate("模型", "checkpoint").unwrap();
        let outcome = session.confirm(&transport).await.unwrap();

        assert_eq!(outcome, StepOutcome::Completed);
        assert_eq!(session.stage(), &ExchangeStage::Start);
        assert!(session.candidates().is_none());

        let sent = transport.sent();
        assert_eq!(
            sent[1],
            Sent::Confirm(
                "训练模型".to_string(),
                serde_json::json!({"模型": "checkpoint", "训练": "training"})
            )
        );

        assert_eq!(
            session.glossary().get("模型").map(String::as_str),
            Some("checkpoint")
        );
        let kinds: Vec<_> = session
            .transcript()
            .entries()
            .iter()
            .map(|e| e.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![EntryKind::User, EntryKind::Glossary, EntryKind::Assistant]
        );
    }

    #[tokio::test]
    async fn test_new_glossary_replaces_previous() {
        let transport = ScriptedTransport::new(vec![
            Ok(ExchangeResponse::complete("one").with_glossary_prompt("a → 1\nb → 2")),
            Ok(ExchangeResponse::complete("two").with_glossary_prompt("c → 3")),
        ]);
        let mut session = ExchangeSession::new();

        session.start(&transport, "first").await.unwrap();
        assert_eq!(session.glossary().len(), 2);

        session.start(&transport, "second").await.unwrap();
        assert_eq!(session.glossary().len(), 1);
        assert!(session.glossary().contains_key("c"));
    }

    #[tokio::test]
    async fn test_start_transport_failure_keeps_state() {
        let transport = ScriptedTransport::new(vec![
            Ok(ExchangeResponse::complete("ok").with_glossary_prompt("a → 1")),
            Err(anyhow!("connection refused")),
        ]);
        let mut session = ExchangeSession::new();
        session.start(&transport, "first").await.unwrap();
        let glossary_before = session.glossary().clone();

        let err = session.start(&transport, "second").await.unwrap_err();

        assert!(matches!(err, ExchangeError::Transport(_)));
        assert_eq!(session.transcript().count(EntryKind::Error), 1);
        assert_eq!(session.stage(), &ExchangeStage::Start);
        assert_eq!(session.glossary(), &glossary_before);
    }

    #[tokio::test]
    async fn test_confirm_transport_failure_keeps_pending() {
        let transport =
            ScriptedTransport::new(vec![Ok(offer()), Err(anyhow!("backend went away"))]);
        let mut session = ExchangeSession::new();
        session.start(&transport, "训练模型").await.unwrap();
        session.edit_candidate("训练", "fine-tuning").unwrap();
        let stage_before = session.stage().clone();

        let err = session.confirm(&transport).await.unwrap_err();

        assert!(matches!(err, ExchangeError::Transport(_)));
        assert_eq!(session.transcript().count(EntryKind::Error), 1);
        assert_eq!(session.stage(), &stage_before);
        assert!(session.glossary().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_stage_is_rejected() {
        let transport = ScriptedTransport::new(vec![Ok(ExchangeResponse {
            stage: "thinking".to_string(),
            ..ExchangeResponse::default()
        })]);
        let mut session = ExchangeSession::new();

        let err = session.start(&transport, "hi").await.unwrap_err();

        assert!(matches!(err, ExchangeError::UnknownStage(ref s) if s == "thinking"));
        assert_eq!(session.transcript().count(EntryKind::Error), 1);
        assert_eq!(session.stage(), &ExchangeStage::Start);
    }

    #[tokio::test]
    async fn test_confirm_answered_with_confirm_stage() {
        let transport = ScriptedTransport::new(vec![Ok(offer()), Ok(offer())]);
        let mut session = ExchangeSession::new();
        session.start(&transport, "训练模型").await.unwrap();

        let err = session.confirm(&transport).await.unwrap_err();

        assert!(matches!(err, ExchangeError::UnexpectedStage(_)));
        assert!(session.is_awaiting_confirmation());
        assert_eq!(session.transcript().count(EntryKind::Error), 1);
    }

    #[tokio::test]
    async fn test_start_while_awaiting_is_rejected() {
        let transport = ScriptedTransport::new(vec![Ok(offer())]);
        let mut session = ExchangeSession::new();
        session.start(&transport, "训练模型").await.unwrap();
        let entries_before = session.transcript().len();

        let err = session.start(&transport, "another").await.unwrap_err();

        assert!(matches!(err, ExchangeError::ConfirmationPending));
        assert_eq!(session.transcript().len(), entries_before);
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected() {
        let transport = ScriptedTransport::default();
        let mut session = ExchangeSession::new();

        let err = session.start(&transport, "   ").await.unwrap_err();

        assert!(matches!(err, ExchangeError::EmptyMessage));
        assert!(session.transcript().is_empty());
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_without_pending() {
        let transport = ScriptedTransport::default();
        let mut session = ExchangeSession::new();

        let err = session.confirm(&transport).await.unwrap_err();

        assert!(matches!(err, ExchangeError::NothingToConfirm));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_edit_unknown_candidate() {
        let transport = ScriptedTransport::new(vec![Ok(offer())]);
        let mut session = ExchangeSession::new();
        session.start(&transport, "训练模型").await.unwrap();

        let err = session.edit_candidate("推理", "inference").unwrap_err();

        assert!(matches!(err, ExchangeError::UnknownTerm(ref t) if t == "推理"));
        assert_eq!(session.candidates().unwrap().len(), 2);
    }

    #[test]
    fn test_edit_without_pending() {
        let mut session = ExchangeSession::new();
        assert!(matches!(
            session.edit_candidate("模型", "model"),
            Err(ExchangeError::NothingToConfirm)
        ));
    }

    #[tokio::test]
    async fn test_confirm_glossary_without_options() {
        let transport = ScriptedTransport::new(vec![Ok(ExchangeResponse {
            stage: "confirm_glossary".to_string(),
            ..ExchangeResponse::default()
        })]);
        let mut session = ExchangeSession::new();

        session.start(&transport, "hi").await.unwrap();

        assert!(session.candidates().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_abandon_returns_to_start() {
        let transport = ScriptedTransport::new(vec![Ok(offer())]);
        let mut session = ExchangeSession::new();
        session.start(&transport, "训练模型").await.unwrap();

        assert!(session.abandon());
        assert_eq!(session.stage(), &ExchangeStage::Start);
        assert_eq!(
            session.transcript().last().map(|e| e.kind),
            Some(EntryKind::Notice)
        );
        assert!(!session.abandon());
    }

    #[tokio::test]
    async fn test_empty_glossary_prompt_is_ignored() {
        let transport = ScriptedTransport::new(vec![
            Ok(ExchangeResponse::complete("one").with_glossary_prompt("a → 1")),
            Ok(ExchangeResponse::complete("two").with_glossary_prompt("")),
        ]);
        let mut session = ExchangeSession::new();

        session.start(&transport, "first").await.unwrap();
        session.start(&transport, "second").await.unwrap();

        assert_eq!(session.glossary().len(), 1);
        assert_eq!(session.transcript().count(EntryKind::Glossary), 1);
    }
}
