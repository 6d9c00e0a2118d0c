//! UI-facing session around a [`GameEngine`].
//!
//! A frontend forwards taps, asks the session to run the AI's turn and
//! requests restarts. The session owns the "thinking" pause before the AI
//! moves and, when a channel is attached, publishes [`GameEvent`]s so the
//! frontend can redraw without polling.

use crate::config::GameConfig;
use crate::tictactoe::{GameEngine, GameSnapshot, Move, MoveOutcome, Outcome, Turn};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Notifications sent from the session to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was placed.
    MoveMade {
        /// The applied move.
        action: Move,
        /// State after the move.
        snapshot: GameSnapshot,
    },
    /// The AI's pause has started.
    AiThinking,
    /// The game reached a terminal outcome.
    GameOver(Outcome),
    /// The board was cleared.
    Restarted(GameSnapshot),
}

/// Binds one engine to a frontend.
#[derive(Debug)]
pub struct GameSession {
    engine: GameEngine,
    ai_delay: Duration,
    event_tx: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl GameSession {
    /// Creates a session over an engine with the given AI pause.
    #[instrument(skip(engine))]
    pub fn new(engine: GameEngine, ai_delay: Duration) -> Self {
        Self {
            engine,
            ai_delay,
            event_tx: None,
        }
    }

    /// Builds the engine and pause described by a config.
    #[instrument]
    pub fn from_config(config: &GameConfig) -> Self {
        let engine = GameEngine::with_picker(config.ai().build(*config.seed()));
        Self::new(engine, config.ai_delay())
    }

    /// Attaches an event channel and returns its receiving end.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<GameEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.event_tx = Some(tx);
        rx
    }

    /// Forwards a tap on `cell_index` to the engine.
    #[instrument(skip(self))]
    pub fn on_player_tap(&mut self, cell_index: usize) -> MoveOutcome {
        let result = self.engine.apply_player_move(cell_index);
        self.announce(result);
        result
    }

    /// Waits the AI pause, then lets the AI move.
    ///
    /// Returns immediately without waiting when the AI cannot move.
    #[instrument(skip(self), fields(delay = ?self.ai_delay))]
    pub async fn on_ai_turn_begins(&mut self) -> MoveOutcome {
        if self.engine.is_over() || self.engine.turn() != Turn::Ai {
            return self.engine.apply_ai_move();
        }

        self.emit(GameEvent::AiThinking);
        debug!("AI thinking");
        tokio::time::sleep(self.ai_delay).await;

        let result = self.engine.apply_ai_move();
        self.announce(result);
        result
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn on_restart_requested(&mut self) {
        self.engine.reset();
        info!("Restart requested");
        self.emit(GameEvent::Restarted(self.engine.snapshot()));
    }

    /// Returns a copy of the board, turn and outcome.
    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    /// Returns the engine for read-only inspection.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the configured AI pause.
    pub fn ai_delay(&self) -> Duration {
        self.ai_delay
    }

    fn announce(&self, result: MoveOutcome) {
        let Some(action) = result.applied() else {
            return;
        };
        let snapshot = self.engine.snapshot();
        self.emit(GameEvent::MoveMade { action, snapshot });
        if snapshot.is_over() {
            let outcome = *snapshot.outcome();
            info!(winner = ?outcome.winner(), %outcome, "Game over");
            self.emit(GameEvent::GameOver(outcome));
        }
    }

    fn emit(&self, event: GameEvent) {
        if let Some(tx) = &self.event_tx
            && tx.send(event).is_err()
        {
            debug!("Event receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{FirstAvailable, Mark, Position, Rejection};

    fn session() -> GameSession {
        GameSession::new(
            GameEngine::with_picker(Box::new(FirstAvailable)),
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn test_tap_then_ai_turn_emits_events() {
        let mut session = session();
        let mut rx = session.subscribe();

        assert!(session.on_player_tap(4).is_applied());
        assert!(session.on_ai_turn_begins().await.is_applied());

        let events: Vec<GameEvent> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        assert_eq!(events.len(), 3);
        let player_move = Move::new(Mark::Player, Position::Center);
        assert!(matches!(
            events[0],
            GameEvent::MoveMade { action, .. } if action == player_move
        ));
        assert_eq!(events[1], GameEvent::AiThinking);
        let ai_move = Move::new(Mark::Ai, Position::TopLeft);
        assert!(matches!(
            events[2],
            GameEvent::MoveMade { action, .. } if action == ai_move
        ));
    }

    #[tokio::test]
    async fn test_ai_turn_out_of_turn_does_not_think() {
        let mut session = session();
        let mut rx = session.subscribe();
        assert_eq!(
            session.on_ai_turn_begins().await,
            MoveOutcome::Ignored(Rejection::NotAisTurn)
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_dropped_receiver_is_harmless() {
        let mut session = session();
        drop(session.subscribe());
        assert!(session.on_player_tap(0).is_applied());
        session.on_restart_requested();
        assert_eq!(session.snapshot(), GameSnapshot::default());
    }
}
