//! Game controller: the state machine behind menu, play and reset.

use super::error::GameError;
use super::rules::LineEndpoints;
use super::strategy::{Difficulty, DrawSource, EasyStrategy, HardStrategy, Strategy};
use super::{
    Board, EngineSettings, GameEvent, GameMode, GameSession, Move, Outcome, Player, Position,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// Phase of the controller, as seen by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Phase {
    /// No session; waiting for a mode.
    Menu,
    /// A session is accepting moves.
    InProgress,
    /// The session ended in a win or tie.
    Finished,
}

/// Controller state; the session lives inside the phase that owns it.
#[derive(Debug, Clone)]
enum ControllerState {
    Menu,
    Playing(GameSession),
    Finished(GameSession),
}

/// Drives one game at a time and is the only thing that mutates it.
///
/// Commands return the [`GameEvent`]s they caused. A rejected command
/// returns a [`GameError`] and changes nothing.
#[derive(Debug)]
pub struct GameController<R = StdRng> {
    state: ControllerState,
    easy: EasyStrategy<R>,
    hard: HardStrategy,
}

impl GameController<StdRng> {
    /// Creates a controller in the menu.
    ///
    /// The easy strategy draws from a `StdRng` seeded from `settings`, or
    /// from the operating system when no seed is set.
    #[instrument]
    pub fn new(settings: EngineSettings) -> Self {
        let rng = match settings.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(settings, rng)
    }
}

impl<R: DrawSource> GameController<R> {
    /// Creates a controller in the menu with an explicit random source.
    #[instrument(skip(rng))]
    pub fn with_rng(settings: EngineSettings, rng: R) -> Self {
        info!(search_depth = settings.search_depth(), "Creating GameController");
        Self {
            state: ControllerState::Menu,
            easy: EasyStrategy::new(rng),
            hard: HardStrategy::new(*settings.search_depth()),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            ControllerState::Menu => Phase::Menu,
            ControllerState::Playing(_) => Phase::InProgress,
            ControllerState::Finished(_) => Phase::Finished,
        }
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&GameSession> {
        match &self.state {
            ControllerState::Menu => None,
            ControllerState::Playing(session) | ControllerState::Finished(session) => {
                Some(session)
            }
        }
    }

    /// Mode of the live session.
    pub fn mode(&self) -> Option<GameMode> {
        self.session().map(|s| *s.mode())
    }

    /// Board of the live session.
    pub fn board(&self) -> Option<&Board> {
        self.session().map(|s| s.board())
    }

    /// Outcome of the live session.
    pub fn outcome(&self) -> Option<Outcome> {
        self.session().map(GameSession::outcome)
    }

    /// Player to move in the live session.
    pub fn active_player(&self) -> Option<Player> {
        self.session().map(|s| *s.to_move())
    }

    /// Winning line of the live session, once someone has won.
    pub fn winning_line(&self) -> Option<LineEndpoints> {
        self.session().and_then(GameSession::winning_line)
    }

    /// Moves played in the live session; empty in the menu.
    pub fn history(&self) -> &[Move] {
        self.session()
            .map(|s| s.history().as_slice())
            .unwrap_or_default()
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Starts a session in `mode`. Only valid from the menu.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) -> Result<Vec<GameEvent>, GameError> {
        if !matches!(self.state, ControllerState::Menu) {
            warn!(phase = %self.phase(), "Mode change outside the menu");
            return Err(GameError::InvalidModeTransition(
                "return to the menu before choosing a new mode".to_string(),
            ));
        }
        self.state = ControllerState::Playing(GameSession::new(mode));
        info!(%mode, "Mode selected");
        Ok(vec![GameEvent::SessionStarted { mode }])
    }

    /// Plays the human move at `(row, col)`.
    ///
    /// In a computer mode, if the game is still going afterwards, the
    /// computer answers once before this returns. The human move stands
    /// even if the computer cannot answer; the computer then stays on
    /// move and [`ai_move`](Self::ai_move) can retry.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Vec<GameEvent>, GameError> {
        let session = self.playing_mut()?;
        if session.is_ai_turn() {
            return Err(GameError::InvalidModeTransition(
                "it is the computer's turn".to_string(),
            ));
        }

        let mv = session.play(row, col)?;
        let mut events = self.settle(mv);

        if self.session().is_some_and(GameSession::is_ai_turn) {
            match self.play_ai() {
                Ok(reply) => events.extend(reply),
                Err(e) => warn!(error = %e, "Computer could not answer"),
            }
        }
        Ok(events)
    }

    /// Asks the computer to move now.
    ///
    /// Valid only while a computer-mode game is in progress with the
    /// computer to move.
    #[instrument(skip(self))]
    pub fn ai_move(&mut self) -> Result<Vec<GameEvent>, GameError> {
        self.play_ai()
    }

    /// Replaces the session with a fresh one in the same mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<Vec<GameEvent>, GameError> {
        let mode = self.mode().ok_or_else(|| {
            GameError::InvalidModeTransition("no game to reset; choose a mode first".to_string())
        })?;
        self.state = ControllerState::Playing(GameSession::new(mode));
        info!(%mode, "Session reset");
        Ok(vec![GameEvent::SessionStarted { mode }])
    }

    /// Discards any session and goes back to the menu.
    #[instrument(skip(self))]
    pub fn return_to_menu(&mut self) -> Vec<GameEvent> {
        info!(phase = %self.phase(), "Returning to menu");
        self.state = ControllerState::Menu;
        vec![GameEvent::ReturnedToMenu]
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    fn playing_mut(&mut self) -> Result<&mut GameSession, GameError> {
        match &mut self.state {
            ControllerState::Playing(session) => Ok(session),
            ControllerState::Finished(_) => Err(GameError::MoveAfterGameOver),
            ControllerState::Menu => Err(GameError::InvalidModeTransition(
                "no game in progress; choose a mode first".to_string(),
            )),
        }
    }

    fn strategy_for(&mut self, difficulty: Difficulty) -> &mut dyn Strategy {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Lets the configured strategy pick and play one move.
    fn play_ai(&mut self) -> Result<Vec<GameEvent>, GameError> {
        let session = self.playing_mut()?;
        let difficulty = session.mode().difficulty().ok_or_else(|| {
            GameError::InvalidModeTransition("no computer player in this mode".to_string())
        })?;
        if !session.is_ai_turn() {
            return Err(GameError::InvalidModeTransition(
                "it is not the computer's turn".to_string(),
            ));
        }
        let board = *session.board();
        let ai = *session.to_move();

        let pos: Position = self
            .strategy_for(difficulty)
            .select_move(&board, ai)
            .ok_or_else(|| GameError::InvalidModeTransition("no empty cell left".to_string()))?;
        debug!(%difficulty, position = %pos, "Computer selected move");

        let mv = self.playing_mut()?.place(pos)?;
        let mut events = vec![GameEvent::AiMoveSelected(mv)];
        events.extend(self.settle(mv));
        Ok(events)
    }

    /// Records a played move and moves to `Finished` if it ended the game.
    fn settle(&mut self, mv: Move) -> Vec<GameEvent> {
        let mut events = vec![GameEvent::MovePlayed(mv)];
        let state = std::mem::replace(&mut self.state, ControllerState::Menu);
        self.state = match state {
            ControllerState::Playing(session) => {
                let outcome = session.outcome();
                if outcome.is_terminal() {
                    info!(%outcome, moves = session.history().len(), "Game finished");
                    events.push(GameEvent::OutcomeDecided(outcome));
                    ControllerState::Finished(session)
                } else {
                    events.push(GameEvent::ActivePlayerChanged(*session.to_move()));
                    ControllerState::Playing(session)
                }
            }
            other => other,
        };
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> GameController {
        GameController::new(EngineSettings::new().with_seed(17))
    }

    #[test]
    fn test_starts_in_menu() {
        let controller = seeded();
        assert_eq!(controller.phase(), Phase::Menu);
        assert!(controller.session().is_none());
        assert!(controller.history().is_empty());
    }

    #[test]
    fn test_set_mode_only_from_menu() {
        let mut controller = seeded();
        controller.set_mode(GameMode::PlayerVsPlayer).unwrap();
        assert_eq!(controller.phase(), Phase::InProgress);
        assert!(matches!(
            controller.set_mode(GameMode::VsHardAi),
            Err(GameError::InvalidModeTransition(_))
        ));
        assert_eq!(controller.mode(), Some(GameMode::PlayerVsPlayer));
    }

    #[test]
    fn test_pvp_move_events() {
        let mut controller = seeded();
        controller.set_mode(GameMode::PlayerVsPlayer).unwrap();
        let events = controller.apply_move(1, 1).unwrap();
        assert_eq!(
            events,
            vec![
                GameEvent::MovePlayed(Move::new(Player::X, Position::Center)),
                GameEvent::ActivePlayerChanged(Player::O),
            ]
        );
    }

    #[test]
    fn test_ai_answers_human() {
        let mut controller = seeded();
        controller.set_mode(GameMode::VsHardAi).unwrap();
        let events = controller.apply_move(0, 0).unwrap();

        assert_eq!(controller.history().len(), 2);
        assert_eq!(controller.active_player(), Some(Player::X));
        let reply = Move::new(Player::O, Position::Center);
        assert!(events.contains(&GameEvent::AiMoveSelected(reply)));
        assert!(events.contains(&GameEvent::MovePlayed(reply)));
    }

    #[test]
    fn test_ai_move_rejected_when_not_its_turn() {
        let mut controller = seeded();
        assert!(matches!(
            controller.ai_move(),
            Err(GameError::InvalidModeTransition(_))
        ));

        controller.set_mode(GameMode::VsEasyAi).unwrap();
        assert!(matches!(
            controller.ai_move(),
            Err(GameError::InvalidModeTransition(_))
        ));

        controller.return_to_menu();
        controller.set_mode(GameMode::PlayerVsPlayer).unwrap();
        controller.apply_move(1, 1).unwrap();
        assert!(matches!(
            controller.ai_move(),
            Err(GameError::InvalidModeTransition(_))
        ));
    }

    #[test]
    fn test_reset_requires_session() {
        let mut controller = seeded();
        assert!(controller.reset().is_err());
        controller.set_mode(GameMode::VsEasyAi).unwrap();
        controller.apply_move(1, 1).unwrap();
        let events = controller.reset().unwrap();
        assert_eq!(
            events,
            vec![GameEvent::SessionStarted {
                mode: GameMode::VsEasyAi
            }]
        );
        assert_eq!(controller.board(), Some(&Board::new()));
        assert_eq!(controller.active_player(), Some(Player::X));
    }
}
