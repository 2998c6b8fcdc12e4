use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::{debug, error, info};

use super::legality::validate_move;
use super::state::{MatchState, Placement};
use crate::core::Player;
use crate::error::{EngineError, EngineResult};
use crate::protocol::{Command, ProtocolChannel, Response};
use crate::strategy::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    AwaitingStart,
    Running,
    Terminated,
}

/// Summary of a finished match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub player: Option<Player>,
    pub moves_sent: usize,
    pub placements: usize,
    pub acknowledged: usize,
    pub boards_decided: usize,
}

impl Display for MatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.player {
            Some(player) => write!(f, "played as {}", player)?,
            None => write!(f, "never started")?,
        }
        write!(
            f,
            ", {} moves sent, {} placements ({} echoes of our own), {} boards decided",
            self.moves_sent, self.placements, self.acknowledged, self.boards_decided
        )
    }
}

/// Runs one match: reads arbiter commands, keeps the board, and answers move
/// requests through the strategy.
///
/// `AwaitingStart -> Running -> Terminated`. Any error terminates the match
/// and no further commands are processed.
pub struct MatchDriver<S> {
    strategy: S,
    phase: MatchPhase,
    state: Option<MatchState>,
    report: MatchReport,
}

impl<S: Strategy> MatchDriver<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            phase: MatchPhase::AwaitingStart,
            state: None,
            report: MatchReport::default(),
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn state(&self) -> Option<&MatchState> {
        self.state.as_ref()
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn report(&self) -> MatchReport {
        MatchReport {
            boards_decided: self
                .state
                .as_ref()
                .map_or(0, |state| state.board().decided_count()),
            ..self.report.clone()
        }
    }

    /// Process one raw arbiter line.
    pub fn handle_line(&mut self, line: &str) -> EngineResult<Option<Response>> {
        let result = line
            .parse::<Command>()
            .and_then(|command| self.dispatch(command, line));
        self.check(result)
    }

    /// Process one already parsed command.
    pub fn handle(&mut self, command: Command) -> EngineResult<Option<Response>> {
        let line = command.to_string();
        let result = self.dispatch(command, &line);
        self.check(result)
    }

    /// Drive the match until the arbiter closes the channel or something fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        channel: &mut ProtocolChannel<R, W>,
    ) -> EngineResult<MatchReport> {
        loop {
            let line = match channel.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => return Err(self.terminate(err)),
            };

            if let Some(response) = self.handle_line(line)? {
                if let Err(err) = channel.send(&response) {
                    return Err(self.terminate(err));
                }
            }
        }

        self.phase = MatchPhase::Terminated;
        let report = self.report();
        info!(%report, lines = channel.lines_read(), "channel closed, match over");
        Ok(report)
    }

    fn check<T>(&mut self, result: EngineResult<T>) -> EngineResult<T> {
        result.map_err(|err| self.terminate(err))
    }

    fn terminate(&mut self, err: EngineError) -> EngineError {
        if self.phase != MatchPhase::Terminated {
            error!(%err, "match terminated");
            self.phase = MatchPhase::Terminated;
        }
        err
    }

    fn dispatch(&mut self, command: Command, line: &str) -> EngineResult<Option<Response>> {
        let state = match (self.phase, &command) {
            (MatchPhase::Terminated, _) => {
                return Err(EngineError::illegal_state("match is already over"));
            }
            (MatchPhase::AwaitingStart, Command::Start(player)) => {
                info!(player = %player, strategy = self.strategy.name(), "match started");
                self.state = Some(MatchState::new(*player));
                self.report.player = Some(*player);
                self.phase = MatchPhase::Running;
                self.strategy.start(*player);
                return Ok(None);
            }
            (MatchPhase::AwaitingStart, _) => {
                return Err(EngineError::protocol(line, "expected `S <player>` first"));
            }
            (MatchPhase::Running, Command::Start(_)) => {
                return Err(EngineError::protocol(line, "match already started"));
            }
            (MatchPhase::Running, _) => self
                .state
                .as_mut()
                .ok_or_else(|| EngineError::illegal_state("running without match state"))?,
        };

        match command {
            Command::Placed { player, mv } => {
                let placement = state.apply_placement(player, mv)?;
                self.report.placements += 1;
                if placement == Placement::Acknowledged {
                    self.report.acknowledged += 1;
                }
                debug!(player = %player, %mv, ?placement, "tile placed");
                Ok(None)
            }
            Command::Decided { outcome, board } => {
                state.apply_outcome(board, outcome)?;
                debug!(board, %outcome, "board decided");
                Ok(None)
            }
            Command::Request(playable) => {
                state.set_playable(playable);
                let snapshot = state.board().snapshot();
                debug!(playable = ?state.playable(), "move requested\n{}", snapshot);

                let mv = self.strategy.choose(&snapshot, state.playable())?;
                validate_move(state.board(), mv, state.playable())?;
                state.commit_own(mv)?;

                self.report.moves_sent += 1;
                debug!(%mv, "move chosen");
                Ok(Some(Response::Move(mv)))
            }
            Command::Start(_) => Err(EngineError::protocol(line, "match already started")),
        }
    }
}
