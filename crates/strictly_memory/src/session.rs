//! The game controller: one memory-matching session from reset to game end.

use std::time::Duration;

use tracing::{debug, info, instrument, trace};

use crate::action::{FlipOutcome, FlipRejection, SessionEvent};
use crate::contracts::{Contract, FlipContract};
use crate::phases::{EndMessage, Outcome, Phase, Verdict};
use crate::schedule::{DeferredAction, Scheduler};
use crate::snapshot::SessionSnapshot;
use crate::{Countdown, Deck, DeckError, GameConfig, GameRng};

const TICK: Duration = Duration::from_secs(1);

/// Owns all state of a memory-matching session.
///
/// The controller never reads a clock. Input arrives through
/// [`MemoryGame::flip`], time through [`MemoryGame::advance`], and the
/// renderer reads [`MemoryGame::snapshot`].
#[derive(Debug, Clone)]
pub struct MemoryGame {
    pub(crate) config: GameConfig,
    pub(crate) rng: GameRng,
    pub(crate) deck: Deck,
    pub(crate) score: u32,
    pub(crate) moves: u32,
    pub(crate) matched_pairs: usize,
    pub(crate) countdown: Countdown,
    pub(crate) phase: Phase,
    pub(crate) message: Option<EndMessage>,
    pub(crate) scheduler: Scheduler,
    pub(crate) clock: Duration,
    pub(crate) epoch: u64,
}

impl MemoryGame {
    /// Creates a session dealt from `config`.
    ///
    /// The pair count is capped at the image pool size. Uses the configured
    /// seed, or entropy when none is set.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Result<Self, DeckError> {
        let config = config.resolved();
        let rng = match config.seed() {
            Some(seed) => GameRng::new(*seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Creates a session with an explicit shuffle seed.
    #[instrument(skip(config))]
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, DeckError> {
        Self::with_rng(config.resolved(), GameRng::new(seed))
    }

    /// Creates a session over a prepared deck.
    ///
    /// Timings and scoring come from `config`; the image pool is ignored.
    /// Resets reshuffle the same cards.
    #[instrument(skip(config, deck), fields(cards = deck.len()))]
    pub fn with_deck(config: GameConfig, deck: Deck) -> Self {
        let config = config.resolved();
        let rng = match config.seed() {
            Some(seed) => GameRng::new(*seed),
            None => GameRng::from_entropy(),
        };
        Self::assemble(config, rng, deck)
    }

    fn with_rng(config: GameConfig, mut rng: GameRng) -> Result<Self, DeckError> {
        let deck = Deck::build(config.images(), *config.pair_count(), &mut rng)?;
        info!(
            pairs = deck.pair_count(),
            seed = rng.seed(),
            "New memory game"
        );
        Ok(Self::assemble(config, rng, deck))
    }

    fn assemble(config: GameConfig, rng: GameRng, deck: Deck) -> Self {
        let countdown = Countdown::new(*config.timer_seconds());
        Self {
            config,
            rng,
            deck,
            score: 0,
            moves: 0,
            matched_pairs: 0,
            countdown,
            phase: Phase::Idle,
            message: None,
            scheduler: Scheduler::new(),
            clock: Duration::ZERO,
            epoch: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Input
    // ─────────────────────────────────────────────────────────────

    /// Flips the card at `index`.
    ///
    /// Flips that break a precondition are ignored and reported as
    /// [`FlipOutcome::Ignored`]; session state is untouched.
    #[instrument(skip(self), fields(phase = self.phase.label()))]
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if let Err(rejection) = FlipContract::pre(self, &index) {
            debug!(%rejection, "Flip ignored");
            return FlipOutcome::Ignored(rejection);
        }

        let outcome = match self.phase {
            Phase::Idle => {
                let timer_started = self.start_timer();
                self.phase = Phase::OneSelected(index);
                debug!(index, timer_started, "First card revealed");
                FlipOutcome::Revealed {
                    index,
                    timer_started,
                }
            }
            Phase::OneSelected(first) => self.evaluate(first, index),
            // Rejected by FlipContract above.
            Phase::Evaluating { .. } => return FlipOutcome::Ignored(FlipRejection::SelectionFull),
            Phase::Over(_) => return FlipOutcome::Ignored(FlipRejection::GameOver),
        };

        #[cfg(debug_assertions)]
        if let Err(violations) = FlipContract::post(self) {
            tracing::error!(?violations, "Session invariants violated after flip");
            debug_assert!(violations.is_empty(), "Session invariants violated: {violations:?}");
        }

        outcome
    }

    /// Compares the second card against the first.
    fn evaluate(&mut self, first: usize, second: usize) -> FlipOutcome {
        self.moves = self.moves.saturating_add(1);

        if self.deck.is_pair(first, second) {
            self.deck.mark_matched(first);
            self.deck.mark_matched(second);
            self.matched_pairs += 1;
            self.score = self.score.saturating_add(*self.config.match_bonus());
            self.phase = Phase::Evaluating {
                first,
                second,
                verdict: Verdict::Match,
            };
            self.scheduler.schedule(
                self.clock + self.config.match_delay(),
                DeferredAction::SettleMatch { first, second },
            );
            debug!(
                first,
                second,
                score = self.score,
                matched_pairs = self.matched_pairs,
                "Pair matched"
            );

            let finished = if self.matched_pairs == self.pair_count() {
                Some(self.finish(Outcome::Won))
            } else {
                None
            };
            FlipOutcome::Matched {
                first,
                second,
                finished,
            }
        } else {
            self.score = self.score.saturating_sub(*self.config.mismatch_penalty());
            self.phase = Phase::Evaluating {
                first,
                second,
                verdict: Verdict::Mismatch,
            };
            self.scheduler.schedule(
                self.clock + self.config.mismatch_delay(),
                DeferredAction::HideMismatch { first, second },
            );
            debug!(first, second, score = self.score, "Pair mismatched");
            FlipOutcome::Mismatched { first, second }
        }
    }

    /// Starts the countdown on the first flip; returns whether it started.
    fn start_timer(&mut self) -> bool {
        if !self.countdown.start() {
            return false;
        }
        self.scheduler.schedule(self.clock + TICK, DeferredAction::Tick);
        true
    }

    // ─────────────────────────────────────────────────────────────
    //  Time
    // ─────────────────────────────────────────────────────────────

    /// Moves the logical clock forward by `elapsed`, firing every deferred
    /// action that falls due, in order.
    #[instrument(level = "trace", skip(self), fields(clock = ?self.clock))]
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SessionEvent> {
        let target = self.clock + elapsed;
        let mut events = Vec::new();

        while let Some(entry) = self.scheduler.pop_due(target) {
            self.clock = self.clock.max(entry.due);
            trace!(action = ?entry.action, due = ?entry.due, "Firing deferred action");
            if let Some(event) = self.fire(entry.action) {
                events.push(event);
            }
        }
        self.clock = target;

        #[cfg(debug_assertions)]
        if let Err(violations) = FlipContract::post(self) {
            tracing::error!(?violations, "Session invariants violated after advance");
            debug_assert!(violations.is_empty(), "Session invariants violated: {violations:?}");
        }

        events
    }

    fn fire(&mut self, action: DeferredAction) -> Option<SessionEvent> {
        match action {
            DeferredAction::Tick => match self.countdown.tick() {
                crate::TickOutcome::Running(remaining) => {
                    self.scheduler.schedule(self.clock + TICK, DeferredAction::Tick);
                    Some(SessionEvent::Tick { remaining })
                }
                crate::TickOutcome::Expired => Some(SessionEvent::TimeUp(self.finish(Outcome::TimeUp))),
                crate::TickOutcome::Inactive => None,
            },
            DeferredAction::SettleMatch { first, second } => {
                self.clear_selection(first, second, Verdict::Match)
                    .then_some(SessionEvent::MatchSettled { first, second })
            }
            DeferredAction::HideMismatch { first, second } => {
                self.clear_selection(first, second, Verdict::Mismatch)
                    .then_some(SessionEvent::MismatchHidden { first, second })
            }
            DeferredAction::HideMessage => {
                self.message.take()?;
                debug!("End-of-game message hidden");
                Some(SessionEvent::MessageHidden)
            }
        }
    }

    /// Returns to Idle if the pending pair is still the one being shown.
    fn clear_selection(&mut self, first: usize, second: usize, expected: Verdict) -> bool {
        match self.phase {
            Phase::Evaluating {
                first: f,
                second: s,
                verdict,
            } if f == first && s == second && verdict == expected => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Lifecycle
    // ─────────────────────────────────────────────────────────────

    /// Ends the session: stops the countdown, drops pending card actions
    /// and shows the end-of-game message for the configured duration.
    fn finish(&mut self, outcome: Outcome) -> EndMessage {
        self.countdown.stop();
        self.scheduler.clear();
        self.phase = Phase::Over(outcome);

        let message = EndMessage {
            outcome,
            score: self.score,
            moves: self.moves,
        };
        self.message = Some(message);
        self.scheduler.schedule(
            self.clock + self.config.message_duration(),
            DeferredAction::HideMessage,
        );
        info!(
            %outcome,
            score = self.score,
            moves = self.moves,
            remaining = self.countdown.remaining(),
            "Game over"
        );
        message
    }

    /// Starts a fresh session: cancels pending actions, zeroes the counters,
    /// reshuffles the deck and hides any message.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn reset(&mut self) {
        self.scheduler.clear();
        self.countdown.reset();
        self.score = 0;
        self.moves = 0;
        self.matched_pairs = 0;
        self.deck = self.deck.redeal(&mut self.rng);
        self.phase = Phase::Idle;
        self.message = None;
        self.clock = Duration::ZERO;
        self.epoch += 1;
        info!(epoch = self.epoch, pairs = self.deck.pair_count(), "Session reset");
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Immutable view of the session for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }

    /// Time until the next deferred action falls due.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler
            .next_due()
            .map(|due| due.saturating_sub(self.clock))
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Completed two-card attempts.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs matched so far.
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pairs in the deck.
    pub fn pair_count(&self) -> usize {
        self.deck.pair_count()
    }

    /// Current selection phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The dealt deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The countdown.
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// The end-of-game message, while visible.
    pub fn message(&self) -> Option<&EndMessage> {
        self.message.as_ref()
    }

    /// The effective configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shuffle seed for this session's RNG.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Logical time since the last reset.
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Number of resets performed.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether the session has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }
}
