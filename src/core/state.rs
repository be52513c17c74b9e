//! The game state machine.
//!
//! ## Lifecycle
//!
//! `Idle -> Loading -> {Success, Error}` for the initial deal, then within
//! `Success` the round cycle
//! `(play_card)* -> resolve_round -> start_round -> ...` until
//! `is_game_over`. Game over is a flag, not a hard stop: the machine keeps
//! accepting calls and callers are expected to stop issuing them.
//!
//! ## Transition Style
//!
//! Every transition is a pure function of `(state, input) -> state`, written
//! as a by-value method: the old state moves in, the next state moves out.
//! Callers that want snapshots (undo, replay, search) clone before applying;
//! the `im` collections make those clones cheap.
//!
//! ## Invariants
//!
//! - `discard.len()` never exceeds `player_count` (one play per seat per
//!   round).
//! - `round_count % player_count` identifies the current round's starter.
//! - A card lives in at most one hand or in the discard. The machine moves
//!   cards correctly but does not police callers that play cards they do
//!   not hold; that misuse is logged, not rejected.

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{ActionRecord, GameAction};
use super::player::{Hand, Player, PlayerId};
use crate::cards::Card;

/// Lifecycle of the initial deal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealStatus {
    /// No deal requested yet.
    #[default]
    Idle,
    /// Deck fetch in flight; no game-modifying operation is valid.
    Loading,
    /// Hands populated and the opening turn granted.
    Success,
    /// Deck fetch failed; unplayable until re-dealt.
    Error,
}

/// One played card of the in-progress round, attributed to its seat.
///
/// The card left the player's hand at the moment this entry was created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscardEntry {
    /// Who played the card.
    pub player: PlayerId,

    /// The card as played.
    pub card: Card,
}

/// The in-progress round's plays, cleared at round resolution.
///
/// Bounded by the seat count, so small games never touch the heap.
pub type Discard = SmallVec<[DiscardEntry; 4]>;

/// Authoritative state of one game session.
///
/// Created once per session in `Idle` status, dealt via the
/// `deal_pending`/`deal_fulfilled`/`deal_failed` lifecycle, then driven
/// through repeated play/round cycles until `is_game_over`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Fixed for the game's duration once dealt.
    player_count: usize,

    /// Dense, indexed by seat id.
    players: Vector<Player>,

    /// Plays of the in-progress round only.
    discard: Discard,

    /// Deal lifecycle phase.
    status: DealStatus,

    /// Terminal flag; enforced by callers, not re-checked per transition.
    is_game_over: bool,

    /// Rounds completed so far.
    round_count: u32,

    /// Gameplay actions applied via [`GameState::apply`] since the last
    /// deal.
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Fresh session in `Idle` status.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Deal lifecycle ===

    /// Reset to initial values with [`DealStatus::Loading`].
    ///
    /// Models the deck fetch going in flight. A second pending deal while
    /// one is outstanding is just another reset; the last call wins.
    #[must_use]
    pub fn deal_pending(self) -> Self {
        Self {
            status: DealStatus::Loading,
            ..Self::default()
        }
    }

    /// Populate seats from dealt hands and grant the opening turn.
    ///
    /// One hand per player, assigned densely in hand order. Scores start at
    /// zero and every turn flag is cleared, then player 0, the round 0
    /// starter, receives the turn. Status becomes [`DealStatus::Success`].
    ///
    /// # Panics
    ///
    /// Panics if `hands` is empty or holds more than 255 hands.
    #[must_use]
    pub fn deal_fulfilled(mut self, hands: Vec<Hand>) -> Self {
        assert!(!hands.is_empty(), "Must have at least 1 player");
        assert!(hands.len() <= 255, "At most 255 players supported");

        self.player_count = hands.len();
        self.players = hands
            .into_iter()
            .enumerate()
            .map(|(i, hand)| Player::with_hand(PlayerId::new(i as u8), hand))
            .collect();
        self.players[0].turn_to_play = true;
        self.status = DealStatus::Success;
        self
    }

    /// Mark the deal as failed.
    ///
    /// The game is unplayable until re-dealt; error detail stays with the
    /// deck collaborator.
    #[must_use]
    pub fn deal_failed(mut self) -> Self {
        self.status = DealStatus::Error;
        self
    }

    // === Gameplay transitions ===

    /// Record one play for the in-progress round.
    ///
    /// If the round is already fully played (one discard entry per seat)
    /// the call is a silent no-op, a soft guard rather than an error. The
    /// machine does not verify `turn_to_play` here either; preventing
    /// out-of-turn or duplicate plays is the caller's job.
    ///
    /// The card is removed from the acting seat's hand by code match, the
    /// actor's turn flag is cleared, and the next seat receives the turn
    /// unless the wraparound lands on the round starter. The starter's next
    /// turn is granted only by [`GameState::start_round`].
    ///
    /// # Panics
    ///
    /// Panics if `player` is not a dealt seat.
    #[must_use]
    pub fn play_card(mut self, player: PlayerId, card: Card) -> Self {
        if self.discard.len() >= self.player_count {
            debug!("play by {player} ignored: round already fully played");
            return self;
        }

        let acting = &mut self.players[player.index()];
        let remaining: Hand = acting
            .hand
            .iter()
            .filter(|in_hand| in_hand.code != card.code)
            .cloned()
            .collect();
        if remaining.len() == acting.hand.len() {
            debug!("{player} played {code} without holding it", code = card.code);
        }
        acting.hand = remaining;
        acting.turn_to_play = false;

        self.discard.push(DiscardEntry { player, card });

        let starter = self.round_starter();
        let next = if player.index() + 1 < self.player_count {
            PlayerId::new(player.0 + 1)
        } else {
            PlayerId::new(0)
        };
        if next != starter {
            self.players[next.index()].turn_to_play = true;
        }
        self
    }

    /// Apply an externally computed round outcome.
    ///
    /// Adds `score` to the winner's total, clears the discard, increments
    /// the round counter and recomputes `is_game_over`. Hands empty in
    /// lockstep under even deals, so game over is keyed on player 0's hand.
    /// No turn flag is set; the next round opens via
    /// [`GameState::start_round`].
    ///
    /// # Panics
    ///
    /// Panics if called before a successful deal or if `winner` is not a
    /// dealt seat.
    #[must_use]
    pub fn resolve_round(mut self, winner: PlayerId, score: i64) -> Self {
        self.players[winner.index()].score += score;
        self.discard.clear();
        self.is_game_over = self.players[0].hand.is_empty();
        self.round_count += 1;
        trace!(
            "round {round} resolved: {winner} +{score}",
            round = self.round_count
        );
        self
    }

    /// Grant the opening turn for the new round.
    ///
    /// Sets the round starter's flag and nothing else; flags left over from
    /// caller misuse are not cleared here, and calling twice just re-sets
    /// the same flag.
    ///
    /// # Panics
    ///
    /// Panics if called before a successful deal.
    #[must_use]
    pub fn start_round(mut self) -> Self {
        let starter = self.round_starter();
        self.players[starter.index()].turn_to_play = true;
        self
    }

    /// Apply a gameplay action and record it in the history.
    ///
    /// Dispatches to the matching transition. The record keeps the round
    /// number the action was applied in; replaying a recorded history onto
    /// an equally dealt state reproduces the final state.
    #[must_use]
    pub fn apply(self, action: GameAction) -> Self {
        let record = ActionRecord {
            action: action.clone(),
            round: self.round_count,
        };
        let mut next = match action {
            GameAction::PlayCard { player, card } => self.play_card(player, card),
            GameAction::ResolveRound { winner, score } => self.resolve_round(winner, score),
            GameAction::StartRound => self.start_round(),
        };
        next.history.push_back(record);
        next
    }

    // === Accessors ===

    /// Number of dealt seats. Zero before a successful deal.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Deal lifecycle phase.
    #[must_use]
    pub fn status(&self) -> DealStatus {
        self.status
    }

    /// Terminal flag.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Rounds completed so far.
    #[must_use]
    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    /// The seat designated to open the current round.
    ///
    /// # Panics
    ///
    /// Panics if called before a successful deal.
    #[must_use]
    pub fn round_starter(&self) -> PlayerId {
        PlayerId::new((self.round_count as usize % self.player_count) as u8)
    }

    /// One seat's state.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not a dealt seat.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player.index()]
    }

    /// Iterate over all seats in id order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// The in-progress round's plays, oldest first.
    #[must_use]
    pub fn discard(&self) -> &[DiscardEntry] {
        &self.discard
    }

    /// Whether every seat has played into the current round.
    #[must_use]
    pub fn round_complete(&self) -> bool {
        self.status == DealStatus::Success && self.discard.len() >= self.player_count
    }

    /// Seats whose turn flag is currently set.
    ///
    /// Usually zero or one seat; the machine does not enforce
    /// single-active-player, so caller misuse can produce more.
    #[must_use]
    pub fn turn_holders(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|player| player.turn_to_play)
            .map(|player| player.id)
            .collect()
    }

    /// Gameplay actions applied via [`GameState::apply`] since the last
    /// deal, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        Card::new(code)
    }

    fn hands(player_count: usize, hand_size: usize) -> Vec<Hand> {
        (0..player_count)
            .map(|p| (0..hand_size).map(|c| card(&format!("c{p}-{c}"))).collect())
            .collect()
    }

    fn dealt(player_count: usize, hand_size: usize) -> GameState {
        GameState::new()
            .deal_pending()
            .deal_fulfilled(hands(player_count, hand_size))
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();

        assert_eq!(state.status(), DealStatus::Idle);
        assert_eq!(state.player_count(), 0);
        assert_eq!(state.round_count(), 0);
        assert!(state.discard().is_empty());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_deal_pending_resets() {
        let state = dealt(4, 3)
            .play_card(PlayerId::new(0), card("c0-0"))
            .deal_pending();

        assert_eq!(state.status(), DealStatus::Loading);
        assert_eq!(state.player_count(), 0);
        assert_eq!(state.players().count(), 0);
        assert!(state.discard().is_empty());
        assert_eq!(state.round_count(), 0);
    }

    #[test]
    fn test_deal_fulfilled_four_players() {
        let state = dealt(4, 3);

        assert_eq!(state.status(), DealStatus::Success);
        assert_eq!(state.player_count(), 4);
        assert!(state.player(PlayerId::new(0)).turn_to_play);
        for player in PlayerId::all(4).skip(1) {
            assert!(!state.player(player).turn_to_play);
            assert_eq!(state.player(player).score, 0);
            assert_eq!(state.player(player).hand_size(), 3);
        }
        assert_eq!(state.turn_holders(), vec![PlayerId::new(0)]);
    }

    #[test]
    fn test_deal_failed() {
        let state = GameState::new().deal_pending().deal_failed();

        assert_eq!(state.status(), DealStatus::Error);
        assert_eq!(state.player_count(), 0);
    }

    #[test]
    fn test_play_card_moves_card_to_discard() {
        let state = dealt(4, 3);
        let played = state.player(PlayerId::new(0)).hand[0].clone();

        let state = state.play_card(PlayerId::new(0), played.clone());

        assert_eq!(state.discard().len(), 1);
        assert_eq!(state.discard()[0].player, PlayerId::new(0));
        assert_eq!(state.discard()[0].card, played);
        assert!(!state.player(PlayerId::new(0)).holds(&played.code));
        assert_eq!(state.player(PlayerId::new(0)).hand_size(), 2);
        // Nowhere else: the other hands never held it
        for player in PlayerId::all(4).skip(1) {
            assert!(!state.player(player).holds(&played.code));
        }
    }

    #[test]
    fn test_play_card_advances_turn() {
        // roundStarter is 0; the candidate after seat 0 is seat 1
        let state = dealt(4, 3).play_card(PlayerId::new(0), card("c0-0"));

        assert!(!state.player(PlayerId::new(0)).turn_to_play);
        assert!(state.player(PlayerId::new(1)).turn_to_play);
        assert_eq!(state.turn_holders(), vec![PlayerId::new(1)]);
    }

    #[test]
    fn test_play_card_wraparound_stops_at_starter() {
        // Last seat plays while the starter is 0: the wraparound candidate
        // equals the starter, so nobody's flag is set by the play itself.
        let state = dealt(4, 3)
            .play_card(PlayerId::new(0), card("c0-0"))
            .play_card(PlayerId::new(1), card("c1-0"))
            .play_card(PlayerId::new(2), card("c2-0"))
            .play_card(PlayerId::new(3), card("c3-0"));

        assert!(state.turn_holders().is_empty());
        assert_eq!(state.discard().len(), 4);
        assert!(state.round_complete());
    }

    #[test]
    fn test_play_card_ignored_when_round_full() {
        let mut state = dealt(2, 2);
        state = state
            .play_card(PlayerId::new(0), card("c0-0"))
            .play_card(PlayerId::new(1), card("c1-0"));
        assert!(state.round_complete());

        let before = state.clone();
        let after = before.clone().play_card(PlayerId::new(0), card("c0-1"));

        assert_eq!(after, before);
        assert_eq!(after.player(PlayerId::new(0)).hand_size(), 1);
    }

    #[test]
    fn test_play_card_does_not_check_turn_flag() {
        // The soft guard only covers a full round; out-of-turn plays are
        // accepted and must be prevented by the caller.
        let state = dealt(4, 3).play_card(PlayerId::new(2), card("c2-0"));

        assert_eq!(state.discard().len(), 1);
        assert!(state.player(PlayerId::new(3)).turn_to_play);
    }

    #[test]
    fn test_resolve_round_scores_and_clears() {
        let mut state = dealt(4, 3);
        state = state
            .play_card(PlayerId::new(0), card("c0-0"))
            .resolve_round(PlayerId::new(2), 10);
        assert_eq!(state.player(PlayerId::new(2)).score, 10);

        state = state.resolve_round(PlayerId::new(2), 5);

        assert_eq!(state.player(PlayerId::new(2)).score, 15);
        assert!(state.discard().is_empty());
        assert_eq!(state.round_count(), 2);
        // Resolution never touches turn flags; seat 1 still holds the one
        // granted when seat 0 played.
        assert_eq!(state.turn_holders(), vec![PlayerId::new(1)]);
    }

    #[test]
    fn test_resolve_round_sets_game_over_on_empty_hands() {
        let mut state = dealt(2, 1);
        state = state
            .play_card(PlayerId::new(0), card("c0-0"))
            .play_card(PlayerId::new(1), card("c1-0"));
        assert!(!state.is_game_over());

        state = state.resolve_round(PlayerId::new(1), 3);

        assert!(state.is_game_over());
        assert_eq!(state.round_count(), 1);
    }

    #[test]
    fn test_start_round_grants_starter_turn() {
        let mut state = dealt(4, 3);
        state = state
            .play_card(PlayerId::new(0), card("c0-0"))
            .play_card(PlayerId::new(1), card("c1-0"))
            .play_card(PlayerId::new(2), card("c2-0"))
            .play_card(PlayerId::new(3), card("c3-0"))
            .resolve_round(PlayerId::new(0), 1);

        assert!(state.turn_holders().is_empty());
        state = state.start_round();

        // round_count is 1, so seat 1 opens the new round
        assert_eq!(state.round_starter(), PlayerId::new(1));
        assert_eq!(state.turn_holders(), vec![PlayerId::new(1)]);
    }

    #[test]
    fn test_round_starter_rotation() {
        let mut state = dealt(3, 5);
        assert_eq!(state.round_starter(), PlayerId::new(0));

        for expected in [1u8, 2, 0, 1] {
            state = state.resolve_round(PlayerId::new(0), 0);
            assert_eq!(state.round_starter(), PlayerId::new(expected));
        }
    }

    #[test]
    fn test_apply_records_history() {
        let state = dealt(2, 2)
            .apply(GameAction::PlayCard {
                player: PlayerId::new(0),
                card: card("c0-0"),
            })
            .apply(GameAction::PlayCard {
                player: PlayerId::new(1),
                card: card("c1-0"),
            })
            .apply(GameAction::ResolveRound {
                winner: PlayerId::new(1),
                score: 2,
            })
            .apply(GameAction::StartRound);

        assert_eq!(state.history().len(), 4);
        assert_eq!(state.history()[0].round, 0);
        // The resolve was applied while round_count was still 0
        assert_eq!(state.history()[2].round, 0);
        assert_eq!(state.history()[3].round, 1);
        assert_eq!(state.history()[3].action, GameAction::StartRound);
    }

    #[test]
    fn test_history_cleared_by_new_deal() {
        let state = dealt(2, 2)
            .apply(GameAction::StartRound)
            .deal_pending();

        assert!(state.history().is_empty());
    }

    #[test]
    fn test_state_serialization() {
        let state = dealt(3, 2).play_card(PlayerId::new(0), card("c0-1"));

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
