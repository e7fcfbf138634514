//! Relic chest prompt lifecycle.
//! This module exists to isolate prompt opening, ID matching, and chest consumption.
//! It does not own relic effects or inventory slot bookkeeping.

use super::*;
use crate::ports::AudioCue;
use crate::roll::pick_index;

impl<R: Renderer> GameSession<R> {
    /// Opens an accept/decline prompt for a random relic the player does not hold yet. With
    /// nothing left to offer the chest is spent immediately.
    pub(super) fn open_chest(&mut self, pos: Pos) -> MoveOutcome {
        self.audio.play(AudioCue::ChestOpen);
        let Some(relic) = self.pick_unheld_relic() else {
            self.consume_chest(pos);
            self.log.push(LogEvent::ChestEmpty { at: pos });
            return MoveOutcome::ChestEmpty { at: pos };
        };

        let prompt_id = ChoicePromptId(self.next_input_seq);
        let offer = ChestOffer { prompt_id, pos, relic: relic.key };
        self.pending_chest = Some(offer);
        self.log.push(LogEvent::ChestOffered { at: pos, relic: relic.name });
        MoveOutcome::ChestOffered(offer)
    }

    pub fn resolve_chest(
        &mut self,
        prompt_id: ChoicePromptId,
        decision: ChestDecision,
    ) -> Result<ChestResolution, GameError> {
        let Some(offer) = self.pending_chest else {
            return Err(GameError::NoPendingPrompt);
        };
        if offer.prompt_id != prompt_id {
            return Err(GameError::PromptMismatch);
        }

        self.pending_chest = None;
        self.next_input_seq += 1;
        self.consume_chest(offer.pos);

        let Some(relic) = self.content.relic(offer.relic).copied() else {
            return Ok(ChestResolution::Rejected(RelicRejection::NoRelicAvailable));
        };
        match decision {
            ChestDecision::Decline => {
                self.log.push(LogEvent::ChestDeclined { relic: relic.name });
                Ok(ChestResolution::Declined)
            }
            ChestDecision::Accept => match self.add_relic(relic) {
                Ok(slot) => Ok(ChestResolution::Accepted { slot }),
                Err(reason) => {
                    self.log.push(LogEvent::RelicRejected { relic: relic.name, reason });
                    Ok(ChestResolution::Rejected(reason))
                }
            },
        }
    }

    fn pick_unheld_relic(&mut self) -> Option<RelicDef> {
        let candidates: Vec<&RelicDef> = self
            .content
            .relics
            .iter()
            .filter(|relic| !self.state.inventory.holds(relic.name))
            .collect();
        if candidates.is_empty() {
            return None;
        }
        Some(*candidates[pick_index(&mut self.rng, candidates.len())])
    }

    fn consume_chest(&mut self, pos: Pos) {
        if let Some(handle) = self.state.grid.tile_mut(pos).and_then(|tile| tile.clear_occupant())
        {
            self.renderer.remove(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn offer_from(outcome: MoveOutcome) -> ChestOffer {
        match outcome {
            MoveOutcome::ChestOffered(offer) => offer,
            other => panic!("expected a chest offer, got {other:?}"),
        }
    }

    #[test]
    fn chest_opens_a_prompt_without_moving() {
        let mut session = playing_session(&["S..", ".PC", "..E"]);
        let offer = offer_from(session.move_player(Direction::Right).expect("playing"));

        assert_eq!(offer.pos, Pos { y: 1, x: 2 });
        assert_eq!(session.player().pos, Pos { y: 1, x: 1 });
        assert_eq!(session.pending_chest(), Some(offer));
        assert!(session.content().relic(offer.relic).is_some());
        assert_eq!(session.move_player(Direction::Down), Ok(MoveOutcome::Suppressed));
    }

    #[test]
    fn accepting_stores_the_relic_and_consumes_the_chest() {
        let mut session = playing_session(&["S..", ".PC", "..E"]);
        let offer = offer_from(session.move_player(Direction::Right).expect("playing"));

        let resolution =
            session.resolve_chest(offer.prompt_id, ChestDecision::Accept).expect("open prompt");
        assert_eq!(resolution, ChestResolution::Accepted { slot: 0 });
        assert_eq!(session.inspect_slot(0).map(|relic| relic.key), Ok(offer.relic));
        assert!(session.grid().tile(offer.pos).expect("in bounds").occupant.is_none());
        assert!(session.input_enabled());
    }

    #[test]
    fn declining_also_consumes_the_chest() {
        let mut session = playing_session(&["S..", ".PC", "..E"]);
        let offer = offer_from(session.move_player(Direction::Right).expect("playing"));

        let resolution =
            session.resolve_chest(offer.prompt_id, ChestDecision::Decline).expect("open prompt");
        assert_eq!(resolution, ChestResolution::Declined);
        assert_eq!(session.inventory().held_count(), 0);
        assert!(session.grid().tile(offer.pos).expect("in bounds").occupant.is_none());
    }

    #[test]
    fn stale_prompt_id_is_rejected_and_prompt_stays_open() {
        let mut session = playing_session(&["S..", ".PC", "..E"]);
        let offer = offer_from(session.move_player(Direction::Right).expect("playing"));
        let stale = ChoicePromptId(offer.prompt_id.0 + 1);

        assert_eq!(
            session.resolve_chest(stale, ChestDecision::Accept),
            Err(GameError::PromptMismatch)
        );
        assert_eq!(session.pending_chest(), Some(offer));
    }

    #[test]
    fn prompt_ids_advance_between_chests() {
        let mut session = playing_session(&["S..", "CPC", "..E"]);
        let first = offer_from(session.move_player(Direction::Right).expect("playing"));
        session.resolve_chest(first.prompt_id, ChestDecision::Decline).expect("open prompt");
        let second = offer_from(session.move_player(Direction::Left).expect("playing"));
        assert_ne!(first.prompt_id, second.prompt_id);
    }

    #[test]
    fn chest_is_empty_once_every_relic_is_held() {
        let mut session = playing_session(&["S..", ".PC", "..E"]);
        session.config.inventory_capacity = 20;
        session.state.inventory = Inventory::with_capacity(20);
        let relics = session.content().relics.clone();
        for relic in relics {
            session.add_relic(relic).expect("room for every relic");
        }

        let outcome = session.move_player(Direction::Right).expect("playing");
        assert_eq!(outcome, MoveOutcome::ChestEmpty { at: Pos { y: 1, x: 2 } });
        assert_eq!(session.pending_chest(), None);
        assert!(session.grid().tile(Pos { y: 1, x: 2 }).expect("in bounds").occupant.is_none());
    }

    #[test]
    fn accepting_with_a_full_inventory_is_rejected() {
        let mut session = playing_session(&["S..", ".PC", "..E"]);
        session.state.inventory = Inventory::with_capacity(1);
        let first = session.content().relics[0];
        session.add_relic(first).expect("one free slot");

        let offer = offer_from(session.move_player(Direction::Right).expect("playing"));
        assert_ne!(offer.relic, first.key, "held relics are never offered");
        assert_eq!(
            session.resolve_chest(offer.prompt_id, ChestDecision::Accept),
            Ok(ChestResolution::Rejected(RelicRejection::InventoryFull))
        );
        assert!(session.grid().tile(offer.pos).expect("in bounds").occupant.is_none());
        assert!(session.log().iter().any(|event| matches!(
            event,
            LogEvent::RelicRejected { reason: RelicRejection::InventoryFull, .. }
        )));
    }
}
