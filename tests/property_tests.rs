//! Property tests for selection legality and scoring invariants.

use life_tile::{Cell, EngineError, PlayerId, Rect, RoundConfig, RoundState};
use proptest::prelude::*;

fn empty_round() -> RoundState {
    RoundState::new(RoundConfig::new(6, 6).obstacles(0), PlayerId::new(0), 0).unwrap()
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.left <= b.right && b.left <= a.right && a.top <= b.bottom && b.top <= a.bottom
}

proptest! {
    /// Every rectangle fully inside an all-empty grid is legal.
    #[test]
    fn any_rect_on_empty_grid_is_legal(
        ax in 0i32..6, ay in 0i32..6,
        bx in 0i32..6, by in 0i32..6,
    ) {
        let state = empty_round();
        let rect = Rect::from_corners((ax, ay), (bx, by));

        prop_assert!(state.validate_selection(rect));
    }

    /// After one claim, a candidate is legal exactly when it avoids it.
    #[test]
    fn legality_tracks_overlap(
        cx in 0i32..6, cy in 0i32..6, cw in 0i32..3, ch in 0i32..3,
        ax in 0i32..6, ay in 0i32..6, bx in 0i32..6, by in 0i32..6,
    ) {
        let claimed = Rect::from_corners((cx, cy), ((cx + cw).min(5), (cy + ch).min(5)));
        let state = empty_round().commit(claimed).unwrap();

        let candidate = Rect::from_corners((ax, ay), (bx, by));
        prop_assert_eq!(
            state.validate_selection(candidate),
            !overlaps(candidate, claimed)
        );
    }

    /// Committing the same rectangle twice always fails the second time.
    #[test]
    fn commit_is_single_shot(
        ax in 0i32..6, ay in 0i32..6,
        bx in 0i32..6, by in 0i32..6,
    ) {
        let rect = Rect::from_corners((ax, ay), (bx, by));
        let state = empty_round().commit(rect).unwrap();

        if state.is_over() {
            prop_assert_eq!(state.commit(rect).unwrap_err(), EngineError::RoundOver);
        } else {
            prop_assert_eq!(state.commit(rect).unwrap_err(), EngineError::IllegalMove(rect));
        }
    }

    /// Stray drags anywhere around the board never fault, and anything not
    /// fully on the grid reads illegal.
    #[test]
    fn stray_drags_fail_closed(
        ax in -12i32..18, ay in -12i32..18,
        bx in -12i32..18, by in -12i32..18,
    ) {
        let state = empty_round();
        let rect = Rect::from_corners((ax, ay), (bx, by));
        let on_grid = rect.left >= 0 && rect.top >= 0 && rect.right < 6 && rect.bottom < 6;

        prop_assert_eq!(state.validate_selection(rect), on_grid);
    }

    /// Over any full obstacle-seeded playout, banked score equals the
    /// claimable area minus what the loser claimed, and the round ends on
    /// the commit that empties the board, never before.
    #[test]
    fn playout_conserves_score(seed in 0u64..200) {
        let config = RoundConfig::new(5, 4).obstacles(3);
        let mut state = RoundState::new(config, PlayerId::new(0), seed).unwrap();
        let claimable = state.grid().empty_cells();

        while !state.is_over() {
            prop_assert!(state.grid().empty_cells() > 0);
            let (x, y) = state
                .grid()
                .iter()
                .find(|&(_, _, cell)| cell == Cell::Empty)
                .map(|(x, y, _)| (x as i32, y as i32))
                .unwrap();
            state = state.commit(Rect::cell(x, y)).unwrap();
        }

        let loser = state.loser().unwrap();
        let loser_claimed: u32 = state
            .history()
            .iter()
            .filter(|claim| claim.player == loser)
            .map(|claim| claim.area())
            .sum();
        let banked: u32 = state.scores().iter().map(|(_, s)| s.cumulative).sum();

        prop_assert_eq!(banked, claimable - loser_claimed);
        prop_assert_eq!(state.grid().empty_cells(), 0);
    }

    /// First-player rotation advances by exactly one position per round.
    #[test]
    fn rotation_walks_every_seat(players in 2usize..6, seed in 0u64..50) {
        let config = RoundConfig::new(3, 3).obstacles(0).players(players);
        let mut state = RoundState::new(config, PlayerId::new(0), seed).unwrap();

        for round in 0..players {
            prop_assert_eq!(state.first_player(), PlayerId::new((round % players) as u8));
            while !state.is_over() {
                let (x, y) = state
                    .grid()
                    .iter()
                    .find(|&(_, _, cell)| cell == Cell::Empty)
                    .map(|(x, y, _)| (x as i32, y as i32))
                    .unwrap();
                state = state.commit(Rect::cell(x, y)).unwrap();
            }
            state = state.start_next_round().unwrap();
        }

        prop_assert_eq!(state.first_player(), PlayerId::new(0));
    }
}
