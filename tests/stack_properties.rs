/**
 * Property tests for trimming and the placement loop.
 *
 * Invariants covered:
 * - A trimmed block is never wider than either block it was cut from.
 * - A trimmed block's extent lies inside both input extents.
 * - Block width never grows from one placement to the next.
 * - The motion clock stays in [0, 2π) and keeps blocks on screen.
 */
use proptest::prelude::*;
use stack_tower::GameConfig;
use stack_tower::sim::{Block, StackGame, find_support, motion, trim};

const H: f32 = 40.0;
const EPS: f32 = 1e-3;

/// Foundation-like block with its left edge on screen
fn support_block() -> impl Strategy<Value = Block> {
    (0.0f32..300.0, 1.0f32..300.0).prop_map(|(left, w)| Block::new(left + w / 2.0, H, w, H, 0))
}

proptest! {
    #[test]
    fn trimmed_width_bounded_by_both_inputs(
        support in support_block(),
        mx in -100.0f32..600.0,
        mw in 1.0f32..300.0,
    ) {
        let moving = Block::new(mx, 2.0 * H, mw, H, 1);
        let t = trim(&moving, &[support], 1000.0, 0.1).unwrap();
        prop_assert!(t.width >= 0.0);
        prop_assert!(t.width <= moving.width.min(support.width) + EPS);
    }

    #[test]
    fn trimmed_extent_inside_both_inputs(
        support in support_block(),
        mx in 0.0f32..500.0,
        mw in 1.0f32..300.0,
    ) {
        let moving = Block::new(mx, 2.0 * H, mw, H, 1);
        // Viewport wide enough that the clamp never moves the block
        let t = trim(&moving, &[support], 2000.0, 0.1).unwrap();
        if t.width > 0.0 {
            prop_assert!(t.left() >= moving.left() - EPS);
            prop_assert!(t.right() <= moving.right() + EPS);
            prop_assert!(t.left() >= support.left() - EPS);
            prop_assert!(t.right() <= support.right() + EPS);
            prop_assert_eq!(t.y, moving.y);
            prop_assert_eq!(t.level, moving.level);
        }
    }

    #[test]
    fn support_is_the_block_right_below(levels in 1usize..12, pick in 0usize..12) {
        let stack: Vec<Block> = (0..levels)
            .map(|i| Block::new(200.0, H * (i as f32 + 1.0), 100.0, H, i as u32))
            .collect();
        let pick = pick % levels;
        let moving = Block::new(200.0, stack[pick].top(), 100.0, H, pick as u32 + 1);
        let support = find_support(&moving, &stack).unwrap();
        prop_assert_eq!(support.level, pick as u32);
    }

    #[test]
    fn width_never_grows_across_placements(
        taps in proptest::collection::vec((0.0f32..2.0, 0u8..2), 1..40),
        screen in 250.0f32..800.0,
    ) {
        let mut game = StackGame::new(GameConfig::default()).unwrap();
        game.start(screen).unwrap();
        let mut last_width = game.state().current_block_width;

        for (wait, tap) in taps {
            // Let any pending spawn fire, then drift for a while
            game.tick(0.25, screen).unwrap();
            game.tick(wait, screen).unwrap();
            if tap == 1 {
                game.place().unwrap();
            }
            let width = game.state().current_block_width;
            prop_assert!(width <= last_width + EPS);
            last_width = width;

            let s = game.state();
            prop_assert_eq!(s.placed_blocks.len() as u32, s.current_level);
            if let Some(m) = s.moving_block {
                prop_assert_eq!(m.level as usize, s.placed_blocks.len());
            }
            if s.is_game_over() {
                break;
            }
        }
    }

    #[test]
    fn phase_stays_in_range(steps in proptest::collection::vec(0.0f32..10.0, 1..100)) {
        let mut phase = 0.0;
        for dt in steps {
            phase = motion::advance_phase(phase, dt, 4.0);
            prop_assert!((0.0..std::f32::consts::TAU).contains(&phase));
        }
    }

    #[test]
    fn motion_keeps_block_on_screen(
        phase in 0.0f32..std::f32::consts::TAU,
        width in 1.0f32..200.0,
        extra in 0.0f32..600.0,
    ) {
        let screen = width + extra;
        let x = motion::position(phase, width, screen);
        prop_assert!(x - width / 2.0 >= -EPS);
        prop_assert!(x + width / 2.0 <= screen + EPS);
    }
}
