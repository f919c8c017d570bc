//! Navigation properties checked over every short sequence of moves.
use loyalty_wizard::config::default_config;
use loyalty_wizard::coupon::{coupon_wizard, CouponSection, CouponWizard};
use loyalty_wizard::wizard::{SectionValidation, WizardSection};
use loyalty_wizard::InMemoryRegistry;

#[derive(Debug, Clone, Copy)]
enum Move {
    Next,
    Previous,
    Continue,
    Jump(CouponSection),
}

const MAX_SEQUENCE_LEN: usize = 5;

fn new_wizard() -> CouponWizard {
    coupon_wizard(default_config(), InMemoryRegistry::new())
}

fn moves() -> Vec<Move> {
    let mut moves = vec![Move::Next, Move::Previous, Move::Continue];
    moves.extend(CouponSection::ORDER.iter().copied().map(Move::Jump));
    moves
}

fn apply(wizard: &mut CouponWizard, step: Move) {
    match step {
        Move::Next => wizard.go_to_next_section(),
        Move::Previous => wizard.go_to_previous_section(),
        Move::Continue => wizard.continue_from_current_section(),
        Move::Jump(section) => {
            wizard.set_active_section(section);
        }
    }
}

/// Every sequence of `moves` up to `max_len` long, shortest first.
fn sequences(moves: &[Move], max_len: usize) -> Vec<Vec<Move>> {
    let mut all = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next_frontier = Vec::new();
        for prefix in &frontier {
            for step in moves {
                let mut sequence: Vec<Move> = prefix.clone();
                sequence.push(*step);
                next_frontier.push(sequence);
            }
        }
        all.extend(next_frontier.iter().cloned());
        frontier = next_frontier;
    }
    all
}

fn replay(sequence: &[Move]) -> CouponWizard {
    let mut wizard = new_wizard();
    for step in sequence {
        apply(&mut wizard, *step);
    }
    wizard
}

#[test]
fn furthest_never_decreases_and_never_trails_active() {
    for sequence in sequences(&moves(), MAX_SEQUENCE_LEN) {
        let mut wizard = new_wizard();
        let mut furthest = wizard.furthest_section_reached();
        for step in &sequence {
            apply(&mut wizard, *step);
            let now = wizard.furthest_section_reached();
            assert!(
                !now.is_before(furthest),
                "furthest regressed after {sequence:?}"
            );
            assert!(
                !now.is_before(wizard.active_section()),
                "active passed furthest after {sequence:?}"
            );
            furthest = now;
        }
    }
}

#[test]
fn direct_jumps_never_change_furthest() {
    for sequence in sequences(&moves(), 3) {
        for target in CouponSection::ORDER {
            let mut wizard = replay(&sequence);
            let before = wizard.furthest_section_reached();
            wizard.set_active_section(*target);
            assert_eq!(
                wizard.furthest_section_reached(),
                before,
                "jump to {target:?} after {sequence:?}"
            );
        }
    }
}

#[test]
fn continue_at_the_frontier_is_next() {
    for sequence in sequences(&moves(), 4) {
        let mut continued = replay(&sequence);
        if continued.is_revisiting_prior_section() {
            continue;
        }
        let mut stepped = replay(&sequence);
        continued.continue_from_current_section();
        stepped.go_to_next_section();
        assert_eq!(continued.state(), stepped.state(), "after {sequence:?}");
    }
}

#[test]
fn continue_while_revisiting_lands_on_furthest_when_intermediate_sections_are_complete() {
    for sequence in sequences(&moves(), 4) {
        let mut wizard = replay(&sequence);
        if !wizard.is_revisiting_prior_section() {
            continue;
        }
        for section in CouponSection::ORDER {
            wizard.mark_section_touched(*section);
            wizard.validate_section(*section);
        }
        // Defaults leave only basic info invalid, which is never after the cursor.
        let furthest = wizard.furthest_section_reached();
        wizard.continue_from_current_section();
        assert_eq!(wizard.active_section(), furthest, "after {sequence:?}");
    }
}

#[test]
fn reset_after_any_sequence_restores_defaults() {
    for sequence in sequences(&moves(), 3) {
        let mut wizard = replay(&sequence);
        for section in CouponSection::ORDER {
            wizard.mark_section_touched(*section);
            wizard.validate_section(*section);
        }
        wizard.reset_wizard();
        let fresh = new_wizard();
        assert_eq!(wizard.state(), fresh.state());
        for section in CouponSection::ORDER {
            assert_eq!(
                wizard.section_validation(*section),
                &SectionValidation::default()
            );
        }
    }
}
