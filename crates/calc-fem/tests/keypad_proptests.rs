//! Property-based tests for the keypad and the mock page dispatcher

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use calc_fem::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate valid grid positions
fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..5usize, 0usize..4usize)
}

/// Generate the id of any keypad button
fn button_id_strategy() -> impl Strategy<Value = String> {
    let ids: Vec<String> = Keypad::new().buttons().iter().map(|b| b.id.clone()).collect();
    prop::sample::select(ids)
}

// ===== Property tests for Keypad =====

proptest! {
    /// Every grid cell is covered by exactly one button
    #[test]
    fn prop_cell_has_one_button((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        let covering = keypad.buttons().iter().filter(|b| b.covers(row, col)).count();
        prop_assert_eq!(covering, 1);
    }

    /// Cells outside the grid have no button
    #[test]
    fn prop_outside_grid_is_empty(row in 5usize..100usize, col in 0usize..100usize) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_none());
    }

    /// Clicking a button by id matches dispatching its action
    #[test]
    fn prop_click_matches_dispatch(ids in prop::collection::vec(button_id_strategy(), 0..25)) {
        let mut by_click = MockDispatcher::default();
        let mut by_action = MockDispatcher::default();
        let keypad = Keypad::new();
        for id in &ids {
            by_click.click(id).unwrap();
            by_action.dispatch(keypad.handle_click(id).unwrap());
        }
        prop_assert_eq!(by_click.state(), by_action.state());
    }

    /// The page always shows what the formatter says
    #[test]
    fn prop_page_matches_render(ids in prop::collection::vec(button_id_strategy(), 0..25)) {
        let mut dispatcher = MockDispatcher::default();
        dispatcher.init();
        for id in &ids {
            dispatcher.click(id).unwrap();
        }
        let expected = render_display(dispatcher.state());
        prop_assert_eq!(dispatcher.display_text(DisplayRegion::Previous), expected.previous.as_str());
        prop_assert_eq!(dispatcher.display_text(DisplayRegion::Current), expected.current.as_str());
    }
}

// ===== Invariant tests =====

#[test]
fn invariant_button_ids_are_unique() {
    let keypad = Keypad::new();
    let mut ids = HashSet::new();
    for btn in keypad.buttons() {
        assert!(ids.insert(btn.id.clone()), "Duplicate ID: {}", btn.id);
    }
}

#[test]
fn invariant_keypad_has_all_digits() {
    let keypad = Keypad::new();
    for d in 0..=9 {
        assert!(
            keypad.find_button_by_label(&d.to_string()).is_some(),
            "Missing digit {d}"
        );
    }
}

#[test]
fn invariant_keypad_has_all_operators() {
    let keypad = Keypad::new();
    for op in Operation::ALL {
        assert!(
            keypad
                .buttons()
                .iter()
                .any(|b| b.action == KeypadAction::Operator(op)),
            "Missing operator {op}"
        );
    }
}

#[test]
fn invariant_every_kind_is_on_the_keypad() {
    let keypad = Keypad::new();
    for kind in ControlKind::ALL {
        assert!(keypad.buttons().iter().any(|b| b.action.kind() == kind));
    }
}
