//! End-to-end action-sequence tests for the calculator engine
//!
//! Drives the engine exactly the way an adapter would: one logical action at
//! a time, appending `Equals` outcomes to a history tape.

use proptest::prelude::*;
use tapecalc::prelude::*;

/// A tiny session harness: engine plus caller-owned tape
#[derive(Debug, Default)]
struct Session {
    engine: Engine,
    tape: HistoryTape,
}

impl Session {
    fn new() -> Self {
        Self::default()
    }

    fn press(&mut self, action: Action) {
        if let Some(entry) = self.engine.apply(action) {
            self.tape.push(entry);
        }
    }

    /// Types a key sequence: digits, `.`, operators, `=`, and the command
    /// letters used by the tests (`C` clear, `E` clear entry, `B` backspace,
    /// `N` toggle sign, `%` percent).
    fn type_keys(&mut self, keys: &str) {
        for key in keys.chars() {
            let action = match key {
                '0'..='9' => Action::Digit(key as u8 - b'0'),
                '.' => Action::Decimal,
                '=' => Action::Equals,
                'C' => Action::Clear,
                'E' => Action::ClearEntry,
                'B' => Action::Backspace,
                'N' => Action::ToggleSign,
                '%' => Action::Percent,
                ' ' => continue,
                _ => Action::Operator(Operator::from_key(key).expect("operator key")),
            };
            self.press(action);
        }
    }

    fn display(&self) -> &str {
        self.engine.display()
    }
}

// ===== Worked examples =====

#[test]
fn test_five_divided_by_two() {
    let mut session = Session::new();
    session.type_keys("5 / 2 =");
    assert_eq!(session.display(), "2.5");
    let entry = session.tape.latest().unwrap();
    assert_eq!(entry.expression, "5 ÷ 2 =");
    assert_eq!(entry.result, "2.5");
}

#[test]
fn test_point_one_plus_point_two() {
    let mut session = Session::new();
    session.type_keys("0.1 + 0.2 =");
    assert_eq!(session.display(), "0.3");
    assert_eq!(session.tape.latest().unwrap().result, "0.3");
}

#[test]
fn test_nine_divided_by_zero() {
    let mut session = Session::new();
    session.type_keys("9 / 0 =");
    assert_eq!(session.display(), "Error");
    assert!(session.tape.is_empty());
}

#[test]
fn test_percent_then_digit_starts_fresh() {
    let mut session = Session::new();
    session.type_keys("5 %");
    assert_eq!(session.display(), "0.05");
    session.type_keys("7");
    assert_eq!(session.display(), "7");
}

#[test]
fn test_backspace_sequence() {
    let mut session = Session::new();
    session.type_keys("123 B B");
    assert_eq!(session.display(), "1");
    session.type_keys("B");
    assert_eq!(session.display(), "0");
}

// ===== Two-operand results and history =====

#[test]
fn test_two_operand_results() {
    let cases = [
        ("2 + 3 =", "5", "2 + 3 ="),
        ("7 - 10 =", "-3", "7 - 10 ="),
        ("6 * 7 =", "42", "6 × 7 ="),
        ("1 / 8 =", "0.125", "1 ÷ 8 ="),
    ];
    for (keys, display, expression) in cases {
        let mut session = Session::new();
        session.type_keys(keys);
        assert_eq!(session.display(), display, "keys: {keys}");
        let entry = session.tape.latest().unwrap();
        assert_eq!(entry.expression, expression, "keys: {keys}");
        assert_eq!(entry.result, display, "keys: {keys}");
    }
}

#[test]
fn test_chaining_rounds_each_step() {
    // Stepwise: 0.1 + 0.2 folds to 0.3 before the next operand applies.
    let mut session = Session::new();
    session.type_keys("0.1 + 0.2 + 0.3 =");
    assert_eq!(session.display(), "0.6");
}

#[test]
fn test_chain_produces_single_entry() {
    let mut session = Session::new();
    session.type_keys("1 + 2 + 3 + 4 =");
    assert_eq!(session.display(), "10");
    // Only the final equals writes to the tape.
    assert_eq!(session.tape.len(), 1);
    assert_eq!(session.tape.latest().unwrap().expression, "6 + 4 =");
}

#[test]
fn test_mid_chain_divide_by_zero() {
    let mut session = Session::new();
    session.type_keys("8 / 0 +");
    assert_eq!(session.display(), "Error");
    assert!(session.tape.is_empty());
    // The session stays responsive: fresh digits recover.
    session.type_keys("4 * 2 =");
    assert_eq!(session.display(), "8");
    assert_eq!(session.tape.len(), 1);
}

#[test]
fn test_result_feeds_next_calculation() {
    let mut session = Session::new();
    session.type_keys("10 - 4 = * 5 =");
    assert_eq!(session.display(), "30");
    assert_eq!(session.tape.len(), 2);
    assert_eq!(session.tape.get(0).unwrap().expression, "6 × 5 =");
    assert_eq!(session.tape.get(1).unwrap().expression, "10 - 4 =");
}

// ===== Tape bounds =====

#[test]
fn test_tape_capped_at_fifty() {
    let mut session = Session::new();
    for i in 0..55 {
        session.press(Action::Digit(1));
        session.press(Action::Operator(Operator::Add));
        session.press(Action::Digit(u8::try_from(i % 10).unwrap()));
        session.press(Action::Equals);
    }
    assert_eq!(session.tape.len(), 50);
    // The five oldest entries were evicted.
    assert_eq!(session.tape.oldest().unwrap().expression, "1 + 5 =");
}

#[test]
fn test_clear_leaves_tape_untouched() {
    let mut session = Session::new();
    session.type_keys("2 + 2 =");
    session.type_keys("C");
    assert_eq!(session.display(), "0");
    assert_eq!(session.tape.len(), 1);
}

// ===== Recall =====

#[test]
fn test_recall_into_running_calculation() {
    let mut session = Session::new();
    session.type_keys("5 / 2 =");
    let entry = session.tape.latest().unwrap().clone();

    session.type_keys("C 100 *");
    session.engine.select_entry(&entry);
    session.type_keys("=");
    assert_eq!(session.display(), "250");
}

#[test]
fn test_select_by_id_round_trip() {
    let mut session = Session::new();
    session.type_keys("6 * 7 =");
    session.type_keys("1 + 1 =");

    let id = session.tape.get(1).unwrap().id.clone();
    let entry = session.tape.select(&id).unwrap().clone();
    session.engine.select_entry(&entry);
    assert_eq!(session.display(), "42");
}

// ===== Digit cap =====

#[test]
fn test_digit_cap_enforced() {
    let mut session = Session::new();
    session.type_keys("12345678901234567890");
    assert_eq!(session.display(), "1234567890123456");
}

// ===== Property tests =====

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u8..=9u8).prop_map(Action::Digit),
        Just(Action::Decimal),
        prop_oneof![
            Just(Operator::Add),
            Just(Operator::Subtract),
            Just(Operator::Multiply),
            Just(Operator::Divide),
        ]
        .prop_map(Action::Operator),
        Just(Action::Equals),
        Just(Action::Clear),
        Just(Action::ClearEntry),
        Just(Action::Backspace),
        Just(Action::ToggleSign),
        Just(Action::Percent),
    ]
}

proptest! {
    /// The display is always a parseable number or the error sentinel.
    #[test]
    fn prop_display_always_well_formed(actions in proptest::collection::vec(action_strategy(), 0..100)) {
        let mut session = Session::new();
        for action in actions {
            session.press(action);
        }
        let display = session.display();
        prop_assert!(
            display == ERROR_DISPLAY || display.parse::<f64>().is_ok(),
            "display not well-formed: {display:?}"
        );
    }

    /// Typed input never exceeds the digit cap and never gains a second
    /// decimal point, whatever the editing sequence.
    #[test]
    fn prop_typed_input_respects_cap(
        actions in proptest::collection::vec(
            prop_oneof![
                (0u8..=9u8).prop_map(Action::Digit),
                Just(Action::Decimal),
                Just(Action::Backspace),
                Just(Action::ToggleSign),
            ],
            0..200,
        )
    ) {
        let mut session = Session::new();
        for action in actions {
            session.press(action);
            let display = session.display();
            let typed = display.chars().filter(char::is_ascii_digit).count();
            prop_assert!(typed <= MAX_DIGITS, "too many digits: {display:?}");
            let points = display.chars().filter(|&c| c == '.').count();
            prop_assert!(points <= 1, "multiple decimal points: {display:?}");
        }
    }

    /// The tape never grows past its capacity.
    #[test]
    fn prop_tape_never_exceeds_capacity(actions in proptest::collection::vec(action_strategy(), 0..200)) {
        let mut session = Session::new();
        for action in actions {
            session.press(action);
            prop_assert!(session.tape.len() <= session.tape.max_entries());
        }
    }

    /// Clear always restores the exact initial state.
    #[test]
    fn prop_clear_restores_initial_state(actions in proptest::collection::vec(action_strategy(), 0..100)) {
        let mut session = Session::new();
        for action in actions {
            session.press(action);
        }
        session.press(Action::Clear);
        prop_assert_eq!(&session.engine, &Engine::new());
    }

    /// Backspace repeated often enough always lands on "0".
    #[test]
    fn prop_backspace_terminates_at_zero(digits in proptest::collection::vec(0u8..=9u8, 1..20)) {
        let mut session = Session::new();
        for d in digits {
            session.press(Action::Digit(d));
        }
        for _ in 0..25 {
            session.press(Action::Backspace);
        }
        prop_assert_eq!(session.display(), "0");
    }
}
