use super::*;
use proptest::prelude::*;

#[test]
fn test_roll_accepts_every_face() {
    for value in MIN_FACE..=DIE_FACES {
        let roll = Roll::new(value).expect("valid face");
        assert_eq!(roll.value(), value);
        assert_eq!(u8::from(roll), value);
    }
}

#[test]
fn test_roll_rejects_zero_and_seven() {
    assert_eq!(
        Roll::new(0),
        Err(RollError::OutOfRange {
            value: 0,
            min: MIN_FACE,
            max: DIE_FACES
        })
    );
    assert!(matches!(
        Roll::try_from(7),
        Err(RollError::OutOfRange { value: 7, .. })
    ));
}

#[test]
fn test_roll_deserialize_validates() {
    let roll: Roll = serde_json::from_str("4").unwrap();
    assert_eq!(roll.value(), 4);
    assert!(serde_json::from_str::<Roll>("0").is_err());
}

#[test]
fn test_roll_set_sum_and_equality() {
    let dice = ThresholdDice::try_from([3, 3, 4]).unwrap();
    assert_eq!(dice.sum(), 10);
    assert!(!dice.all_equal());
    assert_eq!(dice.values(), [3, 3, 4]);
    assert_eq!(dice.to_string(), "3,3,4");

    let doubles = CrapsDice::try_from([5, 5]).unwrap();
    assert!(doubles.all_equal());
    assert_eq!(doubles.iter().filter(|roll| roll.is_even()).count(), 0);
}

#[test]
fn test_roll_set_rejects_any_bad_face() {
    assert!(CrapsDice::try_from([0, 3]).is_err());
    assert!(ThresholdDice::try_from([1, 2, 9]).is_err());
}

#[test]
fn test_validate_wager() {
    assert_eq!(validate_wager("0"), Err(ValidationError::NotPositive));
    assert_eq!(validate_wager("abc"), Err(ValidationError::NotANumber));
    assert_eq!(validate_wager("5").map(Wager::amount), Ok(5.0));
}

#[test]
fn test_validate_wager_edge_inputs() {
    assert_eq!(validate_wager("  2.5 ").map(Wager::amount), Ok(2.5));
    assert_eq!(validate_wager("-3"), Err(ValidationError::NotPositive));
    assert_eq!(validate_wager("-0"), Err(ValidationError::NotPositive));
    assert_eq!(validate_wager(""), Err(ValidationError::NotANumber));
    assert_eq!(validate_wager("   "), Err(ValidationError::NotANumber));
    assert_eq!(validate_wager("5 credits"), Err(ValidationError::NotANumber));
    assert_eq!(validate_wager("inf"), Err(ValidationError::NotANumber));
    assert_eq!(validate_wager("NaN"), Err(ValidationError::NotANumber));
    assert_eq!(Wager::new(f64::INFINITY), Err(ValidationError::NotANumber));
    assert_eq!(Wager::try_from(0.0), Err(ValidationError::NotPositive));
}

#[test]
fn test_wager_rejects_stakes_with_unrepresentable_payout() {
    assert_eq!(validate_wager("1e308"), Err(ValidationError::NotANumber));
    assert_eq!(Wager::new(f64::MAX), Err(ValidationError::NotANumber));
    assert_eq!(validate_wager("-1e308"), Err(ValidationError::NotPositive));

    let largest = Wager::new(f64::MAX / WIN_MULTIPLIER).unwrap();
    assert!((largest.amount() * WIN_MULTIPLIER).is_finite());
}

#[test]
fn test_wager_display_drops_trailing_zero() {
    assert_eq!(Wager::new(5.0).unwrap().to_string(), "5");
    assert_eq!(Wager::new(2.5).unwrap().to_string(), "2.5");
}

#[test]
fn test_validation_error_codes() {
    assert_eq!(ValidationError::NotANumber.code(), "not_a_number");
    assert_eq!(ValidationError::NotPositive.code(), "not_positive");
    assert_eq!(ValidationError::EmptyName.code(), "empty_name");
}

#[test]
fn test_validate_identity() {
    assert_eq!(validate_identity("   "), Err(ValidationError::EmptyName));
    assert_eq!(validate_identity(""), Err(ValidationError::EmptyName));
    assert_eq!(validate_identity(" Ana ").unwrap().name(), "Ana");
}

#[test]
fn test_greeting_uses_trimmed_name() {
    let player: PlayerIdentity = "  Quark  ".parse().unwrap();
    assert_eq!(
        player.greeting(),
        "Welcome to Quarks Casino, Quark - good luck!"
    );
}

#[test]
fn test_game_kind_parse() {
    assert_eq!("craps".parse::<GameKind>(), Ok(GameKind::Craps));
    assert_eq!(" Threshold ".parse::<GameKind>(), Ok(GameKind::Threshold));
    assert!("roulette".parse::<GameKind>().is_err());
    assert_eq!(GameKind::Craps.dice_count(), 2);
    assert_eq!(GameKind::Threshold.dice_count(), 3);
}

#[test]
fn test_outcome_labels() {
    assert_eq!(Outcome::Lose.label(GameKind::Craps), "CRAPS");
    assert_eq!(Outcome::Lose.label(GameKind::Threshold), "LOSE");
    assert_eq!(Outcome::Win.label(GameKind::Craps), "WIN");
    assert_eq!(Outcome::Push.label(GameKind::Craps), "PUSH");
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
    assert_eq!(escape_html("&amp;"), "&amp;amp;");
    assert_eq!(escape_html(""), "");
}

#[test]
fn test_payload_json_omits_settlement_on_push() {
    let push = ResultPayload {
        game: GameKind::Craps,
        outcome: Outcome::Push,
        label: "PUSH",
        dice: vec![4, 6],
        sum: 10,
        settlement: None,
    };
    let json = serde_json::to_value(&push).unwrap();
    assert_eq!(json["outcome"], "push");
    assert!(json.get("settlement").is_none());

    let win = ResultPayload {
        outcome: Outcome::Win,
        label: "WIN",
        dice: vec![2, 2],
        sum: 4,
        settlement: Some(Settlement::Payout(10.0)),
        ..push
    };
    let json = serde_json::to_value(&win).unwrap();
    assert_eq!(json["settlement"]["kind"], "payout");
    assert_eq!(json["settlement"]["amount"], 10.0);
}

proptest! {
    #[test]
    fn prop_roll_range_enforced(value in any::<u8>()) {
        let valid = (MIN_FACE..=DIE_FACES).contains(&value);
        prop_assert_eq!(Roll::new(value).is_ok(), valid);
    }

    #[test]
    fn prop_threshold_sum_is_exact(a in 1u8..=6, b in 1u8..=6, c in 1u8..=6) {
        let dice = ThresholdDice::try_from([a, b, c]).unwrap();
        prop_assert_eq!(dice.sum(), a + b + c);
        prop_assert_eq!(dice.all_equal(), a == b && b == c);
    }

    #[test]
    fn prop_positive_wagers_round_trip_through_text(amount in 0.01f64..1_000_000.0) {
        let wager = validate_wager(&amount.to_string()).unwrap();
        prop_assert_eq!(wager.amount(), amount);
    }

    #[test]
    fn prop_accepted_wagers_have_finite_payout(amount in any::<f64>()) {
        if let Ok(wager) = Wager::new(amount) {
            prop_assert!((wager.amount() * WIN_MULTIPLIER).is_finite());
        }
    }

    #[test]
    fn prop_escaped_text_has_no_raw_metacharacters(raw in ".*") {
        let escaped = escape_html(&raw);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }
}
