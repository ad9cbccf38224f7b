use wordle_infogain::{
    convert_feedback, is_compatible, simulate, Constraint, Feedback, FeedbackCode, FeedbackError,
};

fn words() -> Vec<&'static str> {
    vec![
        "apple", "angle", "ankle", "crane", "eerie", "speed", "creep", "geese", "those", "sores",
    ]
}

#[test]
fn test_simulate_repeated_guess_letter() {
    // 'p' appears twice in the guess and never in the secret: one exclusion
    let constraint = simulate("ankle", "apple");
    let expected = Constraint::new()
        .with_fact('a', 0, true)
        .with_fact('l', 3, true)
        .with_fact('e', 4, true)
        .with_excluded('p');
    assert_eq!(constraint, expected);
}

#[test]
fn test_simulate_counts_every_copy_as_present() {
    // "crane" has one 'e', yet each 'e' of "eerie" gets a fact
    let constraint = simulate("crane", "eerie");
    let expected = Constraint::new()
        .with_fact('e', 0, false)
        .with_fact('e', 1, false)
        .with_fact('r', 2, false)
        .with_fact('e', 4, true)
        .with_excluded('i');
    assert_eq!(constraint, expected);
    assert_eq!(constraint.facts('e').map(|f| f.len()), Some(3));
}

#[test]
fn test_observe_matches_simulate() {
    let code = FeedbackCode::observe("crane", "eerie");
    assert_eq!(code.to_code_string(), "yyybg");
    assert_eq!(convert_feedback("eerie", &code), simulate("crane", "eerie"));

    for secret in words() {
        for guess in words() {
            let code = FeedbackCode::observe(secret, guess);
            assert_eq!(
                convert_feedback(guess, &code),
                simulate(secret, guess),
                "{} against {}",
                guess,
                secret
            );
        }
    }
}

#[test]
fn test_secret_compatible_with_own_feedback() {
    for secret in words() {
        for guess in words() {
            assert!(
                is_compatible(secret, &simulate(secret, guess)),
                "{} against {}",
                guess,
                secret
            );
        }
    }
}

#[test]
fn test_all_correct() {
    let code = FeedbackCode::observe("crane", "crane");
    assert!(code.is_win());
    assert_eq!(code, FeedbackCode::ALL_CORRECT);
}

#[test]
fn test_all_absent() {
    let code = FeedbackCode::observe("dream", "quick");
    assert_eq!(code, FeedbackCode([Feedback::Absent; 5]));
    let constraint = simulate("dream", "quick");
    assert!(constraint.positional().is_empty());
    assert_eq!(constraint.excluded().len(), 5);
}

#[test]
fn test_code_parse() {
    let code = FeedbackCode::parse("gybbb").unwrap();
    assert_eq!(
        code.feedbacks(),
        &[
            Feedback::Correct,
            Feedback::Present,
            Feedback::Absent,
            Feedback::Absent,
            Feedback::Absent,
        ]
    );
    assert_eq!(FeedbackCode::parse("GYBBB").unwrap(), code);
    assert_eq!("gybbb".parse::<FeedbackCode>().unwrap(), code);
}

#[test]
fn test_code_parse_invalid() {
    assert_eq!(FeedbackCode::parse("gybbbg"), Err(FeedbackError::Length(6)));
    assert_eq!(FeedbackCode::parse("gybb"), Err(FeedbackError::Length(4)));
    assert_eq!(
        FeedbackCode::parse("gybzb"),
        Err(FeedbackError::Symbol {
            symbol: 'z',
            position: 3
        })
    );
    assert_eq!(
        FeedbackCode::parse("21000"),
        Err(FeedbackError::Symbol {
            symbol: '2',
            position: 0
        })
    );
}

#[test]
fn test_convert_feedback() {
    let code = FeedbackCode::parse("bbbyg").unwrap();
    let constraint = convert_feedback("soare", &code);
    let expected = Constraint::new()
        .with_excluded('s')
        .with_excluded('o')
        .with_excluded('a')
        .with_fact('r', 3, false)
        .with_fact('e', 4, true);
    assert_eq!(constraint, expected);
}

#[test]
fn test_convert_feedback_keeps_present_letter() {
    // The first 'e' is gray, the second green: presence wins
    let code = FeedbackCode::parse("bbbgb").unwrap();
    let constraint = convert_feedback("speed", &code);
    assert!(!constraint.is_excluded('e'));
    assert_eq!(constraint.facts('e').and_then(|f| f.get(&3)), Some(&true));
    assert_eq!(constraint.facts('e').and_then(|f| f.get(&2)), None);
    assert_eq!(constraint.excluded().len(), 3);
}

#[test]
fn test_emoji_display() {
    let code = FeedbackCode([
        Feedback::Correct,
        Feedback::Present,
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Correct,
    ]);
    assert_eq!(code.to_emoji_string(), "🟩🟨⬛⬛🟩");
    assert_eq!(code.to_string(), "🟩🟨⬛⬛🟩");
    assert_eq!(code.to_code_string(), "gybbg");
}
