use wordle_infogain::{
    convert_feedback, simulate, FeedbackCode, Game, Session, SessionError, SessionState,
    WordError, WordLists,
};

fn new_session() -> Session {
    let solutions = vec!["apple".to_string(), "angle".to_string(), "ankle".to_string()];
    let lists = WordLists::new(solutions, vec!["gawky".to_string()]).unwrap();
    Session::new(lists.new_game())
}

fn code(s: &str) -> FeedbackCode {
    FeedbackCode::parse(s).unwrap()
}

#[test]
fn test_session_solves_ankle() {
    let mut session = new_session();
    assert_eq!(session.state(), &SessionState::Init);

    session.guess("apple").unwrap();
    assert_eq!(
        session.state(),
        &SessionState::AwaitingFeedback("apple".to_string())
    );

    let feedback = FeedbackCode::observe("ankle", "apple");
    assert_eq!(feedback.to_code_string(), "gbbgg");
    assert_eq!(session.feedback(feedback), Ok(&SessionState::Narrowed));
    assert_eq!(session.game().candidates(), &["angle", "ankle"]);
    assert_eq!(session.constraint(), &simulate("ankle", "apple"));

    let selection = session.recommend();
    assert_eq!(selection.best_info_guess.as_deref(), Some("gawky"));
    assert_eq!(selection.best_win_guess.as_deref(), Some("angle"));

    session.guess("angle").unwrap();
    let state = session.feedback(code("ggbgg")).unwrap();
    assert_eq!(state, &SessionState::Solved("ankle".to_string()));
    assert!(session.game().won());
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_session_all_green_is_solved() {
    let mut session = new_session();
    session.guess("APPLE").unwrap();
    assert_eq!(
        session.feedback(FeedbackCode::ALL_CORRECT),
        Ok(&SessionState::Solved("apple".to_string()))
    );
    assert!(session.state().is_terminal());
}

#[test]
fn test_session_contradiction() {
    let mut session = new_session();
    session.guess("apple").unwrap();
    // Every solution ends in 'e'
    assert_eq!(
        session.feedback(code("ggggb")),
        Ok(&SessionState::Contradiction)
    );
    assert_eq!(session.game().remaining_count(), 0);
    assert_eq!(session.game().baseline_entropy(), 0.0);
    assert_eq!(session.guess("angle"), Err(SessionError::Finished));
    assert_eq!(
        session.feedback(code("bbbbb")),
        Err(SessionError::Finished)
    );
}

#[test]
fn test_session_rejects_unknown_guesses() {
    let mut session = new_session();
    assert_eq!(
        session.guess("zzzzz"),
        Err(SessionError::NotAllowed("zzzzz".to_string()))
    );
    assert!(matches!(
        session.guess("abc"),
        Err(SessionError::Word(WordError::Length { len: 3, .. }))
    ));
    assert_eq!(session.state(), &SessionState::Init);
}

#[test]
fn test_session_candidates_shrink_monotonically() {
    let words: Vec<String> = [
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for secret in &words {
        let mut session = Session::new(Game::new(words.clone(), words.clone()));
        let mut previous = session.game().remaining_count();
        let mut guess = "crane".to_string();

        for _ in 0..words.len() {
            session.guess(&guess).unwrap();
            let state = session
                .feedback(FeedbackCode::observe(secret, &guess))
                .unwrap()
                .clone();
            let remaining = session.game().remaining_count();
            assert!(remaining <= previous);
            assert!(session.game().candidates().contains(secret));
            previous = remaining;

            if state.is_terminal() {
                break;
            }
            let candidates = session.game().candidates();
            guess = match session.recommend().best_win_guess {
                Some(next) if candidates.contains(&next) => next,
                _ => candidates[0].clone(),
            };
        }

        assert!(session.state().is_terminal(), "unsolved: {}", secret);
    }
}

#[test]
fn test_session_keeps_each_round_constraint() {
    let mut session = new_session();
    assert!(session.last_learned().is_none());

    session.guess("apple").unwrap();
    session.feedback(code("gbbgg")).unwrap();
    let first = convert_feedback("apple", &code("gbbgg"));
    assert_eq!(session.last_learned(), Some(&first));

    session.guess("gawky").unwrap();
    session.feedback(code("bybyb")).unwrap();
    let second = convert_feedback("gawky", &code("bybyb"));
    assert_eq!(session.last_learned(), Some(&second));
    assert_eq!(session.constraint(), &first.merge(&second));
    assert_ne!(session.last_learned(), Some(session.constraint()));
}
