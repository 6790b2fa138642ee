use clinical_assertion::{
    assertion::AssertionEngine,
    config::Settings,
    context::{parse_scope_order, ContextScope},
    document::{Document, Polarity, Status, TextSpan},
    fsm::{IndicatorKind, IndicatorStrategy, StrategyKind, WindowToken},
    AssertionError, MentionId,
};

/// Sentence document tokenized on words and punctuation with one mention on `needle`.
fn sentence_with(text: &str, needle: &str) -> Document {
    let begin = text.find(needle).expect("needle in text");
    Document::builder(text)
        .sentence(0, text.len())
        .tokenize()
        .mention(begin, begin + needle.len())
        .build()
        .unwrap()
}

fn status(settings: &Settings, text: &str, needle: &str) -> Option<Status> {
    let doc = sentence_with(text, needle);
    AssertionEngine::new(settings)
        .unwrap()
        .classify_status(&doc, MentionId(0))
        .unwrap()
}

fn polarity(text: &str, needle: &str) -> Polarity {
    let doc = sentence_with(text, needle);
    AssertionEngine::new(&Settings::default())
        .unwrap()
        .classify_polarity(&doc, MentionId(0))
        .unwrap()
}

fn window(text: &str) -> Vec<WindowToken<'_>> {
    let mut offset = 0;
    text.split(' ')
        .map(|word| {
            let span = TextSpan::new(offset, offset + word.len()).unwrap();
            offset += word.len() + 1;
            WindowToken { span, text: word }
        })
        .collect()
}

#[test]
fn history_cue_sets_history_of() {
    let settings = Settings::default();
    assert_eq!(
        status(&settings, "No history of stroke.", "stroke"),
        Some(Status::HistoryOf)
    );
}

#[test]
fn family_history_beats_closer_history() {
    let settings = Settings::default();
    assert_eq!(
        status(
            &settings,
            "Family history of diabetes and history of coronary artery disease.",
            "coronary artery disease"
        ),
        Some(Status::FamilyHistoryOf)
    );
}

#[test]
fn probable_cue_sets_probable() {
    let settings = Settings::default();
    assert_eq!(
        status(
            &settings,
            "Findings suggest probable sleep-disordered breathing.",
            "sleep-disordered breathing"
        ),
        Some(Status::Probable)
    );
}

#[test]
fn closest_left_indicator_wins() {
    let settings = Settings::default();
    assert_eq!(
        status(&settings, "Possible history of asthma.", "asthma"),
        Some(Status::HistoryOf)
    );
}

#[test]
fn right_scope_is_consulted_after_left() {
    let settings = Settings::default();
    assert_eq!(
        status(&settings, "Asthma, probable.", "Asthma"),
        Some(Status::Probable)
    );

    let left_only = Settings {
        scope_order: vec![ContextScope::Left],
        ..Settings::default()
    };
    assert_eq!(status(&left_only, "Asthma, probable.", "Asthma"), None);
}

#[test]
fn closest_right_indicator_wins() {
    let settings = Settings::default();
    assert_eq!(
        status(&settings, "Asthma, possibly history.", "Asthma"),
        Some(Status::Probable)
    );
    assert_eq!(
        status(&settings, "Asthma, history possibly.", "Asthma"),
        Some(Status::HistoryOf)
    );
}

#[test]
fn first_scope_with_a_hit_decides() {
    let settings = Settings::default();
    assert_eq!(
        status(&settings, "Probable asthma, history noted.", "asthma"),
        Some(Status::Probable)
    );
}

#[test]
fn later_family_history_overrides_history() {
    let settings = Settings::default();
    assert_eq!(
        status(
            &settings,
            "History of asthma in family history records.",
            "asthma"
        ),
        Some(Status::FamilyHistoryOf)
    );
}

#[test]
fn boundary_token_closes_the_scope() {
    let settings = Settings::default();
    assert_eq!(
        status(&settings, "History of smoking but asthma now.", "asthma"),
        None
    );
}

#[test]
fn scope_size_limits_reach() {
    let text = "History of smoking, alcohol use, hypertension, obesity and diabetes.";
    assert_eq!(status(&Settings::default(), text, "diabetes"), None);

    let wide = Settings {
        left_scope: 11,
        ..Settings::default()
    };
    assert_eq!(status(&wide, text, "diabetes"), Some(Status::HistoryOf));
}

#[test]
fn middle_scope_reads_the_mention_itself() {
    let settings = Settings {
        scope_order: vec![ContextScope::Middle],
        ..Settings::default()
    };
    assert_eq!(
        status(&settings, "Patient reports h / o asthma.", "h / o asthma"),
        Some(Status::HistoryOf)
    );
}

#[test]
fn negation_cues_negate() {
    assert_eq!(polarity("Patient denies chest pain.", "chest pain"), Polarity::Negated);
    assert_eq!(polarity("No evidence of pneumonia.", "pneumonia"), Polarity::Negated);
    assert_eq!(polarity("Presents without fever.", "fever"), Polarity::Negated);
    assert_eq!(polarity("Patient did not have fever.", "fever"), Polarity::Negated);
    assert_eq!(polarity("Lungs negative for infiltrates.", "infiltrates"), Polarity::Negated);
    assert_eq!(polarity("Pneumonia was ruled out.", "Pneumonia"), Polarity::Negated);
}

#[test]
fn plain_mention_is_affirmed() {
    assert_eq!(polarity("Chest pain on exertion.", "Chest pain"), Polarity::Affirmed);
    assert_eq!(polarity("Fever, but no cough.", "Fever"), Polarity::Affirmed);
}

#[test]
fn split_history_abbreviation_spans_three_tokens() {
    let strategy = IndicatorStrategy::named("status").unwrap();
    let tokens = window("h / o");
    let found = strategy.detect(&tokens);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, IndicatorKind::HistoryOf);
    assert_eq!((found[0].first, found[0].last), (0, 2));
    assert_eq!(found[0].span, TextSpan::new(0, 5).unwrap());
}

#[test]
fn non_terminal_end_excludes_the_trailing_token() {
    let strategy = IndicatorStrategy::named("negation").unwrap();
    let tokens = window("he DID NOT have it");
    let found: Vec<_> = strategy
        .detect(&tokens)
        .into_iter()
        .map(|indicator| (indicator.first, indicator.last))
        .collect();
    assert_eq!(found, vec![(1, 2)]);
}

#[test]
fn strategies_are_looked_up_by_name() {
    let strategy = IndicatorStrategy::named(" Negation ").unwrap();
    assert_eq!(strategy.kind(), StrategyKind::Negation);
    assert!(strategy.is_boundary("However"));
    assert!(!strategy.is_boundary("fever"));

    let err = IndicatorStrategy::named("sentiment").unwrap_err();
    assert!(matches!(err, AssertionError::UnknownStrategy(name) if name == "sentiment"));

    let settings = Settings {
        status_strategy: "bogus".into(),
        ..Settings::default()
    };
    assert!(AssertionEngine::new(&settings).is_err());
}

#[test]
fn scope_order_parses_case_insensitively() {
    assert_eq!(
        parse_scope_order("left, Right,ALL").unwrap(),
        vec![ContextScope::Left, ContextScope::Right, ContextScope::All]
    );
    assert!(matches!(
        parse_scope_order("LEFT,UP"),
        Err(AssertionError::InvalidScope(_))
    ));
}
