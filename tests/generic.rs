use clinical_assertion::{
    assertion::{
        generic::{self, GenericFeature, GenericFeatures},
        AssertionEngine,
    },
    config::Settings,
    document::{Document, MentionKind},
    MentionId,
};

fn at(text: &str, needle: &str) -> (usize, usize) {
    let begin = text.find(needle).expect("needle in text");
    (begin, begin + needle.len())
}

fn engine() -> AssertionEngine {
    AssertionEngine::new(&Settings::default()).expect("default strategies resolve")
}

const DISCUSSION: &str = "We discussed the donor kidney transplant.";

fn discussion_doc() -> Document {
    let (begin, end) = at(DISCUSSION, "kidney transplant");
    Document::builder(DISCUSSION)
        .parsed_sentence(
            0,
            DISCUSSION.len(),
            &[
                ("We", "PRP", 2, "nsubj"),
                ("discussed", "VBD", 0, "ROOT"),
                ("the", "DT", 6, "det"),
                ("donor", "NN", 6, "compound"),
                ("kidney", "NN", 6, "compound"),
                ("transplant", "NN", 2, "dobj"),
                (".", ".", 2, "punct"),
            ],
        )
        .mention(begin, end)
        .build()
        .unwrap()
}

const CKD: &str = "Chronic kidney disease was noted.";

fn ckd_builder() -> clinical_assertion::document::DocumentBuilder {
    Document::builder(CKD).parsed_sentence(
        0,
        CKD.len(),
        &[
            ("Chronic", "JJ", 3, "amod"),
            ("kidney", "NN", 3, "compound"),
            ("disease", "NN", 5, "nsubjpass"),
            ("was", "VBD", 5, "auxpass"),
            ("noted", "VBN", 0, "ROOT"),
            (".", ".", 5, "punct"),
        ],
    )
}

const FEVER: &str = "Fever was reported.";

fn isolated_doc() -> Document {
    Document::builder(FEVER)
        .parsed_sentence(
            0,
            FEVER.len(),
            &[
                ("Fever", "NN", 3, "nsubjpass"),
                ("was", "VBD", 3, "auxpass"),
                ("reported", "VBN", 0, "ROOT"),
                (".", ".", 3, "punct"),
            ],
        )
        .mention(0, 5)
        .build()
        .unwrap()
}

#[test]
fn discussion_verb_on_head_path_marks_generic() {
    let doc = discussion_doc();
    let engine = engine();
    let features = engine.extract_generic_features(&doc, MentionId(0)).unwrap();
    assert!(features.get(GenericFeature::DiscussionDeppath));
    assert!(!features.get(GenericFeature::PostcoordNmod));
    assert!(engine.classify_generic(&doc, MentionId(0)).unwrap());
}

#[test]
fn modifier_head_marks_generic() {
    let text = "The chest pain resolved.";
    let doc = Document::builder(text)
        .parsed_sentence(
            0,
            text.len(),
            &[
                ("The", "DT", 3, "det"),
                ("chest", "NN", 3, "nmod"),
                ("pain", "NN", 4, "nsubj"),
                ("resolved", "VBD", 0, "ROOT"),
                (".", ".", 4, "punct"),
            ],
        )
        .mention(4, 9)
        .build()
        .unwrap();
    let features = generic::extract_features(&doc, MentionId(0), 5).unwrap();
    assert!(features.get(GenericFeature::PostcoordNmod));
    assert!(generic::classify(&features));
}

#[test]
fn mention_inside_entity_is_subsumed() {
    let (outer_begin, outer_end) = at(CKD, "Chronic kidney disease");
    let (begin, end) = at(CKD, "kidney");
    let doc = ckd_builder()
        .mention(outer_begin, outer_end)
        .mention(begin, end)
        .build()
        .unwrap();
    let engine = engine();

    let inner = engine.extract_generic_features(&doc, MentionId(1)).unwrap();
    assert!(inner.get(GenericFeature::OtherDeppath));
    assert!(!inner.get(GenericFeature::PostcoordNmod));
    assert!(!inner.get(GenericFeature::DiscussionDeppath));
    assert!(generic::classify(&inner));

    let outer = engine.extract_generic_features(&doc, MentionId(0)).unwrap();
    assert!(!outer.get(GenericFeature::OtherDeppath));
    assert!(!engine.classify_generic(&doc, MentionId(0)).unwrap());
}

#[test]
fn only_entities_and_events_subsume() {
    let (outer_begin, outer_end) = at(CKD, "Chronic kidney disease");
    let (begin, end) = at(CKD, "kidney");
    let doc = ckd_builder()
        .mention_of_kind(outer_begin, outer_end, MentionKind::Other)
        .mention(begin, end)
        .build()
        .unwrap();
    let features = engine().extract_generic_features(&doc, MentionId(1)).unwrap();
    assert!(!features.get(GenericFeature::OtherDeppath));
}

#[test]
fn chunk_subsumption_is_reported_but_does_not_vote() {
    let (chunk_begin, chunk_end) = at(CKD, "Chronic kidney disease");
    let (begin, end) = at(CKD, "kidney");
    let doc = ckd_builder()
        .chunk(chunk_begin, chunk_end)
        .mention(begin, end)
        .build()
        .unwrap();
    let engine = engine();
    let features = engine.extract_generic_features(&doc, MentionId(0)).unwrap();
    assert!(features.get(GenericFeature::OtherToken));
    assert!(!features.get(GenericFeature::OtherDeppath));
    assert!(!engine.classify_generic(&doc, MentionId(0)).unwrap());
}

#[test]
fn empty_window_disables_subsumption() {
    let (outer_begin, outer_end) = at(CKD, "Chronic kidney disease");
    let (begin, end) = at(CKD, "kidney");
    let doc = ckd_builder()
        .mention(outer_begin, outer_end)
        .mention(begin, end)
        .build()
        .unwrap();
    let features = generic::extract_features(&doc, MentionId(1), 0).unwrap();
    assert_eq!(features, GenericFeatures::default());
}

/// "seen cue cue ... pain": the whole text is one mention enclosing "pain", with
/// `between` single-word mentions ordered between the two.
fn enclosed_behind(between: usize) -> Document {
    let mut text = String::from("seen");
    let mut cues = Vec::new();
    for _ in 0..between {
        text.push_str(" cue");
        cues.push((text.len() - 3, text.len()));
    }
    text.push_str(" pain");
    let mut builder = Document::builder(text.as_str())
        .sentence(0, text.len())
        .tokenize()
        .mention(text.len() - 4, text.len())
        .mention(0, text.len());
    for (begin, end) in cues {
        builder = builder.mention(begin, end);
    }
    builder.build().unwrap()
}

#[test]
fn enclosing_mention_must_fall_inside_the_window() {
    let subsumed = |between: usize, window: usize| {
        generic::extract_features(&enclosed_behind(between), MentionId(0), window)
            .unwrap()
            .get(GenericFeature::OtherDeppath)
    };
    assert!(subsumed(4, 5));
    assert!(!subsumed(5, 5));
    assert!(subsumed(3, 4));
    assert!(!subsumed(4, 4));
}

#[test]
fn sentence_without_parse_keeps_head_features_false() {
    let text = "Discussed chest pain.";
    let (begin, end) = at(text, "chest pain");
    let doc = Document::builder(text)
        .sentence(0, text.len())
        .tokenize()
        .mention(begin, end)
        .build()
        .unwrap();
    let engine = engine();
    let features = engine.extract_generic_features(&doc, MentionId(0)).unwrap();
    assert!(!features.get(GenericFeature::PostcoordNmod));
    assert!(!features.get(GenericFeature::DiscussionDeppath));
    assert!(!engine.classify_generic(&doc, MentionId(0)).unwrap());
}

#[test]
fn isolated_mention_is_not_generic() {
    let doc = isolated_doc();
    let engine = engine();
    let features = engine.extract_generic_features(&doc, MentionId(0)).unwrap();
    insta::assert_json_snapshot!(features.labeled(), @r###"
    {
      "postcoord_nmod": false,
      "discussion_deppath": false,
      "other_token": false,
      "other_deppath": false
    }
    "###);
    assert!(!engine.classify_generic(&doc, MentionId(0)).unwrap());
}

#[test]
fn classification_is_idempotent() {
    let doc = discussion_doc();
    let engine = engine();
    let first = engine.classify_generic(&doc, MentionId(0)).unwrap();
    let second = engine.classify_generic(&doc, MentionId(0)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mention_outside_any_sentence_keeps_defaults() {
    let doc = Document::builder("kidney disease")
        .tokenize()
        .mention(0, 14)
        .mention(0, 6)
        .build()
        .unwrap();
    let features = engine().extract_generic_features(&doc, MentionId(1)).unwrap();
    assert_eq!(features, GenericFeatures::default());
}

#[test]
fn rule_counts_modifier_and_mention_votes_only() {
    let base = GenericFeatures::default();
    assert!(!generic::classify(&base));
    assert!(!generic::classify(&base.with(GenericFeature::OtherToken, true)));
    assert!(generic::classify(&base.with(GenericFeature::OtherDeppath, true)));
    assert!(generic::classify(&base.with(GenericFeature::DiscussionDeppath, true)));
    assert!(generic::classify(
        &base
            .with(GenericFeature::PostcoordNmod, true)
            .with(GenericFeature::OtherDeppath, true)
    ));
}

#[test]
fn unknown_mention_is_an_error() {
    let doc = isolated_doc();
    assert!(engine().classify_generic(&doc, MentionId(3)).is_err());
}
