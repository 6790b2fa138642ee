use clinical_assertion::{
    assertion::{
        subject::{self, SubjectFeature, SubjectFeatures},
        AssertionEngine,
    },
    config::Settings,
    document::{Document, Subject},
    MentionId,
};

fn at(text: &str, needle: &str) -> (usize, usize) {
    let begin = text.find(needle).expect("needle in text");
    (begin, begin + needle.len())
}

fn engine() -> AssertionEngine {
    AssertionEngine::new(&Settings::default()).unwrap()
}

/// "The <relative> with <disease> was seen." with the disease attached below the relative.
fn relative_with(relative: &str, disease: &str) -> Document {
    let text = format!("The {relative} with {disease} was seen.");
    let (begin, end) = at(&text, disease);
    Document::builder(text.as_str())
        .parsed_sentence(
            0,
            text.len(),
            &[
                ("The", "DT", 2, "det"),
                (relative, "NN", 6, "nsubjpass"),
                ("with", "IN", 2, "prep"),
                (disease, "NN", 3, "pobj"),
                ("was", "VBD", 6, "auxpass"),
                ("seen", "VBN", 0, "ROOT"),
                (".", ".", 6, "punct"),
            ],
        )
        .mention(begin, end)
        .build()
        .unwrap()
}

#[test]
fn family_term_on_head_path_is_family_member() {
    let doc = relative_with("mother", "diabetes");
    let engine = engine();
    let features = engine.extract_subject_features(&doc, MentionId(0)).unwrap();
    assert!(features.get(SubjectFeature::FamilyDeppath));
    assert!(features.get(SubjectFeature::FamilyToken));
    assert_eq!(
        engine.classify_subject(&doc, MentionId(0)).unwrap(),
        Subject::FamilyMember
    );
}

#[test]
fn step_relation_is_other() {
    let doc = relative_with("stepfather", "asthma");
    let features = engine().extract_subject_features(&doc, MentionId(0)).unwrap();
    assert!(features.get(SubjectFeature::OtherDeppath));
    assert!(!features.family_or());
    assert_eq!(subject::classify(&features), Subject::Other);
}

#[test]
fn donor_token_is_donor_other() {
    let text = "The donor had hepatitis.";
    let (begin, end) = at(text, "hepatitis");
    let doc = Document::builder(text)
        .sentence(0, text.len())
        .tokenize()
        .mention(begin, end)
        .build()
        .unwrap();
    let features = engine().extract_subject_features(&doc, MentionId(0)).unwrap();
    assert!(features.get(SubjectFeature::DonorToken));
    assert!(!features.get(SubjectFeature::DonorDepsrl));
    assert_eq!(subject::classify(&features), Subject::DonorOther);
}

#[test]
fn one_removed_family_token_sets_depsrl() {
    let text = "His mother had cancer.";
    let (begin, end) = at(text, "cancer");
    let doc = Document::builder(text)
        .parsed_sentence(
            0,
            text.len(),
            &[
                ("His", "PRP$", 2, "poss"),
                ("mother", "NN", 3, "nsubj"),
                ("had", "VBD", 0, "ROOT"),
                ("cancer", "NN", 3, "dobj"),
                (".", ".", 3, "punct"),
            ],
        )
        .mention(begin, end)
        .build()
        .unwrap();
    let features = engine().extract_subject_features(&doc, MentionId(0)).unwrap();
    assert!(features.get(SubjectFeature::FamilyDepsrl));
    assert!(!features.get(SubjectFeature::FamilyDeppath));
    assert_eq!(subject::classify(&features), Subject::FamilyMember);
}

#[test]
fn core_srl_argument_counts_for_donor() {
    let text = "Kidney from donor sibling was rejected.";
    let (begin, end) = at(text, "Kidney");
    let (arg_begin, arg_end) = at(text, "donor sibling");
    let doc = Document::builder(text)
        .sentence(0, text.len())
        .tokenize()
        .semantic_argument(arg_begin, arg_end, "A1")
        .mention(begin, end)
        .build()
        .unwrap();
    let features = engine().extract_subject_features(&doc, MentionId(0)).unwrap();
    assert!(features.get(SubjectFeature::DonorSrlarg));
    assert!(!features.get(SubjectFeature::FamilySrlarg));
}

#[test]
fn family_token_alone_does_not_vote() {
    let text = "Sister visited; patient has asthma.";
    let (begin, end) = at(text, "asthma");
    let doc = Document::builder(text)
        .sentence(0, text.len())
        .tokenize()
        .mention(begin, end)
        .build()
        .unwrap();
    let features = engine().extract_subject_features(&doc, MentionId(0)).unwrap();
    assert!(features.get(SubjectFeature::FamilyToken));
    assert_eq!(subject::classify(&features), Subject::Patient);
}

#[test]
fn no_cues_means_patient() {
    let doc = relative_with("patient", "asthma");
    assert_eq!(
        engine().classify_subject(&doc, MentionId(0)).unwrap(),
        Subject::Patient
    );
}

#[test]
fn missing_sentence_defaults_to_patient() {
    let doc = Document::builder("donor hepatitis")
        .tokenize()
        .mention(6, 15)
        .build()
        .unwrap();
    let features = engine().extract_subject_features(&doc, MentionId(0)).unwrap();
    assert_eq!(features, SubjectFeatures::default());
    assert_eq!(subject::classify(&features), Subject::Patient);
}

#[test]
fn donor_and_family_cues_combine() {
    let features = SubjectFeatures::default()
        .with(SubjectFeature::DonorToken, true)
        .with(SubjectFeature::FamilySrlarg, true);
    assert_eq!(subject::classify(&features), Subject::DonorFamilyMember);
}

#[test]
fn labeled_view_groups_summaries() {
    let features = SubjectFeatures::default().with(SubjectFeature::OtherDepsrl, true);
    let labeled = features.labeled();
    let names: Vec<&str> = labeled.keys().copied().collect();
    assert_eq!(names.len(), 15);
    assert_eq!(
        &names[..5],
        &["donor_token", "donor_srlarg", "donor_deppath", "donor_depsrl", "donor_or"]
    );
    assert_eq!(names[14], "other_or");
    assert!(labeled["other_or"]);
    assert!(!labeled["family_or"]);
}
