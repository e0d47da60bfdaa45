use trivia_board::data::{self, media};
use trivia_board::{LoadError, MediaKind, Question, SetupExport, SetupForm, parse_setup};

fn sample_setup() -> SetupExport {
    let mut form = SetupForm::new(3, 2, 3);
    form.set_team_name(0, "Owls");
    form.set_team_name(1, "Foxes");
    form.set_team_name(2, "Bears");
    form.set_category_name(0, "Rivers");
    form.set_category_name(1, "Sounds");
    for c in 0..2 {
        for q in 0..3 {
            form.set_question_text(c, q, &format!("Question {c}-{q}")).unwrap();
            form.set_answer_text(c, q, &format!("Answer {c}-{q}")).unwrap();
        }
    }
    form.set_points(0, 2, "1000").unwrap();
    form.attach_media(
        1,
        0,
        trivia_board::models::MediaSide::Question,
        media::media_from_bytes("audio/mpeg", b"ID3 fake mp3"),
    )
    .unwrap();
    form.build_setup()
}

#[test]
fn test_json_round_trip_is_lossless() {
    let setup = sample_setup();
    let json = data::setup_to_json(&setup).unwrap();
    let restored = parse_setup(&json).unwrap();

    assert_eq!(restored, setup);
    assert_eq!(
        restored.questions[&1][&0].question_media.as_ref().unwrap().kind,
        MediaKind::Audio
    );
}

#[test]
fn test_apply_then_build_reproduces_setup() {
    let setup = sample_setup();
    let mut form = SetupForm::default();
    form.apply_setup(setup.clone());
    assert_eq!(form.build_setup(), setup);
}

#[test]
fn test_reindex_after_delete() {
    let mut form = SetupForm::new(1, 1, 0);
    let n = 6;
    for i in 0..n {
        form.add_question(0).unwrap();
        form.set_question_text(0, i, &format!("record {i}")).unwrap();
    }
    let before: Vec<Question> = form.questions_in(0).to_vec();

    let deleted = 2;
    form.remove_question(0, deleted).unwrap();
    let after = form.questions_in(0);

    assert_eq!(after.len(), n - 1);
    for (index, slot) in after.iter().enumerate() {
        assert_eq!(slot.points, (index as i64 + 1) * 100);
        let old_index = if index < deleted { index } else { index + 1 };
        assert_eq!(slot.question, before[old_index].question);
    }
}

#[test]
fn test_invalid_json_is_rejected() {
    for text in ["", "not json", "[1, 2, 3]", "{\"categoriesCount\": 0}"] {
        assert!(
            matches!(parse_setup(text), Err(LoadError::Parse(_) | LoadError::Structure(_))),
            "accepted {text:?}"
        );
    }
}

#[test]
fn test_legacy_document_loads() {
    let json = r#"{
        "categoriesCount": 2,
        "teams": [{"name": "Equipo 1", "score": 0}],
        "categories": ["Cine", "Música"],
        "questions": {
            "0": {"0": {"question": "¿Quién?", "answer": "Yo", "points": 100,
                        "qMediaType": "image", "qMediaSrc": "data:image/png;base64,AAAA",
                        "aMediaType": null, "aMediaSrc": null}},
            "1": {}
        }
    }"#;
    let setup = parse_setup(json).unwrap();
    let question = &setup.questions[&0][&0];

    assert_eq!(question.question_media.as_ref().unwrap().kind, MediaKind::Image);
    assert!(question.answer_media.is_none());
    assert_eq!(setup.categories[1], "Música");
}
