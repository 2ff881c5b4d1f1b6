use std::fs;

use lpor_pdf::surface::RecordingSurface;
use lpor_pdf::{generate, render_page, AppError, FormData, FormKind};

fn load(kind: FormKind, fixture: &str) -> FormData {
    let json = fs::read_to_string(format!("tests/fixtures/{}", fixture))
        .expect("Failed to read fixture");
    FormData::from_json(kind, &json).expect("Fixture should parse")
}

#[test]
fn test_output_is_a_pdf() {
    let form = load(FormKind::Lpor14, "lpor14_full.json");
    let pdf = generate(&form).expect("Failed to generate");

    assert!(pdf.as_bytes().starts_with(b"%PDF-"));
    assert!(pdf.len() > 1000, "PDF is too small, likely empty or corrupt");
}

#[test]
fn test_generation_is_deterministic() {
    for (kind, fixture) in [
        (FormKind::Lpor14, "lpor14_full.json"),
        (FormKind::LporF, "lpor_f_two_children.json"),
    ] {
        let form = load(kind, fixture);
        let first = generate(&form).expect("Failed to generate");
        let second = generate(&form).expect("Failed to generate");
        assert!(first == second, "{} output differs between runs", fixture);
    }
}

#[test]
fn test_blank_forms_render() {
    for kind in [FormKind::Lpor14, FormKind::LporF] {
        let form = FormData::from_json(kind, "{}").expect("Empty object should parse");
        let pdf = generate(&form).expect("Blank form should render");
        assert!(pdf.len() > 1000);

        let mut surface = RecordingSurface::default();
        render_page(&mut surface, &form).expect("Blank form should paint");
        assert_eq!(surface.checked_count(), 0, "Blank form should have no marks");
    }
}

#[test]
fn test_variants_produce_different_documents() {
    let order = generate(&FormData::from_json(FormKind::Lpor14, "{}").unwrap()).unwrap();
    let petition = generate(&FormData::from_json(FormKind::LporF, "{}").unwrap()).unwrap();
    assert!(order != petition);
}

#[test]
fn test_extra_children_are_dropped_not_fatal() {
    let form = load(FormKind::LporF, "lpor_f_eight_children.json");

    let mut surface = RecordingSurface::default();
    render_page(&mut surface, &form).expect("Overflowing list should still paint");
    assert!(surface.has_text("Child 6"));
    assert!(!surface.has_text("Child 7"));
    assert!(!surface.has_text("Child 8"));
}

#[test]
fn test_two_children_print_their_details() {
    let form = load(FormKind::LporF, "lpor_f_two_children.json");

    let mut surface = RecordingSurface::default();
    render_page(&mut surface, &form).expect("Failed to paint");
    assert!(surface.has_text("Lucas Thibodeaux"));
    assert!(surface.has_text("05/02/2016"));
    assert!(surface.has_text("Daughter"));
    assert!(!surface.has_text("c1"), "Row keys are never printed");
}

#[test]
fn test_dissolve_marks_prior_order() {
    let form = load(FormKind::Lpor14, "lpor14_full.json");

    let mut surface = RecordingSurface::default();
    render_page(&mut surface, &form).expect("Failed to paint");
    assert!(surface.has_text("03/01/2024"));
    assert!(surface.has_text("01/03/2027"));
    assert!(surface.has_text("Derek James Thibodeaux"));
}

#[test]
fn test_malformed_date_is_reported() {
    let form = load(FormKind::Lpor14, "lpor14_bad_date.json");
    match generate(&form) {
        Err(AppError::DateError(value)) => assert_eq!(value, "03/12/1985"),
        other => panic!("Expected a date error, got {:?}", other),
    }
}

#[test]
fn test_unprintable_name_is_reported() {
    let form = FormData::from_json(FormKind::Lpor14, r#"{"petitioner":{"firstName":"Nguyễn"}}"#)
        .expect("Form should parse");
    match generate(&form) {
        Err(AppError::InputError(message)) => {
            assert!(message.contains("Nguyễn"), "Unexpected message: {}", message)
        }
        other => panic!("Expected an input error, got {:?}", other.map(|pdf| pdf.len())),
    }
}
