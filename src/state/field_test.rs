use super::*;

#[test]
fn blur_marks_field() {
    assert_eq!(FieldMark::Unchecked.on_blur(true), FieldMark::Valid);
    assert_eq!(FieldMark::Unchecked.on_blur(false), FieldMark::Invalid);
    assert_eq!(FieldMark::Valid.on_blur(false), FieldMark::Invalid);
}

#[test]
fn input_rechecks_only_invalid_fields() {
    assert_eq!(FieldMark::Unchecked.on_input(false), FieldMark::Unchecked);
    assert_eq!(FieldMark::Valid.on_input(false), FieldMark::Valid);
    assert_eq!(FieldMark::Invalid.on_input(true), FieldMark::Valid);
    assert_eq!(FieldMark::Invalid.on_input(false), FieldMark::Invalid);
}

#[test]
fn classes_are_mutually_exclusive() {
    assert_eq!(FieldMark::Unchecked.classes(), None);
    assert_eq!(FieldMark::Valid.classes(), Some(("valid", "invalid")));
    assert_eq!(FieldMark::Invalid.classes(), Some(("invalid", "valid")));
}
