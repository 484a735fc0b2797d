use super::*;

#[test]
fn tab_from_last_wraps_to_first() {
    assert_eq!(wrap_target(3, Some(2), false), Some(0));
}

#[test]
fn shift_tab_from_first_wraps_to_last() {
    assert_eq!(wrap_target(3, Some(0), true), Some(2));
}

#[test]
fn middle_elements_use_default_order() {
    assert_eq!(wrap_target(3, Some(1), false), None);
    assert_eq!(wrap_target(3, Some(1), true), None);
}

#[test]
fn focus_outside_trap_is_left_alone() {
    assert_eq!(wrap_target(3, None, false), None);
    assert_eq!(wrap_target(3, None, true), None);
}

#[test]
fn single_element_wraps_onto_itself() {
    assert_eq!(wrap_target(1, Some(0), false), Some(0));
    assert_eq!(wrap_target(1, Some(0), true), Some(0));
}

#[test]
fn empty_trap_never_moves_focus() {
    assert_eq!(wrap_target(0, None, false), None);
    assert_eq!(wrap_target(0, Some(0), true), None);
}
