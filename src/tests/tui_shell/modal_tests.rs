use super::*;

fn area() -> Rect {
    Rect {
        x: 4,
        y: 2,
        width: 10,
        height: 3,
    }
}

#[test]
fn cursor_lands_inside_the_text_area() {
    assert_eq!(cursor_position(area(), 0, 0), Some((4, 2)));
    assert_eq!(cursor_position(area(), 2, 3), Some((7, 4)));
}

#[test]
fn long_lines_pin_the_cursor_to_the_last_column() {
    assert_eq!(cursor_position(area(), 1, 70_000), Some((13, 3)));
    assert_eq!(cursor_position(area(), 1, usize::MAX), Some((13, 3)));
}

#[test]
fn rows_past_the_area_hide_the_cursor() {
    assert_eq!(cursor_position(area(), 3, 0), None);
    // 65_536 would wrap to row 0 with a plain cast.
    assert_eq!(cursor_position(area(), 65_536, 0), None);
    assert_eq!(cursor_position(area(), usize::MAX, 0), None);
}

#[test]
fn form_modal_carries_text_and_toggle() {
    let modal = Modal::form(ModalForm::OpeningLine {
        enabled: true,
        text: "Hi".to_string(),
    });
    assert_eq!(modal.form_kind(), Some(ModalKind::OpeningLine));
    assert_eq!(modal.input.buf, "Hi");
    assert!(matches!(
        modal.state,
        ModalState::Form { enabled: true, .. }
    ));
    assert_eq!(Modal::prompt(ModalState::UploadPath).form_kind(), None);
}
