use super::*;

#[test]
fn progress_style_sets_width_percent() {
    assert_eq!(progress_style(30.0), ("width", "30%".to_owned()));
    assert_eq!(progress_style(100.0), ("width", "100%".to_owned()));
    assert_eq!(progress_style(150.0), ("width", "150%".to_owned()));
}

#[test]
fn light_theme_adds_light_mode_class() {
    assert_eq!(ClassEdit::for_theme(true), ClassEdit::Add("light-mode"));
}

#[test]
fn dark_theme_removes_light_mode_class() {
    assert_eq!(ClassEdit::for_theme(false), ClassEdit::Remove("light-mode"));
}
