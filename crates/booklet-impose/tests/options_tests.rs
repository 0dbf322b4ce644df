use booklet_impose::*;

#[test]
fn defaults_match_the_fixed_sheet_geometry() {
    let options = BookletOptions::default();
    assert_eq!(options.leading_blanks, 0);
    assert_eq!(options.sheet_width_mm, 297.0);
    assert_eq!(options.sheet_height_mm, 210.0);
    assert_eq!(options.image_margin_mm, 4.2);
    assert_eq!(options.text_margin_mm, 7.0);
    assert_eq!(options.number_size_pt, 12.0);
    assert!(options.validate().is_ok());
}

#[test]
fn validate_rejects_degenerate_sheets() {
    let mut options = BookletOptions::default();
    options.sheet_width_mm = 0.0;
    assert!(matches!(options.validate(), Err(BookletError::Config(_))));

    let mut options = BookletOptions::default();
    options.sheet_height_mm = -10.0;
    assert!(matches!(options.validate(), Err(BookletError::Config(_))));
}

#[test]
fn validate_rejects_margins_without_drawable_area() {
    let mut options = BookletOptions::default();
    // half sheet is 148.5mm wide; a 75mm margin consumes it
    options.image_margin_mm = 75.0;
    assert!(matches!(options.validate(), Err(BookletError::Config(_))));

    let mut options = BookletOptions::default();
    options.text_margin_mm = -1.0;
    assert!(matches!(options.validate(), Err(BookletError::Config(_))));
}

#[test]
fn validate_rejects_zero_font_size() {
    let mut options = BookletOptions::default();
    options.number_size_pt = 0.0;
    assert!(matches!(options.validate(), Err(BookletError::Config(_))));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn options_round_trip_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("booklet.json");

    let mut options = BookletOptions::default();
    options.leading_blanks = 3;
    options.image_margin_mm = 5.5;
    options.save(&path).await.unwrap();

    let loaded = BookletOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn load_reports_malformed_json_as_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("booklet.json");
    tokio::fs::write(&path, b"{not json").await.unwrap();

    assert!(matches!(
        BookletOptions::load(&path).await,
        Err(BookletError::Config(_))
    ));
}
