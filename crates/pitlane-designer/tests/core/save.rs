use pitlane_core::{MessageLevel, Point, TrackKind};
use pitlane_designer::export::pixmap_to_image;
use pitlane_designer::{decode_png_data_url, TemplateShape, TrackDesigner};
use pitlane_settings::DesignerConfig;

fn designer() -> TrackDesigner {
    TrackDesigner::with_raster(&DesignerConfig::default()).unwrap()
}

#[test]
fn test_blank_names_create_nothing() {
    let mut designer = designer();
    designer.load_template(TemplateShape::Oval);
    let before = designer.surface().unwrap().pixmap().data().to_vec();
    let mut rx = designer.messages().subscribe();

    for name in ["", "   "] {
        let err = designer.save(name).unwrap_err();
        assert!(err.is_validation_error());

        let message = rx.try_recv().unwrap();
        assert_eq!(message.level, MessageLevel::Warning);
        assert_eq!(message.text, "Please enter a track name before saving.");
    }
    assert_eq!(designer.surface().unwrap().pixmap().data(), &before[..]);
}

#[test]
fn test_save_builds_custom_record() {
    let mut designer = designer();
    designer.set_line_width(35);
    designer.load_template(TemplateShape::Monaco);
    let mut rx = designer.messages().subscribe();

    let record = designer.save("Monza Clone").unwrap();
    assert_eq!(record.name(), "Monza Clone");
    assert_eq!(record.kind(), TrackKind::Custom);
    assert_eq!(record.width(), 35);
    assert!(record.id().starts_with("custom-"));

    let message = rx.try_recv().unwrap();
    assert_eq!(message.level, MessageLevel::Success);
    assert_eq!(message.text, "Track \"Monza Clone\" saved successfully!");
    assert_eq!(
        message.description.as_deref(),
        Some("Your custom track is ready for racing line optimization.")
    );
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_saved_image_matches_surface() {
    let mut designer = designer();
    designer.pointer_down(Point::new(100.0, 100.0));
    designer.pointer_move(Point::new(500.0, 320.0));
    designer.pointer_up();

    let record = designer.save("Snapshot").unwrap();
    let decoded = decode_png_data_url(record.image_data()).unwrap();
    let expected = pixmap_to_image(designer.surface().unwrap().pixmap());
    assert_eq!(decoded.dimensions(), (800, 500));
    assert_eq!(decoded, expected);
}

#[test]
fn test_consecutive_saves_are_distinct() {
    let mut designer = designer();
    designer.load_template(TemplateShape::Oval);
    let first = designer.save("Oval One").unwrap();
    designer.load_template(TemplateShape::Figure8);
    let second = designer.save("Figure Two").unwrap();

    assert_ne!(first.id(), second.id());
    assert_ne!(first.image_data(), second.image_data());
    assert_eq!(second.name(), "Figure Two");
}

#[test]
fn test_clear_and_template_notices() {
    let mut designer = designer();
    let mut rx = designer.messages().subscribe();

    designer.clear();
    designer.load_template(TemplateShape::Figure8);

    assert_eq!(
        rx.try_recv().unwrap().text,
        "Canvas cleared! Start designing your track."
    );
    assert_eq!(rx.try_recv().unwrap().text, "Figure8 template loaded!");
}
