use pitlane_core::Point;
use pitlane_designer::{DrawingMode, TemplateShape, TrackDesigner};
use pitlane_settings::DesignerConfig;

fn designer() -> TrackDesigner {
    TrackDesigner::with_raster(&DesignerConfig::default()).unwrap()
}

fn data(designer: &TrackDesigner) -> Vec<u8> {
    designer.surface().unwrap().pixmap().data().to_vec()
}

fn only(shape: TemplateShape) -> Vec<u8> {
    let mut designer = designer();
    designer.load_template(shape);
    data(&designer)
}

#[test]
fn test_templates_are_not_additive() {
    let mut designer = designer();
    designer.load_template(TemplateShape::Oval);
    designer.load_template(TemplateShape::Figure8);
    assert_eq!(data(&designer), only(TemplateShape::Figure8));
}

#[test]
fn test_template_replaces_freehand_drawing() {
    let mut designer = designer();
    designer.pointer_down(Point::new(20.0, 20.0));
    designer.pointer_move(Point::new(780.0, 480.0));
    designer.pointer_up();

    designer.load_template(TemplateShape::Monaco);
    assert_eq!(data(&designer), only(TemplateShape::Monaco));
}

#[test]
fn test_oval_geometry() {
    let designer = {
        let mut d = designer();
        d.load_template(TemplateShape::Oval);
        d
    };
    let surface = designer.surface().unwrap();
    // Centre (400, 250), radii 200 x 120.
    assert!(surface.is_painted(601, 255));
    assert!(surface.is_painted(404, 131));
    assert!(!surface.is_painted(420, 240));
}

#[test]
fn test_figure8_loops_meet_at_centre() {
    let mut designer = designer();
    designer.load_template(TemplateShape::Figure8);
    let surface = designer.surface().unwrap();
    assert!(surface.is_painted(405, 255));
    assert!(surface.is_painted(241, 255));
    assert!(surface.is_painted(559, 255));
    assert!(!surface.is_painted(320, 260));
}

#[test]
fn test_street_circuit_corners() {
    let mut designer = designer();
    designer.load_template(TemplateShape::Monaco);
    let surface = designer.surface().unwrap();
    for (x, y) in [(250, 170), (550, 170), (550, 250), (500, 300), (300, 300)] {
        assert!(surface.is_painted(x, y), "corner ({x}, {y})");
    }
    assert!(!surface.is_painted(420, 240));
}

#[test]
fn test_template_ignores_active_tool_and_uses_width() {
    let mut erase = designer();
    erase.set_tool(DrawingMode::Erase);
    erase.load_template(TemplateShape::Oval);
    assert_eq!(data(&erase), only(TemplateShape::Oval));

    let mut wide = designer();
    wide.set_line_width(50);
    wide.load_template(TemplateShape::Oval);
    let surface = wide.surface().unwrap();
    // 22px outside the oval edge is covered only by a 50px stroke.
    assert!(surface.is_painted(622, 255));
    assert!(!erase.surface().unwrap().is_painted(622, 255));
}
