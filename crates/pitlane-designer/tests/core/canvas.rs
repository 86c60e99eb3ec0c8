use pitlane_core::Point;
use pitlane_designer::{DrawingMode, RasterSurface, TrackDesigner};
use pitlane_settings::DesignerConfig;

const ACCENT: [u8; 4] = [0x10, 0xb9, 0x81, 0xff];

fn designer() -> TrackDesigner {
    TrackDesigner::with_raster(&DesignerConfig::default()).unwrap()
}

fn grid_only() -> Vec<u8> {
    RasterSurface::from_config(&DesignerConfig::default())
        .unwrap()
        .pixmap()
        .data()
        .to_vec()
}

fn raster(designer: &TrackDesigner) -> &RasterSurface {
    designer.surface().unwrap()
}

fn stroke(designer: &mut TrackDesigner, points: &[(f32, f32)]) {
    let mut iter = points.iter();
    if let Some(&(x, y)) = iter.next() {
        designer.pointer_down(Point::new(x, y));
    }
    for &(x, y) in iter {
        designer.pointer_move(Point::new(x, y));
    }
    designer.pointer_up();
}

#[test]
fn test_new_surface_shows_grid_only() {
    let designer = designer();
    assert_eq!(raster(&designer).pixmap().data(), &grid_only()[..]);
}

#[test]
fn test_draw_paints_accent() {
    let mut designer = designer();
    stroke(&mut designer, &[(60.0, 120.0), (340.0, 120.0)]);

    assert_eq!(raster(&designer).rgba_at(205, 120), Some(ACCENT));
    // 8px from the centre line is still inside a 20px stroke.
    assert_eq!(raster(&designer).rgba_at(205, 128), Some(ACCENT));
    assert!(!raster(&designer).is_painted(205, 140));
}

#[test]
fn test_clear_leaves_only_grid() {
    let mut designer = designer();
    stroke(&mut designer, &[(60.0, 120.0), (340.0, 120.0), (300.0, 400.0)]);
    designer.set_line_width(50);
    stroke(&mut designer, &[(700.0, 30.0), (10.0, 480.0)]);
    assert_ne!(raster(&designer).pixmap().data(), &grid_only()[..]);

    designer.clear();
    assert_eq!(raster(&designer).pixmap().data(), &grid_only()[..]);
}

#[test]
fn test_erase_cuts_within_radius_only() {
    let mut designer = designer();
    stroke(&mut designer, &[(60.0, 120.0), (340.0, 120.0)]);

    designer.set_tool(DrawingMode::Erase);
    assert_eq!(designer.line_width(), 20);
    designer.pointer_down(Point::new(205.0, 120.0));
    designer.pointer_move(Point::new(205.0, 120.0));
    designer.pointer_up();

    let surface = raster(&designer);
    assert_eq!(surface.rgba_at(205, 120).unwrap()[3], 0);
    assert_eq!(surface.rgba_at(210, 124).unwrap()[3], 0);
    assert_eq!(surface.rgba_at(180, 120), Some(ACCENT));
    assert_eq!(surface.rgba_at(300, 120), Some(ACCENT));
}

#[test]
fn test_erase_removes_grid_too() {
    let mut designer = designer();
    designer.set_tool(DrawingMode::Erase);
    designer.set_line_width(50);
    designer.pointer_down(Point::new(100.0, 100.0));
    designer.pointer_move(Point::new(100.0, 100.0));

    let surface = raster(&designer);
    for (x, y) in [(99, 100), (100, 99), (100, 110), (110, 100)] {
        assert!(!surface.is_painted(x, y), "({x}, {y}) still painted");
    }
}

#[test]
fn test_select_leaves_surface_untouched() {
    let mut designer = designer();
    designer.set_tool(DrawingMode::Select);
    stroke(&mut designer, &[(60.0, 120.0), (340.0, 120.0), (200.0, 300.0)]);
    assert_eq!(raster(&designer).pixmap().data(), &grid_only()[..]);
}

#[test]
fn test_leave_disconnects_next_stroke() {
    let mut designer = designer();
    designer.pointer_down(Point::new(60.0, 210.0));
    designer.pointer_move(Point::new(140.0, 210.0));
    designer.pointer_leave();
    assert!(!designer.is_stroking());

    designer.pointer_down(Point::new(60.0, 290.0));
    designer.pointer_move(Point::new(140.0, 290.0));
    designer.pointer_up();

    let surface = raster(&designer);
    assert!(surface.is_painted(120, 210));
    assert!(surface.is_painted(120, 290));
    // On the line a connected path would have drawn from (140, 210) to (60, 290).
    assert!(!surface.is_painted(120, 230));
}

#[test]
fn test_moves_after_up_do_not_draw() {
    let mut designer = designer();
    stroke(&mut designer, &[(60.0, 120.0), (140.0, 120.0)]);
    let before = raster(&designer).pixmap().data().to_vec();

    designer.pointer_move(Point::new(300.0, 330.0));
    assert_eq!(raster(&designer).pixmap().data(), &before[..]);
}

#[test]
fn test_stroke_ends_at_last_in_bounds_point() {
    let mut designer = designer();
    designer.pointer_down(Point::new(700.0, 220.0));
    designer.pointer_move(Point::new(780.0, 220.0));
    designer.pointer_move(Point::new(900.0, 220.0));

    assert!(!designer.is_stroking());
    let surface = raster(&designer);
    assert!(surface.is_painted(760, 220));
    // Round cap ends 10px past the last in-bounds point.
    assert!(!surface.is_painted(795, 220));
}
