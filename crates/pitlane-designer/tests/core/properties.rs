use pitlane_core::Point;
use pitlane_designer::{RasterSurface, TemplateShape, TrackDesigner};
use pitlane_settings::DesignerConfig;
use proptest::prelude::*;

fn point() -> impl Strategy<Value = (f32, f32)> {
    (0.0f32..800.0, 0.0f32..500.0)
}

fn stroke_batches() -> impl Strategy<Value = Vec<(u32, Vec<(f32, f32)>)>> {
    prop::collection::vec((10u32..=50, prop::collection::vec(point(), 1..6)), 0..4)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn clear_after_any_strokes_leaves_grid(strokes in stroke_batches()) {
        let config = DesignerConfig::default();
        let grid = RasterSurface::from_config(&config).unwrap().pixmap().data().to_vec();
        let mut designer = TrackDesigner::with_raster(&config).unwrap();

        for (width, points) in &strokes {
            designer.set_line_width(*width);
            let (x, y) = points[0];
            designer.pointer_down(Point::new(x, y));
            for &(x, y) in &points[1..] {
                designer.pointer_move(Point::new(x, y));
            }
            designer.pointer_up();
        }
        designer.clear();

        prop_assert_eq!(designer.surface().unwrap().pixmap().data(), &grid[..]);
    }

    #[test]
    fn blank_names_never_save(name in "[ \t]{0,8}") {
        let mut designer = TrackDesigner::with_raster(&DesignerConfig::default()).unwrap();
        designer.load_template(TemplateShape::Oval);
        let before = designer.surface().unwrap().pixmap().data().to_vec();

        prop_assert!(designer.save(&name).is_err());
        prop_assert_eq!(designer.surface().unwrap().pixmap().data(), &before[..]);
    }
}
