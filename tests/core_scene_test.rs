use tui_cube::core::scene::{edge_face_count, CUBE_EDGES, EDGE_COLOR, FACE_COLORS};
use tui_cube::core::{
    render_cube, silhouette_edges, transform_vertices, visible_faces, FrameBuffer, Lighting,
    Orientation, Projector,
};

fn faces_for(o: Orientation) -> tui_cube::core::VisibleFaces {
    visible_faces(&transform_vertices(o), &Lighting::at(0.0))
}

#[test]
fn edge_between_visible_and_culled_face_is_outlined() {
    // Turned half a radian about y: the +z and -x faces face the camera.
    let faces = faces_for(Orientation::new(0.0, 0.5, 0.0));
    let mut visible: Vec<usize> = faces.iter().map(|f| f.index).collect();
    visible.sort_unstable();
    assert_eq!(visible, vec![1, 2]);

    let outline: Vec<[usize; 2]> = silhouette_edges(&faces).collect();
    // +z/-y edge: one side visible, the other culled.
    assert!(outline.contains(&[4, 5]));
    // Edge shared by +z and -x: both visible, so interior.
    assert_eq!(edge_face_count(&faces, [7, 4]), 2);
    assert!(!outline.contains(&[7, 4]));
    // Edges of culled faces only.
    assert!(!outline.contains(&[1, 2]));
    assert_eq!(outline.len(), 6);
}

#[test]
fn three_visible_faces_give_hexagon_outline() {
    let faces = faces_for(Orientation::initial());
    assert_eq!(faces.len(), 3);
    assert_eq!(silhouette_edges(&faces).count(), 6);
}

#[test]
fn at_most_three_faces_are_ever_visible() {
    for i in 0..200 {
        let t = i as f64 * 0.137;
        let o = Orientation::new(0.7 + 0.6 * t, 0.9 + 0.8 * t, 0.3 + 0.4 * t);
        let faces = faces_for(o);
        assert!((1..=3).contains(&faces.len()), "t={t}");
        let outline = silhouette_edges(&faces).count();
        let expected = if faces.len() == 1 { 4 } else { 6 };
        assert_eq!(outline, expected, "t={t}");
        for edge in CUBE_EDGES {
            assert!(edge_face_count(&faces, edge) <= 2);
        }
    }
}

#[test]
fn rendered_cube_shows_face_colors_and_white_outline() {
    let mut fb = FrameBuffer::try_new(80, 24).unwrap();
    fb.clear();
    let proj = Projector::for_framebuffer(&fb, 0.6);
    let stats = render_cube(&mut fb, proj, Orientation::initial(), 0.0);

    assert_eq!(stats.visible_faces, 3);
    assert_eq!(stats.silhouette_edges, 6);
    assert!(stats.fill_samples > 0);
    assert!(stats.line_samples > 0);

    let mut saw_edge = false;
    let mut saw_face = false;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.cell(x, y).unwrap();
            for c in [cell.top, cell.bottom].into_iter().flatten() {
                if c == EDGE_COLOR {
                    saw_edge = true;
                } else {
                    saw_face = true;
                    // Shaded colors never exceed their base channel values.
                    assert!(FACE_COLORS
                        .iter()
                        .any(|base| c.r <= base.r && c.g <= base.g && c.b <= base.b));
                }
            }
        }
    }
    assert!(saw_edge);
    assert!(saw_face);

    // Corners are far outside the cube at this zoom.
    assert_eq!(fb.cell(0, 0).unwrap().top, None);
    assert_eq!(fb.cell(79, 23).unwrap().bottom, None);
}

#[test]
fn cube_is_centered_on_screen() {
    let mut fb = FrameBuffer::try_new(80, 24).unwrap();
    fb.clear();
    let proj = Projector::for_framebuffer(&fb, 0.6);
    render_cube(&mut fb, proj, Orientation::initial(), 0.0);
    let center = fb.cell(40, 12).unwrap();
    assert!(center.top.is_some());
    assert!(center.bottom.is_some());
}
