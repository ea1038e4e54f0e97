use tui_cube::core::{Cell, FrameBuffer, Half};
use tui_cube::types::Rgb;

const RED: Rgb = Rgb::new(255, 0, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);

#[test]
fn top_depth_test_is_strict() {
    let mut fb = FrameBuffer::try_new(2, 2).unwrap();
    fb.put(1, 1, Half::Top, RED, -5.0);

    // Equal depth must not overwrite.
    fb.put(1, 1, Half::Top, GREEN, -5.0);
    assert_eq!(fb.cell(1, 1).unwrap().top, Some(RED));

    // Farther must not overwrite.
    fb.put(1, 1, Half::Top, GREEN, -5.001);
    assert_eq!(fb.cell(1, 1).unwrap().top, Some(RED));

    // Closer does.
    fb.put(1, 1, Half::Top, GREEN, -4.999);
    assert_eq!(fb.cell(1, 1).unwrap().top, Some(GREEN));
    assert_eq!(fb.depth(1, 1, Half::Top), Some(-4.999));
}

#[test]
fn bottom_depth_test_keeps_its_bias() {
    let mut fb = FrameBuffer::try_new(1, 1).unwrap();
    fb.put(0, 0, Half::Bottom, RED, -5.0);
    fb.put(0, 0, Half::Bottom, GREEN, -5.0);
    assert_eq!(fb.cell(0, 0).unwrap().bottom, Some(GREEN));

    fb.put(0, 0, Half::Bottom, RED, -5.02);
    assert_eq!(fb.cell(0, 0).unwrap().bottom, Some(GREEN));
}

#[test]
fn halves_are_independent() {
    let mut fb = FrameBuffer::try_new(1, 1).unwrap();
    fb.put(0, 0, Half::Top, RED, -5.0);
    assert_eq!(
        fb.cell(0, 0),
        Some(Cell {
            top: Some(RED),
            bottom: None
        })
    );
    fb.put(0, 0, Half::Bottom, GREEN, -50.0);
    assert_eq!(
        fb.cell(0, 0),
        Some(Cell {
            top: Some(RED),
            bottom: Some(GREEN)
        })
    );
}

#[test]
fn clear_empties_every_cell() {
    let mut fb = FrameBuffer::try_new(5, 4).unwrap();
    for y in 0..8 {
        for x in 0..5 {
            fb.put_subpixel(x, y, RED, -5.0);
        }
    }
    assert_eq!(fb.covered_subpixels(), 40);
    fb.clear();
    assert_eq!(fb.covered_subpixels(), 0);
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(fb.cell(x, y), Some(Cell::default()));
        }
    }
}

#[test]
fn max_size_buffer_allocates() {
    let fb = FrameBuffer::try_new(400, 300).unwrap();
    assert_eq!(fb.width(), 400);
    assert_eq!(fb.subpixel_height(), 600);
}
