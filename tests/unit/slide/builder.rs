use super::*;
use crate::slide::element::{Align, Anchor};

#[test]
fn frame_adds_header_and_action_bar() {
    let theme = Theme::default();
    let mut b = SlideBuilder::new(&theme);
    b.frame("1. 프로젝트 개요", "one sentence");
    let slide = b.finish();
    assert_eq!(slide.len(), 4);

    let Element::Shape(bar) = &slide.elements[0] else {
        panic!("expected header bar");
    };
    assert_eq!(bar.bbox, BBox::new(0.0, 0.0, 10.0, 0.75));
    assert_eq!(bar.style.fill, Some(theme.navy));

    let Element::TextBox(title) = &slide.elements[1] else {
        panic!("expected title");
    };
    assert!(title.style.bold);
    assert_eq!(title.style.size_pt, 20.0);

    let Element::Shape(action) = &slide.elements[2] else {
        panic!("expected action bar");
    };
    assert_eq!(action.bbox, BBox::new(0.0, 0.75, 10.0, 0.55));
    assert_eq!(action.style.fill, Some(theme.light_gray));
}

#[test]
fn missing_image_becomes_placeholder_at_same_box() {
    let theme = Theme::default();
    let mut b = SlideBuilder::new(&theme);
    let bbox = BBox::new(0.8, 1.8, 2.4, 2.8);
    let found = b.image_or_placeholder(bbox, Path::new("/nope/MOB-LOG-001.png"));
    assert!(!found);

    let slide = b.finish();
    assert_eq!(slide.placeholders, 1);
    assert_eq!(slide.images().count(), 0);
    assert_eq!(slide.len(), 2);

    let Element::Shape(rect) = &slide.elements[0] else {
        panic!("expected placeholder shape");
    };
    assert_eq!(rect.bbox, bbox);
    assert_eq!(rect.kind, ShapeKind::Rect);

    let Element::TextBox(label) = &slide.elements[1] else {
        panic!("expected placeholder label");
    };
    assert_eq!(label.text, "Image");
    assert_eq!(label.bbox, bbox);
    assert_eq!(label.style.align, Align::Center);
    assert_eq!(label.style.anchor, Anchor::Middle);
}

#[test]
fn existing_image_is_placed() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("shot.png");
    image::RgbaImage::new(2, 2).save(&path).unwrap();

    let theme = Theme::default();
    let mut b = SlideBuilder::new(&theme);
    assert!(b.image_or_placeholder(BBox::new(0.0, 0.0, 1.0, 1.0), &path));
    let slide = b.finish();
    assert_eq!(slide.placeholders, 0);
    assert_eq!(slide.images().next().unwrap().path, path);
}

#[test]
fn table_header_uses_inverse_colors() {
    let theme = Theme::default();
    let mut b = SlideBuilder::new(&theme);
    b.table(
        BBox::new(0.6, 1.8, 8.8, 2.5),
        &[3.5, 3.5, 1.8],
        &["문제점", "영향", "심각도"],
        vec![vec![
            "a".into(),
            "b".into(),
            Cell::emphasized("높음", theme.red, Rgb::WHITE),
        ]],
        11.0,
    );
    let slide = b.finish();
    let table = slide.tables().next().unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.col_count(), 3);
    assert!(table.header.iter().all(|c| c.fill == Some(theme.navy)));
    assert_eq!(table.rows[0][2].fill, Some(theme.red));

    let widths = table.col_widths();
    assert!((widths[0] - 3.5).abs() < 1e-9);
    assert!((widths[2] - 1.8).abs() < 1e-9);
}
