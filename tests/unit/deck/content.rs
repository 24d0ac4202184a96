use std::collections::BTreeSet;

use super::*;
use crate::slide::Element;

fn empty_assets(root: &std::path::Path) -> SlideAssets {
    SlideAssets {
        icons: AssetDir::new(root.join("icons")),
        diagrams: AssetDir::new(root.join("diagrams")),
        screenshots: AssetDir::new(root.join("shots")),
    }
}

#[test]
fn every_card_icon_has_a_job() {
    let theme = Theme::default();
    let jobs = icon_jobs(&theme).unwrap();
    let files: BTreeSet<_> = jobs.iter().map(|j| j.output_name.as_str()).collect();
    assert_eq!(files.len(), jobs.len(), "no file is produced twice");
    assert_eq!(jobs.len(), 20);

    let referenced = FEATURES
        .iter()
        .map(|f| f.icon.file)
        .chain(PERSONAS.iter().map(|p| p.icon.file))
        .chain(MOBILE_FEATURES.iter().map(|f| f.icon.file))
        .chain(WEB_FEATURES.iter().map(|f| f.icon.file))
        .chain(BENEFITS.iter().map(|b| b.icon.file));
    for file in referenced {
        assert!(files.contains(file), "{file}");
    }
    assert!(jobs.iter().all(|j| j.pixel_size == 64));
}

#[test]
fn icon_tints_follow_theme() {
    let theme = Theme {
        navy: Rgb::new(1, 2, 3),
        ..Theme::default()
    };
    let jobs = icon_jobs(&theme).unwrap();
    let qr = jobs.iter().find(|j| j.output_name == "qr_code.png").unwrap();
    assert_eq!(qr.tint, Rgb::new(1, 2, 3));
    let kakao = jobs.iter().find(|j| j.symbolic_id == "kakao").unwrap();
    assert_eq!(kakao.tint, Rgb::new(0xFE, 0xE5, 0x00));
}

#[test]
fn eighteen_slides_in_declared_order() {
    assert_eq!(SLIDES.len(), 18);
    assert_eq!(SLIDES[0].name, "title");
    assert_eq!(SLIDES[17].name, "closing");
    let names: BTreeSet<_> = SLIDES.iter().map(|s| s.name).collect();
    assert_eq!(names.len(), 18);
}

#[test]
fn missing_assets_degrade_to_placeholders() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = empty_assets(tmp.path());
    let theme = Theme::default();

    let slides: Vec<_> = SLIDES.iter().map(|s| (s.build)(&theme, &assets, LayoutKind::Wide16x9)).collect();
    let placeholders: usize = slides.iter().map(|s| s.placeholders).sum();
    // 19 card icons, 2 diagrams, 12 screenshots
    assert_eq!(placeholders, 33);
    assert!(slides.iter().all(|s| s.images().next().is_none()));
    assert_eq!(slides[0].placeholders, 0);
    assert_eq!(slides[8].placeholders, 3);
}

#[test]
fn screenshots_sit_on_a_three_column_grid() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("shots")).unwrap();
    for shot in &SCREEN_SETS[0].screens {
        image::RgbaImage::new(4, 4)
            .save(tmp.path().join("shots").join(shot.file))
            .unwrap();
    }
    let assets = empty_assets(tmp.path());
    let slide = screens_slide(&Theme::default(), &assets, LayoutKind::Wide16x9, &SCREEN_SETS[0]);
    assert_eq!(slide.placeholders, 0);

    let xs: Vec<f64> = slide.images().map(|i| i.bbox.x).collect();
    assert_eq!(xs.len(), 3);
    for (got, want) in xs.iter().zip([0.8, 3.8, 6.8]) {
        assert!((got - want).abs() < 1e-9);
    }
}

#[test]
fn tables_have_expected_shape() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = empty_assets(tmp.path());
    let theme = Theme::default();

    let problems = problems_slide(&theme, &assets, LayoutKind::Wide16x9);
    let table = problems.tables().next().unwrap();
    assert_eq!((table.row_count(), table.col_count()), (5, 3));
    table.validate().unwrap();
    assert_eq!(table.rows[0][2].fill, Some(theme.red));
    assert_eq!(table.rows[3][2].fill, Some(theme.orange));

    let roles = roles_slide(&theme, &assets, LayoutKind::Wide16x9);
    let table = roles.tables().next().unwrap();
    assert_eq!((table.row_count(), table.col_count()), (5, 3));
    assert_eq!(table.rows[1][2].text, "Mobile + Web");
}

#[test]
fn contents_has_dividers_between_items_only() {
    let tmp = tempfile::tempdir().unwrap();
    let slide = contents_slide(&Theme::default(), &empty_assets(tmp.path()), LayoutKind::Wide16x9);
    let dividers = slide
        .elements
        .iter()
        .filter(|e| matches!(e, Element::Shape(s) if (s.bbox.h - 0.01).abs() < 1e-9))
        .count();
    assert_eq!(dividers, TOC.len() - 1);
}

#[test]
fn kpi_bars_reflect_direction() {
    let tmp = tempfile::tempdir().unwrap();
    let theme = Theme::default();
    let slide = kpi_slide(&theme, &empty_assets(tmp.path()), LayoutKind::Wide16x9);
    let after_bars: Vec<_> = slide
        .elements
        .iter()
        .filter_map(|e| match e {
            Element::Shape(s) if (s.bbox.x - 3.2).abs() < 1e-9 && s.style.fill != Some(BAR_BEFORE) => {
                Some(s.bbox.w)
            }
            _ => None,
        })
        .collect();
    assert_eq!(after_bars, [1.0, 1.0, 3.5, 3.5]);
}

#[test]
fn schedule_labels_twelve_weeks() {
    let tmp = tempfile::tempdir().unwrap();
    let slide = schedule_slide(&Theme::default(), &empty_assets(tmp.path()), LayoutKind::Wide16x9);
    let weeks = slide
        .elements
        .iter()
        .filter(|e| matches!(e, Element::TextBox(t) if t.text.ends_with('주') && t.text.len() <= 5))
        .count();
    assert_eq!(weeks, 12);
}

#[test]
fn full_bleed_slides_fill_a_standard_canvas() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = empty_assets(tmp.path());
    let theme = Theme::default();

    for build in [title_slide as SlideFn, closing_slide] {
        let slide = build(&theme, &assets, LayoutKind::Standard4x3);
        let Element::Shape(background) = &slide.elements[0] else {
            panic!("expected background");
        };
        assert_eq!(background.bbox, BBox::new(0.0, 0.0, 10.0, 7.5));
        assert!(slide.elements.iter().all(|e| e.bbox().bottom() <= 7.5));
    }

    let wide = title_slide(&theme, &assets, LayoutKind::Wide16x9);
    assert_eq!(wide.elements[0].bbox(), BBox::new(0.0, 0.0, 10.0, 5.625));
}

#[test]
fn frame_spans_canvas_width() {
    let tmp = tempfile::tempdir().unwrap();
    let slide = roles_slide(
        &Theme::default(),
        &empty_assets(tmp.path()),
        LayoutKind::Standard4x3,
    );
    assert_eq!(slide.elements[0].bbox(), BBox::new(0.0, 0.0, 10.0, 0.75));
}
