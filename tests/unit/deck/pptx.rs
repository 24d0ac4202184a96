use std::io::Read as _;

use super::*;
use crate::{
    deck::LayoutKind,
    slide::{Shadow, ShapeStyle, SlideBuilder},
};

fn read_part(path: &Path, name: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut out = String::new();
    entry.read_to_string(&mut out).unwrap();
    out
}

fn sample_deck(image: &Path) -> Deck {
    let theme = Theme::default();
    let mut deck = Deck::new("T & C", "Author", "Subject", LayoutKind::Wide16x9);

    let mut b = SlideBuilder::new(&theme);
    b.frame("Header <1>", "Action");
    b.shape(
        ShapeKind::RoundRect { radius: 0.1 },
        BBox::new(1.0, 2.0, 0.8, 0.5),
        ShapeStyle::filled(theme.red).with_shadow(Shadow::down(4.0, 1.0, 0.08)),
    );
    b.text(
        BBox::new(1.0, 3.0, 2.0, 1.0),
        "line one\nline two",
        TextStyle::new(9.0, theme.gray).center(),
    );
    b.image(BBox::new(5.0, 2.0, 1.0, 1.0), image);
    deck.push(b.finish());

    let mut b = SlideBuilder::new(&theme);
    b.table(
        BBox::new(0.6, 1.8, 8.8, 2.5),
        &[3.5, 3.5, 1.8],
        &["a", "b", "c"],
        vec![vec!["1".into(), "2".into(), Cell::emphasized("3", theme.red, Rgb::WHITE)]],
        11.0,
    );
    b.image(BBox::new(5.0, 2.0, 1.0, 1.0), image);
    deck.push(b.finish());
    deck
}

#[test]
fn writes_ordered_slides_and_metadata() {
    let tmp = tempfile::tempdir().unwrap();
    let png = tmp.path().join("icon.png");
    image::RgbaImage::new(2, 2).save(&png).unwrap();
    let out = tmp.path().join("nested/deck.pptx");

    write_pptx(&sample_deck(&png), &out).unwrap();

    let pres = read_part(&out, "ppt/presentation.xml");
    assert_eq!(pres.matches("<p:sldId ").count(), 2);
    assert!(pres.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
    assert!(pres.contains(r#"<p:sldSz cx="9144000" cy="5143500"/>"#));

    let core = read_part(&out, "docProps/core.xml");
    assert!(core.contains("<dc:title>T &amp; C</dc:title>"));
    assert!(core.contains("<dc:creator>Author</dc:creator>"));

    let slide1 = read_part(&out, "ppt/slides/slide1.xml");
    assert!(slide1.contains("Header &lt;1&gt;"));
    assert!(slide1.contains(r#"prst="roundRect""#));
    assert!(slide1.contains("<a:outerShdw"));
    assert_eq!(slide1.matches("<a:t>line ").count(), 2);
    assert!(slide1.contains(r#"<a:pPr algn="ctr"/>"#));
    assert!(slide1.contains(r#"r:embed="rId2""#));

    let slide2 = read_part(&out, "ppt/slides/slide2.xml");
    assert_eq!(slide2.matches("<a:tr ").count(), 2);
    assert_eq!(slide2.matches("<a:gridCol ").count(), 3);
    assert!(slide2.contains(r#"<a:srgbClr val="C51F2A"/>"#));

    let file = std::fs::File::open(&out).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let media = archive
        .file_names()
        .filter(|n| n.starts_with("ppt/media/"))
        .count();
    assert_eq!(media, 1, "shared picture is embedded once");
}

#[test]
fn equal_decks_give_equal_bytes() {
    let tmp = tempfile::tempdir().unwrap();
    let png = tmp.path().join("icon.png");
    image::RgbaImage::new(2, 2).save(&png).unwrap();
    let a = tmp.path().join("a.pptx");
    let b = tmp.path().join("b.pptx");
    write_pptx(&sample_deck(&png), &a).unwrap();
    write_pptx(&sample_deck(&png), &b).unwrap();
    assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
}

#[test]
fn ragged_table_fails_and_keeps_previous_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("deck.pptx");
    std::fs::write(&out, b"previous").unwrap();

    let theme = Theme::default();
    let mut b = SlideBuilder::new(&theme);
    b.table(
        BBox::new(0.0, 0.0, 4.0, 1.0),
        &[1.0, 1.0],
        &["a", "b"],
        vec![vec!["only one".into()]],
        10.0,
    );
    let mut deck = Deck::new("t", "a", "s", LayoutKind::Standard4x3);
    deck.push(b.finish());

    let err = write_pptx(&deck, &out).unwrap_err();
    assert!(matches!(err, DeckError::Layout(_)), "{err}");
    assert_eq!(std::fs::read(&out).unwrap(), b"previous");
}

#[test]
fn missing_image_file_is_not_a_config_error() {
    let tmp = tempfile::tempdir().unwrap();
    let mut deck = Deck::new("t", "a", "s", LayoutKind::Wide16x9);
    let theme = Theme::default();
    let mut b = SlideBuilder::new(&theme);
    b.image(BBox::new(0.0, 0.0, 1.0, 1.0), tmp.path().join("gone.png"));
    deck.push(b.finish());

    let err = write_pptx(&deck, &tmp.path().join("x.pptx")).unwrap_err();
    assert!(!err.is_config());
    assert!(err.to_string().contains("read image"));
}

#[test]
fn round_rect_adjust_scales_with_short_side() {
    let mut xml = String::new();
    geometry_xml(
        &mut xml,
        ShapeKind::RoundRect { radius: 0.1 },
        BBox::new(0.0, 0.0, 0.8, 0.5),
    )
    .unwrap();
    assert!(xml.contains(r#"fmla="val 20000""#), "{xml}");
}

#[test]
fn escape_drops_characters_xml_cannot_carry() {
    assert_eq!(escape_xml("a\u{0}b\u{7}c\u{1F}d"), "abcd");
    assert_eq!(escape_xml("tab\there\r"), "tab\there\r");
    assert_eq!(escape_xml(r#"<"x" & 'y'>"#), "&lt;&quot;x&quot; &amp; &apos;y&apos;&gt;");
}

#[test]
fn control_characters_never_reach_the_slide_part() {
    let tmp = tempfile::tempdir().unwrap();
    let theme = Theme::default();
    let mut b = SlideBuilder::new(&theme);
    b.text(
        BBox::new(0.5, 0.5, 4.0, 1.0),
        "bell\u{7}ring",
        TextStyle::new(12.0, theme.ink),
    );
    let mut deck = Deck::new("t\u{1}", "a", "s", LayoutKind::Wide16x9);
    deck.push(b.finish());
    let out = tmp.path().join("deck.pptx");

    write_pptx(&deck, &out).unwrap();

    assert!(read_part(&out, "ppt/slides/slide1.xml").contains("<a:t>bellring</a:t>"));
    assert!(read_part(&out, "docProps/core.xml").contains("<dc:title>t</dc:title>"));
}
