use super::*;

#[test]
fn every_known_id_resolves() {
    let ids: Vec<_> = known_icon_ids().collect();
    assert!(ids.contains(&"qrCode"));
    assert!(ids.contains(&"kakao"));
    for id in ids {
        lookup_glyph(id).unwrap();
    }
}

#[test]
fn unknown_id_is_config_error() {
    let err = IconDescriptor::new("qrcode", "002452", 64, "x.png").unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("unknown icon id 'qrcode'"));
}

#[test]
fn size_bounds_are_config_errors() {
    for size in [0, -5, i64::from(MAX_DIM) + 1] {
        let err = IconDescriptor::new("qrCode", "002452", size, "x.png").unwrap_err();
        assert!(err.is_config(), "{size}");
    }
}

#[test]
fn bad_color_and_name_are_config_errors() {
    assert!(
        IconDescriptor::new("qrCode", "00245", 64, "x.png")
            .unwrap_err()
            .is_config()
    );
    assert!(
        IconDescriptor::new("qrCode", "002452", 64, "../x.png")
            .unwrap_err()
            .is_config()
    );
}

#[test]
fn role_names_follow_role_color_convention() {
    let d = IconDescriptor::for_role("person", Rgb::new(0x19, 0x76, 0xD2), 64, "person").unwrap();
    assert_eq!(d.output_name, "person_1976d2.png");
}

#[test]
fn key_ignores_output_name() {
    let a = IconDescriptor::new("sync", "C51F2A", 64, "a.png").unwrap();
    let b = IconDescriptor::new("sync", "#c51f2a", 64, "b.png").unwrap();
    assert_eq!(a.key(), b.key());
}

#[test]
fn svg_document_carries_tint_and_size() {
    let d = IconDescriptor::new("dashboard", "7B1FA2", 48, "d.png").unwrap();
    let svg = d.svg_document().to_string();
    assert!(svg.contains("#7B1FA2"));
    assert!(svg.contains("width=\"48\""));
    assert!(svg.contains("viewBox=\"0 0 24 24\""));

    let k = IconDescriptor::new("kakao", "FEE500", 64, "kakao.png").unwrap();
    let svg = k.svg_document().to_string();
    assert!(svg.contains("#FEE500"));
    assert!(svg.contains("#3C1E1E"));
}

#[test]
fn rasterize_icon_writes_square_png() {
    let dir = tempfile::tempdir().unwrap();
    let d = IconDescriptor::new("qrCode", "002452", 64, "qr_code.png").unwrap();
    let asset = rasterize_icon(&d, &dir.path().join("icons")).unwrap();
    assert_eq!((asset.width, asset.height), (64, 64));

    let img = image::open(&asset.path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (64, 64));
    assert!(img.pixels().any(|p| p.0[3] > 0));
}
