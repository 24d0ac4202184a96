use super::*;

const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4" viewBox="0 0 4 4"><rect width="4" height="4" fill="#FF0000"/></svg>"##;

#[test]
fn parse_svg_ok_and_err() {
    parse_svg(RED_SQUARE.as_bytes()).unwrap();
    assert!(parse_svg(b"<svg").is_err());
}

#[test]
fn rasterize_scales_to_requested_size() {
    let tree = parse_svg(RED_SQUARE.as_bytes()).unwrap();
    let img = rasterize_tree(&tree, 16, 8).unwrap();
    assert_eq!(img.dimensions(), (16, 8));
    assert_eq!(img.get_pixel(8, 4).0, [255, 0, 0, 255]);
}

#[test]
fn rasterize_rejects_degenerate_sizes() {
    let tree = parse_svg(RED_SQUARE.as_bytes()).unwrap();
    assert!(rasterize_tree(&tree, 0, 8).unwrap_err().is_config());
    assert!(rasterize_tree(&tree, MAX_DIM + 1, 8).unwrap_err().is_config());
}

#[test]
fn demultiply_restores_straight_alpha() {
    let mut px = [64u8, 0, 128, 128];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [128, 0, 255, 128]);

    let mut clear = [0u8, 0, 0, 0];
    demultiply_rgba8_in_place(&mut clear);
    assert_eq!(clear, [0, 0, 0, 0]);
}

#[test]
fn write_png_round_trips_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/red.png");
    let asset = rasterize_svg_to_file(RED_SQUARE, 12, 12, &path).unwrap();
    assert_eq!((asset.width, asset.height), (12, 12));
    assert_eq!(RasterAsset::probe(&path).unwrap(), asset);
}
