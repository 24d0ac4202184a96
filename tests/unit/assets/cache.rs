use super::*;

fn icon(id: &str, hex: &str, name: &str) -> AssetJob {
    AssetJob::Icon(IconDescriptor::new(id, hex, 32, name).unwrap())
}

fn pool() -> rayon::ThreadPool {
    rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap()
}

#[test]
fn asset_names_reject_escapes() {
    validate_asset_name("qr_code.png").unwrap();
    for bad in ["", ".", "..", "a/b.png", "..\\x.png"] {
        assert!(validate_asset_name(bad).unwrap_err().is_config(), "{bad}");
    }
}

#[test]
fn asset_dir_lookup_tracks_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = AssetDir::new(tmp.path().join("icons"));
    assert!(!dir.contains("a.png"));
    dir.ensure().unwrap();
    dir.ensure().unwrap();
    std::fs::write(dir.path_for("a.png").unwrap(), b"x").unwrap();
    assert_eq!(dir.lookup("a.png"), Some(dir.root().join("a.png")));
    assert_eq!(dir.lookup("../a.png"), None);
}

#[test]
fn identical_jobs_are_deduplicated() {
    let jobs = vec![
        icon("sync", "C51F2A", "sync.png"),
        icon("sync", "c51f2a", "sync.png"),
        icon("edit", "002452", "edit.png"),
    ];
    let (unique, skipped) = dedupe_jobs(&jobs).unwrap();
    assert_eq!(unique.len(), 2);
    assert_eq!(skipped, 1);
}

#[test]
fn conflicting_names_are_config_errors() {
    let jobs = vec![
        icon("sync", "C51F2A", "x.png"),
        icon("edit", "C51F2A", "x.png"),
    ];
    let err = dedupe_jobs(&jobs).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("duplicate asset name 'x.png'"));
}

#[test]
fn generate_assets_writes_icons_and_diagrams() {
    let tmp = tempfile::tempdir().unwrap();
    let icons = AssetDir::new(tmp.path().join("icons"));
    let diagrams = AssetDir::new(tmp.path().join("diagrams"));
    let theme = Theme::default();

    let jobs = vec![
        icon("qrCode", "002452", "qr_code.png"),
        icon("kakao", "FEE500", "kakao.png"),
        icon("qrCode", "002452", "qr_code.png"),
        AssetJob::Diagram(DiagramJob {
            name: "process_flow".to_string(),
            spec: crate::diagram::presets::process_flow(&theme),
            write_svg: true,
        }),
    ];

    let out = generate_assets(
        &jobs,
        AssetTargets {
            icons: &icons,
            diagrams: &diagrams,
            theme: &theme,
        },
        &pool(),
    )
    .unwrap();

    assert_eq!(out.icons, 2);
    assert_eq!(out.diagrams, 1);
    assert_eq!(out.deduplicated, 1);
    assert_eq!(out.assets.len(), 3);
    assert!(icons.contains("qr_code.png"));
    assert!(icons.contains("kakao.png"));
    assert!(diagrams.contains("process_flow.png"));
    assert!(diagrams.contains("process_flow.svg"));
    assert_eq!((out.assets[2].width, out.assets[2].height), (900, 300));
}
