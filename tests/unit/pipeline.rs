use super::*;

#[test]
fn zero_threads_is_rejected_before_any_work() {
    let tmp = tempfile::tempdir().unwrap();
    let config = BuildConfig {
        output: tmp.path().join("deck.pptx"),
        icon_dir: tmp.path().join("i"),
        diagram_dir: tmp.path().join("d"),
        threads: Some(0),
        ..BuildConfig::default()
    };
    assert!(build(&config).unwrap_err().is_config());
    assert!(!config.icon_dir.exists());
    build_thread_pool(Some(1)).unwrap();
}

#[test]
fn asset_jobs_cover_icons_and_both_diagrams() {
    let config = BuildConfig {
        diagram_scale: 2.0,
        write_svg_sidecars: true,
        ..BuildConfig::default()
    };
    let jobs = asset_jobs(&config).unwrap();
    let icons = jobs.iter().filter(|j| matches!(j, AssetJob::Icon(_))).count();
    assert_eq!(icons, 20);

    let diagrams: Vec<_> = jobs
        .iter()
        .filter_map(|j| match j {
            AssetJob::Diagram(d) => Some(d),
            AssetJob::Icon(_) => None,
        })
        .collect();
    assert_eq!(diagrams.len(), 2);
    assert_eq!(diagrams[0].name, ARCHITECTURE_DIAGRAM);
    assert_eq!(diagrams[1].name, PROCESS_FLOW_DIAGRAM);
    assert!(diagrams.iter().all(|d| d.write_svg && d.spec.scale == 2.0));
}

#[test]
fn parallel_slides_keep_declared_order() {
    let tmp = tempfile::tempdir().unwrap();
    let config = BuildConfig {
        icon_dir: tmp.path().join("i"),
        diagram_dir: tmp.path().join("d"),
        screenshot_dir: tmp.path().join("s"),
        ..BuildConfig::default()
    };
    let assets = slide_assets(&config);
    let theme = Theme::default();

    let serial = build_slides(&SLIDES, &theme, &assets, LayoutKind::Wide16x9, &build_thread_pool(Some(1)).unwrap());
    let parallel = build_slides(&SLIDES, &theme, &assets, LayoutKind::Wide16x9, &build_thread_pool(Some(4)).unwrap());
    assert_eq!(serial.len(), 18);
    assert_eq!(serial, parallel);
}
