// Host-side checks on the web package manifest.
// Randomness comes from ink-core; the web package only needs getrandom's js backend.

const MANIFEST: &str = include_str!("../Cargo.toml");

/// Lines of the root `[dependencies]` table.
fn root_dependencies() -> Vec<&'static str> {
    MANIFEST
        .lines()
        .skip_while(|l| l.trim() != "[dependencies]")
        .skip(1)
        .take_while(|l| !l.trim_start().starts_with('['))
        .collect()
}

fn dependency_names() -> Vec<&'static str> {
    root_dependencies()
        .into_iter()
        .filter(|l| !l.starts_with(' ') && l.contains('='))
        .filter_map(|l| l.split('=').next())
        .map(str::trim)
        .collect()
}

#[test]
fn web_package_leaves_rand_to_the_core() {
    let names = dependency_names();
    assert!(names.contains(&"ink-core"));
    assert!(names.contains(&"getrandom"));
    assert!(!names.contains(&"rand"), "deps: {names:?}");
}

#[test]
fn web_sys_features_are_all_in_use() {
    let features: Vec<&str> = MANIFEST
        .lines()
        .skip_while(|l| !l.starts_with("web-sys"))
        .skip(1)
        .take_while(|l| !l.starts_with(']'))
        .map(|l| l.trim().trim_end_matches(',').trim_matches('"'))
        .collect();
    assert!(features.contains(&"CanvasRenderingContext2d"));
    assert!(features.contains(&"PointerEvent"));
    assert!(!features.contains(&"DomTokenList"));
}
