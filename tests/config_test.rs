use fireworks_show3d::physic_engine::PhysicConfig;
use std::io::Write;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("particle_count = 120\nauto_launch = true\n");
    let cfg = PhysicConfig::from_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(cfg.particle_count, 120);
    assert!(cfg.auto_launch);
    assert_eq!(cfg.rocket_drag, 2.0);
    assert_eq!(cfg.gravity_y, -9.8);
    assert_eq!(cfg.max_dt, 0.05);
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(PhysicConfig::from_file("does/not/exist.toml").is_err());
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("particle_count = \"many\"\n");
    assert!(PhysicConfig::from_file(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = write_config("rocket_lifespan = 0.0\n");
    let err = PhysicConfig::from_file(file.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("lifespan"), "{err}");
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/physic.toml");
    let cfg = PhysicConfig::from_file(path).unwrap();
    let defaults = PhysicConfig {
        auto_launch: true,
        ..PhysicConfig::default()
    };
    assert_eq!(cfg, defaults);
}

#[test]
fn test_non_finite_values_are_rejected() {
    for content in [
        "rocket_lifespan = nan\nparticle_lifespan = nan\n",
        "launch_min_speed = nan\n",
        "target_height_max = inf\n",
    ] {
        let file = write_config(content);
        let result = PhysicConfig::from_file(file.path().to_str().unwrap());
        assert!(result.is_err(), "accepted: {content}");
    }
}

#[test]
fn test_max_dt_above_frame_bound_is_rejected() {
    let file = write_config("max_dt = 10.0\n");
    let err = PhysicConfig::from_file(file.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("max_dt"), "{err}");
}
