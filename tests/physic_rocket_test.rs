use fireworks_show3d::physic_engine::{PhysicConfig, Rocket, RocketState};
use glam::Vec3;
use rand::{Rng, SeedableRng};

mod helpers;
use helpers::{test_config, vertical_rocket, DT};

// ==================================
// 1. Âge et intégration
// ==================================

#[test]
fn test_age_is_sum_of_deltas() {
    let cfg = test_config();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut rocket = vertical_rocket(60.0, 1.0e6);

    let mut total = 0.0f64;
    let mut previous_age = rocket.age();
    for _ in 0..50 {
        let dt = rng.random_range(0.001..=0.05);
        total += f64::from(dt);
        rocket.update(dt, &cfg);

        assert!(rocket.age() > previous_age, "age must increase");
        previous_age = rocket.age();
        assert!(
            (f64::from(rocket.age()) - total).abs() < 1e-4,
            "age {} != sum of deltas {}",
            rocket.age(),
            total
        );
    }
}

#[test]
fn test_rocket_decelerates_but_keeps_climbing() {
    let cfg = test_config();
    let mut rocket = vertical_rocket(60.0, 1.0e6);

    let mut last_y = rocket.pos.y;
    let mut last_vy = rocket.vel.y;
    for _ in 0..100 {
        rocket.update(DT, &cfg);
        assert!(rocket.pos.y > last_y);
        assert!(rocket.vel.y < last_vy);
        last_y = rocket.pos.y;
        last_vy = rocket.vel.y;
    }
}

// ==================================
// 2. Transition vers l'explosion
// ==================================

#[test]
fn test_reachable_target_bursts_at_target_height() {
    let cfg = test_config();
    let mut rocket = vertical_rocket(70.0, 100.0);

    let mut bursts = Vec::new();
    for _ in 0..200 {
        if let RocketState::Burst(pos) = rocket.update(DT, &cfg) {
            bursts.push(pos);
        }
    }

    assert_eq!(bursts.len(), 1, "rocket must burst exactly once");
    let y = bursts[0].y;
    // Dépassement d'au plus un pas d'intégration
    assert!(
        (100.0..=100.0 + 70.0 * DT + 1e-3).contains(&y),
        "burst height {y}"
    );
    assert!(rocket.age() <= cfg.rocket_lifespan);
}

#[test]
fn test_unreachable_target_bursts_once_after_lifespan() {
    let cfg = test_config();
    let mut rocket = vertical_rocket(5.0, 1.0e6);

    let mut burst_ages = Vec::new();
    let mut burst_pos = None;
    for _ in 0..500 {
        match rocket.update(DT, &cfg) {
            RocketState::Burst(pos) => {
                burst_ages.push(rocket.age());
                burst_pos = Some(pos);
            }
            RocketState::Ascending | RocketState::Spent => {}
        }
    }

    assert_eq!(burst_ages.len(), 1, "rocket must burst exactly once");
    let age = burst_ages[0];
    assert!(age > cfg.rocket_lifespan, "burst age {age}");
    assert!(age <= cfg.rocket_lifespan + DT + 1e-4, "burst age {age}");
    // Explose à sa position courante, loin sous la cible
    assert_eq!(burst_pos, Some(rocket.pos));
    assert!(rocket.pos.y < 100.0);
    assert!(rocket.exploded());
}

#[test]
fn test_large_delta_clamped_by_config() {
    let cfg = test_config();
    let mut rocket = vertical_rocket(60.0, 1.0e6);
    rocket.update(cfg.sanitize_dt(2.0), &cfg);
    assert_eq!(rocket.age(), cfg.max_dt);
}

// ==================================
// 3. Lancement aléatoire
// ==================================

#[test]
fn test_launch_respects_config_ranges() {
    let cfg = PhysicConfig {
        launch_min_speed: 50.0,
        launch_max_speed: 60.0,
        launch_lateral_speed: 3.0,
        target_height_min: 90.0,
        target_height_max: 110.0,
        ..test_config()
    };
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let ground = Vec3::new(12.0, 2.0, -8.0);

    for _ in 0..200 {
        let rocket = Rocket::launch(ground, &cfg, &mut rng);
        assert_eq!(rocket.pos, ground);
        assert_eq!(rocket.age(), 0.0);
        assert!(!rocket.exploded());
        assert!((50.0..=60.0).contains(&rocket.vel.y), "vy {}", rocket.vel.y);
        assert!(rocket.vel.x.abs() <= 3.0 && rocket.vel.z.abs() <= 3.0);
        // Hauteur cible relative au point de lancement
        assert!(
            (92.0..=112.0).contains(&rocket.target_height()),
            "target {}",
            rocket.target_height()
        );
    }
}

#[test]
fn test_every_default_launch_eventually_bursts() {
    let cfg = test_config();
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);

    for _ in 0..50 {
        let mut rocket = Rocket::launch(Vec3::ZERO, &cfg, &mut rng);
        let frames_budget = (cfg.rocket_lifespan / DT) as usize + 2;
        let bursts = (0..frames_budget)
            .filter(|_| matches!(rocket.update(DT, &cfg), RocketState::Burst(_)))
            .count();
        assert_eq!(bursts, 1);
    }
}
