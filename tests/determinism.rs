use soft_physics::{
    update_physics, BodyType, Entity, PhysicsWorld, SimulationConfig,
    math::AxisNormalization,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const BOX_EDGES: [(usize, usize); 6] = [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3)];

/// A floor and a pile of randomly placed, overlapping boxes
fn random_scene(seed: u64, config: &SimulationConfig) -> Vec<Entity> {
    let mut rng = StdRng::seed_from_u64(seed);

    let floor = Entity::with_config(
        &[[-20.0, 10.0], [20.0, 10.0], [20.0, 12.0], [-20.0, 12.0]],
        &BOX_EDGES,
        config,
    )
    .unwrap()
    .with_body_type(BodyType::Static);

    let mut entities = vec![floor];
    for _ in 0..12 {
        let x: f64 = rng.gen_range(-5.0..5.0);
        let y: f64 = rng.gen_range(-5.0..8.0);
        let size: f64 = rng.gen_range(0.5..2.0);
        let entity = Entity::with_config(
            &[[x, y], [x + size, y], [x + size, y + size], [x, y + size]],
            &BOX_EDGES,
            config,
        )
        .unwrap()
        .with_mass(rng.gen_range(0.5..4.0))
        .unwrap();
        entities.push(entity);
    }
    entities
}

fn snapshot(entities: &[Entity]) -> Vec<(u64, u64)> {
    entities
        .iter()
        .flat_map(|e| e.points())
        .map(|p| (p.location.x.to_bits(), p.location.y.to_bits()))
        .collect()
}

fn simulate(seed: u64, config: &SimulationConfig, ticks: usize) -> Vec<Entity> {
    let mut entities = random_scene(seed, config);
    for _ in 0..ticks {
        update_physics(&mut entities, config);
    }
    entities
}

fn run(seed: u64, config: &SimulationConfig, ticks: usize) -> Vec<(u64, u64)> {
    snapshot(&simulate(seed, config, ticks))
}

#[test]
fn test_same_scene_same_result() {
    let config = SimulationConfig::default()
        .with_gravity(0.05)
        .with_viscosity(0.99)
        .with_normalization(AxisNormalization::Euclidean);

    for seed in [1, 7, 42] {
        assert_eq!(run(seed, &config, 100), run(seed, &config, 100));
    }
}

#[test]
fn test_component_sum_is_deterministic() {
    let config = SimulationConfig::default().with_gravity(0.05);

    let first = simulate(3, &config, 20);
    assert!(first.iter().all(Entity::is_finite));
    assert_eq!(snapshot(&first), run(3, &config, 20));
}

#[test]
fn test_default_config_scenes_stay_finite() {
    let config = SimulationConfig::default().with_gravity(0.05);

    for seed in [1, 3, 7, 42] {
        let mut entities = random_scene(seed, &config);
        for tick in 0..100 {
            update_physics(&mut entities, &config);
            assert!(
                entities.iter().all(Entity::is_finite),
                "seed {} left the finite range at tick {}",
                seed,
                tick
            );
        }
    }
}

#[test]
fn test_world_matches_free_function() {
    let config = SimulationConfig::default()
        .with_gravity(0.05)
        .with_normalization(AxisNormalization::Euclidean);

    let mut world = PhysicsWorld::with_config(config.clone());
    for entity in random_scene(9, &config) {
        world.add_entity(entity);
    }
    for _ in 0..50 {
        world.step().unwrap();
    }

    assert_eq!(snapshot(world.entities()), run(9, &config, 50));
}

#[test]
fn test_static_floor_never_moves() {
    let config = SimulationConfig::default()
        .with_gravity(0.05)
        .with_normalization(AxisNormalization::Euclidean);
    let mut entities = random_scene(5, &config);
    let floor = snapshot(&entities[..1]);

    for _ in 0..100 {
        update_physics(&mut entities, &config);
    }

    assert_eq!(snapshot(&entities[..1]), floor);
}
