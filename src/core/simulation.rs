use crate::bodies::Entity;
use crate::collision::{collides_with, resolve_collision, CollisionInfo};
use crate::core::SimulationConfig;

/// Advances every entity by one tick.
///
/// Entities are integrated and relaxed once each, then `config.iterations` times
/// every entity is relaxed and tested against every later entity in the slice,
/// resolving any overlap on the spot. Entity order is part of the result: earlier
/// entities take part in more corrections per tick than later ones.
pub fn update_physics(entities: &mut [Entity], config: &SimulationConfig) {
    update_physics_with(entities, config, |_, _, _| {});
}

/// Same as [`update_physics`], calling `on_contact(i, j, info)` after each resolved
/// overlap between `entities[i]` and `entities[j]` (`i < j`)
pub fn update_physics_with<F>(entities: &mut [Entity], config: &SimulationConfig, mut on_contact: F)
where
    F: FnMut(usize, usize, &CollisionInfo),
{
    let integrator = config.integrator.integrator();
    let normalization = config.normalization;

    for entity in entities.iter_mut() {
        integrator.integrate(entity);
        entity.update_edges_with(normalization);
    }

    let mut contacts = 0usize;

    for _ in 0..config.iterations {
        for i in 0..entities.len() {
            entities[i].update_edges_with(normalization);
            entities[i].calculate_center();

            for j in (i + 1)..entities.len() {
                let (head, tail) = entities.split_at_mut(j);
                let first = &mut head[i];
                let second = &mut tail[0];

                second.update_edges_with(normalization);
                second.calculate_center();

                if let Some(info) = collides_with(first, second, normalization) {
                    resolve_collision(first, second, &info);
                    on_contact(i, j, &info);
                    contacts += 1;
                }
            }
        }
    }

    tracing::trace!(
        entities = entities.len(),
        iterations = config.iterations,
        integrator = integrator.name(),
        contacts,
        "physics tick"
    );
}
