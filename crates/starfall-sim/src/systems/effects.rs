//! Cosmetic entities: explosion particles and rising text floaters.
//! They age in real time, move on scaled time, and never wrap.

use hecs::World;

use starfall_core::components::{Floater, Particle};
use starfall_core::constants::DT;
use starfall_core::types::{Position, Velocity};

pub fn run(world: &mut World, despawn: &mut Vec<hecs::Entity>, ts: f64) {
    despawn.clear();

    for (entity, (particle, pos, vel)) in
        world.query_mut::<(&mut Particle, &mut Position, &Velocity)>()
    {
        particle.life -= DT;
        if particle.life <= 0.0 {
            despawn.push(entity);
            continue;
        }
        pos.x += vel.x * DT * ts;
        pos.y += vel.y * DT * ts;
    }

    for (entity, (floater, pos, vel)) in
        world.query_mut::<(&mut Floater, &mut Position, &Velocity)>()
    {
        floater.life -= DT;
        if floater.life <= 0.0 {
            despawn.push(entity);
            continue;
        }
        pos.y += vel.y * DT * ts;
    }

    for entity in despawn.drain(..) {
        let _ = world.despawn(entity);
    }
}
