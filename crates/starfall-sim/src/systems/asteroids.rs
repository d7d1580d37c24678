//! Asteroid drift: straight-line integration with radius-padded wrap.

use hecs::World;

use starfall_core::components::Asteroid;
use starfall_core::constants::DT;
use starfall_core::types::{Position, Velocity};

pub fn run(world: &mut World, ts: f64) {
    for (_, (roid, pos, vel)) in world.query_mut::<(&Asteroid, &mut Position, &Velocity)>() {
        pos.x += vel.x * DT * ts;
        pos.y += vel.y * DT * ts;
        pos.wrap_padded(roid.radius);
    }
}
