//! Events emitted by the simulation for host-side sound playback.
//!
//! Sound is non-essential: the engine only reports that something
//! audible happened; a host that ignores these loses nothing else.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Audio events drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// One or more lasers left the ship this tick.
    LaserFired,
    /// An asteroid was destroyed.
    AsteroidHit { tier: RoidTier },
    /// The UFO was destroyed.
    UfoHit,
    /// A UFO entered the field; the host should start the siren loop.
    UfoSpawned,
    /// The UFO left the field or died; the host should stop the siren.
    UfoGone,
    /// The ship started exploding.
    ShipExploded,
    /// A shield absorbed a hit.
    ShieldBroken,
    /// A power-up was collected.
    PowerPickup { kind: PowerKind },
    /// The last asteroid of the wave died.
    WaveCleared,
    /// The run ended.
    GameOver { reason: EndReason },
}
