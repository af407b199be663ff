//! Simulated GPS tracking for the trail map.
//!
//! The tracker starts from a fix in the Kedarkantha area and perturbs
//! it on every tick with small random deltas, the way the original map
//! page animated its position. A background task can stream fixes over
//! a channel until a shutdown signal fires.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

/// One GPS reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GpsFix {
    pub lat: f64,
    pub lon: f64,
    pub elevation_m: f64,
    pub speed_kmh: f64,
    pub distance_km: f64,
    pub elapsed_min: u64,
}

impl Default for GpsFix {
    /// Starting fix near the Kedarkantha base camp.
    fn default() -> Self {
        Self {
            lat: 30.0668,
            lon: 79.0193,
            elevation_m: 3650.0,
            speed_kmh: 2.3,
            distance_km: 4.2,
            elapsed_min: 142,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerKind {
    Start,
    Campsite,
    Summit,
}

/// A fixed waypoint along the trail.
#[derive(Debug, Clone, Serialize)]
pub struct TrailMarker {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub kind: MarkerKind,
    pub elevation_m: f64,
}

/// Waypoints for the Kedarkantha route shown on the map page.
pub const KEDARKANTHA_MARKERS: [TrailMarker; 4] = [
    TrailMarker {
        name: "Sankri Village",
        lat: 30.0668,
        lon: 79.0193,
        kind: MarkerKind::Start,
        elevation_m: 1950.0,
    },
    TrailMarker {
        name: "Juda ka Talab",
        lat: 30.0703,
        lon: 79.0156,
        kind: MarkerKind::Campsite,
        elevation_m: 2900.0,
    },
    TrailMarker {
        name: "Kedarkantha Base",
        lat: 30.0739,
        lon: 79.0121,
        kind: MarkerKind::Campsite,
        elevation_m: 3400.0,
    },
    TrailMarker {
        name: "Kedarkantha Summit",
        lat: 30.0781,
        lon: 79.0089,
        kind: MarkerKind::Summit,
        elevation_m: 3800.0,
    },
];

pub struct GpsTracker {
    fix: GpsFix,
    rng: StdRng,
}

impl GpsTracker {
    pub fn new() -> Self {
        Self {
            fix: GpsFix::default(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            fix: GpsFix::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn current(&self) -> GpsFix {
        self.fix
    }

    /// Advance the simulation one step and return the new fix.
    /// Deltas mirror the original interval: ±0.00005° position,
    /// ±2.5 m elevation, ±0.25 km/h speed (floored at zero),
    /// +0.01 km distance, +1 minute elapsed.
    pub fn tick(&mut self) -> GpsFix {
        let jitter = |rng: &mut StdRng, scale: f64| (rng.gen::<f64>() - 0.5) * scale;

        self.fix.lat += jitter(&mut self.rng, 0.0001);
        self.fix.lon += jitter(&mut self.rng, 0.0001);
        self.fix.elevation_m += jitter(&mut self.rng, 5.0);
        self.fix.speed_kmh = (self.fix.speed_kmh + jitter(&mut self.rng, 0.5)).max(0.0);
        self.fix.distance_km += 0.01;
        self.fix.elapsed_min += 1;
        self.fix
    }

    /// Stream fixes over `tx` every `period` until `shutdown` fires
    /// (or its sender is dropped), or the receiver goes away.
    pub async fn stream(
        mut self,
        period: Duration,
        tx: mpsc::Sender<GpsFix>,
        mut shutdown: oneshot::Receiver<()>,
    ) {
        let mut interval = tokio::time::interval(period);
        // The first tick of a tokio interval completes immediately;
        // skip it so the stream paces evenly from the start.
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if tx.send(self.tick()).await.is_err() {
                        debug!("GPS receiver dropped, stopping tracker");
                        break;
                    }
                }
                _ = &mut shutdown => {
                    debug!("GPS tracker shut down");
                    break;
                }
            }
        }
    }
}

impl Default for GpsTracker {
    fn default() -> Self {
        Self::new()
    }
}
