//! Verlet rope tether between a drifting anchor and a free-floating body.
//!
//! `tether` simulates the line that keeps a spacewalking player attached to
//! their ship in a zero-gravity game. The rope is a fixed-size chain of Verlet
//! particles, relaxed a few times per tick toward a constant segment length.
//! Its anchor-to-free-end span is clamped to a length budget that upgrades
//! can raise.
//!
//! # Features
//!
//! - **Verlet chain**: implicit velocity, no damping, no gravity
//! - **Soft solver**: left-to-right neighbour relaxation plus a hard length clamp
//! - **Host contract**: each tick takes live anchor and body state, and returns
//!   the corrected position plus a velocity override or a reeling-in pull
//! - **Per-entity**: one `TetherController` per entity, collected in a `TetherRegistry`
//! - **Observable**: monitor steps via the `StepObserver` trait (`tracing` feature
//!   for a ready-made sink)
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use tether::{BodyState, NoOpStepObserver, TetherConfig, TetherController, Vec2};
//!
//! let mut player = TetherController::new(TetherConfig::<f32>::new());
//! player
//!     .attach(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), &mut NoOpStepObserver)
//!     .unwrap();
//!
//! // The player keeps thrusting far beyond the 320 unit budget...
//! let body = BodyState::new(Vec2::new(500.0, 0.0), Vec2::new(3.0, 0.0));
//! let mut out = None;
//! for _ in 0..10 {
//!     out = player.tick(Vec2::new(0.0, 0.0), body, &mut NoOpStepObserver);
//! }
//!
//! // ...and once the slack is gone, is held at the end of the line.
//! let out = out.unwrap();
//! assert!(out.taut);
//! assert!(out.position.length() <= 320.0 + 1e-3);
//! assert_eq!(out.apply(body.velocity), Vec2::zero());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod chain;
pub mod constraint;
pub mod solver;
pub mod controller;
pub mod registry;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use chain::ParticleChain;
pub use constraint::{SegmentConstraint, LengthLimit, Clamp};
pub use solver::{ConstraintSolver, RelaxOutcome};
pub use controller::{AttachmentState, BodyState, CorrectedFreeEnd, Tether, TetherController};
pub use registry::TetherRegistry;
pub use config::{TautPolicy, TetherConfig};
pub use observer::{StepObserver, NoOpStepObserver};
#[cfg(feature = "tracing")]
pub use observer::TracingObserver;
pub use error::TetherError;
