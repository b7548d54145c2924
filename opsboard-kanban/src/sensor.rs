//! Pointer activation sensor
//!
//! Turns raw pointer events into drag events for the
//! [`InteractionController`](crate::InteractionController). A press only
//! becomes a drag once the pointer has travelled `activation_distance`
//! pixels, so plain clicks on a card never start one.

use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Default travel, in pixels, before a press becomes a drag
pub const DEFAULT_ACTIVATION_DISTANCE: f32 = 8.0;

/// Drag events for the interaction controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SensorEvent {
    DragStart { task: TaskId },
    DragEnd { target: Option<String> },
}

#[derive(Debug, Clone)]
struct Press {
    task: TaskId,
    origin: (f32, f32),
    activated: bool,
}

/// Pointer sensor with a distance activation constraint
#[derive(Debug, Clone)]
pub struct PointerSensor {
    activation_distance: f32,
    press: Option<Press>,
}

impl PointerSensor {
    pub fn new(activation_distance: f32) -> Self {
        Self {
            activation_distance: activation_distance.max(0.0),
            press: None,
        }
    }

    pub fn activation_distance(&self) -> f32 {
        self.activation_distance
    }

    /// Pointer pressed on a task card
    pub fn pointer_down(&mut self, task: impl Into<TaskId>, x: f32, y: f32) {
        let task = task.into();
        trace!(task = %task, x, y, "pointer down");
        self.press = Some(Press {
            task,
            origin: (x, y),
            activated: false,
        });
    }

    /// Pointer moved. Emits `DragStart` the first time the threshold is crossed.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<SensorEvent> {
        let threshold = self.activation_distance;
        let press = self.press.as_mut()?;
        if press.activated {
            return None;
        }

        let (ox, oy) = press.origin;
        let distance = ((x - ox).powi(2) + (y - oy).powi(2)).sqrt();
        if distance < threshold {
            return None;
        }

        press.activated = true;
        Some(SensorEvent::DragStart {
            task: press.task.clone(),
        })
    }

    /// Pointer released over `target` (or nothing). Emits `DragEnd` only if a
    /// drag had started.
    pub fn pointer_up(&mut self, target: Option<&str>) -> Option<SensorEvent> {
        let press = self.press.take()?;
        press.activated.then(|| SensorEvent::DragEnd {
            target: target.map(str::to_string),
        })
    }

    /// Whether a press has turned into a drag
    pub fn is_active(&self) -> bool {
        self.press.as_ref().is_some_and(|p| p.activated)
    }
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}
