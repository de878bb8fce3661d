//! # Reorder Engine
//!
//! Drag-and-drop gesture lifecycle for the canvas.
//!
//! ```text
//! Idle -> PickedUp -> Hovering -> (Dropped | Cancelled) -> Idle
//!            \-------------------------------/
//! ```
//!
//! The engine never mutates the document. A [`DragEffect::Dropped`] or
//! [`DragEffect::Nudged`] effect carries the `(from, to)` pair the session
//! commits through [`crate::Mutation::MoveElement`].
//!
//! Hover candidates are chosen by distance between geometric centres
//! ("closest centre"); equal distances resolve to the element that comes
//! first in the document. The dragged element itself is a candidate, so a
//! release over its own slot cancels the gesture.

use letterpress_document::{Document, ElementId};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_sq(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Measured on-screen box of one element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: ElementId,
    pub rect: Rect,
}

impl Slot {
    pub fn new(id: impl Into<ElementId>, rect: Rect) -> Self {
        Self { id: id.into(), rect }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Input to the gesture machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum DragEvent {
    /// Grab an element by its handle
    PickUp { id: ElementId },

    /// Pointer moved: centre of the dragged box plus the current layout
    Hover { center: Point, layout: Vec<Slot> },

    Drop,

    Cancel,

    /// Keyboard move by one position while picked up
    Nudge { direction: Direction },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DragState {
    #[default]
    Idle,
    PickedUp {
        id: ElementId,
        origin: usize,
    },
    Hovering {
        id: ElementId,
        origin: usize,
        candidate: Option<ElementId>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CancelReason {
    /// Released without ever hovering a candidate
    NoTarget,
    DroppedOnOrigin,
    Explicit,
    ElementRemoved,
}

/// Events that were safely ignored in the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoopReason {
    IdleWithoutActiveDrag,
    AlreadyDragging,
    UnknownElement,
    EdgeOfDocument,
}

/// What one event did to the gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "camelCase")]
pub enum DragEffect {
    PickedUp {
        id: ElementId,
        origin: usize,
    },
    Hovering {
        id: ElementId,
        candidate: Option<ElementId>,
        index: Option<usize>,
    },
    Dropped {
        id: ElementId,
        from: usize,
        to: usize,
    },
    Nudged {
        id: ElementId,
        from: usize,
        to: usize,
    },
    Cancelled {
        id: ElementId,
        reason: CancelReason,
    },
    Noop {
        reason: NoopReason,
    },
}

impl DragEffect {
    /// Index move the session has to commit, if any
    pub fn committed_move(&self) -> Option<(usize, usize)> {
        match self {
            DragEffect::Dropped { from, to, .. } | DragEffect::Nudged { from, to, .. } => {
                Some((*from, *to))
            }
            _ => None,
        }
    }

    /// Whether the gesture is over after this effect
    pub fn ends_gesture(&self) -> bool {
        matches!(self, DragEffect::Dropped { .. } | DragEffect::Cancelled { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReorderEngine {
    state: DragState,
}

impl ReorderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Id of the element being dragged
    pub fn dragging(&self) -> Option<&ElementId> {
        match &self.state {
            DragState::Idle => None,
            DragState::PickedUp { id, .. } | DragState::Hovering { id, .. } => Some(id),
        }
    }

    /// Apply one event against the current document
    pub fn apply_event(&mut self, event: &DragEvent, doc: &Document) -> DragEffect {
        let effect = match (&self.state, event) {
            (DragState::Idle, DragEvent::PickUp { id }) => match doc.index_of(id) {
                Some(origin) => {
                    self.state = DragState::PickedUp { id: id.clone(), origin };
                    DragEffect::PickedUp { id: id.clone(), origin }
                }
                None => DragEffect::Noop {
                    reason: NoopReason::UnknownElement,
                },
            },
            (DragState::Idle, _) => DragEffect::Noop {
                reason: NoopReason::IdleWithoutActiveDrag,
            },
            (_, DragEvent::PickUp { .. }) => DragEffect::Noop {
                reason: NoopReason::AlreadyDragging,
            },

            (
                DragState::PickedUp { id, origin } | DragState::Hovering { id, origin, .. },
                DragEvent::Hover { center, layout },
            ) => {
                let (id, origin) = (id.clone(), *origin);
                let candidate = closest_center(center, layout, doc);
                let index = candidate.as_ref().and_then(|c| doc.index_of(c));
                self.state = DragState::Hovering {
                    id: id.clone(),
                    origin,
                    candidate: candidate.clone(),
                };
                DragEffect::Hovering { id, candidate, index }
            }

            (DragState::PickedUp { id, .. }, DragEvent::Drop) => {
                let id = id.clone();
                self.finish(doc, id, CancelReason::NoTarget)
            }
            (DragState::Hovering { id, candidate, .. }, DragEvent::Drop) => {
                let (id, candidate) = (id.clone(), candidate.clone());
                match candidate {
                    None => self.finish(doc, id, CancelReason::NoTarget),
                    Some(target) if target == id => self.finish(doc, id, CancelReason::DroppedOnOrigin),
                    Some(target) => self.drop_on(doc, id, &target),
                }
            }

            (DragState::PickedUp { id, .. } | DragState::Hovering { id, .. }, DragEvent::Cancel) => {
                let id = id.clone();
                self.state = DragState::Idle;
                DragEffect::Cancelled {
                    id,
                    reason: CancelReason::Explicit,
                }
            }

            (
                DragState::PickedUp { id, .. } | DragState::Hovering { id, .. },
                DragEvent::Nudge { direction },
            ) => {
                let id = id.clone();
                self.nudge(doc, id, *direction)
            }
        };

        debug!(?event, ?effect, "Drag event applied");
        effect
    }

    /// End the gesture if `removed` is the dragged element
    pub fn element_removed(&mut self, removed: &ElementId) -> Option<DragEffect> {
        if self.dragging() != Some(removed) {
            return None;
        }
        self.state = DragState::Idle;
        Some(DragEffect::Cancelled {
            id: removed.clone(),
            reason: CancelReason::ElementRemoved,
        })
    }

    fn finish(&mut self, doc: &Document, id: ElementId, reason: CancelReason) -> DragEffect {
        self.state = DragState::Idle;
        let reason = if doc.contains(&id) {
            reason
        } else {
            CancelReason::ElementRemoved
        };
        DragEffect::Cancelled { id, reason }
    }

    fn drop_on(&mut self, doc: &Document, id: ElementId, target: &ElementId) -> DragEffect {
        match (doc.index_of(&id), doc.index_of(target)) {
            (Some(from), Some(to)) => {
                self.state = DragState::Idle;
                DragEffect::Dropped { id, from, to }
            }
            (None, _) => self.finish(doc, id, CancelReason::ElementRemoved),
            (Some(_), None) => self.finish(doc, id, CancelReason::NoTarget),
        }
    }

    fn nudge(&mut self, doc: &Document, id: ElementId, direction: Direction) -> DragEffect {
        let Some(from) = doc.index_of(&id) else {
            return self.finish(doc, id, CancelReason::ElementRemoved);
        };

        let to = match direction {
            Direction::Up => from.checked_sub(1),
            Direction::Down => Some(from + 1).filter(|to| *to < doc.len()),
        };
        let Some(to) = to else {
            return DragEffect::Noop {
                reason: NoopReason::EdgeOfDocument,
            };
        };

        self.state = DragState::PickedUp { id: id.clone(), origin: to };
        DragEffect::Nudged { id, from, to }
    }
}

/// Element in `layout` whose centre is nearest to `center`.
///
/// Slots for ids missing from the document are skipped. Ties go to the
/// element with the lower document index.
pub fn closest_center(center: &Point, layout: &[Slot], doc: &Document) -> Option<ElementId> {
    layout
        .iter()
        .filter_map(|slot| {
            let index = doc.index_of(&slot.id)?;
            Some((slot.rect.center().distance_sq(center), index, &slot.id))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
        .map(|(_, _, id)| id.clone())
}
