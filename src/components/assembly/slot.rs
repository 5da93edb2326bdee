use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::part::{Part, PartId, PartKind};
use crate::components::Pose;
use crate::resources::AssemblyTracker;
use crate::utils::DEFAULT_SNAP_DISTANCE;

/// Highlight state shown while a free part hovers inside a slot's trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotFeedback {
    /// The part fits this slot
    Valid,
    /// The part is the wrong kind for this slot
    Invalid,
}

/// Current highlight of a slot, refreshed every frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotHighlight(pub Option<SlotFeedback>);

/// Anchor point on the frame that accepts exactly one part of one kind.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    required_kind: PartKind,
    anchor: Pose,
    snap_distance: f64,
    trigger_radius: f64,
    installed_part: Option<PartId>,
}

impl Slot {
    pub fn new(required_kind: PartKind, anchor: Pose) -> Self {
        Self {
            required_kind,
            anchor,
            snap_distance: DEFAULT_SNAP_DISTANCE,
            trigger_radius: DEFAULT_SNAP_DISTANCE,
            installed_part: None,
        }
    }

    pub fn with_snap_distance(mut self, snap_distance: f64) -> Self {
        self.snap_distance = snap_distance.max(0.0);
        self
    }

    pub fn with_trigger_radius(mut self, trigger_radius: f64) -> Self {
        self.trigger_radius = trigger_radius.max(0.0);
        self
    }

    pub fn required_kind(&self) -> PartKind {
        self.required_kind
    }

    pub fn anchor(&self) -> &Pose {
        &self.anchor
    }

    pub fn snap_distance(&self) -> f64 {
        self.snap_distance
    }

    pub fn trigger_radius(&self) -> f64 {
        self.trigger_radius
    }

    pub fn is_occupied(&self) -> bool {
        self.installed_part.is_some()
    }

    pub fn installed_part(&self) -> Option<PartId> {
        self.installed_part
    }

    /// Forget any held part. Called when the slot is (re)activated.
    pub fn reset(&mut self) {
        self.installed_part = None;
    }

    /// Highlight for a part inside the trigger radius of a free slot.
    pub fn feedback(&self, part: &Part) -> Option<SlotFeedback> {
        if self.is_occupied() || part.is_installed() {
            return None;
        }
        if self.anchor.distance_to(&part.pose().position) > self.trigger_radius {
            return None;
        }
        if part.kind() == self.required_kind {
            Some(SlotFeedback::Valid)
        } else {
            Some(SlotFeedback::Invalid)
        }
    }

    /// Whether `part` would snap into this slot right now. The part must be
    /// inside the trigger and within the snap distance.
    pub fn accepts(&self, part: &Part) -> bool {
        !self.is_occupied()
            && !part.is_installed()
            && part.kind() == self.required_kind
            && self.anchor.distance_to(&part.pose().position) <= self.trigger_radius
            && part.is_near(&self.anchor.position, self.snap_distance)
    }

    /// Snap `part` into this slot and report it to `tracker`. Invalid drops
    /// leave everything untouched and return `false`.
    pub fn try_install(&mut self, part: &mut Part, tracker: &mut AssemblyTracker) -> bool {
        if !self.accepts(part) {
            debug!(
                "{} not accepted by {} slot (occupied: {})",
                part.kind(),
                self.required_kind,
                self.is_occupied()
            );
            return false;
        }

        self.installed_part = Some(part.id());
        part.install_to(&self.anchor);
        tracker.install(self.required_kind);
        true
    }

    /// Release `part` back to its home pose and report the removal to
    /// `tracker`. Returns `false` if this slot does not hold `part`.
    pub fn remove(&mut self, part: &mut Part, tracker: &mut AssemblyTracker) -> bool {
        if self.installed_part != Some(part.id()) {
            return false;
        }

        self.installed_part = None;
        part.reset_to_home();
        tracker.remove(self.required_kind);
        true
    }
}
