//! Three-slot widget carousel.
//!
//! Three widgets sit on a circle of radius [`WIDGET_ROTATION_RADIUS`] around
//! the face center:
//!
//! ```text
//!              (hub)
//!   Trailing ----+---- Leading
//!    180         |         0
//!              Middle
//!                90
//! ```
//!
//! Angles are orbit angles (0 = three o'clock, clockwise on the y-down
//! display), so the middle slot sits below the hub.
//!
//! # Rotation
//!
//! A left swipe while [`Rotation::Idle`]:
//!
//! 1. destroys the trailing widget,
//! 2. shifts trailing <- middle <- leading,
//! 3. builds the next catalog kind at the leading position, hidden.
//!
//! The swipe leaves the carousel at `Rotating { progress: ROTATION_STEP }`.
//! Each following [`Carousel::advance`] below [`ROTATION_END`] adds
//! [`ROTATION_STEP`] and moves the two visible widgets half the progress
//! angle along the orbit, so at [`ROTATION_END`] each has swept the 90
//! degrees to its new rest slot. The advance that finds [`ROTATION_END`]
//! un-hides the new leading widget and returns to idle, 18 refreshes after
//! the swipe. Swipes during a rotation are dropped.

use embedded_graphics::prelude::Point;

use crate::colors::DEFAULT_WIDGET_COLORS;
use crate::config::{ROTATION_END, ROTATION_STEP, WIDGET_ROTATION_RADIUS};
use crate::geometry::orbit_offset;
use crate::sources::DataSources;
use crate::surface::{FontId, Surface};
use crate::widgets::{CircleWidget, WidgetKind};

// =============================================================================
// Slots
// =============================================================================

/// Position on the carousel circle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    Trailing,
    Middle,
    Leading,
}

impl Slot {
    /// Slots in storage order.
    pub const ALL: [Slot; 3] = [Self::Trailing, Self::Middle, Self::Leading];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Trailing => 0,
            Self::Middle => 1,
            Self::Leading => 2,
        }
    }

    /// Orbit angle of the slot at rest.
    pub const fn rest_angle(self) -> i16 {
        match self {
            Self::Trailing => 180,
            Self::Middle => 90,
            Self::Leading => 0,
        }
    }

    /// Center offset of the slot at rest.
    pub const fn rest_position(self) -> Point { orbit_offset(WIDGET_ROTATION_RADIUS, self.rest_angle()) }
}

/// Center offset of a widget heading for `slot`, `progress` into a rotation.
///
/// Starts at the previous slot's rest angle (`rest - 90`) and reaches the
/// slot's own rest angle at [`ROTATION_END`].
pub const fn sweep_position(
    slot: Slot,
    progress: i16,
) -> Point {
    let travelled = progress * 90 / ROTATION_END;
    orbit_offset(WIDGET_ROTATION_RADIUS, slot.rest_angle() - 90 + travelled)
}

// =============================================================================
// Rotation State
// =============================================================================

/// Animation state of the carousel.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    Idle,
    /// `progress` in `ROTATION_STEP..=ROTATION_END`, advanced by `ROTATION_STEP` per refresh.
    Rotating { progress: i16 },
}

impl Rotation {
    #[inline]
    pub const fn is_rotating(self) -> bool { matches!(self, Self::Rotating { .. }) }
}

// =============================================================================
// Carousel
// =============================================================================

/// Owns the three slot widgets and animates rotations between them.
#[derive(Debug)]
pub struct Carousel {
    /// Indexed by [`Slot::index`].
    slots: [CircleWidget; 3],
    rotation: Rotation,
    value_font: Option<FontId>,
}

impl Carousel {
    /// Build the carousel with `kinds` in trailing, middle, leading order.
    pub fn new<S: Surface, D: DataSources + ?Sized>(
        surface: &mut S,
        sources: &D,
        kinds: [WidgetKind; 3],
        value_font: Option<FontId>,
    ) -> Self {
        let slots = Slot::ALL.map(|slot| {
            let widget = CircleWidget::create(kinds[slot.index()], surface, sources, slot.rest_position(), value_font);
            widget.change_colors(surface, DEFAULT_WIDGET_COLORS);
            widget
        });

        Self {
            slots,
            rotation: Rotation::Idle,
            value_font,
        }
    }

    /// Refresh every slot, the hidden incoming widget included.
    pub fn refresh_widgets<S: Surface, D: DataSources + ?Sized>(
        &mut self,
        surface: &mut S,
        sources: &D,
    ) {
        for widget in &mut self.slots {
            widget.refresh(surface, sources);
        }
    }

    /// Start a rotation. Returns `false` (and changes nothing) while one is
    /// already running.
    pub fn on_swipe_left<S: Surface, D: DataSources + ?Sized>(
        &mut self,
        surface: &mut S,
        sources: &D,
    ) -> bool {
        if self.rotation.is_rotating() {
            log_debug!("carousel: swipe dropped, rotation in progress");
            return false;
        }

        let incoming = self.widget(Slot::Leading).kind().next();
        log_info!("carousel: rotating in {}", incoming.name());

        let mut widget = CircleWidget::create(
            incoming,
            surface,
            sources,
            Slot::Leading.rest_position(),
            self.value_font,
        );
        widget.change_colors(surface, DEFAULT_WIDGET_COLORS);
        widget.set_hidden(surface, true);

        // [trailing, middle, leading] -> [middle, leading, trailing]
        self.slots.rotate_left(1);
        let outgoing = core::mem::replace(&mut self.slots[Slot::Leading.index()], widget);
        outgoing.destroy(surface);

        self.rotation = Rotation::Rotating { progress: ROTATION_STEP };
        true
    }

    /// Advance a running rotation by one step. No-op while idle.
    ///
    /// Below [`ROTATION_END`] the progress grows by one step and the two
    /// visible widgets move; at [`ROTATION_END`] the incoming widget is shown
    /// and the carousel goes idle.
    pub fn advance<S: Surface>(
        &mut self,
        surface: &mut S,
    ) {
        let Rotation::Rotating { progress } = self.rotation else {
            return;
        };

        if progress >= ROTATION_END {
            self.slots[Slot::Leading.index()].set_hidden(surface, false);
            self.rotation = Rotation::Idle;
            log_info!("carousel: rotation complete");
            return;
        }

        let progress = progress + ROTATION_STEP;
        for slot in [Slot::Trailing, Slot::Middle] {
            self.slots[slot.index()].set_position(surface, sweep_position(slot, progress));
        }
        self.rotation = Rotation::Rotating { progress };
    }

    #[inline]
    pub const fn rotation(&self) -> Rotation { self.rotation }

    #[inline]
    pub const fn widget(
        &self,
        slot: Slot,
    ) -> &CircleWidget {
        &self.slots[slot.index()]
    }

    /// Kind in `slot`.
    #[inline]
    pub const fn kind(
        &self,
        slot: Slot,
    ) -> WidgetKind {
        self.widget(slot).kind()
    }

    /// Delete every widget from the surface.
    pub fn destroy<S: Surface>(
        self,
        surface: &mut S,
    ) {
        for widget in self.slots {
            widget.destroy(surface);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
