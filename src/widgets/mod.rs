//! Circular status widgets shown in the carousel.
//!
//! Each widget is a gauge arc with a glyph and a value label, centered at an
//! offset from the face center.
//!
//! # Widget Kinds
//!
//! - `battery`: charge percentage, charge glyph while plugged in
//! - `steps`: step count against the daily goal
//! - `date`: day of month, weekday abbreviation
//! - `heart_rate`: beats per minute or `--`
//!
//! # Redraw Policy
//!
//! A widget draws its complete state once when constructed. Afterwards
//! [`CircleWidget::refresh`] feeds each input through a
//! [`ChangeTracker`](crate::ChangeTracker) and touches the surface only for
//! inputs that moved.

mod battery;
mod date;
mod gauge;
mod heart_rate;
mod steps;
pub mod symbols;

use core::fmt::Write;

pub use battery::{BatteryWidget, percent_text};
pub use date::DateWidget;
use embedded_graphics::prelude::Point;
pub use gauge::GaugeParts;
use heapless::String;
pub use heart_rate::HeartRateWidget;
pub use steps::StepsWidget;

use crate::colors::WidgetColors;
use crate::sources::DataSources;
use crate::surface::{FontId, Surface};

// =============================================================================
// Catalog
// =============================================================================

/// The cyclic widget catalog.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WidgetKind {
    Battery,
    Steps,
    Date,
    HeartRate,
}

impl WidgetKind {
    /// Catalog order.
    pub const ALL: [WidgetKind; 4] = [Self::Battery, Self::Steps, Self::Date, Self::HeartRate];

    /// Position in the catalog.
    pub const fn index(self) -> usize {
        match self {
            Self::Battery => 0,
            Self::Steps => 1,
            Self::Date => 2,
            Self::HeartRate => 3,
        }
    }

    /// The kind after `self`, wrapping at the end of the catalog.
    pub const fn next(self) -> Self { Self::ALL[(self.index() + 1) % Self::ALL.len()] }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Battery => "battery",
            Self::Steps => "steps",
            Self::Date => "date",
            Self::HeartRate => "heart rate",
        }
    }
}

/// Decimal text of a gauge value.
pub(crate) fn number_text(value: u32) -> String<12> {
    let mut text = String::new();
    let _ = write!(text, "{value}");
    text
}

// =============================================================================
// Circle Widget
// =============================================================================

/// One carousel widget of any kind.
#[derive(Debug)]
pub enum CircleWidget {
    Battery(BatteryWidget),
    Steps(StepsWidget),
    Date(DateWidget),
    HeartRate(HeartRateWidget),
}

impl CircleWidget {
    /// Construct a widget of `kind` centered at `position`, drawn with the
    /// current source values.
    pub fn create<S: Surface, D: DataSources + ?Sized>(
        kind: WidgetKind,
        surface: &mut S,
        sources: &D,
        position: Point,
        value_font: Option<FontId>,
    ) -> Self {
        match kind {
            WidgetKind::Battery => Self::Battery(BatteryWidget::new(surface, sources, position, value_font)),
            WidgetKind::Steps => Self::Steps(StepsWidget::new(surface, sources, position, value_font)),
            WidgetKind::Date => Self::Date(DateWidget::new(surface, sources, position, value_font)),
            WidgetKind::HeartRate => Self::HeartRate(HeartRateWidget::new(surface, sources, position, value_font)),
        }
    }

    pub const fn kind(&self) -> WidgetKind {
        match self {
            Self::Battery(_) => WidgetKind::Battery,
            Self::Steps(_) => WidgetKind::Steps,
            Self::Date(_) => WidgetKind::Date,
            Self::HeartRate(_) => WidgetKind::HeartRate,
        }
    }

    /// Shared gauge objects of the widget.
    pub const fn parts(&self) -> &GaugeParts {
        match self {
            Self::Battery(widget) => &widget.parts,
            Self::Steps(widget) => &widget.parts,
            Self::Date(widget) => &widget.parts,
            Self::HeartRate(widget) => &widget.parts,
        }
    }

    const fn parts_mut(&mut self) -> &mut GaugeParts {
        match self {
            Self::Battery(widget) => &mut widget.parts,
            Self::Steps(widget) => &mut widget.parts,
            Self::Date(widget) => &mut widget.parts,
            Self::HeartRate(widget) => &mut widget.parts,
        }
    }

    /// Poll the widget's sources and redraw what changed.
    pub fn refresh<S: Surface, D: DataSources + ?Sized>(
        &mut self,
        surface: &mut S,
        sources: &D,
    ) {
        match self {
            Self::Battery(widget) => widget.refresh(surface, sources),
            Self::Steps(widget) => widget.refresh(surface, sources),
            Self::Date(widget) => widget.refresh(surface, sources),
            Self::HeartRate(widget) => widget.refresh(surface, sources),
        }
    }

    pub fn set_position<S: Surface>(
        &mut self,
        surface: &mut S,
        position: Point,
    ) {
        match self {
            Self::Battery(widget) => widget.set_position(surface, position),
            _ => self.parts_mut().place(surface, position),
        }
    }

    /// Center offset from the face center.
    #[inline]
    pub const fn position(&self) -> Point { self.parts().position() }

    pub fn set_hidden<S: Surface>(
        &mut self,
        surface: &mut S,
        hidden: bool,
    ) {
        match self {
            Self::Battery(widget) => widget.set_hidden(surface, hidden),
            _ => self.parts_mut().set_hidden(surface, hidden),
        }
    }

    #[inline]
    pub const fn is_hidden(&self) -> bool { self.parts().is_hidden() }

    pub fn change_colors<S: Surface>(
        &self,
        surface: &mut S,
        colors: WidgetColors,
    ) {
        match self {
            Self::Battery(widget) => widget.change_colors(surface, colors),
            _ => self.parts().change_colors(surface, colors),
        }
    }

    /// Delete every surface object the widget owns.
    pub fn destroy<S: Surface>(
        self,
        surface: &mut S,
    ) {
        match self {
            Self::Battery(widget) => widget.destroy(surface),
            Self::Steps(widget) => widget.parts.destroy(surface),
            Self::Date(widget) => widget.parts.destroy(surface),
            Self::HeartRate(widget) => widget.parts.destroy(surface),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
