//! Battery charge widget.

use core::fmt::Write;

use embedded_graphics::prelude::Point;
use heapless::String;

use super::gauge::GaugeParts;
use super::symbols;
use crate::colors::{LIME, WidgetColors};
use crate::config::{BATTERY_GAUGE_MAX, WIDGET_CHARGE_OFFSET};
use crate::dirty::ChangeTracker;
use crate::sources::DataSources;
use crate::surface::{Anchor, FontId, ObjectId, Surface};

/// Battery percentage on a 0..100 gauge plus a charge glyph.
#[derive(Debug)]
pub struct BatteryWidget {
    pub(crate) parts: GaugeParts,
    charge: ObjectId,
    percent: ChangeTracker<u8>,
    charging: ChangeTracker<bool>,
}

/// `NN%` label text.
pub fn percent_text(percent: u8) -> String<8> {
    let mut text = String::new();
    let _ = write!(text, "{percent}%");
    text
}

impl BatteryWidget {
    pub fn new<S: Surface, D: DataSources + ?Sized>(
        surface: &mut S,
        sources: &D,
        position: Point,
        value_font: Option<FontId>,
    ) -> Self {
        let parts = GaugeParts::create(surface, position, BATTERY_GAUGE_MAX, symbols::BATTERY, value_font);

        let charge = surface.create_label(None, LIME);
        surface.set_label_text(charge, symbols::CHARGING);
        surface.set_position(charge, Anchor::Center, position + Point::new(0, WIDGET_CHARGE_OFFSET));

        let widget = Self {
            parts,
            charge,
            percent: ChangeTracker::new(sources.battery_percent()),
            charging: ChangeTracker::new(sources.is_charging()),
        };
        widget.draw_percent(surface);
        widget.draw_charge(surface);
        widget
    }

    pub fn refresh<S: Surface, D: DataSources + ?Sized>(
        &mut self,
        surface: &mut S,
        sources: &D,
    ) {
        if self.percent.update(sources.battery_percent()) {
            self.draw_percent(surface);
        }
        if self.charging.update(sources.is_charging()) {
            self.draw_charge(surface);
        }
    }

    fn draw_percent<S: Surface>(
        &self,
        surface: &mut S,
    ) {
        let percent = self.percent.value();
        surface.set_arc_value(self.parts.arc, u32::from(percent));
        surface.set_label_text(self.parts.value, &percent_text(percent));
    }

    fn draw_charge<S: Surface>(
        &self,
        surface: &mut S,
    ) {
        let hidden = self.parts.is_hidden() || !self.charging.value();
        surface.set_hidden(self.charge, hidden);
    }

    pub fn set_position<S: Surface>(
        &mut self,
        surface: &mut S,
        position: Point,
    ) {
        self.parts.place(surface, position);
        surface.set_position(self.charge, Anchor::Center, position + Point::new(0, WIDGET_CHARGE_OFFSET));
    }

    pub fn set_hidden<S: Surface>(
        &mut self,
        surface: &mut S,
        hidden: bool,
    ) {
        self.parts.set_hidden(surface, hidden);
        self.draw_charge(surface);
    }

    /// The charge glyph keeps its own color.
    pub fn change_colors<S: Surface>(
        &self,
        surface: &mut S,
        colors: WidgetColors,
    ) {
        self.parts.change_colors(surface, colors);
    }

    pub fn destroy<S: Surface>(
        self,
        surface: &mut S,
    ) {
        self.parts.destroy(surface);
        surface.delete(self.charge);
    }
}
