//! Calendar date widget.

use embedded_graphics::prelude::Point;

use super::gauge::GaugeParts;
use super::number_text;
use crate::clock::Weekday;
use crate::config::DATE_GAUGE_MAX;
use crate::dirty::ChangeTracker;
use crate::sources::DataSources;
use crate::surface::{FontId, Surface};

/// Day of month on a 0..31 gauge, weekday abbreviation as the glyph.
#[derive(Debug)]
pub struct DateWidget {
    pub(crate) parts: GaugeParts,
    day: ChangeTracker<u8>,
    month: ChangeTracker<u8>,
    weekday: ChangeTracker<Weekday>,
}

impl DateWidget {
    pub fn new<S: Surface, D: DataSources + ?Sized>(
        surface: &mut S,
        sources: &D,
        position: Point,
        value_font: Option<FontId>,
    ) -> Self {
        let time = sources.time();
        let parts = GaugeParts::create(surface, position, DATE_GAUGE_MAX, time.weekday.short_name(), value_font);
        let widget = Self {
            parts,
            day: ChangeTracker::new(time.day),
            month: ChangeTracker::new(time.month),
            weekday: ChangeTracker::new(time.weekday),
        };
        widget.draw(surface);
        widget
    }

    pub fn refresh<S: Surface, D: DataSources + ?Sized>(
        &mut self,
        surface: &mut S,
        sources: &D,
    ) {
        let time = sources.time();
        let day_changed = self.day.update(time.day);
        let month_changed = self.month.update(time.month);
        let weekday_changed = self.weekday.update(time.weekday);
        if day_changed || month_changed || weekday_changed {
            self.draw(surface);
        }
    }

    fn draw<S: Surface>(
        &self,
        surface: &mut S,
    ) {
        let day = u32::from(self.day.value());
        surface.set_arc_value(self.parts.arc, day);
        surface.set_label_text(self.parts.value, &number_text(day));
        surface.set_label_text(self.parts.glyph, self.weekday.value().short_name());
    }
}
