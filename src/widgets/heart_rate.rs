//! Heart-rate widget.

use embedded_graphics::prelude::Point;

use super::gauge::GaugeParts;
use super::{number_text, symbols};
use crate::config::HEART_RATE_GAUGE_MAX;
use crate::dirty::ChangeTracker;
use crate::sources::{DataSources, HeartRateState};
use crate::surface::{FontId, Surface};

/// Beats per minute on a 0..220 gauge. Shows `--` while the sensor has no
/// reading.
#[derive(Debug)]
pub struct HeartRateWidget {
    pub(crate) parts: GaugeParts,
    rate: ChangeTracker<u8>,
    state: ChangeTracker<HeartRateState>,
}

impl HeartRateWidget {
    pub fn new<S: Surface, D: DataSources + ?Sized>(
        surface: &mut S,
        sources: &D,
        position: Point,
        value_font: Option<FontId>,
    ) -> Self {
        let parts = GaugeParts::create(surface, position, HEART_RATE_GAUGE_MAX, symbols::HEART, value_font);
        let widget = Self {
            parts,
            rate: ChangeTracker::new(sources.heart_rate()),
            state: ChangeTracker::new(sources.heart_rate_state()),
        };
        widget.draw(surface);
        widget
    }

    pub fn refresh<S: Surface, D: DataSources + ?Sized>(
        &mut self,
        surface: &mut S,
        sources: &D,
    ) {
        let rate_changed = self.rate.update(sources.heart_rate());
        let state_changed = self.state.update(sources.heart_rate_state());
        if rate_changed || state_changed {
            self.draw(surface);
        }
    }

    fn draw<S: Surface>(
        &self,
        surface: &mut S,
    ) {
        if self.state.value().has_reading() {
            let rate = u32::from(self.rate.value());
            surface.set_arc_value(self.parts.arc, rate);
            surface.set_label_text(self.parts.value, &number_text(rate));
        } else {
            surface.set_arc_value(self.parts.arc, 0);
            surface.set_label_text(self.parts.value, symbols::NO_READING);
        }
    }
}
