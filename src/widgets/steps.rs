//! Step count widget.

use embedded_graphics::prelude::Point;

use super::gauge::GaugeParts;
use super::{number_text, symbols};
use crate::dirty::ChangeTracker;
use crate::sources::DataSources;
use crate::surface::{FontId, Surface};

/// Steps on a gauge bounded by the daily goal.
#[derive(Debug)]
pub struct StepsWidget {
    pub(crate) parts: GaugeParts,
    count: ChangeTracker<u32>,
    sensor_ok: ChangeTracker<bool>,
    goal: ChangeTracker<u32>,
}

impl StepsWidget {
    pub fn new<S: Surface, D: DataSources + ?Sized>(
        surface: &mut S,
        sources: &D,
        position: Point,
        value_font: Option<FontId>,
    ) -> Self {
        let goal = sources.steps_goal();
        let parts = GaugeParts::create(surface, position, goal, symbols::STEPS, value_font);
        let widget = Self {
            parts,
            count: ChangeTracker::new(sources.step_count()),
            sensor_ok: ChangeTracker::new(sources.is_motion_sensor_ok()),
            goal: ChangeTracker::new(goal),
        };
        widget.draw_count(surface);
        widget
    }

    pub fn refresh<S: Surface, D: DataSources + ?Sized>(
        &mut self,
        surface: &mut S,
        sources: &D,
    ) {
        if self.goal.update(sources.steps_goal()) {
            surface.set_arc_range(self.parts.arc, self.goal.value());
            // Re-apply the count so the fill is clamped against the new range
            surface.set_arc_value(self.parts.arc, self.count.value());
        }

        let count_changed = self.count.update(sources.step_count());
        let sensor_changed = self.sensor_ok.update(sources.is_motion_sensor_ok());
        if count_changed || sensor_changed {
            self.draw_count(surface);
        }
    }

    fn draw_count<S: Surface>(
        &self,
        surface: &mut S,
    ) {
        let count = self.count.value();
        surface.set_label_text(self.parts.value, &number_text(count));
        surface.set_arc_value(self.parts.arc, count);
    }
}
