//! Watch-face orchestrator.
//!
//! [`WatchFace`] owns every piece of the face and is driven from outside:
//!
//! - [`WatchFace::refresh`] once per display tick,
//! - [`WatchFace::on_touch_event`] once per gesture.
//!
//! The surface and the data sources stay with the platform and are passed
//! into each call.
//!
//! # Refresh Order
//!
//! 1. refresh every carousel widget
//! 2. advance the carousel if it is rotating
//! 3. Bluetooth icon visibility
//! 4. notification icon visibility
//! 5. clock hands and digital label, when the time sample changed

use embedded_graphics::prelude::Point;

use crate::assets::{self, AssetStore, FaceFonts, LOGO_IMAGE};
use crate::carousel::Carousel;
use crate::clock::{ClockHands, HandRedraw, HourWrap, TimeSample};
use crate::colors::{ICON_GRAY, WHITE};
use crate::config::{TICK_COUNT, TICK_LONG_WIDTH, TICK_SHORT_WIDTH};
use crate::dirty::ChangeTracker;
use crate::geometry::tick_mark;
use crate::sources::DataSources;
use crate::surface::{Anchor, ColorPart, LineStyle, ObjectId, Surface};
use crate::widgets::{WidgetKind, symbols};

// =============================================================================
// Inputs
// =============================================================================

/// Gestures delivered by the touch controller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchEvent {
    None,
    Tap,
    SwipeLeft,
    SwipeRight,
    SwipeUp,
    SwipeDown,
    LongTap,
    DoubleTap,
}

/// Face configuration chosen by the platform.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaceOptions {
    /// 12-hour label folding rule.
    pub hour_wrap: HourWrap,
    /// Initial carousel kinds in trailing, middle, leading order.
    pub widgets: [WidgetKind; 3],
}

impl FaceOptions {
    pub const DEFAULT: Self = Self {
        hour_wrap: HourWrap::Subtract12,
        widgets: [WidgetKind::Battery, WidgetKind::Steps, WidgetKind::Date],
    };
}

impl Default for FaceOptions {
    fn default() -> Self { Self::DEFAULT }
}

// =============================================================================
// Watch Face
// =============================================================================

pub struct WatchFace {
    options: FaceOptions,
    fonts: FaceFonts,

    ticks: [ObjectId; TICK_COUNT],
    logo: ObjectId,
    ble_icon: ObjectId,
    notification_icon: ObjectId,

    carousel: Carousel,
    hands: ClockHands,

    time: ChangeTracker<TimeSample>,
    ble_connected: ChangeTracker<bool>,
    notifications: ChangeTracker<usize>,
}

impl WatchFace {
    /// Whether every asset the face needs is present. The platform should
    /// only offer the face when this holds.
    pub fn is_available<A: AssetStore + ?Sized>(store: &A) -> bool { assets::is_available(store) }

    /// Build the face and draw its complete initial state.
    ///
    /// Missing fonts do not fail construction; the affected labels use the
    /// surface's default font.
    pub fn new<S: Surface, D: DataSources + ?Sized, A: AssetStore + ?Sized>(
        surface: &mut S,
        sources: &D,
        store: &A,
        options: FaceOptions,
    ) -> Self {
        let fonts = FaceFonts::load(surface, store);

        let ticks = core::array::from_fn(|index| {
            let mark = tick_mark(index);
            let width = if mark.long { TICK_LONG_WIDTH } else { TICK_SHORT_WIDTH };
            let line = surface.create_line(LineStyle::square(width, WHITE));
            surface.set_line_points(line, mark.points);
            line
        });

        let logo = surface.create_image(LOGO_IMAGE);
        surface.set_color(logo, ColorPart::Main, WHITE);
        surface.set_position(logo, Anchor::TopMid, Point::zero());

        let carousel = Carousel::new(surface, sources, options.widgets, fonts.teko);

        let ble_icon = surface.create_label(None, ICON_GRAY);
        surface.set_label_text(ble_icon, symbols::BLUETOOTH);
        surface.set_position(ble_icon, Anchor::TopRight, Point::zero());

        let notification_icon = surface.create_label(None, ICON_GRAY);
        surface.set_label_text(notification_icon, symbols::NOTIFICATION);
        surface.set_position(notification_icon, Anchor::TopLeft, Point::zero());

        let mut hands = ClockHands::new(surface, fonts.segment);

        let time = sources.time();
        let ble_connected = sources.is_ble_connected();
        let notifications = sources.notification_count();

        surface.set_hidden(ble_icon, !ble_connected);
        surface.set_hidden(notification_icon, notifications == 0);
        hands.update(surface, &time, sources.clock_type(), options.hour_wrap);

        log_info!("face: created");

        Self {
            options,
            fonts,
            ticks,
            logo,
            ble_icon,
            notification_icon,
            carousel,
            hands,
            time: ChangeTracker::new(time),
            ble_connected: ChangeTracker::new(ble_connected),
            notifications: ChangeTracker::new(notifications),
        }
    }

    /// One display tick. Returns which hands were redrawn.
    pub fn refresh<S: Surface, D: DataSources + ?Sized>(
        &mut self,
        surface: &mut S,
        sources: &D,
    ) -> HandRedraw {
        self.carousel.refresh_widgets(surface, sources);
        self.carousel.advance(surface);

        if self.ble_connected.update(sources.is_ble_connected()) {
            surface.set_hidden(self.ble_icon, !self.ble_connected.value());
        }

        if self.notifications.update(sources.notification_count()) {
            surface.set_hidden(self.notification_icon, self.notifications.value() == 0);
        }

        if self.time.update(sources.time()) {
            let time = self.time.value();
            self.hands
                .update(surface, &time, sources.clock_type(), self.options.hour_wrap)
        } else {
            HandRedraw::default()
        }
    }

    /// Handle a gesture. Only a left swipe is consumed; it is reported as
    /// handled even when a rotation is already running and the swipe is
    /// dropped.
    pub fn on_touch_event<S: Surface, D: DataSources + ?Sized>(
        &mut self,
        surface: &mut S,
        sources: &D,
        event: TouchEvent,
    ) -> bool {
        match event {
            TouchEvent::SwipeLeft => {
                self.carousel.on_swipe_left(surface, sources);
                true
            }
            _ => false,
        }
    }

    /// Delete every object the face created and release its fonts.
    pub fn teardown<S: Surface>(
        self,
        surface: &mut S,
    ) {
        self.carousel.destroy(surface);
        for object in self
            .ticks
            .into_iter()
            .chain([self.logo, self.ble_icon, self.notification_icon])
            .chain(self.hands.objects())
        {
            surface.delete(object);
        }
        self.fonts.free(surface);
        log_info!("face: torn down");
    }

    #[inline]
    pub const fn options(&self) -> &FaceOptions { &self.options }

    #[inline]
    pub const fn carousel(&self) -> &Carousel { &self.carousel }

    #[inline]
    pub const fn hands(&self) -> &ClockHands { &self.hands }

    #[inline]
    pub const fn ticks(&self) -> &[ObjectId; TICK_COUNT] { &self.ticks }

    #[inline]
    pub const fn logo(&self) -> ObjectId { self.logo }

    #[inline]
    pub const fn ble_icon(&self) -> ObjectId { self.ble_icon }

    #[inline]
    pub const fn notification_icon(&self) -> ObjectId { self.notification_icon }
}

// =============================================================================
// Unit Tests
// =============================================================================
