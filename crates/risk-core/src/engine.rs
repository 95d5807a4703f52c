//! Gauge engine: scale + pointer + the redraw pass
//!
//! The host forwards input and area sizes here and renders the resulting
//! [`GaugeReading`]. The layout is cached by area height; changing height
//! recomputes it.

use crate::band::select_band;
use crate::error::GaugeResult;
use crate::interaction::{InputOutcome, InteractionController, PointerInput};
use crate::layout::{Pill, PillLayout};
use crate::mapper::PositionMapper;
use crate::persistence::SavedPointer;
use crate::scale::LevelScale;

/// Everything a frame needs to draw the gauge
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeReading {
    pub layout: PillLayout,
    pub mapper: PositionMapper,
    /// Pointer Y after clamping
    pub pointer_y: f32,
    /// Continuous level at the pointer
    pub level: f32,
    /// Pill whose band contains `level`
    pub selected: Option<Pill>,
}

/// Geometry and interaction engine for one gauge
#[derive(Debug, Clone)]
pub struct GaugeEngine {
    scale: LevelScale,
    text_height: f32,
    controller: InteractionController,
    layout: Option<PillLayout>,
}

impl GaugeEngine {
    /// Create an engine
    ///
    /// `text_height` is the measured height of a readout digit at
    /// `scale.text_size()`.
    pub fn new(scale: LevelScale, text_height: f32) -> Self {
        Self {
            scale,
            text_height,
            controller: InteractionController::new(),
            layout: None,
        }
    }

    pub fn scale(&self) -> &LevelScale {
        &self.scale
    }

    pub fn text_height(&self) -> f32 {
        self.text_height
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Raw pointer Y (unclamped until the next redraw)
    pub fn pointer_y(&self) -> Option<f32> {
        self.controller.pointer().y
    }

    /// Level at the pointer as of the last redraw pass
    pub fn current_level(&self) -> Option<f32> {
        let layout = self.layout.as_ref()?;
        let y = self.pointer_y()?;
        let mapper = PositionMapper::for_layout(layout, &self.scale).ok()?;
        Some(mapper.to_level(layout.clamp_y(y)))
    }

    /// Feed one input event, then run the redraw pass for `area_height`
    ///
    /// Returns the controller outcome; the event is never captured.
    pub fn handle_input(&mut self, input: PointerInput, area_height: f32) -> InputOutcome {
        let outcome = self.controller.handle(input);
        if outcome.redraw {
            if let Err(e) = self.redraw(area_height) {
                log::debug!("GaugeEngine: redraw skipped: {}", e);
            }
        }
        outcome
    }

    /// Redraw pass: lay out, default or clamp the pointer, derive the level
    ///
    /// Commits the clamped pointer so `min_y <= y <= max_y` holds afterwards.
    pub fn redraw(&mut self, area_height: f32) -> GaugeResult<GaugeReading> {
        let layout = match self.layout.take() {
            Some(layout) if layout.area_height() == area_height => layout,
            _ => PillLayout::compute(area_height, self.text_height, &self.scale)?,
        };
        let reading = self.resolve(layout.clone())?;
        self.controller.set_pointer_y(reading.pointer_y);
        self.layout = Some(layout);
        Ok(reading)
    }

    /// Same as [`redraw`](Self::redraw) without committing anything
    pub fn reading(&self, area_height: f32) -> GaugeResult<GaugeReading> {
        let layout = match &self.layout {
            Some(layout) if layout.area_height() == area_height => layout.clone(),
            _ => PillLayout::compute(area_height, self.text_height, &self.scale)?,
        };
        self.resolve(layout)
    }

    fn resolve(&self, layout: PillLayout) -> GaugeResult<GaugeReading> {
        let mapper = PositionMapper::for_layout(&layout, &self.scale)?;
        let raw_y = self
            .pointer_y()
            .unwrap_or_else(|| mapper.to_y(self.scale.default_level()));
        let pointer_y = layout.clamp_y(raw_y);
        let level = mapper.to_level(pointer_y);
        let selected = select_band(level, layout.pills()).copied();

        Ok(GaugeReading {
            layout,
            mapper,
            pointer_y,
            level,
            selected,
        })
    }

    /// Capture the pointer for a later [`restore`](Self::restore)
    ///
    /// `None` while the pointer has never been set or resolved.
    pub fn save(&self) -> Option<SavedPointer> {
        self.pointer_y().map(|pointer_y| SavedPointer { pointer_y })
    }

    /// Replay a saved pointer and redraw with the last known area
    pub fn restore(&mut self, saved: SavedPointer) {
        if !saved.pointer_y.is_finite() {
            log::warn!("GaugeEngine: ignoring non-finite saved pointer {}", saved.pointer_y);
            return;
        }
        self.controller.set_pointer_y(saved.pointer_y);
        log::debug!("GaugeEngine: restored pointer y={}", saved.pointer_y);

        if let Some(area_height) = self.layout.as_ref().map(PillLayout::area_height) {
            if let Err(e) = self.redraw(area_height) {
                log::debug!("GaugeEngine: redraw after restore skipped: {}", e);
            }
        }
    }
}
