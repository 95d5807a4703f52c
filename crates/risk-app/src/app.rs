//! Application state and message handling

use std::path::PathBuf;

use iced::widget::{column, container, text, Space};
use iced::{Element, Length, Task};
use risk_core::{format_level, format_max_level, save_pointer, GaugeEngine, InputPhase};
use risk_widgets::{risk_level_panel, GaugeInput, LevelColors};

/// Height of the gauge column in pixels
const GAUGE_HEIGHT: f32 = 480.0;

#[derive(Debug, Clone)]
pub enum Message {
    Gauge(GaugeInput),
}

pub struct RiskApp {
    engine: GaugeEngine,
    colors: LevelColors,
    /// Where the pointer is saved after each drag
    state_path: PathBuf,
}

impl RiskApp {
    pub fn new(mut engine: GaugeEngine, colors: LevelColors, state_path: PathBuf) -> Self {
        // Resolve the default or restored pointer for the fixed gauge height
        if let Err(e) = engine.redraw(GAUGE_HEIGHT) {
            log::warn!("RiskApp: initial redraw failed: {}", e);
        }

        Self {
            engine,
            colors,
            state_path,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gauge(GaugeInput { input, area_height }) => {
                self.engine.handle_input(input, area_height);
                if input.phase == InputPhase::Up {
                    self.persist_pointer();
                }
            }
        }
        Task::none()
    }

    fn persist_pointer(&self) {
        let Some(saved) = self.engine.save() else {
            return;
        };
        if let Err(e) = save_pointer(&saved, &self.state_path) {
            log::warn!("persist_pointer: {:#}", e);
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let scale = self.engine.scale();
        let label = column![
            text(format!("{} Critical", scale.max_level())).size(14),
            Space::new().height(Length::Fill),
            text(format!("{} Safe", scale.min_level())).size(14),
        ];

        let panel = risk_level_panel(label, &self.engine, &self.colors, GAUGE_HEIGHT, Message::Gauge);

        let current = match self.engine.current_level() {
            Some(level) => format!("{}{}", format_level(level), format_max_level(scale.max_level())),
            None => String::from("not set"),
        };

        container(
            column![
                text("Risk level").size(20),
                panel,
                text(format!("Current: {}", current)).size(14),
            ]
            .spacing(12),
        )
        .padding(20)
        .into()
    }
}
