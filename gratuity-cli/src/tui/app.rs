//! Application state and screen management.

use rust_decimal::Decimal;
use tui_input::Input;

use gratuity::prelude::*;

/// Current screen/view in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The calculator screen
    Main,
    /// Help screen
    Help,
}

/// Input widget currently holding focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Bill,
    Percent,
    RoundUp,
}

/// Type of status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Error,
}

/// Main application state.
///
/// The app owns the three mutable inputs; the breakdown is derived and
/// replaced wholesale on every change.
pub struct App {
    /// Whether the app should keep running
    pub running: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Which widget has focus
    pub focus: Focus,
    /// Bill amount text field state
    pub bill_input: Input,
    /// Tip percent text field state
    pub percent_input: Input,
    /// Round-up toggle
    pub round_up: bool,
    /// Locale configuration
    pub config: TipConfig,
    /// Derived calculation result
    pub breakdown: Option<TipBreakdown>,
    /// Status message to display
    pub message: Option<(String, MessageType)>,
}

impl App {
    /// Create a new App instance for the given locale configuration.
    pub fn new(config: TipConfig) -> Self {
        let mut app = Self {
            running: true,
            screen: Screen::Main,
            focus: Focus::Bill,
            bill_input: Input::default(),
            percent_input: Input::default(),
            round_up: false,
            config,
            breakdown: None,
            message: None,
        };
        app.recompute();
        app
    }

    /// Prefill the tip percent field (e.g. from the config file default).
    pub fn prefill_percent(&mut self, percent: Decimal) {
        self.percent_input = Input::default().with_value(percent.to_string());
        self.recompute();
    }

    /// Re-derives the breakdown from the current inputs.
    ///
    /// Called synchronously on every keystroke and toggle; unparseable
    /// text is treated as zero, so this normally cannot fail.
    pub fn recompute(&mut self) {
        let inputs = TipInputs::from_text(
            self.bill_input.value(),
            self.percent_input.value(),
            self.round_up,
        );
        match TipCalculator::from(inputs).compute_tip(&self.config) {
            Ok(breakdown) => self.breakdown = Some(breakdown),
            Err(e) => {
                self.breakdown = None;
                self.message = Some((e.to_string(), MessageType::Error));
            }
        }
    }

    /// Flip the round-up toggle and recompute.
    pub fn toggle_round_up(&mut self) {
        self.round_up = !self.round_up;
        self.recompute();
    }

    /// Cycle to the next supported locale and recompute.
    pub fn cycle_locale(&mut self) {
        let next = self.config.locale.next();
        self.config = self.config.clone().with_locale(next);
        self.message = Some((
            format!("Locale: {} ({})", next.as_str(), next.currency_code()),
            MessageType::Info,
        ));
        self.recompute();
    }

    /// Move focus to the next widget (Bill -> Percent -> RoundUp -> Bill).
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Bill => Focus::Percent,
            Focus::Percent => Focus::RoundUp,
            Focus::RoundUp => Focus::Bill,
        };
    }

    /// Move focus to the previous widget.
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Bill => Focus::RoundUp,
            Focus::Percent => Focus::Bill,
            Focus::RoundUp => Focus::Percent,
        };
    }

    /// Mutable access to the focused text field, if focus is on one.
    pub fn active_input(&mut self) -> Option<&mut Input> {
        match self.focus {
            Focus::Bill => Some(&mut self.bill_input),
            Focus::Percent => Some(&mut self.percent_input),
            Focus::RoundUp => None,
        }
    }

    /// The display-ready view of the current result.
    pub fn display(&self) -> Option<TipDisplay> {
        self.breakdown.as_ref().map(|b| b.to_display(&self.config))
    }
}
