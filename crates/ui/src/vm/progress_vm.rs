use course_core::model::Percentage;
use services::NavigationOutcome;

/// Fill bar for overall course progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub percent: u8,
    /// CSS width, e.g. `"20%"`.
    pub width: String,
    /// Tooltip, e.g. `"20% complete"`.
    pub title: String,
}

impl ProgressVm {
    #[must_use]
    pub fn from_percentage(percentage: Percentage) -> Self {
        Self {
            percent: percentage.value(),
            width: percentage.to_string(),
            title: percentage.label(),
        }
    }

    /// Display after graduation: always a full bar, whatever the arithmetic says.
    #[must_use]
    pub fn graduated() -> Self {
        Self::from_percentage(Percentage::FULL)
    }

    #[must_use]
    pub fn for_outcome(outcome: &NavigationOutcome) -> Self {
        if outcome.graduated {
            Self::graduated()
        } else {
            Self::from_percentage(outcome.percentage)
        }
    }
}

/// CSS width for the scroll-based reading bar.
#[must_use]
pub fn reading_width(percent: f64) -> String {
    format!("{:.1}%", percent.clamp(0.0, 100.0))
}
