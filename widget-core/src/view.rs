use std::fmt;

use crate::controller::{SearchResult, SearchState};

/// One rendered line of the widget body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewLine {
    Error(String),
    Temperature(String),
    Condition(String),
    Location(String),
}

impl fmt::Display for ViewLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewLine::Error(message) => f.write_str(message),
            ViewLine::Temperature(phrase) => f.write_str(phrase),
            ViewLine::Condition(text) => write!(f, "Current weather: {text}"),
            ViewLine::Location(name) => write!(f, "Location: {name}"),
        }
    }
}

/// What the host should show for a given [`SearchState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub button_label: &'static str,
    pub button_enabled: bool,
    pub lines: Vec<ViewLine>,
}

impl View {
    pub fn render(state: &SearchState) -> Self {
        let loading = state.is_loading();

        let lines = match &state.result {
            None => Vec::new(),
            Some(SearchResult::Error(err)) => vec![ViewLine::Error(err.to_string())],
            Some(SearchResult::Weather(record)) => vec![
                ViewLine::Temperature(record.phrase().to_string()),
                ViewLine::Condition(record.description.clone()),
                ViewLine::Location(record.location.clone()),
            ],
        };

        Self {
            button_label: if loading { "Loading..." } else { "Search" },
            button_enabled: !loading,
            lines,
        }
    }
}

impl From<&SearchState> for View {
    fn from(state: &SearchState) -> Self {
        Self::render(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QueryError, TemperatureUnit, WeatherRecord, controller::Status};

    #[test]
    fn idle_renders_nothing() {
        let view = View::render(&SearchState::default());
        assert!(view.lines.is_empty());
        assert_eq!(view.button_label, "Search");
        assert!(view.button_enabled);
    }

    #[test]
    fn loading_disables_button() {
        let state = SearchState { status: Status::Loading, ..SearchState::default() };
        let view = View::render(&state);
        assert_eq!(view.button_label, "Loading...");
        assert!(!view.button_enabled);
        assert!(view.lines.is_empty());
    }

    #[test]
    fn failure_renders_single_error_line() {
        let state = SearchState {
            status: Status::Failure,
            result: Some(SearchResult::Error(QueryError::InvalidLocation)),
            ..SearchState::default()
        };
        let view = View::render(&state);
        assert_eq!(view.lines, vec![ViewLine::Error("Invalid city name. Please try again.".into())]);
    }

    #[test]
    fn success_renders_three_lines() {
        let state = SearchState {
            input_text: "paris".into(),
            status: Status::Success,
            result: Some(SearchResult::Weather(WeatherRecord {
                temperature: 22.5,
                description: "Partly cloudy".into(),
                location: "Paris".into(),
                unit: TemperatureUnit::Celsius,
            })),
        };

        let rendered: Vec<String> = View::render(&state).lines.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["The weather is pleasant.", "Current weather: Partly cloudy", "Location: Paris"]
        );
    }
}
