use tracing::{debug, instrument};

use super::model::{Category, Priority, Suggestion};
use crate::weather::WeatherSnapshot;

/// Number of suggestions exposed per evaluation.
pub const MAX_SUGGESTIONS: usize = 5;

type Rule = fn(&WeatherSnapshot, &mut Vec<Suggestion>);

// Evaluation order is also the truncation order: items are never re-sorted by
// priority, so a rule further down the table loses out when the list is full.
const RULES: &[(&str, Rule)] = &[
    ("cold_focus", cold_focus),
    ("warm_outdoor", warm_outdoor),
    ("rain", rain),
    ("storm", storm),
    ("clear_sky", clear_sky),
    ("cloudy", cloudy),
    ("high_humidity", high_humidity),
    ("windy", windy),
    ("winter_season", winter_season),
    ("summary", summary),
];

/// Run every rule against the snapshot and keep the first [`MAX_SUGGESTIONS`].
#[instrument(skip(snapshot), fields(temp = snapshot.temperature_c, condition = %snapshot.condition_primary))]
pub fn evaluate(snapshot: &WeatherSnapshot) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for (name, rule) in RULES {
        let before = suggestions.len();
        rule(snapshot, &mut suggestions);
        if suggestions.len() > before {
            debug!("Rule {} emitted {} suggestion(s)", name, suggestions.len() - before);
        }
    }

    if suggestions.len() > MAX_SUGGESTIONS {
        debug!(
            "Truncating {} suggestions to {}",
            suggestions.len(),
            MAX_SUGGESTIONS
        );
        suggestions.truncate(MAX_SUGGESTIONS);
    }

    suggestions
}

fn cold_focus(snapshot: &WeatherSnapshot, out: &mut Vec<Suggestion>) {
    if snapshot.temperature_c < 10.0 {
        out.push(Suggestion::new(
            Category::Productivity,
            "☕",
            "Perfect Indoor Focus Time",
            "Cold weather = cozy coding! Great for tackling complex bugs and deep work.",
            Priority::High,
        ));
        out.push(Suggestion::new(
            Category::Team,
            "🏠",
            "Virtual Meeting Day",
            "Consider scheduling video calls instead of outdoor client meetings.",
            Priority::Medium,
        ));
    }
}

fn warm_outdoor(snapshot: &WeatherSnapshot, out: &mut Vec<Suggestion>) {
    if snapshot.temperature_c > 25.0 {
        out.push(Suggestion::new(
            Category::Team,
            "🌞",
            "Outdoor Meeting Weather",
            "Great day for walking meetings, outdoor brainstorming, or client visits!",
            Priority::High,
        ));
        out.push(Suggestion::new(
            Category::Health,
            "💧",
            "Stay Hydrated",
            "Warm weather reminder: Keep water nearby during long coding sessions.",
            Priority::Medium,
        ));
    }
}

fn rain(snapshot: &WeatherSnapshot, out: &mut Vec<Suggestion>) {
    if snapshot.condition_contains("rain") {
        out.push(Suggestion::new(
            Category::Productivity,
            "🌧️",
            "Rain = Debug Day",
            "Perfect weather for indoor debugging sessions and code reviews!",
            Priority::High,
        ));
        out.push(Suggestion::new(
            Category::Planning,
            "📅",
            "Postpone Outdoor Tasks",
            "Consider rescheduling any outdoor client meetings or site visits.",
            Priority::Medium,
        ));
    }
}

fn storm(snapshot: &WeatherSnapshot, out: &mut Vec<Suggestion>) {
    if snapshot.condition_contains("storm") || snapshot.condition_contains("thunder") {
        out.push(Suggestion::new(
            Category::Alert,
            "⚡",
            "Storm Alert",
            "Severe weather detected. Ensure backup systems are ready and remote work is enabled.",
            Priority::Critical,
        ));
    }
}

fn clear_sky(snapshot: &WeatherSnapshot, out: &mut Vec<Suggestion>) {
    if snapshot.condition_contains("clear") || snapshot.condition_contains("sun") {
        out.push(Suggestion::new(
            Category::Team,
            "🌅",
            "Team Morale Boost",
            "Sunny weather ahead! Great day for team bonding activities or outdoor lunch breaks.",
            Priority::Medium,
        ));
    }
}

fn cloudy(snapshot: &WeatherSnapshot, out: &mut Vec<Suggestion>) {
    if snapshot.condition_contains("cloud") {
        out.push(Suggestion::new(
            Category::Productivity,
            "☁️",
            "Steady Work Weather",
            "Cloudy skies are perfect for maintaining focus without weather distractions.",
            Priority::Low,
        ));
    }
}

fn high_humidity(snapshot: &WeatherSnapshot, out: &mut Vec<Suggestion>) {
    if snapshot.humidity_percent > 80 {
        out.push(Suggestion::new(
            Category::Health,
            "💨",
            "High Humidity Alert",
            "Consider improving workspace ventilation for comfort during long work sessions.",
            Priority::Medium,
        ));
    }
}

fn windy(snapshot: &WeatherSnapshot, out: &mut Vec<Suggestion>) {
    if snapshot.wind_speed_ms > 10.0 {
        out.push(Suggestion::new(
            Category::Planning,
            "💨",
            "Windy Conditions",
            "Strong winds detected. Indoor meetings recommended over outdoor activities.",
            Priority::Medium,
        ));
    }
}

fn winter_season(snapshot: &WeatherSnapshot, out: &mut Vec<Suggestion>) {
    // December, January, February
    if matches!(snapshot.observed_month, 11 | 0 | 1) {
        out.push(Suggestion::new(
            Category::Motivation,
            "❄️",
            "Winter Productivity Mode",
            "Embrace the cozy season! Perfect time for planning Q1 goals and code refactoring.",
            Priority::Low,
        ));
    }
}

fn summary(snapshot: &WeatherSnapshot, out: &mut Vec<Suggestion>) {
    let temp = snapshot.temperature_c;
    let day_kind = if temp < 15.0 {
        "focused indoor work"
    } else if temp > 25.0 {
        "collaborative outdoor activities"
    } else {
        "balanced indoor-outdoor tasks"
    };

    out.push(Suggestion::new(
        Category::General,
        "🎯",
        "Weather-Optimized Workflow",
        format!(
            "Current conditions ({}°C, {}) are ideal for {}.",
            temp, snapshot.condition_primary, day_kind
        ),
        Priority::Low,
    ));
}
