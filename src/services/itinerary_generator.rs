use chrono::{Duration, NaiveDate};

use crate::models::{
    activity::Activity,
    itinerary::{ItineraryData, ItineraryDay, Period, TimeOfDay},
    trip::Trip,
};

const DEFAULT_DAY_COUNT: u32 = 3;
const MAX_DAY_COUNT: u32 = 30;
const SLOTS_PER_DAY: usize = 3;
const DATE_FORMAT: &str = "%Y-%m-%d";

const DAY_SLOTS: [TimeOfDay; SLOTS_PER_DAY] =
    [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

/// Narrative templates for one locale. Placeholders (`{destination}`,
/// `{name}`, `{category}`, `{price}`, `{interests}`, `{amount}`) are
/// substituted by the clause builders.
#[derive(Debug, Clone)]
pub struct PhraseSet {
    pub trip_title_prefix: String,
    pub morning_opener: String,
    pub afternoon_opener: String,
    pub evening_opener: String,
    pub generic_opener: String,
    pub explore_title: String,
    pub activity_detail: String,
    pub free_exploration: String,
    pub interest_clause: String,
    pub interest_joiner: String,
    pub budget_sentence: String,
}

impl PhraseSet {
    pub fn english() -> Self {
        Self {
            trip_title_prefix: "Trip to ".to_string(),
            morning_opener: "It's a good time to start the day calmly and get your bearings."
                .to_string(),
            afternoon_opener: "The afternoon is perfect for the main outing of the day."
                .to_string(),
            evening_opener: "Wind down the evening at a relaxed pace.".to_string(),
            generic_opener: "A flexible block to fill however you like.".to_string(),
            explore_title: "Explore {destination}".to_string(),
            activity_detail:
                "A solid pick is {name}, a {category} option in the {price} price range."
                    .to_string(),
            free_exploration: "No booked activity here, so wander {destination} at your own rhythm."
                .to_string(),
            interest_clause: "A good fit for travelers who enjoy {interests}.".to_string(),
            interest_joiner: " and ".to_string(),
            budget_sentence: "Plan on roughly {amount} for this block.".to_string(),
        }
    }

    // Locale of the original deployment.
    pub fn spanish() -> Self {
        Self {
            trip_title_prefix: "Viaje a ".to_string(),
            morning_opener: "Es un buen momento para empezar el día con calma y ubicarte."
                .to_string(),
            afternoon_opener: "La tarde es ideal para el plan fuerte del día.".to_string(),
            evening_opener: "Cierra la jornada a un ritmo tranquilo.".to_string(),
            generic_opener: "Un bloque flexible para armar a tu gusto.".to_string(),
            explore_title: "Explora {destination}".to_string(),
            activity_detail:
                "Una buena opción es {name}, una propuesta de {category} de precio {price}."
                    .to_string(),
            free_exploration: "Sin actividad reservada, así que recorre {destination} a tu ritmo."
                .to_string(),
            interest_clause: "Ideal para viajeros que disfrutan de {interests}.".to_string(),
            interest_joiner: " y ".to_string(),
            budget_sentence: "Calcula unos {amount} para este bloque.".to_string(),
        }
    }

    fn slot_opener(&self, slot: TimeOfDay) -> &str {
        match slot {
            TimeOfDay::Morning => &self.morning_opener,
            TimeOfDay::Afternoon => &self.afternoon_opener,
            TimeOfDay::Evening => &self.evening_opener,
            TimeOfDay::FullDay => &self.generic_opener,
        }
    }
}

impl Default for PhraseSet {
    fn default() -> Self {
        Self::english()
    }
}

/// Generation knobs, built once at the application boundary and threaded in.
/// The generator itself reads no ambient state.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub default_day_count: u32,
    pub max_day_count: u32,
    pub phrases: PhraseSet,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_day_count: DEFAULT_DAY_COUNT,
            max_day_count: MAX_DAY_COUNT,
            phrases: PhraseSet::default(),
        }
    }
}

/// Deterministic rules engine. Never fails: malformed dates, reversed
/// ranges, missing budgets and empty activity lists all degrade to
/// documented defaults, so the caller always gets at least one day with
/// three periods.
pub fn generate(trip: &Trip, activities: &[Activity], config: &GeneratorConfig) -> ItineraryData {
    let (day_count, anchor_date) = resolve_day_span(
        &trip.start_date,
        &trip.end_date,
        config.default_day_count,
        config.max_day_count,
    );

    let per_slot_budget = per_slot_budget(trip.budget, day_count);
    let label = destination_label(&trip.title, &config.phrases.trip_title_prefix);
    let interest_clause = interest_clause(&trip.interests, &config.phrases);
    let budget_clause = per_slot_budget
        .map(|amount| config.phrases.budget_sentence.replace("{amount}", &format!("{:.0}", amount)));

    let mut days = Vec::with_capacity(day_count as usize);
    for i in 0..day_count {
        let date = anchor_date
            .map(|start| (start + Duration::days(i as i64)).format(DATE_FORMAT).to_string());

        let mut periods = Vec::with_capacity(SLOTS_PER_DAY);
        for (s, slot) in DAY_SLOTS.iter().enumerate() {
            let activity = if activities.is_empty() {
                None
            } else {
                Some(&activities[(i as usize * SLOTS_PER_DAY + s) % activities.len()])
            };

            periods.push(build_period(
                *slot,
                activity,
                &label,
                interest_clause.as_deref(),
                budget_clause.as_deref(),
                per_slot_budget,
                &config.phrases,
            ));
        }

        days.push(ItineraryDay {
            day: i + 1,
            date,
            periods,
        });
    }

    ItineraryData { days }
}

/// Day count plus the anchor date for per-day `date` fields. Unparseable or
/// reversed dates fall back to the default length with no anchor.
fn resolve_day_span(
    start_date: &str,
    end_date: &str,
    default_day_count: u32,
    max_day_count: u32,
) -> (u32, Option<NaiveDate>) {
    let start = NaiveDate::parse_from_str(start_date.trim(), DATE_FORMAT).ok();
    let end = NaiveDate::parse_from_str(end_date.trim(), DATE_FORMAT).ok();

    match (start, end) {
        (Some(start), Some(end)) if end >= start => {
            let span = (end - start).num_days() as u32 + 1;
            (span.clamp(1, max_day_count.max(1)), Some(start))
        }
        _ => (default_day_count.max(1), None),
    }
}

/// `round(budget / day_count / 3)`, or None when there is no usable budget.
fn per_slot_budget(budget: Option<f64>, day_count: u32) -> Option<f64> {
    budget
        .filter(|b| *b > 0.0)
        .map(|b| (b / day_count as f64 / SLOTS_PER_DAY as f64).round())
}

/// Display name for the locale, stripping the localized "Trip to " prefix.
fn destination_label(title: &str, prefix: &str) -> String {
    let stripped = title.strip_prefix(prefix).unwrap_or(title).trim();
    if stripped.is_empty() {
        title.trim().to_string()
    } else {
        stripped.to_string()
    }
}

fn interest_clause(interests: &[String], phrases: &PhraseSet) -> Option<String> {
    if interests.is_empty() {
        return None;
    }
    let picks: Vec<&str> = interests.iter().take(2).map(String::as_str).collect();
    Some(
        phrases
            .interest_clause
            .replace("{interests}", &picks.join(&phrases.interest_joiner)),
    )
}

fn build_period(
    slot: TimeOfDay,
    activity: Option<&Activity>,
    destination_label: &str,
    interest_clause: Option<&str>,
    budget_clause: Option<&str>,
    estimated_cost: Option<f64>,
    phrases: &PhraseSet,
) -> Period {
    let title = match activity {
        Some(activity) => activity.name.clone(),
        None => phrases.explore_title.replace("{destination}", destination_label),
    };

    let detail = match activity {
        Some(activity) => phrases
            .activity_detail
            .replace("{name}", &activity.name)
            .replace("{category}", &activity.category)
            .replace("{price}", activity.price_range.label()),
        None => phrases
            .free_exploration
            .replace("{destination}", destination_label),
    };

    let mut parts: Vec<&str> = vec![phrases.slot_opener(slot), detail.as_str()];
    if let Some(clause) = interest_clause {
        parts.push(clause);
    }
    if let Some(clause) = budget_clause {
        parts.push(clause);
    }

    Period {
        time_of_day: slot,
        title,
        description: parts.join(" ").trim().to_string(),
        activity_id: activity.and_then(|a| a.id.map(|id| id.to_hex())),
        estimated_cost,
    }
}
