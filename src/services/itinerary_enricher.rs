use crate::models::{
    itinerary::{ItineraryData, ItineraryDay, Period, TimeOfDay},
    trip::Trip,
};

pub const DEFAULT_MODEL_TAG: &str = "narrative-blend-v1";

// Placeholder confidence, not a computed value. Kept until a real scoring
// heuristic lands.
pub const ENRICHMENT_SCORE: f64 = 90.0;

/// Narrative templates for the enrichment pass. Placeholders: `{day}`,
/// `{title}`, `{traveler}`, `{interests}`.
#[derive(Debug, Clone)]
pub struct EnrichPhraseSet {
    pub day_sentence: String,
    pub morning_mood: String,
    pub afternoon_mood: String,
    pub evening_mood: String,
    pub generic_mood: String,
    pub profile_with_interests: String,
    pub profile_generic: String,
    pub generic_traveler: String,
}

impl EnrichPhraseSet {
    pub fn english() -> Self {
        Self {
            day_sentence: "This is day {day} of {title}.".to_string(),
            morning_mood: "Mornings here reward an early, unhurried start.".to_string(),
            afternoon_mood: "Afternoons carry the energy of the day, so lean into it.".to_string(),
            evening_mood: "Evenings are for slowing down and taking stock.".to_string(),
            generic_mood: "Let the hours find their own shape.".to_string(),
            profile_with_interests: "Crafted for {traveler}, who enjoys {interests}.".to_string(),
            profile_generic: "Crafted for {traveler}, balancing rest and discovery.".to_string(),
            generic_traveler: "a curious traveler".to_string(),
        }
    }

    // Locale of the original deployment.
    pub fn spanish() -> Self {
        Self {
            day_sentence: "Este es el día {day} de {title}.".to_string(),
            morning_mood: "Las mañanas aquí premian un comienzo temprano y sin prisa.".to_string(),
            afternoon_mood: "Las tardes llevan la energía del día, aprovéchala.".to_string(),
            evening_mood: "Las noches son para bajar el ritmo y hacer balance.".to_string(),
            generic_mood: "Deja que las horas encuentren su propia forma.".to_string(),
            profile_with_interests: "Pensado para {traveler}, que disfruta de {interests}."
                .to_string(),
            profile_generic: "Pensado para {traveler}, equilibrando descanso y descubrimiento."
                .to_string(),
            generic_traveler: "un viajero curioso".to_string(),
        }
    }

    fn slot_mood(&self, slot: TimeOfDay) -> &str {
        match slot {
            TimeOfDay::Morning => &self.morning_mood,
            TimeOfDay::Afternoon => &self.afternoon_mood,
            TimeOfDay::Evening => &self.evening_mood,
            TimeOfDay::FullDay => &self.generic_mood,
        }
    }
}

impl Default for EnrichPhraseSet {
    fn default() -> Self {
        Self::english()
    }
}

/// Enrichment knobs. `model_hint` comes from the request; the default tag is
/// a process-wide setting threaded in from the application boundary.
#[derive(Debug, Clone)]
pub struct EnrichOptions {
    pub model_hint: Option<String>,
    pub default_model_tag: String,
    pub phrases: EnrichPhraseSet,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            model_hint: None,
            default_model_tag: DEFAULT_MODEL_TAG.to_string(),
            phrases: EnrichPhraseSet::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentOutcome {
    pub data: ItineraryData,
    pub model_tag: String,
    pub score: f64,
}

/// Narrative rewrite pass. Every period keeps its slot, title, activity and
/// cost; only `description` grows, with the original text always kept as the
/// leading clause. Re-enriching enriched output is valid and lengthens the
/// text further. Like the generator, this never fails: odd day numbers and
/// empty period lists are defaulted, not rejected.
pub fn enrich(
    data: &ItineraryData,
    trip: &Trip,
    traveler_name: Option<&str>,
    options: &EnrichOptions,
) -> EnrichmentOutcome {
    let profile = traveler_profile(traveler_name, &trip.interests, &options.phrases);

    let days = data
        .days
        .iter()
        .map(|day| {
            let day_number = day.day.max(1);
            let day_sentence = options
                .phrases
                .day_sentence
                .replace("{day}", &day_number.to_string())
                .replace("{title}", trip.title.trim());

            let periods = day
                .periods
                .iter()
                .map(|period| rewrite_period(period, &day_sentence, &profile, &options.phrases))
                .collect();

            ItineraryDay {
                day: day_number,
                date: day.date.clone(),
                periods,
            }
        })
        .collect();

    EnrichmentOutcome {
        data: ItineraryData { days },
        model_tag: resolve_model_tag(options),
        score: ENRICHMENT_SCORE,
    }
}

fn traveler_profile(
    traveler_name: Option<&str>,
    interests: &[String],
    phrases: &EnrichPhraseSet,
) -> String {
    let traveler = match traveler_name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => &phrases.generic_traveler,
    };

    if interests.is_empty() {
        phrases.profile_generic.replace("{traveler}", traveler)
    } else {
        let picks: Vec<&str> = interests.iter().take(3).map(String::as_str).collect();
        phrases
            .profile_with_interests
            .replace("{traveler}", traveler)
            .replace("{interests}", &picks.join(", "))
    }
}

fn rewrite_period(
    period: &Period,
    day_sentence: &str,
    profile: &str,
    phrases: &EnrichPhraseSet,
) -> Period {
    let parts = [
        period.description.as_str(),
        day_sentence,
        phrases.slot_mood(period.time_of_day),
        profile,
    ];

    Period {
        time_of_day: period.time_of_day,
        title: period.title.clone(),
        description: parts.join(" ").trim().to_string(),
        activity_id: period.activity_id.clone(),
        estimated_cost: period.estimated_cost,
    }
}

fn resolve_model_tag(options: &EnrichOptions) -> String {
    match options.model_hint.as_deref().map(str::trim) {
        Some(hint) if !hint.is_empty() => hint.to_string(),
        _ => options.default_model_tag.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traveler_profile_with_interests() {
        let phrases = EnrichPhraseSet::english();
        let interests: Vec<String> = ["snow", "food", "wine", "museums"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let profile = traveler_profile(Some("Ana"), &interests, &phrases);
        assert!(profile.contains("Ana"));
        assert!(profile.contains("snow, food, wine"));
        assert!(!profile.contains("museums"));
    }

    #[test]
    fn test_traveler_profile_defaults() {
        let phrases = EnrichPhraseSet::english();

        let anonymous = traveler_profile(None, &["food".to_string()], &phrases);
        assert!(anonymous.contains("a curious traveler"));

        let blank_name = traveler_profile(Some("   "), &[], &phrases);
        assert!(blank_name.contains("a curious traveler"));
        assert!(blank_name.contains("rest and discovery"));
    }

    #[test]
    fn test_model_tag_resolution() {
        let mut options = EnrichOptions::default();
        assert_eq!(resolve_model_tag(&options), DEFAULT_MODEL_TAG);

        options.model_hint = Some("  ".to_string());
        assert_eq!(resolve_model_tag(&options), DEFAULT_MODEL_TAG);

        options.model_hint = Some(" scenic-v2 ".to_string());
        assert_eq!(resolve_model_tag(&options), "scenic-v2");
    }
}
