use crate::services::itinerary_enricher::{EnrichPhraseSet, DEFAULT_MODEL_TAG};
use crate::services::itinerary_generator::{GeneratorConfig, PhraseSet};

/// Process-wide settings, read from the environment exactly once at startup
/// and shared through `web::Data`. The generator and enricher never read the
/// environment themselves.
#[derive(Clone)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub enrich_model_tag: String,
    pub enrich_phrases: EnrichPhraseSet,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            enrich_model_tag: DEFAULT_MODEL_TAG.to_string(),
            enrich_phrases: EnrichPhraseSet::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(days) = std::env::var("ITINERARY_DEFAULT_DAYS") {
            if let Ok(days) = days.parse::<u32>() {
                if days >= 1 {
                    config.generator.default_day_count = days;
                }
            }
        }

        // The locale covers the whole pipeline: generation and enrichment
        // phrases switch together so enriched text stays in one language.
        if let Ok(locale) = std::env::var("ITINERARY_LOCALE") {
            if locale.eq_ignore_ascii_case("es") {
                config.generator.phrases = PhraseSet::spanish();
                config.enrich_phrases = EnrichPhraseSet::spanish();
            }
        }

        if let Ok(tag) = std::env::var("ITINERARY_MODEL_TAG") {
            if !tag.trim().is_empty() {
                config.enrich_model_tag = tag.trim().to_string();
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_spanish_locale_switches_both_phrase_sets() {
        std::env::set_var("ITINERARY_LOCALE", "es");
        let config = AppConfig::from_env();
        std::env::remove_var("ITINERARY_LOCALE");

        assert_eq!(config.generator.phrases.trip_title_prefix, "Viaje a ");
        assert!(config.enrich_phrases.day_sentence.contains("día"));
        assert_eq!(config.enrich_phrases.generic_traveler, "un viajero curioso");
    }

    #[test]
    #[serial]
    fn test_default_locale_is_english() {
        std::env::remove_var("ITINERARY_LOCALE");
        let config = AppConfig::from_env();

        assert_eq!(config.generator.phrases.trip_title_prefix, "Trip to ");
        assert!(config.enrich_phrases.day_sentence.contains("day"));
    }
}
