pub const CROP_REPLY: &str = "For this season, wheat and mustard are recommended.";
pub const WEATHER_REPLY: &str = "Today’s forecast: Sunny with mild rainfall chances.";
pub const FALLBACK_REPLY: &str = "I’m still learning. Please ask about crops or weather.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Crop,
    Weather,
    Unknown,
}

impl Topic {
    pub fn reply(self) -> &'static str {
        match self {
            Topic::Crop => CROP_REPLY,
            Topic::Weather => WEATHER_REPLY,
            Topic::Unknown => FALLBACK_REPLY,
        }
    }
}

/// Classify a query by keyword. Crop wins over weather when both appear.
pub fn detect_topic(query: &str) -> Topic {
    let query_lower = query.to_lowercase();

    if query_lower.contains("crop") {
        Topic::Crop
    } else if query_lower.contains("weather") {
        Topic::Weather
    } else {
        Topic::Unknown
    }
}

pub fn generate_reply(query: &str) -> &'static str {
    detect_topic(query).reply()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_inside_a_word_still_matches() {
        assert_eq!(detect_topic("Crops"), Topic::Crop);
        assert_eq!(detect_topic("weatherproof"), Topic::Weather);
    }

    #[test]
    fn empty_query_is_unknown() {
        assert_eq!(detect_topic(""), Topic::Unknown);
        assert_eq!(generate_reply(""), FALLBACK_REPLY);
    }
}
