//! Keyword classifier
//!
//! Maps a normalized message (lower-cased, trimmed) to one of the canned
//! EasyFly replies. Buckets are tested in a fixed priority order and the first
//! one with a keyword hit wins; its sub-intents then pick the exact reply.

mod keywords;
pub mod responses;

use std::fmt;

pub use keywords::{Detail, KeywordTable, Topic};

/// Which bucket and sub-intent a message resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Intent {
    pub topic: Topic,
    pub detail: Option<Detail>,
}

impl Intent {
    pub const UNKNOWN: Self = Self {
        topic: Topic::Unknown,
        detail: None,
    };

    pub const fn response(self) -> &'static str {
        responses::template_for(self.topic, self.detail)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail {
            Some(detail) => write!(f, "{}/{}", self.topic, detail),
            None => write!(f, "{}", self.topic),
        }
    }
}

/// Stateless classifier over an immutable keyword table
#[derive(Debug, Clone, Default)]
pub struct ResponseClassifier {
    table: KeywordTable,
}

impl ResponseClassifier {
    /// Resolve `input` to its intent
    pub fn intent(&self, input: &str) -> Intent {
        self.table
            .buckets()
            .iter()
            .find(|bucket| bucket.matches(input))
            .map_or(Intent::UNKNOWN, |bucket| Intent {
                topic: bucket.topic,
                detail: bucket.refine(input),
            })
    }

    /// Reply text for `input`; never empty
    pub fn classify(&self, input: &str) -> &'static str {
        self.intent(input).response()
    }

    #[cfg(test)]
    pub const fn table(&self) -> &KeywordTable {
        &self.table
    }
}

/// Lower-case and trim a raw message the way the classifier expects it
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ResponseClassifier {
        ResponseClassifier::default()
    }

    fn intent(topic: Topic, detail: Option<Detail>) -> Intent {
        Intent { topic, detail }
    }

    #[test]
    fn test_greeting() {
        let c = classifier();
        let reply = c.classify("hello there");
        assert!(reply.starts_with("Hello! ✈️ Welcome to EasyFly!"));
        assert_eq!(c.classify("good evening"), reply);
        assert_eq!(c.intent("hey"), intent(Topic::Greeting, None));
    }

    #[test]
    fn test_greeting_wins_over_everything() {
        let c = classifier();
        // "hi" is a substring of "which" and "this"
        assert_eq!(c.intent("which gate is my flight"), intent(Topic::Greeting, None));
        assert_eq!(c.intent("hello my flight is delayed").topic, Topic::Greeting);
    }

    #[test]
    fn test_flight_delay() {
        let c = classifier();
        assert_eq!(
            c.intent("my flight is delayed"),
            intent(Topic::Flight, Some(Detail::Delay))
        );
        assert!(c
            .classify("my flight is delayed")
            .contains("Flight delays can be frustrating"));
    }

    #[test]
    fn test_flight_sub_intents() {
        let c = classifier();
        assert_eq!(
            c.intent("boarding pass for tomorrow"),
            intent(Topic::Flight, Some(Detail::Boarding))
        );
        assert_eq!(
            c.intent("my flight got canceled"),
            intent(Topic::Flight, Some(Detail::Cancellation))
        );
        assert_eq!(c.intent("seat upgrade"), intent(Topic::Flight, None));
        assert!(c.classify("seat upgrade").contains("flight questions"));
    }

    #[test]
    fn test_luggage() {
        let c = classifier();
        assert_eq!(
            c.intent("where is my bag"),
            intent(Topic::Luggage, Some(Detail::Tracking))
        );
        assert!(c
            .classify("where is my bag")
            .starts_with("📍 Track your luggage easily"));
        assert_eq!(
            c.intent("my suitcase is missing"),
            intent(Topic::Luggage, Some(Detail::Lost))
        );
        assert_eq!(c.intent("carousel number"), intent(Topic::Luggage, None));
    }

    #[test]
    fn test_account() {
        let c = classifier();
        assert_eq!(
            c.intent("i forgot my password"),
            intent(Topic::Account, Some(Detail::PasswordReset))
        );
        assert!(c
            .classify("i forgot my password")
            .starts_with("🔐 Password reset help"));
        assert_eq!(
            c.intent("how do i register"),
            intent(Topic::Account, Some(Detail::SignUp))
        );
        assert_eq!(c.intent("update my profile"), intent(Topic::Account, None));
    }

    #[test]
    fn test_single_reply_topics() {
        let c = classifier();
        assert_eq!(c.intent("show me the features"), intent(Topic::Features, None));
        assert_eq!(c.intent("visa requirements"), intent(Topic::Travel, None));
        assert_eq!(c.intent("i need support"), intent(Topic::Help, None));
        assert_eq!(c.intent("thank you so much"), intent(Topic::Thanks, None));
        assert!(c.classify("thank you so much").starts_with("You're very welcome!"));
    }

    #[test]
    fn test_help_routes_to_features() {
        // "help" is also a features keyword, and features is tested first
        assert_eq!(classifier().intent("help me").topic, Topic::Features);
    }

    #[test]
    fn test_unknown() {
        let c = classifier();
        assert_eq!(c.intent("asdkjasd"), Intent::UNKNOWN);
        assert!(c.classify("asdkjasd").contains("Try asking something like"));
    }

    #[test]
    fn test_flight_beats_luggage() {
        let c = classifier();
        let luggage = c.table().keywords(Topic::Luggage);
        for input in [
            "my flight landed and my bag is missing",
            "baggage claim at terminal 2",
            "suitcase delayed on my flight",
        ] {
            let mut stripped = input.to_string();
            for keyword in luggage {
                stripped = stripped.replace(keyword, "");
            }
            assert_eq!(c.intent(input).topic, Topic::Flight, "{input}");
            assert_eq!(c.classify(input), c.classify(&stripped), "{input}");
        }
    }

    #[test]
    fn test_idempotent() {
        let c = classifier();
        for input in ["", "where is my bag", "asdkjasd", "thanks"] {
            assert_eq!(c.classify(input), c.classify(input));
        }
    }

    #[test]
    fn test_never_empty() {
        let c = classifier();
        for input in ["", " ", "x", "flight", "bag", "account"] {
            assert!(!c.classify(input).is_empty());
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Where Is My BAG?\n"), "where is my bag?");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_intent_display() {
        assert_eq!(
            intent(Topic::Flight, Some(Detail::Delay)).to_string(),
            "flight/delay"
        );
        assert_eq!(Intent::UNKNOWN.to_string(), "unknown");
    }
}
