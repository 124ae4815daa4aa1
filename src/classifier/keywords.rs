//! Keyword tables
//!
//! Topic buckets and their sub-intent phrases, kept in the order they are
//! evaluated. Matching is plain substring containment on normalized input.

use std::fmt;

/// Top-level topic a message is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Greeting,
    Flight,
    Luggage,
    Account,
    Features,
    Travel,
    Help,
    Thanks,
    /// Nothing matched
    Unknown,
}

impl Topic {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Flight => "flight",
            Self::Luggage => "luggage",
            Self::Account => "account",
            Self::Features => "features",
            Self::Travel => "travel",
            Self::Help => "help",
            Self::Thanks => "thanks",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finer-grained intent inside a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detail {
    Delay,
    Boarding,
    Cancellation,
    Lost,
    Tracking,
    PasswordReset,
    SignUp,
}

impl Detail {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delay => "delay",
            Self::Boarding => "boarding",
            Self::Cancellation => "cancellation",
            Self::Lost => "lost",
            Self::Tracking => "tracking",
            Self::PasswordReset => "password_reset",
            Self::SignUp => "sign_up",
        }
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phrase list selecting a [`Detail`] once its bucket matched
#[derive(Debug, Clone)]
pub struct SubIntent {
    pub detail: Detail,
    pub phrases: &'static [&'static str],
}

/// One topic with its trigger keywords and ordered sub-intents
#[derive(Debug, Clone)]
pub struct KeywordBucket {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub sub_intents: Vec<SubIntent>,
}

impl KeywordBucket {
    /// True if any keyword occurs anywhere in `input`
    pub fn matches(&self, input: &str) -> bool {
        contains_any(input, self.keywords)
    }

    /// First sub-intent whose phrases occur in `input`
    pub fn refine(&self, input: &str) -> Option<Detail> {
        self.sub_intents
            .iter()
            .find(|sub| contains_any(input, sub.phrases))
            .map(|sub| sub.detail)
    }
}

/// Buckets in evaluation order; first match wins
#[derive(Debug, Clone)]
pub struct KeywordTable {
    buckets: Vec<KeywordBucket>,
}

impl KeywordTable {
    pub fn new(buckets: Vec<KeywordBucket>) -> Self {
        Self { buckets }
    }

    /// The EasyFly assistant table
    pub fn standard() -> Self {
        Self::new(vec![
            bucket(Topic::Greeting, GREETING, vec![]),
            bucket(
                Topic::Flight,
                FLIGHT,
                vec![
                    sub(Detail::Delay, &["delay", "delayed", "late"]),
                    sub(Detail::Boarding, &["boarding", "gate", "check-in"]),
                    sub(Detail::Cancellation, &["cancelled", "canceled"]),
                ],
            ),
            bucket(
                Topic::Luggage,
                LUGGAGE,
                vec![
                    sub(Detail::Lost, &["lost", "missing", "can't find"]),
                    sub(Detail::Tracking, &["track", "tracking", "where", "location"]),
                ],
            ),
            bucket(
                Topic::Account,
                ACCOUNT,
                vec![
                    sub(Detail::PasswordReset, &["password", "forgot", "reset"]),
                    sub(Detail::SignUp, &["sign up", "signup", "register", "create"]),
                ],
            ),
            bucket(Topic::Features, FEATURES, vec![]),
            bucket(Topic::Travel, TRAVEL, vec![]),
            bucket(Topic::Help, HELP, vec![]),
            bucket(Topic::Thanks, THANKS, vec![]),
        ])
    }

    pub fn buckets(&self) -> &[KeywordBucket] {
        &self.buckets
    }

    /// Keywords of the bucket for `topic`, empty if the table has none
    #[cfg(test)]
    pub fn keywords(&self, topic: Topic) -> &'static [&'static str] {
        self.buckets
            .iter()
            .find(|b| b.topic == topic)
            .map(|b| b.keywords)
            .unwrap_or_default()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn bucket(
    topic: Topic,
    keywords: &'static [&'static str],
    sub_intents: Vec<SubIntent>,
) -> KeywordBucket {
    KeywordBucket {
        topic,
        keywords,
        sub_intents,
    }
}

const fn sub(detail: Detail, phrases: &'static [&'static str]) -> SubIntent {
    SubIntent { detail, phrases }
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}

const GREETING: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

const FLIGHT: &[&str] = &[
    "flight",
    "flights",
    "boarding",
    "gate",
    "departure",
    "arrival",
    "delay",
    "cancelled",
    "check-in",
    "boarding pass",
    "seat",
    "airline",
    "terminal",
    "runway",
    "pilot",
    "takeoff",
    "landing",
    "schedule",
    "booking",
    "reservation",
    "ticket",
];

const LUGGAGE: &[&str] = &[
    "luggage",
    "baggage",
    "bag",
    "suitcase",
    "carry-on",
    "checked bag",
    "lost luggage",
    "baggage claim",
    "carousel",
    "pickup",
    "tracking",
    "delayed bag",
    "missing bag",
];

const ACCOUNT: &[&str] = &[
    "sign up",
    "signup",
    "register",
    "create account",
    "sign in",
    "signin",
    "log in",
    "login",
    "access account",
    "password",
    "forgot password",
    "reset password",
    "profile",
    "settings",
    "account",
];

const FEATURES: &[&str] = &[
    "features",
    "notifications",
    "alerts",
    "updates",
    "tracking",
    "history",
    "reports",
    "how to use",
    "tutorial",
    "help",
    "guide",
];

const TRAVEL: &[&str] = &[
    "travel",
    "trip",
    "journey",
    "vacation",
    "business trip",
    "airport",
    "security",
    "customs",
    "immigration",
    "visa",
    "passport",
];

const HELP: &[&str] = &["help", "support", "problem", "issue", "trouble"];

const THANKS: &[&str] = &["thank", "thanks", "appreciate"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_order() {
        let table = KeywordTable::standard();
        let order: Vec<Topic> = table.buckets().iter().map(|b| b.topic).collect();
        assert_eq!(
            order,
            vec![
                Topic::Greeting,
                Topic::Flight,
                Topic::Luggage,
                Topic::Account,
                Topic::Features,
                Topic::Travel,
                Topic::Help,
                Topic::Thanks,
            ]
        );
    }

    #[test]
    fn test_substring_match() {
        let table = KeywordTable::standard();
        let luggage = &table.buckets()[2];
        assert!(luggage.matches("my handbags are gone"));
        assert!(luggage.matches("carry-on size"));
        assert!(!luggage.matches("carry on size"));
    }

    #[test]
    fn test_refine_order() {
        let table = KeywordTable::standard();
        let flight = &table.buckets()[1];
        // "delay" is checked before "gate"
        assert_eq!(flight.refine("gate delay"), Some(Detail::Delay));
        assert_eq!(flight.refine("which gate"), Some(Detail::Boarding));
        assert_eq!(flight.refine("flight canceled"), Some(Detail::Cancellation));
        assert_eq!(flight.refine("flight to paris"), None);
    }

    #[test]
    fn test_keywords_lookup() {
        let table = KeywordTable::standard();
        assert!(table.keywords(Topic::Thanks).contains(&"appreciate"));
        assert!(table.keywords(Topic::Unknown).is_empty());
    }
}
