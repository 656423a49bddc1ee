//! Bet-related state.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Backend-assigned bet identifier.
///
/// The backend may encode ids as strings or integers; both are held as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BetId(String);

impl BetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Int(n) => Self(n.to_string()),
        })
    }
}

/// A bet as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    /// Bet ID.
    pub id: BetId,
    /// Short label.
    pub topic: String,
    /// Wager conditions.
    pub terms: String,
    /// Participant names, in creation order.
    #[serde(default)]
    pub participants: Vec<String>,
    /// Signer name to signing time.
    #[serde(default, deserialize_with = "deserialize_signatures")]
    pub signatures: BTreeMap<String, SignedAt>,
    /// Backend-generated link for sharing the bet.
    #[serde(default)]
    pub shareable_link: String,
}

impl Bet {
    /// Check whether `name` has signed.
    pub fn is_signed_by(&self, name: &str) -> bool {
        self.signatures.contains_key(name)
    }

    /// Participants without a recorded signature.
    pub fn awaiting_signature(&self) -> Vec<&str> {
        self.participants
            .iter()
            .filter(|p| !self.is_signed_by(p))
            .map(String::as_str)
            .collect()
    }

    /// Comma-joined participant list for display.
    pub fn participants_line(&self) -> String {
        self.participants.join(", ")
    }
}

/// When a signer signed, as reported by the backend.
///
/// Timestamps that cannot be interpreted are kept verbatim so one odd entry
/// never rejects the bet it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignedAt {
    Parsed(DateTime<Utc>),
    Raw(String),
}

impl SignedAt {
    /// Calendar date for display, or the raw text as received.
    pub fn date_label(&self) -> String {
        match self {
            Self::Parsed(at) => at.format("%Y-%m-%d").to_string(),
            Self::Raw(raw) => raw.clone(),
        }
    }

    /// Interpret a JSON timestamp: RFC 3339, ISO 8601 with `T` or a space
    /// separator (naive values taken as UTC), or Unix seconds (integer or
    /// fractional).
    fn from_json(value: Value) -> Self {
        match value {
            Value::String(text) => parse_timestamp(&text).map_or(Self::Raw(text), Self::Parsed),
            Value::Number(number) => number
                .as_i64()
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .or_else(|| number.as_f64().and_then(from_fractional_seconds))
                .map_or_else(|| Self::Raw(number.to_string()), Self::Parsed),
            other => Self::Raw(other.to_string()),
        }
    }
}

impl From<DateTime<Utc>> for SignedAt {
    fn from(at: DateTime<Utc>) -> Self {
        Self::Parsed(at)
    }
}

impl Serialize for SignedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Parsed(at) => serializer.serialize_str(&at.to_rfc3339()),
            Self::Raw(raw) => serializer.serialize_str(raw),
        }
    }
}

fn deserialize_signatures<'de, D>(deserializer: D) -> Result<BTreeMap<String, SignedAt>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| (name, SignedAt::from_json(value)))
        .collect())
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(s) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(at) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(at.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|naive| naive.and_utc())
}

fn from_fractional_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

/// State for the cached bet list.
#[derive(Debug, Default)]
pub struct BetState {
    /// Cached bets in arrival order.
    pub bets: Vec<Bet>,
    /// Currently selected bet index.
    pub selected_index: Option<usize>,
    /// Last full list fetch.
    pub last_updated: Option<DateTime<Utc>>,
}

impl BetState {
    /// Get the currently selected bet.
    pub fn selected_bet(&self) -> Option<&Bet> {
        self.selected_index.and_then(|i| self.bets.get(i))
    }

    /// Replace the whole cache with a fresh list.
    pub fn replace_all(&mut self, bets: Vec<Bet>) {
        self.bets = bets;
        self.last_updated = Some(Utc::now());
        self.clamp_selection();
    }

    /// Append a newly created bet.
    pub fn append(&mut self, bet: Bet) {
        self.bets.push(bet);
        if self.selected_index.is_none() {
            self.selected_index = Some(0);
        }
    }

    /// Replace the entry with `id`. Returns false if no entry matched.
    pub fn replace(&mut self, id: &BetId, bet: Bet) -> bool {
        match self.bets.iter_mut().find(|b| &b.id == id) {
            Some(slot) => {
                *slot = bet;
                true
            }
            None => false,
        }
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    /// Move the selection by `delta`, staying within bounds.
    pub fn scroll(&mut self, delta: i32) {
        if self.bets.is_empty() {
            self.selected_index = None;
            return;
        }
        let current = self.selected_index.unwrap_or(0) as i32;
        let max_index = self.bets.len().saturating_sub(1);
        let new_index = (current + delta).max(0) as usize;
        self.selected_index = Some(new_index.min(max_index));
    }

    /// Select the first bet.
    pub fn go_to_top(&mut self) {
        self.selected_index = if self.bets.is_empty() { None } else { Some(0) };
    }

    /// Select the last bet.
    pub fn go_to_bottom(&mut self) {
        self.selected_index = self.bets.len().checked_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected_index = match (self.selected_index, self.bets.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn bet(id: &str) -> Bet {
        Bet {
            id: BetId::new(id),
            topic: format!("topic {id}"),
            terms: "loser buys lunch".to_string(),
            participants: vec!["ann".to_string(), "bob".to_string()],
            signatures: BTreeMap::new(),
            shareable_link: format!("https://bets.example/{id}"),
        }
    }

    #[test]
    fn test_decode_full_bet() {
        let json = r#"{
            "id": "b1",
            "topic": "Rain",
            "terms": "It rains tomorrow",
            "participants": ["ann", "bob"],
            "signatures": {"ann": "2024-05-01T10:00:00Z"},
            "shareable_link": "https://bets.example/b1"
        }"#;
        let bet: Bet = serde_json::from_str(json).unwrap();

        assert_eq!(bet.id, BetId::new("b1"));
        assert_eq!(
            bet.signatures["ann"],
            SignedAt::Parsed(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(bet.awaiting_signature(), vec!["bob"]);
    }

    #[test]
    fn test_decode_numeric_id_and_naive_timestamp() {
        let json = r#"{
            "id": 42,
            "topic": "t",
            "terms": "x",
            "participants": [],
            "signatures": {"AB": "2024-05-01T10:00:00.123456"},
            "shareable_link": ""
        }"#;
        let bet: Bet = serde_json::from_str(json).unwrap();

        assert_eq!(bet.id.as_str(), "42");
        assert!(bet.is_signed_by("AB"));
    }

    #[test]
    fn test_decode_null_signatures_and_missing_link() {
        let json = r#"{"id": "b2", "topic": "t", "terms": "x", "participants": ["a"], "signatures": null}"#;
        let bet: Bet = serde_json::from_str(json).unwrap();

        assert!(bet.signatures.is_empty());
        assert_eq!(bet.shareable_link, "");
    }

    #[test]
    fn test_decode_epoch_seconds() {
        let json = r#"{"id": "b3", "topic": "t", "terms": "x", "signatures": {"c": 0}}"#;
        let bet: Bet = serde_json::from_str(json).unwrap();
        assert_eq!(
            bet.signatures["c"],
            SignedAt::Parsed(DateTime::<Utc>::UNIX_EPOCH)
        );
    }

    #[test]
    fn test_decode_space_separated_and_fractional_epoch() {
        let json = r#"{"id": "b5", "topic": "t", "terms": "x", "signatures": {
            "a": "2024-05-01 10:00:00.123456",
            "b": 1714557600.5,
            "c": "2024-05-01 10:00:00+02:00"
        }}"#;
        let bet: Bet = serde_json::from_str(json).unwrap();

        let expected_a = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
            + chrono::Duration::microseconds(123_456);
        assert_eq!(bet.signatures["a"], SignedAt::Parsed(expected_a));

        let expected_b = DateTime::from_timestamp(1_714_557_600, 500_000_000).unwrap();
        assert_eq!(bet.signatures["b"], SignedAt::Parsed(expected_b));

        let expected_c = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        assert_eq!(bet.signatures["c"], SignedAt::Parsed(expected_c));
    }

    #[test]
    fn test_unreadable_timestamp_is_kept_verbatim() {
        let json = r#"{"id": "b4", "topic": "t", "terms": "x", "signatures": {"c": "yesterday", "d": true}}"#;
        let bet: Bet = serde_json::from_str(json).unwrap();

        assert_eq!(bet.signatures["c"], SignedAt::Raw("yesterday".to_string()));
        assert_eq!(bet.signatures["c"].date_label(), "yesterday");
        assert_eq!(bet.signatures["d"], SignedAt::Raw("true".to_string()));
        assert!(bet.is_signed_by("c"));
    }

    #[test]
    fn test_odd_timestamp_does_not_reject_the_list() {
        let json = r#"[
            {"id": "1", "topic": "t", "terms": "x", "participants": ["a"],
             "signatures": {"a": "2024-05-01 10:00:00.123456"}, "shareable_link": ""},
            {"id": "2", "topic": "t", "terms": "x", "participants": ["a"],
             "signatures": {"a": "sometime"}, "shareable_link": ""}
        ]"#;
        let bets: Vec<Bet> = serde_json::from_str(json).unwrap();

        assert_eq!(bets.len(), 2);
        assert_eq!(bets[0].signatures["a"].date_label(), "2024-05-01");
        assert_eq!(bets[1].signatures["a"].date_label(), "sometime");
    }

    #[test]
    fn test_signed_at_serializes_as_text() {
        let parsed = SignedAt::Parsed(DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(
            serde_json::to_value(&parsed).unwrap(),
            serde_json::json!("1970-01-01T00:00:00+00:00")
        );
        let raw = SignedAt::Raw("sometime".to_string());
        assert_eq!(serde_json::to_value(&raw).unwrap(), serde_json::json!("sometime"));
    }

    #[test]
    fn test_replace_only_touches_matching_entry() {
        let mut state = BetState::default();
        state.replace_all(vec![bet("1"), bet("2"), bet("3")]);

        let mut updated = bet("2");
        updated.topic = "changed".to_string();
        assert!(state.replace(&BetId::new("2"), updated.clone()));

        assert_eq!(state.bets[0], bet("1"));
        assert_eq!(state.bets[1], updated);
        assert_eq!(state.bets[2], bet("3"));
        assert!(!state.replace(&BetId::new("9"), bet("9")));
    }

    #[test]
    fn test_replace_all_clamps_selection() {
        let mut state = BetState::default();
        state.replace_all(vec![bet("1"), bet("2"), bet("3")]);
        state.go_to_bottom();
        assert_eq!(state.selected_index, Some(2));

        state.replace_all(vec![bet("1")]);
        assert_eq!(state.selected_index, Some(0));

        state.replace_all(Vec::new());
        assert_eq!(state.selected_index, None);
        assert!(state.selected_bet().is_none());
    }

    #[test]
    fn test_scroll_stays_in_bounds() {
        let mut state = BetState::default();
        state.replace_all(vec![bet("1"), bet("2")]);

        state.scroll(-1);
        assert_eq!(state.selected_index, Some(0));
        state.scroll(10);
        assert_eq!(state.selected_index, Some(1));
        state.go_to_top();
        assert_eq!(state.selected_bet().map(|b| b.id.as_str()), Some("1"));
    }
}
