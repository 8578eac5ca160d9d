//! Serde support.
//!
//! [`Alphabet`] round-trips as its string form rather than a sequence of
//! characters, so configurations stay readable and invalid alphabets are
//! rejected at deserialization time. [`SolvedParams`](crate::SolvedParams)
//! and [`MonotonicConfig`](crate::MonotonicConfig) use derived impls.

use crate::Alphabet;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl Serialize for Alphabet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let symbols = String::deserialize(deserializer)?;
        Alphabet::new(&symbols).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Alphabet, MonotonicConfig, SolvedParams, solve_parameters};

    #[test]
    fn alphabet_round_trips_as_a_string() {
        let alphabet = Alphabet::default();
        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, "\"13456789ABCDEFHKLMNPQRTWXYZ\"");
        assert_eq!(serde_json::from_str::<Alphabet>(&json).unwrap(), alphabet);
    }

    #[test]
    fn invalid_alphabets_fail_to_deserialize() {
        assert!(serde_json::from_str::<Alphabet>("\"A\"").is_err());
        assert!(serde_json::from_str::<Alphabet>("\"ABCA\"").is_err());
    }

    #[test]
    fn solved_params_round_trip() {
        let params = solve_parameters(10.0, 1.0, 27).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(serde_json::from_str::<SolvedParams>(&json).unwrap(), params);
    }

    #[test]
    fn config_round_trips() {
        let config = MonotonicConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            serde_json::from_str::<MonotonicConfig>(&json).unwrap(),
            config
        );
    }
}
