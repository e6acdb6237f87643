//! JSON assertions for data types.
#![cfg(test)]

use std::fmt::Debug;

use serde::{
    Serialize,
    de::DeserializeOwned,
};

/// Asserts that `json` parses into `expected`.
#[track_caller]
pub fn assert_json_parses<T>(json: &str, expected: T)
where
    T: Debug + PartialEq + DeserializeOwned,
{
    pretty_assertions::assert_eq!(serde_json::from_str::<T>(json).unwrap(), expected);
}

/// Asserts that `value` is written as `json` and reads back unchanged.
#[track_caller]
pub fn assert_json_round_trip<T>(value: T, json: &str)
where
    T: Debug + PartialEq + Serialize + DeserializeOwned,
{
    pretty_assertions::assert_eq!(serde_json::to_string(&value).unwrap(), json);
    assert_json_parses(json, value);
}

/// Asserts that the quoted `label` parses into `expected`.
#[track_caller]
pub fn assert_label_parses<T>(label: &str, expected: T)
where
    T: Debug + PartialEq + DeserializeOwned,
{
    assert_json_parses(&format!("{label:?}"), expected);
}

/// Asserts that `value` is written as the quoted `label`.
#[track_caller]
pub fn assert_label_round_trip<T>(value: T, label: &str)
where
    T: Debug + PartialEq + Serialize + DeserializeOwned,
{
    assert_json_round_trip(value, &format!("{label:?}"));
}
