//! Driving-style profiles

use serde::{Deserialize, Serialize};

use crate::{LimitsError, LimitsResult};

/// Which max-acceleration curve a cycle samples.
///
/// `Standard` is the planner's default curve; the other variants are the
/// built-in speed tables in [`crate::tables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    #[default]
    Standard,
    Eco,
    Sport,
    SportPlus,
}

impl Profile {
    pub const ALL: [Profile; 4] = [
        Profile::Standard,
        Profile::Eco,
        Profile::Sport,
        Profile::SportPlus,
    ];
}

/// User-selectable profile setting.
///
/// Used independently for the acceleration and deceleration profile.
/// Parameter stores carry it as `0`, `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileChoice {
    #[default]
    Standard,
    Eco,
    Sport,
}

impl ProfileChoice {
    pub const ALL: [ProfileChoice; 3] = [
        ProfileChoice::Standard,
        ProfileChoice::Eco,
        ProfileChoice::Sport,
    ];

    pub fn from_raw(raw: u8) -> LimitsResult<Self> {
        match raw {
            0 => Ok(Self::Standard),
            1 => Ok(Self::Eco),
            2 => Ok(Self::Sport),
            other => Err(LimitsError::InvalidProfile(other)),
        }
    }
}

impl TryFrom<u8> for ProfileChoice {
    type Error = LimitsError;

    fn try_from(raw: u8) -> LimitsResult<Self> {
        Self::from_raw(raw)
    }
}

impl From<ProfileChoice> for u8 {
    fn from(choice: ProfileChoice) -> u8 {
        match choice {
            ProfileChoice::Standard => 0,
            ProfileChoice::Eco => 1,
            ProfileChoice::Sport => 2,
        }
    }
}
