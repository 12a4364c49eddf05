/*
[INPUT]:  Recipient type letters from the mailer API schema
[OUTPUT]: Typed recipient kind with parsing and serialization
[POS]:    Mailer service - recipient type enum
[UPDATE]: When the mailer API adds recipient kinds
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::http::NcloudError;

/// How a recipient receives the mail
///
/// The wire format is a single letter: R (recipient), C (carbon copy),
/// B (blind carbon copy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipientType {
    #[serde(rename = "R")]
    Recipient,
    #[serde(rename = "C")]
    CarbonCopy,
    #[serde(rename = "B")]
    BlindCarbonCopy,
}

impl RecipientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipientType::Recipient => "R",
            RecipientType::CarbonCopy => "C",
            RecipientType::BlindCarbonCopy => "B",
        }
    }
}

impl fmt::Display for RecipientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipientType {
    type Err = NcloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "R" => Ok(RecipientType::Recipient),
            "C" => Ok(RecipientType::CarbonCopy),
            "B" => Ok(RecipientType::BlindCarbonCopy),
            _ => Err(NcloudError::UnknownRecipientType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("R", RecipientType::Recipient)]
    #[case("c", RecipientType::CarbonCopy)]
    #[case("b", RecipientType::BlindCarbonCopy)]
    fn test_parse_accepts_known_letters(#[case] input: &str, #[case] want: RecipientType) {
        assert_eq!(input.parse::<RecipientType>().unwrap(), want);
    }

    #[test]
    fn test_parse_rejects_unknown_letters() {
        let err = "X".parse::<RecipientType>().unwrap_err();
        assert!(matches!(err, NcloudError::UnknownRecipientType(_)));
    }

    #[test]
    fn test_display_round_trips() {
        for rt in [
            RecipientType::Recipient,
            RecipientType::CarbonCopy,
            RecipientType::BlindCarbonCopy,
        ] {
            assert_eq!(rt.to_string().parse::<RecipientType>().unwrap(), rt);
        }
    }

    #[test]
    fn test_serializes_to_single_letter() {
        let json = serde_json::to_string(&RecipientType::BlindCarbonCopy).unwrap();
        assert_eq!(json, r#""B""#);
    }
}
