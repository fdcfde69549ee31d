use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bonus {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Bonus {
    pub fn letter_multiplier(self) -> u32 {
        match self {
            Bonus::DoubleLetter => 2,
            Bonus::TripleLetter => 3,
            _ => 1,
        }
    }

    pub fn word_multiplier(self) -> u32 {
        match self {
            Bonus::DoubleWord => 2,
            Bonus::TripleWord => 3,
            _ => 1,
        }
    }

    /// Layout token: `.`, `2l`, `3l`, `2w` or `3w`.
    pub fn token(self) -> &'static str {
        match self {
            Bonus::None => ".",
            Bonus::DoubleLetter => "2l",
            Bonus::TripleLetter => "3l",
            Bonus::DoubleWord => "2w",
            Bonus::TripleWord => "3w",
        }
    }

    pub(crate) fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "." => Some(Bonus::None),
            "2l" => Some(Bonus::DoubleLetter),
            "3l" => Some(Bonus::TripleLetter),
            "2w" => Some(Bonus::DoubleWord),
            "3w" => Some(Bonus::TripleWord),
            _ => None,
        }
    }
}

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Parses a whitespace separated layout such as `"3w . . 2l"`.
pub fn parse_layout(layout: &str) -> Result<Vec<Bonus>, LayoutError> {
    let bonuses = layout
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            Bonus::from_token(token).ok_or_else(|| LayoutError::UnknownToken {
                token: token.to_string(),
                index,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if bonuses.is_empty() {
        return Err(LayoutError::Empty);
    }
    Ok(bonuses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout() {
        let bonuses = parse_layout("3w . 2L\n  3l 2w").unwrap();
        assert_eq!(
            bonuses,
            vec![
                Bonus::TripleWord,
                Bonus::None,
                Bonus::DoubleLetter,
                Bonus::TripleLetter,
                Bonus::DoubleWord,
            ]
        );
    }

    #[test]
    fn test_parse_layout_rejects_unknown_token() {
        let err = parse_layout(". . 4w").unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnknownToken {
                token: "4w".to_string(),
                index: 2
            }
        );
    }

    #[test]
    fn test_parse_layout_rejects_empty() {
        assert_eq!(parse_layout("   "), Err(LayoutError::Empty));
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(Bonus::DoubleLetter.letter_multiplier(), 2);
        assert_eq!(Bonus::DoubleLetter.word_multiplier(), 1);
        assert_eq!(Bonus::TripleWord.word_multiplier(), 3);
        assert_eq!(Bonus::TripleWord.letter_multiplier(), 1);
        assert_eq!(Bonus::None.letter_multiplier(), 1);
    }

    #[test]
    fn test_serializes_kebab_case() {
        let json = serde_json::to_string(&Bonus::DoubleLetter).unwrap();
        assert_eq!(json, "\"double-letter\"");
        let bonus: Bonus = serde_json::from_str("\"triple-word\"").unwrap();
        assert_eq!(bonus, Bonus::TripleWord);
    }
}
