//! The `Y`/`N` flag domain shared by several conversation columns.

use sea_orm::DbErr;

/// Closed `Y`/`N` flag as stored in `*_yn` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Parses an exact `Y` or `N`.
    pub fn parse_strict(value: &str) -> Option<Self> {
        match value {
            "Y" => Some(Self::Yes),
            "N" => Some(Self::No),
            _ => None,
        }
    }

    /// Parses after trimming and upper-casing, so `"y"` is accepted.
    pub fn parse_normalized(value: &str) -> Option<Self> {
        Self::parse_strict(&value.trim().to_uppercase())
    }

    /// Decodes a stored flag at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(YesNo)` - Column held `Y` or `N`
    /// - `Err(DbErr::Custom)` - Column held anything else
    pub fn from_stored(column: &str, value: &str) -> Result<Self, DbErr> {
        Self::parse_strict(value).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unexpected value '{}' stored in flag column {}",
                value, column
            ))
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Y",
            Self::No => "N",
        }
    }
}
