//! Preset notice formats

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named notice styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyrightFormat {
    /// `© 2026 Owner`
    #[default]
    Minimal,
    /// `Copyright © 2026 Owner`
    Standard,
    /// `Copyright © 2026 Owner. All rights reserved.`
    Full,
    /// `Copyright © 2026 Owner. All Rights Reserved.`
    Legal,
}

impl CopyrightFormat {
    pub const ALL: [CopyrightFormat; 4] = [
        CopyrightFormat::Minimal,
        CopyrightFormat::Standard,
        CopyrightFormat::Full,
        CopyrightFormat::Legal,
    ];

    /// Template string for this preset
    pub fn template(self) -> &'static str {
        match self {
            CopyrightFormat::Minimal => "{symbol} {year} {owner}",
            CopyrightFormat::Standard => "Copyright {symbol} {year} {owner}",
            CopyrightFormat::Full => "Copyright {symbol} {year} {owner}. All rights reserved.",
            CopyrightFormat::Legal => "Copyright {symbol} {year} {owner}. All Rights Reserved.",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CopyrightFormat::Minimal => "minimal",
            CopyrightFormat::Standard => "standard",
            CopyrightFormat::Full => "full",
            CopyrightFormat::Legal => "legal",
        }
    }
}

impl fmt::Display for CopyrightFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CopyrightFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CopyrightFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown format '{}'. Expected one of: minimal, standard, full, legal",
                    s
                )
            })
    }
}
