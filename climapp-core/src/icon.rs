use serde::{Deserialize, Serialize};

/// Display-icon buckets for OpenWeather condition codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconCategory {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Fog,
    Clear,
    Cloudy,
}

impl IconCategory {
    /// Map an OpenWeather condition code to its icon bucket.
    ///
    /// Total over all integers: codes outside the published table (including
    /// the unused 4xx block and negatives) fall back to `Clear`.
    pub fn from_condition_code(code: i64) -> Self {
        match code {
            200..=299 => Self::Thunderstorm,
            300..=399 => Self::Drizzle,
            500..=599 => Self::Rain,
            600..=699 => Self::Snow,
            700..=799 => Self::Fog,
            800 => Self::Clear,
            801.. => Self::Cloudy,
            _ => Self::Clear,
        }
    }

    /// Class name used by the dashboard icon slots.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "icon-thunderstorm",
            Self::Drizzle => "icon-drizzle",
            Self::Rain => "icon-rainy",
            Self::Snow => "icon-snowy",
            Self::Fog => "icon-foggy",
            Self::Clear => "icon-sunny",
            Self::Cloudy => "icon-cloudy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_codes_map_to_expected_buckets() {
        let table = [
            (199, IconCategory::Clear),
            (200, IconCategory::Thunderstorm),
            (299, IconCategory::Thunderstorm),
            (300, IconCategory::Drizzle),
            (399, IconCategory::Drizzle),
            (499, IconCategory::Clear),
            (500, IconCategory::Rain),
            (599, IconCategory::Rain),
            (600, IconCategory::Snow),
            (699, IconCategory::Snow),
            (700, IconCategory::Fog),
            (799, IconCategory::Fog),
            (800, IconCategory::Clear),
            (801, IconCategory::Cloudy),
            (804, IconCategory::Cloudy),
        ];

        for (code, expected) in table {
            assert_eq!(IconCategory::from_condition_code(code), expected, "code {code}");
        }
    }

    #[test]
    fn out_of_table_codes_fall_back_to_clear() {
        for code in [i64::MIN, -1, 0, 100, 400, 450, 499] {
            assert_eq!(IconCategory::from_condition_code(code), IconCategory::Clear);
        }
    }
}
