//! Country data model, the curated confusable-flag groups, and the built-in
//! seed catalog.
//!
//! The quiz core treats a [`Country`] as an immutable record loaded once per
//! session. Two countries are the same entity iff their codes match.

/// One selectable country/territory in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub common_name: String,
    pub official_name: String,
    /// Short stable identifier (ISO 3166-1 alpha-2).
    pub code: String,
    pub alternate_spellings: Vec<String>,
    /// Opaque reference to the flag asset (URL); never interpreted here.
    pub flag_image_ref: String,
}

/// Country-code groups whose flags are easily mistaken for one another.
///
/// Hand-curated, using codes rather than names as these are more stable.
pub const CONFUSABLE_FLAG_GROUPS: [&[&str]; 4] = [
    &[
        "RO", // Romania
        "TD", // Chad
    ],
    &[
        "MC", // Monaco
        "ID", // Indonesia
    ],
    &[
        "US", // United States
        "UM", // United States Minor Outlying Islands
    ],
    &[
        "FR", // France
        "MF", // Saint Martin
    ],
];

/// Returns true when both codes belong to the same confusable-flag group.
pub fn are_confusable(a: &str, b: &str) -> bool {
    CONFUSABLE_FLAG_GROUPS
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

/// Static seed row for the built-in catalog.
#[derive(Debug, Clone, Copy)]
pub struct CountrySeed {
    pub code: &'static str,
    pub common_name: &'static str,
    pub official_name: &'static str,
    pub alternate_spellings: &'static [&'static str],
}

/// Built-in catalog used to seed an empty database. Includes every member of
/// every confusable-flag group.
pub const BUILTIN_COUNTRIES: [CountrySeed; 34] = [
    CountrySeed {
        code: "FR",
        common_name: "France",
        official_name: "French Republic",
        alternate_spellings: &["République française"],
    },
    CountrySeed {
        code: "MF",
        common_name: "Saint Martin",
        official_name: "Saint Martin (French part)",
        alternate_spellings: &["Collectivity of Saint Martin", "Saint-Martin"],
    },
    CountrySeed {
        code: "RO",
        common_name: "Romania",
        official_name: "Romania",
        alternate_spellings: &["Rumania", "Roumania", "România"],
    },
    CountrySeed {
        code: "TD",
        common_name: "Chad",
        official_name: "Republic of Chad",
        alternate_spellings: &["Tchad", "République du Tchad"],
    },
    CountrySeed {
        code: "MC",
        common_name: "Monaco",
        official_name: "Principality of Monaco",
        alternate_spellings: &["Principauté de Monaco"],
    },
    CountrySeed {
        code: "ID",
        common_name: "Indonesia",
        official_name: "Republic of Indonesia",
        alternate_spellings: &["Republik Indonesia"],
    },
    CountrySeed {
        code: "US",
        common_name: "United States",
        official_name: "United States of America",
        alternate_spellings: &["USA", "United States of America"],
    },
    CountrySeed {
        code: "UM",
        common_name: "United States Minor Outlying Islands",
        official_name: "United States Minor Outlying Islands",
        alternate_spellings: &[],
    },
    CountrySeed {
        code: "DE",
        common_name: "Germany",
        official_name: "Federal Republic of Germany",
        alternate_spellings: &["Deutschland", "Bundesrepublik Deutschland"],
    },
    CountrySeed {
        code: "ES",
        common_name: "Spain",
        official_name: "Kingdom of Spain",
        alternate_spellings: &["España", "Reino de España"],
    },
    CountrySeed {
        code: "IT",
        common_name: "Italy",
        official_name: "Italian Republic",
        alternate_spellings: &["Italia", "Repubblica italiana"],
    },
    CountrySeed {
        code: "PT",
        common_name: "Portugal",
        official_name: "Portuguese Republic",
        alternate_spellings: &["República Portuguesa"],
    },
    CountrySeed {
        code: "GB",
        common_name: "United Kingdom",
        official_name: "United Kingdom of Great Britain and Northern Ireland",
        alternate_spellings: &["UK", "Great Britain", "Britain"],
    },
    CountrySeed {
        code: "IE",
        common_name: "Ireland",
        official_name: "Republic of Ireland",
        alternate_spellings: &["Éire"],
    },
    CountrySeed {
        code: "NL",
        common_name: "Netherlands",
        official_name: "Kingdom of the Netherlands",
        alternate_spellings: &["Holland", "Nederland"],
    },
    CountrySeed {
        code: "BE",
        common_name: "Belgium",
        official_name: "Kingdom of Belgium",
        alternate_spellings: &["België", "Belgique", "Belgien"],
    },
    CountrySeed {
        code: "CH",
        common_name: "Switzerland",
        official_name: "Swiss Confederation",
        alternate_spellings: &["Schweiz", "Suisse", "Svizzera"],
    },
    CountrySeed {
        code: "AT",
        common_name: "Austria",
        official_name: "Republic of Austria",
        alternate_spellings: &["Österreich"],
    },
    CountrySeed {
        code: "PL",
        common_name: "Poland",
        official_name: "Republic of Poland",
        alternate_spellings: &["Polska"],
    },
    CountrySeed {
        code: "UA",
        common_name: "Ukraine",
        official_name: "Ukraine",
        alternate_spellings: &["Ukrayina"],
    },
    CountrySeed {
        code: "SE",
        common_name: "Sweden",
        official_name: "Kingdom of Sweden",
        alternate_spellings: &["Sverige"],
    },
    CountrySeed {
        code: "NO",
        common_name: "Norway",
        official_name: "Kingdom of Norway",
        alternate_spellings: &["Norge", "Noreg"],
    },
    CountrySeed {
        code: "FI",
        common_name: "Finland",
        official_name: "Republic of Finland",
        alternate_spellings: &["Suomi"],
    },
    CountrySeed {
        code: "DK",
        common_name: "Denmark",
        official_name: "Kingdom of Denmark",
        alternate_spellings: &["Danmark"],
    },
    CountrySeed {
        code: "GR",
        common_name: "Greece",
        official_name: "Hellenic Republic",
        alternate_spellings: &["Hellas", "Ellada"],
    },
    CountrySeed {
        code: "TR",
        common_name: "Turkey",
        official_name: "Republic of Türkiye",
        alternate_spellings: &["Türkiye", "Turkiye"],
    },
    CountrySeed {
        code: "JP",
        common_name: "Japan",
        official_name: "Japan",
        alternate_spellings: &["Nippon", "Nihon"],
    },
    CountrySeed {
        code: "KR",
        common_name: "South Korea",
        official_name: "Republic of Korea",
        alternate_spellings: &["Korea", "Korea, Republic of"],
    },
    CountrySeed {
        code: "CN",
        common_name: "China",
        official_name: "People's Republic of China",
        alternate_spellings: &["Zhongguo"],
    },
    CountrySeed {
        code: "IN",
        common_name: "India",
        official_name: "Republic of India",
        alternate_spellings: &["Bharat"],
    },
    CountrySeed {
        code: "BR",
        common_name: "Brazil",
        official_name: "Federative Republic of Brazil",
        alternate_spellings: &["Brasil"],
    },
    CountrySeed {
        code: "MX",
        common_name: "Mexico",
        official_name: "United Mexican States",
        alternate_spellings: &["México", "Mexicanos"],
    },
    CountrySeed {
        code: "CA",
        common_name: "Canada",
        official_name: "Canada",
        alternate_spellings: &[],
    },
    CountrySeed {
        code: "AU",
        common_name: "Australia",
        official_name: "Commonwealth of Australia",
        alternate_spellings: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confusable_is_symmetric() {
        assert!(are_confusable("RO", "TD"));
        assert!(are_confusable("TD", "RO"));
        assert!(are_confusable("MC", "ID"));
        assert!(are_confusable("FR", "MF"));
    }

    #[test]
    fn test_not_confusable_across_groups() {
        assert!(!are_confusable("RO", "MC"));
        assert!(!are_confusable("TD", "ID"));
        assert!(!are_confusable("US", "FR"));
        assert!(!are_confusable("DE", "FR"));
    }

    #[test]
    fn test_builtin_codes_are_unique_alpha2() {
        for (i, seed) in BUILTIN_COUNTRIES.iter().enumerate() {
            assert_eq!(seed.code.len(), 2);
            assert!(seed.code.chars().all(|c| c.is_ascii_uppercase()));
            for other in &BUILTIN_COUNTRIES[i + 1..] {
                assert_ne!(seed.code, other.code);
            }
        }
    }

    #[test]
    fn test_every_confusable_code_is_in_builtin_catalog() {
        for group in CONFUSABLE_FLAG_GROUPS.iter() {
            for code in group.iter() {
                assert!(
                    BUILTIN_COUNTRIES.iter().any(|seed| seed.code == *code),
                    "confusable code {} missing from built-in catalog",
                    code
                );
            }
        }
    }
}
