use std::collections::HashSet;

/// The report sections, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    LongerThanTen,
    ShorterThanFive,
    StartsWithA,
    EndsWithLand,
    ContainsUnited,
    Alphabetical,
    ReverseAlphabetical,
    UniqueFirstLetters,
    TotalCount,
    Longest,
    Shortest,
    Uppercase,
    MultiWord,
    CharacterCounts,
    AnyStartsWithZ,
    AllLongerThanThree,
}

impl SectionKind {
    pub const ALL: [SectionKind; 16] = [
        SectionKind::LongerThanTen,
        SectionKind::ShorterThanFive,
        SectionKind::StartsWithA,
        SectionKind::EndsWithLand,
        SectionKind::ContainsUnited,
        SectionKind::Alphabetical,
        SectionKind::ReverseAlphabetical,
        SectionKind::UniqueFirstLetters,
        SectionKind::TotalCount,
        SectionKind::Longest,
        SectionKind::Shortest,
        SectionKind::Uppercase,
        SectionKind::MultiWord,
        SectionKind::CharacterCounts,
        SectionKind::AnyStartsWithZ,
        SectionKind::AllLongerThanThree,
    ];

    pub fn header(self) -> &'static str {
        match self {
            SectionKind::LongerThanTen => "Country names longer than 10 characters:",
            SectionKind::ShorterThanFive => "Country names shorter than 5 characters:",
            SectionKind::StartsWithA => "Country names starting with 'A':",
            SectionKind::EndsWithLand => "Country names ending with 'land':",
            SectionKind::ContainsUnited => "Country names containing 'United':",
            SectionKind::Alphabetical => "Country names in alphabetical order:",
            SectionKind::ReverseAlphabetical => "Country names in reverse alphabetical order:",
            SectionKind::UniqueFirstLetters => "Unique first letters of country names:",
            SectionKind::TotalCount => "Total count of country names:",
            SectionKind::Longest => "Longest country name:",
            SectionKind::Shortest => "Shortest country name:",
            SectionKind::Uppercase => "Country names in uppercase:",
            SectionKind::MultiWord => "Countries with more than one word:",
            SectionKind::CharacterCounts => "Country names to character count:",
            SectionKind::AnyStartsWithZ => "Any country name starts with 'Z':",
            SectionKind::AllLongerThanThree => "All country names longer than 3 characters:",
        }
    }

    /// Derives this section's body lines from the full country list.
    pub fn derive(self, countries: &[String]) -> Vec<String> {
        match self {
            SectionKind::LongerThanTen => filter(countries, |c| name_length(c) > 10),
            SectionKind::ShorterThanFive => filter(countries, |c| name_length(c) < 5),
            SectionKind::StartsWithA => filter(countries, |c| c.starts_with('A')),
            SectionKind::EndsWithLand => filter(countries, |c| c.ends_with("land")),
            SectionKind::ContainsUnited => filter(countries, |c| c.contains("United")),
            SectionKind::Alphabetical => {
                let mut sorted = countries.to_vec();
                sorted.sort();
                sorted
            }
            SectionKind::ReverseAlphabetical => {
                let mut sorted = countries.to_vec();
                sorted.sort_by(|a, b| b.cmp(a));
                sorted
            }
            SectionKind::UniqueFirstLetters => unique_first_letters(countries),
            SectionKind::TotalCount => vec![countries.len().to_string()],
            SectionKind::Longest => longest(countries).map(str::to_string).into_iter().collect(),
            SectionKind::Shortest => shortest(countries).map(str::to_string).into_iter().collect(),
            SectionKind::Uppercase => countries.iter().map(|c| c.to_uppercase()).collect(),
            SectionKind::MultiWord => filter(countries, |c| is_multi_word(c)),
            SectionKind::CharacterCounts => countries
                .iter()
                .map(|c| format!("{}: {} characters", c, name_length(c)))
                .collect(),
            SectionKind::AnyStartsWithZ => {
                vec![countries.iter().any(|c| c.starts_with('Z')).to_string()]
            }
            SectionKind::AllLongerThanThree => {
                vec![countries.iter().all(|c| name_length(c) > 3).to_string()]
            }
        }
    }
}

fn filter(countries: &[String], predicate: impl Fn(&str) -> bool) -> Vec<String> {
    countries
        .iter()
        .filter(|c| predicate(c.as_str()))
        .cloned()
        .collect()
}

/// Length in characters, not bytes.
pub fn name_length(name: &str) -> usize {
    name.chars().count()
}

/// True when splitting on single spaces yields more than one token.
///
/// Trailing empty tokens are not counted, so `"Chad "` is one word while
/// `" Chad"` and `"Costa  Rica"` split into several tokens.
pub fn is_multi_word(name: &str) -> bool {
    name.trim_end_matches(' ').contains(' ')
}

/// First character of each name, deduplicated in first-seen order. Empty
/// names have no first letter and are skipped.
pub fn unique_first_letters(countries: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    countries
        .iter()
        .filter_map(|c| c.chars().next())
        .filter(|first| seen.insert(*first))
        .map(String::from)
        .collect()
}

// Iterator::max_by_key keeps the last of equal elements; ties here go to the first.
pub fn longest(countries: &[String]) -> Option<&str> {
    countries
        .iter()
        .map(String::as_str)
        .reduce(|best, c| if name_length(c) > name_length(best) { c } else { best })
}

pub fn shortest(countries: &[String]) -> Option<&str> {
    countries
        .iter()
        .map(String::as_str)
        .min_by_key(|c| name_length(c))
}
