//! Pure branch resolution over the directory.
//!
//! This module holds the three stateless query modes the view coordinator
//! composes:
//!
//! - [`match_postal_prefix`]: outward-code prefix match from free-text
//!   postcode input
//! - [`nearest`]: nearest branch by great-circle distance from a coordinate
//! - [`filter`]: case-insensitive substring filter across display fields
//!
//! All three are pure functions of the directory and the query. Absence is a
//! regular return value (`None` / empty list), never an error, and every mode
//! scans the directory in table order so that ties resolve deterministically
//! to the first record.

use crate::directory::Directory;
use crate::domain::Branch;
use crate::geo::{haversine_km, Coordinate};

/// A nearest-branch result: the winning record plus its distance, kept for
/// display in the status line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestMatch<'a> {
    pub branch: &'a Branch,
    pub distance_km: f64,
}

/// Derives an outward-code candidate from free-text postcode input.
///
/// Normalizes by uppercasing and stripping all whitespace, then takes the
/// whole string if it has at most 4 characters and drops the last 3
/// characters otherwise (approximating the outward part of a full UK-style
/// postcode). Candidates shorter than 2 characters are too ambiguous to
/// match and yield `None`.
///
/// This is a heuristic, not a postal-format parser: `"SG1 4AB"` becomes
/// `"SG1"`, `"AL1"` stays `"AL1"`, `"A"` yields `None`.
#[must_use]
pub fn outward_candidate(input: &str) -> Option<String> {
    let normalized: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();

    let len = normalized.chars().count();
    let candidate: String = if len <= 4 {
        normalized
    } else {
        normalized.chars().take(len - 3).collect()
    };

    if candidate.chars().count() < 2 {
        None
    } else {
        Some(candidate)
    }
}

/// Resolves free-text postcode input to a branch by outward-code prefix.
///
/// Derives a candidate via [`outward_candidate`], then returns the first
/// branch in table order any of whose postal prefixes is a string prefix of
/// the candidate. First match wins; table order is the deliberate tie-break.
///
/// Returns `None` when the candidate is too short or nothing matches. Pure
/// string containment, no fuzzy matching.
#[must_use]
pub fn match_postal_prefix<'a>(directory: &'a Directory, input: &str) -> Option<&'a Branch> {
    let candidate = outward_candidate(input)?;

    let matched = directory.iter().find(|branch| {
        branch
            .postal_prefixes
            .iter()
            .any(|prefix| candidate.starts_with(prefix.as_str()))
    });

    tracing::debug!(
        candidate = %candidate,
        matched = matched.map(|b| b.id.as_str()),
        "postal prefix resolution"
    );

    matched
}

/// Returns the branch nearest to `from`, with its haversine distance in km.
///
/// Ties break to the first minimal branch in table order (the comparison is
/// strict less-than). Returns `None` only for an empty directory.
#[must_use]
pub fn nearest<'a>(directory: &'a Directory, from: Coordinate) -> Option<NearestMatch<'a>> {
    let mut best: Option<NearestMatch<'a>> = None;

    for branch in directory {
        let distance_km = haversine_km(from, branch.coordinates);
        if best.map_or(true, |current| distance_km < current.distance_km) {
            best = Some(NearestMatch {
                branch,
                distance_km,
            });
        }
    }

    best
}

/// Filters the directory by case-insensitive substring match.
///
/// A branch passes if the lowercased query occurs in its name, area, outward
/// code, or any postal prefix (OR across fields). An empty or whitespace-only
/// query returns the full directory; a query matching nothing returns the
/// empty list. Original table order is preserved.
#[must_use]
pub fn filter<'a>(directory: &'a Directory, query: &str) -> Vec<&'a Branch> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return directory.iter().collect();
    }

    directory
        .iter()
        .filter(|branch| {
            branch.name.to_lowercase().contains(&needle)
                || branch.area.to_lowercase().contains(&needle)
                || branch.outward.to_lowercase().contains(&needle)
                || branch
                    .postal_prefixes
                    .iter()
                    .any(|prefix| prefix.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Directory {
        Directory::builtin()
    }

    #[test]
    fn candidate_keeps_short_input_whole() {
        assert_eq!(outward_candidate("AL1"), Some("AL1".to_string()));
        assert_eq!(outward_candidate("cm20"), Some("CM20".to_string()));
    }

    #[test]
    fn candidate_strips_inward_part_of_full_postcode() {
        assert_eq!(outward_candidate("SG1 4AB"), Some("SG1".to_string()));
        assert_eq!(outward_candidate(" tn1  2xy "), Some("TN1".to_string()));
    }

    #[test]
    fn candidate_rejects_inputs_shorter_than_two_chars() {
        assert_eq!(outward_candidate("A"), None);
        assert_eq!(outward_candidate(""), None);
        assert_eq!(outward_candidate("   "), None);
    }

    #[test]
    fn candidate_from_stripping_never_drops_below_two_chars() {
        // 5 normalized chars strip to a 2-char candidate, the minimum
        assert_eq!(outward_candidate("A1 2BC"), Some("A1".to_string()));
    }

    #[test]
    fn prefix_match_resolves_full_postcode_to_branch() {
        let directory = directory();
        let branch = match_postal_prefix(&directory, "SG1 4AB").unwrap();
        assert_eq!(branch.id, "stevenage");
    }

    #[test]
    fn prefix_match_resolves_bare_outward_code() {
        let directory = directory();
        let branch = match_postal_prefix(&directory, "AL1").unwrap();
        assert_eq!(branch.id, "stalbans");
    }

    #[test]
    fn prefix_match_returns_none_for_unknown_area() {
        let directory = directory();
        assert!(match_postal_prefix(&directory, "zz").is_none());
        assert!(match_postal_prefix(&directory, "EC1A 1BB").is_none());
    }

    #[test]
    fn prefix_match_first_record_wins() {
        use crate::domain::Branch;
        use crate::geo::Coordinate;

        let clone = |id: &str, prefix: &str| Branch {
            id: id.to_string(),
            name: id.to_string(),
            area: String::new(),
            outward: prefix.to_string(),
            postal_prefixes: vec![prefix.to_string()],
            coordinates: Coordinate::new(51.0, 0.0),
            order_url: String::new(),
        };
        let directory =
            Directory::new(vec![clone("first", "SG"), clone("second", "SG")]).unwrap();

        assert_eq!(match_postal_prefix(&directory, "SG1").unwrap().id, "first");
    }

    #[test]
    fn nearest_at_exact_branch_location_has_zero_distance() {
        let directory = directory();
        let stevenage = directory.get("stevenage").unwrap().coordinates;
        let found = nearest(&directory, stevenage).unwrap();
        assert_eq!(found.branch.id, "stevenage");
        assert_eq!(found.distance_km, 0.0);
    }

    #[test]
    fn nearest_prefers_closer_branch() {
        let directory = directory();
        // Central Chatham, a few hundred metres from the branch record
        let found = nearest(&directory, Coordinate::new(51.383, 0.525)).unwrap();
        assert_eq!(found.branch.id, "chatham");
        assert!(found.distance_km < 1.0);
    }

    #[test]
    fn nearest_tie_breaks_to_table_order() {
        use crate::domain::Branch;
        use crate::geo::Coordinate;

        let at = |id: &str| Branch {
            id: id.to_string(),
            name: id.to_string(),
            area: String::new(),
            outward: String::new(),
            postal_prefixes: vec![],
            coordinates: Coordinate::new(51.5, 0.0),
            order_url: String::new(),
        };
        let directory = Directory::new(vec![at("first"), at("second")]).unwrap();

        let found = nearest(&directory, Coordinate::new(51.6, 0.1)).unwrap();
        assert_eq!(found.branch.id, "first");
    }

    #[test]
    fn nearest_of_empty_directory_is_none() {
        let directory = Directory::new(vec![]).unwrap();
        assert!(nearest(&directory, Coordinate::new(51.5, 0.0)).is_none());
    }

    #[test]
    fn filter_empty_query_returns_full_directory_in_order() {
        let directory = directory();
        let all = filter(&directory, "");
        assert_eq!(all.len(), directory.len());
        assert_eq!(all[0].id, "harlow");

        assert_eq!(filter(&directory, "   ").len(), directory.len());
    }

    #[test]
    fn filter_matches_any_field_case_insensitively() {
        let directory = directory();

        let by_area = filter(&directory, "kent");
        let ids: Vec<&str> = by_area.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["chatham", "tunbridgewells"]);

        let by_outward = filter(&directory, "sg1");
        assert_eq!(by_outward.len(), 1);
        assert_eq!(by_outward[0].id, "stevenage");

        let by_name = filter(&directory, "St Albans");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "stalbans");
    }

    #[test]
    fn filter_with_no_match_returns_empty_list() {
        let directory = directory();
        assert!(filter(&directory, "gotham").is_empty());
    }
}
