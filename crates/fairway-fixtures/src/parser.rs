//! Lexical extraction of value tuples from generated SQL text.
//!
//! This is deliberately not a SQL parser: fixture files are machine
//! generated with a fixed positional shape, so pattern matching over the
//! literal value lists is enough. Surrounding statements, comments, and
//! unrelated tuples are ignored; a file with no matches parses to an
//! empty sequence, never an error.

use regex::Regex;

/// One parsed hole row: `(hole_id, course_id, hole_number, par, handicap)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleTuple {
    pub hole_id: i64,
    pub course_id: i64,
    pub hole_number: i64,
    pub par: i64,
    pub handicap: i64,
}

/// Extract every value tuple of five or more integers, in order of
/// appearance. Tuples with extra trailing fields contribute their first
/// five integers.
pub fn parse_hole_tuples(text: &str) -> Vec<HoleTuple> {
    let pattern =
        Regex::new(r"\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*[,)]").unwrap();

    pattern
        .captures_iter(text)
        .filter_map(|cap| {
            Some(HoleTuple {
                hole_id: cap[1].parse().ok()?,
                course_id: cap[2].parse().ok()?,
                hole_number: cap[3].parse().ok()?,
                par: cap[4].parse().ok()?,
                handicap: cap[5].parse().ok()?,
            })
        })
        .collect()
}

/// Extract the single leading integer of each tuple-per-line listing
/// (tee-box files: `(tee_box_id, ...)`).
pub fn parse_leading_ids(text: &str) -> Vec<i64> {
    let pattern = Regex::new(r"^\s*\(\s*(\d+)\s*,").unwrap();

    text.lines()
        .filter_map(|line| pattern.captures(line))
        .filter_map(|cap| cap[1].parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_tuples() {
        let text = "INSERT INTO holes (hole_id, course_id, hole_number, par, handicap) VALUES\n\
                    (1, 1, 1, 4, 5),\n\
                    (2, 1, 2, 3, 17);";
        let tuples = parse_hole_tuples(text);
        assert_eq!(tuples.len(), 2);
        assert_eq!(
            tuples[0],
            HoleTuple {
                hole_id: 1,
                course_id: 1,
                hole_number: 1,
                par: 4,
                handicap: 5
            }
        );
        assert_eq!(tuples[1].handicap, 17);
    }

    #[test]
    fn test_parse_tolerates_comments_and_multiple_statements() {
        let text = "-- generated fixture\n\
                    BEGIN;\n\
                    INSERT INTO holes VALUES (10, 2, 1, 4, 1);\n\
                    -- second batch\n\
                    INSERT INTO holes VALUES (11, 2, 2, 5, 2);\n\
                    COMMIT;";
        let tuples = parse_hole_tuples(text);
        assert_eq!(tuples.len(), 2);
        assert_eq!(tuples[0].hole_id, 10);
        assert_eq!(tuples[1].par, 5);
    }

    #[test]
    fn test_parse_takes_first_five_of_longer_tuples() {
        let text = "(7, 3, 7, 4, 11, 320, 'back tee')";
        let tuples = parse_hole_tuples(text);
        assert_eq!(tuples.len(), 1);
        assert_eq!(tuples[0].handicap, 11);
    }

    #[test]
    fn test_parse_ignores_short_and_non_numeric_tuples() {
        let text = "(1, 2, 3)\n('a', 'b', 'c', 'd', 'e')\n(1, 2, 3, 4)";
        assert!(parse_hole_tuples(text).is_empty());
    }

    #[test]
    fn test_parse_empty_input_yields_empty_sequence() {
        assert!(parse_hole_tuples("").is_empty());
        assert!(parse_hole_tuples("-- nothing here").is_empty());
    }

    #[test]
    fn test_parse_leading_ids() {
        let text = "INSERT INTO tee_boxes VALUES\n\
                    (1, 1, 'Championship', 'black', 1),\n\
                    (2, 1, 'Men', 'white', 2),\n\
                    (17, 4, 'Forward', 'red', 3);";
        assert_eq!(parse_leading_ids(text), vec![1, 2, 17]);
    }

    #[test]
    fn test_parse_leading_ids_requires_line_start() {
        // Ids buried mid-line belong to some other shape; only
        // tuple-per-line listings count.
        let text = "VALUES (1, 'a'), (2, 'b');\n(3, 'c'),";
        assert_eq!(parse_leading_ids(text), vec![3]);
    }
}
