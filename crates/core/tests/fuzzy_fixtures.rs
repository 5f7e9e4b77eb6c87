//! Calibration table for the normalizer and scorer.

use pinrecon_core::fuzzy::{match_name, parse, MatchConfig, MatchTier};

fn is_match(a: &str, b: &str) -> bool {
    match_name(a, &parse(b), &MatchConfig::default()).success
}

#[test]
fn test_parse_table() {
    let cases: &[(&str, &str, &str, Option<&str>, Option<u32>)] = &[
        ("Indiana Jones (Williams 1993) blah.directb2s", "indiana jones", "indianajones", Some("williams"), Some(1993)),
        ("Indiana Jones (Williams) blah.directb2s", "indiana jones", "indianajones", Some("williams"), None),
        ("Indiana Jones (1993) blah.directb2s", "indiana jones", "indianajones", None, Some(1993)),
        ("Indiana Jones.directb2s", "indiana jones", "indianajones", None, None),
        ("", "", "", None, None),
        ("123", "123", "123", None, None),
        ("123 (Williams 1993)", "123", "123", Some("williams"), Some(1993)),
        ("123 (Williams)", "123", "123", Some("williams"), None),
        ("123 (1993)", "123", "123", None, Some(1993)),
        ("123 blah (Williams 1993)", "123 blah", "123blah", Some("williams"), Some(1993)),
        ("123 blah (1993)", "123 blah", "123blah", None, Some(1993)),
        ("1-2-3 (1971)", "1 2 3", "123", None, Some(1971)),
    ];

    for (raw, title, key, manufacturer, year) in cases {
        let details = parse(raw);
        assert_eq!(details.title, *title, "title of {:?}", raw);
        assert_eq!(details.title_key, *key, "key of {:?}", raw);
        assert_eq!(details.manufacturer.as_deref(), *manufacturer, "manufacturer of {:?}", raw);
        assert_eq!(details.year, *year, "year of {:?}", raw);
    }
}

#[test]
fn test_earlier_parentheticals_stay_in_title() {
    let details = parse("Indiana Jones (blah) (Williams 1993).directb2s");
    assert_eq!(details.title, "indiana jones blah");
    assert_eq!(details.manufacturer.as_deref(), Some("williams"));
    assert_eq!(details.year, Some(1993));
}

#[test]
fn test_match_table() {
    let cases: &[(&str, &str, bool)] = &[
        ("medieval madness", "medieval madness", true),
        ("medieval madness.vpx", "medieval madness", true),
        ("medieval madness", "medieval madness.vpx", true),
        ("medieval madness", "medieval madness (Williams 2006)", true),
        ("medieval madness (Williams 2006)", "medieval madness", true),
        ("medieval madnes (Williams 2006)", "medieval madness", true),
        ("medieval madness (Williams 2006)", "medieval madness (blah 2006)", true),
        ("medieval madness (  Williams 2006)", "medieval madness (blah 2006)", true),
        (" medieval madness (Williams 2006)", "medieval madness (blah 2006)", true),
        ("medieval   madness (Williams 2006)", "medieval madness (blah 2006)", true),
        ("medieval              madness (Williams 2006)", "medieval madness (blah 2000)", false),
        ("medieval madnesas (Williams 2006)", "medieval madness", false),
        ("ali (Stern 1980)", "ali", true),
        ("ali (Williams 2006)", "alien (blah)", false),
        ("black knight 2000", "black knight", false),
        ("black knight returns 2000", "black knight", false),
        ("black knight returns 2000", "black knight retur", true),
        ("the black knight", "black knight", true),
        ("black&apos; knight", "black knight", true),
        ("black' knight", "black knight", true),
        ("black` knight", "black knight", true),
        ("black, knight", "black knight", true),
        ("black; knight", "black knight", true),
        ("black knight!", "black knight", true),
        ("black? knight", "black knight", true),
        ("black.knight.blah", "black knight", true),
        ("black-knight", "black knight", true),
        ("black - knight", "black knight", true),
        ("black_knight", "black knight", true),
        ("black&knight", "black and knight", true),
        ("black & knight", "black and knight", true),
        (
            "Rocky and Bullwinkle And Friends (Data East 1993)",
            "Adventures of Rocky and Bullwinkle and Friends (1993).directb2s",
            true,
        ),
        ("Rocky and Bull", "Adventures of Rocky and Bullwinkle and Friends (1993).directb2s", false),
        (
            "Indiana Jones (Stern 2008)",
            r"C:\temp\_download\vp\Backglasses\Indiana Jones (Stern 2008) by Starlion.directb2s",
            true,
        ),
        (
            "Indiana Jones The Pinball Adventure (1993).directb2s",
            "Indiana Jones The Pinball Adventure (Williams 1993).directb2s",
            true,
        ),
        (
            "The Getaway High Speed II (Williams 1992)",
            r"C:\temp\_MegaSync\b2s\Getaway, The - High Speed II v1.04.directb2s",
            true,
        ),
        (
            "The Getaway High Speed 2 (Williams 1992)",
            r"C:\temp\_MegaSync\b2s\Getaway, The - High Speed II v1.04.directb2s",
            true,
        ),
        (
            "The Getaway High Speed 3 (Williams 1992)",
            r"C:\temp\_MegaSync\b2s\Getaway, The - High Speed III v1.04.directb2s",
            true,
        ),
        (
            "The Getaway High Speed 4 (Williams 1992)",
            r"C:\temp\_MegaSync\b2s\Getaway, The - High Speed IV v1.04.directb2s",
            true,
        ),
        ("Lights...Camera...Action! (Premier 1989).blah", "Lights Camera Action (1989).directb2s", true),
        // Punctuation-only suffixes are not extensions, so this matches too.
        ("Lights...Camera...Action! (Premier 1989)", "Lights Camera Action (1989).directb2s", true),
        ("1-2-3 (Premier 1989)", "123 (Premier1989)", true),
        ("123 (Premier 1989)", "1 2 3 (Premier1989)", true),
        ("1 2 3 (Premier 1989)", "1-2-3-(Premier1989)", true),
        ("1 2   3 (Premier 1989)", "1-2-3-(Premier1989)", true),
        ("1-2-3 (Premier 1989)", "1 2 3 (Premier1989)", true),
        ("AC-DC LUCI Premium (Stern 2013).directb2s", "AC-DC LUCI (Stern 2013).directb2s", true),
        ("Amazon Hunt baby baby VPX 1.6.directb2s", "Amazon Hunt baby baby (1983).directb2s", true),
    ];

    for (a, b, expected) in cases {
        assert_eq!(is_match(a, b), *expected, "match({:?}, {:?})", a, b);
    }
}

#[test]
fn test_score_table() {
    let cases: &[(&str, &str, bool, i32, MatchTier)] = &[
        ("Indiana Jones Rocks (Stern 1993)", "Indiana Jones Rocks (Stern)", true, 150, MatchTier::Exact),
        ("Indiana Jones Rocks (Stern 1993)", "Indiana Jones Rocks (Stern 1993)", true, 200, MatchTier::Exact),
        ("Indiana Jones Rocks (Stern 1993)", "Indiana Jones Rocks (Stern 1994)", true, 190, MatchTier::Exact),
        ("Indiana Jones Rocks (Stern 1993)", "Indiana Jones Rocks (Stern 1995)", true, 100, MatchTier::Exact),
        ("Indiana Jones Rocks (Stern 1993)", "Indiana Jones Rocks (Stern 1996)", false, 50, MatchTier::Exact),
        ("Indiana Jones Rocks (Stern 1993)", "Indiana Jones Rocks (Stern 1997)", false, -850, MatchTier::Exact),
        ("Indiana Jones Rocks (Stern 1993)", "Indiana Jones Rocks Baby (Stern)", true, 100, MatchTier::Prefix),
        ("Indiana Jones Rocks (Stern 1993)", "Indiana Jones Rocks Baby (Stern 1993)", true, 150, MatchTier::Prefix),
        ("Indiana Jones Rocks (Stern 1993)", "Indiana Jones Rocks Baby (Stern 1994)", true, 140, MatchTier::Prefix),
        ("Indiana Jones Rocks (Stern 1993)", "Indiana Jones Rocks Baby (Stern 1995)", false, 50, MatchTier::Prefix),
        ("Indiana Jones (Stern 1993)", "Indiana Jones Rocks (Stern)", false, 60, MatchTier::Prefix),
        ("Indiana Jones (Stern 1993)", "Indiana Jones Rocks (Stern 1991)", false, 10, MatchTier::Prefix),
        ("Indiana Jones Rocks Baby (Stern 1993)", "OMG Indiana Jones Rocks Baby (Stern)", true, 100, MatchTier::Substring),
        ("Indiana Jones Rocks Baby (Stern 1993)", "OMG Indiana Jones Rocks Baby (Stern 1993)", true, 150, MatchTier::Substring),
        ("Indiana Jones Rocks Baby (Stern 1993)", "OMG Indiana Jones Rocks Baby (Stern 1994)", true, 140, MatchTier::Substring),
        ("Indiana Jones R (Stern 1993)", "OMG Indiana Jones Rocks (Stern)", false, 60, MatchTier::Substring),
        ("Indiana Jones R (Stern 1993)", "OMG Indiana Jones Rocks (Stern 1995)", false, 10, MatchTier::Substring),
    ];

    for (a, b, success, score, tier) in cases {
        let result = match_name(a, &parse(b), &MatchConfig::default());
        assert_eq!(result.success, *success, "success of ({:?}, {:?})", a, b);
        assert_eq!(result.score, *score, "score of ({:?}, {:?})", a, b);
        assert_eq!(result.tier, Some(*tier), "tier of ({:?}, {:?})", a, b);
    }
}

#[test]
fn test_short_partial_matches_never_succeed() {
    // A year bonus can lift a short partial match over the threshold, but the
    // length floor still rejects it.
    let cases = [
        ("Indiana Jones (Stern 1993)", "Indiana Jones Rocks (Stern 1993)", 110),
        ("Indiana Jones (Stern 1993)", "Indiana Jones Rocks (Stern 1992)", 100),
        ("Indiana Jones R (Stern 1993)", "OMG Indiana Jones Rocks (Stern 1993)", 110),
        ("Indiana Jones R (Stern 1993)", "OMG Indiana Jones Rocks (Stern 1994)", 100),
    ];

    for (a, b, score) in cases {
        let result = match_name(a, &parse(b), &MatchConfig::default());
        assert_eq!(result.score, score, "score of ({:?}, {:?})", a, b);
        assert!(!result.success, "({:?}, {:?}) should not match", a, b);
    }
}
