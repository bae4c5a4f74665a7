//! Parse Tests - Line Notation to Document
//!
//! End-to-end behavior of `parse` over line notation: record interpretation,
//! recovery from malformed input, and repair of dangling references.

use gedcom::{
    Concurrency, Document, FamilyRepairPolicy, Gender, Notation, ParseOptions, parse,
    parse_with_options,
};
use rstest::rstest;

fn parse_line(input: &str) -> Document {
    parse(input.as_bytes(), Notation::Line).expect("line notation parse")
}

fn parse_sequential(input: &str) -> Document {
    parse_with_options(input.as_bytes(), Notation::Line, &ParseOptions::sequential())
        .expect("line notation parse")
}

// ============================================================================
// Individuals
// ============================================================================

#[test]
fn test_single_individual() {
    let document = parse_line("0 @I1@ INDI\n1 NAME John /Doe/\n1 SEX M\n");

    assert_eq!(document.individuals.len(), 1);
    let individual = &document.individuals[0];
    assert_eq!(individual.id, "@I1@");
    assert_eq!(individual.names.len(), 1);
    assert_eq!(individual.names[0].given_name, "John");
    assert_eq!(individual.names[0].surname, "Doe");
    assert_eq!(individual.gender, Gender::Male);
}

#[rstest]
#[case("02 OCT 1822", Some("1822"), Some(10), Some("02"))]
#[case("OCT 1822", Some("1822"), Some(10), None)]
#[case("1822", Some("1822"), None, None)]
#[case("ABT 02 OCT 1822", Some("1822"), Some(10), Some("02"))]
fn test_birth_dates(
    #[case] value: &str,
    #[case] year: Option<&str>,
    #[case] month: Option<u8>,
    #[case] day: Option<&str>,
) {
    let input = format!("0 @I1@ INDI\n1 BIRT\n2 DATE {value}\n2 PLAC Weston\n");
    let document = parse_line(&input);
    let birth = &document.individuals[0].birth_events[0];
    assert_eq!(birth.date.year(), year);
    assert_eq!(birth.date.month(), month);
    assert_eq!(birth.date.day(), day);
    assert_eq!(birth.place, "Weston");
}

#[test]
fn test_primary_flags() {
    let document = parse_line(
        "0 @I1@ INDI\n\
         1 NAME Ann /Lee/\n\
         2 _PRIM Y\n\
         1 NAME Anne /Leigh/\n\
         2 _PRIM N\n\
         1 DEAT\n\
         2 DATE 1901\n\
         2 _PRIM Y\n",
    );
    let individual = &document.individuals[0];
    assert!(individual.names[0].primary);
    assert!(!individual.names[1].primary);
    assert!(individual.death_events[0].primary);
}

#[test]
fn test_name_children_override_inline_value() {
    let document = parse_line("0 @I1@ INDI\n1 NAME Jon /Do/\n2 GIVN John\n2 SURN Doe\n");
    let name = &document.individuals[0].names[0];
    assert_eq!(name.given_name, "John");
    assert_eq!(name.surname, "Doe");
}

#[test]
fn test_non_ascii_values_are_escaped() {
    let document = parse_line("0 @I1@ INDI\n1 NAME Zoë /Brontë/\n");
    let name = &document.individuals[0].names[0];
    assert_eq!(name.given_name, "Zo\\u{eb}");
    assert_eq!(name.surname, "Bront\\u{eb}");
}

// ============================================================================
// Recovery
// ============================================================================

#[test]
fn test_bad_inner_line_loses_only_its_data() {
    let document = parse_line("0 @I1@ INDI\n1 NAME John /Doe/\nx BIRT\n1 SEX M\n");

    assert_eq!(document.individuals.len(), 1);
    let individual = &document.individuals[0];
    assert_eq!(individual.names[0].given_name, "John");
    assert_eq!(individual.gender, Gender::Male);
    assert!(individual.birth_events.is_empty());
}

#[rstest]
#[case("0 INDI\n1 NAME No /Id/\n")]
#[case("0 @I1@\n")]
#[case("0 @X1@ NOTE something\n")]
fn test_unusable_records_are_skipped(#[case] bad: &str) {
    let input = format!("0 HEAD\n{bad}0 @I2@ INDI\n1 SEX F\n0 TRLR\n");
    let document = parse_sequential(&input);
    assert_eq!(document.individuals.len(), 1);
    assert_eq!(document.individuals[0].id, "@I2@");
}

#[test]
fn test_byte_order_mark_and_crlf() {
    let document = parse_line("\u{feff}0 HEAD\r\n0 @I1@ INDI\r\n1 SEX F\r\n0 TRLR\r\n");
    assert!(document.header.is_some());
    assert_eq!(document.individuals[0].gender, Gender::Female);
}

#[test]
fn test_empty_input() {
    assert!(parse_line("").is_empty());
}

// ============================================================================
// Validation during parse
// ============================================================================

const DANGLING_MOTHER: &str = "\
0 HEAD
0 @I1@ INDI
1 SEX M
0 @I3@ INDI
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I2@
1 CHIL @I3@
0 TRLR
";

#[test]
fn test_dangling_mother_is_cleared() {
    let document = parse_line(DANGLING_MOTHER);
    let family = document
        .families
        .iter()
        .find(|f| f.id == "@F1@")
        .expect("family kept");
    assert_eq!(family.mother_id, None);
    assert_eq!(family.father_id.as_deref(), Some("@I1@"));
    assert_eq!(family.child_ids, vec!["@I3@"]);
}

#[test]
fn test_dangling_mother_removes_family_under_strict_policy() {
    let options = ParseOptions::default().with_family_policy(FamilyRepairPolicy::RemoveFamily);
    let document =
        parse_with_options(DANGLING_MOTHER.as_bytes(), Notation::Line, &options).unwrap();
    assert!(document.families.is_empty());
    assert_eq!(document.individuals.len(), 2);
}

#[rstest]
#[case(FamilyRepairPolicy::ClearDangling)]
#[case(FamilyRepairPolicy::RemoveFamily)]
fn test_non_ascii_ids_resolve(#[case] policy: FamilyRepairPolicy) {
    let input = "0 @Ï1@ INDI\n1 SEX M\n0 @Zoë\\2@ INDI\n0 @F1@ FAM\n1 HUSB @Ï1@\n1 CHIL @Zoë\\2@\n";
    let options = ParseOptions::sequential().with_family_policy(policy);
    let document = parse_with_options(input.as_bytes(), Notation::Line, &options).unwrap();

    assert_eq!(document.families.len(), 1);
    let family = &document.families[0];
    assert_eq!(family.father_id.as_deref(), Some(document.individuals[0].id.as_str()));
    assert_eq!(family.child_ids, vec![document.individuals[1].id.clone()]);
}

#[test]
fn test_validation_can_be_disabled() {
    let options = ParseOptions::default().without_validation();
    let document =
        parse_with_options(DANGLING_MOTHER.as_bytes(), Notation::Line, &options).unwrap();
    assert_eq!(document.families[0].mother_id.as_deref(), Some("@I2@"));
}

#[test]
fn test_duplicate_ids_both_survive() {
    let document = parse_sequential("0 @I1@ INDI\n1 SEX M\n0 @I1@ INDI\n1 SEX F\n");

    assert_eq!(document.individuals.len(), 2);
    let holders: Vec<_> = document
        .individuals
        .iter()
        .filter(|i| i.id == "@I1@")
        .collect();
    assert_eq!(holders.len(), 1);
    assert_eq!(document.individual_ids().len(), 2);
}

#[test]
fn test_header_submitter_falls_back() {
    let document = parse_sequential(
        "0 HEAD\n1 SOUR gedcom-graph\n1 SUBM @U9@\n0 @U1@ SUBM\n1 NAME Archivist\n0 TRLR\n",
    );
    let header = document.header.expect("header");
    assert_eq!(header.source.as_deref(), Some("gedcom-graph"));
    assert_eq!(header.submitter_id.as_deref(), Some("@U1@"));
    assert_eq!(document.submitters[0].name, "Archivist");
}

// ============================================================================
// Concurrency
// ============================================================================

fn generated_tree(families: usize) -> String {
    let mut input = String::from("0 HEAD\n");
    for n in 0..families {
        let (father, mother, child) = (3 * n + 1, 3 * n + 2, 3 * n + 3);
        input.push_str(&format!(
            "0 @I{father}@ INDI\n1 NAME Father{n} /Line{n}/\n1 SEX M\n1 BIRT\n2 DATE {} JAN 1800\n\
             0 @I{mother}@ INDI\n1 NAME Mother{n} /Line{n}/\n1 SEX F\n\
             0 @I{child}@ INDI\n1 NAME Child{n} /Line{n}/\n1 DEAT\n2 PLAC Town{n}\n\
             0 @F{n}@ FAM\n1 HUSB @I{father}@\n1 WIFE @I{mother}@\n1 CHIL @I{child}@\n1 CHIL @I0@\n",
            n % 28 + 1
        ));
    }
    input.push_str("0 TRLR\n");
    input
}

#[rstest]
#[case(None)]
#[case(Some(1))]
#[case(Some(4))]
fn test_parallel_matches_sequential(#[case] threads: Option<usize>) {
    let input = generated_tree(150);

    let mut sequential = parse_sequential(&input);
    let options = ParseOptions {
        concurrency: Concurrency::Parallel,
        threads,
        ..ParseOptions::default()
    };
    let mut parallel = parse_with_options(input.as_bytes(), Notation::Line, &options).unwrap();

    sequential.sort_by_id();
    parallel.sort_by_id();
    assert_eq!(parallel.individuals.len(), 450);
    assert_eq!(parallel.families.len(), 150);
    assert_eq!(parallel, sequential);
    // Every family names a child that does not exist.
    assert!(parallel.families.iter().all(|f| f.child_ids[1].is_empty()));
}

#[test]
fn test_duplicate_header_choice_matches_sequential() {
    let mut input = String::from("0 HEAD\n1 SOUR first\n");
    // A long first header takes longer to interpret than the second one.
    for n in 0..2000 {
        input.push_str(&format!("1 _NOTE filler {n}\n"));
    }
    input.push_str("0 HEAD\n1 SOUR second\n0 @I1@ INDI\n0 TRLR\n");

    let sequential = parse_sequential(&input);
    assert_eq!(
        sequential.header.as_ref().and_then(|h| h.source.as_deref()),
        Some("first")
    );

    let options = ParseOptions {
        threads: Some(4),
        ..ParseOptions::default()
    };
    for _ in 0..20 {
        let parallel = parse_with_options(input.as_bytes(), Notation::Line, &options).unwrap();
        assert_eq!(parallel.header, sequential.header);
    }
}
