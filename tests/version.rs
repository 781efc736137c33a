use std::cmp::Ordering;

use rstest::rstest;
use vermouth::Version;

const SAMPLES: &[&str] = &[
    "0.0.0",
    "0.0.1",
    "0.1.0",
    "1.0.0-0",
    "1.0.0-0.0",
    "1.0.0-1",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0",
    "1.0.0+build.1",
    "1.0.1-x.7.z.92",
    "1.2.3",
    "2.0.0-rc.1+sha.5114f85",
    "10.20.30",
];

#[rstest]
#[case(0, 0, 0)]
#[case(1, 2, 3)]
#[case(10, 0, 999)]
#[case(u64::MAX, 1, 0)]
fn release_versions_round_trip_through_string(
    #[case] major: u64,
    #[case] minor: u64,
    #[case] patch: u64,
) {
    let version = Version::new(major, minor, patch);

    assert_eq!(Version::parse(&version.to_string()), version);
}

#[test]
fn comparison_is_antisymmetric_and_total() {
    let versions: Vec<Version> = SAMPLES.iter().map(|v| Version::parse(v)).collect();

    for a in &versions {
        for b in &versions {
            let forward = a.cmp_precedence(b);
            assert_eq!(forward, b.cmp_precedence(a).reverse(), "{} vs {}", a, b);

            let outcomes = [a.is_greater(b), a.is_lesser(b), forward == Ordering::Equal];
            assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1, "{} vs {}", a, b);
        }
    }
}

#[test]
fn precedence_agrees_with_semver_crate_on_valid_versions() {
    for a in SAMPLES {
        for b in SAMPLES {
            let ours = Version::parse(a).cmp_precedence(&Version::parse(b));
            let reference = semver::Version::parse(a)
                .unwrap()
                .cmp_precedence(&semver::Version::parse(b).unwrap());

            assert_eq!(ours, reference, "{} vs {}", a, b);
        }
    }
}

#[test]
fn metadata_affects_equality_but_not_ordering() {
    let a = Version::parse("1.0.0+a");
    let b = Version::parse("1.0.0+b");

    assert_eq!(a.cmp_precedence(&b), Ordering::Equal);
    assert!(a != "1.0.0+b");
    assert_ne!(a, b);
}

#[test]
fn numeric_identifiers_compare_by_value() {
    let newer = Version::parse("1.0.0-beta.11");

    assert!(newer.is_greater(&Version::parse("1.0.0-beta.2")));
    assert!(newer.is_greater("1.0.0-beta.2"));
}

#[test]
fn sorting_by_precedence_orders_prerelease_chain() {
    let mut versions: Vec<Version> = [
        "1.0.0",
        "1.0.0-rc.1",
        "1.0.0-beta.11",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-alpha",
        "1.0.0-beta.2",
        "1.0.0-alpha.1",
    ]
    .iter()
    .map(|v| Version::parse(v))
    .collect();

    versions.sort_by(Version::cmp_precedence);

    let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ]
    );
}
