//! Boundary dates on either side of every window edge.

use chrono::NaiveDate;
use gd_zodiac::{SignKind, resolve, resolve_str};
use rstest::rstest;

#[rstest]
#[case((3, 20), SignKind::Pisces, (3, 21), SignKind::Aries)]
#[case((4, 19), SignKind::Aries, (4, 20), SignKind::Taurus)]
#[case((5, 20), SignKind::Taurus, (5, 21), SignKind::Gemini)]
#[case((6, 20), SignKind::Gemini, (6, 21), SignKind::Cancer)]
#[case((7, 22), SignKind::Cancer, (7, 23), SignKind::Leo)]
#[case((8, 22), SignKind::Leo, (8, 23), SignKind::Virgo)]
#[case((9, 22), SignKind::Virgo, (9, 23), SignKind::Libra)]
#[case((10, 22), SignKind::Libra, (10, 23), SignKind::Scorpio)]
#[case((11, 21), SignKind::Scorpio, (11, 22), SignKind::Sagittarius)]
#[case((12, 21), SignKind::Sagittarius, (12, 22), SignKind::Capricorn)]
#[case((1, 19), SignKind::Capricorn, (1, 20), SignKind::Aquarius)]
#[case((2, 18), SignKind::Aquarius, (2, 19), SignKind::Pisces)]
fn boundary_pair_splits_between_signs(
    #[case] last: (u32, u32),
    #[case] earlier: SignKind,
    #[case] first: (u32, u32),
    #[case] later: SignKind,
) {
    let last_day = NaiveDate::from_ymd_opt(2024, last.0, last.1).unwrap();
    let first_day = NaiveDate::from_ymd_opt(2024, first.0, first.1).unwrap();
    assert_eq!(resolve(last_day).kind, earlier);
    assert_eq!(resolve(first_day).kind, later);
}

#[rstest]
#[case("2023-12-31", SignKind::Capricorn)]
#[case("2024-01-01", SignKind::Capricorn)]
#[case("1990-01-01", SignKind::Capricorn)]
#[case("1990-04-20", SignKind::Taurus)]
#[case("1985-08-15T08:30:00", SignKind::Leo)]
#[case("2000-03-20T23:59:59Z", SignKind::Pisces)]
fn resolves_date_like_strings(#[case] input: &str, #[case] expected: SignKind) {
    assert_eq!(resolve_str(input).unwrap().kind, expected);
}
