//! Integration tests for the list file format.

use primelist_core::{PrimeListHeader, build_prime_list, parse_prime_list, serialize};

#[test]
fn test_limit_ten_scenario() {
    let primes = build_prime_list(10).unwrap();
    assert_eq!(primes.as_slice(), &[2, 3, 5, 7]);

    let text = serialize(&primes);
    let mut lines = text.split('\n');
    assert_eq!(lines.next(), Some("quantity=4,last=7"));
    assert_eq!(lines.collect::<Vec<_>>(), vec!["2", "3", "5", "7"]);
}

#[test]
fn test_limit_one_scenario() {
    let primes = build_prime_list(1).unwrap();
    let text = serialize(&primes);
    assert_eq!(text, "quantity=0,last=0");

    let (header, body) = parse_prime_list(&text).unwrap();
    assert_eq!(
        header,
        PrimeListHeader {
            quantity: 0,
            last: 0
        }
    );
    assert!(body.is_empty());
}

#[test]
fn test_no_trailing_newline() {
    let text = serialize(&build_prime_list(50).unwrap());
    assert!(!text.ends_with('\n'));
    assert!(text.ends_with("\n47"));
}

#[test]
fn test_limit_thirty_snapshot() {
    let text = serialize(&build_prime_list(30).unwrap());
    insta::assert_snapshot!("limit_30", text);
}
