/// Encoder integration tests — the power-of-two phrase properties.

use playbill::core::number::{encode, NumberError};
use playbill::wordbanks::WordBanks;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Split an encoded phrase into (article, adjectives, noun) against the
/// given bank lists. The noun may be multi-word ("summer's day"), so the
/// adjective count is taken as given and the remainder must be one noun.
fn split_phrase<'a>(phrase: &'a str, k: usize) -> (&'a str, Vec<&'a str>, String) {
    let (article, rest) = if let Some(rest) = phrase.strip_prefix("an ") {
        ("an", rest)
    } else if let Some(rest) = phrase.strip_prefix("a ") {
        ("a", rest)
    } else if let Some(rest) = phrase.strip_prefix("the ") {
        ("the", rest)
    } else {
        panic!("no article in {:?}", phrase);
    };

    let tokens: Vec<&str> = rest.split(' ').collect();
    assert!(tokens.len() > k, "expected {} adjectives + noun in {:?}", k, phrase);
    let adjectives = tokens[..k].to_vec();
    let noun = tokens[k..].join(" ");
    (article, adjectives, noun)
}

#[test]
fn zero_is_nothing_for_every_seed() {
    let banks = WordBanks::default();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(encode(0, &banks, &mut rng).unwrap(), "nothing");
    }
}

#[test]
fn positive_powers_have_k_distinct_positive_adjectives_and_one_noun() {
    let banks = WordBanks::default();
    for k in 0..16u32 {
        let n = 1i64 << k;
        let mut rng = StdRng::seed_from_u64(1000 + k as u64);
        let phrase = encode(n, &banks, &mut rng).unwrap();
        let (article, adjectives, noun) = split_phrase(&phrase, k as usize);

        if k == 0 {
            assert_eq!(article, "the", "k=0 keeps the default article: {}", phrase);
        } else {
            assert!(article == "a" || article == "an");
            // Article agrees with the first adjective's leading letter.
            let vowel = adjectives[0].starts_with(&['a', 'e', 'i', 'o', 'u'][..]);
            assert_eq!(article == "an", vowel, "article mismatch in {:?}", phrase);
        }

        for (i, adjective) in adjectives.iter().enumerate() {
            assert!(
                banks
                    .adjectives
                    .positive_neutral
                    .contains(&adjective.to_string()),
                "{:?} not in the positive bank ({})",
                adjective,
                phrase
            );
            assert!(
                !adjectives[i + 1..].contains(adjective),
                "repeated adjective in {:?}",
                phrase
            );
        }
        assert!(banks.nouns.positive_neutral.contains(&noun));
    }
}

#[test]
fn negative_powers_draw_from_the_negative_banks() {
    let banks = WordBanks::default();
    for k in 0..10u32 {
        let n = -(1i64 << k);
        let mut rng = StdRng::seed_from_u64(2000 + k as u64);
        let phrase = encode(n, &banks, &mut rng).unwrap();
        let (article, adjectives, noun) = split_phrase(&phrase, k as usize);

        assert!(article == "a" || article == "an", "negative numbers never take 'the': {}", phrase);
        for adjective in &adjectives {
            assert!(
                banks.adjectives.negative.contains(&adjective.to_string()),
                "{:?} not in the negative bank ({})",
                adjective,
                phrase
            );
        }
        assert!(banks.nouns.negative.contains(&noun));
    }
}

#[test]
fn non_powers_fail_with_invalid_number() {
    let banks = WordBanks::default();
    let mut rng = StdRng::seed_from_u64(0);
    for n in [3, -5, 7, 12, 100, -72, 255, 1000000] {
        assert!(
            matches!(
                encode(n, &banks, &mut rng),
                Err(NumberError::InvalidNumber(m)) if m == n
            ),
            "expected InvalidNumber for {}",
            n
        );
    }
}

#[test]
fn oversized_magnitude_exhausts_the_bank() {
    let banks = WordBanks::default();
    let available = banks.adjectives.negative.len();
    let mut rng = StdRng::seed_from_u64(0);
    // More adjectives demanded than the negative bank holds.
    let n = -(1i64 << (available as u32 + 1));
    assert!(matches!(
        encode(n, &banks, &mut rng),
        Err(NumberError::BankExhausted { needed, available: a })
            if needed == available + 1 && a == available
    ));
}

#[test]
fn same_seed_reproduces_the_phrase() {
    let banks = WordBanks::default();
    for n in [1, 2, -8, 64, 4096, -1024] {
        let mut a = StdRng::seed_from_u64(77);
        let mut b = StdRng::seed_from_u64(77);
        assert_eq!(
            encode(n, &banks, &mut a).unwrap(),
            encode(n, &banks, &mut b).unwrap()
        );
    }
}
