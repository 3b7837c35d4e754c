/// Numeric encoder — integers to SPL noun phrases.
///
/// SPL spells a constant as a pile of adjectives in front of a noun: the
/// phrase's value is 2^k where k is the adjective count, negated when the
/// vocabulary is negative. Only zero and numbers whose magnitude is a power
/// of two are expressible.
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::wordbanks::{Polarity, WordBanks};

#[derive(Debug, Error)]
pub enum NumberError {
    #[error("numbers must be zero or a power of two: {0}")]
    InvalidNumber(i64),
    #[error("word bank exhausted: needed {needed} words, bank has {available}")]
    BankExhausted { needed: usize, available: usize },
}

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Encode `n` as a noun phrase drawn from `banks`.
///
/// Zero is the literal "nothing" and consumes no randomness. Otherwise the
/// phrase is an article, log2(|n|) distinct adjectives sampled without
/// replacement, and one noun (chosen with replacement), all from the bank
/// matching the sign of `n`.
///
/// The article rules are the language's, quirks included: a positive phrase
/// keeps a leading "the" only when it has no adjectives, a negative one
/// falls back to "a"; with at least one adjective, both become "a"/"an"
/// according to the first-chosen adjective's leading letter.
pub fn encode(n: i64, banks: &WordBanks, rng: &mut impl Rng) -> Result<String, NumberError> {
    if n == 0 {
        return Ok("nothing".to_string());
    }

    let magnitude = n.unsigned_abs();
    if !is_power_of_two(magnitude) {
        return Err(NumberError::InvalidNumber(n));
    }
    let k = magnitude.ilog2() as usize;

    let polarity = if n < 0 {
        Polarity::Negative
    } else {
        Polarity::PositiveNeutral
    };

    let mut working: Vec<&str> = banks
        .adjectives
        .for_polarity(polarity)
        .iter()
        .map(String::as_str)
        .collect();
    if k > working.len() {
        return Err(NumberError::BankExhausted {
            needed: k,
            available: working.len(),
        });
    }
    let noun_bank = banks.nouns.for_polarity(polarity);
    if noun_bank.is_empty() {
        return Err(NumberError::BankExhausted {
            needed: 1,
            available: 0,
        });
    }

    let mut result = String::from(match polarity {
        Polarity::PositiveNeutral => "the ",
        Polarity::Negative => "a ",
    });
    for i in 0..k {
        let choice = rng.gen_range(0..working.len());
        if i == 0 {
            result = if working[choice].starts_with(VOWELS) {
                "an ".to_string()
            } else {
                "a ".to_string()
            };
        }
        result.push_str(working.remove(choice));
        result.push(' ');
    }

    // choose() never fails here, the bank was checked above
    if let Some(noun) = noun_bank.choose(rng) {
        result.push_str(noun);
    }
    Ok(result)
}

/// Repeated-halving power-of-two test on a magnitude.
fn is_power_of_two(mut n: u64) -> bool {
    if n == 0 {
        return false;
    }
    while n > 1 {
        if n % 2 != 0 {
            return false;
        }
        n /= 2;
    }
    true
}
