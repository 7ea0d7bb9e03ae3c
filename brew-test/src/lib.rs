//! Random inputs and reference checks shared by the test suites.
use itertools::Itertools;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use brew_types::*;

/// Alphabet of the random texts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alphabet {
    Dna,
    /// Includes multi-byte and combining-free accented characters.
    Unicode,
}

impl Alphabet {
    fn chars(&self) -> &'static [char] {
        match self {
            Alphabet::Dna => &['A', 'C', 'G', 'T'],
            Alphabet::Unicode => &['a', 'e', 'é', 'ß', 's', 'Σ', 'λ', '字'],
        }
    }
}

fn test_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        ("TTGGGTCAATCAGCCAGTTTTTA", "TTTGAGTGGGTCATCACCGATTTTAT"),
        ("ACTGACCAGT", "CCGACAGGA"),
        ("AGTTTTAT", "ACCGATTTTTA"),
        ("CTCTCTTCTCTCTCTA", "CCTCTCTCTCTCCTCTC"),
        ("AGTGGGTTGCCTTCATTCCG", "AGTGGTGTCTTCAGGCCTTCATTCCG"),
        ("GCACGTCGCCCCCCGCCCGCG", "GCCCGCCCGCCCGCCCCCGCCCCC"),
    ]
}

/// Generate a random text of length `n`, and a copy of it with roughly
/// `e * n` random substitutions, insertions and deletions.
pub fn generate_pair(n: usize, e: f32, alphabet: Alphabet, rng: &mut impl Rng) -> (Text, Text) {
    let chars = alphabet.chars();
    let pick = |rng: &mut dyn RngCore| chars[rng.gen_range(0..chars.len())];
    let a: Text = (0..n).map(|_| pick(rng)).collect();
    let mut b = a.clone();
    let edits = (e * n as f32).round() as usize;
    for _ in 0..edits {
        let len = b.len();
        match rng.gen_range(0..3) {
            0 if len > 0 => {
                let i = rng.gen_range(0..len);
                b[i] = pick(rng);
            }
            1 => {
                let i = rng.gen_range(0..=len);
                b.insert(i, pick(rng));
            }
            _ if len > 0 => {
                b.remove(rng.gen_range(0..len));
            }
            _ => {}
        }
    }
    (a, b)
}

/// Hardcoded pairs followed by random pairs over all combinations of a few
/// lengths and error rates.
pub fn gen_texts(alphabet: Alphabet, seed: u64) -> impl Iterator<Item = ((Text, Text), String)> {
    let ns = [0usize, 1, 2, 3, 5, 8, 13, 20, 40, 77];
    let es = [0.0f32, 0.05, 0.1, 0.3, 0.5, 1.0];
    let rng = &mut ChaCha8Rng::seed_from_u64(seed);
    let hardcoded = match alphabet {
        Alphabet::Dna => test_texts(),
        Alphabet::Unicode => vec![],
    }
    .into_iter()
    .map(|(a, b)| {
        let params = format!("hardcoded a {a:?} b {b:?}");
        ((a.chars().collect(), b.chars().collect()), params)
    });
    let random = ns
        .into_iter()
        .cartesian_product(es)
        .map(|(n, e)| {
            let pair = generate_pair(n, e, alphabet, rng);
            (pair, format!("seed {seed:>5} n {n:>3} e {e:>.2} {alphabet:?}"))
        })
        .collect_vec();
    hardcoded.chain(random.into_iter())
}

pub fn text_to_string(t: &[char]) -> String {
    t.iter().collect()
}

/// Unit cost Levenshtein distance computed by `triple_accel`.
///
/// Only meaningful for single-byte characters.
pub fn reference_unit_cost(a: &[char], b: &[char]) -> Cost {
    assert!(a.iter().chain(b).all(char::is_ascii));
    let a = text_to_string(a);
    let b = text_to_string(b);
    triple_accel::levenshtein_exp(a.as_bytes(), b.as_bytes()) as Cost
}

/// Check the length bounds every path must satisfy.
pub fn check_path_shape(a: &[char], b: &[char], ops: &[Tag], params: &str) {
    let (n, m) = (a.len(), b.len());
    assert!(
        ops.len() >= n.abs_diff(m) && ops.len() <= n + m && ops.len() >= n.max(m),
        "{params}\na {:?}\nb {:?}\nops {ops:?}",
        text_to_string(a),
        text_to_string(b),
    );
}
