//! Built-in pronounceable word list.
//!
//! Every word is three consonant-vowel syllables, six lowercase letters in
//! all (`bakumo`, `tefiza`, ...). Position `i` is mapped onto the syllable
//! space by multiplying with [`STRIDE`] modulo [`MAX_GENERATED_WORDS`]; the
//! stride is coprime to the modulus, so the mapping is a permutation and the
//! list never repeats a word. Neighbouring positions land far apart, which
//! keeps short lists from all sharing a first syllable.

const CONSONANTS: &[u8; 16] = b"bdfghjklmnprstvz";
const VOWELS: &[u8; 5] = b"aeiou";

const SYLLABLES: u64 = (CONSONANTS.len() * VOWELS.len()) as u64;

/// Number of distinct words the generator can produce (80^3).
pub const MAX_GENERATED_WORDS: usize = (SYLLABLES * SYLLABLES * SYLLABLES) as usize;

/// Multiplier spreading positions across the syllable space.
pub const STRIDE: u64 = 7_919;

/// Returns the generated word at `position`.
///
/// Positions wrap at [`MAX_GENERATED_WORDS`].
pub fn word_at(position: usize) -> String {
    let n = (position as u64 % MAX_GENERATED_WORDS as u64) * STRIDE % MAX_GENERATED_WORDS as u64;

    let mut word = String::with_capacity(6);
    for syllable in [n / (SYLLABLES * SYLLABLES), (n / SYLLABLES) % SYLLABLES, n % SYLLABLES] {
        let consonant = CONSONANTS[(syllable / VOWELS.len() as u64) as usize];
        let vowel = VOWELS[(syllable % VOWELS.len() as u64) as usize];
        word.push(consonant as char);
        word.push(vowel as char);
    }
    word
}
