//! Markov-chain body name generator
//!
//! Builds an order-2 character chain from an embedded corpus of star and
//! mythology names and walks it with keyed draws, so a generated name is a
//! pure function of (root seed, key). Output is always lowercase. Collisions
//! between keys are possible; callers retry with a new discriminator.

use std::collections::HashMap;

use keystream::RandomStream;

/// Terminator marker inside transition tables
const END: char = '\0';

/// Shortest acceptable name
const MIN_LEN: usize = 4;
/// Longest acceptable name
const MAX_LEN: usize = 11;
/// Upper bound on chain steps, covers terminator redraws under MIN_LEN
const MAX_STEPS: usize = 24;

/// Training corpus: star catalog and mythology names, lowercase
const CORPUS: &[&str] = &[
    "achernar", "aldebaran", "algol", "alphard", "altair", "antares",
    "arcturus", "bellatrix", "betelgeuse", "canopus", "capella", "castor",
    "dabih", "deneb", "electra", "enif", "fomalhaut", "gacrux", "hadar",
    "hamal", "izar", "kochab", "maia", "marfik", "megrez", "meissa",
    "menkar", "merak", "mimosa", "mintaka", "mirach", "mizar", "naos",
    "nashira", "nunki", "perseus", "phecda", "polaris", "pollux", "procyon",
    "rasalhague", "regulus", "rigel", "sabik", "sadr", "saiph", "sargas",
    "scheat", "shaula", "sirius", "spica", "tarazed", "thuban", "unukalhai",
    "vega", "wezen", "yildun", "zaniah", "zaurak", "zubenelgenubi",
    "oberon", "titania", "umbriel", "ariel", "miranda", "triton", "nereid",
    "phobos", "deimos", "callisto", "ganymede", "europa", "amalthea",
    "hyperion", "iapetus", "tethys", "enceladus", "janus", "pandora",
];

/// Name generator over the embedded corpus
#[derive(Debug, Clone)]
pub struct NameForge {
    starts: Vec<(char, char)>,
    table: HashMap<(char, char), Vec<char>>,
}

impl Default for NameForge {
    fn default() -> Self {
        Self::new()
    }
}

impl NameForge {
    pub fn new() -> Self {
        let mut starts = Vec::new();
        let mut table: HashMap<(char, char), Vec<char>> = HashMap::new();

        for name in CORPUS {
            let chars: Vec<char> = name.chars().collect();
            if chars.len() < 3 {
                continue;
            }
            starts.push((chars[0], chars[1]));
            for window in chars.windows(3) {
                table
                    .entry((window[0], window[1]))
                    .or_default()
                    .push(window[2]);
            }
            let n = chars.len();
            table.entry((chars[n - 2], chars[n - 1])).or_default().push(END);
        }

        Self { starts, table }
    }

    /// Generate a lowercase name for a key
    ///
    /// Walks the chain with one keyed draw per step. Deterministic for
    /// identical (root, key); uniqueness is not guaranteed.
    pub fn generate(&self, stream: &RandomStream, key: &str) -> String {
        let start = self.starts
            [stream.integer(&format!("{}:start", key), 0, self.starts.len() as i64) as usize];

        let mut name = String::new();
        name.push(start.0);
        name.push(start.1);
        let mut context = start;

        for step in 0..MAX_STEPS {
            if name.len() >= MAX_LEN {
                break;
            }
            let Some(options) = self.table.get(&context) else {
                break;
            };
            let next = *stream.choice(&format!("{}:{}", key, step), options);
            if next == END {
                if name.len() >= MIN_LEN {
                    break;
                }
                // Too short to stop; redraw on the next step key
                continue;
            }
            name.push(next);
            context = (context.1, next);
        }

        name
    }
}

#[cfg(test)]
mod namegen_test;
