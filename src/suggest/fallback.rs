//! Static fallback pools and the content-safety filter.
//!
//! The blocklist filter is a minimal safety gate, not moderation: it does
//! plain lowercase substring matching, so "die" also rejects "diet". That
//! behavior is kept as-is.

use crate::constants::MAX_PICK_ATTEMPTS;
use rand::Rng;

/// Substrings that disqualify a fetched suggestion.
pub const BLOCKLIST: &[&str] = &[
    "bleach",
    "suicide",
    "kill",
    "die",
    "harm",
    "self-harm",
    "violence",
    "weapon",
    "drugs",
    "overdose",
    "starve",
    "anorexia",
    "bulimia",
    "purge",
    "cutting",
    "abuse",
    "racist",
    "sex",
    "nsfw",
    "terror",
    "bomb",
    "gun",
];

/// Local advice shown when the remote fetch fails.
pub const FALLBACK_ADVICE: &[&str] = &[
    "Name one thing that went okay today.",
    "Drink some water and take three slow breaths.",
    "Pick the smallest next step and only do that.",
    "Set a 5-minute timer and stop when it ends.",
    "Move one thing from your brain to a list.",
    "Ask yourself: what would 'just okay' look like, not 'perfect'?",
    "Break your next task into two smaller steps.",
    "Tidy one tiny area you can see from where you are.",
    "Give yourself permission to be 'unfinished' today.",
    "Future you will appreciate any tiny bit of kindness you give yourself now.",
];

/// Local quotes shown when the remote fetch fails.
pub const FALLBACK_QUOTES: &[&str] = &[
    "Small steps add up.",
    "You don't need to feel ready to begin.",
    "Done is kinder than perfect.",
    "Your pace is valid.",
    "Even slow progress is progress.",
    "You have got through 100% of your hard days so far.",
    "Rest is productive when you need it.",
    "It's okay to be a work in progress.",
    "You are allowed to take up space.",
    "Starting messy still counts as starting.",
];

/// Local activities shown when the remote fetch fails.
pub const FALLBACK_ACTIVITIES: &[&str] = &[
    "Stretch your neck and shoulders gently.",
    "Look out of a window and name five things you can see.",
    "Put a glass of water within reach and take a sip.",
    "Write one sentence about how today feels.",
    "Walk to another room and back slowly.",
    "Play one favourite song and really listen.",
    "Organise one icon, one file or one tab.",
    "Text someone a simple 'thinking of you' message.",
    "Notice three things in the room that you like.",
    "Set a 2-minute timer and do nothing on purpose.",
];

/// Returns true when `text` is non-empty and contains no blocklisted substring.
///
/// Matching is case-insensitive and substring-based.
pub fn is_safe_text(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let lower = text.to_lowercase();
    !BLOCKLIST.iter().any(|term| lower.contains(term))
}

/// Picks a random member of `pool`, avoiding `last` when the pool has more
/// than one member.
///
/// The avoidance is a bounded retry of the random pick, not exhaustive: after
/// `MAX_PICK_ATTEMPTS` re-picks a repeat is accepted rather than looping
/// forever.
pub fn pick_different<R: Rng>(rng: &mut R, pool: &[&'static str], last: Option<&str>) -> &'static str {
    debug_assert!(!pool.is_empty());
    if pool.len() == 1 {
        return pool[0];
    }

    let mut candidate = pool[rng.gen_range(0..pool.len())];
    let mut attempts = 0;
    while Some(candidate) == last && attempts < MAX_PICK_ATTEMPTS {
        candidate = pool[rng.gen_range(0..pool.len())];
        attempts += 1;
    }
    candidate
}
