//! The suggestion picker: remote fetch with a safe local fallback.
//!
//! A suggestion request tries one timeout-bounded fetch against the
//! category's endpoint, runs the result through the content-safety filter,
//! and otherwise draws from a curated local pool while avoiding an immediate
//! repeat. The picker never returns an error: the worst case is a generic
//! locally-sourced string.

pub mod fallback;
pub mod remote;

pub use fallback::{is_safe_text, pick_different, BLOCKLIST};
pub use remote::SuggestionClient;

use crate::config::Config;
use tracing::debug;

/// The three suggestion categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Category {
    /// A short piece of practical advice.
    Advice,
    /// An encouraging quote.
    Quote,
    /// A small activity to try right now.
    Activity,
}

impl Category {
    /// The static fallback pool for this category.
    pub fn fallback_pool(self) -> &'static [&'static str] {
        match self {
            Category::Advice => fallback::FALLBACK_ADVICE,
            Category::Quote => fallback::FALLBACK_QUOTES,
            Category::Activity => fallback::FALLBACK_ACTIVITIES,
        }
    }
}

/// Per-session "last shown" state, one slot per category.
#[derive(Debug, Default)]
struct LastShown {
    advice: Option<String>,
    quote: Option<String>,
    activity: Option<String>,
}

impl LastShown {
    fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Advice => self.advice.as_deref(),
            Category::Quote => self.quote.as_deref(),
            Category::Activity => self.activity.as_deref(),
        }
    }

    fn set(&mut self, category: Category, text: String) {
        let slot = match category {
            Category::Advice => &mut self.advice,
            Category::Quote => &mut self.quote,
            Category::Activity => &mut self.activity,
        };
        *slot = Some(text);
    }
}

/// Fetches suggestions with a safe fallback and repeat avoidance.
///
/// "Last shown" state lives only for the lifetime of the picker; it exists
/// solely so two consecutive fallbacks for the same category differ when the
/// pool allows it.
///
/// # Examples
///
/// ```no_run
/// use wellme::{Config, suggest::{Category, SuggestionPicker}};
///
/// let config = Config::load()?;
/// let mut picker = SuggestionPicker::new(&config);
/// let text = picker.get(Category::Advice);
/// assert!(!text.is_empty());
/// # Ok::<(), wellme::AppError>(())
/// ```
pub struct SuggestionPicker {
    client: SuggestionClient,
    last_shown: LastShown,
}

impl SuggestionPicker {
    /// Creates a picker using the configured endpoints and timeout.
    pub fn new(config: &Config) -> Self {
        SuggestionPicker {
            client: SuggestionClient::new(config),
            last_shown: LastShown::default(),
        }
    }

    /// Returns one suggestion for `category`.
    ///
    /// Any fetch failure, unsafe response, or absent field falls back to the
    /// category's local pool. The returned text is always a non-empty string
    /// and is recorded as "last shown" for the category.
    pub fn get(&mut self, category: Category) -> String {
        let fetched = self
            .client
            .fetch(category)
            .filter(|text| is_safe_text(text));

        let text = match fetched {
            Some(text) => text,
            None => {
                debug!("Falling back to local {:?} pool", category);
                let mut rng = rand::thread_rng();
                pick_different(
                    &mut rng,
                    category.fallback_pool(),
                    self.last_shown.get(category),
                )
                .to_string()
            }
        };

        self.last_shown.set(category, text.clone());
        text
    }
}
