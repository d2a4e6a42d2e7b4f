//! Per-platform generation results.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ProviderError;
use crate::event::Platform;

/// What a generator produced for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    /// Post text.
    Draft(String),
    /// The provider failed for this platform only.
    Failed(ProviderError),
}

impl PostOutcome {
    /// The text shown to the user: the draft, or the error message.
    pub fn text(&self) -> String {
        self.to_string()
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PostOutcome::Failed(_))
    }
}

impl Default for PostOutcome {
    fn default() -> Self {
        PostOutcome::Draft(String::new())
    }
}

impl fmt::Display for PostOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostOutcome::Draft(text) => f.write_str(text),
            PostOutcome::Failed(err) => write!(f, "{}", err),
        }
    }
}

impl From<Result<String, ProviderError>> for PostOutcome {
    fn from(result: Result<String, ProviderError>) -> Self {
        match result {
            Ok(text) => PostOutcome::Draft(text),
            Err(err) => PostOutcome::Failed(err),
        }
    }
}

/// Length statistics for a rendered post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostStats {
    /// Length in characters.
    pub chars: usize,
    /// Characters beyond the platform's advisory limit, if exceeded.
    pub over_limit: Option<usize>,
}

/// One outcome per platform.
///
/// The three entries exist by construction. The default value holds three
/// empty drafts, meaning nothing has been generated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    posts: [PostOutcome; 3],
}

impl GenerationResult {
    /// Build a result from the three platform outcomes.
    pub fn new(linkedin: PostOutcome, twitter: PostOutcome, whatsapp: PostOutcome) -> Self {
        Self {
            posts: [linkedin, twitter, whatsapp],
        }
    }

    pub fn get(&self, platform: Platform) -> &PostOutcome {
        &self.posts[platform.index()]
    }

    /// Replace one platform's outcome.
    pub fn set(&mut self, platform: Platform, outcome: PostOutcome) {
        self.posts[platform.index()] = outcome;
    }

    /// Iterate outcomes in platform order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &PostOutcome)> {
        Platform::ALL.into_iter().zip(self.posts.iter())
    }

    /// Whether any platform holds non-empty text.
    pub fn has_content(&self) -> bool {
        self.posts.iter().any(|post| !post.text().is_empty())
    }

    /// Number of platforms that failed.
    pub fn failure_count(&self) -> usize {
        self.posts.iter().filter(|post| post.is_failed()).count()
    }

    /// Character count and advisory-limit overage for one platform.
    pub fn stats(&self, platform: Platform) -> PostStats {
        let chars = self.get(platform).text().chars().count();
        let over_limit = platform
            .char_limit()
            .filter(|limit| chars > *limit)
            .map(|limit| chars - limit);
        PostStats { chars, over_limit }
    }
}

impl Serialize for GenerationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.posts.len()))?;
        for (platform, outcome) in self.iter() {
            map.serialize_entry(platform.as_str(), &outcome.text())?;
        }
        map.end()
    }
}
