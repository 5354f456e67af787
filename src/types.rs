//! In-memory document model shared by the encoder and every decode path.

use chrono::{DateTime, Utc};

/// Which content field of a [`Letter`] is meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LetterKind {
    #[default]
    Text,
    Voice,
}

impl LetterKind {
    /// Wire value. Only non-default kinds are ever written.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
        }
    }

    /// Lenient parse: anything that is not a voice marker is a text letter.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "voice" | "v" => Self::Voice,
            _ => Self::Text,
        }
    }
}

/// One shareable unit of content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Letter {
    pub id: String,
    pub kind: LetterKind,
    /// The "open when…" condition.
    pub label: String,
    /// Populated for text letters.
    pub text_body: String,
    /// Embedded recording (data URL text), populated for voice letters.
    pub audio_payload: Option<String>,
    /// Locked until this instant. Evaluated by the viewer, never by the codec.
    pub release_date: Option<DateTime<Utc>>,
}

impl Letter {
    pub fn text(id: impl Into<String>, label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            text_body: body.into(),
            ..Default::default()
        }
    }

    pub fn voice(
        id: impl Into<String>,
        label: impl Into<String>,
        audio_payload: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: LetterKind::Voice,
            label: label.into(),
            audio_payload: Some(audio_payload.into()),
            ..Default::default()
        }
    }

    pub fn with_release_date(mut self, release_date: DateTime<Utc>) -> Self {
        self.release_date = Some(release_date);
        self
    }
}

/// An ordered group of letters plus shared metadata.
///
/// Empty `name`/`recipient` mean "absent"; the encoder elides them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub recipient: String,
    pub letters: Vec<Letter>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Collection {
    /// Wrap a lone letter the way pre-collection tokens are presented.
    pub(crate) fn single(id: String, recipient: String, letter: Letter) -> Self {
        Self {
            id,
            recipient,
            letters: vec![letter],
            ..Default::default()
        }
    }
}
