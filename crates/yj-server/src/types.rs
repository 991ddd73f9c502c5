//! Request and response bodies of the HTTP API.

use serde::{Deserialize, Serialize};
use yj_engine::{Divination, Hexagram, SIX_SPIRITS};
use yj_interpret::HexagramContext;

// ---------------------------------------------------------------------------
// Coin cast
// ---------------------------------------------------------------------------

/// Body of `POST /api/divine/coin`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CoinRequest {
    /// Seed for a reproducible cast.
    pub seed: Option<String>,
    /// The question being asked.
    #[serde(alias = "question")]
    pub topic: Option<String>,
}

/// A hexagram as rendered to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexagramView {
    /// King Wen ordinal.
    pub code: u8,
    /// Canonical name.
    pub name: &'static str,
    /// Name including the trigram images.
    pub full_name: String,
    /// Upper trigram name.
    pub upper: &'static str,
    /// Lower trigram name.
    pub lower: &'static str,
    /// Line bits, bottom to top, `1` = yang.
    pub lines: [u8; 6],
    /// Moving flags; only present on the primary hexagram.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moving: Option<[bool; 6]>,
}

impl HexagramView {
    fn new(hexagram: &Hexagram, moving: Option<[bool; 6]>) -> Self {
        Self {
            code: hexagram.ordinal(),
            name: hexagram.name(),
            full_name: hexagram.full_name(),
            upper: hexagram.upper().name(),
            lower: hexagram.lower().name(),
            lines: hexagram.bits(),
            moving,
        }
    }
}

/// Extra information attached to a cast.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMeta {
    /// The six spirits, bottom to top.
    pub six_beasts: [&'static str; 6],
}

/// Response of `POST /api/divine/coin`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinResponse {
    /// Always `coin`.
    pub method: &'static str,
    /// The question, echoed.
    pub question: String,
    /// Hexagram as cast.
    pub primary: HexagramView,
    /// Hexagram after the moving lines change.
    pub changed: HexagramView,
    /// Labels of the moving lines.
    pub change_list: Vec<&'static str>,
    /// Extras.
    pub meta: CastMeta,
}

impl From<&Divination> for CoinResponse {
    fn from(divination: &Divination) -> Self {
        Self {
            method: "coin",
            question: divination.topic.clone(),
            primary: HexagramView::new(&divination.primary, Some(divination.moving())),
            changed: HexagramView::new(&divination.changed, None),
            change_list: divination.change_list(),
            meta: CastMeta {
                six_beasts: SIX_SPIRITS,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Traditional interpretation
// ---------------------------------------------------------------------------

/// Reference to a hexagram by ordinal or name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HexagramRef {
    /// King Wen ordinal.
    pub code: Option<i64>,
    /// Canonical name, used when `code` is absent.
    pub name: Option<String>,
    /// Moving flags, bottom to top.
    pub moving: Vec<bool>,
}

/// The cast being interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct CastRef {
    /// Hexagram as cast.
    pub primary: HexagramRef,
    /// Hexagram after change.
    pub changed: HexagramRef,
}

/// Body of `POST /api/divine/interpret`.
#[derive(Debug, Clone, Deserialize)]
pub struct InterpretRequest {
    /// The cast.
    pub hexagram: CastRef,
    /// The question asked.
    #[serde(default)]
    pub question: String,
}

// ---------------------------------------------------------------------------
// Single line
// ---------------------------------------------------------------------------

/// Body of `POST /api/divine/line`.
#[derive(Debug, Clone, Deserialize)]
pub struct LineRequest {
    /// King Wen ordinal.
    pub code: i64,
    /// Line index, 0 = bottom.
    pub line: i64,
    /// Also ask the interpretation service about this line.
    #[serde(default)]
    pub llm: bool,
    /// Question for the interpretation service.
    #[serde(default)]
    pub question: String,
    /// Model override.
    #[serde(default)]
    pub model: Option<String>,
}

/// Response of `POST /api/divine/line`.
#[derive(Debug, Clone, Serialize)]
pub struct LineResponse {
    /// Classical line statement.
    pub text: String,
    /// Modern gloss.
    pub modern: Option<String>,
    /// Model interpretation, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai: Option<String>,
}

// ---------------------------------------------------------------------------
// AI interpretation
// ---------------------------------------------------------------------------

/// Body of `POST /api/ai`.
#[derive(Debug, Clone, Deserialize)]
pub struct AiRequest {
    /// The question asked.
    #[serde(default)]
    pub question: String,
    /// Model override.
    #[serde(default)]
    pub model: Option<String>,
    /// The hexagram with its texts.
    pub hexagram: HexagramContext,
}
