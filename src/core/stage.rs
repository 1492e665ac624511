//! Stage catalog for the walkthrough.
//!
//! A catalog is the ordered list of explanatory stages a session steps
//! through. Descriptors are built once and never mutated; their `id` is
//! their position in the catalog.

use serde::{Deserialize, Serialize};

/// What a stage demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Raw prompt capture.
    Prompt,
    /// Splitting the prompt into tokens.
    Tokenization,
    /// Attention over the prompt tokens.
    Attention,
    /// Token-by-token generation.
    Inference,
    /// Turning the output back into text.
    Decoding,
}

impl StageKind {
    /// Get the kind name as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Tokenization => "tokenization",
            Self::Attention => "attention",
            Self::Inference => "inference",
            Self::Decoding => "decoding",
        }
    }
}

/// Display accent of a stage. Opaque to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Blue,
    Purple,
    Indigo,
    Amber,
    Green,
}

impl Accent {
    /// ANSI foreground escape for terminal rendering.
    pub fn ansi(&self) -> &'static str {
        match self {
            Accent::Blue => "\x1b[34m",
            Accent::Purple => "\x1b[35m",
            Accent::Indigo => "\x1b[94m",
            Accent::Amber => "\x1b[33m",
            Accent::Green => "\x1b[32m",
        }
    }
}

/// One step of the explanatory sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDescriptor {
    /// Position in the catalog.
    pub id: usize,
    /// What the stage demonstrates.
    pub kind: StageKind,
    /// Stage title.
    pub title: String,
    /// One-line subtitle.
    pub subtitle: String,
    /// Explanatory paragraph.
    pub body: String,
    /// Display accent.
    pub accent: Accent,
}

/// Ordered, immutable list of stages.
///
/// # Example
///
/// ```
/// use llm_tour::core::stage::{StageCatalog, StageKind};
///
/// let catalog = StageCatalog::reference();
/// assert_eq!(catalog.len(), 5);
/// assert_eq!(catalog.position(StageKind::Inference), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct StageCatalog {
    stages: Vec<StageDescriptor>,
}

impl StageCatalog {
    /// Build a catalog from `(kind, title, subtitle, body, accent)` entries.
    ///
    /// Ids are assigned from position, so they are contiguous from zero.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (StageKind, S, S, S, Accent)>,
        S: Into<String>,
    {
        let stages = entries
            .into_iter()
            .enumerate()
            .map(|(id, (kind, title, subtitle, body, accent))| StageDescriptor {
                id,
                kind,
                title: title.into(),
                subtitle: subtitle.into(),
                body: body.into(),
                accent,
            })
            .collect();
        Self { stages }
    }

    /// The five-stage catalog bundled with the tour.
    pub fn reference() -> Self {
        Self::from_entries([
            (
                StageKind::Prompt,
                "El Prompt",
                "L'entrada",
                "Tot comença aquí. Per al model, el teu text no té significat emocional, \
                 són dades en brut que han de ser processades.",
                Accent::Blue,
            ),
            (
                StageKind::Tokenization,
                "Tokenització",
                "Traducció a números",
                "El text es fragmenta en tokens (paraules, síl·labes o signes) i cada un \
                 rep un valor numèric. Després es converteixen en 'embeddings', coordenades \
                 en un espai de conceptes.",
                Accent::Purple,
            ),
            (
                StageKind::Attention,
                "El Transformer",
                "Atenció i Context",
                "El mecanisme d'atenció analitza tota la frase alhora. Decideix que 'cuina' \
                 i 'ou' són més importants que 'un' per generar la resposta.",
                Accent::Indigo,
            ),
            (
                StageKind::Inference,
                "Inferència",
                "Predicció de la següent paraula",
                "El model calcula quina paraula és la més probable. No escriu la resposta \
                 de cop, sinó que prediu paraula per paraula re-llegint-ho tot cada vegada.",
                Accent::Amber,
            ),
            (
                StageKind::Decoding,
                "Decodificació",
                "Sortida",
                "Els números interns es tornen a convertir en text humà perquè el puguis \
                 llegir a la pantalla.",
                Accent::Green,
            ),
        ])
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the catalog has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Get a stage by index.
    pub fn get(&self, index: usize) -> Option<&StageDescriptor> {
        self.stages.get(index)
    }

    /// Get a stage by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Callers hold a
    /// [`StageNavigator`](crate::engine::StageNavigator) bounded by `len()`.
    pub fn stage(&self, index: usize) -> &StageDescriptor {
        &self.stages[index]
    }

    /// Iterate stages in order.
    pub fn iter(&self) -> impl Iterator<Item = &StageDescriptor> {
        self.stages.iter()
    }

    /// Index of the first stage of the given kind.
    pub fn position(&self, kind: StageKind) -> Option<usize> {
        self.stages.iter().position(|s| s.kind == kind)
    }
}

impl Default for StageCatalog {
    fn default() -> Self {
        Self::reference()
    }
}
