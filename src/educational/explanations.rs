//! Static explanatory text.
//!
//! Everything here is fixed content: the side notes shown next to each
//! stage and the two deep-dive panels on why models hallucinate and why
//! they tend to agree with the user. The engine never inspects it.

use crate::core::stage::StageKind;

/// A titled note attached to a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageNote {
    /// Note heading.
    pub title: &'static str,
    /// Note body.
    pub text: &'static str,
}

/// One entry of a deep-dive panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightEntry {
    /// Entry heading.
    pub title: &'static str,
    /// Entry body.
    pub desc: &'static str,
}

/// A deep-dive panel: heading, entries, and a closing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightPanel {
    /// Panel heading.
    pub heading: &'static str,
    /// Panel entries, in display order.
    pub entries: &'static [InsightEntry],
    /// Closing quote.
    pub quote: &'static str,
}

// =============================================================================
// STAGE NOTES
// =============================================================================

const TOKENIZATION_NOTE: StageNote = StageNote {
    title: "Embeddings (Espai de Conceptes)",
    text: "Cada número es converteix en un vector (p. ex. [0.12, -0.5, 0.88...]). \
Això permet al model saber que \"ou\" i \"cuina\" tenen una relació física en el món real.",
};

const ATTENTION_NOTE: StageNote = StageNote {
    title: "Mecanisme d'Atenció Actiu",
    text: "El model ignora el soroll (\"Com\", \"es\", \"un\") i es focalitza en els \
conceptes clau per predir la resposta correcta.",
};

const INFERENCE_NOTE: StageNote = StageNote {
    title: "Predicció Autoregressiva",
    text: "Cada paraula s'ha generat calculant la probabilitat estadística basada en el \
context anterior.",
};

const DECODING_NOTE: StageNote = StageNote {
    title: "Procés Completat",
    text: "S'ha arribat al token de final de text (EOS). El cicle de predicció s'atura i \
es mostra el resultat final.",
};

/// Side note for a stage, if it has one.
pub fn stage_note(kind: StageKind) -> Option<&'static StageNote> {
    match kind {
        StageKind::Prompt => None,
        StageKind::Tokenization => Some(&TOKENIZATION_NOTE),
        StageKind::Attention => Some(&ATTENTION_NOTE),
        StageKind::Inference => Some(&INFERENCE_NOTE),
        StageKind::Decoding => Some(&DECODING_NOTE),
    }
}

// =============================================================================
// DEEP-DIVE PANELS
// =============================================================================

/// Why models hallucinate.
pub const HALLUCINATION_PANEL: InsightPanel = InsightPanel {
    heading: "Per què al·lucinen?",
    entries: &[
        InsightEntry {
            title: "Probabilitat vs Veritat",
            desc: "El model prioritza la continuïtat del text. Si no sap qui va guanyar \
la lliga a Mart el 2025, inventarà el que millor 'soni'.",
        },
        InsightEntry {
            title: "Confabulació d'Embeddings",
            desc: "Conceptes propers en l'espai matemàtic (com dos científics del mateix \
camp) es poden barrejar fàcilment.",
        },
        InsightEntry {
            title: "Falta de Verificació",
            desc: "No hi ha un 'pensament' crític ni consulta externa. És pura estadística \
seqüencial.",
        },
    ],
    quote: "El model no pensa, simplement prediu quina paraula 'sona' millor segons \
l'estadística.",
};

/// Why models agree with the user.
pub const SYCOPHANCY_PANEL: InsightPanel = InsightPanel {
    heading: "Sycophancy (Submissió)",
    entries: &[
        InsightEntry {
            title: "L'entrenament humà (RLHF)",
            desc: "Els humans puntuem millor les respostes amables. El model aprèn que \
\"agradar\" és part de l'objectiu.",
        },
        InsightEntry {
            title: "El pes del Prompt",
            desc: "Si dius que la Terra és plana, el mecanisme d'atenció es fixa en aquest \
biaix i intenta mantenir la coherència amb el que demanes.",
        },
        InsightEntry {
            title: "Mirall de Context",
            desc: "Sense conviccions pròpies, el model simplement reflecteix l'opinió que \
l'usuari projecta.",
        },
    ],
    quote: "Si el context està esbiaixat, la resposta es decantarà cap a aquest biaix per \
pur càlcul probabilístic.",
};

/// Available panel topics.
pub static TOPICS: &[&str] = &["hallucinations", "sycophancy"];

/// Get a deep-dive panel by topic.
pub fn get_panel(topic: &str) -> Option<&'static InsightPanel> {
    match topic {
        "hallucinations" => Some(&HALLUCINATION_PANEL),
        "sycophancy" => Some(&SYCOPHANCY_PANEL),
        _ => None,
    }
}

/// Get all available panel topics.
pub fn get_all_topics() -> &'static [&'static str] {
    TOPICS
}
