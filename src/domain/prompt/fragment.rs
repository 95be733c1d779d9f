use serde::{Deserialize, Serialize};

/// Pipeline position of a resolver. Fragment order is `slot * 10 + sub-index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Subject,
    Pose,
    Orientation,
    Scene,
    Lighting,
    FilmType,
    Texture,
    Palette,
    FilmStock,
    Wardrobe,
    Props,
    Camera,
    TennerDescriptors,
    OutputParameters,
    StyleSuffix,
}

impl Slot {
    pub fn base_order(&self) -> u32 {
        (*self as u32) * 10
    }
}

/// How a fragment attaches to the text before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    /// Opens the first sentence.
    Lead,
    /// Continues the open sentence.
    Clause,
    /// Stands alone as a full sentence.
    Sentence,
}

/// One resolver's contribution to the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptFragment {
    pub order: u32,
    pub slot: Slot,
    pub kind: FragmentKind,
    pub text: String,
}

impl PromptFragment {
    pub fn new(slot: Slot, sub_index: u32, kind: FragmentKind, text: impl Into<String>) -> Self {
        Self { order: slot.base_order() + sub_index, slot, kind, text: text.into() }
    }

    pub fn lead(slot: Slot, text: impl Into<String>) -> Self {
        Self::new(slot, 0, FragmentKind::Lead, text)
    }

    pub fn clause(slot: Slot, text: impl Into<String>) -> Self {
        Self::new(slot, 0, FragmentKind::Clause, text)
    }

    pub fn sentence(slot: Slot, text: impl Into<String>) -> Self {
        Self::new(slot, 0, FragmentKind::Sentence, text)
    }
}

/// A fragment that could not be resolved and was left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFragment {
    pub slot: Slot,
    pub reason: String,
}

/// Uppercase the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `a`, `a and b`, `a, b and c`.
pub fn english_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

fn ends_with_terminal(text: &str) -> bool {
    text.trim_end().ends_with(['.', '!', '?'])
}

/// Drop trailing terminal punctuation so another clause can follow.
fn strip_terminal(text: &mut String) {
    let kept = text.trim_end().trim_end_matches(['.', '!', '?']).trim_end().len();
    text.truncate(kept);
}

/// Join fragments in `order` into prompt text.
///
/// A clause right after the lead joins with a space, later clauses with a
/// comma. Terminal punctuation in front of a joining clause is dropped.
/// Sentences close any open sentence first and always end with terminal
/// punctuation.
pub fn join_fragments(fragments: &[PromptFragment]) -> String {
    let mut ordered: Vec<&PromptFragment> =
        fragments.iter().filter(|fragment| !fragment.text.trim().is_empty()).collect();
    ordered.sort_by_key(|fragment| fragment.order);

    let mut text = String::new();
    let mut open = false;
    let mut clauses = 0usize;

    for fragment in ordered {
        let body = fragment.text.trim();
        match fragment.kind {
            FragmentKind::Lead => {
                close_sentence(&mut text, &mut open);
                push_separator(&mut text);
                text.push_str(&capitalize(body));
                open = true;
                clauses = 0;
            }
            FragmentKind::Clause if open => {
                strip_terminal(&mut text);
                text.push_str(if clauses == 0 { " " } else { ", " });
                text.push_str(body);
                clauses += 1;
            }
            FragmentKind::Clause => {
                push_separator(&mut text);
                text.push_str(&capitalize(body));
                open = true;
                clauses = 1;
            }
            FragmentKind::Sentence => {
                close_sentence(&mut text, &mut open);
                push_separator(&mut text);
                text.push_str(body);
                if !ends_with_terminal(body) {
                    text.push('.');
                }
            }
        }
    }
    close_sentence(&mut text, &mut open);
    text
}

fn push_separator(text: &mut String) {
    if !text.is_empty() {
        text.push(' ');
    }
}

fn close_sentence(text: &mut String, open: &mut bool) {
    if *open {
        if !ends_with_terminal(text) {
            text.push('.');
        }
        *open = false;
    }
}
