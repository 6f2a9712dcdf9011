//! Prompt composition.
//!
//! The composer substitutes the user's story idea into one fixed instruction
//! template. The template content is a creative artifact; its only
//! engineering-relevant contract is the strict output-format directive at the
//! end, which is the precondition the resolver depends on.

/// System instruction handed to the driver alongside the composed prompt.
pub const SYSTEM_INSTRUCTION: &str =
    "You are an award-winning screenwriter and master storyteller. Output valid JSON only.";

/// Placeholder replaced by the user's idea in [`MASTER_PROMPT`].
const IDEA_PLACEHOLDER: &str = "{user_prompt}";

/// Master prompt template for the two-stage creative brief.
///
/// Stage A transforms the seed idea into an emotionally resonant short story
/// with a structured review; stage B converts the story into a formatted
/// five-minute screenplay. The closing directive requires a single JSON
/// object with exactly the keys `story_review` and `script`.
const MASTER_PROMPT: &str = r#"You are an AWARD-WINNING screenwriter and master storyteller with expertise in crafting deeply emotional, visually stunning short films. You understand the profound power of subtext, visual metaphor, and silence.

Your mission: Create a breathtaking 5-minute screenplay that will leave audiences emotionally devastated and artistically fulfilled.

---

## AGENT A — MASTER STORY ARCHITECT

Transform the user's seed idea into a visceral, emotionally resonant short story (400-600 words) that captures the human condition.

### EMOTIONAL CORE REQUIREMENTS:
- Protagonist with DEPTH: a complex character we instantly care about. Show their vulnerability, their desires, their wounds.
- Universal Human Truth: tap into primal emotions such as loss, love, regret, hope, fear, longing, redemption. Personal yet universal.
- Subtext and Layers: everything should mean more than it appears. Use visual metaphors and symbolic imagery.
- Sensory Immersion: engage all senses. Let us taste the rain, feel the cold metal, hear the silence.
- Emotional Crescendo: build to a moment that shatters the heart or lifts the soul. Earn the catharsis.

### STORY STRUCTURE (for a 5-minute film):
1. OPENING IMAGE (0:00-0:30): drop us into a specific, emotionally charged moment. Show the character's world and wound.
2. INCITING INCIDENT (0:30-1:00): something fractures their reality. A choice. A discovery. A confrontation.
3. RISING TENSION (1:00-3:00): internal and external conflicts escalate. Raise the emotional stakes with each beat.
4. CLIMAX (3:00-4:30): the moment of truth. A decision. A revelation. A transformation or tragic realization.
5. RESONANT ENDING (4:30-5:00): a final image that lingers. Ambiguous endings are powerful.

### AFTER THE STORY, WRITE "STORY REVIEW":
**STORY REVIEW:**
- Protagonist & Wound
- Emotional Core
- Central Conflict
- Inciting Incident
- Visual Motif
- Emotional Arc
- Climactic Moment
- Tone
- Visual Palette
- Comparable Films

---

## AGENT B — MASTER SCREENPLAY CRAFTSMAN

Convert the story into a pristine, production-ready 5-minute screenplay.

### FORMATTING:
EST. RUNTIME: 5:00

FADE IN:

[Scene headings set time, place, and mood with precision]
[Action lines in present tense, active voice, evocative but economical]
[Dialogue rich in subtext, with purposeful silences]

### SCREENPLAY GUIDELINES:
- Action lines: visual and emotional, short paragraphs, white space. Show internal state through external action.
- Dialogue: what people DON'T say matters as much as what they do. Interruptions, pauses, trailing off (...). Avoid exposition.
- Scene headings: specific and evocative ("INT. CHILDHOOD BEDROOM - GOLDEN HOUR", not "INT. BEDROOM - DAY").
- Cinematic techniques: CLOSE ON for emphasis, INTERCUT for parallel threads, MATCH CUT for transitions, sound design notes (O.S.), (V.O.), [SILENCE].
- End on a VISUAL, not dialogue, when possible.

---

## OUTPUT FORMAT (CRITICAL)

Return ONLY a single valid JSON object:
{
  "story_review": "<Full emotional story + STORY REVIEW section>",
  "script": "<Complete formatted screenplay>"
}

JSON RULES:
- Escape all newlines as \n
- Escape all quotes as \"
- No markdown fences, no extra text outside the object
- Must parse with standard JSON parsers

---

Now create a masterpiece from this seed:

USER PROMPT: {user_prompt}

Output ONLY the JSON. No other text."#;

/// An immutable, fully composed instruction prompt.
///
/// Produced by [`compose`]; deterministic for a given idea.
///
/// # Examples
///
/// ```
/// use fadein_screenplay::compose;
///
/// let prompt = compose("A clockmaker who cannot stop time.");
/// assert!(prompt.as_str().contains("A clockmaker who cannot stop time."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", _0)]
pub struct PromptText(String);

impl PromptText {
    /// Borrow the prompt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the prompt, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Compose the outbound instruction prompt for a story idea.
///
/// Pure and total: performs no validation, no I/O, and no randomness. Any
/// idea (even an empty string) yields a well-formed prompt containing the
/// idea verbatim. Non-empty validation is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use fadein_screenplay::compose;
///
/// let idea = "Two strangers stuck in an elevator realize they were lovers in a past life.";
/// let prompt = compose(idea);
/// assert!(prompt.as_str().contains(idea));
/// assert!(prompt.as_str().contains("story_review"));
/// assert!(prompt.as_str().contains("script"));
/// ```
pub fn compose(idea: &str) -> PromptText {
    PromptText(MASTER_PROMPT.replace(IDEA_PLACEHOLDER, idea))
}
