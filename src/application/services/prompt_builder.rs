use crate::domain::Transcript;

const NOTES_INSTRUCTIONS: &str = "You are an educational AI. Read the lecture transcript below \
and turn it into study material for a student. Also rate how well the lecturer taught.";

const NOTES_OUTPUT_SHAPE: &str = r#"Return STRICT JSON ONLY, with no commentary and no code fences, in exactly this shape:
{
  "notes": "Markdown formatted notes",
  "teacher_score": {
    "score": 0-10,
    "simplicity": 0-10,
    "clarity": 0-10,
    "examples": 0-10,
    "feedback": "one sentence"
  },
  "flashcards": [
    { "question": "string", "answer": "string" }
  ],
  "quiz": [
    { "question": "string", "options": ["string", "string", "string", "string"], "answer": "string" }
  ]
}"#;

/// Renders the study-notes prompt around `transcript`.
///
/// The transcript is inserted verbatim. Instructions inside it are not
/// neutralised, so a transcript can steer the model away from the template.
pub fn build_notes_prompt(transcript: &Transcript) -> String {
    format!(
        "{NOTES_INSTRUCTIONS}\n\nLECTURE:\n{}\n\n{NOTES_OUTPUT_SHAPE}\n",
        transcript.as_str()
    )
}
