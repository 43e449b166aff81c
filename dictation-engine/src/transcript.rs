/// One recognized stretch of speech.
///
/// Partial segments are still being refined by the recognizer and may be
/// replaced wholesale on the next result event; final segments are
/// settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    pub text: String,
    pub is_final: bool,
}

impl TranscriptSegment {
    pub fn partial(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Accumulated dictation transcript.
///
/// Mutated only by the state machine. Each result event replaces the
/// whole segment list and the combined text is recomputed from scratch,
/// never appended to.
#[derive(Debug, Clone, Default)]
pub struct TranscriptState {
    segments: Vec<TranscriptSegment>,
    text: String,
}

impl TranscriptState {
    /// Replace the segment list with a fresh snapshot.
    pub fn apply_snapshot(&mut self, segments: Vec<TranscriptSegment>) {
        self.text = combine(&segments);
        self.segments = segments;
    }

    /// Install externally produced text (the fallback transcription path).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.segments.clear();
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.segments.clear();
        self.text.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn segments(&self) -> &[TranscriptSegment] {
        &self.segments
    }
}

/// Combined text for a segment snapshot: every segment in order, one
/// space after each final segment, runs of whitespace collapsed, ends
/// trimmed.
fn combine(segments: &[TranscriptSegment]) -> String {
    let mut combined = String::new();
    for segment in segments {
        combined.push_str(&segment.text);
        if segment.is_final {
            combined.push(' ');
        }
    }
    combined.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_then_final_snapshots() {
        let mut transcript = TranscriptState::default();

        transcript.apply_snapshot(vec![TranscriptSegment::partial("take")]);
        assert_eq!(transcript.text(), "take");

        transcript.apply_snapshot(vec![TranscriptSegment::partial("take two")]);
        assert_eq!(transcript.text(), "take two");

        transcript.apply_snapshot(vec![
            TranscriptSegment::finalized("take two tablets"),
            TranscriptSegment::partial("with"),
        ]);
        assert_eq!(transcript.text(), "take two tablets with");
    }

    #[test]
    fn space_inserted_after_each_final_segment() {
        let mut transcript = TranscriptState::default();
        transcript.apply_snapshot(vec![
            TranscriptSegment::finalized("hello"),
            TranscriptSegment::finalized("world"),
        ]);
        assert_eq!(transcript.text(), "hello world");
    }

    #[test]
    fn whitespace_is_normalized() {
        let mut transcript = TranscriptState::default();
        transcript.apply_snapshot(vec![
            TranscriptSegment::finalized("  any   chest "),
            TranscriptSegment::partial(" pain today  "),
        ]);
        assert_eq!(transcript.text(), "any chest pain today");
    }

    #[test]
    fn snapshot_replaces_rather_than_appends() {
        let mut transcript = TranscriptState::default();
        transcript.apply_snapshot(vec![TranscriptSegment::partial("hel")]);
        transcript.apply_snapshot(vec![TranscriptSegment::partial("hello")]);
        assert_eq!(transcript.text(), "hello");
        assert_eq!(transcript.segments().len(), 1);
    }

    #[test]
    fn empty_snapshot_empties_the_transcript() {
        let mut transcript = TranscriptState::default();
        transcript.apply_snapshot(vec![TranscriptSegment::finalized("something")]);
        transcript.apply_snapshot(Vec::new());
        assert!(transcript.is_empty());
    }

    #[test]
    fn set_text_discards_segments() {
        let mut transcript = TranscriptState::default();
        transcript.apply_snapshot(vec![TranscriptSegment::finalized("live text")]);
        transcript.set_text("proxy text");
        assert_eq!(transcript.text(), "proxy text");
        assert!(transcript.segments().is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut transcript = TranscriptState::default();
        transcript.apply_snapshot(vec![TranscriptSegment::finalized("text")]);
        transcript.clear();
        assert!(transcript.is_empty());
        assert!(transcript.segments().is_empty());
    }
}
