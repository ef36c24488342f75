//! Chat timeline state: streamed turns, inline images, attached content.
//!
//! DESIGN
//! ======
//! Turn ids mirror the host's incrementing turn sequence with a local
//! counter; the host streams the accumulated response rendering for the
//! active turn, so `apply_snapshot` replaces rather than appends. The
//! extracted content of the last upload rides along with the next prompt
//! submission as `doc_content`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatRecord;

/// One rendered item in the chat timeline.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatEntry {
    /// A prompt/response exchange with the model that produced it.
    Turn {
        turn_id: u64,
        prompt: String,
        response: String,
        model: String,
    },
    /// An uploaded image shown inline.
    Image { src: String },
}

/// State for the chat timeline and the in-flight streamed turn.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    pub streaming_turn: Option<u64>,
    pub doc_content: String,
    turn_counter: u64,
}

impl ChatState {
    /// Open a new streamed turn and return its id.
    pub fn begin_turn(&mut self, prompt: String, model: String) -> u64 {
        self.turn_counter += 1;
        let turn_id = self.turn_counter;
        self.entries.push(ChatEntry::Turn {
            turn_id,
            prompt,
            response: String::new(),
            model,
        });
        self.streaming_turn = Some(turn_id);
        turn_id
    }

    /// Replace the active turn's response with the latest streamed
    /// rendering. Returns `false` when no turn is streaming (the snapshot
    /// is dropped).
    pub fn apply_snapshot(&mut self, text: &str) -> bool {
        let Some(active) = self.streaming_turn else {
            return false;
        };
        for entry in self.entries.iter_mut().rev() {
            if let ChatEntry::Turn { turn_id, response, .. } = entry {
                if *turn_id == active {
                    text.clone_into(response);
                    return true;
                }
            }
        }
        false
    }

    /// Close the active turn, returning its record for chat persistence.
    pub fn finish_turn(&mut self) -> Option<ChatRecord> {
        let active = self.streaming_turn.take()?;
        self.entries.iter().rev().find_map(|entry| match entry {
            ChatEntry::Turn {
                turn_id,
                prompt,
                response,
                model,
            } if *turn_id == active => Some(ChatRecord {
                prompt: prompt.clone(),
                response: response.clone(),
                model: model.clone(),
            }),
            _ => None,
        })
    }

    /// Append an uploaded image to the timeline.
    pub fn push_image(&mut self, src: impl Into<String>) {
        self.entries.push(ChatEntry::Image { src: src.into() });
    }

    pub fn image_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, ChatEntry::Image { .. }))
            .count()
    }
}
