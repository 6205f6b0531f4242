//! Postings-list accumulation during indexing.
//!
//! A [`PostingsList`] holds one term's postings while documents stream
//! through the indexer: parallel arrays of document IDs, term frequencies,
//! and word positions. It is the producer side of the codec — the id and
//! frequency arrays (and their d-gap form) are what [`crate::encode`]
//! consumes when a segment is written.

use std::fmt;

/// Term frequencies stop incrementing at this threshold so they never wrap.
const MAX_TERM_FREQUENCY: u16 = 0xFFFE;

const INITIAL_CAPACITY: usize = 4;

/// One term's postings, accumulated a `(document, position)` pair at a time.
///
/// Document IDs count from 1 and must arrive in non-decreasing order, the
/// order the indexer walks the collection in.
#[derive(Debug, Clone, Default)]
pub struct PostingsList {
    highest_document: u32,
    highest_position: u32,
    document_ids: Vec<u32>,
    term_frequencies: Vec<u16>,
    positions: Vec<u32>,
}

/// One `(document, frequency, position)` triple yielded during iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub document: u32,
    pub frequency: u16,
    pub position: u32,
}

impl PostingsList {
    pub fn new() -> Self {
        PostingsList {
            highest_document: 0,
            highest_position: 0,
            document_ids: Vec::with_capacity(INITIAL_CAPACITY),
            term_frequencies: Vec::with_capacity(INITIAL_CAPACITY),
            positions: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Record one occurrence of the term at `position` in `document_id`.
    ///
    /// A repeat occurrence in the current document only bumps its term
    /// frequency (saturating); a new document appends a fresh posting.
    /// Every occurrence appends its position.
    pub fn push(&mut self, document_id: u32, position: u32) {
        if document_id == self.highest_document {
            let frequency = self
                .term_frequencies
                .last_mut()
                .expect("repeat document implies an existing posting");
            if *frequency <= MAX_TERM_FREQUENCY {
                *frequency += 1;
            }
        } else {
            self.document_ids.push(document_id);
            self.highest_document = document_id;
            self.term_frequencies.push(1);
        }

        self.positions.push(position);
        self.highest_position = position;
    }

    /// Number of documents the term occurs in.
    pub fn document_frequency(&self) -> usize {
        self.document_ids.len()
    }

    pub fn document_ids(&self) -> &[u32] {
        &self.document_ids
    }

    pub fn term_frequencies(&self) -> &[u16] {
        &self.term_frequencies
    }

    pub fn term_frequencies_mut(&mut self) -> &mut [u16] {
        &mut self.term_frequencies
    }

    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    pub fn highest_document(&self) -> u32 {
        self.highest_document
    }

    /// Document IDs as d-gaps: the first ID as-is, then successive
    /// differences. This is the shape the codec compresses best.
    pub fn document_gaps(&self) -> Vec<u32> {
        let mut previous = 0u32;
        self.document_ids
            .iter()
            .map(|&id| {
                let gap = id - previous;
                previous = id;
                gap
            })
            .collect()
    }

    /// Iterate the postings one `(document, frequency, position)` at a time,
    /// a triple per recorded position.
    pub fn iter(&self) -> Postings<'_> {
        Postings {
            list: self,
            document: 0,
            position: 0,
            positions_left: self.term_frequencies.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over a [`PostingsList`], yielding one [`Posting`] per position.
pub struct Postings<'a> {
    list: &'a PostingsList,
    document: usize,
    position: usize,
    positions_left: u16,
}

impl Iterator for Postings<'_> {
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        if self.position >= self.list.positions.len() {
            return None;
        }

        let posting = Posting {
            document: self.list.document_ids[self.document],
            frequency: self.list.term_frequencies[self.document],
            position: self.list.positions[self.position],
        };

        self.position += 1;
        // Saturated frequencies can undercount positions; the extra
        // positions stay attached to the final document.
        self.positions_left = self.positions_left.saturating_sub(1);
        if self.positions_left == 0 && self.document + 1 < self.list.document_ids.len() {
            self.document += 1;
            self.positions_left = self.list.term_frequencies[self.document];
        }

        Some(posting)
    }
}

impl<'a> IntoIterator for &'a PostingsList {
    type Item = Posting;
    type IntoIter = Postings<'a>;

    fn into_iter(self) -> Postings<'a> {
        self.iter()
    }
}

impl fmt::Display for PostingsList {
    /// Render as `<DocID,TF,Pos,Pos,...>` per document.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut previous_document = None;
        for posting in self {
            if previous_document != Some(posting.document) {
                if previous_document.is_some() {
                    write!(f, ">")?;
                }
                write!(f, "<{},{},{}", posting.document, posting.frequency, posting.position)?;
                previous_document = Some(posting.document);
            } else {
                write!(f, ",{}", posting.position)?;
            }
        }
        if previous_document.is_some() {
            write!(f, ">")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_two_documents() {
        let mut postings = PostingsList::new();
        postings.push(1, 100);
        postings.push(1, 101);
        postings.push(2, 102);
        postings.push(2, 103);

        assert_eq!(postings.to_string(), "<1,2,100,101><2,2,102,103>");
        assert_eq!(postings.document_frequency(), 2);
        assert_eq!(postings.document_ids(), &[1, 2]);
        assert_eq!(postings.term_frequencies(), &[2, 2]);
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let postings = PostingsList::new();
        assert_eq!(postings.to_string(), "");
        assert_eq!(postings.iter().count(), 0);
    }

    #[test]
    fn test_document_gaps() {
        let mut postings = PostingsList::new();
        postings.push(3, 1);
        postings.push(7, 1);
        postings.push(8, 2);
        postings.push(20, 9);

        assert_eq!(postings.document_gaps(), vec![3, 4, 1, 12]);
    }

    #[test]
    fn test_term_frequency_saturates() {
        let mut postings = PostingsList::new();
        for position in 0..0x1_0010u32 {
            postings.push(1, position);
        }
        assert_eq!(postings.term_frequencies(), &[0xFFFF]);
        // Positions are still all recorded.
        assert_eq!(postings.positions().len(), 0x1_0010);
    }
}
