//! Skeleton templates with named insertion points.
//!
//! A skeleton is plain HTML or CSS in which some lines consist of nothing but
//! a marker comment. [`Template::parse`] turns each such line into a [`Slot`];
//! [`Template::fill`] then produces the output in one pass, asking a closure
//! for the content of every slot.

/// Named insertion point of a skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Rendered bookmark columns.
    TreeColumns,
    /// Bookmark list and search initialization.
    BookmarksData,
    /// Reference to the bundled search script.
    SearchScript,
    /// Font-size declaration in the stylesheet.
    FontSize,
}

impl Slot {
    pub const ALL: [Slot; 4] = [
        Slot::TreeColumns,
        Slot::BookmarksData,
        Slot::SearchScript,
        Slot::FontSize,
    ];

    /// Marker text as it appears in the skeleton.
    pub fn marker(self) -> &'static str {
        match self {
            Slot::TreeColumns => "<!-- Tree Columns -->",
            Slot::BookmarksData => "<!-- Bookmarks Data -->",
            Slot::SearchScript => "<!-- Search Script -->",
            Slot::FontSize => "/* font-size */",
        }
    }

    /// Recognizes a marker line; surrounding whitespace is ignored.
    pub fn from_line(line: &str) -> Option<Slot> {
        let line = line.trim();
        Slot::ALL.into_iter().find(|slot| slot.marker() == line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot {
        slot: Slot,
        indent: String,
        line: String,
    },
}

/// A parsed skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Splits `text` into literal lines and marker slots.
    pub fn parse(text: &str) -> Self {
        let segments = text
            .split_inclusive('\n')
            .map(|line| match Slot::from_line(line) {
                Some(slot) => Segment::Slot {
                    slot,
                    indent: line[..line.len() - line.trim_start().len()].to_string(),
                    line: line.to_string(),
                },
                None => Segment::Text(line.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Slots in the order they occur.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Slot { slot, .. } => Some(*slot),
            Segment::Text(_) => None,
        })
    }

    pub fn has_slot(&self, slot: Slot) -> bool {
        self.slots().any(|s| s == slot)
    }

    /// Produces the output text.
    ///
    /// `content` is called once per slot occurrence. Returned text replaces
    /// the marker line, with every non-empty line indented like the marker.
    /// `None` keeps the marker line as is. Literal lines are copied unchanged.
    pub fn fill<F>(&self, mut content: F) -> String
    where
        F: FnMut(Slot) -> Option<String>,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot { slot, indent, line } => match content(*slot) {
                    Some(text) => {
                        for l in text.lines() {
                            if !l.is_empty() {
                                out.push_str(indent);
                            }
                            out.push_str(l);
                            out.push('\n');
                        }
                    }
                    None => out.push_str(line),
                },
            }
        }
        out
    }
}
