// walk.rs
use crate::error::TraversalError;
use crate::options::GlobOptions;
use crate::patterns::{CompiledPattern, Segment};
use camino::Utf8PathBuf;
use std::{collections::HashSet, io, path::PathBuf};

/// Kind of a matched filesystem entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EntryKind {
    File,
    Dir,
}

/// One directory entry as seen by the planner
///
/// Produced by the blocking and async listers from the host filesystem's
/// (name, kind, is-symlink) view; `kind` is already resolved through the
/// symlink when `follow_symlinks` is on (a non-followed symlink keeps its
/// own entry kind), and `real` carries the canonical path for directories
/// so the planner can detect cycles without doing I/O itself.
pub(crate) struct EntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub real: Option<PathBuf>,
}

/// A reported match: path relative to the walk root plus its entry kind
#[derive(Clone, Debug)]
pub(crate) struct MatchResult {
    pub rel: Utf8PathBuf,
    pub kind: EntryKind,
}

/// One pending directory in the worklist
///
/// `states` is the sorted set of active cursor positions into the pattern's
/// segment list. Tracking a set rather than a single cursor lets globstar
/// keep its zero-or-more branches alive while each directory is still
/// listed exactly once per walk.
pub(crate) struct Frame {
    pub dir: PathBuf,
    pub rel: Utf8PathBuf,
    states: Vec<usize>,
}

/// Traversal cursor for a single pattern walk
///
/// Owns the frame worklist, the visited-set cycle guard, and the soft-error
/// diagnostics. Never shared across concurrent walks; the drivers feed it
/// directory listings and collect the matches it plans.
pub(crate) struct Walker<'a> {
    pattern: &'a CompiledPattern,
    dot: bool,
    follow_symlinks: bool,
    only_files: bool,
    frames: Vec<Frame>,
    visited: HashSet<PathBuf>,
    skipped: Vec<TraversalError>,
}

impl<'a> Walker<'a> {
    /// Creates a walker rooted at `root` (already canonicalized)
    pub fn new(pattern: &'a CompiledPattern, root: PathBuf, opts: &GlobOptions) -> Self {
        let segs = pattern.segments();
        let mut states = Vec::new();
        let mut discard = false;
        add_state(segs, &mut states, 0, &mut discard);

        let mut visited = HashSet::new();
        if opts.follow_symlinks {
            visited.insert(root.clone());
        }

        Self {
            pattern,
            dot: opts.dot,
            follow_symlinks: opts.follow_symlinks,
            only_files: opts.only_files,
            frames: vec![Frame {
                dir: root,
                rel: Utf8PathBuf::new(),
                states,
            }],
            visited,
            skipped: Vec::new(),
        }
    }

    /// Takes the next pending directory, depth-first
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Records a soft error for a directory that could not be listed
    pub fn record(&mut self, path: PathBuf, err: io::Error) {
        self.skipped.push(TraversalError::new(path, err));
    }

    pub fn skipped_mut(&mut self) -> &mut Vec<TraversalError> {
        &mut self.skipped
    }

    /// Consumes the walker, yielding the accumulated diagnostics
    pub fn finish(self) -> Vec<TraversalError> {
        self.skipped
    }

    /// Plans one directory level: reports matches, queues subdirectories
    ///
    /// Pure pattern logic, no I/O. For each entry, every active cursor that
    /// matches the name advances; landing on (or epsilon-reaching past a
    /// trailing globstar to) the end of the pattern reports the entry, and
    /// any surviving cursors queue a child frame when the entry is a
    /// directory. A globstar cursor advances to both "stay" and "move on",
    /// which is the one-or-more and zero-consumption pair from the pattern
    /// semantics.
    pub fn process(&mut self, frame: Frame, entries: Vec<EntryInfo>) -> Vec<MatchResult> {
        let segs = self.pattern.segments();
        let mut matches = Vec::new();
        let mut children = Vec::new();

        for entry in entries {
            let mut child_states = Vec::new();
            let mut accepted = false;

            for &i in &frame.states {
                if !segs[i].matches(&entry.name, self.dot) {
                    continue;
                }
                match segs[i] {
                    Segment::Globstar => add_state(segs, &mut child_states, i, &mut accepted),
                    _ => add_state(segs, &mut child_states, i + 1, &mut accepted),
                }
            }

            if accepted && !(self.only_files && entry.kind == EntryKind::Dir) {
                matches.push(MatchResult {
                    rel: frame.rel.join(&entry.name),
                    kind: entry.kind,
                });
            }

            if entry.kind == EntryKind::Dir && !child_states.is_empty() {
                if self.follow_symlinks {
                    if let Some(real) = entry.real {
                        // Cycle or already-walked subtree: prune silently
                        if !self.visited.insert(real) {
                            continue;
                        }
                    }
                }
                children.push(Frame {
                    rel: frame.rel.join(&entry.name),
                    dir: entry.path,
                    states: child_states,
                });
            }
        }

        // Reverse so the name-sorted listing pops in order off the stack
        self.frames.extend(children.into_iter().rev());
        matches
    }
}

/// Inserts cursor `j` into a state set, epsilon-closing over globstar
///
/// A cursor sitting on a globstar may also skip it (zero segments), so the
/// following cursor joins the set too. Reaching the segment count means the
/// whole pattern is consumed; that is reported through `accepted` rather
/// than stored.
fn add_state(segs: &[Segment], states: &mut Vec<usize>, j: usize, accepted: &mut bool) {
    if j == segs.len() {
        *accepted = true;
        return;
    }
    if let Err(pos) = states.binary_search(&j) {
        states.insert(pos, j);
    }
    if matches!(segs[j], Segment::Globstar) {
        add_state(segs, states, j + 1, accepted);
    }
}
