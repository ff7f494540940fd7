//! Identity-keyed enter/exit animation bookkeeping
//!
//! The [`Animator`] compares successive descriptor lists by [`ElementId`].
//! Only identities that appear or disappear get an animation; everything
//! else stays [`Phase::Steady`], so unrelated nodes never flicker when a
//! neighbour is added or removed.
//!
//! The animator keeps its own layout of slots in drawing order. A removed
//! node turns into a ghost in the slot it occupied on screen and stays there
//! until its exit animation completes, so overlapping removals never push
//! each other around. Ghosts lose their role labels and links so that, for
//! example, a popped node fading out never shows a second `TOP`.

use super::descriptor::RenderNode;
use crate::structure::{ElementId, End, StructureKind};
use rustc_hash::{FxHashMap, FxHashSet};

/// Animation state of a drawn node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Steady,
    Exiting,
}

/// A node to draw in the current frame
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedNode {
    pub node: RenderNode,
    pub phase: Phase,
    /// 0.0 at the start of the phase, 1.0 when it completes
    pub progress: f32,
}

/// Identities that entered or left with the last observed list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    pub entered: Vec<ElementId>,
    pub exited: Vec<ElementId>,
}

impl Diff {
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// One drawn position
#[derive(Debug, Clone)]
enum Slot {
    Live(RenderNode),
    Ghost { node: RenderNode, elapsed: u16 },
}

impl Slot {
    fn live_id(&self) -> Option<ElementId> {
        match self {
            Slot::Live(node) => Some(node.id),
            Slot::Ghost { .. } => None,
        }
    }

    fn is_ghost(&self) -> bool {
        matches!(self, Slot::Ghost { .. })
    }
}

/// Tracks entering and exiting nodes across renders
#[derive(Debug, Clone)]
pub struct Animator {
    frames: u16,
    layout: Vec<Slot>,
    entering: FxHashMap<ElementId, u16>, // id -> frames elapsed
}

impl Animator {
    /// `frames` is the length of every animation; 0 disables animation
    pub fn new(frames: u16) -> Self {
        Animator {
            frames,
            layout: Vec::new(),
            entering: FxHashMap::default(),
        }
    }

    /// Diff a new descriptor list for `kind` against the drawn layout
    pub fn observe(&mut self, kind: StructureKind, nodes: Vec<RenderNode>) -> Diff {
        let new_ids: FxHashSet<ElementId> = nodes.iter().map(|n| n.id).collect();
        let mut diff = Diff::default();

        // Removed nodes become ghosts where they are drawn
        let mut layout = Vec::with_capacity(self.layout.len() + nodes.len());
        for slot in self.layout.drain(..) {
            match slot {
                Slot::Live(node) if !new_ids.contains(&node.id) => {
                    diff.exited.push(node.id);
                    if self.frames > 0 {
                        layout.push(Slot::Ghost {
                            node: into_ghost(node),
                            elapsed: 0,
                        });
                    }
                }
                other => layout.push(other),
            }
        }

        // Survivors pick up their new labels and links, in the new order
        let kept: FxHashSet<ElementId> = layout.iter().filter_map(Slot::live_id).collect();
        let mut survivors = nodes.iter().filter(|n| kept.contains(&n.id));
        for slot in layout.iter_mut() {
            if let Slot::Live(node) = slot {
                if let Some(next) = survivors.next() {
                    *node = next.clone();
                }
            }
        }

        // New nodes go right after the previous live node, or at the insertion end
        let mut anchor: Option<usize> = None;
        for (i, node) in nodes.iter().enumerate() {
            if kept.contains(&node.id) {
                anchor = position_of(&layout, node.id);
                continue;
            }

            diff.entered.push(node.id);
            if self.frames > 0 {
                self.entering.insert(node.id, 0);
            }

            let at = match (anchor, kind.insertion_end()) {
                (Some(prev), _) => prev + 1,
                (None, End::Front) => 0,
                (None, End::Back) => nodes[i + 1..]
                    .iter()
                    .find(|n| kept.contains(&n.id))
                    .and_then(|n| position_of(&layout, n.id))
                    .unwrap_or(layout.len()),
            };
            layout.insert(at, Slot::Live(node.clone()));
            anchor = Some(at);
        }

        // A node removed mid-entry stops entering
        self.entering.retain(|id, _| new_ids.contains(id));
        self.layout = layout;
        diff
    }

    /// Advance every running animation by one frame
    pub fn tick(&mut self) {
        let frames = self.frames;
        self.entering.retain(|_, elapsed| {
            *elapsed += 1;
            *elapsed < frames
        });
        self.layout.retain_mut(|slot| match slot {
            Slot::Ghost { elapsed, .. } => {
                *elapsed += 1;
                *elapsed < frames
            }
            Slot::Live(_) => true,
        });
    }

    /// Nodes to draw this frame, ghosts included
    pub fn frame(&self) -> Vec<AnimatedNode> {
        self.layout
            .iter()
            .map(|slot| match slot {
                Slot::Live(node) => match self.entering.get(&node.id) {
                    Some(elapsed) => AnimatedNode {
                        node: node.clone(),
                        phase: Phase::Entering,
                        progress: self.progress(*elapsed),
                    },
                    None => AnimatedNode {
                        node: node.clone(),
                        phase: Phase::Steady,
                        progress: 1.0,
                    },
                },
                Slot::Ghost { node, elapsed } => AnimatedNode {
                    node: node.clone(),
                    phase: Phase::Exiting,
                    progress: self.progress(*elapsed),
                },
            })
            .collect()
    }

    /// Check if any node is still entering or exiting
    pub fn is_animating(&self) -> bool {
        !self.entering.is_empty() || self.layout.iter().any(Slot::is_ghost)
    }

    /// Drop all state without animating (structure switch)
    pub fn reset(&mut self) {
        self.layout.clear();
        self.entering.clear();
    }

    fn progress(&self, elapsed: u16) -> f32 {
        if self.frames == 0 {
            1.0
        } else {
            (elapsed as f32 / self.frames as f32).min(1.0)
        }
    }
}

fn into_ghost(mut node: RenderNode) -> RenderNode {
    node.labels.clear();
    node.link = None;
    node.is_newest = false;
    node
}

fn position_of(layout: &[Slot], id: ElementId) -> Option<usize> {
    layout.iter().position(|slot| slot.live_id() == Some(id))
}
