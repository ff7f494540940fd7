//! Render descriptors derived from a structure's elements
//!
//! [`describe`] is a pure mapping from ordered elements to [`RenderNode`]s.
//! Nothing here has state; role labels, the newest flag and link decorations
//! are recomputed from positions on every call.

use crate::structure::{Element, ElementId, End, StructureKind, Value};

/// Positional label drawn next to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleLabel {
    Top,
    Front,
    Rear,
    Head,
}

impl RoleLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            RoleLabel::Top => "TOP",
            RoleLabel::Front => "FRONT",
            RoleLabel::Rear => "REAR",
            RoleLabel::Head => "HEAD",
        }
    }
}

/// Decoration drawn between a node and its successor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// Plain line between queue cells
    Connector,
    /// Forward pointer of a linked list node
    Next,
}

/// Everything a renderer needs to draw one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNode {
    pub id: ElementId,
    pub value: Value,
    pub labels: Vec<RoleLabel>,
    pub is_newest: bool,
    pub link: Option<Link>,
}

impl RenderNode {
    pub fn has_label(&self, label: RoleLabel) -> bool {
        self.labels.contains(&label)
    }
}

/// Map ordered elements to render descriptors
pub fn describe<'a, I>(kind: StructureKind, elements: I) -> Vec<RenderNode>
where
    I: IntoIterator<Item = &'a Element>,
{
    let elements: Vec<&Element> = elements.into_iter().collect();
    let last = elements.len().saturating_sub(1);

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let is_first = index == 0;
            let is_last = index == last;

            let mut labels = Vec::new();
            match kind {
                StructureKind::Stack => {
                    if is_first {
                        labels.push(RoleLabel::Top);
                    }
                }
                StructureKind::Queue => {
                    if is_first {
                        labels.push(RoleLabel::Front);
                    }
                    if is_last {
                        labels.push(RoleLabel::Rear);
                    }
                }
                StructureKind::LinkedList => {
                    if is_first {
                        labels.push(RoleLabel::Head);
                    }
                }
            }

            let link = match kind {
                StructureKind::Stack => None,
                StructureKind::Queue if !is_last => Some(Link::Connector),
                StructureKind::LinkedList if !is_last => Some(Link::Next),
                _ => None,
            };

            let is_newest = match kind.insertion_end() {
                End::Front => is_first,
                End::Back => is_last,
            };

            RenderNode {
                id: element.id,
                value: element.value.clone(),
                labels,
                is_newest,
                link,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::IdAllocator;

    fn elements(values: &[i64]) -> Vec<Element> {
        let mut ids = IdAllocator::new();
        values.iter().map(|v| ids.element(Value::Int(*v))).collect()
    }

    #[test]
    fn test_stack_labels() {
        let nodes = describe(StructureKind::Stack, &elements(&[7, 3]));
        assert_eq!(nodes[0].labels, vec![RoleLabel::Top]);
        assert!(nodes[0].is_newest);
        assert!(nodes[1].labels.is_empty());
        assert!(nodes.iter().all(|n| n.link.is_none()));
    }

    #[test]
    fn test_single_queue_element_is_front_and_rear() {
        let nodes = describe(StructureKind::Queue, &elements(&[1]));
        assert_eq!(nodes[0].labels, vec![RoleLabel::Front, RoleLabel::Rear]);
        assert!(nodes[0].is_newest);
        assert_eq!(nodes[0].link, None);
    }

    #[test]
    fn test_queue_rear_is_newest() {
        let nodes = describe(StructureKind::Queue, &elements(&[1, 2, 3]));
        assert!(nodes[2].has_label(RoleLabel::Rear) && nodes[2].is_newest);
        assert!(!nodes[0].is_newest);
        assert_eq!(nodes[0].link, Some(Link::Connector));
        assert_eq!(nodes[2].link, None);
    }

    #[test]
    fn test_list_links() {
        let nodes = describe(StructureKind::LinkedList, &elements(&[1, 2, 3]));
        assert!(nodes[0].has_label(RoleLabel::Head));
        assert_eq!(nodes[0].link, Some(Link::Next));
        assert_eq!(nodes[1].link, Some(Link::Next));
        assert_eq!(nodes[2].link, None);
    }

    #[test]
    fn test_empty() {
        assert!(describe(StructureKind::Queue, &Vec::new()).is_empty());
    }
}
