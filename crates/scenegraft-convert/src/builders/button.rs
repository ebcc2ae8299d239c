use scenegraft_core::{ButtonData, ConvertError, NodeKind, OutputNode, Result, SourceNode};

use super::base_transform;
use crate::dispatch::Converter;
use crate::tag::{parse_name, Role};

/// Document positions of the up and down children.
///
/// The first child tagged `up:` or `down:` fills that slot. Without an `up`
/// tag the first child in document order is used, even when it is also the
/// `down` child.
fn resolve_slots(node: &SourceNode) -> Result<(usize, Option<usize>)> {
    if node.children.is_empty() {
        return Err(ConvertError::structural(&node.name, "button has no children"));
    }
    let mut up = None;
    let mut down = None;
    for (index, child) in node.children.iter().enumerate() {
        match parse_name(&child.name)?.role(&child.name)? {
            Some(Role::Up) => {
                up.get_or_insert(index);
            }
            Some(Role::Down) => {
                down.get_or_insert(index);
            }
            _ => {}
        }
    }
    Ok((up.unwrap_or(0), down))
}

/// Button synthesized from a tagged container.
pub(crate) fn build_button(
    cx: &Converter<'_>,
    node: &SourceNode,
    parent_height: Option<f64>,
) -> Result<OutputNode> {
    let (up, down) = resolve_slots(node)?;
    let transform = base_transform(node, parent_height);
    let container = cx.container(node)?;

    let key = |index: usize| {
        container
            .key_at(index)
            .map(str::to_string)
            .ok_or_else(|| ConvertError::structural(&node.name, "button child has no key"))
    };
    let upnode = key(up)?;
    let downnode = down.map(key).transpose()?;
    tracing::debug!(name = %node.name, %upnode, ?downnode, "resolved button states");

    Ok(OutputNode::container(
        NodeKind::Button(ButtonData {
            transform,
            upnode,
            downnode,
        }),
        container,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenegraft_core::NodeType;

    fn button(children: &[&str]) -> SourceNode {
        children.iter().fold(
            SourceNode::new("button:ok", NodeType::Frame, 0.0, 0.0, 100.0, 40.0),
            |node, name| node.with_child(SourceNode::new(*name, NodeType::Frame, 0.0, 0.0, 100.0, 40.0)),
        )
    }

    #[test]
    fn test_lone_child_is_up() {
        assert_eq!(resolve_slots(&button(&["idle"])).unwrap(), (0, None));
    }

    #[test]
    fn test_explicit_tags() {
        let node = button(&["down:pressed", "up:idle"]);
        assert_eq!(resolve_slots(&node).unwrap(), (1, Some(0)));
    }

    #[test]
    fn test_first_child_fallback() {
        assert_eq!(resolve_slots(&button(&["a", "b"])).unwrap(), (0, None));
        assert_eq!(resolve_slots(&button(&["down:p", "a"])).unwrap(), (0, Some(0)));
    }

    #[test]
    fn test_only_down_child_is_also_up() {
        assert_eq!(resolve_slots(&button(&["down:pressed"])).unwrap(), (0, Some(0)));
    }

    #[test]
    fn test_first_tagged_child_wins() {
        let node = button(&["up:a", "down:b", "up:c", "down:d"]);
        assert_eq!(resolve_slots(&node).unwrap(), (0, Some(1)));
    }

    #[test]
    fn test_no_children_fails() {
        let err = resolve_slots(&button(&[])).unwrap_err();
        assert!(matches!(err, ConvertError::Structural { .. }));
    }
}
