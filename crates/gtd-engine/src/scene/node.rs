use super::{DrawSink, Shape};

/// One element of the drawable tree.
///
/// A node owns its payload and its children outright. Children can only be
/// attached by moving a `SceneNode` in, so a node can never sit under two
/// parents and the tree has no cycles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneNode {
    shape: Option<Shape>,
    children: Vec<SceneNode>,
}

impl SceneNode {
    /// Creates an empty node. It draws nothing until it gains a shape or
    /// children.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node that owns `shape`.
    #[inline]
    pub fn with_shape(shape: impl Into<Shape>) -> Self {
        Self {
            shape: Some(shape.into()),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    /// Children in insertion order.
    #[inline]
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// True for a node with neither a shape nor children.
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.shape.is_none() && self.children.is_empty()
    }

    /// Appends `child` after the existing children and returns it so a subtree
    /// can be built in place.
    pub fn add_child(&mut self, child: SceneNode) -> &mut SceneNode {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// This node plus all of its descendants.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Visits this node and its descendants in pre-order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Issues this node's shape, then each child's subtree in insertion order.
    pub fn draw<S>(&self, sink: &mut S)
    where
        S: DrawSink + ?Sized,
    {
        for shape in self.iter().filter_map(SceneNode::shape) {
            sink.draw_shape(shape);
        }
    }
}

/// Pre-order traversal over a subtree.
///
/// Uses an explicit stack, so deep trees do not grow the call stack.
pub struct Iter<'a> {
    stack: Vec<&'a SceneNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a SceneNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse so the first child is popped first.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::scene::{CircleShape, RectShape};

    fn circle(radius: f32) -> Shape {
        CircleShape::new(radius, 8).into()
    }

    fn radii(shapes: &[Shape]) -> Vec<f32> {
        shapes
            .iter()
            .map(|s| match s {
                Shape::Circle(c) => c.radius,
                Shape::Rect(r) => -r.size.x,
            })
            .collect()
    }

    // ── inert nodes ───────────────────────────────────────────────────────

    #[test]
    fn empty_node_draws_nothing() {
        let node = SceneNode::new();
        let mut sink: Vec<Shape> = Vec::new();

        node.draw(&mut sink);

        assert!(node.is_inert());
        assert!(sink.is_empty());
    }

    #[test]
    fn shapeless_parent_draws_only_children() {
        let mut node = SceneNode::new();
        node.add_child(SceneNode::with_shape(circle(1.0)));
        node.add_child(SceneNode::new());

        let mut sink: Vec<Shape> = Vec::new();
        node.draw(&mut sink);

        assert!(!node.is_inert());
        assert_eq!(radii(&sink), vec![1.0]);
    }

    // ── pre-order ─────────────────────────────────────────────────────────

    #[test]
    fn payload_draws_before_children() {
        let mut node = SceneNode::with_shape(circle(1.0));
        node.add_child(SceneNode::with_shape(circle(2.0)));
        node.add_child(SceneNode::with_shape(circle(3.0)));

        let mut sink: Vec<Shape> = Vec::new();
        node.draw(&mut sink);

        assert_eq!(radii(&sink), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn nested_subtrees_finish_before_next_sibling() {
        //        1
        //      /   \
        //     2     5
        //    / \     \
        //   3   4     6
        let mut root = SceneNode::with_shape(circle(1.0));
        {
            let two = root.add_child(SceneNode::with_shape(circle(2.0)));
            two.add_child(SceneNode::with_shape(circle(3.0)));
            two.add_child(SceneNode::with_shape(circle(4.0)));
        }
        root.add_child(SceneNode::with_shape(circle(5.0)))
            .add_child(SceneNode::with_shape(circle(6.0)));

        let mut sink: Vec<Shape> = Vec::new();
        root.draw(&mut sink);

        assert_eq!(radii(&sink), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(root.node_count(), 6);
    }

    #[test]
    fn draw_count_is_one_plus_children() {
        let mut root = SceneNode::with_shape(circle(1.0));
        let mut expected = 1;
        for i in 0..4 {
            let mut child = SceneNode::with_shape(circle(10.0 + i as f32));
            child.add_child(SceneNode::with_shape(RectShape::new(Vec2::splat(1.0))));
            child.add_child(SceneNode::new());
            expected += 2;
            root.add_child(child);
        }

        let mut sink: Vec<Shape> = Vec::new();
        root.draw(&mut sink);

        assert_eq!(sink.len(), expected);
        assert_eq!(sink[0], circle(1.0));
    }

    #[test]
    fn deep_chain_draws_every_level() {
        let mut root = SceneNode::with_shape(circle(0.0));
        let mut tip = &mut root;
        for i in 1..2_000 {
            tip = tip.add_child(SceneNode::with_shape(circle(i as f32)));
        }

        let mut sink: Vec<Shape> = Vec::new();
        root.draw(&mut sink);

        assert_eq!(sink.len(), 2_000);
        assert_eq!(sink[1_999], circle(1_999.0));
    }

    // ── ownership ─────────────────────────────────────────────────────────

    #[test]
    fn node_keeps_its_own_copy_of_the_shape() {
        let mut descriptor = CircleShape::new(80.0, 4);
        let node = SceneNode::with_shape(descriptor.clone());

        descriptor.radius = 1.0;
        descriptor.point_count = 100;

        let mut sink: Vec<Shape> = Vec::new();
        node.draw(&mut sink);
        assert_eq!(sink, vec![Shape::Circle(CircleShape::new(80.0, 4))]);
    }

    #[test]
    fn draws_through_a_trait_object() {
        let node = SceneNode::with_shape(circle(7.0));
        let mut shapes: Vec<Shape> = Vec::new();
        let sink: &mut dyn DrawSink = &mut shapes;

        node.draw(sink);

        assert_eq!(radii(&shapes), vec![7.0]);
    }
}
