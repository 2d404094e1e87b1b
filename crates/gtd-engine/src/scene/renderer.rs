use super::{DrawSink, SceneNode, Shape};

/// Owns the top-level forest and drives one draw pass per frame.
///
/// Drawing takes `&self`: the traversal is recomputed from the tree on every
/// call, so roots added between frames show up on the next `draw`.
#[derive(Debug, Clone, Default)]
pub struct SceneRenderer {
    roots: Vec<SceneNode>,
}

impl SceneRenderer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `shape` in a new root node appended after the existing roots.
    ///
    /// The shape is moved into the node; the returned handle can be used to
    /// hang children under it.
    pub fn add_child(&mut self, shape: impl Into<Shape>) -> &mut SceneNode {
        self.add_node(SceneNode::with_shape(shape))
    }

    /// Appends an already built subtree as a new root.
    pub fn add_node(&mut self, node: SceneNode) -> &mut SceneNode {
        log::debug!(
            "scene: root #{} added ({} node(s))",
            self.roots.len(),
            node.node_count()
        );
        let index = self.roots.len();
        self.roots.push(node);
        &mut self.roots[index]
    }

    /// Roots in insertion order.
    #[inline]
    pub fn roots(&self) -> &[SceneNode] {
        &self.roots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total nodes across every root.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(SceneNode::node_count).sum()
    }

    /// Draws every root, in insertion order, into `sink`.
    pub fn draw<S>(&self, sink: &mut S)
    where
        S: DrawSink + ?Sized,
    {
        for root in &self.roots {
            root.draw(sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::scene::{CircleShape, DrawList, RectShape};

    /// Sink that only counts calls.
    #[derive(Default)]
    struct Counter(usize);

    impl DrawSink for Counter {
        fn draw_shape(&mut self, _shape: &Shape) {
            self.0 += 1;
        }
    }

    // ── end to end ────────────────────────────────────────────────────────

    #[test]
    fn single_circle_frame() {
        let mut renderer = SceneRenderer::new();
        renderer.add_child(CircleShape::new(80.0, 4));

        let mut list = DrawList::new();
        renderer.draw(&mut list);

        assert_eq!(list.len(), 1);
        let Shape::Circle(c) = &list.items()[0] else {
            panic!("expected a circle, got {:?}", list.items()[0]);
        };
        assert_eq!(c.radius, 80.0);
        assert_eq!(c.point_count, 4);
    }

    #[test]
    fn empty_renderer_draws_nothing() {
        let renderer = SceneRenderer::new();
        let mut counter = Counter::default();

        renderer.draw(&mut counter);

        assert!(renderer.is_empty());
        assert_eq!(counter.0, 0);
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn roots_draw_in_insertion_order_with_their_subtrees() {
        let mut renderer = SceneRenderer::new();
        renderer
            .add_child(CircleShape::new(1.0, 3))
            .add_child(SceneNode::with_shape(CircleShape::new(2.0, 3)));
        renderer.add_child(RectShape::new(Vec2::splat(3.0)));
        renderer.add_node(SceneNode::new());
        renderer.add_child(CircleShape::new(4.0, 3));

        let mut shapes: Vec<Shape> = Vec::new();
        renderer.draw(&mut shapes);

        let expected: Vec<Shape> = vec![
            CircleShape::new(1.0, 3).into(),
            CircleShape::new(2.0, 3).into(),
            RectShape::new(Vec2::splat(3.0)).into(),
            CircleShape::new(4.0, 3).into(),
        ];
        assert_eq!(shapes, expected);
        assert_eq!(renderer.len(), 4);
        assert_eq!(renderer.node_count(), 5);
    }

    #[test]
    fn repeated_draws_are_identical() {
        let mut renderer = SceneRenderer::new();
        renderer.add_child(CircleShape::new(1.0, 3));
        renderer.add_child(CircleShape::new(2.0, 3));

        let mut first: Vec<Shape> = Vec::new();
        let mut second: Vec<Shape> = Vec::new();
        renderer.draw(&mut first);
        renderer.draw(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn child_added_between_frames_shows_up_next_frame_only() {
        let mut renderer = SceneRenderer::new();
        renderer.add_child(CircleShape::new(1.0, 3));

        let mut before: Vec<Shape> = Vec::new();
        renderer.draw(&mut before);

        renderer.add_child(CircleShape::new(2.0, 3));
        assert_eq!(before.len(), 1);

        let mut after: Vec<Shape> = Vec::new();
        renderer.draw(&mut after);
        assert_eq!(after.len(), 2);
        assert_eq!(after[0], before[0]);
    }

    // ── ownership ─────────────────────────────────────────────────────────

    #[test]
    fn caller_copy_of_descriptor_does_not_leak_into_tree() {
        let mut descriptor = CircleShape::new(80.0, 4);
        let mut renderer = SceneRenderer::new();
        renderer.add_child(descriptor.clone());

        descriptor.radius = 5.0;
        descriptor.position = Vec2::new(300.0, 300.0);

        let mut shapes: Vec<Shape> = Vec::new();
        renderer.draw(&mut shapes);
        assert_eq!(shapes, vec![Shape::Circle(CircleShape::new(80.0, 4))]);
    }
}
