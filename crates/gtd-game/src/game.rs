use winit::event::WindowEvent;

use gtd_engine::core::{App, AppControl, FrameCtx};
use gtd_engine::paint::Color;
use gtd_engine::scene::{CircleShape, SceneRenderer};

/// Top-level game state.
pub struct Game {
    pub renderer: SceneRenderer,
}

impl Game {
    pub fn new() -> Self {
        let mut renderer = SceneRenderer::new();
        renderer.add_child(CircleShape::new(80.0, 4));

        log::info!("scene ready: {} node(s)", renderer.node_count());
        Self { renderer }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl App for Game {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        if let WindowEvent::CloseRequested = event {
            log::info!("close requested");
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.frame_index == 0 {
            log::debug!("first frame");
        }
        ctx.render_scene(Color::black(), &self.renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtd_engine::scene::{DrawList, Shape};

    #[test]
    fn starts_with_a_single_diamond() {
        let game = Game::new();

        let mut frame = DrawList::new();
        game.renderer.draw(&mut frame);

        assert_eq!(frame.items(), &[Shape::Circle(CircleShape::new(80.0, 4))]);
    }
}
