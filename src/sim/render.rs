//! Render-data production
//!
//! The sim never draws. Once per frame the windowing collaborator asks for
//! an ordered draw list and blits it however it likes. Sprite-frame
//! bookkeeping for the player sheet lives here too; it is presentation
//! state, not simulation state.

use glam::Vec2;

use crate::consts::*;

use super::rect::Rect;
use super::state::{Color, GamePhase, GameState};

/// Textures the renderer is expected to have loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureId {
    /// Player sprite sheet, NUM_FRAMES_PER_LINE x NUM_LINES frames
    Chungus,
    /// Big end-of-round sprite shown rising on game over
    EndChungus,
}

/// One draw call, back-to-front order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FilledRect { rect: Rect, color: Color },
    Sprite { texture: TextureId, src: Rect, dest: Vec2 },
}

/// Walk cycle over the player sprite sheet: frames advance every few ticks,
/// lines wrap after a full row.
#[derive(Debug, Clone, Default)]
pub struct SpriteAnimation {
    frame: usize,
    line: usize,
    hold: u32,
}

impl SpriteAnimation {
    /// Advance one tick of the frame cadence
    pub fn advance(&mut self) {
        self.hold += 1;
        if self.hold <= FRAME_HOLD_TICKS {
            return;
        }
        self.hold = 0;
        self.frame += 1;
        if self.frame >= NUM_FRAMES_PER_LINE {
            self.frame = 0;
            self.line += 1;
            if self.line >= NUM_LINES {
                self.line = 0;
            }
        }
    }

    /// Source rect of the current frame within the sheet
    pub fn src_rect(&self) -> Rect {
        Rect::new(
            self.frame as f32 * PLAYER_WIDTH,
            self.line as f32 * PLAYER_HEIGHT,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        )
    }
}

/// Produce the full draw list for one frame: walls, balls, shot trail,
/// player sprite, and the rising end sprite during game over.
pub fn draw_list(state: &GameState, anim: &SpriteAnimation) -> Vec<DrawCommand> {
    let mut cmds = Vec::new();

    for wall in [
        &state.walls.floor,
        &state.walls.ceiling,
        &state.walls.left,
        &state.walls.right,
    ] {
        cmds.push(DrawCommand::FilledRect {
            rect: *wall,
            color: Color::WALL_GRAY,
        });
    }

    for ball in state.balls.iter().filter(|b| b.active) {
        cmds.push(DrawCommand::FilledRect {
            rect: ball.rect(),
            color: ball.color,
        });
    }

    if state.shot.active {
        cmds.push(DrawCommand::FilledRect {
            rect: state.shot.rect(),
            color: Color::SHOT_YELLOW,
        });
    }

    cmds.push(DrawCommand::Sprite {
        texture: TextureId::Chungus,
        src: anim.src_rect(),
        dest: state.player.pos,
    });

    if state.phase == GamePhase::GameOver {
        cmds.push(DrawCommand::Sprite {
            texture: TextureId::EndChungus,
            src: Rect::new(0.0, 0.0, PLAYER_WIDTH, PLAYER_HEIGHT),
            dest: Vec2::new(
                SCREEN_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
                SCREEN_HEIGHT - state.end_rise,
            ),
        });
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_cadence() {
        let mut anim = SpriteAnimation::default();
        assert_eq!(anim.src_rect().x, 0.0);

        // frame holds for FRAME_HOLD_TICKS, then advances
        for _ in 0..FRAME_HOLD_TICKS {
            anim.advance();
            assert_eq!(anim.src_rect().x, 0.0);
        }
        anim.advance();
        assert_eq!(anim.src_rect().x, PLAYER_WIDTH);
    }

    #[test]
    fn test_animation_wraps_lines() {
        let mut anim = SpriteAnimation::default();
        let ticks_per_cycle = (FRAME_HOLD_TICKS + 1) as usize * NUM_FRAMES_PER_LINE * NUM_LINES;
        for _ in 0..ticks_per_cycle {
            anim.advance();
        }
        assert_eq!(anim.src_rect(), Rect::new(0.0, 0.0, PLAYER_WIDTH, PLAYER_HEIGHT));
    }

    #[test]
    fn test_draw_list_contents() {
        let state = GameState::new(11);
        let anim = SpriteAnimation::default();
        let cmds = draw_list(&state, &anim);

        let rects = cmds
            .iter()
            .filter(|c| matches!(c, DrawCommand::FilledRect { .. }))
            .count();
        // four walls + starting balls, no shot in flight
        assert_eq!(rects, 4 + state.active_ball_count());
        let sprites = cmds
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count();
        assert_eq!(sprites, 1);
    }

    #[test]
    fn test_inactive_balls_are_not_drawn() {
        let mut state = GameState::new(12);
        let active_before = state.active_ball_count();
        state.balls[0].deactivate();

        let cmds = draw_list(&state, &SpriteAnimation::default());
        let rects = cmds
            .iter()
            .filter(|c| matches!(c, DrawCommand::FilledRect { .. }))
            .count();
        assert_eq!(rects, 4 + active_before - 1);
    }

    #[test]
    fn test_game_over_adds_end_sprite() {
        let mut state = GameState::new(13);
        state.phase = GamePhase::GameOver;
        state.end_rise = 120.0;

        let cmds = draw_list(&state, &SpriteAnimation::default());
        let end = cmds.iter().find(|c| {
            matches!(
                c,
                DrawCommand::Sprite { texture: TextureId::EndChungus, .. }
            )
        });
        match end {
            Some(DrawCommand::Sprite { dest, .. }) => {
                assert_eq!(dest.y, SCREEN_HEIGHT - 120.0);
            }
            _ => panic!("end sprite missing from draw list"),
        }
    }
}
