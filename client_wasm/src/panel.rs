//! Live panel: a session bound to its canvas and page labels

use game_core::{PongSession, Stage};
use web_sys::{CanvasRenderingContext2d, Document};

use crate::canvas::CanvasTarget;

const SCORE_ID: &str = "pongScore";
const STAGE_LABEL_ID: &str = "pongStageLabel";
const STAGE_BUTTON_PREFIX: &str = "pongStage";

pub struct Panel {
    pub session: PongSession,
    ctx: CanvasRenderingContext2d,
    document: Document,
}

impl Panel {
    pub fn new(session: PongSession, ctx: CanvasRenderingContext2d, document: Document) -> Self {
        let panel = Self {
            session,
            ctx,
            document,
        };
        panel.refresh_labels();
        panel
    }

    /// One animation frame: simulate, update labels on a point, draw
    pub fn frame(&mut self, now_ms: f64) {
        let events = self.session.tick(now_ms);
        let scored = events.player_scored || events.opponent_scored;
        if scored {
            self.refresh_score();
        }
        self.session.draw(&mut CanvasTarget::new(&self.ctx));
    }

    pub fn reset(&mut self) {
        self.session.reset_match();
        self.refresh_labels();
    }

    pub fn set_stage(&mut self, level: i32) {
        self.session.set_stage(level);
        self.refresh_stage();
    }

    pub fn refresh_labels(&self) {
        self.refresh_score();
        self.refresh_stage();
    }

    fn refresh_score(&self) {
        if let Some(el) = self.document.get_element_by_id(SCORE_ID) {
            el.set_text_content(Some(&self.session.score_text()));
        }
    }

    /// Stage label plus the pressed state of the three stage buttons
    fn refresh_stage(&self) {
        if let Some(el) = self.document.get_element_by_id(STAGE_LABEL_ID) {
            el.set_text_content(Some(&self.session.stage_text()));
        }

        for stage in Stage::ALL {
            let id = format!("{STAGE_BUTTON_PREFIX}{}", stage.level());
            let Some(button) = self.document.get_element_by_id(&id) else {
                continue;
            };
            let pressed = stage == self.session.stage;
            let _ = button.set_attribute("aria-pressed", if pressed { "true" } else { "false" });
            let result = if pressed {
                button.class_list().add_1("active")
            } else {
                button.class_list().remove_1("active")
            };
            if let Err(e) = result {
                log::warn!("Failed to mark stage button {id}: {:?}", e);
            }
        }
    }
}
