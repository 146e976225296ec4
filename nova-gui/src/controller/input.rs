use druid::{
    widget::{prelude::*, Controller, TextBox},
    HotKey, KbKey,
};

/// Keyboard behavior for the search box. Filtering happens on every
/// keystroke through the data binding; Enter and Escape just release
/// focus.
pub struct InputController;

impl InputController {
    pub fn new() -> Self {
        Self
    }
}

impl Controller<String, TextBox<String>> for InputController {
    fn event(
        &mut self,
        child: &mut TextBox<String>,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut String,
        env: &Env,
    ) {
        match event {
            Event::KeyDown(k_e) if HotKey::new(None, KbKey::Enter).matches(k_e) => {
                ctx.resign_focus();
                ctx.request_paint();
                ctx.set_handled();
            }
            Event::KeyDown(k_e) if k_e.key == KbKey::Escape => {
                ctx.resign_focus();
                ctx.set_handled();
            }
            _ => {
                child.event(ctx, event, data, env);
            }
        }
    }
}
