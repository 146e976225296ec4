use druid::widget::{prelude::*, Controller};

use crate::{cmd, data::AppState};

/// Consumes the navigation and filter intents; the shell state is
/// mutated only here, children just submit commands.
pub struct NavController;

impl<W> Controller<AppState, W> for NavController
where
    W: Widget<AppState>,
{
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut AppState,
        env: &Env,
    ) {
        match event {
            Event::Command(cmd) if cmd.is(cmd::PLAY_GAME) => {
                let game = cmd.get_unchecked(cmd::PLAY_GAME);
                data.play(game.to_owned());
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(cmd::NAVIGATE_HOME) => {
                data.navigate_home();
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(cmd::SET_CATEGORY) => {
                let category = cmd.get_unchecked(cmd::SET_CATEGORY);
                data.set_category(*category);
                ctx.set_handled();
            }
            _ => {
                child.event(ctx, event, data, env);
            }
        }
    }
}
