use std::thread;

use druid::{
    widget::{prelude::*, Controller},
    Target,
};

use crate::{cmd, data::AppState, webapi::WebApi};

/// Runs the catalog load once per app mount and applies the outcome.
/// Sits above the route switcher, so navigating never re-triggers it;
/// only `LOAD_CATALOG` (startup or a full app reload) does.
pub struct CatalogController;

impl CatalogController {
    fn load_catalog(&self, ctx: &mut EventCtx, data: &mut AppState) {
        data.catalog.defer();
        let sink = ctx.get_external_handle();
        thread::spawn(move || {
            let result = WebApi::global().get_catalog();
            sink.submit_command(cmd::UPDATE_CATALOG, result, Target::Auto)
                .unwrap();
        });
    }
}

impl<W> Controller<AppState, W> for CatalogController
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
            Event::Command(cmd) if cmd.is(cmd::LOAD_CATALOG) => {
                self.load_catalog(ctx, data);
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(cmd::UPDATE_CATALOG) => {
                let result = cmd.get_unchecked(cmd::UPDATE_CATALOG);
                data.catalog_loaded(result.to_owned());
                ctx.set_handled();
            }
            _ => {
                child.event(ctx, event, data, env);
            }
        }
    }

    fn lifecycle(
        &mut self,
        child: &mut W,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &AppState,
        env: &Env,
    ) {
        if let LifeCycle::WidgetAdded = event {
            ctx.submit_command(cmd::LOAD_CATALOG);
        }
        child.lifecycle(ctx, event, data, env)
    }
}
