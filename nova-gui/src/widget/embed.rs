use std::sync::Arc;

use druid::{widget::prelude::*, Data, Point, Selector, WidgetPod};
use nova_core::embed::EmbedRequest;

pub const REQUEST_LOAD: Selector<EmbedRequest> = Selector::new("embed.request-load");
pub const LOAD_COMPLETE: Selector<Arc<str>> = Selector::new("embed.load-complete");

/// Hosts an embedded game page.  The surface fills the view from the first
/// frame; the loading overlay sits on top of it until the page behind the
/// current request finishes loading.  If the load fails we never hear back
/// and the overlay stays up.
pub struct EmbedHost<T> {
    surface: WidgetPod<T, Box<dyn Widget<T>>>,
    overlay: WidgetPod<T, Box<dyn Widget<T>>>,
    locator: Box<dyn Fn(&T, &Env) -> Option<EmbedRequest>>,
    request: Option<EmbedRequest>,
    loaded: bool,
}

impl<T: Data> EmbedHost<T> {
    pub fn new(
        surface: impl Widget<T> + 'static,
        overlay: impl Widget<T> + 'static,
        locator: impl Fn(&T, &Env) -> Option<EmbedRequest> + 'static,
    ) -> Self {
        Self {
            surface: WidgetPod::new(surface).boxed(),
            overlay: WidgetPod::new(overlay).boxed(),
            locator: Box::new(locator),
            request: None,
            loaded: false,
        }
    }

    fn begin_load(&mut self, request: Option<EmbedRequest>, submit: impl FnOnce(EmbedRequest)) {
        self.loaded = false;
        self.request = request.clone();
        if let Some(request) = request {
            submit(request);
        }
    }
}

impl<T: Data> Widget<T> for EmbedHost<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        if let Event::Command(cmd) = event {
            if let Some(url) = cmd.get(LOAD_COMPLETE) {
                let matches = self
                    .request
                    .as_ref()
                    .map(|request| &request.url == url)
                    .unwrap_or(false);
                if matches {
                    self.loaded = true;
                    ctx.request_paint();
                }
                return;
            }
        }
        self.surface.event(ctx, event, data, env);
        self.overlay.event(ctx, event, data, env);
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            let request = (self.locator)(data, env);
            let widget_id = ctx.widget_id();
            self.begin_load(request, |request| {
                ctx.submit_command(REQUEST_LOAD.with(request).to(widget_id));
            });
        }
        self.surface.lifecycle(ctx, event, data, env);
        self.overlay.lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        let request = (self.locator)(data, env);
        if request != self.request {
            let widget_id = ctx.widget_id();
            self.begin_load(request, |request| {
                ctx.submit_command(REQUEST_LOAD.with(request).to(widget_id));
            });
            ctx.request_paint();
        }
        self.surface.update(ctx, data, env);
        self.overlay.update(ctx, data, env);
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let size = self.surface.layout(ctx, bc, data, env);
        self.surface.set_origin(ctx, Point::ORIGIN);
        self.overlay.layout(ctx, &BoxConstraints::tight(size), data, env);
        self.overlay.set_origin(ctx, Point::ORIGIN);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        self.surface.paint(ctx, data, env);
        if !self.loaded {
            self.overlay.paint(ctx, data, env);
        }
    }
}
