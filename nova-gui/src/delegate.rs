use druid::{
    AppDelegate, Application, Command, DelegateCtx, Env, Event, Handled, Target, WindowId,
};
use threadpool::ThreadPool;

use crate::{
    cmd,
    data::AppState,
    webapi::WebApi,
    widget::{embed, thumbnail},
};

pub struct Delegate {
    main_window: Option<WindowId>,
    image_pool: ThreadPool,
    embed_pool: ThreadPool,
}

impl Delegate {
    pub fn new() -> Self {
        const MAX_IMAGE_THREADS: usize = 32;

        Self {
            main_window: None,
            image_pool: ThreadPool::with_name("image_loading".into(), MAX_IMAGE_THREADS),
            embed_pool: ThreadPool::with_name("embed_loading".into(), 2),
        }
    }

    pub fn with_main(main_window: WindowId) -> Self {
        let mut this = Self::new();
        this.main_window.replace(main_window);
        this
    }

    fn command_image(&mut self, ctx: &mut DelegateCtx, target: Target, cmd: &Command) -> Handled {
        if let Some(location) = cmd.get(thumbnail::REQUEST_IMAGE) {
            let sink = ctx.get_external_handle();
            if let Some(image_buf) = WebApi::global().get_cached_image(location) {
                let payload = thumbnail::ImagePayload {
                    location: location.clone(),
                    image_buf,
                };
                sink.submit_command(thumbnail::PROVIDE_IMAGE, payload, target)
                    .unwrap();
            } else {
                let location = location.clone();
                self.image_pool.execute(move || {
                    match WebApi::global().get_image(location.clone()) {
                        Ok(image_buf) => {
                            let payload = thumbnail::ImagePayload {
                                location,
                                image_buf,
                            };
                            sink.submit_command(thumbnail::PROVIDE_IMAGE, payload, target)
                                .unwrap();
                        }
                        Err(err) => {
                            log::error!("failed to load image: {err}");
                        }
                    }
                });
            }
            Handled::Yes
        } else {
            Handled::No
        }
    }

    // A load that fails never reports back and the loading overlay stays
    // up. The page body is opaque to us either way.
    fn command_embed(&mut self, ctx: &mut DelegateCtx, target: Target, cmd: &Command) -> Handled {
        if let Some(request) = cmd.get(embed::REQUEST_LOAD) {
            let sink = ctx.get_external_handle();
            let request = request.clone();
            self.embed_pool.execute(move || {
                match WebApi::global().load_embed(&request) {
                    Ok(()) => {
                        sink.submit_command(embed::LOAD_COMPLETE, request.url, target)
                            .unwrap();
                    }
                    Err(err) => {
                        log::warn!("embed load failed: {err}");
                    }
                }
            });
            Handled::Yes
        } else {
            Handled::No
        }
    }
}

impl AppDelegate<AppState> for Delegate {
    fn command(
        &mut self,
        ctx: &mut DelegateCtx,
        target: Target,
        cmd: &Command,
        data: &mut AppState,
        _env: &Env,
    ) -> Handled {
        if let Handled::Yes = self.command_image(ctx, target, cmd) {
            return Handled::Yes;
        }
        if let Handled::Yes = self.command_embed(ctx, target, cmd) {
            return Handled::Yes;
        }
        if cmd.is(cmd::RELOAD_APP) {
            // Tear the whole environment down and start over, exactly as
            // on a fresh launch. The catalog is fetched again as well.
            *data = AppState::default_with_config(data.config.clone());
            ctx.submit_command(cmd::LOAD_CATALOG);
            return Handled::Yes;
        }
        Handled::No
    }

    fn event(
        &mut self,
        _ctx: &mut DelegateCtx,
        window_id: WindowId,
        event: Event,
        data: &mut AppState,
        _env: &Env,
    ) -> Option<Event> {
        if Some(window_id) == self.main_window {
            if let Event::WindowSize(size) = &event {
                data.config.window_size = *size;
            }
        }
        Some(event)
    }

    fn window_removed(
        &mut self,
        id: WindowId,
        data: &mut AppState,
        _env: &Env,
        _ctx: &mut DelegateCtx,
    ) {
        if Some(id) == self.main_window {
            self.main_window.take();
            data.config.save();
            Application::global().quit();
        }
    }
}
