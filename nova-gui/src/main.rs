#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::new_without_default, clippy::type_complexity)]

mod cmd;
mod controller;
mod data;
mod delegate;
mod error;
mod ui;
mod webapi;
mod widget;

use druid::AppLauncher;
use env_logger::{Builder, Env};
use webapi::WebApi;

use crate::{
    data::{AppState, Config},
    delegate::Delegate,
};

const ENV_LOG: &str = "NOVA_LOG";
const ENV_LOG_STYLE: &str = "NOVA_LOG_STYLE";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    // Load configuration
    let config = Config::load().unwrap_or_default();
    let state = AppState::default_with_config(config);

    WebApi::new(state.config.catalog_url.as_ref(), Config::proxy().as_deref())
        .expect("Failed to set up the web client")
        .install_as_global();

    let window = ui::main_window(&state.config);
    let delegate = Delegate::with_main(window.id);

    AppLauncher::with_window(window)
        .configure_env(ui::theme::setup)
        .delegate(delegate)
        .launch(state)
        .expect("Application launch");
}
