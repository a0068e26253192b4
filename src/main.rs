// src/main.rs — DevOps Mini Panel (Rust + Yew + WASM)
// Counter card, four pipeline tiles, live clock footer.

mod app;
mod clock;
mod config;
mod counter;
mod tiles;

use gloo::console::info;

use app::{App, AppProps};
use config::PanelConfig;

fn main() {
    let config = PanelConfig::resolve();
    info!("devops mini panel, environment:", config.environment.clone());

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
