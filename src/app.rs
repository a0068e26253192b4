use gloo::console::debug;
use yew::prelude::*;

use crate::clock::{now_text, ClockTicker, TICK_MS};
use crate::config::PanelConfig;
use crate::counter::CounterAction;
use crate::tiles::INFO_TILES;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: PanelConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let counter = use_state(|| 0i64);
    let clock_text = use_state(now_text);

    // Live clock; the ticker is owned by the effect and dropped on unmount
    {
        let clock_text = clock_text.clone();
        use_effect_with((), move |_| {
            debug!("clock ticker started");
            let ticker = ClockTicker::start(TICK_MS, move || clock_text.set(now_text()));
            move || {
                drop(ticker);
                debug!("clock ticker stopped");
            }
        });
    }

    let on_action = {
        let counter = counter.clone();
        Callback::from(move |action: CounterAction| counter.set(action.apply(*counter)))
    };

    html! {
        <div class="App">
          <div class="container">
            <header class="header">
              <h1>{ "🚀 DevOps Mini Project" }</h1>
              <p class="subtitle">{ "Rust + Yew App with Kubernetes & CI/CD" }</p>
            </header>

            <div class="card">
              <h2>{ "Counter Application" }</h2>
              <div class="counter-display">{ *counter }</div>
              <div class="button-group">
                { for CounterAction::ALL.iter().map(|&action| {
                    let onclick = on_action.reform(move |_: MouseEvent| action);
                    html! {
                      <button class={classes!("btn", action.class())} {onclick}>
                        { action.label() }
                      </button>
                    }
                })}
              </div>
            </div>

            <div class="info-grid">
              { for INFO_TILES.iter().map(|tile| html! {
                  <div class="info-card">
                    <h3>{ tile.heading() }</h3>
                    <p>{ tile.caption }</p>
                  </div>
              })}
            </div>

            <div class="footer">
              <p>{ format!("Current Time: {}", *clock_text) }</p>
              <p>{ format!("Environment: {}", props.config.environment) }</p>
            </div>
          </div>
        </div>
    }
}
