mod app;
mod components;
mod containers;
mod context;
mod models;
mod pages;
mod routes;
#[cfg(test)]
mod routes_test;
mod storage;

use app::App;
use context::SessionContext;
use yew::{Html, Properties, Renderer, function_component, html};
use yewdux::YewduxRoot;

#[derive(Properties, PartialEq)]
struct RootProps {
    context: SessionContext,
}

#[function_component(Root)]
fn root(props: &RootProps) -> Html {
    html! {
        <YewduxRoot>
            <App context={props.context.clone()} />
        </YewduxRoot>
    }
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    // Only fails when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {}

fn main() {
    init_logging();

    // Route panic payloads through the logger so they reach the console
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("Unknown panic");
        match info.location() {
            Some(location) => log::error!(
                "Panic: {payload}\n  at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ),
            None => log::error!("Panic: {payload}"),
        }
    }));

    log::info!("Starting AptManager");

    Renderer::<Root>::with_props(RootProps {
        context: SessionContext::from_environment(),
    })
    .render();
}
