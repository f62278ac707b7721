use yew::prelude::*;

use neptools::components::LoadSheddingPage;
use neptools::utils::console::init_tracing;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"NepTools"}</h1>
            </header>

            <main class="app-main">
                <LoadSheddingPage />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    init_tracing();
    yew::Renderer::<App>::new().render();
}
