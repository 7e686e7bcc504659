mod components;
mod frame;
mod model;
mod state;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
