use opensox::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting opensox frontend");
    yew::Renderer::<App>::new().render();
}
