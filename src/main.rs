mod app;
mod logic;
mod models;
mod mvu;
mod ui;

fn main() -> anyhow::Result<()> {
    app::init_logging()?;
    app::run()
}
