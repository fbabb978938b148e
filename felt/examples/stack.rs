//! Walks through the shared UI state a page and two stacked modals produce.
//!
//! Run with `cargo run --example stack`; debug logs go to `stack.log`.

use std::fs::File;

use felt::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("stack.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let ui = UiContext::builder()
        .config(UiConfig::new(Theme::ZkPoker).banner(BannerProps::new("Season 2 is live")))
        .origin("http://localhost:5173")
        .layout_config(LayoutConfig {
            navbar_tabs: vec![Tab::link("Lobby", "/"), Tab::link("Tournaments", "/tournaments")],
            ..Default::default()
        })
        .viewport(1440, 900)
        .build();

    println!("environment: {}", ui.environment());

    // A table page hides the footer links and goes full screen.
    let _page = ui
        .layout_config()
        .override_patch("table-page", LayoutConfigPatch::new().footer_links(vec![]));
    let _full = ui.layout().override_prop("table-page", "isFullScreen", true)?;
    println!("full screen: {}", ui.layout().is_full_screen());

    // Buy-in modal, then a confirmation on top of it.
    let mut buy_in = ui.modals().slot();
    let mut confirm = ui.modals().slot();
    buy_in.set_open(true);
    confirm.set_open(true);

    for (name, slot) in [("buy-in", &buy_in), ("confirm", &confirm)] {
        let visuals = slot.visuals();
        println!(
            "{name}: depth {:?}, scale {:.1}",
            slot.stack_index(),
            visuals.open().scale
        );
    }

    confirm.set_open(false);
    println!("after confirm closes, buy-in depth {:?}", buy_in.stack_index());

    ui.shutdown();
    Ok(())
}
