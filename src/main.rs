#![no_main]
#![no_std]
extern crate alloc;

mod display;

use alloc::format;
use embedded_graphics::prelude::OriginDimensions;
use log::info;
use uefi::{
    prelude::*,
    proto::console::{
        gop::GraphicsOutput,
        text::{Input, Key, ScanCode},
    },
};

use wristmenu::{
    config::Config,
    core::{
        app::{Device, Transition},
        display::GraphicsSurface,
        input::Button,
        session::Session,
    },
    ui::{
        menu::{MenuOptions, MenuSpec, NumberField, ToggleField},
        prompt::PromptOptions,
    },
};

use crate::display::GopDisplay;

const CONFIG_PATH: &str = "\\wristmenu.toml";

/// Firmware stand-in for the watch's power and launcher controls.
struct Firmware;

impl Device for Firmware {
    fn set_lcd_power(&mut self, on: bool) {
        log::debug!("lcd power {}", if on { "on" } else { "off" });
    }

    fn set_idle_ui(&mut self) {
        info!("menu closed, returning to firmware");
    }
}

fn settings(mut options: MenuOptions) -> MenuSpec {
    options.title.get_or_insert_with(|| "Settings".into());
    MenuSpec::new()
        .options(options)
        .number(
            "Brightness",
            NumberField::new(5.0)
                .range(0.0, 10.0)
                .on_change(|v| log::debug!("brightness {}", v)),
        )
        .toggle(
            "Sound",
            ToggleField::new(true).on_change(|on| log::debug!("sound {}", on)),
        )
        .action("About", |menu, _ctx| {
            menu.navigate(Transition::Message {
                text: format!("wristmenu {}", env!("CARGO_PKG_VERSION")),
                title: Some("About".into()),
            });
        })
        .action("Reset", |menu, _ctx| {
            let options = PromptOptions::default().title("Reset").on_answer(|yes| {
                if yes {
                    info!("settings reset");
                }
                Some(Transition::Menu(None))
            });
            menu.navigate(Transition::Prompt {
                message: "Reset all settings?".into(),
                options,
            });
        })
        .action("Exit", |menu, _ctx| menu.navigate(Transition::Menu(None)))
}

fn run() -> uefi::Result<()> {
    let mut config = match Config::load_from_file(CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("using default config, could not load {}: {}", CONFIG_PATH, e);
            Config::default()
        }
    };
    info!("{} translations loaded", config.translations.len());

    let gop_handle = boot::get_handle_for_protocol::<GraphicsOutput>()?;
    let mut gop = boot::open_protocol_exclusive::<GraphicsOutput>(gop_handle)?;

    let input_handle = boot::get_handle_for_protocol::<Input>()?;
    let mut input = boot::open_protocol_exclusive::<Input>(input_handle)?;

    let display = GopDisplay::new(&mut gop);
    let area = config.app_rect(display.size());
    let surface = GraphicsSurface::new(display, config.theme.palette()).with_app_rect(area);

    let menu = settings(core::mem::take(&mut config.menu));
    let mut session =
        Session::new(surface, Firmware, config.translations).with_buttons(config.buttons);
    session.show_menu(Some(menu));

    while !session.is_idle() {
        let Some(event) = input.wait_for_key_event() else {
            log::error!("keyboard has no key event");
            break;
        };
        boot::wait_for_event(&mut [event])
            .map_err(|_| uefi::Error::from(Status::INVALID_PARAMETER))?;

        let button = match input.read_key()? {
            Some(Key::Special(ScanCode::UP | ScanCode::LEFT)) => Button::Up,
            Some(Key::Special(ScanCode::DOWN | ScanCode::RIGHT)) => Button::Down,
            Some(Key::Printable(c)) if c == '\r' || c == '\n' => Button::Select,
            Some(Key::Special(ScanCode::ESCAPE)) => {
                session.show_menu(None);
                continue;
            }
            _ => continue,
        };
        session.button(button);
        if let Some(answer) = session.take_answer() {
            info!("prompt answered {}", answer);
        }
    }

    Ok(())
}

#[entry]
fn main() -> Status {
    if uefi::helpers::init().is_err() {
        return Status::ABORTED;
    }
    info!("Initialized UEFI helpers successfully.");

    match run() {
        Ok(()) => Status::SUCCESS,
        Err(e) => {
            log::error!("wristmenu failed: {:?}", e);
            e.status()
        }
    }
}
